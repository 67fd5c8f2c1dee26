use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{App, Arg};
use log::{error, info, warn};

use ast2sol::schema::{self, Schema};
use ast2sol::transpiler::{self, LowerOptions, Mode};
use ast2sol::{generator, parser};

fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("ast2sol")
        .version("0.1.0")
        .author("Contract AST lowering")
        .about("Lowers a parsed contract AST into a Solidity-schema contract AST")
        .arg(
            Arg::with_name("INPUT")
                .help("Input AST file (JSON)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("schema")
                .short("s")
                .long("schema")
                .value_name("FILE")
                .help("Schema file (YAML) with types and visibility")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Output file for the lowered AST, stdout if omitted")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Abort on the first node that fails to lower"),
        )
        .arg(
            Arg::with_name("events")
                .long("events")
                .help("Emit event definitions declared in the schema"),
        )
        .get_matches();

    let input_file = matches.value_of("INPUT").context("Missing input file")?;

    let source = fs::read_to_string(input_file)
        .with_context(|| format!("Failed to read input file: {}", input_file))?;
    let contract = parser::parse(&source)
        .with_context(|| format!("Failed to load contract from {}", input_file))?;

    let schema = match matches.value_of("schema") {
        Some(path) => schema::load(Path::new(path))?,
        None => Schema::default(),
    };

    let options = LowerOptions {
        mode: if matches.is_present("strict") {
            Mode::Strict
        } else {
            Mode::Permissive
        },
        emit_events: matches.is_present("events"),
    };

    let lowered = transpiler::convert(&contract, &schema, &options)
        .with_context(|| format!("Failed to lower {}", contract.name))?;

    for warning in &lowered.warnings {
        warn!("{}", warning);
    }
    for err in &lowered.errors {
        error!("{}", err);
    }

    let json = generator::generate(&lowered.contract)?;

    match matches.value_of("output") {
        Some(output_file) => {
            fs::write(output_file, json)
                .with_context(|| format!("Failed to write output file: {}", output_file))?;
            info!("Lowered {} to {}", contract.name, output_file);
        }
        None => print!("{}", json),
    }

    if !lowered.is_clean() {
        bail!("{} node(s) of {} failed to lower", lowered.errors.len(), contract.name);
    }

    Ok(())
}
