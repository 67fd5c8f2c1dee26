pub mod ast;
pub mod declaration;
pub mod function;
pub mod infer;
pub mod statement;

use log::debug;

use crate::error::{LowerError, LowerResult, Warning};
use crate::parser::{self, ast::BodyNode, ast::SourceContract};
use crate::schema::SchemaLookup;
use ast::{ContractDefinition, ElementaryType, ElementaryTypeName, EventDefinition, SubNode, Variable};
use declaration::lower_declaration;
use function::lower_function;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Stop at the first node that fails to lower.
    Strict,
    /// Record failures and keep lowering the remaining nodes.
    #[default]
    Permissive,
}

#[derive(Debug, Clone, Default)]
pub struct LowerOptions {
    pub mode: Mode,
    /// Append an `EventDefinition` for each event the schema declares.
    pub emit_events: bool,
}

/// Result of a lowering pass: the contract built from every node that
/// lowered, plus what went wrong with the rest.
#[derive(Debug, Clone)]
pub struct Lowered {
    pub contract: ContractDefinition,
    pub errors: Vec<LowerError>,
    pub warnings: Vec<Warning>,
}

impl Lowered {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

struct Outcomes {
    mode: Mode,
    errors: Vec<LowerError>,
}

impl Outcomes {
    /// Unwraps a per-node result. In strict mode the error is returned to
    /// abort the pass; otherwise it is recorded and `None` is returned.
    fn absorb<T>(&mut self, result: LowerResult<T>) -> LowerResult<Option<T>> {
        match result {
            Ok(node) => Ok(Some(node)),
            Err(err) if self.mode == Mode::Strict => Err(err),
            Err(err) => {
                self.errors.push(err);
                Ok(None)
            }
        }
    }
}

pub fn convert(
    contract: &SourceContract,
    schema: &dyn SchemaLookup,
    options: &LowerOptions,
) -> LowerResult<Lowered> {
    let mut output = ContractDefinition::new(contract.name.as_str());
    let mut outcomes = Outcomes {
        mode: options.mode,
        errors: Vec::new(),
    };
    let mut warnings = Vec::new();

    for (index, element) in contract.body.iter().enumerate() {
        let Some(node) = outcomes.absorb(parser::body_node(element))? else {
            continue;
        };

        match node {
            BodyNode::VariableStatement(statement) => {
                for declaration in &statement.declarations {
                    let lowered = parser::declarator(declaration)
                        .and_then(|declarator| lower_declaration(&declarator, schema, &mut warnings));
                    if let Some(svd) = outcomes.absorb(lowered)? {
                        debug!("Lowered state variable {:?}", svd.variable().name);
                        output.sub_nodes.push(SubNode::StateVariableDeclaration(svd));
                    }
                }
            }
            BodyNode::FunctionDeclaration(function) => {
                if let Some(def) = outcomes.absorb(lower_function(&function, schema, &mut warnings))? {
                    debug!("Lowered function {}", def.name);
                    output.sub_nodes.push(SubNode::FunctionDefinition(def));
                }
            }
            BodyNode::Other(kind) => {
                debug!("Skipping body element #{} of kind {}", index, kind);
                warnings.push(Warning::UnroutedNode { kind, index });
            }
        }
    }

    if options.emit_events {
        for (name, params) in schema.events() {
            output.sub_nodes.push(SubNode::EventDefinition(EventDefinition {
                name: name.to_string(),
                parameters: params
                    .iter()
                    .map(|param| {
                        let ty = ElementaryType::from_schema(&param.ty);
                        Variable::parameter(&param.name, ElementaryTypeName::new(ty))
                    })
                    .collect(),
                is_anonymous: false,
            }));
        }
    }

    Ok(Lowered {
        contract: output,
        errors: outcomes.errors,
        warnings,
    })
}
