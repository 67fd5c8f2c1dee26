use crate::transpiler::ast::ContractDefinition;
use anyhow::{Context, Result};

/// Renders the contract as pretty-printed JSON. Field order follows the
/// output AST's declaration order, so equal trees give identical text.
pub fn generate(contract: &ContractDefinition) -> Result<String> {
    let mut output = serde_json::to_string_pretty(contract)
        .with_context(|| format!("Failed to serialize contract {}", contract.name))?;
    output.push('\n');
    Ok(output)
}
