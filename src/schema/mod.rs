use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// Declarative side table describing what the input tree leaves out:
/// state variable types, function signatures and events.
#[derive(Debug, Default, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub state: Vec<StateEntry>,
    #[serde(default)]
    pub defs: Vec<Definition>,
    #[serde(default)]
    pub events: IndexMap<String, Vec<TypedName>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub payable: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub name: String,
    /// Mixes visibility and mutability keywords, e.g. `[external, view]`.
    #[serde(default)]
    pub visibility: Vec<String>,
    /// Return type.
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
    #[serde(default)]
    pub parameters: Vec<TypedName>,
    #[serde(default)]
    pub locals: Vec<LocalEntry>,
}

impl Definition {
    pub fn parameter(&self, name: &str) -> Option<&TypedName> {
        self.parameters.iter().find(|param| param.name == name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypedName {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(rename = "inMemory", default)]
    pub in_memory: bool,
}

/// Read-only name lookups the lowering pass performs. Every method may
/// miss; callers fall back to an unresolved type.
pub trait SchemaLookup {
    fn state_variable(&self, name: &str) -> Option<&StateEntry>;
    fn definition(&self, name: &str) -> Option<&Definition>;
    /// Events in document order.
    fn events(&self) -> Vec<(&str, &[TypedName])>;
}

impl SchemaLookup for Schema {
    fn state_variable(&self, name: &str) -> Option<&StateEntry> {
        self.state.iter().find(|entry| entry.name == name)
    }

    fn definition(&self, name: &str) -> Option<&Definition> {
        self.defs.iter().find(|def| def.name == name)
    }

    fn events(&self) -> Vec<(&str, &[TypedName])> {
        self.events
            .iter()
            .map(|(name, params)| (name.as_str(), params.as_slice()))
            .collect()
    }
}

pub fn parse(source: &str) -> Result<Schema> {
    if source.trim().is_empty() {
        return Ok(Schema::default());
    }
    serde_yaml::from_str(source).with_context(|| "Failed to parse schema document")
}

pub fn load(path: &Path) -> Result<Schema> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;
    parse(&source).with_context(|| format!("Invalid schema in {}", path.display()))
}
