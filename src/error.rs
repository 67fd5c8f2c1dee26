use std::fmt;

use thiserror::Error;

/// Identifies the source node a diagnostic refers to: its `type` tag and,
/// when it could be read, its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub kind: String,
    pub name: Option<String>,
}

impl Location {
    pub fn new(kind: impl Into<String>) -> Self {
        Location {
            kind: kind.into(),
            name: None,
        }
    }

    pub fn named(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Location {
            kind: kind.into(),
            name: Some(name.into()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} `{}`", self.kind, name),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LowerError {
    #[error("malformed input at {location}: {detail}")]
    MalformedInput { location: Location, detail: String },

    #[error("unsupported construct `{construct}` at {location}")]
    UnsupportedConstruct { location: Location, construct: String },
}

impl LowerError {
    pub fn malformed(location: &Location, detail: impl Into<String>) -> Self {
        LowerError::MalformedInput {
            location: location.clone(),
            detail: detail.into(),
        }
    }

    pub fn unsupported(location: &Location, construct: impl Into<String>) -> Self {
        LowerError::UnsupportedConstruct {
            location: location.clone(),
            construct: construct.into(),
        }
    }
}

pub type LowerResult<T> = Result<T, LowerError>;

/// Non-fatal findings. Lowering still produces a node for the element
/// the warning refers to, except for `UnroutedNode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The schema has no entry for a name the pass needed; an unresolved
    /// type placeholder was emitted instead.
    SchemaLookupMiss { location: Location, entry: String },
    /// A top-level body element of a kind the dispatcher does not route.
    UnroutedNode { kind: String, index: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::SchemaLookupMiss { location, entry } => {
                write!(f, "no schema entry for {} (needed by {}), type left unresolved", entry, location)
            }
            Warning::UnroutedNode { kind, index } => {
                write!(f, "skipped body element #{} of unsupported kind {}", index, kind)
            }
        }
    }
}
