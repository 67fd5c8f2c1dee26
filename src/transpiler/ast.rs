use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ContractDefinition {
    pub name: String,
    /// The source language has no inheritance, so this is always empty.
    pub base_contracts: Vec<String>,
    pub sub_nodes: Vec<SubNode>,
    pub kind: String,
}

impl ContractDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        ContractDefinition {
            name: name.into(),
            base_contracts: Vec::new(),
            sub_nodes: Vec::new(),
            kind: "contract".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SubNode {
    StateVariableDeclaration(StateVariableDeclaration),
    FunctionDefinition(FunctionDefinition),
    EventDefinition(EventDefinition),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateVariableDeclaration {
    /// Always exactly one entry.
    pub variables: Vec<Variable>,
    pub initial_value: Option<Literal>,
}

impl StateVariableDeclaration {
    /// Builds the declaration, storing `literal` both as the variable's
    /// expression and as the declaration's initial value.
    pub fn new(name: &str, type_name: ElementaryTypeName, literal: Option<Literal>) -> Self {
        StateVariableDeclaration {
            variables: vec![Variable::state(name, type_name, literal.clone())],
            initial_value: literal,
        }
    }

    pub fn variable(&self) -> &Variable {
        &self.variables[0]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "VariableDeclaration", rename_all = "camelCase")]
pub struct Variable {
    pub type_name: ElementaryTypeName,
    pub name: Option<String>,
    pub identifier: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    pub is_state_var: bool,
    pub is_declared_const: bool,
    pub is_indexed: bool,
    pub is_immutable: bool,
    #[serde(rename = "override")]
    pub overrides: Option<Vec<String>>,
    pub storage_location: Option<String>,
}

impl Variable {
    fn named(name: &str, type_name: ElementaryTypeName) -> Self {
        Variable {
            type_name,
            name: Some(name.to_string()),
            identifier: Some(Identifier::new(name)),
            expression: None,
            visibility: None,
            is_state_var: false,
            is_declared_const: false,
            is_indexed: false,
            is_immutable: false,
            overrides: None,
            storage_location: None,
        }
    }

    pub fn state(name: &str, type_name: ElementaryTypeName, expression: Option<Literal>) -> Self {
        Variable {
            expression,
            visibility: Some(Visibility::Public),
            is_state_var: true,
            ..Variable::named(name, type_name)
        }
    }

    pub fn parameter(name: &str, type_name: ElementaryTypeName) -> Self {
        Variable::named(name, type_name)
    }

    /// Anonymous return slot of a function.
    pub fn return_slot(type_name: ElementaryTypeName) -> Self {
        Variable {
            name: None,
            identifier: None,
            ..Variable::named("", type_name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ElementaryTypeName {
    pub name: ElementaryType,
    pub state_mutability: Option<Mutability>,
}

impl ElementaryTypeName {
    pub fn new(name: ElementaryType) -> Self {
        ElementaryTypeName {
            name,
            state_mutability: None,
        }
    }

    pub fn unresolved() -> Self {
        ElementaryTypeName::new(ElementaryType::Unresolved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementaryType {
    Uint8,
    Address,
    String,
    Bool,
    /// A type name taken verbatim from the schema.
    Named(String),
    /// Neither the node nor the schema supplied a type. Serialized as an
    /// empty name.
    Unresolved,
}

impl ElementaryType {
    /// Maps a constructor-style call (`u8(5)`, `address("0x..")`) to the
    /// type it constructs.
    pub fn from_constructor(callee: &str) -> Option<Self> {
        match callee {
            "u8" => Some(ElementaryType::Uint8),
            "address" => Some(ElementaryType::Address),
            _ => None,
        }
    }

    /// Maps a schema type name, accepting both source and target spellings.
    pub fn from_schema(name: &str) -> Self {
        match name {
            "u8" | "uint8" => ElementaryType::Uint8,
            "address" => ElementaryType::Address,
            "string" => ElementaryType::String,
            "bool" => ElementaryType::Bool,
            "" => ElementaryType::Unresolved,
            other => ElementaryType::Named(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ElementaryType::Uint8 => "uint8",
            ElementaryType::Address => "address",
            ElementaryType::String => "string",
            ElementaryType::Bool => "bool",
            ElementaryType::Named(name) => name,
            ElementaryType::Unresolved => "",
        }
    }

    pub fn is_resolved(&self) -> bool {
        *self != ElementaryType::Unresolved
    }
}

impl Serialize for ElementaryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: &str) -> Self {
        Identifier {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Internal,
    External,
}

impl Visibility {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            "internal" => Some(Visibility::Internal),
            "external" => Some(Visibility::External),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mutability {
    Pure,
    View,
    Payable,
}

impl Mutability {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "pure" => Some(Mutability::Pure),
            "view" => Some(Mutability::View),
            "payable" => Some(Mutability::Payable),
            _ => None,
        }
    }
}

/// Literal payloads. `NumberLiteral` also carries address literals such as
/// `0xabc`, matching how Solidity tooling tags hex literals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Literal {
    NumberLiteral {
        number: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        subdenomination: Option<String>,
    },
    StringLiteral {
        value: String,
        parts: Vec<String>,
        #[serde(rename = "isUnicode")]
        is_unicode: Vec<bool>,
    },
    BooleanLiteral {
        value: bool,
    },
}

impl Literal {
    pub fn number(number: impl Into<String>) -> Self {
        Literal::NumberLiteral {
            number: number.into(),
            subdenomination: None,
        }
    }

    /// Single-part, non-unicode string literal.
    pub fn string(value: &str) -> Self {
        Literal::StringLiteral {
            value: value.to_string(),
            parts: vec![value.to_string()],
            is_unicode: vec![false],
        }
    }

    pub fn boolean(value: bool) -> Self {
        Literal::BooleanLiteral { value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDefinition {
    pub name: String,
    pub parameters: Vec<Variable>,
    pub return_parameters: Vec<Variable>,
    pub body: Block,
    pub visibility: Visibility,
    pub modifiers: Vec<String>,
    #[serde(rename = "override")]
    pub overrides: Option<Vec<String>>,
    pub is_constructor: bool,
    pub is_receive_ether: bool,
    pub is_fallback: bool,
    pub is_virtual: bool,
    pub state_mutability: Option<Mutability>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Block {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    ReturnStatement { expression: Expression },
}

/// Expressions a function body can carry. Literals only appear on
/// variables, as `Literal`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    Binary(BinaryExpression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BinaryExpression {
    pub operator: String,
    pub left: Identifier,
    pub right: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
    pub name: String,
    pub parameters: Vec<Variable>,
    pub is_anonymous: bool,
}
