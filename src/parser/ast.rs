use serde_json::{Number, Value};

/// Contract root of the input tree. Body elements stay raw and are decoded
/// one at a time, so a malformed element only fails itself.
#[derive(Debug, Clone)]
pub struct SourceContract {
    pub name: String,
    pub body: Vec<Value>,
}

#[derive(Debug, Clone)]
pub enum BodyNode {
    VariableStatement(VariableStatement),
    FunctionDeclaration(FunctionDeclaration),
    /// Any other top-level kind, carrying its `type` tag.
    Other(String),
}

#[derive(Debug, Clone)]
pub struct VariableStatement {
    pub declarations: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub name: String,
    pub initializer: Option<Initializer>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Initializer {
    StringLiteral(String),
    BooleanLiteral(bool),
    Call(CallExpression),
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: String,
    pub arguments: Vec<Argument>,
}

/// A call argument, reduced to the shape of its `value` field.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Number(Number),
    String(String),
    Other(String),
}

impl Argument {
    pub fn describe(&self) -> &str {
        match self {
            Argument::Number(_) => "number",
            Argument::String(_) => "string",
            Argument::Other(kind) => kind,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FunctionDeclaration {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceStatement {
    Return(ReturnArgument),
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReturnArgument {
    Binary(BinaryExpression),
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: String,
    pub left: String,
    pub right: String,
}
