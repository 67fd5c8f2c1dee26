pub mod ast;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::error::{Location, LowerError, LowerResult};
use ast::*;

type Node = Map<String, Value>;

/// Reads the input document and validates the contract root. Body elements
/// are left for [`body_node`] to decode.
pub fn parse(source: &str) -> Result<SourceContract> {
    let root: Value = serde_json::from_str(source)
        .with_context(|| "Failed to parse input AST, invalid JSON")?;
    Ok(contract(root)?)
}

pub fn contract(root: Value) -> LowerResult<SourceContract> {
    let location = Location::new("Contract");
    let mut node = match root {
        Value::Object(node) => node,
        other => {
            return Err(LowerError::malformed(
                &location,
                format!("expected a contract node, found {}", describe(&other)),
            ))
        }
    };

    let name = str_field(&node, "name", &location)?.to_string();
    let location = Location::named("Contract", &name);

    match node.remove("body") {
        Some(Value::Array(body)) => Ok(SourceContract { name, body }),
        Some(other) => Err(LowerError::malformed(
            &location,
            format!("`body` is not a sequence, found {}", describe(&other)),
        )),
        None => Err(LowerError::malformed(&location, "missing `body`")),
    }
}

pub fn body_node(value: &Value) -> LowerResult<BodyNode> {
    let location = Location::new("body element");
    let node = object(value, &location)?;

    match kind(node, &location)? {
        "VariableStatement" => {
            let location = Location::new("VariableStatement");
            let declarations = array_field(node, "declarations", &location)?;
            Ok(BodyNode::VariableStatement(VariableStatement {
                declarations: declarations.clone(),
            }))
        }
        "FunctionDeclaration" => function_declaration(node).map(BodyNode::FunctionDeclaration),
        other => Ok(BodyNode::Other(other.to_string())),
    }
}

pub fn declarator(value: &Value) -> LowerResult<Declarator> {
    let location = Location::new("VariableDeclarator");
    let node = object(value, &location)?;
    let id = object_field(node, "id", &location)?;
    let name = str_field(id, "name", &location)?.to_string();
    let location = Location::named("VariableDeclarator", &name);

    let initializer = match node.get("initializer") {
        None | Some(Value::Null) => None,
        Some(value) => Some(initializer(value, &location)?),
    };

    Ok(Declarator { name, initializer })
}

fn initializer(value: &Value, location: &Location) -> LowerResult<Initializer> {
    let node = object(value, location)?;

    match kind(node, location)? {
        "StringLiteral" => Ok(Initializer::StringLiteral(
            str_field(node, "value", location)?.to_string(),
        )),
        "BooleanLiteral" => match field(node, "value", location)? {
            Value::Bool(value) => Ok(Initializer::BooleanLiteral(*value)),
            other => Err(LowerError::malformed(
                location,
                format!("BooleanLiteral `value` is a {}", describe(other)),
            )),
        },
        "CallExpression" => {
            let callee = object_field(node, "callee", location)?;
            let callee = str_field(callee, "name", location)?.to_string();
            let arguments = array_field(node, "arguments", location)?
                .iter()
                .map(|arg| argument(arg, location))
                .collect::<LowerResult<Vec<_>>>()?;
            Ok(Initializer::Call(CallExpression { callee, arguments }))
        }
        other => Ok(Initializer::Other(other.to_string())),
    }
}

fn argument(value: &Value, location: &Location) -> LowerResult<Argument> {
    let node = object(value, location)?;

    Ok(match node.get("value") {
        Some(Value::Number(number)) => Argument::Number(number.clone()),
        Some(Value::String(text)) => Argument::String(text.clone()),
        _ => Argument::Other(
            node.get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
        ),
    })
}

fn function_declaration(node: &Node) -> LowerResult<FunctionDeclaration> {
    let location = Location::new("FunctionDeclaration");
    let name = object_field(node, "name", &location)?;
    let name = str_field(name, "name", &location)?.to_string();
    let location = Location::named("FunctionDeclaration", &name);

    let params = array_field(node, "params", &location)?
        .iter()
        .map(|param| param_name(object(param, &location)?, &location))
        .collect::<LowerResult<Vec<_>>>()?;

    // `body` is either the statement list itself or a block wrapping it.
    let body = match node.get("body") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(statements)) => statements.clone(),
        Some(Value::Object(block)) => array_field(block, "body", &location)?.clone(),
        Some(other) => {
            return Err(LowerError::malformed(
                &location,
                format!("`body` is neither a block nor a sequence, found {}", describe(other)),
            ))
        }
    };

    Ok(FunctionDeclaration { name, params, body })
}

fn param_name(param: &Node, location: &Location) -> LowerResult<String> {
    match field(param, "name", location)? {
        Value::String(name) => Ok(name.clone()),
        Value::Object(identifier) => Ok(str_field(identifier, "name", location)?.to_string()),
        other => Err(LowerError::malformed(
            location,
            format!("parameter `name` is a {}", describe(other)),
        )),
    }
}

/// Decodes one statement of a function body. `function` locates the
/// enclosing function in diagnostics.
pub fn statement(value: &Value, function: &Location) -> LowerResult<SourceStatement> {
    let node = object(value, function)?;

    match kind(node, function)? {
        "ReturnStatement" => {
            let argument = object_field(node, "argument", function)?;
            match kind(argument, function)? {
                "BinaryExpression" => {
                    let operator = str_field(argument, "operator", function)?.to_string();
                    let left = operand(object_field(argument, "left", function)?, function)?;
                    let right = operand(object_field(argument, "right", function)?, function)?;
                    Ok(SourceStatement::Return(ReturnArgument::Binary(BinaryExpression {
                        operator,
                        left,
                        right,
                    })))
                }
                other => Ok(SourceStatement::Return(ReturnArgument::Other(other.to_string()))),
            }
        }
        other => Ok(SourceStatement::Other(other.to_string())),
    }
}

// Binary operands must be identifier references.
fn operand(node: &Node, location: &Location) -> LowerResult<String> {
    match (node.get("name"), node.get("type").and_then(Value::as_str)) {
        (Some(Value::String(name)), _) => Ok(name.clone()),
        (_, Some(kind)) if kind != "Identifier" => Err(LowerError::unsupported(
            location,
            format!("{} operand", kind),
        )),
        _ => Err(LowerError::malformed(location, "operand is missing `name`")),
    }
}

fn object<'a>(value: &'a Value, location: &Location) -> LowerResult<&'a Node> {
    value.as_object().ok_or_else(|| {
        LowerError::malformed(location, format!("expected a node, found {}", describe(value)))
    })
}

fn kind<'a>(node: &'a Node, location: &Location) -> LowerResult<&'a str> {
    str_field(node, "type", location)
}

fn field<'a>(node: &'a Node, name: &str, location: &Location) -> LowerResult<&'a Value> {
    node.get(name)
        .ok_or_else(|| LowerError::malformed(location, format!("missing `{}`", name)))
}

fn str_field<'a>(node: &'a Node, name: &str, location: &Location) -> LowerResult<&'a str> {
    let value = field(node, name, location)?;
    value.as_str().ok_or_else(|| {
        LowerError::malformed(location, format!("`{}` is a {}, not a string", name, describe(value)))
    })
}

fn object_field<'a>(node: &'a Node, name: &str, location: &Location) -> LowerResult<&'a Node> {
    let value = field(node, name, location)?;
    value.as_object().ok_or_else(|| {
        LowerError::malformed(location, format!("`{}` is a {}, not a node", name, describe(value)))
    })
}

fn array_field<'a>(node: &'a Node, name: &str, location: &Location) -> LowerResult<&'a Vec<Value>> {
    let value = field(node, name, location)?;
    value.as_array().ok_or_else(|| {
        LowerError::malformed(location, format!("`{}` is a {}, not a sequence", name, describe(value)))
    })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "node",
    }
}
