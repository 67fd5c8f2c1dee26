use serde_json::Number;

use super::ast::{ElementaryType, Literal};
use crate::error::{Location, LowerError, LowerResult};
use crate::parser::ast::{Argument, CallExpression, Initializer};

/// Elementary type and literal encoding decided from an initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct Inferred {
    pub ty: ElementaryType,
    pub literal: Literal,
}

pub fn infer(initializer: &Initializer, location: &Location) -> LowerResult<Inferred> {
    match initializer {
        Initializer::StringLiteral(value) => Ok(Inferred {
            ty: ElementaryType::String,
            literal: Literal::string(value),
        }),
        Initializer::BooleanLiteral(value) => Ok(Inferred {
            ty: ElementaryType::Bool,
            literal: Literal::boolean(*value),
        }),
        Initializer::Call(call) => infer_constructor(call, location),
        Initializer::Other(kind) => Err(LowerError::unsupported(location, kind.as_str())),
    }
}

fn infer_constructor(call: &CallExpression, location: &Location) -> LowerResult<Inferred> {
    let ty = ElementaryType::from_constructor(&call.callee)
        .ok_or_else(|| LowerError::unsupported(location, call.callee.as_str()))?;

    let argument = match call.arguments.as_slice() {
        [argument] => argument,
        [] => {
            return Err(LowerError::malformed(
                location,
                format!("`{}(..)` called without an argument", call.callee),
            ))
        }
        arguments => {
            return Err(LowerError::malformed(
                location,
                format!("`{}(..)` takes one argument, got {}", call.callee, arguments.len()),
            ))
        }
    };

    let literal = match (&ty, argument) {
        (ElementaryType::Uint8, Argument::Number(number)) => {
            Literal::number(format_uint8(number, location)?)
        }
        (ElementaryType::Address, Argument::String(address)) => Literal::number(address.as_str()),
        (_, other) => {
            return Err(LowerError::malformed(
                location,
                format!("`{}(..)` argument has a {} value", call.callee, other.describe()),
            ))
        }
    };

    Ok(Inferred { ty, literal })
}

/// Minimal round-trip decimal form of a `uint8` value: `5.0` becomes `"5"`.
fn format_uint8(number: &Number, location: &Location) -> LowerResult<String> {
    let value = match (number.as_u64(), number.as_f64()) {
        (Some(value), _) => u8::try_from(value).ok(),
        // `-0.0` lands here too and becomes 0.
        (None, Some(value)) if value.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&value) => {
            Some(value as u8)
        }
        _ => None,
    };

    value.map(|value| value.to_string()).ok_or_else(|| {
        LowerError::unsupported(location, format!("u8({}) outside the uint8 range", number))
    })
}
