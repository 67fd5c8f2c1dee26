use super::ast::{BinaryExpression, Expression, Identifier, Statement};
use crate::error::{Location, LowerError, LowerResult};
use crate::parser::ast::{ReturnArgument, SourceStatement};

/// Only `return <identifier> <op> <identifier>;` is lowered. Anything else
/// is reported against `function`.
pub fn lower_statement(statement: &SourceStatement, function: &Location) -> LowerResult<Statement> {
    match statement {
        SourceStatement::Return(ReturnArgument::Binary(binary)) => Ok(Statement::ReturnStatement {
            expression: Expression::Binary(BinaryExpression {
                operator: binary.operator.clone(),
                left: Identifier::new(&binary.left),
                right: Identifier::new(&binary.right),
            }),
        }),
        SourceStatement::Return(ReturnArgument::Other(kind)) => Err(LowerError::unsupported(
            function,
            format!("ReturnStatement of {}", kind),
        )),
        SourceStatement::Other(kind) => Err(LowerError::unsupported(function, kind.as_str())),
    }
}
