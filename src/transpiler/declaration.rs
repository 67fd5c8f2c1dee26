use super::ast::{ElementaryType, ElementaryTypeName, Mutability, StateVariableDeclaration};
use super::infer::infer;
use crate::error::{Location, LowerResult, Warning};
use crate::parser::ast::Declarator;
use crate::schema::SchemaLookup;

/// Lowers one declarator into a state variable declaration.
///
/// An initializer decides the type on its own. Without one the type comes
/// from the schema's `state` section, and a miss leaves it unresolved.
pub fn lower_declaration(
    declarator: &Declarator,
    schema: &dyn SchemaLookup,
    warnings: &mut Vec<Warning>,
) -> LowerResult<StateVariableDeclaration> {
    let location = Location::named("VariableDeclarator", &declarator.name);
    let entry = schema.state_variable(&declarator.name);

    let (ty, literal) = match &declarator.initializer {
        Some(initializer) => {
            let inferred = infer(initializer, &location)?;
            (inferred.ty, Some(inferred.literal))
        }
        None => match entry {
            Some(entry) => (ElementaryType::from_schema(&entry.ty), None),
            None => {
                warnings.push(Warning::SchemaLookupMiss {
                    location: location.clone(),
                    entry: format!("state.{}", declarator.name),
                });
                (ElementaryType::Unresolved, None)
            }
        },
    };

    let mut type_name = ElementaryTypeName::new(ty);
    if type_name.name == ElementaryType::Address && entry.is_some_and(|entry| entry.payable) {
        type_name.state_mutability = Some(Mutability::Payable);
    }

    Ok(StateVariableDeclaration::new(&declarator.name, type_name, literal))
}
