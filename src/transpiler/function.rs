use super::ast::{
    Block, ElementaryType, ElementaryTypeName, FunctionDefinition, Mutability, Variable, Visibility,
};
use super::statement::lower_statement;
use crate::error::{Location, LowerResult, Warning};
use crate::parser;
use crate::parser::ast::FunctionDeclaration;
use crate::schema::SchemaLookup;

/// Lowers a function declaration. Parameter and return types, visibility
/// and mutability come from the schema's `defs` entry of the same name;
/// the body is lowered statement by statement.
pub fn lower_function(
    function: &FunctionDeclaration,
    schema: &dyn SchemaLookup,
    warnings: &mut Vec<Warning>,
) -> LowerResult<FunctionDefinition> {
    let location = Location::named("FunctionDeclaration", &function.name);
    let definition = schema.definition(&function.name);

    // Misses are only reported once the whole function has lowered.
    let mut misses = Vec::new();
    let mut resolve = |entry: String, ty: Option<&str>| match ty {
        Some(ty) => ElementaryTypeName::new(ElementaryType::from_schema(ty)),
        None => {
            misses.push(Warning::SchemaLookupMiss {
                location: location.clone(),
                entry,
            });
            ElementaryTypeName::unresolved()
        }
    };

    let parameters: Vec<Variable> = function
        .params
        .iter()
        .map(|param| {
            let ty = definition
                .and_then(|def| def.parameter(param))
                .map(|typed| typed.ty.as_str());
            let type_name = resolve(format!("defs.{}.parameters.{}", function.name, param), ty);
            Variable::parameter(param, type_name)
        })
        .collect();

    let return_type = resolve(
        format!("defs.{}.type", function.name),
        definition.and_then(|def| def.ty.as_deref()),
    );

    let keywords = definition.map(|def| def.visibility.as_slice()).unwrap_or_default();
    let visibility = keywords
        .iter()
        .find_map(|keyword| Visibility::from_keyword(keyword))
        .unwrap_or_default();
    let state_mutability = keywords
        .iter()
        .find_map(|keyword| Mutability::from_keyword(keyword));

    let statements = function
        .body
        .iter()
        .map(|statement| lower_statement(&parser::statement(statement, &location)?, &location))
        .collect::<LowerResult<Vec<_>>>()?;

    warnings.extend(misses);
    Ok(FunctionDefinition {
        name: function.name.clone(),
        parameters,
        return_parameters: vec![Variable::return_slot(return_type)],
        body: Block { statements },
        visibility,
        modifiers: Vec::new(),
        overrides: None,
        is_constructor: false,
        is_receive_ether: false,
        is_fallback: false,
        is_virtual: false,
        state_mutability,
    })
}
