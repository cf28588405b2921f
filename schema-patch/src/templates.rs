//! Constructors for the AST fragments inserted by patch handlers.
//!
//! Change records carry type references, default values and directive locations as text. These
//! are parsed by wrapping them in a minimal SDL snippet, which keeps the full GraphQL grammar
//! available without exposing the parser's internals.

use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::ast;
use apollo_compiler::ast::DirectiveLocation;
use apollo_compiler::name;

use crate::error::PatchError;

pub(crate) const DEPRECATED_DIRECTIVE_NAME: Name = name!("deprecated");
pub(crate) const DEPRECATION_REASON_ARGUMENT_NAME: Name = name!("reason");
pub(crate) const ONE_OF_DIRECTIVE_NAME: Name = name!("oneOf");
/// The reason printers assume when `@deprecated` has no `reason` argument.
pub(crate) const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

const SNIPPET_PATH: &str = "change.graphql";

pub(crate) fn name(name: &str) -> Result<Name, PatchError> {
    Name::new(name).map_err(|_| PatchError::InvalidName {
        name: name.to_owned(),
    })
}

pub(crate) fn description(text: Option<&str>) -> Option<Node<str>> {
    text.map(Into::into)
}

pub(crate) fn string_value(value: &str) -> Node<ast::Value> {
    Node::new(ast::Value::String(value.to_owned()))
}

pub(crate) fn directive(name: Name, arguments: Vec<Node<ast::Argument>>) -> Node<ast::Directive> {
    Node::new(ast::Directive { name, arguments })
}

/// The `reason` argument of `@deprecated`, omitted for the default reason.
pub(crate) fn deprecation_reason(reason: &str) -> Option<Node<ast::Argument>> {
    (reason != DEFAULT_DEPRECATION_REASON).then(|| {
        Node::new(ast::Argument {
            name: DEPRECATION_REASON_ARGUMENT_NAME,
            value: string_value(reason),
        })
    })
}

/// Builds a `@deprecated` usage, leaving the default reason implicit.
pub(crate) fn deprecated_directive(reason: Option<&str>) -> Node<ast::Directive> {
    let arguments = reason.and_then(deprecation_reason).into_iter().collect();
    directive(DEPRECATED_DIRECTIVE_NAME, arguments)
}

fn parse_snippet(source: String) -> Option<ast::Document> {
    ast::Document::parse(source, SNIPPET_PATH).ok()
}

/// The single input value of `input __Snippet { ... }`, if the snippet parsed to exactly that.
fn snippet_input_value(source: String) -> Option<Node<ast::InputValueDefinition>> {
    let document = parse_snippet(source)?;
    let [ast::Definition::InputObjectTypeDefinition(input)] = document.definitions.as_slice() else {
        return None;
    };
    match input.fields.as_slice() {
        [field] if field.directives.is_empty() => Some(field.clone()),
        _ => None,
    }
}

/// Parses a type reference such as `[User!]!`.
pub(crate) fn parse_type(source: &str) -> Result<ast::Type, PatchError> {
    snippet_input_value(format!("input __Snippet {{ value: {source} }}"))
        .filter(|field| field.default_value.is_none())
        .map(|field| (*field.ty).clone())
        .ok_or_else(|| PatchError::InvalidType {
            source_text: source.to_owned(),
        })
}

/// Parses a constant value such as `{a: [1, 2]}`.
pub(crate) fn parse_value(source: &str) -> Result<Node<ast::Value>, PatchError> {
    snippet_input_value(format!("input __Snippet {{ value: __Any = {source} }}"))
        .and_then(|field| field.default_value.clone())
        .ok_or_else(|| PatchError::InvalidValue {
            source_text: source.to_owned(),
        })
}

/// Parses a directive location such as `FIELD_DEFINITION`.
pub(crate) fn parse_directive_location(source: &str) -> Result<DirectiveLocation, PatchError> {
    let location = parse_snippet(format!("directive @__snippet on {source}")).and_then(|document| {
        match document.definitions.as_slice() {
            [ast::Definition::DirectiveDefinition(definition)] => {
                match definition.locations.as_slice() {
                    [location] => Some(*location),
                    _ => None,
                }
            }
            _ => None,
        }
    });
    location.ok_or_else(|| PatchError::InvalidDirectiveLocation {
        source_text: source.to_owned(),
    })
}

/// Canonical text of a recorded type reference, or the raw text when it does not parse.
pub(crate) fn canonical_type(source: &str) -> String {
    parse_type(source).map_or_else(|_| source.to_owned(), |ty| ty.to_string())
}

/// Canonical text of a recorded constant value, or the raw text when it does not parse.
pub(crate) fn canonical_value(source: &str) -> String {
    parse_value(source).map_or_else(|_| source.to_owned(), |value| value.to_string())
}
