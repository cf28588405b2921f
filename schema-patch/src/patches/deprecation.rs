//! `@deprecated` usages on fields and enum values.

use apollo_compiler::Node;
use apollo_compiler::ast;

use crate::error::PatchError;
use crate::templates;
use crate::templates::DEFAULT_DEPRECATION_REASON;
use crate::templates::DEPRECATED_DIRECTIVE_NAME;
use crate::templates::DEPRECATION_REASON_ARGUMENT_NAME;

fn deprecated_mut(directives: &mut ast::DirectiveList) -> Option<&mut Node<ast::Directive>> {
    directives
        .0
        .iter_mut()
        .find(|directive| directive.name == DEPRECATED_DIRECTIVE_NAME)
}

fn explicit_reason(directive: &ast::Directive) -> Option<&str> {
    directive
        .specified_argument_by_name(DEPRECATION_REASON_ARGUMENT_NAME.as_str())
        .and_then(|value| value.as_str())
}

fn not_found(coordinate: &str) -> PatchError {
    PatchError::DirectiveNotFound {
        coordinate: coordinate.to_owned(),
        name: DEPRECATED_DIRECTIVE_NAME.to_string(),
    }
}

fn replace_reason(directive: &mut Node<ast::Directive>, reason: Option<&str>) {
    let arguments = &mut directive.make_mut().arguments;
    arguments.retain(|argument| argument.name != DEPRECATION_REASON_ARGUMENT_NAME);
    arguments.extend(reason.and_then(templates::deprecation_reason));
}

/// Checks the reason in effect, which is the default one when none is given.
fn check_reason(directive: &ast::Directive, old: Option<&str>) -> Result<(), PatchError> {
    let current = explicit_reason(directive).unwrap_or(DEFAULT_DEPRECATION_REASON);
    match old {
        Some(old) if old != current => Err(PatchError::OldValueMismatch {
            expected: Some(old.to_owned()),
            received: Some(current.to_owned()),
        }),
        _ => Ok(()),
    }
}

pub(super) fn add(
    directives: &mut ast::DirectiveList,
    coordinate: &str,
    reason: Option<&str>,
) -> Result<(), PatchError> {
    if deprecated_mut(directives).is_some() {
        return Err(PatchError::DirectiveAlreadyExists {
            coordinate: coordinate.to_owned(),
            name: DEPRECATED_DIRECTIVE_NAME.to_string(),
        });
    }
    directives.0.push(templates::deprecated_directive(reason));
    Ok(())
}

pub(super) fn remove(directives: &mut ast::DirectiveList, coordinate: &str) -> Result<(), PatchError> {
    let before = directives.0.len();
    directives
        .0
        .retain(|directive| directive.name != DEPRECATED_DIRECTIVE_NAME);
    if directives.0.len() == before {
        return Err(not_found(coordinate));
    }
    Ok(())
}

/// Gives an existing `@deprecated` usage a reason. With `create_missing`, a usage is created
/// when there is none.
pub(super) fn add_reason(
    directives: &mut ast::DirectiveList,
    coordinate: &str,
    reason: &str,
    create_missing: bool,
) -> Result<(), PatchError> {
    match deprecated_mut(directives) {
        Some(directive) => {
            if let Some(existing) = explicit_reason(directive) {
                return Err(PatchError::DeprecationReasonAlreadyExists {
                    coordinate: coordinate.to_owned(),
                    reason: existing.to_owned(),
                });
            }
            replace_reason(directive, Some(reason));
            Ok(())
        }
        None if create_missing => {
            directives.0.push(templates::deprecated_directive(Some(reason)));
            Ok(())
        }
        None => Err(not_found(coordinate)),
    }
}

pub(super) fn change_reason(
    directives: &mut ast::DirectiveList,
    coordinate: &str,
    old: Option<&str>,
    new: &str,
) -> Result<(), PatchError> {
    let directive = deprecated_mut(directives).ok_or_else(|| not_found(coordinate))?;
    check_reason(directive, old)?;
    replace_reason(directive, Some(new));
    Ok(())
}

pub(super) fn remove_reason(
    directives: &mut ast::DirectiveList,
    coordinate: &str,
    old: Option<&str>,
) -> Result<(), PatchError> {
    let directive = deprecated_mut(directives).ok_or_else(|| not_found(coordinate))?;
    check_reason(directive, old)?;
    replace_reason(directive, None);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directives(sdl_directives: &str) -> ast::DirectiveList {
        let document =
            ast::Document::parse(format!("scalar S {sdl_directives}"), "schema.graphql").unwrap();
        match &document.definitions[0] {
            ast::Definition::ScalarTypeDefinition(scalar) => scalar.directives.clone(),
            other => panic!("unexpected definition {other:?}"),
        }
    }

    fn render(list: &ast::DirectiveList) -> Vec<String> {
        list.iter().map(|directive| directive.to_string()).collect()
    }

    #[test]
    fn reason_lifecycle() {
        let mut list = directives("@other");
        add(&mut list, "S", None).unwrap();
        assert_eq!(render(&list), ["@other", "@deprecated"]);
        add_reason(&mut list, "S", "use T", false).unwrap();
        assert_eq!(
            render(&list),
            ["@other", r#"@deprecated(reason: "use T")"#]
        );
        assert_eq!(
            add_reason(&mut list, "S", "again", false),
            Err(PatchError::DeprecationReasonAlreadyExists {
                coordinate: "S".to_owned(),
                reason: "use T".to_owned(),
            })
        );
        change_reason(&mut list, "S", Some("use T"), "use U").unwrap();
        remove_reason(&mut list, "S", Some("use U")).unwrap();
        assert_eq!(render(&list), ["@other", "@deprecated"]);
        remove(&mut list, "S").unwrap();
        assert_eq!(render(&list), ["@other"]);
    }

    #[test]
    fn missing_directive() {
        let mut list = directives("");
        assert_eq!(
            add_reason(&mut list, "S", "why", false),
            Err(PatchError::DirectiveNotFound {
                coordinate: "S".to_owned(),
                name: "deprecated".to_owned(),
            })
        );
        add_reason(&mut list, "S", "why", true).unwrap();
        assert_eq!(render(&list), [r#"@deprecated(reason: "why")"#]);
    }

    #[test]
    fn implicit_reason_is_the_default_one() {
        let mut list = directives("@deprecated");
        assert_eq!(
            change_reason(&mut list, "S", Some("stale"), "new"),
            Err(PatchError::OldValueMismatch {
                expected: Some("stale".to_owned()),
                received: Some(DEFAULT_DEPRECATION_REASON.to_owned()),
            })
        );
        change_reason(&mut list, "S", Some(DEFAULT_DEPRECATION_REASON), "new").unwrap();
        assert_eq!(render(&list), [r#"@deprecated(reason: "new")"#]);
    }
}
