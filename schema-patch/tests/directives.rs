use pretty_assertions::assert_eq;
use schema_patch::Change;
use schema_patch::PatchConfig;
use schema_patch::PatchError;
use schema_patch::meta;

use super::patched;
use super::reprint;

const SDL: &str = r#"
    type Query { a: Int }
    "Caching hints"
    directive @cache(maxAge: Int = 60, "Who may cache" scope: String) on FIELD_DEFINITION
"#;

fn rejected(change: Change) -> PatchError {
    schema_patch::patch_sdl(SDL, &[change], &PatchConfig::strict()).unwrap_err()
}

#[test]
fn adds_directive_definitions() {
    let changes = [
        Change::new(
            "@auth",
            meta::DirectiveAdded {
                added_directive_name: "auth".to_owned(),
                added_directive_repeatable: true,
                added_directive_locations: vec!["OBJECT".to_owned(), "FIELD_DEFINITION".to_owned()],
                added_directive_description: Some("Access control".to_owned()),
            },
        ),
        // Paths without the sigil address the same definition.
        Change::new(
            "auth.role",
            meta::DirectiveArgumentAdded {
                directive_name: "auth".to_owned(),
                added_directive_argument_name: "role".to_owned(),
                added_directive_argument_type: "String!".to_owned(),
                added_directive_default_value: Some("\"USER\"".to_owned()),
                ..Default::default()
            },
        ),
    ];
    let expected = format!(
        "{SDL}\n{}",
        r#""Access control" directive @auth(role: String! = "USER") repeatable on OBJECT | FIELD_DEFINITION"#
    );
    assert_eq!(patched(SDL, &changes), reprint(&expected));
}

#[test]
fn edits_directive_definitions() {
    let changes = [
        Change::new(
            "@cache",
            meta::DirectiveDescriptionChanged {
                directive_name: "cache".to_owned(),
                old_directive_description: Some("Caching hints".to_owned()),
                new_directive_description: None,
            },
        ),
        Change::new(
            "@cache",
            meta::DirectiveLocationAdded {
                directive_name: "cache".to_owned(),
                added_directive_location: "OBJECT".to_owned(),
            },
        ),
        Change::new(
            "@cache",
            meta::DirectiveLocationRemoved {
                directive_name: "cache".to_owned(),
                removed_directive_location: "FIELD_DEFINITION".to_owned(),
            },
        ),
        Change::new(
            "@cache.maxAge",
            meta::DirectiveArgumentDefaultValueChanged {
                directive_name: "cache".to_owned(),
                directive_argument_name: "maxAge".to_owned(),
                old_directive_argument_default_value: Some("60".to_owned()),
                new_directive_argument_default_value: Some("120".to_owned()),
            },
        ),
        Change::new(
            "@cache.maxAge",
            meta::DirectiveArgumentTypeChanged {
                directive_name: "cache".to_owned(),
                directive_argument_name: "maxAge".to_owned(),
                old_directive_argument_type: "Int".to_owned(),
                new_directive_argument_type: "Int!".to_owned(),
            },
        ),
        Change::new(
            "@cache.scope",
            meta::DirectiveArgumentDescriptionChanged {
                directive_name: "cache".to_owned(),
                directive_argument_name: "scope".to_owned(),
                old_directive_argument_description: Some("Who may cache".to_owned()),
                new_directive_argument_description: Some("Cache scope".to_owned()),
            },
        ),
    ];
    let expected = r#"
        type Query { a: Int }
        directive @cache(maxAge: Int! = 120, "Cache scope" scope: String) on OBJECT
    "#;
    assert_eq!(patched(SDL, &changes), reprint(expected));
}

#[test]
fn removes_directive_definitions() {
    let changes = [
        Change::new(
            "@cache.scope",
            meta::DirectiveArgumentRemoved {
                directive_name: "cache".to_owned(),
                removed_directive_argument_name: "scope".to_owned(),
            },
        ),
        Change::new(
            "@cache",
            meta::DirectiveRemoved {
                removed_directive_name: "cache".to_owned(),
            },
        ),
    ];
    assert_eq!(patched(SDL, &changes), reprint("type Query { a: Int }"));
}

#[test]
fn location_guards() {
    assert_eq!(
        rejected(Change::new(
            "@cache",
            meta::DirectiveLocationAdded {
                directive_name: "cache".to_owned(),
                added_directive_location: "FIELD_DEFINITION".to_owned(),
            },
        )),
        PatchError::DirectiveLocationAlreadyExists {
            directive_name: "cache".to_owned(),
            location: "FIELD_DEFINITION".to_owned(),
        }
    );
    assert_eq!(
        rejected(Change::new(
            "@cache",
            meta::DirectiveLocationRemoved {
                directive_name: "cache".to_owned(),
                removed_directive_location: "OBJECT".to_owned(),
            },
        )),
        PatchError::DirectiveLocationNotFound {
            directive_name: "cache".to_owned(),
            location: "OBJECT".to_owned(),
        }
    );
    assert_eq!(
        rejected(Change::new(
            "@cache",
            meta::DirectiveLocationAdded {
                directive_name: "cache".to_owned(),
                added_directive_location: "NOWHERE".to_owned(),
            },
        )),
        PatchError::InvalidDirectiveLocation {
            source_text: "NOWHERE".to_owned(),
        }
    );
}

#[test]
fn argument_guards() {
    assert_eq!(
        rejected(Change::new(
            "@cache.maxAge",
            meta::DirectiveArgumentDefaultValueChanged {
                directive_name: "cache".to_owned(),
                directive_argument_name: "maxAge".to_owned(),
                old_directive_argument_default_value: Some("30".to_owned()),
                new_directive_argument_default_value: Some("120".to_owned()),
            },
        )),
        PatchError::ArgumentDefaultValueMismatch {
            expected: Some("30".to_owned()),
            received: Some("60".to_owned()),
        }
    );
    assert_eq!(
        rejected(Change::new(
            "@cache.scope",
            meta::DirectiveArgumentDescriptionChanged {
                directive_name: "cache".to_owned(),
                directive_argument_name: "scope".to_owned(),
                old_directive_argument_description: None,
                new_directive_argument_description: Some("Cache scope".to_owned()),
            },
        )),
        PatchError::ArgumentDescriptionMismatch {
            expected: None,
            received: Some("Who may cache".to_owned()),
        }
    );
    assert_eq!(
        rejected(Change::new(
            "@cache.maxAge",
            meta::DirectiveArgumentTypeChanged {
                directive_name: "cache".to_owned(),
                directive_argument_name: "maxAge".to_owned(),
                old_directive_argument_type: "String".to_owned(),
                new_directive_argument_type: "Int!".to_owned(),
            },
        )),
        PatchError::OldTypeMismatch {
            expected: "String".to_owned(),
            received: "Int".to_owned(),
        }
    );
}

#[test]
fn description_guard() {
    assert_eq!(
        rejected(Change::new(
            "@cache",
            meta::DirectiveDescriptionChanged {
                directive_name: "cache".to_owned(),
                old_directive_description: Some("Stale".to_owned()),
                new_directive_description: Some("New".to_owned()),
            },
        )),
        PatchError::OldValueMismatch {
            expected: Some("Stale".to_owned()),
            received: Some("Caching hints".to_owned()),
        }
    );
}

#[test]
fn removing_a_missing_directive() {
    assert_eq!(
        rejected(Change::new(
            "@missing",
            meta::DirectiveRemoved {
                removed_directive_name: "missing".to_owned(),
            },
        )),
        PatchError::CoordinateNotFound {
            coordinate: "@missing".to_owned(),
        }
    );
}
