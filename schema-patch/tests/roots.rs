use pretty_assertions::assert_eq;
use schema_patch::PatchConfig;
use schema_patch::PatchError;
use schema_patch::parse_changes;

use super::patched;
use super::reprint;

#[test]
fn materialises_a_schema_definition() {
    let changes = parse_changes(
        r#"[
            { "type": "TYPE_ADDED", "path": "Root", "meta": { "addedTypeName": "Root" } },
            { "type": "FIELD_ADDED", "path": "Root.a", "meta": { "typeName": "Root", "addedFieldName": "a", "addedFieldReturnType": "Int" } },
            { "type": "SCHEMA_QUERY_TYPE_CHANGED", "meta": { "oldQueryTypeName": "Query", "newQueryTypeName": "Root" } }
        ]"#,
    )
    .unwrap();
    let sdl = "type Query { a: Int } type Mutation { b: Int }";
    let expected = r#"
        schema { mutation: Mutation query: Root }
        type Query { a: Int }
        type Mutation { b: Int }
        type Root { a: Int }
    "#;
    assert_eq!(patched(sdl, &changes), reprint(expected));
}

#[test]
fn edits_declared_roots() {
    let changes = parse_changes(
        r#"[
            { "type": "SCHEMA_MUTATION_TYPE_CHANGED", "meta": { "oldMutationTypeName": "M", "newMutationTypeName": null } },
            { "type": "SCHEMA_SUBSCRIPTION_TYPE_CHANGED", "meta": { "oldSubscriptionTypeName": "unknown", "newSubscriptionTypeName": "S" } }
        ]"#,
    )
    .unwrap();
    let sdl = "schema { query: Q mutation: M } type Q { a: Int } type M { b: Int } type S { c: Int }";
    let expected =
        "schema { query: Q subscription: S } type Q { a: Int } type M { b: Int } type S { c: Int }";
    assert_eq!(patched(sdl, &changes), reprint(expected));
}

#[test]
fn removing_the_last_root_leaves_no_empty_schema_block() {
    let changes = parse_changes(
        r#"[{ "type": "SCHEMA_QUERY_TYPE_CHANGED", "meta": { "oldQueryTypeName": "Q", "newQueryTypeName": null } }]"#,
    )
    .unwrap();
    let declared = patched("schema { query: Q } type Q { a: Int }", &changes);
    assert_eq!(declared, reprint("type Q { a: Int }"));

    let changes = parse_changes(
        r#"[{ "type": "SCHEMA_QUERY_TYPE_CHANGED", "meta": { "oldQueryTypeName": "Query", "newQueryTypeName": null } }]"#,
    )
    .unwrap();
    let implicit = patched("type Query { a: Int }", &changes);
    assert_eq!(implicit, reprint("type Query { a: Int }"));
}

#[test]
fn stale_root_is_rejected() {
    let changes = parse_changes(
        r#"[{ "type": "SCHEMA_QUERY_TYPE_CHANGED", "meta": { "oldQueryTypeName": "Query", "newQueryTypeName": "Root" } }]"#,
    )
    .unwrap();
    let error = schema_patch::patch_sdl(
        "schema { query: Q } type Q { a: Int } type Root { a: Int }",
        &changes,
        &PatchConfig::strict(),
    )
    .unwrap_err();
    assert_eq!(
        error,
        PatchError::OldValueMismatch {
            expected: Some("Query".to_owned()),
            received: Some("Q".to_owned()),
        }
    );
}
