use apollo_compiler::ast;
use pretty_assertions::assert_eq;
use schema_patch::Change;
use schema_patch::ErrorPolicy;
use schema_patch::PatchConfig;
use schema_patch::PatchError;
use schema_patch::SchemaIndex;
use schema_patch::meta;

use super::reprint;

const SDL: &str = "type Query { a: Int }";

fn changes() -> Vec<Change> {
    vec![
        Change::new(
            "Query.b",
            meta::FieldAdded {
                type_name: "Query".to_owned(),
                added_field_name: "b".to_owned(),
                added_field_return_type: "Int".to_owned(),
                ..Default::default()
            },
        ),
        Change::new(
            "Missing.x",
            meta::FieldAdded {
                type_name: "Missing".to_owned(),
                added_field_name: "x".to_owned(),
                added_field_return_type: "Int".to_owned(),
                ..Default::default()
            },
        ),
        Change::new(
            "Query.c",
            meta::FieldAdded {
                type_name: "Query".to_owned(),
                added_field_name: "c".to_owned(),
                added_field_return_type: "Int".to_owned(),
                ..Default::default()
            },
        ),
    ]
}

fn index() -> SchemaIndex {
    SchemaIndex::new(&ast::Document::parse(SDL, "schema.graphql").unwrap())
}

#[test]
fn best_effort_skips_failing_changes() {
    let mut index = index();
    let config = PatchConfig::default();
    assert_eq!(config.error_policy, ErrorPolicy::BestEffort);
    assert_eq!(schema_patch::apply(&mut index, &changes(), &config), Ok(()));
    assert_eq!(
        index.to_document().to_string(),
        reprint("type Query { a: Int b: Int c: Int }")
    );
}

#[test]
fn strict_stops_at_the_first_failure() {
    let mut index = index();
    assert_eq!(
        schema_patch::apply(&mut index, &changes(), &PatchConfig::strict()),
        Err(PatchError::CoordinateNotFound {
            coordinate: "Missing".to_owned(),
        })
    );
    // Changes before the failing one stay applied.
    assert_eq!(
        index.to_document().to_string(),
        reprint("type Query { a: Int b: Int }")
    );
}

#[test]
fn strict_patch_returns_the_error() {
    let error = schema_patch::patch_sdl(SDL, &changes(), &PatchConfig::strict()).unwrap_err();
    assert_eq!(error.to_string(), "Cannot find `Missing` in the schema");
}

#[test]
fn exit_on_error_flag() {
    assert_eq!(ErrorPolicy::from_exit_on_error(true), ErrorPolicy::Strict);
    assert_eq!(ErrorPolicy::from_exit_on_error(false), ErrorPolicy::BestEffort);
}
