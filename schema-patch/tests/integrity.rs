//! The coordinate map has to describe exactly the nodes reachable from the definitions.

use apollo_compiler::ast;
use indexmap::IndexSet;
use pretty_assertions::assert_eq;
use schema_patch::PatchConfig;
use schema_patch::SchemaIndex;
use schema_patch::parse_changes;

const SDL: &str = r#"
    directive @cache(maxAge: Int, scope: String) on FIELD_DEFINITION | OBJECT
    type Query { user(id: ID!, verbose: Boolean): User legacy: Int }
    type User { id: ID! name: String }
    extend type User { email: String }
    input Filter { id: ID name: String }
    enum Role { ADMIN USER GUEST }
    union Entity = User
"#;

const CHANGES: &str = r#"[
    { "type": "FIELD_REMOVED", "path": "Query.legacy", "meta": { "typeName": "Query", "removedFieldName": "legacy" } },
    { "type": "FIELD_ARGUMENT_REMOVED", "path": "Query.user.verbose", "meta": { "typeName": "Query", "fieldName": "user", "removedFieldArgumentName": "verbose" } },
    { "type": "FIELD_REMOVED", "path": "User.email", "meta": { "typeName": "User", "removedFieldName": "email" } },
    { "type": "INPUT_FIELD_REMOVED", "path": "Filter.name", "meta": { "inputName": "Filter", "removedFieldName": "name" } },
    { "type": "ENUM_VALUE_REMOVED", "path": "Role.GUEST", "meta": { "enumName": "Role", "removedEnumValueName": "GUEST" } },
    { "type": "DIRECTIVE_ARGUMENT_REMOVED", "path": "@cache.scope", "meta": { "directiveName": "cache", "removedDirectiveArgumentName": "scope" } },
    { "type": "TYPE_ADDED", "path": "Post", "meta": { "addedTypeName": "Post", "addedTypeKind": "ObjectTypeDefinition" } },
    { "type": "FIELD_ADDED", "path": "Post.title", "meta": { "typeName": "Post", "addedFieldName": "title", "addedFieldReturnType": "String" } },
    { "type": "FIELD_ARGUMENT_ADDED", "path": "Post.title.locale", "meta": { "typeName": "Post", "fieldName": "title", "addedArgumentName": "locale", "addedArgumentType": "String" } },
    { "type": "TYPE_REMOVED", "path": "Filter", "meta": { "removedTypeName": "Filter" } },
    { "type": "DIRECTIVE_REMOVED", "path": "@cache", "meta": { "removedDirectiveName": "cache" } },
    { "type": "DIRECTIVE_ADDED", "path": "@auth", "meta": { "addedDirectiveName": "auth", "addedDirectiveLocations": ["FIELD_DEFINITION"] } },
    { "type": "DIRECTIVE_ARGUMENT_ADDED", "path": "@auth.role", "meta": { "directiveName": "auth", "addedDirectiveArgumentName": "role", "addedDirectiveArgumentType": "Role" } }
]"#;

fn coordinates(index: &SchemaIndex) -> IndexSet<String> {
    index
        .coordinates()
        .map(|(coordinate, _)| coordinate.to_owned())
        .collect()
}

#[test]
fn coordinates_stay_in_sync_with_nodes() {
    let mut index = SchemaIndex::new(&ast::Document::parse(SDL, "schema.graphql").unwrap());
    assert_eq!(coordinates(&index), index.reachable_coordinates());

    let changes = parse_changes(CHANGES).unwrap();
    for change in &changes {
        schema_patch::apply(&mut index, std::slice::from_ref(change), &PatchConfig::strict())
            .unwrap();
        let mut indexed: Vec<_> = coordinates(&index).into_iter().collect();
        let mut reachable: Vec<_> = index.reachable_coordinates().into_iter().collect();
        indexed.sort();
        reachable.sort();
        assert_eq!(indexed, reachable, "after {}", change.change_type());
    }

    for gone in [
        "Query.legacy",
        "Query.user.verbose",
        "User.email",
        "Filter",
        "Filter.id",
        "Role.GUEST",
        "@cache",
        "@cache.maxAge",
    ] {
        assert!(!index.contains(gone), "{gone} is still indexed");
    }
    for present in ["Post.title.locale", "@auth.role", "User.name", "Entity"] {
        assert!(index.contains(present), "{present} is missing");
    }
}
