//! Applies change records to a [`SchemaIndex`].
//!
//! Every handler follows the same steps: locate the target through its coordinate, check the kind
//! of what it found, compare the current value with the one the change was computed against, then
//! mutate the node and keep the coordinate map in sync.

use apollo_compiler::Node;

use crate::change::Change;
use crate::change::ChangeKind;
use crate::config::PatchConfig;
use crate::coordinate;
use crate::error::PatchError;
use crate::error::handle_error;
use crate::index::NodeId;
use crate::index::NodeKind;
use crate::index::SchemaIndex;
use crate::templates;

mod deprecation;
mod directives;
mod enums;
mod fields;
mod input_values;
mod inputs;
mod schema;
mod types;
mod unions;

/// Applies `changes` to `index`, in order.
///
/// A change that cannot be applied goes through the configured
/// [`ErrorPolicy`](crate::ErrorPolicy): under the strict policy the run stops and the error is
/// returned, leaving the changes before it applied.
pub fn apply(
    index: &mut SchemaIndex,
    changes: &[Change],
    config: &PatchConfig,
) -> Result<(), PatchError> {
    for change in changes {
        if config.debug {
            trace_change(index, change);
        }
        // Root type changes carry no path, they target the schema blocks.
        if change.path.is_none() && !change.kind.targets_schema_roots() {
            tracing::debug!(
                change_type = change.change_type(),
                "skipping change without a path"
            );
            continue;
        }
        if let Err(error) = apply_change(index, change) {
            handle_error(change, error, config)?;
        }
    }
    Ok(())
}

fn trace_change(index: &SchemaIndex, change: &Change) {
    let path = change.path();
    let parent_kind = coordinate::parent(path)
        .ok()
        .and_then(|parent| index.kind(parent));
    tracing::debug!(
        change_type = change.change_type(),
        coordinate = path,
        kind = ?index.kind(path),
        parent_kind = ?parent_kind,
        message = %change.message,
        "applying change"
    );
}

fn apply_change(index: &mut SchemaIndex, change: &Change) -> Result<(), PatchError> {
    match &change.kind {
        ChangeKind::TypeAdded(meta) => types::type_added(change, meta, index),
        ChangeKind::TypeRemoved(meta) => types::type_removed(change, meta, index),
        ChangeKind::TypeDescriptionAdded(meta) => {
            types::type_description_added(change, meta, index)
        }
        ChangeKind::TypeDescriptionChanged(meta) => {
            types::type_description_changed(change, meta, index)
        }
        ChangeKind::TypeDescriptionRemoved(meta) => {
            types::type_description_removed(change, meta, index)
        }
        ChangeKind::ObjectTypeInterfaceAdded(meta) => {
            types::object_type_interface_added(change, meta, index)
        }
        ChangeKind::ObjectTypeInterfaceRemoved(meta) => {
            types::object_type_interface_removed(change, meta, index)
        }
        ChangeKind::FieldAdded(meta) => fields::field_added(change, meta, index),
        ChangeKind::FieldRemoved(meta) => fields::field_removed(change, meta, index),
        ChangeKind::FieldTypeChanged(meta) => fields::field_type_changed(change, meta, index),
        ChangeKind::FieldDescriptionAdded(meta) => {
            fields::field_description_added(change, meta, index)
        }
        ChangeKind::FieldDescriptionChanged(meta) => {
            fields::field_description_changed(change, meta, index)
        }
        ChangeKind::FieldDescriptionRemoved(meta) => {
            fields::field_description_removed(change, meta, index)
        }
        ChangeKind::FieldDeprecationAdded(meta) => {
            fields::field_deprecation_added(change, meta, index)
        }
        ChangeKind::FieldDeprecationRemoved(meta) => {
            fields::field_deprecation_removed(change, meta, index)
        }
        ChangeKind::FieldDeprecationReasonAdded(meta) => {
            fields::field_deprecation_reason_added(change, meta, index)
        }
        ChangeKind::FieldDeprecationReasonChanged(meta) => {
            fields::field_deprecation_reason_changed(change, meta, index)
        }
        ChangeKind::FieldDeprecationReasonRemoved(meta) => {
            fields::field_deprecation_reason_removed(change, meta, index)
        }
        ChangeKind::FieldArgumentAdded(meta) => fields::field_argument_added(change, meta, index),
        ChangeKind::FieldArgumentRemoved(meta) => {
            fields::field_argument_removed(change, meta, index)
        }
        ChangeKind::FieldArgumentDescriptionChanged(meta) => {
            fields::field_argument_description_changed(change, meta, index)
        }
        ChangeKind::FieldArgumentDefaultChanged(meta) => {
            fields::field_argument_default_changed(change, meta, index)
        }
        ChangeKind::FieldArgumentTypeChanged(meta) => {
            fields::field_argument_type_changed(change, meta, index)
        }
        ChangeKind::InputFieldAdded(meta) => inputs::input_field_added(change, meta, index),
        ChangeKind::InputFieldRemoved(meta) => inputs::input_field_removed(change, meta, index),
        ChangeKind::InputFieldDescriptionAdded(meta) => {
            inputs::input_field_description_added(change, meta, index)
        }
        ChangeKind::InputFieldDescriptionChanged(meta) => {
            inputs::input_field_description_changed(change, meta, index)
        }
        ChangeKind::InputFieldDescriptionRemoved(meta) => {
            inputs::input_field_description_removed(change, meta, index)
        }
        ChangeKind::InputFieldDefaultValueChanged(meta) => {
            inputs::input_field_default_value_changed(change, meta, index)
        }
        ChangeKind::InputFieldTypeChanged(meta) => {
            inputs::input_field_type_changed(change, meta, index)
        }
        ChangeKind::EnumValueAdded(meta) => enums::enum_value_added(change, meta, index),
        ChangeKind::EnumValueRemoved(meta) => enums::enum_value_removed(change, meta, index),
        ChangeKind::EnumValueDescriptionChanged(meta) => {
            enums::enum_value_description_changed(change, meta, index)
        }
        ChangeKind::EnumValueDeprecationReasonAdded(meta) => {
            enums::enum_value_deprecation_reason_added(change, meta, index)
        }
        ChangeKind::EnumValueDeprecationReasonChanged(meta) => {
            enums::enum_value_deprecation_reason_changed(change, meta, index)
        }
        ChangeKind::EnumValueDeprecationReasonRemoved(meta) => {
            enums::enum_value_deprecation_reason_removed(change, meta, index)
        }
        ChangeKind::UnionMemberAdded(meta) => unions::union_member_added(change, meta, index),
        ChangeKind::UnionMemberRemoved(meta) => unions::union_member_removed(change, meta, index),
        ChangeKind::DirectiveAdded(meta) => directives::directive_added(change, meta, index),
        ChangeKind::DirectiveRemoved(meta) => directives::directive_removed(change, meta, index),
        ChangeKind::DirectiveDescriptionChanged(meta) => {
            directives::directive_description_changed(change, meta, index)
        }
        ChangeKind::DirectiveArgumentAdded(meta) => {
            directives::directive_argument_added(change, meta, index)
        }
        ChangeKind::DirectiveArgumentRemoved(meta) => {
            directives::directive_argument_removed(change, meta, index)
        }
        ChangeKind::DirectiveLocationAdded(meta) => {
            directives::directive_location_added(change, meta, index)
        }
        ChangeKind::DirectiveLocationRemoved(meta) => {
            directives::directive_location_removed(change, meta, index)
        }
        ChangeKind::DirectiveArgumentDefaultValueChanged(meta) => {
            directives::directive_argument_default_value_changed(change, meta, index)
        }
        ChangeKind::DirectiveArgumentDescriptionChanged(meta) => {
            directives::directive_argument_description_changed(change, meta, index)
        }
        ChangeKind::DirectiveArgumentTypeChanged(meta) => {
            directives::directive_argument_type_changed(change, meta, index)
        }
        ChangeKind::SchemaQueryTypeChanged(meta) => {
            schema::schema_query_type_changed(change, meta, index)
        }
        ChangeKind::SchemaMutationTypeChanged(meta) => {
            schema::schema_mutation_type_changed(change, meta, index)
        }
        ChangeKind::SchemaSubscriptionTypeChanged(meta) => {
            schema::schema_subscription_type_changed(change, meta, index)
        }
        ChangeKind::Unsupported(_) | ChangeKind::Unknown(_) => {
            tracing::info!(
                change_type = change.change_type(),
                coordinate = change.path(),
                "change type is not implemented yet, skipping it"
            );
            Ok(())
        }
    }
}

/// Fails with [`PatchError::NameMismatch`] unless the node added at `coordinate` is called `name`.
fn ensure_named(coordinate: &str, name: &str) -> Result<(), PatchError> {
    if coordinate::leaf(coordinate) != name {
        return Err(PatchError::NameMismatch {
            coordinate: coordinate.to_owned(),
            name: name.to_owned(),
        });
    }
    Ok(())
}

/// Resolves the parent of the vacant `coordinate`, which must be one of `expected`.
fn parent_of_vacant(
    index: &SchemaIndex,
    coordinate: &str,
    expected: &'static [NodeKind],
) -> Result<NodeId, PatchError> {
    index.ensure_vacant(coordinate)?;
    let parent = index.find(coordinate::parent(coordinate)?)?;
    index.node(parent).expect_kind(expected)?;
    Ok(parent)
}

/// Removes the child named `name` at `coordinate` from a parent that must be one of `expected`.
/// Returns whether the parent had such a child.
fn remove_child(
    index: &mut SchemaIndex,
    coordinate: &str,
    name: &str,
    expected: &'static [NodeKind],
) -> Result<bool, PatchError> {
    let parent = index.find(coordinate::parent(coordinate)?)?;
    index.node(parent).expect_kind(expected)?;
    Ok(index.remove_child(parent, coordinate, name))
}

/// Replaces a description, provided it currently reads `old`.
fn change_description(
    slot: &mut Option<Node<str>>,
    old: Option<&str>,
    new: Option<&str>,
    mismatch: impl FnOnce(Option<String>, Option<String>) -> PatchError,
) -> Result<(), PatchError> {
    let current = slot.as_deref();
    if current != old {
        return Err(mismatch(old.map(str::to_owned), current.map(str::to_owned)));
    }
    *slot = templates::description(new);
    Ok(())
}

fn old_value_mismatch(expected: Option<String>, received: Option<String>) -> PatchError {
    PatchError::OldValueMismatch { expected, received }
}

#[cfg(test)]
mod tests {
    use apollo_compiler::ast;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::*;
    use crate::change::ChangeType;
    use crate::change::meta;

    fn index(sdl: &str) -> SchemaIndex {
        SchemaIndex::new(&ast::Document::parse(sdl, "schema.graphql").unwrap())
    }

    #[test]
    #[traced_test]
    fn skips_unsupported_changes() {
        let mut index = index("type Query { a: Int }");
        let changes = [
            Change::new(
                "Query.a",
                ChangeKind::Unsupported(ChangeType::DirectiveUsageFieldDefinitionAdded),
            ),
            Change::new("Query.a", ChangeKind::Unknown("SOMETHING_NEW".to_owned())),
        ];
        assert_eq!(apply(&mut index, &changes, &PatchConfig::strict()), Ok(()));
        assert!(logs_contain("DIRECTIVE_USAGE_FIELD_DEFINITION_ADDED"));
        assert!(logs_contain("SOMETHING_NEW"));
        assert!(logs_contain("not implemented yet"));
    }

    #[test]
    #[traced_test]
    fn skips_changes_without_a_path() {
        let mut index = index("type Query { a: Int }");
        let change = Change::without_path(meta::TypeRemoved {
            removed_type_name: "Query".to_owned(),
        });
        assert_eq!(apply(&mut index, &[change], &PatchConfig::strict()), Ok(()));
        assert!(index.contains("Query"));
        assert!(logs_contain("skipping change without a path"));
    }

    #[test]
    #[traced_test]
    fn traces_changes_in_debug_mode() {
        let mut index = index("type Query { a: Int }");
        let change = Change::new(
            "Query.b",
            meta::FieldAdded {
                type_name: "Query".to_owned(),
                added_field_name: "b".to_owned(),
                added_field_return_type: "Int".to_owned(),
                ..Default::default()
            },
        );
        let config = PatchConfig::default().with_debug(true);
        assert_eq!(apply(&mut index, &[change], &config), Ok(()));
        assert!(logs_contain("applying change"));
        assert!(logs_contain("parent_kind=Some(ObjectTypeDefinition)"));
    }

    #[test]
    fn description_guard() {
        let mut slot = templates::description(Some("current"));
        assert_eq!(
            change_description(&mut slot, Some("stale"), Some("new"), old_value_mismatch),
            Err(PatchError::OldValueMismatch {
                expected: Some("stale".to_owned()),
                received: Some("current".to_owned()),
            })
        );
        assert_eq!(
            change_description(&mut slot, Some("current"), None, old_value_mismatch),
            Ok(())
        );
        assert!(slot.is_none());
    }
}
