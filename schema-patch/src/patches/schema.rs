//! Root operation type changes.
//!
//! Without a schema block, the root operations are implied by object types named `Query`,
//! `Mutation` and `Subscription`. Changing one of them then materialises a schema definition that
//! keeps the other implied roots.

use apollo_compiler::Node;
use apollo_compiler::ast;
use apollo_compiler::ast::OperationType;

use crate::change::Change;
use crate::change::meta;
use crate::error::PatchError;
use crate::index::NodeKind;
use crate::index::SchemaBlock;
use crate::index::SchemaIndex;
use crate::templates;

const OPERATION_TYPES: [OperationType; 3] = [
    OperationType::Query,
    OperationType::Mutation,
    OperationType::Subscription,
];

/// Placeholder some producers emit for a root that is not declared.
const UNKNOWN_ROOT: &str = "unknown";

pub(super) fn schema_query_type_changed(
    _change: &Change,
    meta: &meta::SchemaQueryTypeChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    root_type_changed(
        OperationType::Query,
        meta.old_query_type_name.as_deref(),
        meta.new_query_type_name.as_deref(),
        index,
    )
}

pub(super) fn schema_mutation_type_changed(
    _change: &Change,
    meta: &meta::SchemaMutationTypeChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    root_type_changed(
        OperationType::Mutation,
        meta.old_mutation_type_name.as_deref(),
        meta.new_mutation_type_name.as_deref(),
        index,
    )
}

pub(super) fn schema_subscription_type_changed(
    _change: &Change,
    meta: &meta::SchemaSubscriptionTypeChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    root_type_changed(
        OperationType::Subscription,
        meta.old_subscription_type_name.as_deref(),
        meta.new_subscription_type_name.as_deref(),
        index,
    )
}

fn declared(name: Option<&str>) -> Option<&str> {
    name.filter(|name| *name != UNKNOWN_ROOT)
}

fn root_type_changed(
    operation: OperationType,
    old: Option<&str>,
    new: Option<&str>,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let old = declared(old);
    let new = declared(new)
        .map(templates::name)
        .transpose()?;

    if index.schema_blocks().is_empty() {
        let implicit = implicit_roots(index);
        let current = implicit
            .iter()
            .find(|(implied, _)| *implied == operation)
            .map(|(_, name)| name.to_string());
        check_old_root(old, current)?;
        let root_operations = implicit
            .into_iter()
            .filter(|(implied, _)| *implied != operation)
            .chain(new.map(|name| (operation, name)))
            .map(Node::new)
            .collect::<Vec<_>>();
        if !root_operations.is_empty() {
            index
                .schema_blocks_mut()
                .push(SchemaBlock::Definition(Node::new(ast::SchemaDefinition {
                    description: None,
                    directives: Default::default(),
                    root_operations,
                })));
        }
        return Ok(());
    }

    let declared_at = index
        .schema_blocks()
        .iter()
        .enumerate()
        .find_map(|(block, schema)| {
            schema
                .root_operations()
                .iter()
                .position(|root| root.0 == operation)
                .map(|position| (block, position, schema.root_operations()[position].1.clone()))
        });
    match declared_at {
        Some((block, position, current)) => {
            check_old_root(old, Some(current.to_string()))?;
            let roots = index.schema_blocks_mut()[block].root_operations_mut();
            match new {
                Some(name) => roots[position] = Node::new((operation, name)),
                None => {
                    roots.remove(position);
                    if index.schema_blocks()[block].is_empty() {
                        index.schema_blocks_mut().remove(block);
                    }
                }
            }
        }
        None => {
            check_old_root(old, None)?;
            if let (Some(name), Some(schema)) = (new, index.schema_blocks_mut().first_mut()) {
                schema
                    .root_operations_mut()
                    .push(Node::new((operation, name)));
            }
        }
    }
    Ok(())
}

fn check_old_root(expected: Option<&str>, current: Option<String>) -> Result<(), PatchError> {
    if expected != current.as_deref() {
        return Err(PatchError::OldValueMismatch {
            expected: expected.map(str::to_owned),
            received: current,
        });
    }
    Ok(())
}

/// Root operations implied by the conventional type names, in operation order.
fn implicit_roots(index: &SchemaIndex) -> Vec<(OperationType, ast::NamedType)> {
    OPERATION_TYPES
        .into_iter()
        .filter_map(|operation| {
            let name = operation.default_type_name();
            (index.kind(name.as_str()) == Some(NodeKind::ObjectTypeDefinition))
                .then_some((operation, name))
        })
        .collect()
}
