use super::change_description;
use super::deprecation;
use super::ensure_named;
use super::old_value_mismatch;
use super::parent_of_vacant;
use super::remove_child;
use crate::change::Change;
use crate::change::meta;
use crate::error::PatchError;
use crate::index::EnumValueNode;
use crate::index::NodeKind;
use crate::index::PatchNode;
use crate::index::SchemaIndex;
use crate::templates;

fn enum_value_not_found(enum_name: &str, value_name: &str) -> PatchError {
    PatchError::EnumValueNotFound {
        enum_name: enum_name.to_owned(),
        value_name: value_name.to_owned(),
    }
}

fn find_enum_value<'a>(
    index: &'a mut SchemaIndex,
    coordinate: &str,
    enum_name: &str,
    value_name: &str,
) -> Result<&'a mut EnumValueNode, PatchError> {
    let id = index
        .find(coordinate)
        .map_err(|_| enum_value_not_found(enum_name, value_name))?;
    index.node_mut(id).as_enum_value_mut()
}

pub(super) fn enum_value_added(
    change: &Change,
    meta: &meta::EnumValueAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    ensure_named(coordinate, &meta.added_enum_value_name)?;
    let parent = parent_of_vacant(index, coordinate, NodeKind::ENUM)?;
    let value = PatchNode::EnumValue(EnumValueNode {
        description: templates::description(meta.added_enum_value_description.as_deref()),
        value: templates::name(&meta.added_enum_value_name)?,
        directives: Default::default(),
    });
    index.append_child(parent, coordinate.to_owned(), value)?;
    Ok(())
}

pub(super) fn enum_value_removed(
    change: &Change,
    meta: &meta::EnumValueRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    if !remove_child(
        index,
        change.path(),
        &meta.removed_enum_value_name,
        NodeKind::ENUM,
    )? {
        return Err(enum_value_not_found(
            &meta.enum_name,
            &meta.removed_enum_value_name,
        ));
    }
    Ok(())
}

pub(super) fn enum_value_description_changed(
    change: &Change,
    meta: &meta::EnumValueDescriptionChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let value = find_enum_value(index, change.path(), &meta.enum_name, &meta.enum_value_name)?;
    change_description(
        &mut value.description,
        meta.old_enum_value_description.as_deref(),
        meta.new_enum_value_description.as_deref(),
        old_value_mismatch,
    )
}

pub(super) fn enum_value_deprecation_reason_added(
    change: &Change,
    meta: &meta::EnumValueDeprecationReasonAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    let value = find_enum_value(index, coordinate, &meta.enum_name, &meta.enum_value_name)?;
    // A newly deprecated enum value is only reported through its reason.
    deprecation::add_reason(
        &mut value.directives,
        coordinate,
        &meta.added_value_deprecation_reason,
        true,
    )
}

pub(super) fn enum_value_deprecation_reason_changed(
    change: &Change,
    meta: &meta::EnumValueDeprecationReasonChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    let value = find_enum_value(index, coordinate, &meta.enum_name, &meta.enum_value_name)?;
    deprecation::change_reason(
        &mut value.directives,
        coordinate,
        meta.old_enum_value_deprecation_reason.as_deref(),
        &meta.new_enum_value_deprecation_reason,
    )
}

pub(super) fn enum_value_deprecation_reason_removed(
    change: &Change,
    meta: &meta::EnumValueDeprecationReasonRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    let value = find_enum_value(index, coordinate, &meta.enum_name, &meta.enum_value_name)?;
    deprecation::remove_reason(
        &mut value.directives,
        coordinate,
        meta.removed_enum_value_deprecation_reason.as_deref(),
    )
}
