use super::change_description;
use super::deprecation;
use super::ensure_named;
use super::input_values;
use super::old_value_mismatch;
use super::parent_of_vacant;
use super::remove_child;
use crate::change::Change;
use crate::change::meta;
use crate::error::PatchError;
use crate::index::FieldNode;
use crate::index::NodeKind;
use crate::index::PatchNode;
use crate::index::SchemaIndex;
use crate::templates;

pub(super) fn field_added(
    change: &Change,
    meta: &meta::FieldAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    ensure_named(coordinate, &meta.added_field_name)?;
    let parent = parent_of_vacant(index, coordinate, NodeKind::OBJECT_OR_INTERFACE)?;
    let field = PatchNode::Field(FieldNode {
        description: templates::description(meta.added_field_description.as_deref()),
        name: templates::name(&meta.added_field_name)?,
        arguments: Vec::new(),
        ty: templates::parse_type(&meta.added_field_return_type)?,
        directives: Default::default(),
    });
    index.append_child(parent, coordinate.to_owned(), field)?;
    Ok(())
}

pub(super) fn field_removed(
    change: &Change,
    meta: &meta::FieldRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    if !remove_child(
        index,
        coordinate,
        &meta.removed_field_name,
        NodeKind::OBJECT_OR_INTERFACE,
    )? {
        return Err(PatchError::CoordinateNotFound {
            coordinate: coordinate.to_owned(),
        });
    }
    Ok(())
}

pub(super) fn field_type_changed(
    change: &Change,
    meta: &meta::FieldTypeChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let field = index.find_mut(change.path())?.as_field_mut()?;
    let current = field.ty.to_string();
    if current != templates::canonical_type(&meta.old_field_type) {
        return Err(PatchError::FieldTypeMismatch {
            expected: meta.old_field_type.clone(),
            received: current,
        });
    }
    field.ty = templates::parse_type(&meta.new_field_type)?;
    Ok(())
}

pub(super) fn field_description_added(
    change: &Change,
    meta: &meta::FieldDescriptionAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let field = index.find_mut(change.path())?.as_field_mut()?;
    field.description = templates::description(Some(&meta.added_description));
    Ok(())
}

pub(super) fn field_description_changed(
    change: &Change,
    meta: &meta::FieldDescriptionChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let field = index.find_mut(change.path())?.as_field_mut()?;
    change_description(
        &mut field.description,
        meta.old_description.as_deref(),
        Some(&meta.new_description),
        old_value_mismatch,
    )
}

pub(super) fn field_description_removed(
    change: &Change,
    _meta: &meta::FieldDescriptionRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    index.find_mut(change.path())?.as_field_mut()?.description = None;
    Ok(())
}

pub(super) fn field_deprecation_added(
    change: &Change,
    meta: &meta::FieldDeprecationAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    let field = index.find_mut(coordinate)?.as_field_mut()?;
    deprecation::add(
        &mut field.directives,
        coordinate,
        meta.deprecation_reason.as_deref(),
    )
}

pub(super) fn field_deprecation_removed(
    change: &Change,
    _meta: &meta::FieldDeprecationRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    let field = index.find_mut(coordinate)?.as_field_mut()?;
    deprecation::remove(&mut field.directives, coordinate)
}

pub(super) fn field_deprecation_reason_added(
    change: &Change,
    meta: &meta::FieldDeprecationReasonAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    let field = index.find_mut(coordinate)?.as_field_mut()?;
    deprecation::add_reason(
        &mut field.directives,
        coordinate,
        &meta.added_deprecation_reason,
        false,
    )
}

pub(super) fn field_deprecation_reason_changed(
    change: &Change,
    meta: &meta::FieldDeprecationReasonChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    let field = index.find_mut(coordinate)?.as_field_mut()?;
    deprecation::change_reason(
        &mut field.directives,
        coordinate,
        meta.old_deprecation_reason.as_deref(),
        &meta.new_deprecation_reason,
    )
}

pub(super) fn field_deprecation_reason_removed(
    change: &Change,
    meta: &meta::FieldDeprecationReasonRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    let field = index.find_mut(coordinate)?.as_field_mut()?;
    deprecation::remove_reason(
        &mut field.directives,
        coordinate,
        meta.removed_deprecation_reason.as_deref(),
    )
}

pub(super) fn field_argument_added(
    change: &Change,
    meta: &meta::FieldArgumentAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    ensure_named(coordinate, &meta.added_argument_name)?;
    let parent = parent_of_vacant(index, coordinate, NodeKind::FIELD)?;
    let argument = input_values::new_input_value(
        &meta.added_argument_name,
        &meta.added_argument_type,
        meta.added_field_argument_description.as_deref(),
        meta.added_argument_default_value.as_deref(),
    )?;
    index.append_child(parent, coordinate.to_owned(), argument)?;
    Ok(())
}

pub(super) fn field_argument_removed(
    change: &Change,
    meta: &meta::FieldArgumentRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    if !remove_child(
        index,
        coordinate,
        &meta.removed_field_argument_name,
        NodeKind::FIELD,
    )? {
        return Err(PatchError::CoordinateNotFound {
            coordinate: coordinate.to_owned(),
        });
    }
    Ok(())
}

pub(super) fn field_argument_description_changed(
    change: &Change,
    meta: &meta::FieldArgumentDescriptionChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    input_values::change_description(
        index,
        change.path(),
        meta.old_description.as_deref(),
        meta.new_description.as_deref(),
        input_values::argument_description_mismatch,
    )
}

pub(super) fn field_argument_default_changed(
    change: &Change,
    meta: &meta::FieldArgumentDefaultChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    input_values::change_default_value(
        index,
        change.path(),
        meta.old_default_value.as_deref(),
        meta.new_default_value.as_deref(),
    )
}

pub(super) fn field_argument_type_changed(
    change: &Change,
    meta: &meta::FieldArgumentTypeChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    input_values::change_type(
        index,
        change.path(),
        &meta.old_argument_type,
        &meta.new_argument_type,
    )
}
