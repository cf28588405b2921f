use super::ensure_named;
use super::input_values;
use super::old_value_mismatch;
use super::parent_of_vacant;
use super::remove_child;
use crate::change::Change;
use crate::change::meta;
use crate::error::PatchError;
use crate::index::NodeKind;
use crate::index::SchemaIndex;
use crate::templates;

pub(super) fn input_field_added(
    change: &Change,
    meta: &meta::InputFieldAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    ensure_named(coordinate, &meta.added_input_field_name)?;
    let parent = parent_of_vacant(index, coordinate, NodeKind::INPUT_OBJECT)?;
    let field = input_values::new_input_value(
        &meta.added_input_field_name,
        &meta.added_input_field_type,
        meta.added_input_field_description.as_deref(),
        meta.added_input_field_default_value.as_deref(),
    )?;
    index.append_child(parent, coordinate.to_owned(), field)?;
    Ok(())
}

pub(super) fn input_field_removed(
    change: &Change,
    meta: &meta::InputFieldRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    if !remove_child(
        index,
        coordinate,
        &meta.removed_field_name,
        NodeKind::INPUT_OBJECT,
    )? {
        return Err(PatchError::CoordinateNotFound {
            coordinate: coordinate.to_owned(),
        });
    }
    Ok(())
}

pub(super) fn input_field_description_added(
    change: &Change,
    meta: &meta::InputFieldDescriptionAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let field = index.find_mut(change.path())?.as_input_value_mut()?;
    field.description = templates::description(Some(&meta.added_input_field_description));
    Ok(())
}

pub(super) fn input_field_description_changed(
    change: &Change,
    meta: &meta::InputFieldDescriptionChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    input_values::change_description(
        index,
        change.path(),
        meta.old_input_field_description.as_deref(),
        Some(&meta.new_input_field_description),
        old_value_mismatch,
    )
}

pub(super) fn input_field_description_removed(
    change: &Change,
    meta: &meta::InputFieldDescriptionRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    match &meta.removed_description {
        Some(old) => input_values::change_description(
            index,
            coordinate,
            Some(old),
            None,
            old_value_mismatch,
        ),
        None => {
            index.find_mut(coordinate)?.as_input_value_mut()?.description = None;
            Ok(())
        }
    }
}

pub(super) fn input_field_default_value_changed(
    change: &Change,
    meta: &meta::InputFieldDefaultValueChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    input_values::change_default_value(
        index,
        change.path(),
        meta.old_default_value.as_deref(),
        meta.new_default_value.as_deref(),
    )
}

pub(super) fn input_field_type_changed(
    change: &Change,
    meta: &meta::InputFieldTypeChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    input_values::change_type(
        index,
        change.path(),
        &meta.old_input_field_type,
        &meta.new_input_field_type,
    )
}
