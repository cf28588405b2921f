//! Changes to directive definitions, addressed as `@directive` and `@directive.argument`.
//!
//! Paths produced without the `@` sigil are accepted and normalised.

use super::change_description;
use super::ensure_named;
use super::input_values;
use super::old_value_mismatch;
use super::parent_of_vacant;
use super::remove_child;
use crate::change::Change;
use crate::change::meta;
use crate::coordinate;
use crate::error::PatchError;
use crate::index::DirectiveDefinitionNode;
use crate::index::NodeKind;
use crate::index::PatchNode;
use crate::index::SchemaIndex;
use crate::templates;

pub(super) fn directive_added(
    change: &Change,
    meta: &meta::DirectiveAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = coordinate::normalize_directive(change.path());
    ensure_named(&coordinate, &meta.added_directive_name)?;
    index.ensure_vacant(&coordinate)?;
    let locations = meta
        .added_directive_locations
        .iter()
        .map(|location| templates::parse_directive_location(location))
        .collect::<Result<_, _>>()?;
    let directive = PatchNode::Directive(DirectiveDefinitionNode {
        description: templates::description(meta.added_directive_description.as_deref()),
        name: templates::name(&meta.added_directive_name)?,
        arguments: Vec::new(),
        repeatable: meta.added_directive_repeatable,
        locations,
    });
    index.insert_definition(coordinate.into_owned(), directive);
    Ok(())
}

pub(super) fn directive_removed(
    change: &Change,
    _meta: &meta::DirectiveRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = coordinate::normalize_directive(change.path());
    index.find_mut(&coordinate)?.as_directive_mut()?;
    index.remove_definition(&coordinate);
    Ok(())
}

pub(super) fn directive_description_changed(
    change: &Change,
    meta: &meta::DirectiveDescriptionChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = coordinate::normalize_directive(change.path());
    let directive = index.find_mut(&coordinate)?.as_directive_mut()?;
    change_description(
        &mut directive.description,
        meta.old_directive_description.as_deref(),
        meta.new_directive_description.as_deref(),
        old_value_mismatch,
    )
}

pub(super) fn directive_argument_added(
    change: &Change,
    meta: &meta::DirectiveArgumentAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = coordinate::normalize_directive(change.path());
    ensure_named(&coordinate, &meta.added_directive_argument_name)?;
    let parent = parent_of_vacant(index, &coordinate, NodeKind::DIRECTIVE)?;
    let argument = input_values::new_input_value(
        &meta.added_directive_argument_name,
        &meta.added_directive_argument_type,
        meta.added_directive_argument_description.as_deref(),
        meta.added_directive_default_value.as_deref(),
    )?;
    index.append_child(parent, coordinate.into_owned(), argument)?;
    Ok(())
}

pub(super) fn directive_argument_removed(
    change: &Change,
    meta: &meta::DirectiveArgumentRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = coordinate::normalize_directive(change.path());
    if !remove_child(
        index,
        &coordinate,
        &meta.removed_directive_argument_name,
        NodeKind::DIRECTIVE,
    )? {
        return Err(PatchError::CoordinateNotFound {
            coordinate: coordinate.into_owned(),
        });
    }
    Ok(())
}

pub(super) fn directive_location_added(
    change: &Change,
    meta: &meta::DirectiveLocationAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = coordinate::normalize_directive(change.path());
    let location = templates::parse_directive_location(&meta.added_directive_location)?;
    let directive = index.find_mut(&coordinate)?.as_directive_mut()?;
    if directive.locations.contains(&location) {
        return Err(PatchError::DirectiveLocationAlreadyExists {
            directive_name: directive.name.to_string(),
            location: location.name().to_owned(),
        });
    }
    directive.locations.push(location);
    Ok(())
}

pub(super) fn directive_location_removed(
    change: &Change,
    meta: &meta::DirectiveLocationRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = coordinate::normalize_directive(change.path());
    let location = templates::parse_directive_location(&meta.removed_directive_location)?;
    let directive = index.find_mut(&coordinate)?.as_directive_mut()?;
    let Some(position) = directive
        .locations
        .iter()
        .position(|existing| *existing == location)
    else {
        return Err(PatchError::DirectiveLocationNotFound {
            directive_name: directive.name.to_string(),
            location: location.name().to_owned(),
        });
    };
    directive.locations.remove(position);
    Ok(())
}

pub(super) fn directive_argument_default_value_changed(
    change: &Change,
    meta: &meta::DirectiveArgumentDefaultValueChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    input_values::change_default_value(
        index,
        &coordinate::normalize_directive(change.path()),
        meta.old_directive_argument_default_value.as_deref(),
        meta.new_directive_argument_default_value.as_deref(),
    )
}

pub(super) fn directive_argument_description_changed(
    change: &Change,
    meta: &meta::DirectiveArgumentDescriptionChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    input_values::change_description(
        index,
        &coordinate::normalize_directive(change.path()),
        meta.old_directive_argument_description.as_deref(),
        meta.new_directive_argument_description.as_deref(),
        input_values::argument_description_mismatch,
    )
}

pub(super) fn directive_argument_type_changed(
    change: &Change,
    meta: &meta::DirectiveArgumentTypeChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    input_values::change_type(
        index,
        &coordinate::normalize_directive(change.path()),
        &meta.old_directive_argument_type,
        &meta.new_directive_argument_type,
    )
}
