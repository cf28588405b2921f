//! Changes shared by field arguments, directive arguments and input fields.

use apollo_compiler::Node;

use crate::error::PatchError;
use crate::index::InputValueNode;
use crate::index::PatchNode;
use crate::index::SchemaIndex;
use crate::templates;

pub(super) fn new_input_value(
    name: &str,
    ty: &str,
    description: Option<&str>,
    default_value: Option<&str>,
) -> Result<PatchNode, PatchError> {
    Ok(PatchNode::InputValue(InputValueNode {
        description: templates::description(description),
        name: templates::name(name)?,
        ty: Node::new(templates::parse_type(ty)?),
        default_value: default_value.map(templates::parse_value).transpose()?,
        directives: Default::default(),
    }))
}

pub(super) fn change_type(
    index: &mut SchemaIndex,
    coordinate: &str,
    old: &str,
    new: &str,
) -> Result<(), PatchError> {
    let value = index.find_mut(coordinate)?.as_input_value_mut()?;
    let current = value.ty.to_string();
    if current != templates::canonical_type(old) {
        return Err(PatchError::OldTypeMismatch {
            expected: old.to_owned(),
            received: current,
        });
    }
    value.ty = Node::new(templates::parse_type(new)?);
    Ok(())
}

pub(super) fn change_default_value(
    index: &mut SchemaIndex,
    coordinate: &str,
    old: Option<&str>,
    new: Option<&str>,
) -> Result<(), PatchError> {
    let value = index.find_mut(coordinate)?.as_input_value_mut()?;
    let current = value.default_value.as_ref().map(|value| value.to_string());
    if current != old.map(templates::canonical_value) {
        return Err(PatchError::ArgumentDefaultValueMismatch {
            expected: old.map(str::to_owned),
            received: current,
        });
    }
    value.default_value = new.map(templates::parse_value).transpose()?;
    Ok(())
}

pub(super) fn change_description(
    index: &mut SchemaIndex,
    coordinate: &str,
    old: Option<&str>,
    new: Option<&str>,
    mismatch: impl FnOnce(Option<String>, Option<String>) -> PatchError,
) -> Result<(), PatchError> {
    let value = index.find_mut(coordinate)?.as_input_value_mut()?;
    super::change_description(&mut value.description, old, new, mismatch)
}

pub(super) fn argument_description_mismatch(
    expected: Option<String>,
    received: Option<String>,
) -> PatchError {
    PatchError::ArgumentDescriptionMismatch { expected, received }
}
