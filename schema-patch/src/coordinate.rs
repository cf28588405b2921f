use std::borrow::Cow;

use crate::error::PatchError;

pub(crate) const SEPARATOR: char = '.';
pub(crate) const DIRECTIVE_SIGIL: char = '@';

/// The coordinate of the node owning `coordinate`: `Query` for `Query.field`.
pub(crate) fn parent(coordinate: &str) -> Result<&str, PatchError> {
    coordinate
        .rsplit_once(SEPARATOR)
        .map(|(parent, _)| parent)
        .ok_or_else(|| PatchError::CoordinateNotFound {
            coordinate: coordinate.to_owned(),
        })
}

/// The name of the node at `coordinate`: `field` for `Query.field`, `auth` for `@auth`.
pub(crate) fn leaf(coordinate: &str) -> &str {
    match coordinate.rsplit_once(SEPARATOR) {
        Some((_, name)) => name,
        None => coordinate
            .strip_prefix(DIRECTIVE_SIGIL)
            .unwrap_or(coordinate),
    }
}

/// Whether `coordinate` is `ancestor` itself or lies below it.
pub(crate) fn is_within(coordinate: &str, ancestor: &str) -> bool {
    coordinate
        .strip_prefix(ancestor)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
}

pub(crate) fn child(parent: &str, name: &str) -> String {
    format!("{parent}{SEPARATOR}{name}")
}

pub(crate) fn directive_definition(name: &str) -> String {
    format!("{DIRECTIVE_SIGIL}{name}")
}

/// Adds the `@` sigil to a directive coordinate that lacks it: `dir.arg` becomes `@dir.arg`.
pub(crate) fn normalize_directive(coordinate: &str) -> Cow<'_, str> {
    if coordinate.starts_with(DIRECTIVE_SIGIL) {
        Cow::Borrowed(coordinate)
    } else {
        Cow::Owned(directive_definition(coordinate))
    }
}
