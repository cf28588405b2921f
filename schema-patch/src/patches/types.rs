use apollo_compiler::ast;

use super::change_description;
use super::ensure_named;
use super::old_value_mismatch;
use crate::change::Change;
use crate::change::meta;
use crate::change::meta::AddedTypeKind;
use crate::error::PatchError;
use crate::index::CompositeTypeNode;
use crate::index::EnumTypeNode;
use crate::index::InputObjectTypeNode;
use crate::index::NodeKind;
use crate::index::PatchNode;
use crate::index::ScalarTypeNode;
use crate::index::SchemaIndex;
use crate::index::TypeHeader;
use crate::index::UnionTypeNode;
use crate::templates;

pub(super) fn type_added(
    change: &Change,
    meta: &meta::TypeAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    ensure_named(coordinate, &meta.added_type_name)?;
    index.ensure_vacant(coordinate)?;
    let name = templates::name(&meta.added_type_name)?;
    let mut directives = ast::DirectiveList::default();
    if meta.added_type_is_one_of && meta.added_type_kind == AddedTypeKind::InputObjectTypeDefinition
    {
        directives.0.push(templates::directive(
            templates::ONE_OF_DIRECTIVE_NAME,
            Vec::new(),
        ));
    }
    let header = TypeHeader::definition(None, name, directives);
    let node = match meta.added_type_kind {
        AddedTypeKind::ObjectTypeDefinition => PatchNode::Object(CompositeTypeNode {
            header,
            implements_interfaces: Vec::new(),
            fields: Vec::new(),
        }),
        AddedTypeKind::InterfaceTypeDefinition => PatchNode::Interface(CompositeTypeNode {
            header,
            implements_interfaces: Vec::new(),
            fields: Vec::new(),
        }),
        AddedTypeKind::UnionTypeDefinition => PatchNode::Union(UnionTypeNode {
            header,
            members: Vec::new(),
        }),
        AddedTypeKind::EnumTypeDefinition => PatchNode::Enum(EnumTypeNode {
            header,
            values: Vec::new(),
        }),
        AddedTypeKind::InputObjectTypeDefinition => PatchNode::InputObject(InputObjectTypeNode {
            header,
            fields: Vec::new(),
        }),
        AddedTypeKind::ScalarTypeDefinition => PatchNode::Scalar(ScalarTypeNode { header }),
    };
    index.insert_definition(coordinate.to_owned(), node);
    Ok(())
}

pub(super) fn type_removed(
    change: &Change,
    _meta: &meta::TypeRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let coordinate = change.path();
    let id = index.find(coordinate)?;
    index.node(id).expect_kind(NodeKind::TYPE)?;
    index.remove_definition(coordinate);
    Ok(())
}

pub(super) fn type_description_added(
    change: &Change,
    meta: &meta::TypeDescriptionAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let node = index.find_mut(change.path())?;
    node.expect_kind(NodeKind::TYPE_DEFINITION)?;
    *node.description_mut()? = templates::description(Some(&meta.added_type_description));
    Ok(())
}

pub(super) fn type_description_changed(
    change: &Change,
    meta: &meta::TypeDescriptionChanged,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let node = index.find_mut(change.path())?;
    node.expect_kind(NodeKind::TYPE_DEFINITION)?;
    change_description(
        node.description_mut()?,
        meta.old_type_description.as_deref(),
        Some(&meta.new_type_description),
        old_value_mismatch,
    )
}

pub(super) fn type_description_removed(
    change: &Change,
    meta: &meta::TypeDescriptionRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let node = index.find_mut(change.path())?;
    node.expect_kind(NodeKind::TYPE_DEFINITION)?;
    let slot = node.description_mut()?;
    match &meta.removed_type_description {
        Some(old) => change_description(slot, Some(old), None, old_value_mismatch),
        None => {
            *slot = None;
            Ok(())
        }
    }
}

/// Interfaces may be declared on the definition or on any extension of the type.
pub(super) fn object_type_interface_added(
    change: &Change,
    meta: &meta::ObjectTypeInterfaceAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let interface = templates::name(&meta.added_interface_name)?;
    let (owner, extensions) = index.declarations(change.path())?;
    let implemented = extensions.iter().any(|id| {
        matches!(
            index.node(*id),
            PatchNode::Object(node) | PatchNode::Interface(node)
                if node.implements_interfaces.contains(&interface)
        )
    });
    let node = index.node_mut(owner).as_composite_mut()?;
    if implemented || node.implements_interfaces.contains(&interface) {
        return Err(PatchError::InterfaceAlreadyExistsOnType {
            type_name: node.header.name.to_string(),
            interface_name: interface.to_string(),
        });
    }
    node.implements_interfaces.push(interface);
    Ok(())
}

pub(super) fn object_type_interface_removed(
    change: &Change,
    meta: &meta::ObjectTypeInterfaceRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let (owner, extensions) = index.declarations(change.path())?;
    let type_name = index.node_mut(owner).as_composite_mut()?.header.name.to_string();
    for id in std::iter::once(owner).chain(extensions) {
        let Ok(node) = index.node_mut(id).as_composite_mut() else {
            continue;
        };
        if let Some(position) = node
            .implements_interfaces
            .iter()
            .position(|interface| interface.as_str() == meta.removed_interface_name)
        {
            node.implements_interfaces.remove(position);
            return Ok(());
        }
    }
    Err(PatchError::InterfaceNotFoundOnType {
        type_name,
        interface_name: meta.removed_interface_name.clone(),
    })
}
