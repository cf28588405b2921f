//! Union members, which may be declared on the definition or on any extension of the union.

use crate::change::Change;
use crate::change::meta;
use crate::error::PatchError;
use crate::index::PatchNode;
use crate::index::SchemaIndex;
use crate::templates;

pub(super) fn union_member_added(
    change: &Change,
    meta: &meta::UnionMemberAdded,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let member = templates::name(&meta.added_union_member_type_name)?;
    let (owner, extensions) = index.declarations(change.path())?;
    let extended = extensions.iter().any(|id| {
        matches!(index.node(*id), PatchNode::Union(union) if union.members.contains(&member))
    });
    let union = index.node_mut(owner).as_union_mut()?;
    if extended || union.members.contains(&member) {
        return Err(PatchError::UnionMemberAlreadyExists {
            union_name: union.header.name.to_string(),
            member_name: member.to_string(),
        });
    }
    union.members.push(member);
    Ok(())
}

pub(super) fn union_member_removed(
    change: &Change,
    meta: &meta::UnionMemberRemoved,
    index: &mut SchemaIndex,
) -> Result<(), PatchError> {
    let (owner, extensions) = index.declarations(change.path())?;
    let union_name = index.node_mut(owner).as_union_mut()?.header.name.to_string();
    for id in std::iter::once(owner).chain(extensions) {
        let Ok(union) = index.node_mut(id).as_union_mut() else {
            continue;
        };
        if let Some(position) = union
            .members
            .iter()
            .position(|member| member.as_str() == meta.removed_union_member_type_name)
        {
            union.members.remove(position);
            return Ok(());
        }
    }
    Err(PatchError::UnionMemberNotFound {
        union_name,
        member_name: meta.removed_union_member_type_name.clone(),
    })
}
