//! Coordinate index over the addressable nodes of a schema document.
//!
//! A [`SchemaIndex`] owns every type, directive definition, field, argument, input field and enum
//! value of a document in an arena, and maps each node's coordinate (`Type.field.argument`,
//! `@directive.argument`) to its handle. Handlers mutate nodes through the index; the document is
//! rebuilt from it once all changes have been applied.

use std::fmt;

use apollo_compiler::Node;
use apollo_compiler::ast;
use indexmap::IndexMap;
use indexmap::IndexSet;

use crate::coordinate;
use crate::error::PatchError;

mod build;
mod node;
mod reassemble;

pub use node::NodeKind;
pub(crate) use node::*;

#[derive(Debug, Clone)]
struct Slot {
    node: PatchNode,
    parent: Option<NodeId>,
}

/// A `schema {}` definition or `extend schema {}` block.
#[derive(Debug, Clone)]
pub(crate) enum SchemaBlock {
    Definition(Node<ast::SchemaDefinition>),
    Extension(Node<ast::SchemaExtension>),
}

pub(crate) type RootOperation = Node<(ast::OperationType, ast::NamedType)>;

impl SchemaBlock {
    pub(crate) fn root_operations(&self) -> &[RootOperation] {
        match self {
            Self::Definition(definition) => &definition.root_operations,
            Self::Extension(extension) => &extension.root_operations,
        }
    }

    pub(crate) fn root_operations_mut(&mut self) -> &mut Vec<RootOperation> {
        match self {
            Self::Definition(definition) => &mut definition.make_mut().root_operations,
            Self::Extension(extension) => &mut extension.make_mut().root_operations,
        }
    }

    /// Whether the block has nothing left to print. A definition needs a root operation.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Self::Definition(definition) => definition.root_operations.is_empty(),
            Self::Extension(extension) => {
                extension.root_operations.is_empty() && extension.directives.is_empty()
            }
        }
    }

    fn to_definition(&self) -> ast::Definition {
        match self {
            Self::Definition(definition) => ast::Definition::SchemaDefinition(definition.clone()),
            Self::Extension(extension) => ast::Definition::SchemaExtension(extension.clone()),
        }
    }
}

/// Addressable nodes of a schema document, keyed by coordinate.
///
/// Removed nodes stay in the arena until the index is dropped, so its size is bounded by the input
/// document and the added nodes.
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
    nodes: Vec<Slot>,
    /// Insertion ordered, so reassembly keeps the input order of definitions.
    coordinates: IndexMap<String, NodeId>,
    schema_blocks: Vec<SchemaBlock>,
    /// Type extensions whose coordinate is owned by another definition of the same type.
    shadowed: Vec<NodeId>,
}

impl SchemaIndex {
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn contains(&self, coordinate: &str) -> bool {
        self.coordinates.contains_key(coordinate)
    }

    /// The kind of the node at `coordinate`.
    pub fn kind(&self, coordinate: &str) -> Option<NodeKind> {
        self.get(coordinate).map(|id| self.node(id).kind())
    }

    /// Every indexed coordinate with the kind of its node, in insertion order.
    pub fn coordinates(&self) -> impl Iterator<Item = (&str, NodeKind)> {
        self.coordinates
            .iter()
            .map(|(coordinate, id)| (coordinate.as_str(), self.node(*id).kind()))
    }

    /// Coordinates of every node reachable from the top-level definitions.
    ///
    /// Equals the set of [`coordinates`](Self::coordinates) as long as handlers keep the index in
    /// sync with the nodes they add and remove.
    pub fn reachable_coordinates(&self) -> IndexSet<String> {
        let mut reachable = IndexSet::new();
        for id in self.definition_roots() {
            let node = self.node(id);
            let coordinate = match node {
                PatchNode::Directive(directive) => {
                    coordinate::directive_definition(&directive.name)
                }
                _ => node.name().to_string(),
            };
            self.collect_reachable(id, coordinate, &mut reachable);
        }
        reachable
    }

    fn collect_reachable(&self, id: NodeId, coordinate: String, reachable: &mut IndexSet<String>) {
        for child in self.node(id).children() {
            let child_coordinate = coordinate::child(&coordinate, self.node(*child).name());
            self.collect_reachable(*child, child_coordinate, reachable);
        }
        reachable.insert(coordinate);
    }

    /// Definitions emitted on reassembly: indexed definitions, then shadowed extensions.
    fn definition_roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.coordinates
            .values()
            .copied()
            .filter(|id| self.node(*id).kind().is_definition())
            .chain(self.shadowed.iter().copied())
    }

    pub(crate) fn get(&self, coordinate: &str) -> Option<NodeId> {
        self.coordinates.get(coordinate).copied()
    }

    /// Looks up `coordinate`, failing with [`PatchError::CoordinateNotFound`].
    pub(crate) fn find(&self, coordinate: &str) -> Result<NodeId, PatchError> {
        self.get(coordinate)
            .ok_or_else(|| PatchError::CoordinateNotFound {
                coordinate: coordinate.to_owned(),
            })
    }

    pub(crate) fn find_mut(&mut self, coordinate: &str) -> Result<&mut PatchNode, PatchError> {
        let id = self.find(coordinate)?;
        Ok(self.node_mut(id))
    }

    /// The definition owning the type at `coordinate` and the shadowed extensions of that type.
    pub(crate) fn declarations(
        &self,
        coordinate: &str,
    ) -> Result<(NodeId, Vec<NodeId>), PatchError> {
        let owner = self.find(coordinate)?;
        let name = self.node(owner).name();
        let extensions = self
            .shadowed
            .iter()
            .copied()
            .filter(|id| self.node(*id).name() == name)
            .collect();
        Ok((owner, extensions))
    }

    /// Fails with [`PatchError::CoordinateAlreadyExists`] if `coordinate` is taken.
    pub(crate) fn ensure_vacant(&self, coordinate: &str) -> Result<(), PatchError> {
        match self.kind(coordinate) {
            Some(kind) => Err(PatchError::CoordinateAlreadyExists {
                coordinate: coordinate.to_owned(),
                kind,
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &PatchNode {
        &self.nodes[id.0].node
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut PatchNode {
        &mut self.nodes[id.0].node
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    fn alloc(&mut self, node: PatchNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Slot { node, parent });
        id
    }

    /// Adds a top-level definition at a vacant coordinate.
    pub(crate) fn insert_definition(&mut self, coordinate: String, node: PatchNode) -> NodeId {
        let id = self.alloc(node, None);
        self.coordinates.insert(coordinate, id);
        id
    }

    /// Appends `child` to the children of `parent` and registers it at `coordinate`.
    pub(crate) fn append_child(
        &mut self,
        parent: NodeId,
        coordinate: String,
        child: PatchNode,
    ) -> Result<NodeId, PatchError> {
        let expected = child.kind().parent_kinds();
        self.node(parent).expect_kind(expected)?;
        let id = self.alloc(child, Some(parent));
        if let Some(children) = self.node_mut(parent).children_mut() {
            children.push(id);
        }
        self.coordinates.insert(coordinate, id);
        Ok(id)
    }

    /// Removes the child named `name` at `coordinate` from its owner, along with every coordinate
    /// below it. Returns whether a child was removed.
    ///
    /// The owner is the node the child was declared in, which for members of a type extension is
    /// the extension rather than `parent`.
    pub(crate) fn remove_child(&mut self, parent: NodeId, coordinate: &str, name: &str) -> bool {
        let owner = self
            .get(coordinate)
            .and_then(|id| self.parent(id))
            .unwrap_or(parent);
        let children = self.node(owner).children();
        let retained: Vec<NodeId> = children
            .iter()
            .copied()
            .filter(|id| self.node(*id).name().as_str() != name)
            .collect();
        if retained.len() == children.len() {
            return false;
        }
        if let Some(children) = self.node_mut(owner).children_mut() {
            *children = retained;
        }
        self.unregister(coordinate);
        true
    }

    /// Removes the definition at `coordinate`, its shadowed extensions and every coordinate below
    /// it.
    pub(crate) fn remove_definition(&mut self, coordinate: &str) {
        self.unregister(coordinate);
        let nodes = &self.nodes;
        self.shadowed
            .retain(|id| nodes[id.0].node.name().as_str() != coordinate);
    }

    fn unregister(&mut self, coordinate: &str) {
        self.coordinates
            .retain(|indexed, _| !coordinate::is_within(indexed, coordinate));
    }

    pub(crate) fn schema_blocks(&self) -> &[SchemaBlock] {
        &self.schema_blocks
    }

    pub(crate) fn schema_blocks_mut(&mut self) -> &mut Vec<SchemaBlock> {
        &mut self.schema_blocks
    }
}

/// One line per coordinate, indented by depth.
impl fmt::Display for SchemaIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (coordinate, kind) in self.coordinates() {
            let depth = coordinate.matches(coordinate::SEPARATOR).count();
            writeln!(f, "{:indent$}{coordinate}: {kind}", "", indent = depth * 2)?;
        }
        Ok(())
    }
}
