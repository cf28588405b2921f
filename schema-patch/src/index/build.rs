use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::ast;

use super::CompositeTypeNode;
use super::DirectiveDefinitionNode;
use super::EnumTypeNode;
use super::EnumValueNode;
use super::FieldNode;
use super::InputObjectTypeNode;
use super::InputValueNode;
use super::NodeId;
use super::PatchNode;
use super::ScalarTypeNode;
use super::SchemaBlock;
use super::SchemaIndex;
use super::TypeHeader;
use super::UnionTypeNode;
use crate::coordinate;

impl SchemaIndex {
    /// Indexes every addressable node of `document`.
    ///
    /// This is a pure traversal: a malformed document yields an incomplete index rather than an
    /// error.
    pub fn new(document: &ast::Document) -> Self {
        let mut indexer = Indexer::default();
        for definition in &document.definitions {
            indexer.definition(definition);
        }
        let index = indexer.index;
        tracing::trace!(
            coordinates = index.coordinates.len(),
            schema_blocks = index.schema_blocks.len(),
            shadowed = index.shadowed.len(),
            "indexed schema document"
        );
        index
    }
}

#[derive(Default)]
struct Indexer {
    index: SchemaIndex,
    path: Vec<String>,
}

impl Indexer {
    fn enter(&mut self, segment: String) -> String {
        self.path.push(segment);
        self.path.join(".")
    }

    fn leave(&mut self) {
        self.path.pop();
    }

    fn definition(&mut self, definition: &ast::Definition) {
        match definition {
            ast::Definition::SchemaDefinition(definition) => self
                .index
                .schema_blocks
                .push(SchemaBlock::Definition(definition.clone())),
            ast::Definition::SchemaExtension(extension) => self
                .index
                .schema_blocks
                .push(SchemaBlock::Extension(extension.clone())),
            ast::Definition::ObjectTypeDefinition(definition) => self.composite(
                TypeHeader::definition(
                    definition.description.clone(),
                    definition.name.clone(),
                    definition.directives.clone(),
                ),
                &definition.implements_interfaces,
                &definition.fields,
                PatchNode::Object,
            ),
            ast::Definition::ObjectTypeExtension(extension) => self.composite(
                TypeHeader::extension(extension.name.clone(), extension.directives.clone()),
                &extension.implements_interfaces,
                &extension.fields,
                PatchNode::Object,
            ),
            ast::Definition::InterfaceTypeDefinition(definition) => self.composite(
                TypeHeader::definition(
                    definition.description.clone(),
                    definition.name.clone(),
                    definition.directives.clone(),
                ),
                &definition.implements_interfaces,
                &definition.fields,
                PatchNode::Interface,
            ),
            ast::Definition::InterfaceTypeExtension(extension) => self.composite(
                TypeHeader::extension(extension.name.clone(), extension.directives.clone()),
                &extension.implements_interfaces,
                &extension.fields,
                PatchNode::Interface,
            ),
            ast::Definition::UnionTypeDefinition(definition) => self.union(
                TypeHeader::definition(
                    definition.description.clone(),
                    definition.name.clone(),
                    definition.directives.clone(),
                ),
                &definition.members,
            ),
            ast::Definition::UnionTypeExtension(extension) => self.union(
                TypeHeader::extension(extension.name.clone(), extension.directives.clone()),
                &extension.members,
            ),
            ast::Definition::EnumTypeDefinition(definition) => self.enum_type(
                TypeHeader::definition(
                    definition.description.clone(),
                    definition.name.clone(),
                    definition.directives.clone(),
                ),
                &definition.values,
            ),
            ast::Definition::EnumTypeExtension(extension) => self.enum_type(
                TypeHeader::extension(extension.name.clone(), extension.directives.clone()),
                &extension.values,
            ),
            ast::Definition::InputObjectTypeDefinition(definition) => self.input_object(
                TypeHeader::definition(
                    definition.description.clone(),
                    definition.name.clone(),
                    definition.directives.clone(),
                ),
                &definition.fields,
            ),
            ast::Definition::InputObjectTypeExtension(extension) => self.input_object(
                TypeHeader::extension(extension.name.clone(), extension.directives.clone()),
                &extension.fields,
            ),
            ast::Definition::ScalarTypeDefinition(definition) => {
                self.scalar(TypeHeader::definition(
                    definition.description.clone(),
                    definition.name.clone(),
                    definition.directives.clone(),
                ))
            }
            ast::Definition::ScalarTypeExtension(extension) => self.scalar(TypeHeader::extension(
                extension.name.clone(),
                extension.directives.clone(),
            )),
            ast::Definition::DirectiveDefinition(definition) => self.directive(definition),
            ast::Definition::OperationDefinition(_) | ast::Definition::FragmentDefinition(_) => {
                tracing::warn!("dropping executable definition found in a schema document");
            }
        }
    }

    /// Registers a top-level node. A type definition takes over the coordinate of an earlier
    /// extension of the same type; any other duplicate is kept aside as shadowed.
    fn register_definition(&mut self, coordinate: String, node: PatchNode) -> NodeId {
        let incoming = node.kind();
        let id = self.index.alloc(node, None);
        match self.index.get(&coordinate) {
            None => {
                self.index.coordinates.insert(coordinate, id);
            }
            Some(existing)
                if self.index.node(existing).kind().is_extension() && !incoming.is_extension() =>
            {
                self.index.shadowed.push(existing);
                self.index.coordinates.insert(coordinate, id);
            }
            Some(_) => self.index.shadowed.push(id),
        }
        id
    }

    fn register_member(&mut self, coordinate: String, node: PatchNode, parent: NodeId) -> NodeId {
        let id = self.index.alloc(node, Some(parent));
        if self.index.coordinates.contains_key(&coordinate) {
            tracing::debug!(coordinate, "duplicate member, keeping the first one indexed");
        } else {
            self.index.coordinates.insert(coordinate, id);
        }
        id
    }

    fn set_children(&mut self, id: NodeId, ids: Vec<NodeId>) {
        if let Some(children) = self.index.node_mut(id).children_mut() {
            *children = ids;
        }
    }

    fn top_level(&mut self, segment: String, node: PatchNode) -> NodeId {
        let coordinate = self.enter(segment);
        self.register_definition(coordinate, node)
    }

    fn composite(
        &mut self,
        header: TypeHeader,
        interfaces: &[Name],
        fields: &[Node<ast::FieldDefinition>],
        variant: fn(CompositeTypeNode) -> PatchNode,
    ) {
        let node = variant(CompositeTypeNode {
            implements_interfaces: interfaces.to_vec(),
            fields: Vec::new(),
            header,
        });
        let id = self.top_level(node.name().to_string(), node);
        let fields = fields.iter().map(|field| self.field(field, id)).collect();
        self.set_children(id, fields);
        self.leave();
    }

    fn union(&mut self, header: TypeHeader, members: &[Name]) {
        let node = PatchNode::Union(UnionTypeNode {
            members: members.to_vec(),
            header,
        });
        self.top_level(node.name().to_string(), node);
        self.leave();
    }

    fn enum_type(&mut self, header: TypeHeader, values: &[Node<ast::EnumValueDefinition>]) {
        let node = PatchNode::Enum(EnumTypeNode {
            values: Vec::new(),
            header,
        });
        let id = self.top_level(node.name().to_string(), node);
        let values = values
            .iter()
            .map(|value| self.enum_value(value, id))
            .collect();
        self.set_children(id, values);
        self.leave();
    }

    fn input_object(&mut self, header: TypeHeader, fields: &[Node<ast::InputValueDefinition>]) {
        let node = PatchNode::InputObject(InputObjectTypeNode {
            fields: Vec::new(),
            header,
        });
        let id = self.top_level(node.name().to_string(), node);
        let fields = fields
            .iter()
            .map(|field| self.input_value(field, id))
            .collect();
        self.set_children(id, fields);
        self.leave();
    }

    fn scalar(&mut self, header: TypeHeader) {
        let node = PatchNode::Scalar(ScalarTypeNode { header });
        self.top_level(node.name().to_string(), node);
        self.leave();
    }

    fn directive(&mut self, definition: &ast::DirectiveDefinition) {
        let node = PatchNode::Directive(DirectiveDefinitionNode {
            description: definition.description.clone(),
            name: definition.name.clone(),
            arguments: Vec::new(),
            repeatable: definition.repeatable,
            locations: definition.locations.clone(),
        });
        let id = self.top_level(coordinate::directive_definition(&definition.name), node);
        let arguments = definition
            .arguments
            .iter()
            .map(|argument| self.input_value(argument, id))
            .collect();
        self.set_children(id, arguments);
        self.leave();
    }

    fn field(&mut self, field: &ast::FieldDefinition, parent: NodeId) -> NodeId {
        let coordinate = self.enter(field.name.to_string());
        let node = PatchNode::Field(FieldNode {
            description: field.description.clone(),
            name: field.name.clone(),
            arguments: Vec::new(),
            ty: field.ty.clone(),
            directives: field.directives.clone(),
        });
        let id = self.register_member(coordinate, node, parent);
        let arguments = field
            .arguments
            .iter()
            .map(|argument| self.input_value(argument, id))
            .collect();
        self.set_children(id, arguments);
        self.leave();
        id
    }

    fn input_value(&mut self, value: &ast::InputValueDefinition, parent: NodeId) -> NodeId {
        let coordinate = self.enter(value.name.to_string());
        let node = PatchNode::InputValue(InputValueNode {
            description: value.description.clone(),
            name: value.name.clone(),
            ty: value.ty.clone(),
            default_value: value.default_value.clone(),
            directives: value.directives.clone(),
        });
        let id = self.register_member(coordinate, node, parent);
        self.leave();
        id
    }

    fn enum_value(&mut self, value: &ast::EnumValueDefinition, parent: NodeId) -> NodeId {
        let coordinate = self.enter(value.value.to_string());
        let node = PatchNode::EnumValue(EnumValueNode {
            description: value.description.clone(),
            value: value.value.clone(),
            directives: value.directives.clone(),
        });
        let id = self.register_member(coordinate, node, parent);
        self.leave();
        id
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::*;
    use crate::index::NodeKind;

    fn index(sdl: &str) -> SchemaIndex {
        SchemaIndex::new(&ast::Document::parse(sdl, "schema.graphql").unwrap())
    }

    #[test]
    fn coordinates() {
        let index = index(
            r#"
            schema { query: Root }
            type Root { users(first: Int = 10): [User!]! }
            type User implements Node { id: ID! }
            interface Node { id: ID! }
            union Entity = User
            enum Role { ADMIN USER }
            input Filter { role: Role }
            scalar Date
            directive @auth(role: Role) on FIELD_DEFINITION
            "#,
        );
        insta::assert_snapshot!(index, @r"
        Root: ObjectTypeDefinition
          Root.users: FieldDefinition
            Root.users.first: InputValueDefinition
        User: ObjectTypeDefinition
          User.id: FieldDefinition
        Node: InterfaceTypeDefinition
          Node.id: FieldDefinition
        Entity: UnionTypeDefinition
        Role: EnumTypeDefinition
          Role.ADMIN: EnumValueDefinition
          Role.USER: EnumValueDefinition
        Filter: InputObjectTypeDefinition
          Filter.role: InputValueDefinition
        Date: ScalarTypeDefinition
        @auth: DirectiveDefinition
          @auth.role: InputValueDefinition
        ");
        assert_eq!(index.schema_blocks().len(), 1);
    }

    #[test]
    fn definitions_own_the_coordinate_of_their_extensions() {
        let index = index(
            r#"
            extend type Query { b: Int }
            type Query { a: String }
            extend type Query { c: Int }
            "#,
        );
        assert_eq!(index.kind("Query"), Some(NodeKind::ObjectTypeDefinition));
        assert_eq!(index.kind("Query.b"), Some(NodeKind::FieldDefinition));
        assert_eq!(index.kind("Query.c"), Some(NodeKind::FieldDefinition));
        assert_eq!(index.shadowed.len(), 2);
        let mut reachable: Vec<_> = index.reachable_coordinates().into_iter().collect();
        reachable.sort();
        assert_eq!(reachable, ["Query", "Query.a", "Query.b", "Query.c"]);
    }

    #[test]
    #[traced_test]
    fn drops_executable_definitions() {
        let index = index("type Query { a: Int } query { a }");
        assert_eq!(index.len(), 2);
        assert!(logs_contain("dropping executable definition"));
    }
}
