use apollo_compiler::Node;
use apollo_compiler::ast;

use super::NodeId;
use super::PatchNode;
use super::SchemaBlock;
use super::SchemaIndex;

impl SchemaIndex {
    /// Rebuilds a flat document: schema blocks, then every top-level definition in coordinate
    /// order, then type extensions shadowed by a definition of the same type.
    pub fn to_document(&self) -> ast::Document {
        let mut document = ast::Document::new();
        document
            .definitions
            .extend(self.schema_blocks.iter().map(SchemaBlock::to_definition));
        document.definitions.extend(
            self.definition_roots()
                .filter_map(|id| self.definition(id)),
        );
        document
    }

    pub fn into_document(self) -> ast::Document {
        self.to_document()
    }

    fn definition(&self, id: NodeId) -> Option<ast::Definition> {
        let definition = match self.node(id) {
            PatchNode::Object(node) if node.header.extension => {
                ast::Definition::ObjectTypeExtension(Node::new(ast::ObjectTypeExtension {
                    name: node.header.name.clone(),
                    implements_interfaces: node.implements_interfaces.clone(),
                    directives: node.header.directives.clone(),
                    fields: self.fields(&node.fields),
                }))
            }
            PatchNode::Object(node) => {
                ast::Definition::ObjectTypeDefinition(Node::new(ast::ObjectTypeDefinition {
                    description: node.header.description.clone(),
                    name: node.header.name.clone(),
                    implements_interfaces: node.implements_interfaces.clone(),
                    directives: node.header.directives.clone(),
                    fields: self.fields(&node.fields),
                }))
            }
            PatchNode::Interface(node) if node.header.extension => {
                ast::Definition::InterfaceTypeExtension(Node::new(ast::InterfaceTypeExtension {
                    name: node.header.name.clone(),
                    implements_interfaces: node.implements_interfaces.clone(),
                    directives: node.header.directives.clone(),
                    fields: self.fields(&node.fields),
                }))
            }
            PatchNode::Interface(node) => {
                ast::Definition::InterfaceTypeDefinition(Node::new(ast::InterfaceTypeDefinition {
                    description: node.header.description.clone(),
                    name: node.header.name.clone(),
                    implements_interfaces: node.implements_interfaces.clone(),
                    directives: node.header.directives.clone(),
                    fields: self.fields(&node.fields),
                }))
            }
            PatchNode::Union(node) if node.header.extension => {
                ast::Definition::UnionTypeExtension(Node::new(ast::UnionTypeExtension {
                    name: node.header.name.clone(),
                    directives: node.header.directives.clone(),
                    members: node.members.clone(),
                }))
            }
            PatchNode::Union(node) => {
                ast::Definition::UnionTypeDefinition(Node::new(ast::UnionTypeDefinition {
                    description: node.header.description.clone(),
                    name: node.header.name.clone(),
                    directives: node.header.directives.clone(),
                    members: node.members.clone(),
                }))
            }
            PatchNode::Enum(node) if node.header.extension => {
                ast::Definition::EnumTypeExtension(Node::new(ast::EnumTypeExtension {
                    name: node.header.name.clone(),
                    directives: node.header.directives.clone(),
                    values: self.enum_values(&node.values),
                }))
            }
            PatchNode::Enum(node) => {
                ast::Definition::EnumTypeDefinition(Node::new(ast::EnumTypeDefinition {
                    description: node.header.description.clone(),
                    name: node.header.name.clone(),
                    directives: node.header.directives.clone(),
                    values: self.enum_values(&node.values),
                }))
            }
            PatchNode::InputObject(node) if node.header.extension => {
                ast::Definition::InputObjectTypeExtension(Node::new(
                    ast::InputObjectTypeExtension {
                        name: node.header.name.clone(),
                        directives: node.header.directives.clone(),
                        fields: self.input_values(&node.fields),
                    },
                ))
            }
            PatchNode::InputObject(node) => {
                ast::Definition::InputObjectTypeDefinition(Node::new(
                    ast::InputObjectTypeDefinition {
                        description: node.header.description.clone(),
                        name: node.header.name.clone(),
                        directives: node.header.directives.clone(),
                        fields: self.input_values(&node.fields),
                    },
                ))
            }
            PatchNode::Scalar(node) if node.header.extension => {
                ast::Definition::ScalarTypeExtension(Node::new(ast::ScalarTypeExtension {
                    name: node.header.name.clone(),
                    directives: node.header.directives.clone(),
                }))
            }
            PatchNode::Scalar(node) => {
                ast::Definition::ScalarTypeDefinition(Node::new(ast::ScalarTypeDefinition {
                    description: node.header.description.clone(),
                    name: node.header.name.clone(),
                    directives: node.header.directives.clone(),
                }))
            }
            PatchNode::Directive(node) => {
                ast::Definition::DirectiveDefinition(Node::new(ast::DirectiveDefinition {
                    description: node.description.clone(),
                    name: node.name.clone(),
                    arguments: self.input_values(&node.arguments),
                    repeatable: node.repeatable,
                    locations: node.locations.clone(),
                }))
            }
            PatchNode::Field(_) | PatchNode::InputValue(_) | PatchNode::EnumValue(_) => {
                return None;
            }
        };
        Some(definition)
    }

    fn fields(&self, ids: &[NodeId]) -> Vec<Node<ast::FieldDefinition>> {
        ids.iter()
            .filter_map(|id| match self.node(*id) {
                PatchNode::Field(field) => Some(Node::new(ast::FieldDefinition {
                    description: field.description.clone(),
                    name: field.name.clone(),
                    arguments: self.input_values(&field.arguments),
                    ty: field.ty.clone(),
                    directives: field.directives.clone(),
                })),
                _ => None,
            })
            .collect()
    }

    fn input_values(&self, ids: &[NodeId]) -> Vec<Node<ast::InputValueDefinition>> {
        ids.iter()
            .filter_map(|id| match self.node(*id) {
                PatchNode::InputValue(value) => Some(Node::new(ast::InputValueDefinition {
                    description: value.description.clone(),
                    name: value.name.clone(),
                    ty: value.ty.clone(),
                    default_value: value.default_value.clone(),
                    directives: value.directives.clone(),
                })),
                _ => None,
            })
            .collect()
    }

    fn enum_values(&self, ids: &[NodeId]) -> Vec<Node<ast::EnumValueDefinition>> {
        ids.iter()
            .filter_map(|id| match self.node(*id) {
                PatchNode::EnumValue(value) => Some(Node::new(ast::EnumValueDefinition {
                    description: value.description.clone(),
                    value: value.value.clone(),
                    directives: value.directives.clone(),
                })),
                _ => None,
            })
            .collect()
    }
}
