use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::ast;
use apollo_compiler::ast::DirectiveLocation;

use crate::error::PatchError;

/// Handle to a node stored in a [`SchemaIndex`](super::SchemaIndex) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(pub(super) usize);

/// The kind of an addressable schema node, named after the GraphQL AST kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumIter
)]
pub enum NodeKind {
    ObjectTypeDefinition,
    ObjectTypeExtension,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    UnionTypeDefinition,
    UnionTypeExtension,
    EnumTypeDefinition,
    EnumTypeExtension,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    DirectiveDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition,
}

impl NodeKind {
    pub const OBJECT_OR_INTERFACE: &'static [Self] = &[
        Self::ObjectTypeDefinition,
        Self::ObjectTypeExtension,
        Self::InterfaceTypeDefinition,
        Self::InterfaceTypeExtension,
    ];
    pub const UNION: &'static [Self] = &[Self::UnionTypeDefinition, Self::UnionTypeExtension];
    pub const ENUM: &'static [Self] = &[Self::EnumTypeDefinition, Self::EnumTypeExtension];
    pub const INPUT_OBJECT: &'static [Self] = &[
        Self::InputObjectTypeDefinition,
        Self::InputObjectTypeExtension,
    ];
    pub const TYPE_DEFINITION: &'static [Self] = &[
        Self::ObjectTypeDefinition,
        Self::InterfaceTypeDefinition,
        Self::UnionTypeDefinition,
        Self::EnumTypeDefinition,
        Self::InputObjectTypeDefinition,
        Self::ScalarTypeDefinition,
    ];
    pub const TYPE: &'static [Self] = &[
        Self::ObjectTypeDefinition,
        Self::ObjectTypeExtension,
        Self::InterfaceTypeDefinition,
        Self::InterfaceTypeExtension,
        Self::UnionTypeDefinition,
        Self::UnionTypeExtension,
        Self::EnumTypeDefinition,
        Self::EnumTypeExtension,
        Self::InputObjectTypeDefinition,
        Self::InputObjectTypeExtension,
        Self::ScalarTypeDefinition,
        Self::ScalarTypeExtension,
    ];
    pub const DIRECTIVE: &'static [Self] = &[Self::DirectiveDefinition];
    pub const FIELD: &'static [Self] = &[Self::FieldDefinition];
    pub const INPUT_VALUE: &'static [Self] = &[Self::InputValueDefinition];
    pub const ENUM_VALUE: &'static [Self] = &[Self::EnumValueDefinition];
    pub const INPUT_VALUE_OWNER: &'static [Self] = &[
        Self::FieldDefinition,
        Self::DirectiveDefinition,
        Self::InputObjectTypeDefinition,
        Self::InputObjectTypeExtension,
    ];
    /// Kinds carrying their own description
    pub const DESCRIBED: &'static [Self] = &[
        Self::ObjectTypeDefinition,
        Self::InterfaceTypeDefinition,
        Self::UnionTypeDefinition,
        Self::EnumTypeDefinition,
        Self::InputObjectTypeDefinition,
        Self::ScalarTypeDefinition,
        Self::DirectiveDefinition,
        Self::FieldDefinition,
        Self::InputValueDefinition,
        Self::EnumValueDefinition,
    ];

    /// Whether nodes of this kind appear at the top level of a document.
    pub fn is_definition(self) -> bool {
        !matches!(
            self,
            Self::FieldDefinition | Self::InputValueDefinition | Self::EnumValueDefinition
        )
    }

    pub fn is_extension(self) -> bool {
        matches!(
            self,
            Self::ObjectTypeExtension
                | Self::InterfaceTypeExtension
                | Self::UnionTypeExtension
                | Self::EnumTypeExtension
                | Self::InputObjectTypeExtension
                | Self::ScalarTypeExtension
        )
    }

    /// Kinds that may own a child of this kind.
    pub(crate) fn parent_kinds(self) -> &'static [Self] {
        match self {
            Self::FieldDefinition => Self::OBJECT_OR_INTERFACE,
            Self::InputValueDefinition => Self::INPUT_VALUE_OWNER,
            Self::EnumValueDefinition => Self::ENUM,
            _ => &[],
        }
    }
}

/// Name, description and directives shared by every named type.
#[derive(Debug, Clone)]
pub(crate) struct TypeHeader {
    pub(crate) extension: bool,
    /// Always `None` on extensions
    pub(crate) description: Option<Node<str>>,
    pub(crate) name: Name,
    pub(crate) directives: ast::DirectiveList,
}

impl TypeHeader {
    pub(crate) fn definition(
        description: Option<Node<str>>,
        name: Name,
        directives: ast::DirectiveList,
    ) -> Self {
        Self {
            extension: false,
            description,
            name,
            directives,
        }
    }

    pub(crate) fn extension(name: Name, directives: ast::DirectiveList) -> Self {
        Self {
            extension: true,
            description: None,
            name,
            directives,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CompositeTypeNode {
    pub(crate) header: TypeHeader,
    pub(crate) implements_interfaces: Vec<Name>,
    pub(crate) fields: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct UnionTypeNode {
    pub(crate) header: TypeHeader,
    pub(crate) members: Vec<Name>,
}

#[derive(Debug, Clone)]
pub(crate) struct EnumTypeNode {
    pub(crate) header: TypeHeader,
    pub(crate) values: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct InputObjectTypeNode {
    pub(crate) header: TypeHeader,
    pub(crate) fields: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct ScalarTypeNode {
    pub(crate) header: TypeHeader,
}

#[derive(Debug, Clone)]
pub(crate) struct DirectiveDefinitionNode {
    pub(crate) description: Option<Node<str>>,
    pub(crate) name: Name,
    pub(crate) arguments: Vec<NodeId>,
    pub(crate) repeatable: bool,
    pub(crate) locations: Vec<DirectiveLocation>,
}

#[derive(Debug, Clone)]
pub(crate) struct FieldNode {
    pub(crate) description: Option<Node<str>>,
    pub(crate) name: Name,
    pub(crate) arguments: Vec<NodeId>,
    pub(crate) ty: ast::Type,
    pub(crate) directives: ast::DirectiveList,
}

/// An argument of a field or directive definition, or a field of an input object.
#[derive(Debug, Clone)]
pub(crate) struct InputValueNode {
    pub(crate) description: Option<Node<str>>,
    pub(crate) name: Name,
    pub(crate) ty: Node<ast::Type>,
    pub(crate) default_value: Option<Node<ast::Value>>,
    pub(crate) directives: ast::DirectiveList,
}

#[derive(Debug, Clone)]
pub(crate) struct EnumValueNode {
    pub(crate) description: Option<Node<str>>,
    pub(crate) value: Name,
    pub(crate) directives: ast::DirectiveList,
}

/// An addressable node of the schema document.
///
/// Leaf data stays in `apollo_compiler` AST form. Child collections hold [`NodeId`]s into the
/// owning arena so a child can be reached through its coordinate and through its parent.
#[derive(Debug, Clone)]
pub(crate) enum PatchNode {
    Object(CompositeTypeNode),
    Interface(CompositeTypeNode),
    Union(UnionTypeNode),
    Enum(EnumTypeNode),
    InputObject(InputObjectTypeNode),
    Scalar(ScalarTypeNode),
    Directive(DirectiveDefinitionNode),
    Field(FieldNode),
    InputValue(InputValueNode),
    EnumValue(EnumValueNode),
}

macro_rules! expect_variant {
    ($name:ident, $variant:ident, $target:ty, $expected:expr) => {
        pub(crate) fn $name(&mut self) -> Result<&mut $target, PatchError> {
            match self {
                Self::$variant(node) => Ok(node),
                other => Err(PatchError::KindMismatch {
                    expected: $expected,
                    received: other.kind(),
                }),
            }
        }
    };
}

impl PatchNode {
    pub(crate) fn kind(&self) -> NodeKind {
        let extension = self.header().is_some_and(|header| header.extension);
        match (self, extension) {
            (Self::Object(_), false) => NodeKind::ObjectTypeDefinition,
            (Self::Object(_), true) => NodeKind::ObjectTypeExtension,
            (Self::Interface(_), false) => NodeKind::InterfaceTypeDefinition,
            (Self::Interface(_), true) => NodeKind::InterfaceTypeExtension,
            (Self::Union(_), false) => NodeKind::UnionTypeDefinition,
            (Self::Union(_), true) => NodeKind::UnionTypeExtension,
            (Self::Enum(_), false) => NodeKind::EnumTypeDefinition,
            (Self::Enum(_), true) => NodeKind::EnumTypeExtension,
            (Self::InputObject(_), false) => NodeKind::InputObjectTypeDefinition,
            (Self::InputObject(_), true) => NodeKind::InputObjectTypeExtension,
            (Self::Scalar(_), false) => NodeKind::ScalarTypeDefinition,
            (Self::Scalar(_), true) => NodeKind::ScalarTypeExtension,
            (Self::Directive(_), _) => NodeKind::DirectiveDefinition,
            (Self::Field(_), _) => NodeKind::FieldDefinition,
            (Self::InputValue(_), _) => NodeKind::InputValueDefinition,
            (Self::EnumValue(_), _) => NodeKind::EnumValueDefinition,
        }
    }

    pub(crate) fn name(&self) -> &Name {
        match self {
            Self::Directive(node) => &node.name,
            Self::Field(node) => &node.name,
            Self::InputValue(node) => &node.name,
            Self::EnumValue(node) => &node.value,
            Self::Object(node) | Self::Interface(node) => &node.header.name,
            Self::Union(node) => &node.header.name,
            Self::Enum(node) => &node.header.name,
            Self::InputObject(node) => &node.header.name,
            Self::Scalar(node) => &node.header.name,
        }
    }

    pub(crate) fn header(&self) -> Option<&TypeHeader> {
        match self {
            Self::Object(node) | Self::Interface(node) => Some(&node.header),
            Self::Union(node) => Some(&node.header),
            Self::Enum(node) => Some(&node.header),
            Self::InputObject(node) => Some(&node.header),
            Self::Scalar(node) => Some(&node.header),
            Self::Directive(_) | Self::Field(_) | Self::InputValue(_) | Self::EnumValue(_) => None,
        }
    }

    fn header_mut(&mut self) -> Option<&mut TypeHeader> {
        match self {
            Self::Object(node) | Self::Interface(node) => Some(&mut node.header),
            Self::Union(node) => Some(&mut node.header),
            Self::Enum(node) => Some(&mut node.header),
            Self::InputObject(node) => Some(&mut node.header),
            Self::Scalar(node) => Some(&mut node.header),
            Self::Directive(_) | Self::Field(_) | Self::InputValue(_) | Self::EnumValue(_) => None,
        }
    }

    /// The description slot of this node. Extensions have none.
    pub(crate) fn description_mut(&mut self) -> Result<&mut Option<Node<str>>, PatchError> {
        let kind = self.kind();
        let slot = match self {
            Self::Directive(node) => Some(&mut node.description),
            Self::Field(node) => Some(&mut node.description),
            Self::InputValue(node) => Some(&mut node.description),
            Self::EnumValue(node) => Some(&mut node.description),
            _ => self
                .header_mut()
                .filter(|header| !header.extension)
                .map(|header| &mut header.description),
        };
        slot.ok_or(PatchError::KindMismatch {
            expected: NodeKind::DESCRIBED,
            received: kind,
        })
    }

    pub(crate) fn children(&self) -> &[NodeId] {
        match self {
            Self::Object(node) | Self::Interface(node) => &node.fields,
            Self::Enum(node) => &node.values,
            Self::InputObject(node) => &node.fields,
            Self::Directive(node) => &node.arguments,
            Self::Field(node) => &node.arguments,
            Self::Union(_) | Self::Scalar(_) | Self::InputValue(_) | Self::EnumValue(_) => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            Self::Object(node) | Self::Interface(node) => Some(&mut node.fields),
            Self::Enum(node) => Some(&mut node.values),
            Self::InputObject(node) => Some(&mut node.fields),
            Self::Directive(node) => Some(&mut node.arguments),
            Self::Field(node) => Some(&mut node.arguments),
            Self::Union(_) | Self::Scalar(_) | Self::InputValue(_) | Self::EnumValue(_) => None,
        }
    }

    pub(crate) fn expect_kind(&self, expected: &'static [NodeKind]) -> Result<(), PatchError> {
        let received = self.kind();
        if expected.contains(&received) {
            Ok(())
        } else {
            Err(PatchError::KindMismatch { expected, received })
        }
    }

    pub(crate) fn as_composite_mut(&mut self) -> Result<&mut CompositeTypeNode, PatchError> {
        match self {
            Self::Object(node) | Self::Interface(node) => Ok(node),
            other => Err(PatchError::KindMismatch {
                expected: NodeKind::OBJECT_OR_INTERFACE,
                received: other.kind(),
            }),
        }
    }

    expect_variant!(as_union_mut, Union, UnionTypeNode, NodeKind::UNION);
    expect_variant!(as_directive_mut, Directive, DirectiveDefinitionNode, NodeKind::DIRECTIVE);
    expect_variant!(as_field_mut, Field, FieldNode, NodeKind::FIELD);
    expect_variant!(as_input_value_mut, InputValue, InputValueNode, NodeKind::INPUT_VALUE);
    expect_variant!(as_enum_value_mut, EnumValue, EnumValueNode, NodeKind::ENUM_VALUE);
}
