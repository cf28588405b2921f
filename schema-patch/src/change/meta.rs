//! Kind-specific payloads of change records.
//!
//! Field names follow the camelCase `meta` objects produced by graphql-inspector. Missing fields
//! deserialise to their default so that a sparse record still reaches its handler, which reports
//! what is missing through a [`PatchError`](crate::PatchError).

use serde::Deserialize;

macro_rules! meta {
    ($(#[$attr:meta])* $name:ident { $($(#[$field_attr:meta])* $field:ident: $ty:ty,)* }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $($(#[$field_attr])* pub $field: $ty,)*
        }
    };
}

/// The kind of type created by [`TypeAdded`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum AddedTypeKind {
    #[default]
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    ScalarTypeDefinition,
}

meta!(TypeAdded {
    added_type_name: String,
    added_type_kind: AddedTypeKind,
    added_type_is_one_of: bool,
});

meta!(TypeRemoved {
    removed_type_name: String,
});

meta!(TypeDescriptionAdded {
    type_name: String,
    added_type_description: String,
});

meta!(TypeDescriptionChanged {
    type_name: String,
    old_type_description: Option<String>,
    new_type_description: String,
});

meta!(TypeDescriptionRemoved {
    type_name: String,
    removed_type_description: Option<String>,
});

meta!(ObjectTypeInterfaceAdded {
    object_type_name: String,
    added_interface_name: String,
});

meta!(ObjectTypeInterfaceRemoved {
    object_type_name: String,
    removed_interface_name: String,
});

meta!(FieldAdded {
    type_name: String,
    added_field_name: String,
    added_field_return_type: String,
    added_field_description: Option<String>,
    type_type: String,
});

meta!(FieldRemoved {
    type_name: String,
    removed_field_name: String,
    is_removed_field_deprecated: bool,
    type_type: String,
});

meta!(FieldTypeChanged {
    type_name: String,
    field_name: String,
    old_field_type: String,
    new_field_type: String,
});

meta!(FieldDescriptionAdded {
    type_name: String,
    field_name: String,
    added_description: String,
});

meta!(FieldDescriptionChanged {
    type_name: String,
    field_name: String,
    old_description: Option<String>,
    new_description: String,
});

meta!(FieldDescriptionRemoved {
    type_name: String,
    field_name: String,
});

meta!(FieldDeprecationAdded {
    type_name: String,
    field_name: String,
    deprecation_reason: Option<String>,
});

meta!(FieldDeprecationRemoved {
    type_name: String,
    field_name: String,
});

meta!(FieldDeprecationReasonAdded {
    type_name: String,
    field_name: String,
    added_deprecation_reason: String,
});

meta!(FieldDeprecationReasonChanged {
    type_name: String,
    field_name: String,
    old_deprecation_reason: Option<String>,
    new_deprecation_reason: String,
});

meta!(FieldDeprecationReasonRemoved {
    type_name: String,
    field_name: String,
    removed_deprecation_reason: Option<String>,
});

meta!(FieldArgumentAdded {
    type_name: String,
    field_name: String,
    added_argument_name: String,
    added_argument_type: String,
    has_default_value: bool,
    added_field_argument_description: Option<String>,
    /// Not part of the graphql-inspector payload; applied when present.
    added_argument_default_value: Option<String>,
});

meta!(FieldArgumentRemoved {
    type_name: String,
    field_name: String,
    removed_field_argument_name: String,
});

meta!(FieldArgumentDescriptionChanged {
    type_name: String,
    field_name: String,
    argument_name: String,
    old_description: Option<String>,
    new_description: Option<String>,
});

meta!(FieldArgumentDefaultChanged {
    type_name: String,
    field_name: String,
    argument_name: String,
    old_default_value: Option<String>,
    new_default_value: Option<String>,
});

meta!(FieldArgumentTypeChanged {
    type_name: String,
    field_name: String,
    argument_name: String,
    old_argument_type: String,
    new_argument_type: String,
});

meta!(InputFieldAdded {
    input_name: String,
    added_input_field_name: String,
    added_input_field_type: String,
    added_input_field_description: Option<String>,
    added_input_field_default_value: Option<String>,
});

meta!(InputFieldRemoved {
    input_name: String,
    removed_field_name: String,
});

meta!(InputFieldDescriptionAdded {
    input_name: String,
    input_field_name: String,
    added_input_field_description: String,
});

meta!(InputFieldDescriptionChanged {
    input_name: String,
    input_field_name: String,
    old_input_field_description: Option<String>,
    new_input_field_description: String,
});

meta!(InputFieldDescriptionRemoved {
    input_name: String,
    input_field_name: String,
    removed_description: Option<String>,
});

meta!(InputFieldDefaultValueChanged {
    input_name: String,
    input_field_name: String,
    old_default_value: Option<String>,
    new_default_value: Option<String>,
});

meta!(InputFieldTypeChanged {
    input_name: String,
    input_field_name: String,
    old_input_field_type: String,
    new_input_field_type: String,
});

meta!(EnumValueAdded {
    enum_name: String,
    added_enum_value_name: String,
    /// Older producers emit this under `addedDirectiveDescription`.
    #[serde(alias = "addedDirectiveDescription")]
    added_enum_value_description: Option<String>,
});

meta!(EnumValueRemoved {
    enum_name: String,
    removed_enum_value_name: String,
});

meta!(EnumValueDescriptionChanged {
    enum_name: String,
    enum_value_name: String,
    old_enum_value_description: Option<String>,
    new_enum_value_description: Option<String>,
});

meta!(EnumValueDeprecationReasonAdded {
    enum_name: String,
    enum_value_name: String,
    added_value_deprecation_reason: String,
});

meta!(EnumValueDeprecationReasonChanged {
    enum_name: String,
    enum_value_name: String,
    old_enum_value_deprecation_reason: Option<String>,
    new_enum_value_deprecation_reason: String,
});

meta!(EnumValueDeprecationReasonRemoved {
    enum_name: String,
    enum_value_name: String,
    removed_enum_value_deprecation_reason: Option<String>,
});

meta!(UnionMemberAdded {
    union_name: String,
    added_union_member_type_name: String,
});

meta!(UnionMemberRemoved {
    union_name: String,
    removed_union_member_type_name: String,
});

meta!(DirectiveAdded {
    added_directive_name: String,
    added_directive_repeatable: bool,
    added_directive_locations: Vec<String>,
    added_directive_description: Option<String>,
});

meta!(DirectiveRemoved {
    removed_directive_name: String,
});

meta!(DirectiveDescriptionChanged {
    directive_name: String,
    old_directive_description: Option<String>,
    new_directive_description: Option<String>,
});

meta!(DirectiveArgumentAdded {
    directive_name: String,
    added_directive_argument_name: String,
    added_directive_argument_type: String,
    added_directive_argument_description: Option<String>,
    added_directive_default_value: Option<String>,
});

meta!(DirectiveArgumentRemoved {
    directive_name: String,
    removed_directive_argument_name: String,
});

meta!(DirectiveLocationAdded {
    directive_name: String,
    added_directive_location: String,
});

meta!(DirectiveLocationRemoved {
    directive_name: String,
    removed_directive_location: String,
});

meta!(DirectiveArgumentDefaultValueChanged {
    directive_name: String,
    directive_argument_name: String,
    old_directive_argument_default_value: Option<String>,
    new_directive_argument_default_value: Option<String>,
});

meta!(DirectiveArgumentDescriptionChanged {
    directive_name: String,
    directive_argument_name: String,
    old_directive_argument_description: Option<String>,
    new_directive_argument_description: Option<String>,
});

meta!(DirectiveArgumentTypeChanged {
    directive_name: String,
    directive_argument_name: String,
    old_directive_argument_type: String,
    new_directive_argument_type: String,
});

meta!(SchemaQueryTypeChanged {
    old_query_type_name: Option<String>,
    new_query_type_name: Option<String>,
});

meta!(SchemaMutationTypeChanged {
    old_mutation_type_name: Option<String>,
    new_mutation_type_name: Option<String>,
});

meta!(SchemaSubscriptionTypeChanged {
    old_subscription_type_name: Option<String>,
    new_subscription_type_name: Option<String>,
});
