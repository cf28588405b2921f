//! Semantic change records, as produced by graphql-inspector.

use serde::Deserialize;
use serde::Serialize;

pub mod meta;

/// Tags of the change records this crate knows about.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::IntoStaticStr
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    TypeAdded,
    TypeRemoved,
    TypeDescriptionAdded,
    TypeDescriptionChanged,
    TypeDescriptionRemoved,
    ObjectTypeInterfaceAdded,
    ObjectTypeInterfaceRemoved,
    FieldAdded,
    FieldRemoved,
    FieldTypeChanged,
    FieldDescriptionAdded,
    FieldDescriptionChanged,
    FieldDescriptionRemoved,
    FieldDeprecationAdded,
    FieldDeprecationRemoved,
    FieldDeprecationReasonAdded,
    FieldDeprecationReasonChanged,
    FieldDeprecationReasonRemoved,
    FieldArgumentAdded,
    FieldArgumentRemoved,
    FieldArgumentDescriptionChanged,
    FieldArgumentDefaultChanged,
    FieldArgumentTypeChanged,
    InputFieldAdded,
    InputFieldRemoved,
    InputFieldDescriptionAdded,
    InputFieldDescriptionChanged,
    InputFieldDescriptionRemoved,
    InputFieldDefaultValueChanged,
    InputFieldTypeChanged,
    EnumValueAdded,
    EnumValueRemoved,
    EnumValueDescriptionChanged,
    EnumValueDeprecationReasonAdded,
    EnumValueDeprecationReasonChanged,
    EnumValueDeprecationReasonRemoved,
    UnionMemberAdded,
    UnionMemberRemoved,
    DirectiveAdded,
    DirectiveRemoved,
    DirectiveDescriptionChanged,
    DirectiveArgumentAdded,
    DirectiveArgumentRemoved,
    DirectiveLocationAdded,
    DirectiveLocationRemoved,
    DirectiveArgumentDefaultValueChanged,
    DirectiveArgumentDescriptionChanged,
    DirectiveArgumentTypeChanged,
    SchemaQueryTypeChanged,
    SchemaMutationTypeChanged,
    SchemaSubscriptionTypeChanged,
    // Changes to directive usages are recognised but not applied.
    DirectiveUsageArgumentDefinitionAdded,
    DirectiveUsageArgumentDefinitionRemoved,
    DirectiveUsageEnumAdded,
    DirectiveUsageEnumRemoved,
    DirectiveUsageEnumValueAdded,
    DirectiveUsageEnumValueRemoved,
    DirectiveUsageFieldAdded,
    DirectiveUsageFieldRemoved,
    DirectiveUsageFieldDefinitionAdded,
    DirectiveUsageFieldDefinitionRemoved,
    DirectiveUsageInputFieldDefinitionAdded,
    DirectiveUsageInputFieldDefinitionRemoved,
    DirectiveUsageInputObjectAdded,
    DirectiveUsageInputObjectRemoved,
    DirectiveUsageInterfaceAdded,
    DirectiveUsageInterfaceRemoved,
    DirectiveUsageObjectAdded,
    DirectiveUsageObjectRemoved,
    DirectiveUsageScalarAdded,
    DirectiveUsageScalarRemoved,
    DirectiveUsageSchemaAdded,
    DirectiveUsageSchemaRemoved,
    DirectiveUsageUnionMemberAdded,
    DirectiveUsageUnionMemberRemoved,
}

impl ChangeType {
    fn tag(self) -> &'static str {
        self.into()
    }
}

macro_rules! change_kinds {
    ($($variant:ident),+ $(,)?) => {
        /// A change record's tag together with its typed payload.
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[non_exhaustive]
        pub enum ChangeKind {
            $($variant(meta::$variant),)+
            /// A known tag without a handler
            Unsupported(ChangeType),
            /// A tag this crate does not know
            Unknown(String),
        }

        impl ChangeKind {
            /// The SCREAMING_SNAKE_CASE tag of this change.
            pub fn change_type(&self) -> &str {
                match self {
                    $(Self::$variant(_) => ChangeType::$variant.tag(),)+
                    Self::Unsupported(change_type) => change_type.tag(),
                    Self::Unknown(change_type) => change_type,
                }
            }

            fn from_meta(
                change_type: ChangeType,
                meta: serde_json::Value,
            ) -> Result<Self, serde_json::Error> {
                Ok(match change_type {
                    $(ChangeType::$variant => Self::$variant(serde_json::from_value(meta)?),)+
                    unsupported => Self::Unsupported(unsupported),
                })
            }
        }

        $(
            impl From<meta::$variant> for ChangeKind {
                fn from(meta: meta::$variant) -> Self {
                    Self::$variant(meta)
                }
            }
        )+
    };
}

change_kinds!(
    TypeAdded,
    TypeRemoved,
    TypeDescriptionAdded,
    TypeDescriptionChanged,
    TypeDescriptionRemoved,
    ObjectTypeInterfaceAdded,
    ObjectTypeInterfaceRemoved,
    FieldAdded,
    FieldRemoved,
    FieldTypeChanged,
    FieldDescriptionAdded,
    FieldDescriptionChanged,
    FieldDescriptionRemoved,
    FieldDeprecationAdded,
    FieldDeprecationRemoved,
    FieldDeprecationReasonAdded,
    FieldDeprecationReasonChanged,
    FieldDeprecationReasonRemoved,
    FieldArgumentAdded,
    FieldArgumentRemoved,
    FieldArgumentDescriptionChanged,
    FieldArgumentDefaultChanged,
    FieldArgumentTypeChanged,
    InputFieldAdded,
    InputFieldRemoved,
    InputFieldDescriptionAdded,
    InputFieldDescriptionChanged,
    InputFieldDescriptionRemoved,
    InputFieldDefaultValueChanged,
    InputFieldTypeChanged,
    EnumValueAdded,
    EnumValueRemoved,
    EnumValueDescriptionChanged,
    EnumValueDeprecationReasonAdded,
    EnumValueDeprecationReasonChanged,
    EnumValueDeprecationReasonRemoved,
    UnionMemberAdded,
    UnionMemberRemoved,
    DirectiveAdded,
    DirectiveRemoved,
    DirectiveDescriptionChanged,
    DirectiveArgumentAdded,
    DirectiveArgumentRemoved,
    DirectiveLocationAdded,
    DirectiveLocationRemoved,
    DirectiveArgumentDefaultValueChanged,
    DirectiveArgumentDescriptionChanged,
    DirectiveArgumentTypeChanged,
    SchemaQueryTypeChanged,
    SchemaMutationTypeChanged,
    SchemaSubscriptionTypeChanged,
);

impl ChangeKind {
    /// Whether this change targets the `schema {}` blocks rather than a coordinate.
    pub fn targets_schema_roots(&self) -> bool {
        matches!(
            self,
            Self::SchemaQueryTypeChanged(_)
                | Self::SchemaMutationTypeChanged(_)
                | Self::SchemaSubscriptionTypeChanged(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CriticalityLevel {
    Breaking,
    Dangerous,
    NonBreaking,
}

/// How risky a change is for existing clients. Carried along, never acted upon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Criticality {
    pub level: CriticalityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A single semantic change to a schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "SerializedChange")]
pub struct Change {
    /// Coordinate of the changed node. Schema root changes have none.
    pub path: Option<String>,
    pub message: String,
    pub criticality: Option<Criticality>,
    pub kind: ChangeKind,
}

#[derive(Deserialize)]
struct SerializedChange {
    #[serde(rename = "type")]
    change_type: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    criticality: Option<Criticality>,
    #[serde(default)]
    meta: serde_json::Value,
}

impl TryFrom<SerializedChange> for Change {
    type Error = serde_json::Error;

    fn try_from(change: SerializedChange) -> Result<Self, Self::Error> {
        let kind = match change.change_type.parse::<ChangeType>() {
            Ok(change_type) => {
                let meta = if change.meta.is_null() {
                    serde_json::Value::Object(Default::default())
                } else {
                    change.meta
                };
                ChangeKind::from_meta(change_type, meta)?
            }
            Err(_) => ChangeKind::Unknown(change.change_type),
        };
        Ok(Self {
            path: change.path,
            message: change.message,
            criticality: change.criticality,
            kind,
        })
    }
}

impl Change {
    pub fn new(path: impl Into<String>, kind: impl Into<ChangeKind>) -> Self {
        Self {
            path: Some(path.into()),
            message: String::new(),
            criticality: None,
            kind: kind.into(),
        }
    }

    pub fn without_path(kind: impl Into<ChangeKind>) -> Self {
        Self {
            path: None,
            message: String::new(),
            criticality: None,
            kind: kind.into(),
        }
    }

    /// The coordinate this change applies to, empty for path-less changes.
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    pub fn change_type(&self) -> &str {
        self.kind.change_type()
    }
}

/// Parses a JSON array of change records.
pub fn parse_changes(json: &str) -> Result<Vec<Change>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_graphql_inspector_records() {
        let changes = parse_changes(
            r#"[
                {
                    "type": "FIELD_ADDED",
                    "path": "Query.b",
                    "message": "Field 'b' was added to object type 'Query'",
                    "criticality": { "level": "NON_BREAKING" },
                    "meta": {
                        "typeName": "Query",
                        "addedFieldName": "b",
                        "addedFieldReturnType": "Int",
                        "typeType": "object type"
                    }
                },
                {
                    "type": "SCHEMA_QUERY_TYPE_CHANGED",
                    "criticality": { "level": "BREAKING" },
                    "meta": { "oldQueryTypeName": "Query", "newQueryTypeName": "Root" }
                }
            ]"#,
        )
        .unwrap();
        assert_eq!(
            changes[0],
            Change {
                path: Some("Query.b".to_owned()),
                message: "Field 'b' was added to object type 'Query'".to_owned(),
                criticality: Some(Criticality {
                    level: CriticalityLevel::NonBreaking,
                    reason: None,
                }),
                kind: ChangeKind::FieldAdded(meta::FieldAdded {
                    type_name: "Query".to_owned(),
                    added_field_name: "b".to_owned(),
                    added_field_return_type: "Int".to_owned(),
                    added_field_description: None,
                    type_type: "object type".to_owned(),
                }),
            }
        );
        assert_eq!(changes[1].path, None);
        assert!(changes[1].kind.targets_schema_roots());
        assert_eq!(changes[1].change_type(), "SCHEMA_QUERY_TYPE_CHANGED");
    }

    #[test]
    fn unknown_and_unsupported_tags() {
        let changes = parse_changes(
            r#"[
                { "type": "DIRECTIVE_USAGE_FIELD_DEFINITION_ADDED", "path": "Query.a", "meta": {} },
                { "type": "SOMETHING_NEW", "path": "Query.a", "meta": { "anything": 1 } }
            ]"#,
        )
        .unwrap();
        assert_eq!(
            changes[0].kind,
            ChangeKind::Unsupported(ChangeType::DirectiveUsageFieldDefinitionAdded)
        );
        assert_eq!(changes[0].change_type(), "DIRECTIVE_USAGE_FIELD_DEFINITION_ADDED");
        assert_eq!(
            changes[1].kind,
            ChangeKind::Unknown("SOMETHING_NEW".to_owned())
        );
    }

    #[test]
    fn enum_value_description_alias() {
        let changes = parse_changes(
            r#"[{
                "type": "ENUM_VALUE_ADDED",
                "path": "Color.RED",
                "meta": {
                    "enumName": "Color",
                    "addedEnumValueName": "RED",
                    "addedDirectiveDescription": "Warm"
                }
            }]"#,
        )
        .unwrap();
        let ChangeKind::EnumValueAdded(meta) = &changes[0].kind else {
            panic!("unexpected change {:?}", changes[0].kind);
        };
        assert_eq!(meta.added_enum_value_description.as_deref(), Some("Warm"));
    }

    #[test]
    fn missing_meta_defaults() {
        let changes = parse_changes(r#"[{ "type": "TYPE_REMOVED", "path": "Old" }]"#).unwrap();
        assert_eq!(
            changes[0].kind,
            ChangeKind::TypeRemoved(meta::TypeRemoved::default())
        );
    }

    #[test]
    fn malformed_meta_is_an_error() {
        let error = parse_changes(
            r#"[{ "type": "TYPE_ADDED", "path": "A", "meta": { "addedTypeKind": "Nope" } }]"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("unknown variant `Nope`"), "{error}");
    }
}
