use crate::change::Change;
use crate::config::ErrorPolicy;
use crate::config::PatchConfig;
use crate::display_helpers::DisplayAlternatives;
use crate::display_helpers::DisplayOption;
use crate::index::NodeKind;

/// Reasons a change cannot be applied to a schema document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PatchError {
    #[error("Cannot find `{coordinate}` in the schema")]
    CoordinateNotFound { coordinate: String },
    #[error("`{coordinate}` already exists in the schema as a {kind}")]
    CoordinateAlreadyExists { coordinate: String, kind: NodeKind },
    #[error("Expected a node of kind {} but found {received}", DisplayAlternatives(.expected))]
    KindMismatch {
        expected: &'static [NodeKind],
        received: NodeKind,
    },
    #[error("Expected the current value to be {} but found {}", DisplayOption(.expected), DisplayOption(.received))]
    OldValueMismatch {
        expected: Option<String>,
        received: Option<String>,
    },
    #[error("Expected the current type to be `{expected}` but found `{received}`")]
    OldTypeMismatch { expected: String, received: String },
    #[error("Expected the field type to be `{expected}` but found `{received}`")]
    FieldTypeMismatch { expected: String, received: String },
    #[error("Enum `{enum_name}` has no value `{value_name}`")]
    EnumValueNotFound {
        enum_name: String,
        value_name: String,
    },
    #[error("Union `{union_name}` has no member `{member_name}`")]
    UnionMemberNotFound {
        union_name: String,
        member_name: String,
    },
    #[error("Union `{union_name}` already has member `{member_name}`")]
    UnionMemberAlreadyExists {
        union_name: String,
        member_name: String,
    },
    #[error("Directive `@{directive_name}` already has location {location}")]
    DirectiveLocationAlreadyExists {
        directive_name: String,
        location: String,
    },
    #[error("Directive `@{directive_name}` has no location {location}")]
    DirectiveLocationNotFound {
        directive_name: String,
        location: String,
    },
    #[error("Directive `@{name}` is already applied to `{coordinate}`")]
    DirectiveAlreadyExists { coordinate: String, name: String },
    #[error("Directive `@{name}` is not applied to `{coordinate}`")]
    DirectiveNotFound { coordinate: String, name: String },
    #[error("`{coordinate}` already has deprecation reason {reason:?}")]
    DeprecationReasonAlreadyExists { coordinate: String, reason: String },
    #[error("Type `{type_name}` already implements `{interface_name}`")]
    InterfaceAlreadyExistsOnType {
        type_name: String,
        interface_name: String,
    },
    #[error("Type `{type_name}` does not implement `{interface_name}`")]
    InterfaceNotFoundOnType {
        type_name: String,
        interface_name: String,
    },
    #[error("Expected the default value to be {} but found {}", DisplayOption(.expected), DisplayOption(.received))]
    ArgumentDefaultValueMismatch {
        expected: Option<String>,
        received: Option<String>,
    },
    #[error("Expected the argument description to be {} but found {}", DisplayOption(.expected), DisplayOption(.received))]
    ArgumentDescriptionMismatch {
        expected: Option<String>,
        received: Option<String>,
    },
    #[error("`{coordinate}` cannot hold a node named `{name}`")]
    NameMismatch { coordinate: String, name: String },
    #[error("`{name}` is not a valid GraphQL name")]
    InvalidName { name: String },
    #[error("`{source_text}` is not a valid GraphQL type reference")]
    InvalidType { source_text: String },
    #[error("`{source_text}` is not a valid GraphQL constant value")]
    InvalidValue { source_text: String },
    #[error("`{source_text}` is not a valid directive location")]
    InvalidDirectiveLocation { source_text: String },
    #[error("Cannot parse the schema document: {message}")]
    Parse { message: String },
    #[error("The patched schema is invalid: {message}")]
    Build { message: String },
}

/// Applies the configured error policy to a change that failed.
///
/// Under [`ErrorPolicy::Strict`] the error is returned so the caller aborts the run. Under
/// [`ErrorPolicy::BestEffort`] it is logged and swallowed.
pub(crate) fn handle_error(
    change: &Change,
    error: PatchError,
    config: &PatchConfig,
) -> Result<(), PatchError> {
    match config.error_policy {
        ErrorPolicy::Strict => Err(error),
        ErrorPolicy::BestEffort => {
            tracing::warn!(
                change_type = change.change_type(),
                coordinate = change.path(),
                %error,
                "cannot apply change, skipping it"
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::change::ChangeKind;
    use crate::change::meta;

    fn field_added() -> Change {
        Change::new(
            "Query.b",
            meta::FieldAdded {
                type_name: "Query".to_owned(),
                added_field_name: "b".to_owned(),
                added_field_return_type: "Int".to_owned(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn messages() {
        insta::assert_snapshot!(
            PatchError::KindMismatch {
                expected: NodeKind::OBJECT_OR_INTERFACE,
                received: NodeKind::EnumTypeDefinition,
            },
            @"Expected a node of kind ObjectTypeDefinition, ObjectTypeExtension, InterfaceTypeDefinition or InterfaceTypeExtension but found EnumTypeDefinition"
        );
        insta::assert_snapshot!(
            PatchError::CoordinateAlreadyExists {
                coordinate: "Query.a".to_owned(),
                kind: NodeKind::FieldDefinition,
            },
            @"`Query.a` already exists in the schema as a FieldDefinition"
        );
        insta::assert_snapshot!(
            PatchError::OldValueMismatch {
                expected: Some("old".to_owned()),
                received: None,
            },
            @r#"Expected the current value to be "old" but found nothing"#
        );
    }

    #[test]
    fn strict_policy_returns_the_error() {
        let error = PatchError::CoordinateNotFound {
            coordinate: "Query".to_owned(),
        };
        let result = handle_error(&field_added(), error.clone(), &PatchConfig::strict());
        assert_eq!(result, Err(error));
    }

    #[test]
    #[traced_test]
    fn best_effort_policy_logs_the_error() {
        let error = PatchError::CoordinateNotFound {
            coordinate: "Query".to_owned(),
        };
        assert_eq!(
            handle_error(&field_added(), error, &PatchConfig::default()),
            Ok(())
        );
        assert!(logs_contain("cannot apply change, skipping it"));
        assert!(logs_contain("FIELD_ADDED"));
        assert!(logs_contain("Cannot find `Query` in the schema"));
    }

    #[test]
    fn unknown_changes_carry_their_tag() {
        let change = Change::new("Query", ChangeKind::Unknown("SOMETHING_NEW".to_owned()));
        assert_eq!(change.change_type(), "SOMETHING_NEW");
    }
}
