use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

/// What the patch engine does with a change it cannot apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Abort the run on the first failing change. Changes applied before it stay applied.
    Strict,
    /// Log the failing change and continue with the next one.
    #[default]
    BestEffort,
}

impl ErrorPolicy {
    /// Maps the boolean `exitOnError` flag used by schema registries onto a policy.
    pub fn from_exit_on_error(exit_on_error: bool) -> Self {
        if exit_on_error {
            Self::Strict
        } else {
            Self::BestEffort
        }
    }
}

/// Configuration for a patch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields, default)]
pub struct PatchConfig {
    /// How errors raised by individual changes are handled
    pub error_policy: ErrorPolicy,
    /// Trace every change, with the state of its target, before applying it
    pub debug: bool,
}

impl PatchConfig {
    pub fn strict() -> Self {
        Self {
            error_policy: ErrorPolicy::Strict,
            ..Default::default()
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_best_effort() {
        let config: PatchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.error_policy, ErrorPolicy::BestEffort);
        assert!(!config.debug);
    }

    #[test]
    fn deserializes_snake_case() {
        let config: PatchConfig =
            serde_json::from_str(r#"{"error_policy": "strict", "debug": true}"#).unwrap();
        assert_eq!(config, PatchConfig::strict().with_debug(true));
    }

    #[test]
    fn rejects_unknown_fields() {
        let error = serde_json::from_str::<PatchConfig>(r#"{"exit_on_error": true}"#).unwrap_err();
        assert!(error.to_string().contains("unknown field `exit_on_error`"));
    }

    #[test]
    fn exit_on_error() {
        assert_eq!(ErrorPolicy::from_exit_on_error(true), ErrorPolicy::Strict);
        assert_eq!(ErrorPolicy::from_exit_on_error(false), ErrorPolicy::BestEffort);
    }
}
