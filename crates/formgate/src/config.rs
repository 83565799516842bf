// File: src/config.rs
// Purpose: Validator configuration (styling classes, error block class, event name)

use formgate_dom::reporter;
use serde::{Deserialize, Serialize};

/// Validator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Class added to fields that passed with content (default: "is-valid")
    #[serde(default = "default_valid_class")]
    pub valid_class: String,

    /// Class added to the failing field (default: "is-invalid")
    #[serde(default = "default_invalid_class")]
    pub invalid_class: String,

    /// Class carried by rendered error blocks (default: "field-error")
    #[serde(default = "default_error_block_class")]
    pub error_block_class: String,

    /// Name of the event dispatched on validation failure
    /// (default: "formgate:invalid")
    #[serde(default = "default_event_name")]
    pub event_name: String,
}

fn default_valid_class() -> String {
    reporter::DEFAULT_VALID_CLASS.to_string()
}

fn default_invalid_class() -> String {
    reporter::DEFAULT_INVALID_CLASS.to_string()
}

fn default_error_block_class() -> String {
    reporter::DEFAULT_ERROR_BLOCK_CLASS.to_string()
}

fn default_event_name() -> String {
    reporter::DEFAULT_EVENT_NAME.to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            valid_class: default_valid_class(),
            invalid_class: default_invalid_class(),
            error_block_class: default_error_block_class(),
            event_name: default_event_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.valid_class, "is-valid");
        assert_eq!(config.invalid_class, "is-invalid");
        assert_eq!(config.error_block_class, "field-error");
        assert_eq!(config.event_name, "formgate:invalid");
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"invalid_class": "has-error"}"#).unwrap();
        assert_eq!(config.invalid_class, "has-error");
        assert_eq!(config.valid_class, "is-valid");
    }
}
