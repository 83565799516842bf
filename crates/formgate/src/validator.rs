// File: src/validator.rs
// Purpose: Submit-time validation controller: registration API, engine invocation, submit gate

use tracing::debug;

use formgate_dom::{Form, Reporter};
use formgate_validation::{validate_form, CheckRegistry, Checker, ConfigError};

use crate::config::ValidatorConfig;

/// Whether the form's default submission may proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    Prevent,
}

/// Form validation controller.
///
/// Owns the configuration and the custom-check registry; the registry is
/// mutated only by explicit registration calls, never by validation.
/// Field state is read fresh from the form on every call, so fields added
/// or removed between submissions are picked up automatically.
pub struct Validator {
    config: ValidatorConfig,
    registry: CheckRegistry,
}

impl Validator {
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            config,
            registry: CheckRegistry::new(),
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Register a custom check under a unique name.
    ///
    /// Re-registering a name replaces the checker. Before a field can
    /// activate the rule via `data-validate-<name>`, the form must declare
    /// a `data-msg-<name>` message; validating without one is a
    /// configuration error.
    pub fn register_check(&mut self, name: &str, checker: Checker) -> Result<(), ConfigError> {
        debug!("registering custom check `{}`", name.trim());
        self.registry.register(name, checker)
    }

    /// Register a regular-expression format check. The pattern is matched
    /// against the trimmed value; blank values are never an error.
    pub fn register_pattern(&mut self, name: &str, pattern: &str) -> Result<(), ConfigError> {
        debug!("registering pattern check `{}`", name.trim());
        self.registry.register_pattern(name, pattern)
    }

    /// Validate every field and apply the visual outcome.
    ///
    /// Returns `Ok(true)` when submission may proceed. A configuration
    /// error aborts the run; the offending field receives no decoration.
    pub fn validate(&self, form: &mut Form) -> Result<bool, ConfigError> {
        let snapshots = form.snapshots();
        let messages = form.messages();
        debug!("validating {} fields", snapshots.len());

        let report = validate_form(&snapshots, &self.registry, &messages)?;
        self.reporter().apply(form, &report);

        if let Some((key, verdict)) = report.failing() {
            debug!(
                "submission rejected: field `{}` failed rule `{}`",
                key,
                verdict.failing_rule.as_deref().unwrap_or("?")
            );
        }
        Ok(report.accepted)
    }

    /// Submission gate: validate and decide whether the form's default
    /// submission proceeds
    pub fn handle_submit(&self, form: &mut Form) -> Result<SubmitDecision, ConfigError> {
        if self.validate(form)? {
            Ok(SubmitDecision::Proceed)
        } else {
            Ok(SubmitDecision::Prevent)
        }
    }

    fn reporter(&self) -> Reporter {
        Reporter {
            valid_class: self.config.valid_class.clone(),
            invalid_class: self.config.invalid_class.clone(),
            error_block_class: self.config.error_block_class.clone(),
            event_name: self.config.event_name.clone(),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formgate_dom::Field;

    #[test]
    fn test_register_blank_name_fails() {
        let mut validator = Validator::new();
        assert!(matches!(
            validator.register_pattern("", "^x$"),
            Err(ConfigError::EmptyCheckName)
        ));
    }

    #[test]
    fn test_submit_gate_maps_accept_to_proceed() {
        let validator = Validator::new();
        let mut form = Form::new()
            .with_message("required", "Required")
            .with_field(Field::input("text").with_name("name").required().with_value("Ada"));
        assert_eq!(
            validator.handle_submit(&mut form).unwrap(),
            SubmitDecision::Proceed
        );

        form.field_mut("name").unwrap().set_value("");
        assert_eq!(
            validator.handle_submit(&mut form).unwrap(),
            SubmitDecision::Prevent
        );
    }

    #[test]
    fn test_custom_classes_applied() {
        let config = ValidatorConfig {
            invalid_class: "has-error".to_string(),
            ..ValidatorConfig::default()
        };
        let validator = Validator::with_config(config);
        let mut form = Form::new()
            .with_message("required", "Required")
            .with_field(Field::input("text").with_name("name").required());

        validator.validate(&mut form).unwrap();
        assert!(form.field("name").unwrap().has_class("has-error"));
    }
}
