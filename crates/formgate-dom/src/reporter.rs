// File: src/reporter.rs
// Purpose: Applies validation reports to the form: class toggles, error blocks, events

use formgate_validation::{FieldVerdict, FormReport};
use serde_json::json;

use crate::form::{Form, FormEvent};

pub const DEFAULT_VALID_CLASS: &str = "is-valid";
pub const DEFAULT_INVALID_CLASS: &str = "is-invalid";
pub const DEFAULT_ERROR_BLOCK_CLASS: &str = "field-error";
pub const DEFAULT_EVENT_NAME: &str = "formgate:invalid";

/// Renders verdicts as visual state.
///
/// Per field: a failure gets the invalid class, a visible error block, and
/// one dispatched event; a pass with content gets the valid class; a pass
/// on a blank optional field gets neither class.
#[derive(Debug, Clone)]
pub struct Reporter {
    pub valid_class: String,
    pub invalid_class: String,
    pub error_block_class: String,
    pub event_name: String,
}

impl Default for Reporter {
    fn default() -> Self {
        Self {
            valid_class: DEFAULT_VALID_CLASS.to_string(),
            invalid_class: DEFAULT_INVALID_CLASS.to_string(),
            error_block_class: DEFAULT_ERROR_BLOCK_CLASS.to_string(),
            event_name: DEFAULT_EVENT_NAME.to_string(),
        }
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply every evaluated verdict, in field order. Fields the engine
    /// never reached keep their previous visual state.
    pub fn apply(&self, form: &mut Form, report: &FormReport) {
        for (key, verdict) in &report.verdicts {
            self.decorate(form, key, verdict);
        }
    }

    fn decorate(&self, form: &mut Form, key: &str, verdict: &FieldVerdict) {
        if !verdict.passed {
            form.for_each_field_mut(key, |field| {
                field.remove_class(&self.valid_class);
                field.add_class(&self.invalid_class);
            });
            let message = verdict.failing_message.clone().unwrap_or_default();
            form.show_error_block(key, &self.error_block_class, &message);
            form.dispatch(FormEvent {
                name: self.event_name.clone(),
                field: key.to_string(),
                detail: json!({
                    "rule": verdict.failing_rule,
                    "message": message,
                }),
            });
        } else if verdict.is_non_empty {
            form.for_each_field_mut(key, |field| {
                field.remove_class(&self.invalid_class);
                field.add_class(&self.valid_class);
            });
            form.hide_error_block(key);
        } else {
            // blank optional field: neither valid nor invalid styling
            form.for_each_field_mut(key, |field| {
                field.remove_class(&self.invalid_class);
                field.remove_class(&self.valid_class);
            });
            form.hide_error_block(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Field;
    use formgate_validation::FormReport;

    fn report(entries: Vec<(&str, FieldVerdict)>) -> FormReport {
        let accepted = entries.iter().all(|(_, v)| v.passed);
        FormReport {
            accepted,
            verdicts: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    #[test]
    fn test_failure_decorates_and_dispatches() {
        let mut form = Form::new().with_field(Field::input("email").with_name("email"));
        let reporter = Reporter::new();
        reporter.apply(
            &mut form,
            &report(vec![("email", FieldVerdict::fail("email", "Bad email", true))]),
        );

        let field = form.field("email").unwrap();
        assert!(field.has_class("is-invalid"));
        assert!(!field.has_class("is-valid"));

        let block = form.error_block("email").unwrap();
        assert!(block.visible);
        assert_eq!(block.message, "Bad email");
        assert_eq!(block.class, "field-error");

        assert_eq!(form.events().len(), 1);
        assert_eq!(form.events()[0].name, "formgate:invalid");
        assert_eq!(form.events()[0].detail["rule"], "email");
    }

    #[test]
    fn test_pass_with_content_gets_valid_class() {
        let mut form = Form::new().with_field(Field::input("text").with_name("name"));
        form.field_mut("name").unwrap().add_class("is-invalid");

        Reporter::new().apply(&mut form, &report(vec![("name", FieldVerdict::pass(true))]));

        let field = form.field("name").unwrap();
        assert!(field.has_class("is-valid"));
        assert!(!field.has_class("is-invalid"));
        assert!(form.events().is_empty());
    }

    #[test]
    fn test_blank_optional_pass_gets_neither_class() {
        let mut form = Form::new().with_field(Field::input("text").with_name("nick"));
        form.field_mut("nick").unwrap().add_class("is-valid");

        Reporter::new().apply(&mut form, &report(vec![("nick", FieldVerdict::pass(false))]));

        let field = form.field("nick").unwrap();
        assert!(!field.has_class("is-valid"));
        assert!(!field.has_class("is-invalid"));
    }

    #[test]
    fn test_fresh_failure_hides_previous_block_state() {
        let mut form = Form::new().with_field(Field::input("text").with_name("a").required());
        let reporter = Reporter::new();
        reporter.apply(
            &mut form,
            &report(vec![("a", FieldVerdict::fail("required", "Required", false))]),
        );
        assert!(form.error_block("a").unwrap().visible);

        // field fixed on the next attempt
        reporter.apply(&mut form, &report(vec![("a", FieldVerdict::pass(true))]));
        assert!(!form.error_block("a").unwrap().visible);
    }
}
