//! Rule evaluation and the form-level decision
//!
//! Both operations are stateless free functions taking explicit context:
//! the field snapshots, the custom-check registry, and the form's message
//! table. Built-in rules are always checked before custom rules for the
//! same field, and a field is never reported as failing more than one rule.

use tracing::debug;

use crate::error::ConfigError;
use crate::field::FieldSnapshot;
use crate::messages::MessageTable;
use crate::registry::CheckRegistry;
use crate::rules::BUILTIN_RULES;
use crate::verdict::{FieldVerdict, FormReport};

/// One entry in the ordered candidate walk
struct Candidate<'a> {
    rule: &'a str,
    applies: bool,
    failed: bool,
    message: Option<&'a str>,
}

/// Decide whether one field passes.
///
/// The candidate list starts with the five built-in rules in fixed order,
/// then every registered custom rule in registry order. A custom rule
/// applies only when the field carries its `data-validate-<name>` config;
/// an applying custom rule with no message on the form is a configuration
/// error raised before the walk begins. The first candidate that applies
/// and fails decides the verdict.
pub fn evaluate_field(
    field: &FieldSnapshot,
    registry: &CheckRegistry,
    messages: &MessageTable,
) -> Result<FieldVerdict, ConfigError> {
    let mut candidates: Vec<Candidate<'_>> =
        Vec::with_capacity(BUILTIN_RULES.len() + registry.len());

    for rule in BUILTIN_RULES {
        let applies = rule.applies(field);
        candidates.push(Candidate {
            rule: rule.message_key(),
            applies,
            failed: applies && rule.failed(field),
            message: messages.get(rule.message_key()),
        });
    }

    for (name, checker) in registry.iter() {
        let Some(tokens) = field.custom_config(name) else {
            // attribute absent: the rule does not apply to this field
            continue;
        };
        let message = messages.get(name).ok_or_else(|| ConfigError::MissingMessage {
            rule: name.to_string(),
        })?;
        let result = checker.run(field, tokens);
        candidates.push(Candidate {
            rule: name,
            applies: true,
            failed: result.has_error,
            message: Some(message),
        });
    }

    for candidate in &candidates {
        if candidate.applies && candidate.failed {
            // a failing rule with no declared message is developer misuse
            let message = candidate.message.ok_or_else(|| ConfigError::MissingMessage {
                rule: candidate.rule.to_string(),
            })?;
            debug!("field `{}` failed rule `{}`", field.key, candidate.rule);
            return Ok(FieldVerdict::fail(candidate.rule, message, field.is_non_empty()));
        }
    }

    Ok(FieldVerdict::pass(field.is_non_empty()))
}

/// Decide whether the form submits.
///
/// Fields are evaluated in document order and the walk stops at the first
/// failing field: at most one field receives a fresh failure decoration
/// per submission attempt, and later fields keep whatever visual state a
/// previous attempt left them with.
pub fn validate_form(
    fields: &[FieldSnapshot],
    registry: &CheckRegistry,
    messages: &MessageTable,
) -> Result<FormReport, ConfigError> {
    let mut verdicts = Vec::new();
    for field in fields {
        let verdict = evaluate_field(field, registry, messages)?;
        let passed = verdict.passed;
        verdicts.push((field.key.clone(), verdict));
        if !passed {
            debug!("stopping at first failing field `{}`", field.key);
            return Ok(FormReport {
                accepted: false,
                verdicts,
            });
        }
    }
    Ok(FormReport {
        accepted: true,
        verdicts,
    })
}
