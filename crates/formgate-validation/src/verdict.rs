//! Validation outcome types
//!
//! User-input failures are always represented as data and flow to the
//! reporting layer; they are never surfaced as errors.

/// Outcome of one check against one field.
///
/// Invariant: `is_empty` implies `!has_error` — a blank value is never a
/// format error (emptiness is the required rule's concern). The
/// constructors are the only way these flags are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub is_empty: bool,
    pub has_error: bool,
    /// Trimmed value, when the check looked at one
    pub normalized: Option<String>,
}

impl CheckResult {
    /// The value was blank; not an error
    pub fn blank() -> Self {
        Self {
            is_empty: true,
            has_error: false,
            normalized: None,
        }
    }

    pub fn ok(normalized: &str) -> Self {
        Self {
            is_empty: false,
            has_error: false,
            normalized: Some(normalized.to_string()),
        }
    }

    pub fn error(normalized: &str) -> Self {
        Self {
            is_empty: false,
            has_error: true,
            normalized: Some(normalized.to_string()),
        }
    }
}

/// Per-field decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldVerdict {
    pub passed: bool,
    /// Name of the first failing rule, when failed
    pub failing_rule: Option<String>,
    pub failing_message: Option<String>,
    /// Distinguishes valid-with-content from valid-because-blank: only the
    /// former receives the positive styling class
    pub is_non_empty: bool,
}

impl FieldVerdict {
    pub fn pass(is_non_empty: bool) -> Self {
        Self {
            passed: true,
            failing_rule: None,
            failing_message: None,
            is_non_empty,
        }
    }

    pub fn fail(rule: &str, message: &str, is_non_empty: bool) -> Self {
        Self {
            passed: false,
            failing_rule: Some(rule.to_string()),
            failing_message: Some(message.to_string()),
            is_non_empty,
        }
    }
}

/// Outcome of one form-level validation run.
///
/// `verdicts` holds one entry per field actually evaluated, in document
/// order. Iteration stops at the first failing field, so on a rejected run
/// the last entry is the failing one and later fields were never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    /// True iff every field passed; the submission gate
    pub accepted: bool,
    pub verdicts: Vec<(String, FieldVerdict)>,
}

impl FormReport {
    /// The failing field's key and verdict, on a rejected run
    pub fn failing(&self) -> Option<(&str, &FieldVerdict)> {
        if self.accepted {
            return None;
        }
        self.verdicts
            .last()
            .map(|(key, verdict)| (key.as_str(), verdict))
    }
}
