//! Built-in field checks

use once_cell::sync::Lazy;
use regex::Regex;

use crate::verdict::CheckResult;

// Email validation regex
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// Telephone shape: optional leading +, then digits and common separators
static TEL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9\s().-]+$").unwrap());

/// Emptiness check backing the required rule
pub fn check_required(value: &str) -> CheckResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        CheckResult::blank()
    } else {
        CheckResult::ok(trimmed)
    }
}

/// Email format check; a blank value is not an error
pub fn check_email(value: &str) -> CheckResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return CheckResult::blank();
    }
    if EMAIL_REGEX.is_match(trimmed) {
        CheckResult::ok(trimmed)
    } else {
        CheckResult::error(trimmed)
    }
}

/// Telephone format check; a blank value is not an error.
///
/// Shape check plus digit count: 10 to 15 digits once `()+-. ` separators
/// are stripped.
pub fn check_tel(value: &str) -> CheckResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return CheckResult::blank();
    }
    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    if TEL_REGEX.is_match(trimmed) && (10..=15).contains(&digits) {
        CheckResult::ok(trimmed)
    } else {
        CheckResult::error(trimmed)
    }
}
