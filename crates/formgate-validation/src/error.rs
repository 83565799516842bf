//! Configuration errors
//!
//! Raised for developer-visible misuse only, at the point of detection,
//! and never retried. User-input validation outcomes are data (see
//! [`crate::verdict`]), never errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A rule is active for some field but the form declares no message
    /// for it
    #[error("no message defined for rule `{rule}` (expected a `data-msg-{rule}` attribute on the form)")]
    MissingMessage { rule: String },

    #[error("custom check name must be a non-empty string")]
    EmptyCheckName,

    /// A pattern checker that does not compile is rejected at registration
    /// time, not at validate time
    #[error("pattern for custom check `{rule}` does not compile")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
}
