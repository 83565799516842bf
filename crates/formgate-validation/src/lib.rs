//! Formgate Validation Core
//!
//! Pure validation engine: the built-in check set (required, email,
//! telephone, required checkbox, required radio), the custom-check
//! registry, per-field and per-form evaluation, and the verdict types
//! consumed by the reporting layer.
//!
//! The engine is stateless: every operation takes its context (field
//! snapshots, registry, message table) as explicit arguments and returns
//! data. User-input failures are never errors; configuration mistakes are.

pub mod checks;
pub mod engine;
pub mod error;
pub mod field;
pub mod messages;
pub mod registry;
pub mod rules;
pub mod verdict;

pub use engine::{evaluate_field, validate_form};
pub use error::ConfigError;
pub use field::{FieldKind, FieldSnapshot};
pub use messages::{MessageTable, MSG_ATTR_PREFIX};
pub use registry::{CheckRegistry, Checker};
pub use rules::{BuiltinRule, BUILTIN_RULES};
pub use verdict::{CheckResult, FieldVerdict, FormReport};
