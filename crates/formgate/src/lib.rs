//! # formgate
//!
//! Declarative, submit-time form validation: built-in checks (required,
//! email, telephone, required checkbox/radio), user-registered custom
//! checks, per-field visual state, and an all-or-nothing submission gate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formgate::{Field, Form, SubmitDecision, Validator};
//!
//! let mut validator = Validator::new();
//! validator.register_pattern("zip", r"^\d{5}$")?;
//!
//! let mut form = Form::new()
//!     .with_message("required", "This field is required")
//!     .with_message("email", "Enter a valid email address")
//!     .with_message("zip", "Enter a 5-digit zip code")
//!     .with_field(Field::input("email").with_name("email").required())
//!     .with_field(Field::input("text").with_name("zip").with_attr("data-validate-zip", ""));
//!
//! // on submit:
//! match validator.handle_submit(&mut form)? {
//!     SubmitDecision::Proceed => { /* allow default submission */ }
//!     SubmitDecision::Prevent => { /* first failing field is now decorated */ }
//! }
//! ```
//!
//! ## Behavior
//!
//! - Built-in rules run in fixed order before any custom rule; the first
//!   failing rule decides a field's verdict.
//! - Validation stops at the first failing field: one fresh failure
//!   decoration per submission attempt, by design.
//! - Rule messages are declarative: `data-msg-<rule>` on the form. A rule
//!   a field activates without a declared message is a configuration
//!   error, returned immediately — never silently skipped.
//!
//! ## Architecture
//!
//! This crate is a convenience wrapper over two component crates:
//!
//! - **`formgate-validation`** - the pure evaluation engine and verdict types
//! - **`formgate-dom`** - the form/field element model and the reporter
//!   that renders verdicts as class toggles, error blocks, and events

pub mod config;
pub mod validator;

// Re-export component crates
pub use formgate_dom as dom;
pub use formgate_validation as validation;

pub use config::ValidatorConfig;
pub use validator::{SubmitDecision, Validator};

// Re-export the types most integrations touch
pub use formgate_dom::{ErrorBlock, Field, Form, FormEvent, Reporter};
pub use formgate_validation::{
    CheckRegistry, Checker, ConfigError, FieldKind, FieldSnapshot, FieldVerdict, FormReport,
};
