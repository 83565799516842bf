//! Formgate DOM
//!
//! Minimal form/field element model plus the reporter that renders
//! validation verdicts as class toggles, error blocks, and dispatched
//! events. The model mirrors the declarative attribute contract: rule
//! messages live on the form (`data-msg-*`), per-field custom-rule config
//! lives on the fields (`data-validate-*`).

pub mod element;
pub mod form;
pub mod reporter;

pub use element::{Field, VALIDATE_ATTR_PREFIX};
pub use form::{ErrorBlock, Form, FormEvent};
pub use reporter::Reporter;
