//! Built-in rule set and evaluation order

use crate::checks;
use crate::field::{FieldKind, FieldSnapshot};

/// The five built-in rules, in the fixed order they are evaluated. These
/// always precede custom rules for the same field.
pub const BUILTIN_RULES: [BuiltinRule; 5] = [
    BuiltinRule::Required,
    BuiltinRule::Email,
    BuiltinRule::Tel,
    BuiltinRule::RequiredCheckbox,
    BuiltinRule::RequiredRadio,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinRule {
    Required,
    Email,
    Tel,
    RequiredCheckbox,
    RequiredRadio,
}

impl BuiltinRule {
    /// Message key looked up on the form (`data-msg-<key>`). The checkbox
    /// and radio variants share the required message.
    pub fn message_key(self) -> &'static str {
        match self {
            BuiltinRule::Required | BuiltinRule::RequiredCheckbox | BuiltinRule::RequiredRadio => {
                "required"
            }
            BuiltinRule::Email => "email",
            BuiltinRule::Tel => "tel",
        }
    }

    /// Whether this rule is relevant to the field's kind/attributes
    pub fn applies(self, field: &FieldSnapshot) -> bool {
        match self {
            BuiltinRule::Required => field.required && !field.kind.is_toggle(),
            BuiltinRule::Email => field.kind == FieldKind::Email,
            BuiltinRule::Tel => field.kind == FieldKind::Tel,
            BuiltinRule::RequiredCheckbox => field.required && field.kind == FieldKind::Checkbox,
            BuiltinRule::RequiredRadio => field.required && field.kind == FieldKind::Radio,
        }
    }

    /// Failure signal, assuming the rule applies
    pub fn failed(self, field: &FieldSnapshot) -> bool {
        match self {
            BuiltinRule::Required => checks::check_required(&field.value).is_empty,
            BuiltinRule::Email => checks::check_email(&field.value).has_error,
            BuiltinRule::Tel => checks::check_tel(&field.value).has_error,
            BuiltinRule::RequiredCheckbox | BuiltinRule::RequiredRadio => !field.checked,
        }
    }
}
