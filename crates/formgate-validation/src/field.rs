//! Field descriptors consumed by the engine

use std::collections::HashMap;

/// Control kind, derived from the `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Checkbox,
    Radio,
    Other,
}

impl FieldKind {
    /// Map a `type` attribute value to a kind. A missing attribute should
    /// be passed as `"text"` (the document default).
    pub fn from_type_attr(type_attr: &str) -> Self {
        match type_attr.to_ascii_lowercase().as_str() {
            "" | "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            "checkbox" => FieldKind::Checkbox,
            "radio" => FieldKind::Radio,
            _ => FieldKind::Other,
        }
    }

    /// Checkbox and radio carry state in `checked`, not `value`
    pub fn is_toggle(self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }
}

/// Snapshot of one input control at validation time.
///
/// Snapshots are recomputed fresh on every validation run — fields may be
/// added or removed between submissions, so nothing here is cached.
#[derive(Debug, Clone)]
pub struct FieldSnapshot {
    /// Stable identity (id, else name) used to key error blocks
    pub key: String,
    pub kind: FieldKind,
    /// Presence of the `required` attribute
    pub required: bool,
    /// Current raw value
    pub value: String,
    /// Checked state; for a radio, whether any control in its group is checked
    pub checked: bool,
    /// Custom rule name -> configuration tokens parsed from
    /// `data-validate-<name>` (present even when the attribute was empty)
    pub custom: HashMap<String, Vec<String>>,
}

impl FieldSnapshot {
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            kind,
            required: false,
            value: String::new(),
            checked: false,
            custom: HashMap::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Activate a custom rule on this field with the given config tokens
    pub fn with_rule(mut self, name: &str, tokens: &[&str]) -> Self {
        self.custom
            .insert(name.to_string(), tokens.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Config tokens for a custom rule; `None` means the rule does not
    /// apply to this field
    pub fn custom_config(&self, name: &str) -> Option<&[String]> {
        self.custom.get(name).map(|tokens| tokens.as_slice())
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Whether the field holds content, for valid-state styling: checked
    /// for toggles, a non-blank value otherwise
    pub fn is_non_empty(&self) -> bool {
        if self.kind.is_toggle() {
            self.checked
        } else {
            !self.is_blank()
        }
    }
}
