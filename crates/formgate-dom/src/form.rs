// File: src/form.rs
// Purpose: Form element model: ordered fields, message attributes, error blocks, events

use std::collections::HashMap;

use formgate_validation::{FieldKind, FieldSnapshot, MessageTable, MSG_ATTR_PREFIX};

use crate::element::Field;

/// Error block anchored to a field's form group, keyed by the field's
/// stable identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBlock {
    pub class: String,
    pub message: String,
    pub visible: bool,
}

/// Event dispatched by the reporter on a validation failure
#[derive(Debug, Clone)]
pub struct FormEvent {
    pub name: String,
    pub field: String,
    pub detail: serde_json::Value,
}

/// A form and its fields, in document order
#[derive(Debug, Clone, Default)]
pub struct Form {
    attrs: HashMap<String, String>,
    fields: Vec<Field>,
    error_blocks: HashMap<String, ErrorBlock>,
    events: Vec<FormEvent>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the message for a rule (`data-msg-<rule>`)
    pub fn with_message(mut self, rule: &str, message: &str) -> Self {
        self.attrs
            .insert(format!("{MSG_ATTR_PREFIX}{rule}"), message.to_string());
        self
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.insert(key.to_string(), value.to_string());
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(|s| s.as_str())
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// First field whose identity matches `key`
    pub fn field(&self, key: &str) -> Option<&Field> {
        (0..self.fields.len())
            .find(|&idx| self.identity_key(idx) == key)
            .map(|idx| &self.fields[idx])
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut Field> {
        let idx = (0..self.fields.len()).find(|&idx| self.identity_key(idx) == key)?;
        Some(&mut self.fields[idx])
    }

    /// Stable identity for the field at `index`: id, else name, else a
    /// positional key so error blocks stay addressable
    pub fn identity_key(&self, index: usize) -> String {
        self.fields[index]
            .identity()
            .map(str::to_string)
            .unwrap_or_else(|| format!("field-{index}"))
    }

    /// Message table from the form's `data-msg-*` attributes
    pub fn messages(&self) -> MessageTable {
        MessageTable::from_attributes(self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Fresh snapshots of every field, in document order.
    ///
    /// Recomputed on every call: fields may be added or removed between
    /// submissions. A required radio counts as checked when any radio
    /// sharing its name is checked.
    pub fn snapshots(&self) -> Vec<FieldSnapshot> {
        self.fields
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let checked = if field.kind() == FieldKind::Radio {
                    self.radio_group_checked(field)
                } else {
                    field.is_checked()
                };
                let mut snapshot = FieldSnapshot::new(self.identity_key(idx), field.kind())
                    .with_value(field.value())
                    .with_checked(checked);
                if field.is_required() {
                    snapshot = snapshot.required();
                }
                for (rule, tokens) in field.custom_rules() {
                    snapshot.custom.insert(rule.to_string(), tokens);
                }
                snapshot
            })
            .collect()
    }

    fn radio_group_checked(&self, radio: &Field) -> bool {
        match radio.name() {
            Some(name) => self.fields.iter().any(|f| {
                f.kind() == FieldKind::Radio && f.name() == Some(name) && f.is_checked()
            }),
            None => radio.is_checked(),
        }
    }

    /// Apply a mutation to every field whose identity matches `key`
    /// (a radio group shares one identity)
    pub(crate) fn for_each_field_mut<F>(&mut self, key: &str, mut apply: F)
    where
        F: FnMut(&mut Field),
    {
        for idx in 0..self.fields.len() {
            if self.identity_key(idx) == key {
                apply(&mut self.fields[idx]);
            }
        }
    }

    pub fn error_block(&self, key: &str) -> Option<&ErrorBlock> {
        self.error_blocks.get(key)
    }

    pub(crate) fn show_error_block(&mut self, key: &str, class: &str, message: &str) {
        self.error_blocks.insert(
            key.to_string(),
            ErrorBlock {
                class: class.to_string(),
                message: message.to_string(),
                visible: true,
            },
        );
    }

    pub(crate) fn hide_error_block(&mut self, key: &str) {
        if let Some(block) = self.error_blocks.get_mut(key) {
            block.visible = false;
        }
    }

    pub fn events(&self) -> &[FormEvent] {
        &self.events
    }

    pub(crate) fn dispatch(&mut self, event: FormEvent) {
        self.events.push(event);
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}
