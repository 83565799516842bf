//! Form-level message table

use std::collections::HashMap;

/// Attribute prefix for per-rule messages on the form element
pub const MSG_ATTR_PREFIX: &str = "data-msg-";

/// Rule name -> human-readable message, sourced from the form's
/// `data-msg-*` attributes. One entry per built-in rule plus one per
/// registered custom rule a field activates.
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    map: HashMap<String, String>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect `data-msg-<rule>` entries from an attribute list; other
    /// attributes are ignored
    pub fn from_attributes<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = HashMap::new();
        for (key, value) in attrs {
            if let Some(rule) = key.strip_prefix(MSG_ATTR_PREFIX) {
                if !rule.is_empty() {
                    map.insert(rule.to_string(), value.to_string());
                }
            }
        }
        Self { map }
    }

    pub fn insert(&mut self, rule: &str, message: &str) {
        self.map.insert(rule.to_string(), message.to_string());
    }

    pub fn get(&self, rule: &str) -> Option<&str> {
        self.map.get(rule).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attributes_strips_prefix() {
        let table = MessageTable::from_attributes(vec![
            ("data-msg-required", "This field is required"),
            ("data-msg-email", "Enter a valid email"),
            ("class", "signup-form"),
            ("data-msg-", "ignored"),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("required"), Some("This field is required"));
        assert_eq!(table.get("email"), Some("Enter a valid email"));
        assert!(table.get("tel").is_none());
    }
}
