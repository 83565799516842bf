// File: src/element.rs
// Purpose: Field element model (attributes, class list, value, checked state)

use std::collections::HashMap;

use formgate_validation::FieldKind;

/// Attribute prefix activating a custom rule on a field. The attribute's
/// value is a comma-separated token list; presence of the attribute, even
/// empty, activates the rule.
pub const VALIDATE_ATTR_PREFIX: &str = "data-validate-";

/// One input control
#[derive(Debug, Clone, Default)]
pub struct Field {
    attrs: HashMap<String, String>,
    classes: Vec<String>,
    value: String,
    checked: bool,
}

impl Field {
    /// Create an input field with the given `type` attribute
    pub fn input(type_attr: &str) -> Self {
        let mut field = Self::default();
        field.attrs.insert("type".to_string(), type_attr.to_string());
        field
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.attrs.insert("name".to_string(), name.to_string());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.attrs.insert("id".to_string(), id.to_string());
        self
    }

    /// Mark the field required (presence attribute)
    pub fn required(mut self) -> Self {
        self.attrs.insert("required".to_string(), String::new());
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

    /// Set an arbitrary attribute, e.g. `data-validate-zip`
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.insert(key.to_string(), value.to_string());
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(|s| s.as_str())
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    pub fn kind(&self) -> FieldKind {
        FieldKind::from_type_attr(self.attr("type").unwrap_or("text"))
    }

    pub fn is_required(&self) -> bool {
        self.has_attr("required")
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    /// Stable identity: id, falling back to name
    pub fn identity(&self) -> Option<&str> {
        self.id().or_else(|| self.name())
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Custom rules declared on this field: `(rule name, config tokens)`
    /// pairs parsed from `data-validate-*` attributes
    pub fn custom_rules(&self) -> impl Iterator<Item = (&str, Vec<String>)> {
        self.attrs.iter().filter_map(|(key, value)| {
            let rule = key.strip_prefix(VALIDATE_ATTR_PREFIX)?;
            if rule.is_empty() {
                return None;
            }
            let tokens = value
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
            Some((rule, tokens))
        })
    }
}
