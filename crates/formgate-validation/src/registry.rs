//! Custom check registration

use std::fmt;

use regex::Regex;

use crate::error::ConfigError;
use crate::field::FieldSnapshot;
use crate::verdict::CheckResult;

/// A registered checker
pub enum Checker {
    /// Format check against the trimmed value; blank values are never an
    /// error
    Pattern(Regex),
    /// Arbitrary predicate over `(raw value, field, config tokens)`;
    /// `true` means valid
    Predicate(Box<dyn Fn(&str, &FieldSnapshot, &[String]) -> bool + Send + Sync>),
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checker::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Checker::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl Checker {
    /// Wrap a predicate function as a checker
    pub fn predicate<F>(func: F) -> Self
    where
        F: Fn(&str, &FieldSnapshot, &[String]) -> bool + Send + Sync + 'static,
    {
        Checker::Predicate(Box::new(func))
    }

    /// Run the checker against a field's current value. Blank values
    /// short-circuit to not-an-error for both variants: emptiness is the
    /// required rule's concern.
    pub fn run(&self, field: &FieldSnapshot, tokens: &[String]) -> CheckResult {
        let trimmed = field.value.trim();
        if trimmed.is_empty() {
            return CheckResult::blank();
        }
        let valid = match self {
            Checker::Pattern(re) => re.is_match(trimmed),
            Checker::Predicate(func) => func(&field.value, field, tokens),
        };
        if valid {
            CheckResult::ok(trimmed)
        } else {
            CheckResult::error(trimmed)
        }
    }
}

/// Registry of custom checks, iterated in insertion order after the
/// built-in rules. Lives for the lifetime of the controller; never mutated
/// by validation.
#[derive(Debug, Default)]
pub struct CheckRegistry {
    entries: Vec<(String, Checker)>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a checker under a unique name. Re-registering a name
    /// replaces the checker in place (last registration wins, original
    /// position kept). A blank name is a configuration error.
    pub fn register(&mut self, name: &str, checker: Checker) -> Result<(), ConfigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyCheckName);
        }
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = checker;
        } else {
            self.entries.push((name.to_string(), checker));
        }
        Ok(())
    }

    /// Compile and register a pattern checker; a pattern that does not
    /// compile is rejected here, not at validate time
    pub fn register_pattern(&mut self, name: &str, pattern: &str) -> Result<(), ConfigError> {
        let re = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;
        self.register(name, Checker::Pattern(re))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Checker)> {
        self.entries.iter().map(|(name, checker)| (name.as_str(), checker))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
