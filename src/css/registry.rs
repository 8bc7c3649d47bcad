//! Global append-only style rule registry.
//!
//! The screen owns one [`StyleRegistry`]. Components that need a rule to exist
//! for the whole application (the inspector's highlight marker) register it
//! once under a key; later registrations under the same key are ignored.

use std::collections::HashSet;

use crate::css::model::{Declaration, RuleSet};
use crate::css::parser::{parse_css, ParseError};

/// Append-only list of rules with idempotent keyed installation.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    rules: Vec<RuleSet>,
    installed: HashSet<String>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `css` and append its rules, unless `key` was installed before.
    ///
    /// Returns `Ok(true)` when rules were appended and `Ok(false)` when the key
    /// was already present. A parse error leaves the registry unchanged and the
    /// key unclaimed.
    pub fn install_once(&mut self, key: &str, css: &str) -> Result<bool, ParseError> {
        if self.installed.contains(key) {
            tracing::trace!(key, "style rules already installed");
            return Ok(false);
        }
        let sheet = parse_css(css)?;
        tracing::debug!(key, rules = sheet.rules.len(), "installing style rules");
        self.rules.extend(sheet.rules);
        self.installed.insert(key.to_owned());
        Ok(true)
    }

    /// Whether a key has been installed.
    pub fn is_installed(&self, key: &str) -> bool {
        self.installed.contains(key)
    }

    /// All rules, in installation order.
    pub fn rules(&self) -> &[RuleSet] {
        &self.rules
    }

    /// Declarations of every rule whose selector targets `class`.
    pub fn declarations_for_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Declaration> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.selectors.iter().any(|s| s.targets_class(class)))
            .flat_map(|rule| rule.declarations.iter())
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
