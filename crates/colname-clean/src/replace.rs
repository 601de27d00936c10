//! Whole-word token replacement.

use std::collections::BTreeMap;

use crate::patterns::WHITESPACE_RUN;
use crate::separator::{SPACE_SENTINEL_KEY, Separator};

/// Replacement entries ordered for matching: longest key first, ties in key order.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    /// Lowercased key and replacement text.
    entries: Vec<(String, String)>,
    /// Whether any replacement (including the separator sentinel) was configured.
    active: bool,
}

impl ReplacementTable {
    pub fn new(replacements: &BTreeMap<String, String>) -> Self {
        let mut entries: Vec<(String, String)> = replacements
            .iter()
            .filter(|(key, _)| key.as_str() != SPACE_SENTINEL_KEY)
            .map(|(key, value)| (key.to_lowercase(), value.clone()))
            .collect();
        // Stable sort keeps the map's key order for equal lengths.
        entries.sort_by_key(|(key, _)| std::cmp::Reverse(key.chars().count()));

        Self {
            entries,
            active: !replacements.is_empty(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Replacement for a single word, if one of the keys matches it exactly.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        let word = word.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| *key == word)
            .map(|(_, value)| value.as_str())
    }

    /// Splits `name` into `_`-delimited words (after turning whitespace into
    /// `_`), swaps matching words and rejoins them with `separator`.
    pub fn apply(&self, name: &str, separator: Separator) -> String {
        if name.is_empty() {
            return String::new();
        }

        let normalized = WHITESPACE_RUN.replace_all(name, "_");
        normalized
            .split('_')
            .map(|word| self.lookup(word).unwrap_or(word))
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}
