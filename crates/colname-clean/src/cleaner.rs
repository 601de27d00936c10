//! The label cleaner.

use crate::config::{CaseType, CleaningConfig};
use crate::replace::ReplacementTable;
use crate::separator::Separator;
use crate::stage::Stage;

/// Cleans raw labels with a fixed configuration.
///
/// The separator, replacement order and lowercased skip patterns are resolved
/// once at construction; [`clean`](Self::clean) only reads them, so a single
/// cleaner can be shared across threads.
///
/// # Example
///
/// ```
/// use colname_clean::{CleaningConfig, NameCleaner};
///
/// let cleaner = NameCleaner::new(CleaningConfig::default());
/// assert_eq!(cleaner.clean("Market Cap ($)"), "market_cap");
/// assert_eq!(cleaner.clean("revenue2023"), "revenue_2023");
/// ```
#[derive(Debug, Clone)]
pub struct NameCleaner {
    config: CleaningConfig,
    separator: Separator,
    replacements: ReplacementTable,
    skip_patterns: Vec<String>,
}

impl NameCleaner {
    pub fn new(config: CleaningConfig) -> Self {
        if let CaseType::Unrecognized(name) = &config.case_type {
            tracing::debug!(case_type = %name, "Unrecognized case type, word casing is kept");
        }

        Self {
            separator: config.separator(),
            replacements: ReplacementTable::new(&config.token_replacements),
            skip_patterns: config
                .skip_patterns
                .iter()
                .map(|pattern| pattern.to_lowercase())
                .collect(),
            config,
        }
    }

    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn replacements(&self) -> &ReplacementTable {
        &self.replacements
    }

    /// Cleans one label.
    ///
    /// Labels matching a skip pattern are returned as-is; everything else
    /// runs through every stage of [`Stage::PIPELINE`].
    pub fn clean(&self, raw: &str) -> String {
        if let Some(pattern) = self.matching_skip_pattern(raw) {
            tracing::debug!(label = raw, pattern, "Label matches skip pattern, left unchanged");
            return raw.to_string();
        }

        let cleaned = Stage::PIPELINE
            .iter()
            .fold(raw.to_string(), |name, stage| stage.apply(name, self));

        tracing::trace!(raw, cleaned = %cleaned, "Cleaned label");
        cleaned
    }

    /// Cleans a label that may be missing; a missing label cleans to `""`.
    pub fn clean_opt(&self, raw: Option<&str>) -> String {
        raw.map(|label| self.clean(label)).unwrap_or_default()
    }

    /// Cleans every label, keeping input order.
    pub fn clean_all<I, S>(&self, labels: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| self.clean(label.as_ref()))
            .collect()
    }

    /// Returns true if `label` is part of the configured selection.
    pub fn should_clean(&self, label: &str) -> bool {
        self.config.is_selected(label)
    }

    fn matching_skip_pattern(&self, raw: &str) -> Option<&str> {
        if self.skip_patterns.is_empty() {
            return None;
        }
        let lowered = raw.to_lowercase();
        self.skip_patterns
            .iter()
            .find(|pattern| lowered.contains(pattern.as_str()))
            .map(String::as_str)
    }
}

/// Cleans a single, possibly missing, label with `config`.
///
/// Builds a [`NameCleaner`] per call; reuse one when cleaning many labels.
pub fn clean_name(raw: Option<&str>, config: &CleaningConfig) -> String {
    NameCleaner::new(config.clone()).clean_opt(raw)
}
