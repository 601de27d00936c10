//! Cleaning configuration.
//!
//! [`CleaningConfig`] is deserializable from JSON with every field optional,
//! so a document only needs to name the settings it changes:
//!
//! ```
//! use colname_clean::{CaseType, CleaningConfig};
//!
//! let config = CleaningConfig::from_json(r#"{"case_type": "upper", "truncate_limit": 30}"#)?;
//! assert_eq!(config.case_type, CaseType::Upper);
//! assert!(config.strip_accents);
//! # Ok::<(), colname_clean::ConfigError>(())
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::separator::{SPACE_SENTINEL_KEY, Separator};

/// Which label set of a table is cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Column labels.
    #[default]
    Columns,
    /// Row labels. Accepted for compatibility; tables without row labels are
    /// returned unchanged.
    #[serde(alias = "rows")]
    Index,
}

/// How separators are stripped from the ends of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StripMode {
    #[default]
    None,
    Left,
    Right,
    Both,
}

/// Case convention applied to every word of a cleaned label.
///
/// Names are matched case-insensitively. Anything other than `lower`,
/// `upper` or `proper` is kept as [`CaseType::Unrecognized`] and leaves the
/// casing of each word alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseType {
    #[default]
    Lower,
    Upper,
    /// First word capitalized, the rest lowercased.
    Proper,
    Unrecognized(String),
}

impl CaseType {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "lower" => Self::Lower,
            "upper" => Self::Upper,
            "proper" => Self::Proper,
            _ => Self::Unrecognized(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Proper => "proper",
            Self::Unrecognized(name) => name,
        }
    }
}

impl From<String> for CaseType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<CaseType> for String {
    fn from(case: CaseType) -> Self {
        case.as_str().to_string()
    }
}

/// Options controlling how labels are cleaned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// Label set to clean.
    pub axis: Axis,

    /// Raw labels to clean; `None` (or an empty set) cleans every label.
    /// Deserializes from a single string or a list of strings.
    #[serde(deserialize_with = "one_or_many")]
    pub selected_labels: Option<BTreeSet<String>>,

    pub strip_underscores: StripMode,

    pub case_type: CaseType,

    /// Whole-word replacements, matched case-insensitively.
    /// The entry `"_" -> " "` switches the separator to a space.
    pub token_replacements: BTreeMap<String, String>,

    /// Transliterate non-ASCII characters to their closest ASCII form.
    pub strip_accents: bool,

    /// Maximum length of a cleaned label in characters. `0` means no limit.
    pub truncate_limit: Option<usize>,

    /// Split camelCase words before case folding.
    pub insert_underscores: bool,

    /// With [`CaseType::Proper`], capitalize every word instead of only the first.
    pub capitalize_first_letter_always: bool,

    /// Labels containing any of these substrings (case-insensitive) are left untouched.
    pub skip_patterns: Vec<String>,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Columns,
            selected_labels: None,
            strip_underscores: StripMode::None,
            case_type: CaseType::Lower,
            token_replacements: BTreeMap::new(),
            strip_accents: true,
            truncate_limit: None,
            insert_underscores: true,
            capitalize_first_letter_always: false,
            skip_patterns: Vec::new(),
        }
    }
}

impl CleaningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`](crate::ConfigError::Json) when the document
    /// is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Restrict cleaning to the given raw labels.
    #[must_use]
    pub fn with_selected_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_strip_underscores(mut self, mode: StripMode) -> Self {
        self.strip_underscores = mode;
        self
    }

    #[must_use]
    pub fn with_case_type(mut self, case_type: CaseType) -> Self {
        self.case_type = case_type;
        self
    }

    #[must_use]
    pub fn with_replacement(
        mut self,
        token: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.token_replacements
            .insert(token.into(), replacement.into());
        self
    }

    /// Join words with spaces instead of underscores.
    #[must_use]
    pub fn with_space_separator(self) -> Self {
        self.with_replacement(SPACE_SENTINEL_KEY, " ")
    }

    #[must_use]
    pub fn with_strip_accents(mut self, enable: bool) -> Self {
        self.strip_accents = enable;
        self
    }

    #[must_use]
    pub fn with_truncate_limit(mut self, limit: usize) -> Self {
        self.truncate_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_insert_underscores(mut self, enable: bool) -> Self {
        self.insert_underscores = enable;
        self
    }

    #[must_use]
    pub fn with_capitalize_first_letter_always(mut self, enable: bool) -> Self {
        self.capitalize_first_letter_always = enable;
        self
    }

    #[must_use]
    pub fn with_skip_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.skip_patterns.push(pattern.into());
        self
    }

    /// Separator used for every stage of a cleaning run.
    pub fn separator(&self) -> Separator {
        Separator::resolve(&self.token_replacements)
    }

    /// Truncation limit, with `0` treated as unset.
    pub fn effective_truncate_limit(&self) -> Option<usize> {
        self.truncate_limit.filter(|limit| *limit > 0)
    }

    /// Returns true if `label` should go through the cleaner.
    pub fn is_selected(&self, label: &str) -> bool {
        match &self.selected_labels {
            Some(selected) if !selected.is_empty() => selected.contains(label),
            _ => true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Option<BTreeSet<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(value.map(|labels| match labels {
        OneOrMany::One(label) => BTreeSet::from([label]),
        OneOrMany::Many(labels) => labels.into_iter().collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    #[test]
    fn test_defaults() {
        let config = CleaningConfig::default();
        assert_eq!(config.axis, Axis::Columns);
        assert_eq!(config.case_type, CaseType::Lower);
        assert_eq!(config.strip_underscores, StripMode::None);
        assert!(config.strip_accents);
        assert!(config.insert_underscores);
        assert!(!config.capitalize_first_letter_always);
        assert!(config.token_replacements.is_empty());
        assert!(config.truncate_limit.is_none());
        assert!(config.skip_patterns.is_empty());
        assert!(config.selected_labels.is_none());
        assert_eq!(config.separator(), Separator::Underscore);
    }

    #[test]
    fn test_case_type_from_name_ignores_case() {
        assert_eq!(CaseType::from_name("LOWER"), CaseType::Lower);
        assert_eq!(CaseType::from_name("Upper"), CaseType::Upper);
        assert_eq!(CaseType::from_name("proper"), CaseType::Proper);
        assert_eq!(
            CaseType::from_name("snake"),
            CaseType::Unrecognized("snake".to_string())
        );
    }

    #[test]
    fn test_from_json_partial_document() {
        let config = CleaningConfig::from_json(
            r#"{"case_type": "Proper", "strip_underscores": "both", "skip_patterns": ["id"]}"#,
        )
        .unwrap();
        assert_eq!(config.case_type, CaseType::Proper);
        assert_eq!(config.strip_underscores, StripMode::Both);
        assert_eq!(config.skip_patterns, vec!["id".to_string()]);
        assert!(config.strip_accents);
        assert!(config.insert_underscores);
    }

    #[test]
    fn test_from_json_space_separator() {
        let config =
            CleaningConfig::from_json(r#"{"token_replacements": {"_": " ", "Margin": "Pct"}}"#)
                .unwrap();
        assert_eq!(config.separator(), Separator::Space);
    }

    #[test]
    fn test_selected_labels_accept_single_string() {
        let config = CleaningConfig::from_json(r#"{"selected_labels": "Company Name"}"#).unwrap();
        assert!(config.is_selected("Company Name"));
        assert!(!config.is_selected("Ticker"));
    }

    #[test]
    fn test_selected_labels_accept_list() {
        let config =
            CleaningConfig::from_json(r#"{"selected_labels": ["Ticker", "P/E Ratio"]}"#).unwrap();
        assert!(config.is_selected("Ticker"));
        assert!(config.is_selected("P/E Ratio"));
        assert!(!config.is_selected("Company Name"));
    }

    #[test]
    fn test_empty_selection_selects_everything() {
        let config = CleaningConfig::new().with_selected_labels(Vec::<String>::new());
        assert!(config.is_selected("anything"));
    }

    #[test]
    fn test_axis_accepts_rows_alias() {
        let config = CleaningConfig::from_json(r#"{"axis": "rows"}"#).unwrap();
        assert_eq!(config.axis, Axis::Index);
    }

    #[test]
    fn test_zero_truncate_limit_is_unset() {
        let config = CleaningConfig::new().with_truncate_limit(0);
        assert_eq!(config.effective_truncate_limit(), None);
        let config = CleaningConfig::new().with_truncate_limit(12);
        assert_eq!(config.effective_truncate_limit(), Some(12));
    }

    #[test]
    fn test_case_type_roundtrips_through_json() {
        let config = CleaningConfig::new().with_case_type(CaseType::from_name("snake"));
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""case_type":"snake""#));
        let parsed = CleaningConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = CleaningConfig::from_json(r#"{"strip_accents": "yes"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
