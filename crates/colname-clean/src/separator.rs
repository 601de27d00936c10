//! Word separator resolution.

use std::collections::BTreeMap;
use std::fmt;

/// Replacement key that, when mapped to a single space, switches the whole
/// pipeline from underscore to space separators.
pub const SPACE_SENTINEL_KEY: &str = "_";

/// Character used to join word tokens in cleaned labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Separator {
    /// `_` (the default).
    #[default]
    Underscore,
    /// ` `, selected by the `"_" -> " "` replacement entry.
    Space,
}

impl Separator {
    /// Resolves the separator for a replacement table.
    pub fn resolve(replacements: &BTreeMap<String, String>) -> Self {
        match replacements.get(SPACE_SENTINEL_KEY) {
            Some(value) if value == " " => Self::Space,
            _ => Self::Underscore,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Underscore => '_',
            Self::Space => ' ',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underscore => "_",
            Self::Space => " ",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
