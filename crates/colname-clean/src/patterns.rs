//! Compiled regular expressions shared by the cleaning stages.

use std::sync::LazyLock;

use regex::Regex;

use crate::separator::Separator;

pub(crate) static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Lowercase letter directly followed by an uppercase letter.
pub(crate) static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("Invalid camel case regex"));

/// One letter, a hyphen, then a letter run, bounded by whitespace, `_` or the label ends.
pub(crate) static HYPHENATED_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\s|_)([a-zA-Z])-([a-zA-Z]+)(\s|$|_)").expect("Invalid hyphen regex")
});

pub(crate) static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("Invalid non-word regex"));

pub(crate) static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z])(\d+)$").expect("Invalid trailing number regex"));

/// Patterns whose text embeds the separator character.
pub(crate) struct SeparatorPatterns {
    /// Separator or non-word runs at either end of the label.
    pub edge_run: Regex,
    /// Two or more consecutive separators.
    pub repeated: Regex,
    /// `<sep><letter><sep><digits>` at the end of the label.
    pub letter_digit_tail: Regex,
}

impl SeparatorPatterns {
    fn compile(separator: Separator) -> Self {
        let sep = regex::escape(separator.as_str());
        Self {
            edge_run: Regex::new(&format!(r"^[{sep}\W]+|[{sep}\W]+$"))
                .expect("Invalid edge regex"),
            repeated: Regex::new(&format!("[{sep}]{{2,}}")).expect("Invalid repeat regex"),
            letter_digit_tail: Regex::new(&format!(r"{sep}([a-zA-Z]){sep}(\d+)$"))
                .expect("Invalid tail regex"),
        }
    }
}

static UNDERSCORE_PATTERNS: LazyLock<SeparatorPatterns> =
    LazyLock::new(|| SeparatorPatterns::compile(Separator::Underscore));

static SPACE_PATTERNS: LazyLock<SeparatorPatterns> =
    LazyLock::new(|| SeparatorPatterns::compile(Separator::Space));

pub(crate) fn for_separator(separator: Separator) -> &'static SeparatorPatterns {
    match separator {
        Separator::Underscore => &UNDERSCORE_PATTERNS,
        Separator::Space => &SPACE_PATTERNS,
    }
}
