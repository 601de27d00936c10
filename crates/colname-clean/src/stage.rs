//! Ordered rewrite stages of the cleaning pipeline.
//!
//! Each stage is a pure `String -> String` transform. Structural detection
//! (camel case, hyphens, illegal characters) runs before case folding and the
//! cosmetic repairs run after it; [`Stage::PIPELINE`] fixes that order.

use crate::cleaner::NameCleaner;
use crate::config::{CaseType, StripMode};
use crate::patterns::{
    CAMEL_BOUNDARY, HYPHENATED_FRAGMENT, NON_WORD_RUN, TRAILING_NUMBER, WHITESPACE_RUN,
    for_separator,
};
use crate::separator::Separator;

/// A single step of the cleaning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Transliterate to ASCII (when `strip_accents` is set).
    StripAccents,
    /// Whole-word token replacement (when any replacement is configured).
    ReplaceTokens,
    /// Whitespace runs become the separator.
    NormalizeWhitespace,
    /// Trim separators from the ends selected by `strip_underscores`.
    StripSeparators,
    /// `marketCap` -> `market_Cap` (when `insert_underscores` is set).
    SplitCamelCase,
    /// `e-mail` -> `email` for a single letter joined to a word by a hyphen.
    HealHyphens,
    /// Runs of non-word characters become the separator.
    CollapseIllegal,
    /// Drop separator and non-word runs at either end.
    TrimEdges,
    /// Collapse repeated separators.
    DedupSeparators,
    /// `revenue2023` -> `revenue_2023`.
    SplitTrailingNumber,
    /// Apply the configured [`CaseType`] word by word.
    FoldCase,
    /// Cut to `truncate_limit` characters.
    Truncate,
    /// Join two adjacent one-letter words after the first word of a label.
    JoinSingleLetters,
    /// `fiscal_q_4` -> `fiscal_q4`.
    HealLetterDigitTail,
}

impl Stage {
    /// All stages in execution order.
    pub const PIPELINE: [Stage; 14] = [
        Stage::StripAccents,
        Stage::ReplaceTokens,
        Stage::NormalizeWhitespace,
        Stage::StripSeparators,
        Stage::SplitCamelCase,
        Stage::HealHyphens,
        Stage::CollapseIllegal,
        Stage::TrimEdges,
        Stage::DedupSeparators,
        Stage::SplitTrailingNumber,
        Stage::FoldCase,
        Stage::Truncate,
        Stage::JoinSingleLetters,
        Stage::HealLetterDigitTail,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Stage::StripAccents => "strip_accents",
            Stage::ReplaceTokens => "replace_tokens",
            Stage::NormalizeWhitespace => "normalize_whitespace",
            Stage::StripSeparators => "strip_separators",
            Stage::SplitCamelCase => "split_camel_case",
            Stage::HealHyphens => "heal_hyphens",
            Stage::CollapseIllegal => "collapse_illegal",
            Stage::TrimEdges => "trim_edges",
            Stage::DedupSeparators => "dedup_separators",
            Stage::SplitTrailingNumber => "split_trailing_number",
            Stage::FoldCase => "fold_case",
            Stage::Truncate => "truncate",
            Stage::JoinSingleLetters => "join_single_letters",
            Stage::HealLetterDigitTail => "heal_letter_digit_tail",
        }
    }

    /// Runs this stage with the settings held by `cleaner`.
    ///
    /// Stages whose option is switched off return `name` unchanged.
    pub fn apply(self, name: String, cleaner: &NameCleaner) -> String {
        let config = cleaner.config();
        let separator = cleaner.separator();
        let sep = separator.as_str();

        match self {
            Stage::StripAccents if config.strip_accents => unidecode::unidecode(&name),
            Stage::ReplaceTokens if cleaner.replacements().is_active() => {
                cleaner.replacements().apply(&name, separator)
            }
            Stage::NormalizeWhitespace => WHITESPACE_RUN.replace_all(&name, sep).into_owned(),
            Stage::StripSeparators => strip_separators(name, config.strip_underscores, separator),
            Stage::SplitCamelCase if config.insert_underscores => CAMEL_BOUNDARY
                .replace_all(&name, format!("${{1}}{sep}${{2}}"))
                .into_owned(),
            Stage::HealHyphens => HYPHENATED_FRAGMENT
                .replace_all(&name, "${1}${2}${3}${4}")
                .into_owned(),
            Stage::CollapseIllegal => NON_WORD_RUN.replace_all(&name, sep).into_owned(),
            Stage::TrimEdges => for_separator(separator)
                .edge_run
                .replace_all(&name, "")
                .into_owned(),
            Stage::DedupSeparators => for_separator(separator)
                .repeated
                .replace_all(&name, sep)
                .into_owned(),
            Stage::SplitTrailingNumber => TRAILING_NUMBER
                .replace_all(&name, format!("${{1}}{sep}${{2}}"))
                .into_owned(),
            Stage::FoldCase => fold_case(
                name,
                &config.case_type,
                config.capitalize_first_letter_always,
                separator,
            ),
            Stage::Truncate => match config.effective_truncate_limit() {
                Some(limit) => name.chars().take(limit).collect(),
                None => name,
            },
            Stage::JoinSingleLetters => join_single_letters(name, separator),
            Stage::HealLetterDigitTail => for_separator(separator)
                .letter_digit_tail
                .replace_all(&name, format!("{sep}${{1}}${{2}}"))
                .into_owned(),
            Stage::StripAccents | Stage::ReplaceTokens | Stage::SplitCamelCase => name,
        }
    }
}

fn strip_separators(name: String, mode: StripMode, separator: Separator) -> String {
    let sep = separator.as_char();
    match mode {
        StripMode::None => name,
        StripMode::Left => name.trim_start_matches(sep).to_string(),
        StripMode::Right => name.trim_end_matches(sep).to_string(),
        StripMode::Both => name.trim_matches(sep).to_string(),
    }
}

fn fold_case(name: String, case: &CaseType, capitalize_all: bool, separator: Separator) -> String {
    if matches!(case, CaseType::Unrecognized(_)) {
        return name;
    }

    name.split(separator.as_char())
        .enumerate()
        .map(|(idx, word)| match case {
            CaseType::Upper => word.to_uppercase(),
            CaseType::Proper if capitalize_all || idx == 0 => capitalize(word),
            _ => word.to_lowercase(),
        })
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn is_single_lowercase_letter(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}

/// Joins pairs of one-letter lowercase words that follow a separator. A pair
/// at the start of the label is kept apart, so `p_e_ratio` stays as it is
/// while `class_a_b_shares` becomes `class_ab_shares` and `ratio_p_e` becomes
/// `ratio_pe`.
fn join_single_letters(name: String, separator: Separator) -> String {
    let sep = separator.as_char();
    let word_count = name.split(sep).count();
    if word_count < 3 {
        return name;
    }

    let mut joined: Vec<String> = Vec::with_capacity(word_count);
    let mut words = name.split(sep).enumerate().peekable();
    while let Some((idx, word)) = words.next() {
        if idx > 0
            && is_single_lowercase_letter(word)
            && let Some((_, next)) = words.next_if(|(_, next)| is_single_lowercase_letter(next))
        {
            joined.push(format!("{word}{next}"));
            continue;
        }
        joined.push(word.to_string());
    }

    joined.join(separator.as_str())
}
