//! Column label cleaning.
//!
//! Turns messy column headers ("Market Cap ($)", "Société Générale",
//! "revenue2023") into predictable identifiers ("market_cap",
//! "societe_generale", "revenue_2023").
//!
//! # Overview
//!
//! - **Configuration**: [`CleaningConfig`], deserializable from JSON with defaults for every field
//! - **Cleaning**: [`NameCleaner`] runs a label through the ordered [`Stage::PIPELINE`]
//! - **Separators**: [`Separator`] is `_` unless the `"_" -> " "` replacement selects a space
//!
//! # Example
//!
//! ```
//! use colname_clean::{CaseType, CleaningConfig, NameCleaner};
//!
//! let cleaner = NameCleaner::new(CleaningConfig::new().with_case_type(CaseType::Upper));
//! assert_eq!(cleaner.clean("Revenue Growth"), "REVENUE_GROWTH");
//!
//! let spaced = NameCleaner::new(
//!     CleaningConfig::new()
//!         .with_space_separator()
//!         .with_replacement("Margin", "Pct"),
//! );
//! assert_eq!(spaced.clean("Gross_Margin"), "gross pct");
//! ```
//!
//! # Design Principles
//!
//! - **Total**: every input, including `None`, cleans to some string without failing
//! - **Pure**: output depends only on the label and the configuration
//! - **Idempotent**: without truncation, cleaning a cleaned label returns it unchanged
//! - **No deduplication**: two labels may clean to the same identifier

mod cleaner;
mod config;
mod error;
mod patterns;
mod replace;
mod separator;
mod stage;

// === Error Types ===
pub use error::{ConfigError, Result};

// === Configuration ===
pub use config::{Axis, CaseType, CleaningConfig, StripMode};
pub use separator::{SPACE_SENTINEL_KEY, Separator};

// === Cleaning ===
pub use cleaner::{NameCleaner, clean_name};
pub use replace::ReplacementTable;
pub use stage::Stage;
