//! Column renaming for polars tables.
//!
//! Applies [`colname_clean`] to the column labels of a `DataFrame` or
//! `LazyFrame`, keeping column order and data unchanged.
//!
//! # Example
//!
//! ```
//! use colname_clean::CleaningConfig;
//! use colname_frame::rename;
//! use polars::prelude::*;
//!
//! let df = df!(
//!     "Company Name" => ["Apple Inc."],
//!     "Market Cap ($)" => [2.9e12],
//!     "P/E Ratio" => [29.4],
//! )?;
//!
//! let df = rename(df, &CleaningConfig::default());
//! let names: Vec<&str> = df.get_column_names().into_iter().map(PlSmallStr::as_str).collect();
//! assert_eq!(names, ["company_name", "market_cap", "p_e_ratio"]);
//! # Ok::<(), PolarsError>(())
//! ```
//!
//! # Failure handling
//!
//! [`rename`] never fails: on any error it logs a warning and hands back the
//! original table. [`try_rename`] returns the [`RenameError`] instead. Polars
//! rejects duplicate column names, so two columns that clean to the same
//! label surface as [`RenameError::DuplicateLabel`].

mod error;
mod renamer;
mod table;

// === Error Types ===
pub use error::{RenameError, Result};

// === Tables ===
pub use table::LabeledTable;

// === Renaming ===
pub use renamer::{TableRenamer, column_mapping, rename, try_rename};
