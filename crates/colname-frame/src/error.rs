//! Error types for table renaming.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while renaming the columns of a table.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Two columns would end up with the same label.
    #[error("cleaned label '{label}' is produced by more than one column")]
    DuplicateLabel { label: String },

    /// New label list does not match the table width.
    #[error("expected {expected} labels, got {actual}")]
    LabelCount { expected: usize, actual: usize },

    /// Failed polars operation.
    #[error("polars operation failed: {0}")]
    Polars(#[from] PolarsError),
}

/// Result type for renaming operations.
pub type Result<T> = std::result::Result<T, RenameError>;
