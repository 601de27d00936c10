//! Column renaming with cleaned labels.

use std::collections::HashSet;

use colname_clean::{Axis, CleaningConfig, NameCleaner};

use crate::error::{RenameError, Result};
use crate::table::LabeledTable;

/// Renames table columns using a [`NameCleaner`].
///
/// Columns outside the configured selection keep their label; every other
/// column is renamed to its cleaned label. Column order and data are untouched.
#[derive(Debug, Clone)]
pub struct TableRenamer {
    cleaner: NameCleaner,
}

impl TableRenamer {
    pub fn new(config: CleaningConfig) -> Self {
        Self {
            cleaner: NameCleaner::new(config),
        }
    }

    pub fn cleaner(&self) -> &NameCleaner {
        &self.cleaner
    }

    /// Original-to-new label pairs for `labels`, one per label, in order.
    pub fn mapping<S: AsRef<str>>(&self, labels: &[S]) -> Vec<(String, String)> {
        labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                let renamed = if self.cleaner.should_clean(label) {
                    self.cleaner.clean(label)
                } else {
                    label.to_string()
                };
                (label.to_string(), renamed)
            })
            .collect()
    }

    /// Renames the columns of `table`, reporting any failure.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::DuplicateLabel`] when two columns clean to the
    /// same label, or the error raised by the table backend.
    pub fn try_rename<T: LabeledTable>(&self, mut table: T) -> Result<T> {
        if self.cleaner.config().axis == Axis::Index {
            tracing::debug!("Index axis requested, table has no row labels to rename");
            return Ok(table);
        }

        let original = table.labels()?;
        let renamed: Vec<String> = self
            .mapping(&original)
            .into_iter()
            .map(|(_, new)| new)
            .collect();
        ensure_unique(&renamed)?;

        let changed = original
            .iter()
            .zip(&renamed)
            .filter(|(old, new)| old != new)
            .count();
        tracing::debug!(columns = original.len(), changed, "Renaming columns");

        table.with_labels(&original, &renamed)
    }

    /// Renames the columns of `table`, falling back to the original table.
    ///
    /// Failures are logged as warnings and the unrenamed table is returned,
    /// so an unchanged result may signal a failure. Use
    /// [`try_rename`](Self::try_rename) to inspect the error.
    pub fn rename<T: LabeledTable + Clone>(&self, table: T) -> T {
        match self.try_rename(table.clone()) {
            Ok(renamed) => renamed,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to rename columns, keeping original labels");
                table
            }
        }
    }
}

fn ensure_unique(labels: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(RenameError::DuplicateLabel {
                label: label.clone(),
            });
        }
    }
    Ok(())
}

/// Renames the columns of `table` with `config`, returning the original
/// table (and logging a warning) if anything fails.
pub fn rename<T: LabeledTable + Clone>(table: T, config: &CleaningConfig) -> T {
    TableRenamer::new(config.clone()).rename(table)
}

/// Like [`rename`], but returns the failure instead of the original table.
///
/// # Errors
///
/// See [`TableRenamer::try_rename`].
pub fn try_rename<T: LabeledTable>(table: T, config: &CleaningConfig) -> Result<T> {
    TableRenamer::new(config.clone()).try_rename(table)
}

/// Original-to-new label pairs for `labels` under `config`.
pub fn column_mapping<S: AsRef<str>>(
    labels: &[S],
    config: &CleaningConfig,
) -> Vec<(String, String)> {
    TableRenamer::new(config.clone()).mapping(labels)
}
