//! Tables with an ordered list of column labels.

use polars::prelude::*;

use crate::error::{RenameError, Result};

/// A table whose column labels can be read and replaced without touching its data.
pub trait LabeledTable: Sized {
    /// Column labels in table order.
    ///
    /// # Errors
    ///
    /// Returns an error if the labels cannot be resolved (e.g. an invalid lazy plan).
    fn labels(&mut self) -> Result<Vec<String>>;

    /// Returns the table with its labels replaced position by position.
    ///
    /// `current` is the result of a prior [`labels`](Self::labels) call, so
    /// the labels are not resolved a second time.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::LabelCount`] if `labels` does not match the
    /// table width, or a polars error if the backend rejects the names.
    fn with_labels(self, current: &[String], labels: &[String]) -> Result<Self>;
}

impl LabeledTable for DataFrame {
    fn labels(&mut self) -> Result<Vec<String>> {
        Ok(self
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str().to_string())
            .collect())
    }

    fn with_labels(mut self, _current: &[String], labels: &[String]) -> Result<Self> {
        check_label_count(self.width(), labels.len())?;
        self.set_column_names(labels.iter().map(String::as_str))?;
        Ok(self)
    }
}

impl LabeledTable for LazyFrame {
    fn labels(&mut self) -> Result<Vec<String>> {
        let schema = self.collect_schema()?;
        Ok(schema
            .iter_names()
            .map(|name| name.as_str().to_string())
            .collect())
    }

    fn with_labels(self, current: &[String], labels: &[String]) -> Result<Self> {
        check_label_count(current.len(), labels.len())?;

        let exprs: Vec<Expr> = current
            .iter()
            .zip(labels)
            .map(|(old, new)| col(old.as_str()).alias(new.as_str()))
            .collect();
        Ok(self.select(exprs))
    }
}

fn check_label_count(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(RenameError::LabelCount { expected, actual })
    }
}
