//! Core traits for row validation

use crate::Result;

/// Anything that can validate a row of already-split fields
pub trait RowValidator {
    /// Validate the row, returning the first failure encountered
    fn validate_row<S: AsRef<str>>(&self, row: &[S]) -> Result<()>;

    /// Verdict only, discarding the diagnostic
    fn is_valid_row<S: AsRef<str>>(&self, row: &[S]) -> bool {
        self.validate_row(row).is_ok()
    }
}

impl<V: RowValidator + ?Sized> RowValidator for &V {
    fn validate_row<S: AsRef<str>>(&self, row: &[S]) -> Result<()> {
        (**self).validate_row(row)
    }
}
