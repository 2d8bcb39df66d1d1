//! Logging wrapper around any [`RowValidator`]

use tracing::{debug, trace, warn};

use csvvalidator_core::{Column, Result, RowDescriptor, RowValidator};

use crate::report::ValidationReport;
use crate::schema::{RowSchema, SchemaError};

/// Validator that emits `tracing` events for every row it checks
#[derive(Debug, Clone)]
pub struct Validator<V> {
    inner: V,
}

impl<V: RowValidator> Validator<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }

    /// Validate a row, logging the outcome
    pub fn validate<S: AsRef<str>>(&self, row: &[S]) -> Result<()> {
        debug!(fields = row.len(), "validating row");

        match self.inner.validate_row(row) {
            Ok(()) => {
                trace!("row passed validation");
                Ok(())
            }
            Err(err) => {
                warn!(
                    category = %err.category(),
                    column = ?err.column().map(Column::number),
                    "row failed validation: {err}"
                );
                Err(err)
            }
        }
    }

    /// Validate a row and return a report for the failure, if any
    pub fn check<S: AsRef<str>>(&self, row: &[S]) -> Option<ValidationReport> {
        self.validate(row).err().map(ValidationReport::from)
    }
}

impl Validator<RowDescriptor> {
    /// Build a validator from a schema
    pub fn from_schema(schema: RowSchema) -> std::result::Result<Self, SchemaError> {
        Ok(Self::new(schema.into_descriptor()?))
    }
}

impl<V: RowValidator> RowValidator for Validator<V> {
    fn validate_row<S: AsRef<str>>(&self, row: &[S]) -> Result<()> {
        self.validate(row)
    }
}

impl<V: RowValidator> From<V> for Validator<V> {
    fn from(inner: V) -> Self {
        Self::new(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvvalidator_core::{ErrorCategory, Rule, RuleSet, ValidationError};

    fn validator() -> Validator<RowDescriptor> {
        let rules = RuleSet::new()
            .with_rule(Column::new(0), Rule::between(3, 10))
            .with_rule(Column::new(1), Rule::between(0, 8))
            .with_rule(Column::new(2), Rule::between(3, 10))
            .with_rule(Column::new(3), Rule::between(2, 10));
        Validator::new(RowDescriptor::new(6, rules))
    }

    #[test]
    fn test_validate_passes_through() {
        let v = validator();
        assert_eq!(v.validate(&["1234567890", "", "123", "12", "", ""]), Ok(()));
        assert_eq!(
            v.validate(&["1234567890", "", "123", "12"]),
            v.inner().validate_row(&["1234567890", "", "123", "12"])
        );
    }

    #[test]
    fn test_check_reports() {
        let v = validator();
        assert_eq!(v.check(&["1234567890", "", "123", "12", "", ""]), None);

        let report = v.check(&["1234567890", "123456789", "123", "", "", ""]).unwrap();
        assert_eq!(report.category, ErrorCategory::CellLength);
        assert_eq!(report.column.map(|c| c.number), Some(1));
    }

    #[test]
    fn test_wraps_rule_set() {
        let v = Validator::from(RuleSet::new());
        assert_eq!(
            v.validate(&["a"]),
            Err(ValidationError::RulesNotSpecified)
        );
        assert!(!v.is_valid_row(&["a"]));
    }

    #[test]
    fn test_from_schema() {
        let schema = RowSchema::from_json_str(
            r#"{"columns_total": 2, "columns": [{"number": 1, "preset": "not_empty"}]}"#,
        )
        .unwrap();
        let v = Validator::from_schema(schema).unwrap();
        assert!(v.is_valid_row(&["", "x"]));
        assert!(!v.is_valid_row(&["x", ""]));
    }
}
