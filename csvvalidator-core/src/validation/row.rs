//! Row shape and content validation

use super::rule_set::owned_row;
use crate::{Result, RowValidator, RuleSet, ValidationError};

/// Expected field count for a row plus the rules for its columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowDescriptor {
    columns_total: usize,
    rules: RuleSet,
}

impl RowDescriptor {
    /// Create a descriptor; `columns_total == 0` leaves it unconfigured
    pub const fn new(columns_total: usize, rules: RuleSet) -> Self {
        Self {
            columns_total,
            rules,
        }
    }

    pub const fn columns_total(&self) -> usize {
        self.columns_total
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Whether a non-zero column count has been set
    pub const fn is_configured(&self) -> bool {
        self.columns_total != 0
    }

    /// Check the field count, then every ruled column
    pub fn validate_row<S: AsRef<str>>(&self, row: &[S]) -> Result<()> {
        if !self.is_configured() {
            return Err(ValidationError::InvalidColumnsTotal);
        }

        if row.len() != self.columns_total {
            return Err(ValidationError::RowLengthMismatch {
                row: owned_row(row),
                actual: row.len(),
                expected: self.columns_total,
            });
        }

        self.rules.validate_row(row)
    }
}

impl RowValidator for RowDescriptor {
    fn validate_row<S: AsRef<str>>(&self, row: &[S]) -> Result<()> {
        RowDescriptor::validate_row(self, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, ErrorCategory, Rule};
    use alloc::string::ToString;
    use alloc::vec;

    fn rules() -> RuleSet {
        RuleSet::new()
            .with_rule(Column::new(0), Rule::between(3, 10))
            .with_rule(Column::new(1), Rule::between(0, 8))
            .with_rule(Column::new(2), Rule::between(3, 10))
            .with_rule(Column::new(3), Rule::between(2, 10))
    }

    #[test]
    fn test_all_rules_pass() {
        let row = RowDescriptor::new(6, rules());
        assert_eq!(
            row.validate_row(&["1234567890", "", "123", "12", "", ""]),
            Ok(())
        );
    }

    #[test]
    fn test_columns_number_mismatch() {
        let err = RowDescriptor::new(6, rules())
            .validate_row(&["1234567890", "", "123", "12"])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::RowLengthMismatch {
                row: vec!["1234567890".into(), "".into(), "123".into(), "12".into()],
                actual: 4,
                expected: 6,
            }
        );
        assert_eq!(err.category(), ErrorCategory::Shape);
        let message = err.to_string();
        assert!(message.contains("columns num:[4]"));
        assert!(message.contains("should be:[6]"));
    }

    #[test]
    fn test_unconfigured_total_always_fails() {
        let row = RowDescriptor::new(0, rules());
        assert!(!row.is_configured());
        for fields in [&["1234567890", "", "123", "12"][..], &[][..], &["x"][..]] {
            assert_eq!(
                row.validate_row(fields),
                Err(ValidationError::InvalidColumnsTotal)
            );
        }
    }

    #[test]
    fn test_column_rule_failure_is_passed_through() {
        let row = RowDescriptor::new(6, rules());
        let fields = ["1234567890", "123456789", "123", "", "", ""];
        assert_eq!(row.validate_row(&fields), rules().validate_row(&fields));
        assert!(row.validate_row(&fields).is_err());
    }

    #[test]
    fn test_missing_rules() {
        let row = RowDescriptor::new(6, RuleSet::new());
        assert_eq!(
            row.validate_row(&["1234567890", "123456789", "123", "", "", ""]),
            Err(ValidationError::RulesNotSpecified)
        );
    }

    #[test]
    fn test_shape_checked_before_rules() {
        let row = RowDescriptor::new(2, RuleSet::new());
        assert!(matches!(
            row.validate_row(&["a", "b", "c"]),
            Err(ValidationError::RowLengthMismatch { actual: 3, expected: 2, .. })
        ));
    }

    #[test]
    fn test_trait_dispatch() {
        fn check<V: RowValidator>(validator: &V, row: &[&str]) -> bool {
            validator.is_valid_row(row)
        }
        let row = RowDescriptor::new(6, rules());
        assert!(check(&row, &["1234567890", "", "123", "12", "", ""]));
        assert!(!check(&row, &["1234567890"]));
        assert!(check(row.rules(), &["1234567890", "", "123", "12"]));
    }
}
