//! Structured failure reports
//!
//! [`ValidationReport`] flattens a [`ValidationError`] into plain fields so a
//! caller can log it, collect it, or ship it as JSON.

use serde::{Deserialize, Serialize};

use csvvalidator_core::{Column, ErrorCategory, ValidationError};

/// Column reference as it appears in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub number: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<&Column> for ColumnRef {
    fn from(column: &Column) -> Self {
        Self {
            number: column.number(),
            name: column.has_name().then(|| column.name().to_string()),
        }
    }
}

/// Serializable description of one validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub category: ErrorCategory,
    /// Full human-readable diagnostic
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<Vec<String>>,
    /// Observed length or field count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<usize>,
    /// Required length or field count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<usize>,
}

impl ValidationReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&ValidationError> for ValidationReport {
    fn from(err: &ValidationError) -> Self {
        let (actual, expected) = match err {
            ValidationError::RowLengthMismatch {
                actual, expected, ..
            } => (Some(*actual), Some(*expected)),
            // a row must be at least one field wider than the column position
            ValidationError::ColumnOutOfRange { column, row_len } => {
                (Some(*row_len), Some(column.number().saturating_add(1)))
            }
            ValidationError::InvalidColumn { source, .. } => {
                (source.actual_length(), source.expected_length())
            }
            _ => (None, None),
        };

        Self {
            category: err.category(),
            message: err.to_string(),
            column: err.column().map(ColumnRef::from),
            row: err.row().map(<[String]>::to_vec),
            actual,
            expected,
        }
    }
}

impl From<ValidationError> for ValidationReport {
    fn from(err: ValidationError) -> Self {
        Self::from(&err)
    }
}
