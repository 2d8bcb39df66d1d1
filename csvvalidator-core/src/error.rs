//! Error types for row and cell validation

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Column;

/// Broad classification of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ErrorCategory {
    /// Rule set or row descriptor is not configured
    Configuration,
    /// Row field count does not match the descriptor
    Shape,
    /// Row has no fields
    EmptyInput,
    /// A field that must be filled is empty
    CellEmptiness,
    /// A field violates an exact, minimum or maximum length
    CellLength,
    /// A field contains a forbidden character
    RestrictedCharacter,
    /// A rule points past the end of the row
    Index,
}

impl ErrorCategory {
    /// Stable lowercase identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Shape => "shape",
            ErrorCategory::EmptyInput => "empty_input",
            ErrorCategory::CellEmptiness => "cell_emptiness",
            ErrorCategory::CellLength => "cell_length",
            ErrorCategory::RestrictedCharacter => "restricted_character",
            ErrorCategory::Index => "index",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single field against its rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Field is empty but the rule has a minimum length
    Empty { min: usize },
    /// Field length differs from the exact length required
    ExactLength {
        value: String,
        actual: usize,
        expected: usize,
    },
    /// Field is shorter than the minimum length
    TooShort {
        value: String,
        actual: usize,
        min: usize,
    },
    /// Field is longer than the maximum length
    TooLong {
        value: String,
        actual: usize,
        max: usize,
    },
    /// Field contains a restricted character
    RestrictedChars { value: String, found: char },
}

impl CellError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            CellError::Empty { .. } => ErrorCategory::CellEmptiness,
            CellError::ExactLength { .. }
            | CellError::TooShort { .. }
            | CellError::TooLong { .. } => ErrorCategory::CellLength,
            CellError::RestrictedChars { .. } => ErrorCategory::RestrictedCharacter,
        }
    }

    /// Observed field length, when the failure is about length
    pub const fn actual_length(&self) -> Option<usize> {
        match self {
            CellError::ExactLength { actual, .. }
            | CellError::TooShort { actual, .. }
            | CellError::TooLong { actual, .. } => Some(*actual),
            CellError::Empty { .. } => Some(0),
            CellError::RestrictedChars { .. } => None,
        }
    }

    /// The length bound that was violated
    pub const fn expected_length(&self) -> Option<usize> {
        match self {
            CellError::ExactLength { expected, .. } => Some(*expected),
            CellError::TooShort { min, .. } | CellError::Empty { min } => Some(*min),
            CellError::TooLong { max, .. } => Some(*max),
            CellError::RestrictedChars { .. } => None,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellError::Empty { .. } => f.write_str("should not be empty"),
            CellError::ExactLength {
                value,
                actual,
                expected,
            } => write!(
                f,
                "invalid length [column:[{value}]; has len:[{actual}]; should be:[{expected}]]"
            ),
            CellError::TooShort { value, actual, min } => write!(
                f,
                "invalid length [column:[{value}]; has len:[{actual}]; should be at least:[{min}]]"
            ),
            CellError::TooLong { value, actual, max } => write!(
                f,
                "invalid length [column:[{value}]; has len:[{actual}]; should be at most:[{max}]]"
            ),
            CellError::RestrictedChars { value, found } => write!(
                f,
                "contains restricted characters [column:[{value}]; found:[{found}]]"
            ),
        }
    }
}

/// Errors that can occur while validating a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Rule set has no entries
    RulesNotSpecified,
    /// Row descriptor expects zero columns
    InvalidColumnsTotal,
    /// Row has no fields
    EmptyRow,
    /// Row field count differs from the descriptor
    RowLengthMismatch {
        row: Vec<String>,
        actual: usize,
        expected: usize,
    },
    /// A ruled column lies beyond the end of the row
    ColumnOutOfRange { column: Column, row_len: usize },
    /// A field failed its rule
    InvalidColumn {
        row: Vec<String>,
        column: Column,
        source: CellError,
    },
}

impl ValidationError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ValidationError::RulesNotSpecified | ValidationError::InvalidColumnsTotal => {
                ErrorCategory::Configuration
            }
            ValidationError::EmptyRow => ErrorCategory::EmptyInput,
            ValidationError::RowLengthMismatch { .. } => ErrorCategory::Shape,
            ValidationError::ColumnOutOfRange { .. } => ErrorCategory::Index,
            ValidationError::InvalidColumn { source, .. } => source.category(),
        }
    }

    /// Column the failure is attributed to, if any
    pub fn column(&self) -> Option<&Column> {
        match self {
            ValidationError::ColumnOutOfRange { column, .. }
            | ValidationError::InvalidColumn { column, .. } => Some(column),
            _ => None,
        }
    }

    /// Row content carried by the failure, if any
    pub fn row(&self) -> Option<&[String]> {
        match self {
            ValidationError::RowLengthMismatch { row, .. }
            | ValidationError::InvalidColumn { row, .. } => Some(row),
            _ => None,
        }
    }

    /// Underlying cell failure for column errors
    pub fn cell_error(&self) -> Option<&CellError> {
        match self {
            ValidationError::InvalidColumn { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Renders fields space separated inside brackets
struct RowContent<'a>(&'a [String]);

impl fmt::Display for RowContent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(field)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::RulesNotSpecified => f.write_str("validation rules not specified"),
            ValidationError::InvalidColumnsTotal => {
                f.write_str("invalid columns total number specified in rules")
            }
            ValidationError::EmptyRow => f.write_str("empty row"),
            ValidationError::RowLengthMismatch {
                row,
                actual,
                expected,
            } => write!(
                f,
                "invalid row [row:{}; columns num:[{actual}]; should be:[{expected}]]",
                RowContent(row)
            ),
            ValidationError::ColumnOutOfRange { column, row_len } => write!(
                f,
                "column out of range [column:{column}; row len:[{row_len}]]"
            ),
            ValidationError::InvalidColumn {
                row,
                column,
                source,
            } => write!(
                f,
                "invalid column [row:{}; column:{column}]: {source}",
                RowContent(row)
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CellError {}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::InvalidColumn { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for validation operations
pub type Result<T> = core::result::Result<T, ValidationError>;
