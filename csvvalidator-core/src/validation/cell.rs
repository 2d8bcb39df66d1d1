//! Single field validation against a [`Rule`]

use alloc::string::String;

use crate::{CellError, Rule};

/// Validate one field value against a rule
///
/// Checks run in a fixed order and the first violation is returned:
/// emptiness, exact length, minimum length, maximum length, then restricted
/// characters. Lengths are measured in bytes.
pub fn validate_cell(value: &str, rule: &Rule) -> Result<(), CellError> {
    let len = value.len();

    if rule.min_length != 0 && value.is_empty() {
        return Err(CellError::Empty {
            min: rule.min_length,
        });
    }

    if rule.is_exact() {
        if len != rule.min_length {
            return Err(CellError::ExactLength {
                value: String::from(value),
                actual: len,
                expected: rule.min_length,
            });
        }
    } else if len < rule.min_length {
        return Err(CellError::TooShort {
            value: String::from(value),
            actual: len,
            min: rule.min_length,
        });
    } else if rule.max_length != 0 && len > rule.max_length {
        return Err(CellError::TooLong {
            value: String::from(value),
            actual: len,
            max: rule.max_length,
        });
    }

    if let Some(found) = rule.find_restricted(value) {
        return Err(CellError::RestrictedChars {
            value: String::from(value),
            found,
        });
    }

    Ok(())
}
