//! Column addressing within a row

use alloc::string::String;
use core::fmt;

/// Position of a field in a row, with an optional label for diagnostics
///
/// Columns are compared by `(number, name)`. Two columns sharing a number but
/// carrying different names are distinct keys in a [`RuleSet`](crate::RuleSet)
/// and are both checked against the same field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    number: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    name: String,
}

impl Column {
    /// Create an unnamed column at a zero-based position
    pub const fn new(number: usize) -> Self {
        Self {
            number,
            name: String::new(),
        }
    }

    /// Create a column with a label
    pub fn named(number: usize, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }

    /// Create a column whose label is the parts joined by single spaces
    pub fn with_name_parts<I, S>(number: usize, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut name = String::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                name.push(' ');
            }
            name.push_str(part.as_ref());
        }
        Self { number, name }
    }

    /// Zero-based position in the row
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Label, empty when unset
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

impl From<usize> for Column {
    fn from(number: usize) -> Self {
        Self::new(number)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{}:{}", self.number, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_name_parts() {
        let none: [&str; 0] = [];
        assert_eq!(Column::with_name_parts(0, none), Column::new(0));
        assert_eq!(
            Column::with_name_parts(1, ["Column", "TEST", "this"]).name(),
            "Column TEST this"
        );
        assert_eq!(
            Column::with_name_parts(2, ["Column"]),
            Column::named(2, "Column")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Column::named(0, "Client Name").to_string(), "0:Client Name");
        assert_eq!(Column::new(7).to_string(), "7");
        assert!(!Column::new(7).has_name());
    }

    #[test]
    fn test_identity_includes_name() {
        assert_ne!(Column::new(3), Column::named(3, "Amount"));
        assert!(Column::new(3) < Column::named(3, "Amount"));
        assert!(Column::named(3, "Amount") < Column::new(4));
    }
}
