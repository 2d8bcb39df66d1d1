//! Per-column validation rules

use alloc::string::String;
use alloc::vec::Vec;

/// Length and character constraints for one column
///
/// A bound of `0` disables that bound, except that equal bounds (including
/// `0`/`0`) require the field length to match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// Maximum length in bytes, 0 for no limit
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_length: usize,
    /// Minimum length in bytes, 0 for no limit
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_length: usize,
    /// Forbidden characters; every character of every entry is rejected
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub restricted_chars: Option<Vec<String>>,
}

impl Rule {
    /// Field must not be empty
    pub const NOT_EMPTY: Rule = Rule {
        max_length: 0,
        min_length: 1,
        restricted_chars: None,
    };

    /// Field must be empty
    pub const SHOULD_BE_EMPTY: Rule = Rule {
        max_length: 0,
        min_length: 0,
        restricted_chars: None,
    };

    /// Field must be exactly `length` bytes long
    pub const fn exact(length: usize) -> Self {
        Self {
            max_length: length,
            min_length: length,
            restricted_chars: None,
        }
    }

    /// Field length must lie in `min..=max`; a zero bound is open
    pub const fn between(min_length: usize, max_length: usize) -> Self {
        Self {
            max_length,
            min_length,
            restricted_chars: None,
        }
    }

    /// Forbid every character contained in `chars`
    pub fn with_restricted_chars<I, S>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restricted_chars = Some(chars.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the bounds demand an exact length
    pub const fn is_exact(&self) -> bool {
        self.min_length == self.max_length
    }

    /// First character of `value` that the rule forbids
    pub fn find_restricted(&self, value: &str) -> Option<char> {
        let restricted = self.restricted_chars.as_ref()?;
        value
            .chars()
            .find(|c| restricted.iter().any(|entry| entry.contains(*c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Rule::SHOULD_BE_EMPTY, Rule::default());
        assert!(Rule::SHOULD_BE_EMPTY.is_exact());
        assert!(!Rule::NOT_EMPTY.is_exact());
        assert_eq!(Rule::exact(4), Rule::between(4, 4));
    }

    #[test]
    fn test_find_restricted() {
        let rule = Rule::NOT_EMPTY.with_restricted_chars(["~", "<>"]);
        assert_eq!(rule.find_restricted("2 data valid"), None);
        assert_eq!(rule.find_restricted("2 data not~valid"), Some('~'));
        assert_eq!(rule.find_restricted("a>b"), Some('>'));

        let empty_set = Rule::NOT_EMPTY.with_restricted_chars(Vec::<String>::new());
        assert_eq!(empty_set.find_restricted("anything~"), None);
        assert_eq!(Rule::NOT_EMPTY.find_restricted("anything~"), None);
    }
}
