//! Column to rule mapping and field-by-field row validation

use alloc::collections::btree_map::{self, BTreeMap};
use alloc::string::String;
use alloc::vec::Vec;

use super::cell::validate_cell;
use crate::{Column, Result, Rule, RowValidator, ValidationError};

/// Rules keyed by column, checked in column order
///
/// Keys are compared by `(number, name)`, so entries for the same position
/// under different names are kept side by side and each is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: BTreeMap<Column, Rule>,
}

impl RuleSet {
    pub const fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Add a rule, returning the rule it replaced for the same column
    pub fn insert(&mut self, column: Column, rule: Rule) -> Option<Rule> {
        self.rules.insert(column, rule)
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_rule(mut self, column: Column, rule: Rule) -> Self {
        self.insert(column, rule);
        self
    }

    pub fn get(&self, column: &Column) -> Option<&Rule> {
        self.rules.get(column)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Column, Rule> {
        self.rules.iter()
    }

    /// Validate every ruled column of `row`, stopping at the first failure
    pub fn validate_row<S: AsRef<str>>(&self, row: &[S]) -> Result<()> {
        if self.rules.is_empty() {
            return Err(ValidationError::RulesNotSpecified);
        }
        if row.is_empty() {
            return Err(ValidationError::EmptyRow);
        }

        for (column, rule) in &self.rules {
            let field = row
                .get(column.number())
                .ok_or_else(|| ValidationError::ColumnOutOfRange {
                    column: column.clone(),
                    row_len: row.len(),
                })?;

            validate_cell(field.as_ref(), rule).map_err(|source| {
                ValidationError::InvalidColumn {
                    row: owned_row(row),
                    column: column.clone(),
                    source,
                }
            })?;
        }

        Ok(())
    }
}

pub(crate) fn owned_row<S: AsRef<str>>(row: &[S]) -> Vec<String> {
    row.iter().map(|field| String::from(field.as_ref())).collect()
}

impl RowValidator for RuleSet {
    fn validate_row<S: AsRef<str>>(&self, row: &[S]) -> Result<()> {
        RuleSet::validate_row(self, row)
    }
}

impl FromIterator<(Column, Rule)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (Column, Rule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Column, Rule)> for RuleSet {
    fn extend<I: IntoIterator<Item = (Column, Rule)>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = (&'a Column, &'a Rule);
    type IntoIter = btree_map::Iter<'a, Column, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl IntoIterator for RuleSet {
    type Item = (Column, Rule);
    type IntoIter = btree_map::IntoIter<Column, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}
