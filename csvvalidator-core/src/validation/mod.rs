//! Row and cell validation
//!
//! This module contains pure validation functions with no I/O dependencies.
//! Validation never mutates the rules or the row it is given.

pub mod cell;
pub mod row;
pub mod rule_set;

pub use cell::validate_cell;
pub use row::RowDescriptor;
pub use rule_set::RuleSet;
