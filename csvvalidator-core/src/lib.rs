#![no_std]

//! csvvalidator core - column rules and row validation
//!
//! This crate validates rows of delimited text that a caller has already split
//! into fields. It owns no I/O: a row goes in, a verdict comes out.
//!
//! ```
//! use csvvalidator_core::{Column, RowDescriptor, Rule, RuleSet};
//!
//! let rules = RuleSet::new()
//!     .with_rule(Column::named(0, "Client Name"), Rule::between(1, 20))
//!     .with_rule(Column::named(1, "Code"), Rule::exact(1).with_restricted_chars(["~"]));
//! let row = RowDescriptor::new(2, rules);
//!
//! assert!(row.validate_row(&["ACME", "C"]).is_ok());
//! assert!(row.validate_row(&["ACME", "~"]).is_err());
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod column;
pub mod error;
pub mod rule;
pub mod traits;
pub mod validation;

pub use column::Column;
pub use error::*;
pub use rule::Rule;
pub use traits::RowValidator;
pub use validation::{validate_cell, RowDescriptor, RuleSet};
