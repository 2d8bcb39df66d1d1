//! csvvalidator - rule-based validation of CSV rows
//!
//! This library checks rows of delimited text, already split into fields by
//! the caller, against per-column length and character rules.
//!
//! ## Architecture
//!
//! - **csvvalidator-core**: columns, rules, and pure row validation (no I/O)
//! - **csvvalidator**: schema files, structured reports, and logging
//!
//! ## Quick Start
//!
//! ```rust
//! use csvvalidator::{RowSchema, Validator};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let schema = RowSchema::from_json_str(
//!         r#"{
//!             "columns_total": 3,
//!             "columns": [
//!                 { "number": 0, "name": "Client Name", "min_length": 1, "max_length": 20 },
//!                 { "number": 2, "name": "Code", "min_length": 1, "max_length": 1 }
//!             ]
//!         }"#,
//!     )?;
//!     let validator = Validator::from_schema(schema)?;
//!
//!     assert!(validator.validate(&["ACME", "anything", "C"]).is_ok());
//!     if let Some(report) = validator.check(&["ACME", "anything", "CD"]) {
//!         println!("{}", report.to_json()?);
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Schema files**: JSON rule definitions with load-time checks
//! - **Reports**: serializable failure descriptions
//! - **Logging**: `tracing` events for every validated row

// Re-export core abstractions
pub use csvvalidator_core::{
    // Data model
    Column, Rule, RuleSet, RowDescriptor,
    // Validation
    validate_cell, RowValidator,
    // Error handling
    CellError, ErrorCategory, Result, ValidationError,
};

pub mod report;
pub mod schema;
pub mod validator;

pub use report::{ColumnRef, ValidationReport};
pub use schema::{ColumnSpec, RowSchema, RulePreset, SchemaError};
pub use validator::Validator;
