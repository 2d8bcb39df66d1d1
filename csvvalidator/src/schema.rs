//! Serializable row schemas
//!
//! A [`RowSchema`] is the configuration form of a [`RowDescriptor`]: a column
//! count plus one [`ColumnSpec`] per ruled column. Schemas are usually stored
//! as JSON next to the data they describe.
//!
//! ```json
//! {
//!   "columns_total": 3,
//!   "columns": [
//!     { "number": 0, "name": "Client Name", "min_length": 1, "max_length": 40 },
//!     { "number": 1, "preset": "not_empty", "restricted_chars": ["~", ";"] },
//!     { "number": 2, "min_length": 1, "max_length": 1 }
//!   ]
//! }
//! ```

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use csvvalidator_core::{Column, RowDescriptor, Rule, RuleSet};

/// Errors raised while loading or checking a schema
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid schema json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read schema {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("duplicate rule for column {0}")]
    DuplicateColumn(Column),

    #[error("column {column} is outside a row of {columns_total} columns")]
    ColumnOutOfRange { column: Column, columns_total: usize },

    #[error("column {column} has min length {min} above max length {max}")]
    InvalidBounds { column: Column, min: usize, max: usize },

    #[error("column {column} combines a preset with explicit lengths")]
    PresetConflict { column: Column },
}

/// Named rule presets usable in schema files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePreset {
    NotEmpty,
    ShouldBeEmpty,
}

impl RulePreset {
    pub fn rule(self) -> Rule {
        match self {
            RulePreset::NotEmpty => Rule::NOT_EMPTY,
            RulePreset::ShouldBeEmpty => Rule::SHOULD_BE_EMPTY,
        }
    }
}

/// Rule for a single column as written in a schema file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnSpec {
    pub number: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub min_length: usize,
    #[serde(default)]
    pub max_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_chars: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<RulePreset>,
}

impl ColumnSpec {
    pub fn column(&self) -> Column {
        match &self.name {
            Some(name) => Column::named(self.number, name.as_str()),
            None => Column::new(self.number),
        }
    }

    /// Resolve the preset or explicit bounds into a [`Rule`]
    pub fn rule(&self) -> Result<Rule, SchemaError> {
        let mut rule = match self.preset {
            Some(_) if self.min_length != 0 || self.max_length != 0 => {
                return Err(SchemaError::PresetConflict {
                    column: self.column(),
                });
            }
            Some(preset) => preset.rule(),
            None => Rule::between(self.min_length, self.max_length),
        };

        if rule.max_length != 0 && rule.min_length > rule.max_length {
            return Err(SchemaError::InvalidBounds {
                column: self.column(),
                min: rule.min_length,
                max: rule.max_length,
            });
        }

        rule.restricted_chars = self.restricted_chars.clone();
        Ok(rule)
    }
}

/// Column count and column rules for one kind of row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RowSchema {
    #[serde(default)]
    pub columns_total: usize,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl RowSchema {
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(json)?;
        debug!(
            columns = schema.columns.len(),
            columns_total = schema.columns_total,
            "parsed row schema"
        );
        Ok(schema)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_reader(reader)?;
        debug!(
            columns = schema.columns.len(),
            columns_total = schema.columns_total,
            "parsed row schema"
        );
        Ok(schema)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        info!(path = %path.display(), "reading row schema");
        let file = File::open(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Describe an existing descriptor as a schema
    pub fn from_descriptor(descriptor: &RowDescriptor) -> Self {
        let columns = descriptor
            .rules()
            .iter()
            .map(|(column, rule)| ColumnSpec {
                number: column.number(),
                name: column.has_name().then(|| column.name().to_string()),
                min_length: rule.min_length,
                max_length: rule.max_length,
                restricted_chars: rule.restricted_chars.clone(),
                preset: None,
            })
            .collect();

        Self {
            columns_total: descriptor.columns_total(),
            columns,
        }
    }

    pub fn to_json_string_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the rule set, rejecting duplicate or out-of-range columns
    pub fn rule_set(&self) -> Result<RuleSet, SchemaError> {
        let mut seen = BTreeSet::new();
        let mut rules = RuleSet::new();

        for spec in &self.columns {
            let column = spec.column();
            if self.columns_total != 0 && column.number() >= self.columns_total {
                return Err(SchemaError::ColumnOutOfRange {
                    column,
                    columns_total: self.columns_total,
                });
            }
            if !seen.insert(column.clone()) {
                return Err(SchemaError::DuplicateColumn(column));
            }
            rules.insert(column, spec.rule()?);
        }

        Ok(rules)
    }

    pub fn into_descriptor(self) -> Result<RowDescriptor, SchemaError> {
        let rules = self.rule_set()?;
        debug!(
            rules = rules.len(),
            columns_total = self.columns_total,
            "built row descriptor"
        );
        Ok(RowDescriptor::new(self.columns_total, rules))
    }
}

impl TryFrom<RowSchema> for RowDescriptor {
    type Error = SchemaError;

    fn try_from(schema: RowSchema) -> Result<Self, Self::Error> {
        schema.into_descriptor()
    }
}
