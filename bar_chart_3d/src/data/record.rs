/// Record - one datum of the chart's input.
///
/// Only `age` is interpreted (it drives bar height). Every other field of the
/// source object is preserved in `extra` so a host can show it (labels,
/// tooltips) without this crate constraining the schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::error::{Error, Result};

/// One input record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Height source. `None` when the field is absent or `null`.
    #[serde(default)]
    pub age: Option<f64>,

    /// Uninterpreted remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Create a record carrying only an age
    pub fn new(age: f64) -> Self {
        Self {
            age: Some(age),
            extra: Map::new(),
        }
    }

    /// Create a record without an age (degenerate input)
    pub fn without_age() -> Self {
        Self {
            age: None,
            extra: Map::new(),
        }
    }

    /// Attach an extra field (builder style)
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The record's age, validated for use as a bar height source.
    ///
    /// `index` is the record's position in the data source and is only used
    /// to build the error.
    pub fn checked_age(&self, index: usize) -> Result<f64> {
        let age = self.age.ok_or_else(|| Error::InvalidRecord {
            index,
            reason: "missing field 'age'".to_string(),
        })?;

        if !age.is_finite() {
            return Err(Error::InvalidRecord {
                index,
                reason: format!("age {} is not a finite number", age),
            });
        }
        if age <= 0.0 {
            return Err(Error::InvalidRecord {
                index,
                reason: format!("age {} must be positive", age),
            });
        }

        Ok(age)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
