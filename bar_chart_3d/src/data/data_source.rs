/// DataSource - the ordered, immutable record collection.

use std::fs;
use std::path::Path;
use crate::error::{Error, Result};
use crate::engine_info;
use super::record::Record;

/// Ordered sequence of records, loaded once
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSource {
    records: Vec<Record>,
}

impl DataSource {
    /// Wrap already-built records
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of record objects
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)
            .map_err(|e| Error::DataLoad(format!("invalid record JSON: {}", e)))?;
        Ok(Self { records })
    }

    /// Read and parse a JSON data file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| Error::DataLoad(format!("{}: {}", path.display(), e)))?;
        let source = Self::from_json_str(&json)
            .map_err(|e| match e {
                Error::DataLoad(msg) => Error::DataLoad(format!("{}: {}", path.display(), msg)),
                other => other,
            })?;

        engine_info!("barchart3d::DataSource", "Loaded {} records from {}",
            source.len(), path.display());

        Ok(source)
    }

    /// All records in source order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records were loaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "data_source_tests.rs"]
mod tests;
