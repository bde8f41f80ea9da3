//! Data source module
//!
//! The static record collection the chart is built from. Loaded once at
//! startup and read-only afterwards.

mod record;
mod data_source;

pub use record::Record;
pub use data_source::DataSource;
