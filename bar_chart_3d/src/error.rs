//! Error types for the bar chart scene builder
//!
//! This module defines the error types used throughout the crate,
//! covering data loading, scene construction, camera setup, and render hosts.

use std::fmt;

/// Result type for bar chart operations
pub type Result<T> = std::result::Result<T, Error>;

/// Bar chart errors
#[derive(Debug, Clone)]
pub enum Error {
    /// The data file could not be read or parsed
    DataLoad(String),

    /// Fewer records than grid cells were supplied
    InsufficientRecords {
        expected: usize,
        actual: usize,
    },

    /// A record cannot be turned into a bar (missing or unusable `age`)
    InvalidRecord {
        index: usize,
        reason: String,
    },

    /// Viewport with a zero or non-finite dimension
    InvalidViewport(String),

    /// Camera pose that cannot produce a view (eye on target, non-finite)
    InvalidCameraPose(String),

    /// Invalid resource (geometry, material, primitive lookup, etc.)
    InvalidResource(String),

    /// A render host was asked to draw before receiving a scene
    HostNotReady(String),

    /// Writing rendered output failed
    Output(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DataLoad(msg) => write!(f, "Data load failed: {}", msg),
            Error::InsufficientRecords { expected, actual } => write!(
                f,
                "Insufficient records: grid needs {} records, got {}",
                expected, actual
            ),
            Error::InvalidRecord { index, reason } => {
                write!(f, "Invalid record at index {}: {}", index, reason)
            }
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            Error::InvalidCameraPose(msg) => write!(f, "Invalid camera pose: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::HostNotReady(msg) => write!(f, "Render host not ready: {}", msg),
            Error::Output(msg) => write!(f, "Output failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error through the engine logger and build an `Error::InvalidResource`
///
/// # Example
///
/// ```no_run
/// use bar_chart_3d::engine_err;
///
/// let err = engine_err!("barchart3d::Scene", "Unknown primitive '{}'", "box_9_9");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::barchart3d::Error::InvalidResource(message)
    }};
}

/// Log an error and return early with `Error::InvalidResource`
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
