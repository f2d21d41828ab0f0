//! Unified error types for the Analyzer workspace.
//!
//! Each higher-level crate returns these common variants; the CLI binary
//! wraps them in `anyhow` at the outermost layer.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{MetricName, Unit};

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A sample's value violates its metric's valid range.
    #[error("invalid sample for {metric}: {value}{unit} is out of range")]
    InvalidSample {
        /// Metric the rejected sample belongs to.
        metric: MetricName,
        /// Offending value.
        value: f64,
        /// Unit the value was interpreted against.
        unit: Unit,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// Terminal setup or teardown failed.
    #[error("terminal error: {message}")]
    Terminal {
        /// Description of the terminal failure.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
