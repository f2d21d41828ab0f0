//! Global configuration model for the Analyzer dashboard.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};

/// Root configuration for the dashboard and its ingestion loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum samples retained per metric before FIFO eviction.
    pub capacity: usize,
    /// Temperature at or above which a reading is a warning.
    pub warning_celsius: f64,
    /// Temperature at or above which a reading is critical.
    pub critical_celsius: f64,
    /// Interval between ingestion polls and UI refreshes, in milliseconds.
    pub tick_ms: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            capacity: crate::constants::DEFAULT_CAPACITY,
            warning_celsius: crate::constants::DEFAULT_WARNING_CELSIUS,
            critical_celsius: crate::constants::DEFAULT_CRITICAL_CELSIUS,
            tick_ms: crate::constants::DEFAULT_TICK_MS,
        }
    }
}

impl AnalyzerConfig {
    /// Loads configuration from a JSON file, validating the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or contains
    /// invalid values.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| AnalyzerError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Checks internal consistency of the configured values.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity is zero, the tick interval is
    /// zero, or the warning threshold is not below the critical one.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(AnalyzerError::Config {
                message: "capacity must be at least 1".into(),
            });
        }
        if self.tick_ms == 0 {
            return Err(AnalyzerError::Config {
                message: "tick_ms must be at least 1".into(),
            });
        }
        if self.warning_celsius >= self.critical_celsius {
            return Err(AnalyzerError::Config {
                message: format!(
                    "warning threshold ({}) must be below critical ({})",
                    self.warning_celsius, self.critical_celsius
                ),
            });
        }
        Ok(())
    }
}
