//! Domain primitive types used across the Analyzer workspace.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a metric (e.g. `cpu_usage`, `temperature_c`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetricName(String);

impl MetricName {
    /// Creates a metric name from a string value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MetricName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MetricName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Measurement unit of a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Utilization percentage, valid in `[0, 100]`.
    Percent,
    /// Temperature in degrees Celsius, unconstrained.
    Celsius,
}

impl Unit {
    /// Returns whether `value` lies inside this unit's valid range.
    ///
    /// `NaN` is never valid. Percent values must be within `[0, 100]`;
    /// Celsius values only need to be finite.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        match self {
            Self::Percent => (0.0..=100.0).contains(&value),
            Self::Celsius => value.is_finite(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent => write!(f, "%"),
            Self::Celsius => write!(f, "°C"),
        }
    }
}

/// One timestamped reading of one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Metric this reading belongs to.
    pub metric: MetricName,
    /// Measured value, interpreted against `unit`.
    pub value: f64,
    /// Unit of the value.
    pub unit: Unit,
    /// When the reading was captured.
    pub captured_at: DateTime<Utc>,
}

impl MetricSample {
    /// Creates a sample captured now.
    #[must_use]
    pub fn new(metric: impl Into<MetricName>, value: f64, unit: Unit) -> Self {
        Self {
            metric: metric.into(),
            value,
            unit,
            captured_at: Utc::now(),
        }
    }

    /// Returns whether the value lies inside the unit's valid range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.unit.contains(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_range_is_closed_at_both_ends() {
        assert!(Unit::Percent.contains(0.0));
        assert!(Unit::Percent.contains(100.0));
        assert!(!Unit::Percent.contains(-1.0));
        assert!(!Unit::Percent.contains(101.0));
    }

    #[test]
    fn celsius_accepts_any_finite_value() {
        assert!(Unit::Celsius.contains(-40.0));
        assert!(Unit::Celsius.contains(250.0));
        assert!(!Unit::Celsius.contains(f64::NAN));
        assert!(!Unit::Celsius.contains(f64::INFINITY));
    }

    #[test]
    fn unit_displays_symbol() {
        assert_eq!(Unit::Percent.to_string(), "%");
        assert_eq!(Unit::Celsius.to_string(), "°C");
    }

    #[test]
    fn sample_roundtrips_through_json() {
        let sample = MetricSample::new("cpu_usage", 45.0, Unit::Percent);
        let json = serde_json::to_string(&sample).expect("serialize");
        let back: MetricSample = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, sample);
    }
}
