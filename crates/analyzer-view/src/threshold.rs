//! Temperature thresholds and severity classification.

use analyzer_common::config::AnalyzerConfig;

use crate::model::MetricStatus;

/// Fixed temperature thresholds against which readings are classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Readings at or above this value are warnings.
    pub warning_celsius: f64,
    /// Readings at or above this value are critical.
    pub critical_celsius: f64,
}

impl Thresholds {
    /// Creates thresholds from explicit values.
    #[must_use]
    pub const fn new(warning_celsius: f64, critical_celsius: f64) -> Self {
        Self {
            warning_celsius,
            critical_celsius,
        }
    }

    /// Classifies a temperature reading.
    ///
    /// `critical` when `t >= critical_celsius`, `warning` when
    /// `warning_celsius <= t < critical_celsius`, else `normal`.
    #[must_use]
    pub fn classify(&self, celsius: f64) -> MetricStatus {
        if celsius >= self.critical_celsius {
            MetricStatus::Critical
        } else if celsius >= self.warning_celsius {
            MetricStatus::Warning
        } else {
            MetricStatus::Normal
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(
            analyzer_common::constants::DEFAULT_WARNING_CELSIUS,
            analyzer_common::constants::DEFAULT_CRITICAL_CELSIUS,
        )
    }
}

impl From<&AnalyzerConfig> for Thresholds {
    fn from(config: &AnalyzerConfig) -> Self {
        Self::new(config.warning_celsius, config.critical_celsius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_warning_is_normal() {
        let t = Thresholds::new(60.0, 80.0);
        assert_eq!(t.classify(59.0), MetricStatus::Normal);
    }

    #[test]
    fn warning_boundary_is_closed() {
        let t = Thresholds::new(60.0, 80.0);
        assert_eq!(t.classify(60.0), MetricStatus::Warning);
        assert_eq!(t.classify(61.0), MetricStatus::Warning);
    }

    #[test]
    fn just_below_critical_is_warning() {
        let t = Thresholds::new(60.0, 80.0);
        assert_eq!(t.classify(79.0), MetricStatus::Warning);
    }

    #[test]
    fn critical_boundary_is_closed() {
        let t = Thresholds::new(60.0, 80.0);
        assert_eq!(t.classify(80.0), MetricStatus::Critical);
        assert_eq!(t.classify(81.0), MetricStatus::Critical);
    }

    #[test]
    fn thresholds_follow_config() {
        let config = AnalyzerConfig {
            warning_celsius: 50.0,
            critical_celsius: 70.0,
            ..AnalyzerConfig::default()
        };
        let t = Thresholds::from(&config);
        assert_eq!(t.classify(65.0), MetricStatus::Warning);
        assert_eq!(t.classify(70.0), MetricStatus::Critical);
    }
}
