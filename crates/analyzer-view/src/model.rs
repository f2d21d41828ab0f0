//! The dashboard view model and its derivation.

use analyzer_common::constants::{METRIC_CPU, METRIC_GPU, METRIC_TEMPERATURE, PLACEHOLDER};
use analyzer_common::types::MetricName;
use analyzer_store::StoreSnapshot;

use crate::format::{format_celsius, format_percent};
use crate::threshold::Thresholds;

/// Severity classification of a displayed metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetricStatus {
    /// Value is within normal operating range.
    #[default]
    Normal,
    /// Value is elevated; rendered in the warning style.
    Warning,
    /// Value exceeds the critical threshold; rendered in the critical style.
    Critical,
}

/// One render-ready metric card field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricField {
    /// Formatted display text, or the placeholder when no data exists.
    pub text: String,
    /// Severity used to pick the card's visual style.
    pub status: MetricStatus,
}

impl MetricField {
    /// The "no data yet" placeholder field.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            text: PLACEHOLDER.to_owned(),
            status: MetricStatus::Normal,
        }
    }

    /// Returns whether this field holds real data.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.text != PLACEHOLDER
    }
}

/// Render-ready representation of the dashboard.
///
/// Derived fresh from a snapshot on every render; never persisted and
/// holding no behavior beyond its own construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    /// CPU utilization card.
    pub cpu: MetricField,
    /// GPU utilization card.
    pub gpu: MetricField,
    /// Temperature card, styled by threshold classification.
    pub temperature: MetricField,
    /// Recent CPU values for the performance trend panel, oldest-first.
    pub cpu_series: Vec<u64>,
    /// Recent GPU values for the performance trend panel, oldest-first.
    pub gpu_series: Vec<u64>,
}

impl DashboardViewModel {
    /// Derives display fields from a store snapshot.
    ///
    /// Pure: no I/O and no failure modes. A metric with no samples yet
    /// yields a placeholder field rather than an error.
    #[must_use]
    pub fn derive(snapshot: &StoreSnapshot, thresholds: &Thresholds) -> Self {
        let cpu_name = MetricName::new(METRIC_CPU);
        let gpu_name = MetricName::new(METRIC_GPU);
        let temp_name = MetricName::new(METRIC_TEMPERATURE);

        let cpu = snapshot
            .latest(&cpu_name)
            .map_or_else(MetricField::placeholder, |s| MetricField {
                text: format_percent(s.value),
                status: MetricStatus::Normal,
            });
        let gpu = snapshot
            .latest(&gpu_name)
            .map_or_else(MetricField::placeholder, |s| MetricField {
                text: format_percent(s.value),
                status: MetricStatus::Normal,
            });
        let temperature = snapshot
            .latest(&temp_name)
            .map_or_else(MetricField::placeholder, |s| MetricField {
                text: format_celsius(s.value),
                status: thresholds.classify(s.value),
            });

        Self {
            cpu,
            gpu,
            temperature,
            cpu_series: to_series(&snapshot.values(&cpu_name)),
            gpu_series: to_series(&snapshot.values(&gpu_name)),
        }
    }
}

impl Default for DashboardViewModel {
    /// The all-placeholder model shown before any sample arrives.
    fn default() -> Self {
        Self {
            cpu: MetricField::placeholder(),
            gpu: MetricField::placeholder(),
            temperature: MetricField::placeholder(),
            cpu_series: Vec::new(),
            gpu_series: Vec::new(),
        }
    }
}

/// Rounds percent values into the integer series sparklines consume.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_series(values: &[f64]) -> Vec<u64> {
    values.iter().map(|v| v.round().max(0.0) as u64).collect()
}
