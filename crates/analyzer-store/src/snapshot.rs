//! Immutable point-in-time copies of store contents.

use std::collections::BTreeMap;

use analyzer_common::types::{MetricName, MetricSample};
use serde::{Deserialize, Serialize};

/// An immutable copy of a [`crate::MetricStore`]'s contents.
///
/// Snapshots are what the view layer consumes: taking one never blocks
/// the ingestion writer for longer than the copy, and the view model can
/// derive from it without holding any lock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Samples per metric, oldest-first.
    samples: BTreeMap<MetricName, Vec<MetricSample>>,
}

impl StoreSnapshot {
    /// Creates a snapshot from pre-collected per-metric samples.
    #[must_use]
    pub const fn new(samples: BTreeMap<MetricName, Vec<MetricSample>>) -> Self {
        Self { samples }
    }

    /// Returns all samples for a metric, oldest-first.
    #[must_use]
    pub fn samples(&self, name: &MetricName) -> Option<&[MetricSample]> {
        self.samples.get(name).map(Vec::as_slice)
    }

    /// Returns the most recent sample for a metric, if any.
    #[must_use]
    pub fn latest(&self, name: &MetricName) -> Option<&MetricSample> {
        self.samples.get(name).and_then(|s| s.last())
    }

    /// Returns the recent values of a metric, oldest-first.
    #[must_use]
    pub fn values(&self, name: &MetricName) -> Vec<f64> {
        self.samples
            .get(name)
            .map(|s| s.iter().map(|sample| sample.value).collect())
            .unwrap_or_default()
    }

    /// Returns whether the snapshot holds no samples at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.values().all(Vec::is_empty)
    }

    /// Iterates over metric names present in the snapshot.
    pub fn metric_names(&self) -> impl Iterator<Item = &MetricName> {
        self.samples.keys()
    }
}
