//! The bounded per-metric sample store.

use std::collections::BTreeMap;
use std::collections::VecDeque;

use analyzer_common::error::{AnalyzerError, Result};
use analyzer_common::types::{MetricName, MetricSample};

use crate::snapshot::StoreSnapshot;

/// Holds recent samples per metric in bounded ring buffers.
///
/// Samples are kept most-recent-last; once a metric's buffer reaches the
/// configured capacity, recording a new sample evicts the oldest (FIFO).
#[derive(Debug)]
pub struct MetricStore {
    /// Maximum samples retained per metric.
    capacity: usize,
    /// Per-metric sample buffers, most-recent-last.
    buffers: BTreeMap<MetricName, VecDeque<MetricSample>>,
}

impl MetricStore {
    /// Creates a store retaining up to `capacity` samples per metric.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(AnalyzerError::Config {
                message: "store capacity must be at least 1".into(),
            });
        }
        Ok(Self {
            capacity,
            buffers: BTreeMap::new(),
        })
    }

    /// Returns the per-metric capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a sample to its metric's buffer, evicting the oldest
    /// sample when the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidSample`] if the value is outside
    /// the unit's valid range. The caller decides whether to drop or
    /// clamp; the store never stores an invalid reading.
    pub fn record(&mut self, sample: MetricSample) -> Result<()> {
        if !sample.is_valid() {
            return Err(AnalyzerError::InvalidSample {
                metric: sample.metric,
                value: sample.value,
                unit: sample.unit,
            });
        }

        let buffer = self.buffers.entry(sample.metric.clone()).or_default();
        if buffer.len() == self.capacity {
            let _ = buffer.pop_front();
            tracing::trace!(metric = %sample.metric, "evicted oldest sample");
        }
        buffer.push_back(sample);
        Ok(())
    }

    /// Returns the most recent sample for a metric, if any.
    #[must_use]
    pub fn latest(&self, name: &MetricName) -> Option<&MetricSample> {
        self.buffers.get(name).and_then(VecDeque::back)
    }

    /// Returns an immutable point-in-time copy of all stored samples.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        let samples = self
            .buffers
            .iter()
            .map(|(name, buffer)| (name.clone(), buffer.iter().cloned().collect()))
            .collect();
        StoreSnapshot::new(samples)
    }

    /// Returns whether no samples have been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffers.values().all(VecDeque::is_empty)
    }
}
