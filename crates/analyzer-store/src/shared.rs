//! Shared store handle for concurrent ingestion and rendering.

use std::sync::{Arc, RwLock};

use analyzer_common::error::{AnalyzerError, Result};
use analyzer_common::types::{MetricName, MetricSample};

use crate::snapshot::StoreSnapshot;
use crate::store::MetricStore;

/// Cloneable handle enforcing single-writer/multiple-reader access.
///
/// One ingestion path calls [`Self::record`] (write lock); any number of
/// render paths call [`Self::snapshot`] (read lock) and work from the
/// returned copy without holding the lock.
#[derive(Debug, Clone)]
pub struct SharedMetricStore {
    inner: Arc<RwLock<MetricStore>>,
}

impl SharedMetricStore {
    /// Creates a shared store retaining up to `capacity` samples per metric.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(RwLock::new(MetricStore::new(capacity)?)),
        })
    }

    /// Records a sample under the write lock.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidSample`] for out-of-range values,
    /// or a terminal error if the lock was poisoned by a panicked writer.
    pub fn record(&self, sample: MetricSample) -> Result<()> {
        let mut store = self.inner.write().map_err(|_| poisoned())?;
        store.record(sample)
    }

    /// Takes an immutable snapshot under the read lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock was poisoned by a panicked writer.
    pub fn snapshot(&self) -> Result<StoreSnapshot> {
        let store = self.inner.read().map_err(|_| poisoned())?;
        Ok(store.snapshot())
    }

    /// Returns the most recent sample for a metric, cloned out of the lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock was poisoned by a panicked writer.
    pub fn latest(&self, name: &MetricName) -> Result<Option<MetricSample>> {
        let store = self.inner.read().map_err(|_| poisoned())?;
        Ok(store.latest(name).cloned())
    }
}

fn poisoned() -> AnalyzerError {
    AnalyzerError::Config {
        message: "metric store lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use analyzer_common::types::Unit;

    use super::*;

    #[test]
    fn clones_observe_each_others_writes() {
        let store = SharedMetricStore::new(8).expect("store");
        let writer = store.clone();
        writer
            .record(MetricSample::new("cpu_usage", 45.0, Unit::Percent))
            .expect("record");

        let latest = store
            .latest(&MetricName::new("cpu_usage"))
            .expect("read")
            .expect("sample");
        assert!((latest.value - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn concurrent_writer_and_readers_make_progress() {
        let store = SharedMetricStore::new(16).expect("store");
        let writer = store.clone();

        let handle = std::thread::spawn(move || {
            for v in 0..50_u32 {
                writer
                    .record(MetricSample::new("gpu_usage", f64::from(v % 100), Unit::Percent))
                    .expect("record");
            }
        });

        for _ in 0..50 {
            let _ = store.snapshot().expect("snapshot");
        }
        handle.join().expect("writer thread");

        let snapshot = store.snapshot().expect("snapshot");
        assert_eq!(snapshot.values(&MetricName::new("gpu_usage")).len(), 16);
    }
}
