//! The ingestion writer loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use analyzer_common::error::AnalyzerError;
use analyzer_store::SharedMetricStore;

use crate::MetricSource;

/// Handle to a running ingestion thread.
///
/// The thread is the single writer into the shared store. Dropping the
/// handle without calling [`Self::stop`] leaves the thread running.
#[derive(Debug)]
pub struct IngestionHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl IngestionHandle {
    /// Signals the loop to stop and waits for the thread to finish.
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::SeqCst);
        self.join_inner();
    }

    /// Waits for the loop to finish on its own.
    ///
    /// Only meaningful for finite sources (replay); a live source never
    /// exhausts and this would block forever.
    pub fn join(mut self) {
        self.join_inner();
    }

    fn join_inner(&mut self) {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("ingestion thread panicked");
            }
        }
    }
}

/// Spawns the ingestion loop on a dedicated thread.
///
/// Every `tick`, the loop polls the source and records each sample into
/// the store. Invalid samples are dropped and logged at `warn` — the
/// store stays clean and the loop keeps going. The loop ends when
/// stopped or when the source reports exhaustion.
pub fn spawn<S>(mut source: S, store: SharedMetricStore, tick: Duration) -> IngestionHandle
where
    S: MetricSource + Send + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let thread = std::thread::spawn(move || {
        tracing::info!(tick_ms = u64::try_from(tick.as_millis()).unwrap_or(u64::MAX), "ingestion started");
        while !stop_flag.load(Ordering::SeqCst) {
            for sample in source.poll() {
                match store.record(sample) {
                    Ok(()) => {}
                    Err(AnalyzerError::InvalidSample { metric, value, unit }) => {
                        tracing::warn!(%metric, value, %unit, "dropped out-of-range sample");
                    }
                    Err(err) => {
                        tracing::error!(%err, "ingestion stopping");
                        return;
                    }
                }
            }
            if source.is_exhausted() {
                tracing::info!("source exhausted, ingestion finished");
                return;
            }
            std::thread::sleep(tick);
        }
        tracing::info!("ingestion stopped");
    });

    IngestionHandle {
        stop,
        thread: Some(thread),
    }
}

#[cfg(test)]
mod tests {
    use analyzer_common::types::{MetricName, MetricSample, Unit};

    use super::*;
    use crate::replay::ReplaySource;

    #[test]
    fn replay_ingestion_fills_the_store() {
        let store = SharedMetricStore::new(8).expect("store");
        let source = ReplaySource::new(vec![
            MetricSample::new("cpu_usage", 45.0, Unit::Percent),
            MetricSample::new("gpu_usage", 60.0, Unit::Percent),
        ]);

        // Replay sources end on their own once drained.
        spawn(source, store.clone(), Duration::from_millis(1)).join();

        let snapshot = store.snapshot().expect("snapshot");
        assert!(snapshot.latest(&MetricName::new("cpu_usage")).is_some());
        assert!(snapshot.latest(&MetricName::new("gpu_usage")).is_some());
    }

    #[test]
    fn invalid_samples_are_dropped_not_fatal() {
        let store = SharedMetricStore::new(8).expect("store");
        let source = ReplaySource::new(vec![
            MetricSample::new("cpu_usage", 250.0, Unit::Percent),
            MetricSample::new("cpu_usage", 45.0, Unit::Percent),
        ]);

        spawn(source, store.clone(), Duration::from_millis(1)).join();

        let latest = store
            .latest(&MetricName::new("cpu_usage"))
            .expect("read")
            .expect("valid sample survived");
        assert!((latest.value - 45.0).abs() < f64::EPSILON);
    }
}
