//! Replay of recorded samples from a JSON file.

use std::collections::VecDeque;
use std::path::Path;

use analyzer_common::error::{AnalyzerError, Result};
use analyzer_common::types::MetricSample;

use crate::MetricSource;

/// Plays back a recorded JSON array of samples in order.
///
/// Each poll yields the next sample; the source is exhausted once the
/// recording runs out. The file format is the same JSON array that
/// `anlz feed` prints, so a feed can be captured and replayed verbatim.
#[derive(Debug)]
pub struct ReplaySource {
    queue: VecDeque<MetricSample>,
}

impl ReplaySource {
    /// Creates a replay source from pre-loaded samples.
    #[must_use]
    pub fn new(samples: Vec<MetricSample>) -> Self {
        Self {
            queue: samples.into(),
        }
    }

    /// Loads a replay source from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON
    /// array of samples.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| AnalyzerError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let samples: Vec<MetricSample> = serde_json::from_str(&raw)?;
        tracing::info!(path = %path.display(), count = samples.len(), "replay loaded");
        Ok(Self::new(samples))
    }

    /// Returns the number of samples left to play.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl MetricSource for ReplaySource {
    fn poll(&mut self) -> Vec<MetricSample> {
        self.queue.pop_front().map_or_else(Vec::new, |s| vec![s])
    }

    fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use analyzer_common::types::Unit;

    use super::*;

    #[test]
    fn polls_yield_samples_in_recorded_order() {
        let mut source = ReplaySource::new(vec![
            MetricSample::new("cpu_usage", 10.0, Unit::Percent),
            MetricSample::new("cpu_usage", 20.0, Unit::Percent),
        ]);

        let first = source.poll();
        assert!((first[0].value - 10.0).abs() < f64::EPSILON);
        let second = source.poll();
        assert!((second[0].value - 20.0).abs() < f64::EPSILON);
        assert!(source.is_exhausted());
        assert!(source.poll().is_empty());
    }

    #[test]
    fn from_path_reads_json_array() {
        let samples = vec![MetricSample::new("gpu_usage", 60.0, Unit::Percent)];
        let json = serde_json::to_string(&samples).expect("serialize");
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{json}").expect("write");

        let source = ReplaySource::from_path(file.path()).expect("load");
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn from_path_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");

        assert!(ReplaySource::from_path(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ReplaySource::from_path(Path::new("/nonexistent/replay.json"))
            .expect_err("should fail");
        assert!(matches!(err, AnalyzerError::Io { .. }));
    }
}
