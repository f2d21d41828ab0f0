//! # analyzer-source
//!
//! The ingestion seam of the Analyzer dashboard.
//!
//! Everything side-effecting about sample production lives behind the
//! narrow [`MetricSource`] trait, keeping the store and view layers pure.
//! Two collaborators ship with the workspace: a deterministic
//! [`simulated::SimulatedSource`] for demos and tests, and a
//! [`replay::ReplaySource`] that plays back samples recorded as JSON.
//! Real sensor collection is deliberately not implemented here; an
//! external agent can feed the store through the same trait.

pub mod ingest;
pub mod replay;
pub mod simulated;

use analyzer_common::types::MetricSample;

/// Produces metric samples for ingestion into the store.
///
/// A poll may return zero samples (nothing new), one, or a batch.
/// Sources own their retry/backoff policy internally; the ingestion
/// loop only polls and records.
pub trait MetricSource {
    /// Returns the next batch of samples, possibly empty.
    fn poll(&mut self) -> Vec<MetricSample>;

    /// Returns whether this source can produce further samples.
    ///
    /// Live sources never run dry; replay sources do.
    fn is_exhausted(&self) -> bool {
        false
    }
}
