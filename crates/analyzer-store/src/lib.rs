//! # analyzer-store
//!
//! Bounded in-memory sample storage for the Analyzer dashboard.
//!
//! One [`MetricStore`] holds the recent history of every metric in
//! per-metric ring buffers. Render paths never touch the store directly;
//! they read an immutable [`StoreSnapshot`] taken at a point in time.
//! [`SharedMetricStore`] adds the single-writer/multiple-reader handle
//! used when ingestion runs on its own thread.

pub mod shared;
pub mod snapshot;
pub mod store;

pub use shared::SharedMetricStore;
pub use snapshot::StoreSnapshot;
pub use store::MetricStore;
