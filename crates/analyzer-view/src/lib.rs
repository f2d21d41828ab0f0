//! # analyzer-view
//!
//! Pure derivation of render-ready dashboard fields from a store
//! snapshot. No I/O, no locks, no failure modes: a missing metric is a
//! documented placeholder state, never an error. Rendering crates
//! consume the [`DashboardViewModel`] produced here; they add no logic
//! of their own.

pub mod format;
pub mod model;
pub mod threshold;

pub use model::{DashboardViewModel, MetricField, MetricStatus};
pub use threshold::Thresholds;
