//! # analyzer-tui
//!
//! Interactive terminal dashboard for Analyzer metrics.
//!
//! Built with `ratatui` and `crossterm`, rendering the fixed layout of
//! the dashboard: sidebar navigation, top bar, three metric cards,
//! two trend panels, and a footer. Rendering is a pure function of the
//! current [`analyzer_view::DashboardViewModel`]; all state lives in
//! [`app::App`] and all data arrives as store snapshots.

pub mod app;
pub mod event;
pub mod run;
pub mod ui;
