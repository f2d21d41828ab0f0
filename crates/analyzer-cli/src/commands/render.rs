//! `anlz render` — One-shot plain-text rendering of the dashboard.

use std::path::PathBuf;

use analyzer_common::config::AnalyzerConfig;
use analyzer_source::MetricSource;
use analyzer_source::replay::ReplaySource;
use analyzer_source::simulated::SimulatedSource;
use analyzer_store::MetricStore;
use analyzer_view::{DashboardViewModel, Thresholds};
use clap::Args;

use crate::output;

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON sample file to render; one simulated round when absent.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Seed for the simulated source.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

/// Executes the `render` command.
///
/// # Errors
///
/// Returns an error if the input file cannot be loaded or the config
/// is invalid.
#[allow(clippy::print_stdout)]
pub fn execute(args: RenderArgs, config: &AnalyzerConfig) -> anyhow::Result<()> {
    config.validate()?;
    let mut store = MetricStore::new(config.capacity)?;

    match args.input {
        Some(path) => {
            let mut source = ReplaySource::from_path(&path)?;
            while !source.is_exhausted() {
                for sample in source.poll() {
                    if let Err(err) = store.record(sample) {
                        tracing::warn!(%err, "skipped sample");
                    }
                }
            }
        }
        None => {
            let mut source = SimulatedSource::new(args.seed);
            for sample in source.poll() {
                store.record(sample)?;
            }
        }
    }

    let model = DashboardViewModel::derive(&store.snapshot(), &Thresholds::from(config));
    println!("{}", output::render_text(&model));
    Ok(())
}
