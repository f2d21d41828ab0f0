//! `anlz watch` — Run the live dashboard TUI.

use std::path::PathBuf;

use analyzer_common::config::AnalyzerConfig;
use analyzer_source::replay::ReplaySource;
use analyzer_source::simulated::SimulatedSource;
use analyzer_store::SharedMetricStore;
use clap::Args;

/// Arguments for the `watch` command.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Replay a recorded JSON sample file instead of simulating.
    #[arg(long)]
    pub replay: Option<PathBuf>,

    /// Seed for the simulated source.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Override the refresh interval in milliseconds.
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Override the per-metric sample capacity.
    #[arg(long)]
    pub capacity: Option<usize>,
}

/// Executes the `watch` command.
///
/// # Errors
///
/// Returns an error if the config is invalid, the replay file cannot be
/// loaded, or the terminal fails.
pub fn execute(args: WatchArgs, mut config: AnalyzerConfig) -> anyhow::Result<()> {
    if let Some(tick_ms) = args.tick_ms {
        config.tick_ms = tick_ms;
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    config.validate()?;

    let store = SharedMetricStore::new(config.capacity)?;
    let tick = std::time::Duration::from_millis(config.tick_ms);

    let ingestion = match args.replay {
        Some(path) => {
            let source = ReplaySource::from_path(&path)?;
            analyzer_source::ingest::spawn(source, store.clone(), tick)
        }
        None => {
            let source = SimulatedSource::new(args.seed);
            analyzer_source::ingest::spawn(source, store.clone(), tick)
        }
    };

    let result = analyzer_tui::run::run(&store, &config);
    ingestion.stop();
    result?;
    Ok(())
}
