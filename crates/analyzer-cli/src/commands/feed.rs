//! `anlz feed` — Run a metric source headless, printing a JSON array.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use analyzer_common::config::AnalyzerConfig;
use analyzer_source::MetricSource;
use analyzer_source::simulated::SimulatedSource;
use clap::Args;

/// Arguments for the `feed` command.
#[derive(Args, Debug)]
pub struct FeedArgs {
    /// Seed for the simulated source.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Number of poll rounds; runs until Ctrl+C when absent.
    #[arg(long)]
    pub rounds: Option<u64>,
}

/// Executes the `feed` command.
///
/// Prints the collected samples as one JSON array, the format that
/// `anlz watch --replay` and `anlz render --input` read back.
///
/// # Errors
///
/// Returns an error if the config is invalid or the Ctrl+C handler
/// cannot be installed.
#[allow(clippy::print_stdout)]
pub fn execute(args: FeedArgs, config: &AnalyzerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {e}"))?;

    let tick = std::time::Duration::from_millis(config.tick_ms);
    let mut source = SimulatedSource::new(args.seed);

    tracing::info!(tick_ms = config.tick_ms, "feeding, Ctrl+C to stop");
    let samples = collect_rounds(&mut source, args.rounds, tick, &running);

    println!("{}", serde_json::to_string_pretty(&samples)?);
    tracing::info!(count = samples.len(), "feed finished");
    Ok(())
}

/// Polls the source until the round limit is reached or the flag clears.
///
/// The limit is checked before each poll, so a limit of zero collects
/// nothing. Sleeps between rounds, never after the last one.
fn collect_rounds<S: MetricSource>(
    source: &mut S,
    rounds: Option<u64>,
    tick: std::time::Duration,
    running: &AtomicBool,
) -> Vec<analyzer_common::types::MetricSample> {
    let mut samples = Vec::new();
    let mut round = 0_u64;

    while running.load(Ordering::SeqCst) && rounds.is_none_or(|limit| round < limit) {
        samples.extend(source.poll());
        round += 1;
        if rounds.is_none_or(|limit| round < limit) {
            std::thread::sleep(tick);
        }
    }
    samples
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn zero_rounds_collects_nothing() {
        let mut source = SimulatedSource::new(1);
        let running = AtomicBool::new(true);
        let samples = collect_rounds(&mut source, Some(0), Duration::ZERO, &running);
        assert!(samples.is_empty());
    }

    #[test]
    fn round_limit_bounds_the_collected_samples() {
        let mut source = SimulatedSource::new(1);
        let running = AtomicBool::new(true);
        let samples = collect_rounds(&mut source, Some(2), Duration::ZERO, &running);
        // Three metrics per round.
        assert_eq!(samples.len(), 6);
    }

    #[test]
    fn cleared_flag_stops_collection_immediately() {
        let mut source = SimulatedSource::new(1);
        let running = AtomicBool::new(false);
        let samples = collect_rounds(&mut source, None, Duration::ZERO, &running);
        assert!(samples.is_empty());
    }
}
