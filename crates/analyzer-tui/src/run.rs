//! The main TUI loop.

use std::time::Duration;

use analyzer_common::config::AnalyzerConfig;
use analyzer_common::error::{AnalyzerError, Result};
use analyzer_store::SharedMetricStore;
use analyzer_view::{DashboardViewModel, Thresholds};

use crate::app::App;
use crate::event::{TerminalEvent, next_event};
use crate::ui;

/// Runs the dashboard until the user quits.
///
/// Owns the terminal for the duration: raw mode and the alternate
/// screen are entered on start and restored on exit, including on
/// error. Every tick takes a fresh snapshot from the store, derives a
/// view model, and redraws.
///
/// # Errors
///
/// Returns an error if terminal setup, drawing, or event polling fails,
/// or if the store lock was poisoned.
pub fn run(store: &SharedMetricStore, config: &AnalyzerConfig) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, store, config);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    store: &SharedMetricStore,
    config: &AnalyzerConfig,
) -> Result<()> {
    let thresholds = Thresholds::from(config);
    let tick = Duration::from_millis(config.tick_ms);

    let mut app = App::new();
    app.refresh(DashboardViewModel::derive(&store.snapshot()?, &thresholds));

    while app.running {
        let _ = terminal
            .draw(|frame| ui::render(frame, &app))
            .map_err(|e| AnalyzerError::Terminal {
                message: format!("draw failed: {e}"),
            })?;

        match next_event(tick)? {
            TerminalEvent::Key(key) => app.handle_key(key),
            TerminalEvent::Tick => {
                app.refresh(DashboardViewModel::derive(&store.snapshot()?, &thresholds));
            }
            TerminalEvent::Resize(_, _) => {}
        }
    }

    tracing::info!("dashboard closed");
    Ok(())
}
