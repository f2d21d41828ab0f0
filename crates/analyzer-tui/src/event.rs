//! Terminal event handling.
//!
//! Polls the terminal for keyboard and resize events with a tick
//! timeout, turning the idle case into a periodic refresh signal.

use std::time::Duration;

use analyzer_common::error::{AnalyzerError, Result};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(crossterm::event::KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// The poll timed out; time to re-derive and redraw.
    Tick,
}

/// Waits up to `timeout` for the next terminal event.
///
/// Returns [`TerminalEvent::Tick`] when the timeout elapses with no
/// input. Mouse and other event kinds are reported as ticks too, so the
/// caller's loop stays a simple match.
///
/// # Errors
///
/// Returns an error if the underlying terminal read fails.
pub fn next_event(timeout: Duration) -> Result<TerminalEvent> {
    let ready = crossterm::event::poll(timeout).map_err(|e| AnalyzerError::Terminal {
        message: format!("event poll failed: {e}"),
    })?;
    if !ready {
        return Ok(TerminalEvent::Tick);
    }

    let event = crossterm::event::read().map_err(|e| AnalyzerError::Terminal {
        message: format!("event read failed: {e}"),
    })?;
    Ok(match event {
        crossterm::event::Event::Key(key) => TerminalEvent::Key(key),
        crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
        _ => TerminalEvent::Tick,
    })
}
