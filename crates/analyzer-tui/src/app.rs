//! TUI application state machine.
//!
//! Manages the running flag, view routing, and the current view model.

use analyzer_view::DashboardViewModel;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Which view the TUI is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Main dashboard with metric cards and trend panels.
    Dashboard,
    /// Settings placeholder screen.
    Settings,
    /// History placeholder screen.
    History,
}

impl View {
    /// All views in sidebar order.
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Settings, Self::History];

    /// Label shown in the sidebar and navbar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Settings => "Settings",
            Self::History => "History",
        }
    }
}

/// Root application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the app should continue running.
    pub running: bool,
    /// Current active view.
    pub active_view: View,
    /// View model rendered on the next draw.
    pub model: DashboardViewModel,
}

impl App {
    /// Creates a new application state showing the dashboard.
    #[must_use]
    pub fn new() -> Self {
        Self {
            running: true,
            active_view: View::Dashboard,
            model: DashboardViewModel::default(),
        }
    }

    /// Replaces the view model with a freshly derived one.
    pub fn refresh(&mut self, model: DashboardViewModel) {
        self.model = model;
    }

    /// Signals the app to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Applies a key event to the state machine.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::Right => self.cycle_view(1),
            KeyCode::BackTab | KeyCode::Left => self.cycle_view(-1),
            KeyCode::Char('1') => self.active_view = View::Dashboard,
            KeyCode::Char('2') => self.active_view = View::Settings,
            KeyCode::Char('3') => self.active_view = View::History,
            _ => {}
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn cycle_view(&mut self, step: isize) {
        let current = View::ALL
            .iter()
            .position(|v| *v == self.active_view)
            .unwrap_or(0);
        let len = View::ALL.len() as isize;
        let next = ((current as isize + step).rem_euclid(len)) as usize;
        self.active_view = View::ALL[next];
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, crossterm::event::KeyModifiers::NONE)
    }

    #[test]
    fn new_app_shows_dashboard_and_runs() {
        let app = App::new();
        assert!(app.running);
        assert_eq!(app.active_view, View::Dashboard);
    }

    #[test]
    fn q_quits() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn esc_quits() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Esc));
        assert!(!app.running);
    }

    #[test]
    fn tab_cycles_through_all_views_and_wraps() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.active_view, View::Settings);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.active_view, View::History);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.active_view, View::Dashboard);
    }

    #[test]
    fn back_tab_cycles_backwards_and_wraps() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.active_view, View::History);
    }

    #[test]
    fn number_keys_jump_directly() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('3')));
        assert_eq!(app.active_view, View::History);
        app.handle_key(press(KeyCode::Char('1')));
        assert_eq!(app.active_view, View::Dashboard);
    }
}
