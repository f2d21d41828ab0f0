//! Placeholder screens for the routed but feature-less views.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::View;

/// Renders a placeholder screen for the Settings and History views.
pub fn render(frame: &mut Frame, area: Rect, view: View) {
    let body = match view {
        View::Settings => "Settings are configured via the config file and CLI flags.",
        View::History | View::Dashboard => "Nothing here yet.",
    };

    let screen = Paragraph::new(body)
        .style(Style::default().fg(Color::DarkGray))
        .centered()
        .block(Block::default().borders(Borders::ALL).title(view.label()));
    frame.render_widget(screen, area);
}
