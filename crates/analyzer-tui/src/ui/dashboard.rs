//! Main dashboard content: the three-metric card grid and trend panels.

use analyzer_view::{DashboardViewModel, MetricField, MetricStatus};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::trends;

/// Renders the dashboard view: cards on top, trend panels below.
pub fn render(frame: &mut Frame, area: Rect, model: &DashboardViewModel) {
    let [cards_area, trends_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

    render_cards(frame, cards_area, model);
    trends::render(frame, trends_area, model);
}

fn render_cards(frame: &mut Frame, area: Rect, model: &DashboardViewModel) {
    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    render_card(frame, columns[0], "CPU Usage", &model.cpu);
    render_card(frame, columns[1], "GPU Usage", &model.gpu);
    render_card(frame, columns[2], "Temperature", &model.temperature);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, field: &MetricField) {
    let value_style = match field.status {
        MetricStatus::Normal => Style::default().add_modifier(Modifier::BOLD),
        MetricStatus::Warning => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        MetricStatus::Critical => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    };

    let card = Paragraph::new(field.text.clone())
        .style(value_style)
        .centered()
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(card, area);
}
