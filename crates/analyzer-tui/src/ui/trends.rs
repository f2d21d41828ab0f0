//! Trend panels: performance sparklines and the power placeholder.

use analyzer_common::constants::PLACEHOLDER;
use analyzer_view::DashboardViewModel;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline};

/// Renders the two trend panels side by side.
pub fn render(frame: &mut Frame, area: Rect, model: &DashboardViewModel) {
    let [performance_area, power_area] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area);

    render_performance(frame, performance_area, model);
    render_power(frame, power_area);
}

fn render_performance(frame: &mut Frame, area: Rect, model: &DashboardViewModel) {
    let block = Block::default().borders(Borders::ALL).title("Performance Trends");
    if model.cpu_series.is_empty() && model.gpu_series.is_empty() {
        let empty = Paragraph::new(PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [cpu_area, gpu_area] =
        Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(inner);

    let cpu = Sparkline::default()
        .block(Block::default().title("CPU"))
        .style(Style::default().fg(Color::Green))
        .max(100)
        .data(&model.cpu_series);
    frame.render_widget(cpu, cpu_area);

    let gpu = Sparkline::default()
        .block(Block::default().title("GPU"))
        .style(Style::default().fg(Color::Cyan))
        .max(100)
        .data(&model.gpu_series);
    frame.render_widget(gpu, gpu_area);
}

/// The mockup ships no power metric; the panel stays a placeholder.
fn render_power(frame: &mut Frame, area: Rect) {
    let power = Paragraph::new(PLACEHOLDER)
        .style(Style::default().fg(Color::DarkGray))
        .centered()
        .block(Block::default().borders(Borders::ALL).title("Power Usage"));
    frame.render_widget(power, area);
}
