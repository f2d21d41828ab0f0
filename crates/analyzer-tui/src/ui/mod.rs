//! Dashboard rendering.
//!
//! The fixed visual structure: sidebar with navigation items, top bar,
//! view-specific content, and a footer with static system info.

pub mod dashboard;
pub mod placeholder;
pub mod trends;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::{App, View};

/// Footer text, carried over verbatim from the original mockup.
const FOOTER_TEXT: &str = "System Info: Windows 11 | Intel i7 | Version 1.0";

/// Renders the full frame for the current application state.
pub fn render(frame: &mut Frame, app: &App) {
    let [sidebar_area, main_area] =
        Layout::horizontal([Constraint::Percentage(18), Constraint::Min(0)]).areas(frame.area());

    render_sidebar(frame, sidebar_area, app.active_view);

    let [navbar_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(main_area);

    render_navbar(frame, navbar_area, app.active_view);
    match app.active_view {
        View::Dashboard => dashboard::render(frame, content_area, &app.model),
        View::Settings | View::History => {
            placeholder::render(frame, content_area, app.active_view);
        }
    }
    render_footer(frame, footer_area);
}

fn render_sidebar(frame: &mut Frame, area: Rect, active: View) {
    let items: Vec<ListItem> = View::ALL
        .iter()
        .map(|view| {
            let style = if *view == active {
                Style::default().bg(Color::Green).fg(Color::Black)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(format!(" {}", view.label())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Analyzer", Style::default().add_modifier(Modifier::BOLD))),
    );
    frame.render_widget(list, area);
}

fn render_navbar(frame: &mut Frame, area: Rect, active: View) {
    let mut spans = Vec::new();
    for label in ["Dashboard", "Settings", "Trends"] {
        let is_active = label == active.label() || (label == "Trends" && active == View::History);
        let style = if is_active {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("    "));
    }

    let navbar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(navbar, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(FOOTER_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .centered()
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}
