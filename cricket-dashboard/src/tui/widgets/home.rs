// Home section: welcome text and backend status.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::protocol::ConnectionStatus;
use crate::tui::ViewState;

use super::status_bar::{connection_indicator, connection_label};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(home_lines(state))
        .block(Block::default().borders(Borders::ALL).title("Cricket Dashboard"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Drawn when no section is active.
pub fn render_blank(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "No section selected. Press Tab to choose one.",
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn home_lines(state: &ViewState) -> Vec<Line<'static>> {
    let (dot, color) = connection_indicator(state.connection_status);
    let mut lines = vec![
        Line::from(Span::styled(
            "Player statistics and run predictions",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  [F2] Players  search by name and view career batting stats"),
        Line::from("  [F3] Predict  project a first or second innings total"),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{dot} "), Style::default().fg(color)),
            Span::raw(connection_label(state.connection_status)),
        ]),
    ];

    match (&state.health, state.connection_status) {
        (Some(health), _) if !health.message.is_empty() => {
            lines.push(Line::from(Span::styled(
                format!("  {}", health.message),
                Style::default().fg(Color::Gray),
            )));
        }
        (_, ConnectionStatus::Disconnected) => {
            lines.push(Line::from(Span::styled(
                "  Backend is offline. Please start the API server.",
                Style::default().fg(Color::Red),
            )));
        }
        _ => {}
    }

    lines
}
