// Status bar widget: backend connection, section tabs, last health check.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::{ConnectionStatus, Section};
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [connection indicator] [section tabs] [last check]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    let (dot, dot_color) = connection_indicator(state.connection_status);
    spans.push(Span::styled(format!(" {} ", dot), Style::default().fg(dot_color)));
    spans.push(Span::styled(
        connection_label(state.connection_status),
        Style::default().fg(Color::White),
    ));

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.extend(tab_spans(state.active_section));

    if let Some(checked) = state.last_health_check {
        spans.push(Span::styled(
            format!("| checked {}", checked.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Return the connection dot character and its color.
pub fn connection_indicator(status: ConnectionStatus) -> (&'static str, Color) {
    match status {
        ConnectionStatus::Unknown => ("●", Color::Yellow),
        ConnectionStatus::Connected => ("●", Color::Green),
        ConnectionStatus::Disconnected => ("●", Color::Red),
    }
}

pub fn connection_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Unknown => "Checking backend",
        ConnectionStatus::Connected => "Backend online",
        ConnectionStatus::Disconnected => "Backend offline",
    }
}

/// Build the nav tab spans, highlighting the active section's tab.
/// E.g. "[F1:Home] [F2:Players] [F3:Predict]"
pub fn tab_spans(active: Option<Section>) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, section) in Section::ALL.into_iter().enumerate() {
        let style = if Some(section) == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[F{}:{}]", i + 1, section.title()), style));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
