// Predict section: the prediction form on the left, the result panel on the
// right.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::protocol::PanelTone;
use crate::tui::layout::split_columns;
use crate::tui::{FormField, PredictionPanel, ViewState};

use super::input_border_style;

const SCORE_COLOR: Color = Color::Rgb(0xff, 0x6f, 0x00);

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (left, right) = split_columns(area);
    render_form(frame, left, state);
    render_result(frame, right, &state.prediction);
}

fn render_form(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(form_lines(state)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(input_border_style())
            .title("Match Setup"),
    );
    frame.render_widget(paragraph, area);
}

pub fn form_lines(state: &ViewState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for field in FormField::ALL {
        let focused = field == state.form_focus;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value = field.value(&state.form);
        let value_span = if value.is_empty() {
            Span::styled(field.hint().to_string(), Style::default().fg(Color::DarkGray))
        } else if focused {
            Span::raw(format!("{value}_"))
        } else {
            Span::raw(value.to_string())
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<13}", field.label()), label_style),
            value_span,
        ]));
    }
    lines
}

fn render_result(frame: &mut Frame, area: Rect, panel: &PredictionPanel) {
    let block = Block::default().borders(Borders::ALL).title("Prediction");
    let mut paragraph = Paragraph::new(result_lines(panel))
        .block(block)
        .wrap(Wrap { trim: false });
    if let Some(tone) = panel.tone() {
        paragraph = paragraph.style(tone_style(tone));
    }
    frame.render_widget(paragraph, area);
}

pub fn result_lines(panel: &PredictionPanel) -> Vec<Line<'static>> {
    match panel {
        PredictionPanel::Hidden => vec![Line::from(Span::styled(
            "Fill in the match setup and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))],
        PredictionPanel::Pending(message) => vec![Line::from(message.clone())],
        PredictionPanel::Ready { score, caption } => vec![
            Line::from(Span::styled("Projected Score", Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                score.to_string(),
                Style::default()
                    .fg(SCORE_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(caption.clone()),
        ],
        PredictionPanel::Failed { headline, detail } => vec![
            Line::from(Span::styled(headline.clone(), Style::default().fg(Color::Red))),
            Line::from(Span::styled(
                detail.clone(),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ],
    }
}

/// Panel colors per tone; info mirrors a light-blue banner with navy text.
pub fn tone_style(tone: PanelTone) -> Style {
    match tone {
        PanelTone::Info => Style::default()
            .fg(Color::Rgb(0x1a, 0x23, 0x7e))
            .bg(Color::Rgb(0xe3, 0xf2, 0xfd)),
        PanelTone::Success => Style::default(),
        PanelTone::Warning => Style::default().fg(Color::Red),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
