// Quit confirmation overlay, drawn over the dashboard while
// `ViewState::confirm_quit` is set.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 32;
const DIALOG_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect) {
    let dialog = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog);

    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };
    let prompt = Line::from(vec![
        Span::raw(" Leave the dashboard? ("),
        key("y", Color::Green),
        Span::raw("/"),
        key("n", Color::Red),
        Span::raw(")"),
    ]);

    let paragraph = Paragraph::new(prompt)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, dialog);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit if needed.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_lines;

    #[test]
    fn dialog_is_centered_and_clamped() {
        let r = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, Rect::new(0, 0, 80, 24));
        assert_eq!((r.width, r.height), (DIALOG_WIDTH, DIALOG_HEIGHT));
        assert!((r.x + r.width / 2).abs_diff(40) <= 1);

        let small = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, Rect::new(0, 0, 10, 2));
        assert!(small.width <= 10 && small.height <= 2);
    }

    #[test]
    fn render_shows_prompt() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, frame.area())).unwrap();
        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines.iter().any(|l| l.contains("Leave the dashboard?")));
    }
}
