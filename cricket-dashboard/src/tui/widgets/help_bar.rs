// Help bar widget: key hints for the active section.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::Section;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        hint_text(state.active_section),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub fn hint_text(section: Option<Section>) -> &'static str {
    match section {
        Some(Section::Home) => " Tab/F1-F3:Sections | r:Check backend | Esc:Quit",
        Some(Section::Players) => {
            " Tab/F1-F3:Sections | type to search | Up/Down:Select | Enter:Load | Esc:Quit"
        }
        Some(Section::Predict) => {
            " Tab/F1-F3:Sections | Up/Down:Field | Enter:Predict | Esc:Quit"
        }
        None => " Tab/F1-F3:Sections | Esc:Quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_hint_mentions_quit() {
        for section in [None, Some(Section::Home), Some(Section::Players), Some(Section::Predict)] {
            assert!(hint_text(section).contains("Esc:Quit"));
        }
    }

    #[test]
    fn players_hint_mentions_load() {
        assert!(hint_text(Some(Section::Players)).contains("Enter:Load"));
    }
}
