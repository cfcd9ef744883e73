// Players section: search box and results list on the left, the selected
// player's career stats on the right.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::layout::{split_columns, split_input_box};
use crate::tui::{DetailPanel, ResultsPanel, ViewState};

use super::input_border_style;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (left, right) = split_columns(area);
    let (search_area, results_area) = split_input_box(left);

    render_search_box(frame, search_area, &state.search_input);
    render_results(frame, results_area, state);
    render_detail(frame, right, &state.detail);
}

fn render_search_box(frame: &mut Frame, area: Rect, query: &str) {
    let content = if query.is_empty() {
        Line::from(Span::styled(
            "Type at least 3 letters...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(format!("{query}_"))
    };
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(input_border_style())
            .title("Search Players"),
    );
    frame.render_widget(paragraph, area);
}

fn render_results(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default().borders(Borders::ALL).title("Results");

    match &state.results {
        ResultsPanel::Players(_) => {
            let list = List::new(result_items(&state.results))
                .block(block)
                .highlight_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            let mut list_state = ListState::default().with_selected(Some(state.selected_result));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
        _ => {
            let paragraph = Paragraph::new(result_items_text(&state.results))
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
        }
    }
}

/// One list row per player, in the order the backend returned them.
pub fn result_items(results: &ResultsPanel) -> Vec<ListItem<'static>> {
    match results {
        ResultsPanel::Players(players) => players
            .iter()
            .map(|p| {
                let mut spans = vec![Span::raw(p.name.clone())];
                if let Some(styles) = p.styles() {
                    spans.push(Span::styled(
                        format!("  {styles}"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// The non-list states of the results container.
fn result_items_text(results: &ResultsPanel) -> Line<'static> {
    match results {
        ResultsPanel::Placeholder(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Gray),
        )),
        ResultsPanel::Error(message) => {
            Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red)))
        }
        ResultsPanel::Empty | ResultsPanel::Players(_) => Line::from(""),
    }
}

fn render_detail(frame: &mut Frame, area: Rect, detail: &DetailPanel) {
    let block = Block::default().borders(Borders::ALL).title("Player Details");

    if !detail.visible {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "Select a player to view career stats.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    frame.render_widget(Paragraph::new(detail_lines(detail)).block(block), area);
}

pub fn detail_lines(detail: &DetailPanel) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            detail.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (label, value) in detail.rows() {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<12}"), Style::default().fg(Color::Gray)),
            Span::styled(
                value.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
