// TUI widget modules for each dashboard panel.

pub mod help_bar;
pub mod home;
pub mod players;
pub mod prediction;
pub mod quit_confirm;
pub mod status_bar;

use ratatui::style::{Color, Modifier, Style};

/// Border style for an input that currently receives typed characters.
pub fn input_border_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

/// Flatten a rendered test buffer into one string per row.
#[cfg(test)]
pub(crate) fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}
