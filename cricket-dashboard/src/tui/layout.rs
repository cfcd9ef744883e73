// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Body: active section                              |
// |  +- left column (40%) -+- right column (60%) ---+ |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: connection indicator, section tabs, last health check.
    pub status_bar: Rect,
    /// Everything between the bars; the active section draws here.
    pub body: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(5),    // body
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        status_bar: vertical[0],
        body: vertical[1],
        help_bar: vertical[2],
    }
}

/// Split a section body into a left input column (40%) and a right output
/// column (60%).
pub fn split_columns(body: Rect) -> (Rect, Rect) {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(body);
    (horizontal[0], horizontal[1])
}

/// Split a column into a fixed 3-row input box on top and the rest below.
pub fn split_input_box(column: Rect) -> (Rect, Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(column);
    (vertical[0], vertical[1])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn layout_bars_are_one_row() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.help_bar.height, 1);
        assert_eq!(layout.body.height, 38);
    }

    #[test]
    fn layout_zones_stack_in_order() {
        let layout = build_layout(test_area());
        assert!(layout.status_bar.y < layout.body.y);
        assert!(layout.body.y < layout.help_bar.y);
    }

    #[test]
    fn right_column_is_wider_than_left() {
        let layout = build_layout(test_area());
        let (left, right) = split_columns(layout.body);
        assert!(right.width > left.width);
        assert_eq!(left.width + right.width, layout.body.width);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn input_box_is_three_rows() {
        let layout = build_layout(test_area());
        let (left, _) = split_columns(layout.body);
        let (input, rest) = split_input_box(left);
        assert_eq!(input.height, 3);
        assert_eq!(input.height + rest.height, left.height);
    }

    #[test]
    fn layout_small_terminal_still_valid() {
        let area = Rect::new(0, 0, 40, 10);
        let layout = build_layout(area);
        for rect in [layout.status_bar, layout.body, layout.help_bar] {
            assert!(
                rect.width > 0 && rect.height > 0,
                "Small terminal: rect {:?} has zero area",
                rect
            );
        }
    }
}
