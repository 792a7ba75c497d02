//! Layout helpers for the task window.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Column of the text cursor inside a bordered one-line field. Offsets that
/// do not fit in a `u16` pin to the right edge.
pub fn cursor_x(field: Rect, offset: usize) -> u16 {
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    field.x + 1 + offset.min(field.width.saturating_sub(3))
}

/// A rectangle centered in `r`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
