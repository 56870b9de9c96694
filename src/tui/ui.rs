//! UI rendering helpers for TUI
//!
//! Hit-testing helpers for mouse input.

use ratatui::layout::Rect;

/// Whether `(column, row)` lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Horizontal position of `column` inside `area` as a fraction in `[0, 1]`.
pub fn column_fraction(area: Rect, column: u16) -> f64 {
    if area.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(area.x).min(area.width - 1);
    offset as f64 / (area.width - 1) as f64
}
