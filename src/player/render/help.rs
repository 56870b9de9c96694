//! Help overlay rendering for the lecture player.
//!
//! Displays a centered help box with all available keyboard shortcuts.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Playback",
    "    Space        Play / Pause",
    "    <-/->        Skip back / forward 15s",
    "    Home/End     Go to start / end",
    "    [ ]          Slower / faster",
    "    1-4          Speed 0.5x, 1x, 1.5x, 2x",
    "    +/-          Volume up / down",
    "",
    "  Transcript & Chapters",
    "    Tab          Switch transcript / chapters",
    "    n/p          Next / previous chapter",
    "    Up/Down      Move selection",
    "    Enter        Jump to selection",
    "    Click        Seek on progress bar or waveform",
    "",
    "  Sharing",
    "    s            Copy link to selected entry",
    "    S            Copy link to current position",
    "",
    "  General",
    "    ?            Show this help",
    "    q / Esc      Quit player",
    "",
    "        Press any key to close",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 50;

/// Height of the help box including borders.
pub fn help_box_height() -> u16 {
    HELP_LINES.len() as u16 + 2
}

/// Area of the help box, centered in `area` and clipped to it.
pub fn help_area(area: Rect) -> Rect {
    let width = HELP_BOX_WIDTH.min(area.width);
    let height = help_box_height().min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render the help overlay on top of the player.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup = help_area(area);
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|line| Line::styled(*line, theme.text_style()))
        .collect();

    let block = Block::default()
        .title(" EduAudio Player Help ")
        .borders(Borders::ALL)
        .border_style(theme.accent_style());

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
