//! Progress bar rendering for the lecture player.
//!
//! Displays playback progress with chapter marker indicators, flanked by
//! the elapsed time and the total duration.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::playback::progress_percent;
use crate::player::state::MarkerPosition;
use crate::theme::Theme;

/// Columns reserved on each side of the bar for a time label.
pub const TIME_LABEL_WIDTH: u16 = 7;

/// Format seconds as `M:SS`.
///
/// Minutes are unpadded, seconds zero-padded to two digits; both are
/// floored. Negative and non-finite input formats as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}", mins, secs)
}

/// The clickable bar area inside a progress row.
pub fn bar_area(row: Rect) -> Rect {
    let width = row.width.saturating_sub(TIME_LABEL_WIDTH * 2);
    Rect::new(
        row.x + TIME_LABEL_WIDTH.min(row.width),
        row.y,
        width,
        row.height.min(1),
    )
}

/// Build the progress bar character array.
///
/// Creates a visual representation of the progress bar including
/// the playhead position and chapter marker indicators.
///
/// # Returns
/// A tuple of (bar_chars, filled_count). With an unknown duration the bar
/// is empty and the playhead sits at the start.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    markers: &[MarkerPosition],
) -> (Vec<char>, usize) {
    let progress = progress_percent(current_time, total_duration) / 100.0;
    let filled = ((bar_width as f64 * progress) as usize).min(bar_width);

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    if total_duration > 0.0 {
        for marker in markers {
            let marker_pos = ((marker.time / total_duration) * bar_width as f64) as usize;
            if marker_pos < bar_width && bar[marker_pos] != '⏺' {
                bar[marker_pos] = '◆';
            }
        }
    }

    (bar, filled)
}

/// Render the progress row: `elapsed  bar  total`.
pub fn render_progress_bar(
    frame: &mut Frame,
    area: Rect,
    current_time: f64,
    total_duration: f64,
    markers: &[MarkerPosition],
    theme: &Theme,
) {
    let bar = bar_area(area);
    let (chars, filled) =
        build_progress_bar_chars(bar.width as usize, current_time, total_duration, markers);

    let mut spans = Vec::with_capacity(chars.len() + 2);
    spans.push(Span::styled(
        format!("{:>6} ", format_time(current_time)),
        theme.text_style(),
    ));
    for (i, &c) in chars.iter().enumerate() {
        let span = if c == '◆' {
            Span::styled(c.to_string(), Style::default().fg(theme.marker))
        } else if i < filled {
            Span::styled("━", theme.accent_style())
        } else if i == filled {
            Span::styled(c.to_string(), theme.text_style())
        } else {
            Span::styled(c.to_string(), theme.text_secondary_style())
        };
        spans.push(span);
    }
    spans.push(Span::styled(
        format!(" {:<6}", format_time(total_duration)),
        theme.text_style(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
