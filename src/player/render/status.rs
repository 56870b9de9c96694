//! Controls row for the lecture player.
//!
//! Displays transport buttons, the speed selector and the volume meter.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::player::rate::PlaybackRate;
use crate::player::state::PlaybackState;
use crate::theme::Theme;

/// Cells in the volume meter.
pub const VOLUME_CELLS: usize = 10;

/// Build the volume meter, e.g. `████████░░`.
pub fn volume_meter(volume: f64) -> String {
    let filled = ((volume.clamp(0.0, 1.0) * VOLUME_CELLS as f64).round() as usize).min(VOLUME_CELLS);
    let mut meter = String::with_capacity(VOLUME_CELLS * 3);
    for i in 0..VOLUME_CELLS {
        meter.push(if i < filled { '█' } else { '░' });
    }
    meter
}

/// Play/pause glyph: what the button would do when pressed.
pub fn play_button(is_playing: bool) -> &'static str {
    if is_playing {
        "⏸"
    } else {
        "▶"
    }
}

/// Build the styled spans of the controls row.
pub fn build_controls_spans(state: &PlaybackState, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled(" ⏮ ", theme.text_style()),
        Span::styled(format!(" {} ", play_button(state.is_playing)), theme.accent_bold_style()),
        Span::styled(" ⏭ ", theme.text_style()),
        Span::styled("  │ ", theme.text_secondary_style()),
        Span::styled("Speed ", theme.text_secondary_style()),
    ];

    for rate in PlaybackRate::ALL {
        if rate == state.playback_rate {
            spans.push(Span::styled(format!("[{}]", rate.label()), theme.accent_bold_style()));
        } else {
            spans.push(Span::styled(format!(" {} ", rate.label()), theme.text_style()));
        }
    }

    spans.push(Span::styled(" │ ", theme.text_secondary_style()));
    spans.push(Span::styled("Volume ", theme.text_secondary_style()));
    spans.push(Span::styled(volume_meter(state.volume), theme.accent_style()));
    spans.push(Span::styled(
        format!(" {:>3}%", (state.volume * 100.0).round() as u32),
        theme.text_style(),
    ));
    spans
}

/// Render the controls row.
pub fn render_controls(frame: &mut Frame, area: Rect, state: &PlaybackState, theme: &Theme) {
    let line = Line::from(build_controls_spans(state, theme));
    frame.render_widget(Paragraph::new(line), area);
}
