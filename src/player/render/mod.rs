//! Rendering components for the lecture player.
//!
//! This module contains all the UI rendering functions for the player,
//! including header, waveform, progress bar, controls, list panels and the
//! help overlay.

mod help;
mod panels;
mod progress;
mod status;
mod waveform;

pub use help::{help_area, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use panels::{chapter_line, render_panel, transcript_line};
pub use progress::{bar_area, build_progress_bar_chars, format_time, render_progress_bar};
pub use status::{build_controls_spans, play_button, render_controls, volume_meter};
pub use waveform::{Waveform, WaveformWidget, BAR_COUNT};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::lecture::Lecture;
use crate::media::MediaElement;
use crate::player::controller::Player;
use crate::player::playback::collect_markers;
use crate::player::state::MarkerPosition;
use crate::theme::Theme;
use crate::tui::app::{render_footer, render_status_line};

/// Key hints shown in the footer when no notification is visible.
pub const FOOTER_KEYS: &[(&str, &str)] = &[
    ("space", "play"),
    ("←/→", "skip"),
    ("[ ]", "speed"),
    ("n/p", "chapter"),
    ("Tab", "panel"),
    ("s", "share"),
    ("?", "help"),
    ("q", "quit"),
];

/// Screen regions of the player, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    pub header: Rect,
    pub waveform: Rect,
    pub progress: Rect,
    pub controls: Rect,
    pub list: Rect,
    pub footer: Rect,
}

/// Split the terminal into the player regions.
pub fn player_layout(area: Rect) -> PlayerLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    PlayerLayout {
        header: chunks[0],
        waveform: chunks[1],
        progress: chunks[2],
        controls: chunks[3],
        list: chunks[4],
        footer: chunks[5],
    }
}

/// Render inputs that do not change while a lecture plays.
#[derive(Debug, Clone)]
pub struct PlayerView {
    pub theme: Theme,
    pub waveform: Waveform,
    pub markers: Vec<MarkerPosition>,
}

impl PlayerView {
    pub fn new(lecture: &Lecture, theme: Theme, seed: u64) -> Self {
        Self {
            theme,
            waveform: Waveform::generate(seed),
            markers: collect_markers(&lecture.chapters),
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, lecture: &Lecture, chapter: Option<&str>, theme: &Theme) {
    let mut title = vec![Span::styled(format!(" {}", lecture.title), theme.accent_bold_style())];
    if !lecture.instructor.is_empty() {
        title.push(Span::styled(
            format!("  {}", lecture.instructor),
            theme.text_secondary_style(),
        ));
    }
    let chapter_line = match chapter {
        Some(title) => Line::from(vec![
            Span::styled(" Chapter: ", theme.text_secondary_style()),
            Span::styled(title.to_string(), theme.text_style()),
        ]),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(vec![Line::from(title), chapter_line]), area);
}

/// Draw one frame of the player.
pub fn draw_player<M: MediaElement>(frame: &mut Frame, player: &Player<M>, view: &PlayerView) {
    let theme = &view.theme;
    let state = &player.state;
    let lecture = player.lecture();
    let layout = player_layout(frame.area());

    render_header(
        frame,
        layout.header,
        lecture,
        player.current_chapter().map(|c| c.title.as_str()),
        theme,
    );

    let played = player.progress_percent() / 100.0;
    frame.render_widget(
        WaveformWidget::new(&view.waveform, played)
            .styles(theme.accent_style(), theme.text_secondary_style()),
        layout.waveform,
    );

    render_progress_bar(
        frame,
        layout.progress,
        state.current_time,
        state.duration,
        &view.markers,
        theme,
    );
    render_controls(frame, layout.controls, state, theme);
    render_panel(
        frame,
        layout.list,
        state.tab,
        &lecture.chapters,
        &lecture.transcript,
        player.active_row(),
        state.selected,
        theme,
    );

    match &state.notification {
        Some(notification) => render_status_line(frame, layout.footer, notification, theme),
        None => render_footer(frame, layout.footer, FOOTER_KEYS, theme),
    }

    if state.show_help {
        render_help(frame, frame.area(), theme);
    }
}
