//! Player state management
//!
//! Contains the central `PlaybackState` struct that holds all playback and
//! UI state, as well as shared types used across player modules.

use std::time::{Duration, Instant};

use crate::player::rate::PlaybackRate;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Marker information for the progress bar.
#[derive(Debug, Clone)]
pub struct MarkerPosition {
    /// Time of the marker in seconds
    pub time: f64,
    /// Marker label (chapter title)
    pub label: String,
}

/// Which list the lower panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Transcript,
    Chapters,
}

impl Tab {
    pub fn toggle(self) -> Self {
        match self {
            Tab::Transcript => Tab::Chapters,
            Tab::Chapters => Tab::Transcript,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Transcript => "Transcript",
            Tab::Chapters => "Chapters",
        }
    }
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// A non-blocking message shown in the status line.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

impl Notification {
    /// How long a notification stays visible.
    pub const TTL: Duration = Duration::from_secs(4);

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Info,
            shown_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= Self::TTL
    }
}

/// Central playback state for the lecture player.
///
/// Mirrors the media element (position, duration, play state, rate,
/// volume) and holds the UI state the renderer and input handlers share.
#[derive(Debug)]
pub struct PlaybackState {
    // === Media mirror ===
    /// Current playback position in seconds
    pub current_time: f64,
    /// Media length in seconds (0 until metadata has loaded)
    pub duration: f64,
    /// Whether the player shows as playing
    pub is_playing: bool,
    /// A play request was issued and has not been confirmed yet
    pub play_pending: bool,
    pub playback_rate: PlaybackRate,
    /// Output volume in `[0, 1]`
    pub volume: f64,

    // === UI ===
    /// Lower panel tab
    pub tab: Tab,
    /// Highlighted row in the current tab
    pub selected: usize,
    /// Whether the selection tracks the active row
    pub follow_playback: bool,
    /// Whether help overlay is visible
    pub show_help: bool,
    pub notification: Option<Notification>,

    // === Terminal ===
    pub term_cols: u16,
    pub term_rows: u16,

    // === Rendering flags ===
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl PlaybackState {
    /// Create a new PlaybackState with default values.
    ///
    /// # Arguments
    /// * `term_cols` - Terminal width in columns
    /// * `term_rows` - Terminal height in rows
    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            is_playing: false,
            play_pending: false,
            playback_rate: PlaybackRate::Normal,
            volume: 1.0,

            tab: Tab::Transcript,
            selected: 0,
            follow_playback: true,
            show_help: false,
            notification: None,

            term_cols,
            term_rows,

            needs_render: true,
        }
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.needs_render = true;
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Switch between transcript and chapters.
    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.toggle();
        self.follow_playback = true;
        self.needs_render = true;
    }

    /// Move the selection by `delta` rows within `len` items.
    ///
    /// Moving the selection stops it from following playback.
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let max = len as isize - 1;
        self.selected = (self.selected as isize + delta).clamp(0, max) as usize;
        self.follow_playback = false;
        self.needs_render = true;
    }

    /// Show a notification in the status line.
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
        self.needs_render = true;
    }

    /// Drop the notification once it has been visible long enough.
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.notification = None;
            self.needs_render = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_correct_defaults() {
        let state = PlaybackState::new(80, 27);

        assert!(!state.is_playing);
        assert!(!state.play_pending);
        assert_eq!(state.playback_rate, PlaybackRate::Normal);
        assert_eq!(state.volume, 1.0);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.duration, 0.0);
        assert_eq!(state.tab, Tab::Transcript);
        assert!(state.follow_playback);
        assert!(!state.show_help);
        assert!(state.needs_render);
    }

    #[test]
    fn handle_resize_updates_dimensions() {
        let mut state = PlaybackState::new(80, 27);
        state.needs_render = false;
        state.handle_resize(120, 40);

        assert_eq!(state.term_cols, 120);
        assert_eq!(state.term_rows, 40);
        assert!(state.needs_render);
    }

    #[test]
    fn toggle_tab_switches_and_resumes_following() {
        let mut state = PlaybackState::new(80, 27);
        state.follow_playback = false;
        state.toggle_tab();
        assert_eq!(state.tab, Tab::Chapters);
        assert!(state.follow_playback);
        state.toggle_tab();
        assert_eq!(state.tab, Tab::Transcript);
    }

    #[test]
    fn move_selection_clamps_to_list() {
        let mut state = PlaybackState::new(80, 27);
        state.move_selection(5, 3);
        assert_eq!(state.selected, 2);
        assert!(!state.follow_playback);
        state.move_selection(-10, 3);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn move_selection_ignores_empty_list() {
        let mut state = PlaybackState::new(80, 27);
        state.move_selection(1, 0);
        assert_eq!(state.selected, 0);
        assert!(state.follow_playback);
    }

    #[test]
    fn notification_expires_after_ttl() {
        let mut state = PlaybackState::new(80, 27);
        let note = Notification::info("copied");
        let shown = note.shown_at;
        state.notify(note);

        state.expire_notification(shown + Duration::from_secs(1));
        assert!(state.notification.is_some());

        state.expire_notification(shown + Notification::TTL);
        assert!(state.notification.is_none());
    }

    #[test]
    fn tab_titles() {
        assert_eq!(Tab::Transcript.title(), "Transcript");
        assert_eq!(Tab::Chapters.title(), "Chapters");
    }
}
