//! Playback controller.
//!
//! `Player` owns the media element, the lecture and the playback state.
//! Every user action goes through one of its operations, which forwards the
//! change to the media element and keeps `PlaybackState` in step with it.

use tracing::{debug, warn};
use url::Url;

use crate::lecture::{Chapter, Lecture};
use crate::media::{MediaElement, MediaEvent, PlayRequest};
use crate::player::playback::{
    active_chapter, active_chapter_index, active_segment, collect_markers, next_marker,
    previous_marker, progress_percent,
};
use crate::player::rate::PlaybackRate;
use crate::player::state::{Notification, PlaybackState, Tab};
use crate::share;

/// Default skip distance in seconds.
pub const DEFAULT_SKIP_SECONDS: f64 = 15.0;

/// The lecture player: controller plus state.
#[derive(Debug)]
pub struct Player<M: MediaElement> {
    media: M,
    lecture: Lecture,
    pub state: PlaybackState,
    skip_seconds: f64,
    /// Play request whose outcome is still awaited
    play_request: Option<PlayRequest>,
}

impl<M: MediaElement> Player<M> {
    /// Create a player for `lecture` driving `media`.
    pub fn new(lecture: Lecture, media: M, state: PlaybackState) -> Self {
        let mut player = Self {
            media,
            lecture,
            state,
            skip_seconds: DEFAULT_SKIP_SECONDS,
            play_request: None,
        };
        let rate = player.state.playback_rate;
        let volume = player.state.volume;
        player.set_playback_rate(rate);
        player.set_volume(volume);
        player
    }

    /// Override the skip distance (builder style).
    pub fn with_skip_seconds(mut self, seconds: f64) -> Self {
        if seconds.is_finite() && seconds > 0.0 {
            self.skip_seconds = seconds;
        }
        self
    }

    pub fn lecture(&self) -> &Lecture {
        &self.lecture
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn skip_seconds(&self) -> f64 {
        self.skip_seconds
    }

    /// Play or pause.
    ///
    /// Pausing is immediate. Playing is optimistic: the state shows as
    /// playing right away and the request stays pending until the media
    /// element confirms or rejects it. Outcomes of older requests are
    /// ignored.
    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            debug!("pause at {:.1}s", self.state.current_time);
            self.media.pause();
            self.play_request = None;
            self.state.is_playing = false;
            self.state.play_pending = false;
        } else {
            let request = self.media.play();
            debug!("play request {:?} at {:.1}s", request, self.state.current_time);
            self.play_request = Some(request);
            self.state.is_playing = true;
            self.state.play_pending = true;
            self.sync_position();
        }
        self.state.needs_render = true;
    }

    /// Seek to an absolute position in seconds.
    ///
    /// The media element clamps to its own bounds; the state mirrors
    /// wherever the element ended up.
    pub fn seek(&mut self, seconds: f64) {
        debug!("seek to {:.1}s", seconds);
        self.media.set_current_time(seconds);
        self.sync_position();
        self.state.follow_playback = true;
        self.state.needs_render = true;
    }

    /// Skip forward by the skip distance, stopping at the end.
    pub fn skip_forward(&mut self) {
        let target = (self.state.current_time + self.skip_seconds).min(self.state.duration);
        self.seek(target);
    }

    /// Skip backward by the skip distance, stopping at the start.
    pub fn skip_backward(&mut self) {
        let target = (self.state.current_time - self.skip_seconds).max(0.0);
        self.seek(target);
    }

    /// Seek to a fraction of the duration (click on the progress bar).
    ///
    /// Does nothing until the duration is known.
    pub fn seek_to_fraction(&mut self, fraction: f64) {
        if self.state.duration <= 0.0 || !fraction.is_finite() {
            return;
        }
        self.seek(fraction.clamp(0.0, 1.0) * self.state.duration);
    }

    pub fn set_playback_rate(&mut self, rate: PlaybackRate) {
        self.state.playback_rate = rate;
        self.media.set_playback_rate(rate.as_f64());
        self.state.needs_render = true;
    }

    /// Move to the next (`+1`) or previous (`-1`) rate.
    pub fn cycle_playback_rate(&mut self, delta: i32) {
        let rate = self.state.playback_rate.step(delta);
        self.set_playback_rate(rate);
    }

    /// Set the volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f64) {
        if !volume.is_finite() {
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.state.volume = volume;
        self.media.set_volume(volume);
        self.state.needs_render = true;
    }

    pub fn nudge_volume(&mut self, delta: f64) {
        // Round to whole percent so repeated nudges land on clean values
        let target = ((self.state.volume + delta) * 100.0).round() / 100.0;
        self.set_volume(target);
    }

    /// Jump to the start of the next chapter.
    ///
    /// Returns false when the current chapter is the last one.
    pub fn next_chapter(&mut self) -> bool {
        let markers = collect_markers(&self.lecture.chapters);
        match next_marker(&markers, self.state.current_time) {
            Some(marker) => {
                let time = marker.time;
                self.seek(time);
                true
            }
            None => false,
        }
    }

    /// Jump back to the closest chapter start behind the playhead, or to 0.
    pub fn previous_chapter(&mut self) {
        let markers = collect_markers(&self.lecture.chapters);
        let time = previous_marker(&markers, self.state.current_time)
            .map(|m| m.time)
            .unwrap_or(0.0);
        self.seek(time);
    }

    /// Apply the start position carried by a loaded page URL, once.
    ///
    /// Returns the position that was applied, if any.
    pub fn load_start_position(&mut self, page: &Url) -> Option<u64> {
        let position = share::start_position(page)?;
        debug!("start position {}s from {}", position, page);
        self.seek(position as f64);
        Some(position)
    }

    /// Advance the media clock and apply every event it produced.
    pub fn tick(&mut self, elapsed: std::time::Duration) {
        self.media.advance(elapsed);
        for event in self.media.drain_events() {
            self.handle_media_event(event);
        }
    }

    /// Reconcile state with a media element notification.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate(time) => {
                self.state.current_time = time;
            }
            MediaEvent::LoadedMetadata(duration) => {
                debug!("metadata loaded, duration {:.1}s", duration);
                self.state.duration = duration;
            }
            MediaEvent::Ended => {
                self.play_request = None;
                self.state.is_playing = false;
                self.state.play_pending = false;
            }
            MediaEvent::PlayResolved(request) => {
                if self.play_request == Some(request) {
                    self.play_request = None;
                    self.state.play_pending = false;
                } else {
                    debug!("stale play confirmation {:?} ignored", request);
                }
            }
            MediaEvent::PlayRejected(request, reason) => {
                if self.play_request == Some(request) {
                    warn!("play request rejected: {}", reason);
                    self.play_request = None;
                    self.state.play_pending = false;
                    self.state.is_playing = false;
                    self.state
                        .notify(Notification::error(format!("Playback failed: {}", reason)));
                } else {
                    debug!("stale play rejection {:?} ignored: {}", request, reason);
                }
            }
        }
        self.state.needs_render = true;
    }

    /// Playback progress in percent (0 while the duration is unknown).
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.state.current_time, self.state.duration)
    }

    /// Chapter active at the current position.
    pub fn current_chapter(&self) -> Option<&Chapter> {
        active_chapter(&self.lecture.chapters, self.state.current_time)
    }

    /// Index of the transcript segment active at the current position.
    pub fn current_segment(&self) -> Option<usize> {
        active_segment(&self.lecture.transcript, self.state.current_time)
    }

    /// Active row of the visible tab.
    pub fn active_row(&self) -> Option<usize> {
        match self.state.tab {
            Tab::Transcript => self.current_segment(),
            Tab::Chapters => active_chapter_index(&self.lecture.chapters, self.state.current_time),
        }
    }

    /// Number of rows in the visible tab.
    pub fn row_count(&self) -> usize {
        match self.state.tab {
            Tab::Transcript => self.lecture.transcript.len(),
            Tab::Chapters => self.lecture.chapters.len(),
        }
    }

    /// Start time of the selected row in the visible tab.
    pub fn selected_time(&self) -> Option<f64> {
        let idx = self.state.selected;
        match self.state.tab {
            Tab::Transcript => self.lecture.transcript.get(idx).map(|s| s.timestamp),
            Tab::Chapters => self.lecture.chapters.get(idx).map(|c| c.start_time),
        }
    }

    /// Move the selection onto the active row while it follows playback.
    ///
    /// The selection is first kept inside the visible tab's rows.
    pub fn follow_active_row(&mut self) {
        let last = self.row_count().saturating_sub(1);
        if self.state.selected > last {
            self.state.selected = last;
            self.state.needs_render = true;
        }
        if !self.state.follow_playback {
            return;
        }
        if let Some(row) = self.active_row() {
            if row != self.state.selected {
                self.state.selected = row;
                self.state.needs_render = true;
            }
        }
    }

    /// Seek to the selected row and resume following playback.
    pub fn seek_to_selected(&mut self) {
        if let Some(time) = self.selected_time() {
            self.seek(time);
        }
    }

    fn sync_position(&mut self) {
        self.state.current_time = self.media.current_time();
    }
}
