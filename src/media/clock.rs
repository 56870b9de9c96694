//! Wall-clock driven media element.

use std::collections::VecDeque;
use std::time::Duration;

use super::{MediaElement, MediaEvent, PlayRequest};

/// Decides how the element answers play requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayPolicy {
    /// Every play request succeeds
    #[default]
    Allow,
    /// Every play request is refused with the given reason
    Deny(String),
}

/// A media element whose position follows elapsed time.
///
/// Metadata "loads" on the first [`MediaElement::advance`] call; until then
/// the duration reads as `0.0` and seeks are remembered unclamped, then
/// clamped once the duration is known.
#[derive(Debug)]
pub struct ClockMedia {
    source: String,
    /// Length reported once metadata has loaded
    media_duration: f64,
    metadata_loaded: bool,
    position: f64,
    paused: bool,
    rate: f64,
    volume: f64,
    /// Unanswered play request
    pending_play: Option<PlayRequest>,
    /// Id handed to the next play request
    next_request: u64,
    policy: PlayPolicy,
    events: VecDeque<MediaEvent>,
}

impl ClockMedia {
    /// Create a paused element for `source` with the given length.
    pub fn new(source: impl Into<String>, media_duration: f64) -> Self {
        Self {
            source: source.into(),
            media_duration: media_duration.max(0.0),
            metadata_loaded: false,
            position: 0.0,
            paused: true,
            rate: 1.0,
            volume: 1.0,
            pending_play: None,
            next_request: 0,
            policy: PlayPolicy::Allow,
            events: VecDeque::new(),
        }
    }

    /// Replace the play policy (builder style).
    pub fn with_policy(mut self, policy: PlayPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_policy(&mut self, policy: PlayPolicy) {
        self.policy = policy;
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn playback_rate(&self) -> f64 {
        self.rate
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn metadata_loaded(&self) -> bool {
        self.metadata_loaded
    }

    fn load_metadata(&mut self) {
        self.metadata_loaded = true;
        self.position = self.position.clamp(0.0, self.media_duration);
        self.events
            .push_back(MediaEvent::LoadedMetadata(self.media_duration));
        if self.position > 0.0 {
            self.events.push_back(MediaEvent::TimeUpdate(self.position));
        }
    }

    fn resolve_play(&mut self, request: PlayRequest) {
        match &self.policy {
            PlayPolicy::Allow => {
                self.paused = false;
                self.events.push_back(MediaEvent::PlayResolved(request));
            }
            PlayPolicy::Deny(reason) => {
                self.paused = true;
                self.events
                    .push_back(MediaEvent::PlayRejected(request, reason.clone()));
            }
        }
    }
}

impl MediaElement for ClockMedia {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        if self.metadata_loaded {
            self.position = seconds.clamp(0.0, self.media_duration);
            self.events.push_back(MediaEvent::TimeUpdate(self.position));
        } else {
            self.position = seconds.max(0.0);
        }
    }

    fn duration(&self) -> f64 {
        if self.metadata_loaded {
            self.media_duration
        } else {
            0.0
        }
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) -> PlayRequest {
        if self.metadata_loaded && self.position >= self.media_duration {
            // Playing an ended element starts over
            self.position = 0.0;
            self.events.push_back(MediaEvent::TimeUpdate(0.0));
        }
        self.next_request += 1;
        let request = PlayRequest(self.next_request);
        // A newer request answers for any older one still pending
        if let Some(previous) = self.pending_play.replace(request) {
            self.resolve_play(previous);
        }
        request
    }

    fn pause(&mut self) {
        if let Some(request) = self.pending_play.take() {
            self.events.push_back(MediaEvent::PlayRejected(
                request,
                "play request interrupted by pause".to_string(),
            ));
        }
        self.paused = true;
    }

    fn set_playback_rate(&mut self, rate: f64) {
        if rate.is_finite() && rate > 0.0 {
            self.rate = rate;
        }
    }

    fn set_volume(&mut self, volume: f64) {
        if volume.is_finite() {
            self.volume = volume.clamp(0.0, 1.0);
        }
    }

    fn advance(&mut self, elapsed: Duration) {
        if !self.metadata_loaded {
            self.load_metadata();
        }
        if let Some(request) = self.pending_play.take() {
            self.resolve_play(request);
        }
        if self.paused {
            return;
        }

        let next = self.position + elapsed.as_secs_f64() * self.rate;
        if next >= self.media_duration {
            self.position = self.media_duration;
            self.paused = true;
            self.events.push_back(MediaEvent::TimeUpdate(self.position));
            self.events.push_back(MediaEvent::Ended);
        } else {
            self.position = next;
            self.events.push_back(MediaEvent::TimeUpdate(self.position));
        }
    }

    fn drain_events(&mut self) -> Vec<MediaEvent> {
        self.events.drain(..).collect()
    }
}
