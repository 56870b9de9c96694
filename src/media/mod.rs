//! Media element abstraction
//!
//! The player never decodes audio itself. It drives a [`MediaElement`],
//! which owns position, duration, rate and volume and reports changes back
//! as [`MediaEvent`]s. Play requests complete asynchronously: the element
//! queues a [`MediaEvent::PlayResolved`] or [`MediaEvent::PlayRejected`]
//! tagged with the [`PlayRequest`] it answers, which the player picks up on
//! its next drain.
//!
//! [`ClockMedia`] is the element used by the terminal player. It advances
//! the position with elapsed wall time scaled by the playback rate.

mod clock;

use std::time::Duration;

pub use clock::{ClockMedia, PlayPolicy};

/// Identifies one call to [`MediaElement::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayRequest(pub u64);

/// Notification emitted by a media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback position changed (seconds)
    TimeUpdate(f64),
    /// Metadata is available; carries the media duration in seconds
    LoadedMetadata(f64),
    /// Playback reached the end of the media
    Ended,
    /// A pending play request started playback
    PlayResolved(PlayRequest),
    /// A pending play request was refused
    PlayRejected(PlayRequest, String),
}

/// The host-side media element the player controls.
///
/// Setters take effect immediately on the element's own state. Position
/// writes are clamped by the element to `[0, duration]` once the duration
/// is known.
pub trait MediaElement {
    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Request a new position in seconds.
    fn set_current_time(&mut self, seconds: f64);

    /// Media length in seconds, `0.0` until metadata has loaded.
    fn duration(&self) -> f64;

    /// Whether the element is currently paused.
    fn paused(&self) -> bool;

    /// Issue a play request. The outcome arrives later as an event
    /// carrying the returned id.
    fn play(&mut self) -> PlayRequest;

    /// Pause playback immediately.
    fn pause(&mut self);

    fn set_playback_rate(&mut self, rate: f64);

    /// Set output volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f64);

    /// Advance the element's clock by `elapsed` wall time.
    fn advance(&mut self, elapsed: Duration);

    /// Take all events emitted since the last call.
    fn drain_events(&mut self) -> Vec<MediaEvent>;
}
