//! Lecture player module
//!
//! Plays a lecture in the terminal with a synchronized transcript, chapter
//! navigation, playback rate and volume controls, and shareable links.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `controller`: `Player`, the single owner of the media element and state
//! - `state`: PlaybackState struct and shared types (Tab, Notification, InputResult)
//! - `rate`: the fixed set of playback rates
//! - `playback/`: Timeline synchronization and chapter markers
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: UI rendering (waveform, progress bar, controls, panels, help)
//!
//! # Usage
//!
//! ```no_run
//! use eduaudio::lecture::Lecture;
//! use eduaudio::player::{play_lecture, PlayOptions};
//!
//! let summary = play_lecture(Lecture::sample(), PlayOptions::default()).unwrap();
//! println!("Stopped at {:.0}s", summary.position);
//! ```

pub mod controller;
pub(crate) mod input;
mod native;
pub mod playback;
pub mod rate;
pub mod render;
pub mod state;

pub use controller::{Player, DEFAULT_SKIP_SECONDS};
pub use native::{
    play_lecture, prepare_player, waveform_seed, PlayOptions, PlaybackSummary, DEFAULT_TICK,
};
pub use rate::{PlaybackRate, RateError};
pub use state::{InputResult, MarkerPosition, Notification, NotificationKind, PlaybackState, Tab};
