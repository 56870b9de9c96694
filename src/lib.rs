//! EduAudio: a terminal lecture player.
//!
//! Plays a lecture with a synchronized transcript, chapter navigation,
//! playback rate and volume controls, and shareable timestamp links.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod lecture;
pub mod logging;
pub mod media;
pub mod player;
pub mod share;
pub mod tui;

pub use config::Config;
pub use lecture::{Chapter, Lecture, LectureError, TranscriptSegment};
pub use tui::theme;
