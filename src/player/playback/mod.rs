//! Playback logic for the lecture player.
//!
//! This module handles timeline lookups and chapter markers.

mod markers;
mod timeline;

pub use markers::{collect_markers, next_marker, previous_marker};
pub use timeline::{
    active_chapter, active_chapter_index, active_segment, is_segment_active, progress_percent,
};
