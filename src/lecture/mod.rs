//! Lecture data model
//!
//! A lecture is the static content the player navigates: title, instructor,
//! media source, chapters and transcript. Lectures come either from the
//! built-in sample or from a TOML file.
//!
//! # Ordering
//!
//! The timeline lookups in [`crate::player::playback`] assume that chapters
//! are sorted and non-overlapping and that transcript segments are sorted by
//! timestamp. They do not re-sort. Lectures loaded from disk are checked by
//! [`Lecture::validate`]; in-memory lectures are the caller's responsibility.

mod error;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::LectureError;

/// A named section of the lecture, active over `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Start in seconds (inclusive)
    pub start_time: f64,
    /// End in seconds (exclusive)
    pub end_time: f64,
}

impl Chapter {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_time: f64,
        end_time: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_time,
            end_time,
        }
    }

    /// Whether `time` falls inside this chapter.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }
}

/// One line of the transcript.
///
/// Active from `timestamp` until the next segment's timestamp, or forever
/// for the last segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Start in seconds (inclusive)
    pub timestamp: f64,
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(timestamp: f64, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }
}

/// A complete lecture as consumed by the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    pub title: String,
    #[serde(default)]
    pub instructor: String,
    /// Media URL handed to the media element
    pub source: String,
    /// Page the share links point at (`?t=` is appended to it)
    pub page_url: String,
    /// Media length in seconds. Falls back to the end of the last chapter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub transcript: Vec<TranscriptSegment>,
}

impl Lecture {
    /// The lecture bundled with the player.
    pub fn sample() -> Self {
        Self {
            title: "Advanced React Patterns and Performance".to_string(),
            instructor: "Dr. Sarah Mitchell".to_string(),
            source: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3".to_string(),
            page_url: "https://eduaudio.app/lectures/advanced-react-patterns".to_string(),
            duration: Some(1500.0),
            chapters: vec![
                Chapter::new("1", "Introduction", 0.0, 180.0),
                Chapter::new("2", "Custom Hooks Fundamentals", 180.0, 900.0),
                Chapter::new("3", "Performance Optimization", 900.0, 1500.0),
            ],
            transcript: vec![
                TranscriptSegment::new(
                    0.0,
                    "Welcome to this lecture on Advanced React Patterns and Performance.",
                ),
                TranscriptSegment::new(
                    30.0,
                    "Today we will explore several key concepts that will help you write better React applications.",
                ),
                TranscriptSegment::new(
                    60.0,
                    "Let's start with understanding custom hooks and their lifecycle.",
                ),
                TranscriptSegment::new(
                    180.0,
                    "Custom hooks allow you to extract component logic into reusable functions.",
                ),
            ],
        }
    }

    /// Load and validate a lecture from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LectureError> {
        if !path.exists() {
            return Err(LectureError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate a lecture from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, LectureError> {
        let lecture: Lecture = toml::from_str(content)?;
        lecture.validate()?;
        Ok(lecture)
    }

    /// Load from `path` if given, otherwise return the sample lecture.
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self, LectureError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::sample()),
        }
    }

    /// Effective media duration in seconds.
    pub fn media_duration(&self) -> f64 {
        self.duration
            .or_else(|| self.chapters.last().map(|c| c.end_time))
            .unwrap_or(0.0)
    }

    /// Check the ordering precondition of the timeline lookups.
    pub fn validate(&self) -> Result<(), LectureError> {
        let mut ids = HashSet::new();
        for chapter in &self.chapters {
            if !ids.insert(chapter.id.as_str()) {
                return Err(LectureError::DuplicateChapterId {
                    id: chapter.id.clone(),
                });
            }
            if !(chapter.start_time.is_finite() && chapter.end_time.is_finite())
                || chapter.start_time < 0.0
                || chapter.end_time <= chapter.start_time
            {
                return Err(LectureError::InvalidChapter {
                    id: chapter.id.clone(),
                });
            }
        }

        for pair in self.chapters.windows(2) {
            if pair[1].start_time < pair[0].end_time {
                return Err(LectureError::OverlappingChapters {
                    first: pair[0].id.clone(),
                    second: pair[1].id.clone(),
                });
            }
        }

        for (idx, pair) in self.transcript.windows(2).enumerate() {
            if pair[1].timestamp < pair[0].timestamp {
                return Err(LectureError::UnsortedTranscript { index: idx + 1 });
            }
        }

        if let Some(seg) = self
            .transcript
            .iter()
            .find(|s| !s.timestamp.is_finite() || s.timestamp < 0.0)
        {
            return Err(LectureError::InvalidTimestamp {
                timestamp: seg.timestamp,
            });
        }

        if let Some(duration) = self.duration {
            if !duration.is_finite() || duration < 0.0 {
                return Err(LectureError::InvalidDuration(duration));
            }
        }

        Ok(())
    }
}

impl Default for Lecture {
    fn default() -> Self {
        Self::sample()
    }
}
