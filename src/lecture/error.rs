//! Lecture loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading or validating a lecture.
#[derive(Debug, thiserror::Error)]
pub enum LectureError {
    #[error("Lecture file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read lecture file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid lecture file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Chapter '{id}' must start at or after 0 and end after it starts")]
    InvalidChapter { id: String },

    #[error("Chapter id '{id}' is used more than once")]
    DuplicateChapterId { id: String },

    #[error("Chapters '{first}' and '{second}' overlap or are out of order")]
    OverlappingChapters { first: String, second: String },

    #[error("Transcript segment {index} starts before the previous one")]
    UnsortedTranscript { index: usize },

    #[error("Transcript timestamp {timestamp} is not a valid position")]
    InvalidTimestamp { timestamp: f64 },

    #[error("Lecture duration {0} is not a valid length")]
    InvalidDuration(f64),
}
