//! Tests for loading lecture files from disk

use std::fs;

use eduaudio::{Lecture, LectureError};
use tempfile::TempDir;

use crate::helpers::SHORT_LECTURE;

#[test]
fn load_valid_lecture() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rust.toml");
    fs::write(&path, SHORT_LECTURE).unwrap();

    let lecture = Lecture::load(&path).unwrap();
    assert_eq!(lecture.title, "Intro to Rust");
    assert_eq!(lecture.chapters.len(), 2);
    assert_eq!(lecture.transcript.len(), 2);
    assert_eq!(lecture.media_duration(), 600.0);
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = Lecture::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, LectureError::NotFound { .. }));
}

#[test]
fn overlapping_chapters_are_rejected() {
    let content = r#"
title = "Overlap"
source = "a.mp3"
page_url = "https://x.example/o"

[[chapters]]
id = "1"
title = "One"
start_time = 0.0
end_time = 100.0

[[chapters]]
id = "2"
title = "Two"
start_time = 50.0
end_time = 200.0
"#;
    let err = Lecture::from_toml(content).unwrap_err();
    assert!(matches!(err, LectureError::OverlappingChapters { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Lecture::from_toml("title = ").unwrap_err();
    assert!(matches!(err, LectureError::Parse(_)));
}

#[test]
fn duration_falls_back_to_last_chapter() {
    let content = SHORT_LECTURE.replace("duration = 600.0\n", "");
    let lecture = Lecture::from_toml(&content).unwrap();
    assert_eq!(lecture.duration, None);
    assert_eq!(lecture.media_duration(), 600.0);
}
