//! Info command handler

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use eduaudio::player::playback::{active_chapter_index, active_segment};
use eduaudio::player::render::{chapter_line, format_time, transcript_line};
use eduaudio::theme::{current_theme, Theme};
use eduaudio::Lecture;

use super::load_lecture;

/// Marker in front of the active chapter and segment.
const ACTIVE_MARKER: &str = "▶ ";
const INACTIVE_MARKER: &str = "  ";

/// JSON shape of `eduaudio info --json`.
#[derive(Debug, Serialize)]
pub struct InfoReport<'a> {
    pub lecture: &'a Lecture,
    pub media_duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_chapter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_segment: Option<usize>,
}

impl<'a> InfoReport<'a> {
    pub fn new(lecture: &'a Lecture, at: Option<f64>) -> Self {
        let (active_chapter, active_segment) = match at {
            Some(t) => (
                active_chapter_index(&lecture.chapters, t).map(|i| lecture.chapters[i].id.as_str()),
                active_segment(&lecture.transcript, t),
            ),
            None => (None, None),
        };
        Self {
            lecture,
            media_duration: lecture.media_duration(),
            at,
            active_chapter,
            active_segment,
        }
    }
}

/// Human-readable listing of a lecture.
pub fn render_text(lecture: &Lecture, at: Option<f64>, theme: &Theme) -> String {
    let mut out = Vec::new();
    out.push(theme.accent_text(&lecture.title));
    if !lecture.instructor.is_empty() {
        out.push(theme.primary_text(&lecture.instructor));
    }
    out.push(format!(
        "{} {}",
        theme.secondary_text("Duration:"),
        format_time(lecture.media_duration())
    ));
    out.push(format!("{} {}", theme.secondary_text("Source:  "), lecture.source));
    out.push(format!("{} {}", theme.secondary_text("Page:    "), lecture.page_url));
    if let Some(t) = at {
        out.push(format!("{} {}", theme.secondary_text("At:      "), format_time(t)));
    }

    let active_chapter = at.and_then(|t| active_chapter_index(&lecture.chapters, t));
    let active_seg = at.and_then(|t| active_segment(&lecture.transcript, t));

    out.push(String::new());
    out.push(theme.accent_text("Chapters"));
    if lecture.chapters.is_empty() {
        out.push(theme.secondary_text("  (none)"));
    }
    for (i, chapter) in lecture.chapters.iter().enumerate() {
        out.push(marked_line(&chapter_line(chapter), active_chapter == Some(i), theme));
    }

    out.push(String::new());
    out.push(theme.accent_text("Transcript"));
    if lecture.transcript.is_empty() {
        out.push(theme.secondary_text("  (none)"));
    }
    for (i, segment) in lecture.transcript.iter().enumerate() {
        out.push(marked_line(&transcript_line(segment), active_seg == Some(i), theme));
    }

    out.join("\n")
}

fn marked_line(line: &str, active: bool, theme: &Theme) -> String {
    if active {
        theme.accent_text(&format!("{}{}", ACTIVE_MARKER, line))
    } else {
        theme.primary_text(&format!("{}{}", INACTIVE_MARKER, line))
    }
}

/// Print chapters and transcript, optionally marking the position `at`.
pub fn handle(lecture: Option<&Path>, at: Option<f64>, json: bool) -> Result<()> {
    let lecture = load_lecture(lecture)?;

    if json {
        let report = InfoReport::new(&lecture, at);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_text(&lecture, at, &current_theme()));
    }
    Ok(())
}
