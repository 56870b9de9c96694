//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod info;
pub mod play;
pub mod share;

use std::path::Path;

use anyhow::{Context, Result};
use eduaudio::Lecture;

/// Load the lecture at `path`, or the sample lecture without one.
pub fn load_lecture(path: Option<&Path>) -> Result<Lecture> {
    Lecture::load_or_sample(path).with_context(|| match path {
        Some(path) => format!("Failed to load lecture from {}", path.display()),
        None => "Failed to load sample lecture".to_string(),
    })
}
