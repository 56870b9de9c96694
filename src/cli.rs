//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::player::PlaybackRate;

/// Terminal lecture player with transcript, chapters and shareable links
#[derive(Debug, Parser)]
#[command(name = "eduaudio", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a lecture in the terminal
    #[command(long_about = "Play a lecture in the terminal.

Without LECTURE the bundled sample lecture is played. A page URL with a
`t` parameter (as produced by `share`) starts playback at that position.

EXAMPLES:
    eduaudio play
    eduaudio play lecture.toml --start 300
    eduaudio play --url 'https://eduaudio.app/lectures/advanced-react-patterns?t=125'")]
    Play {
        /// Lecture file (TOML); defaults to the sample lecture
        lecture: Option<PathBuf>,
        /// Page URL to load; its `t` parameter sets the start position
        #[arg(long)]
        url: Option<String>,
        /// Start position in seconds
        #[arg(long, value_name = "SECS")]
        start: Option<f64>,
        /// Playback rate (0.5, 1, 1.5 or 2)
        #[arg(long)]
        rate: Option<PlaybackRate>,
        /// Volume, 0 to 1
        #[arg(long)]
        volume: Option<f64>,
    },

    /// Print a link to a position in the lecture and copy it
    Share {
        /// Position in seconds
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
        /// Lecture file (TOML); defaults to the sample lecture
        lecture: Option<PathBuf>,
        /// Only print the link, do not touch the clipboard
        #[arg(long)]
        no_copy: bool,
    },

    /// Show chapters and transcript
    Info {
        /// Lecture file (TOML); defaults to the sample lecture
        lecture: Option<PathBuf>,
        /// Mark the chapter and segment active at this position
        #[arg(long, value_name = "SECS")]
        at: Option<f64>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in $EDITOR
    Edit,
}
