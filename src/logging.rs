//! Logging setup.
//!
//! The filter comes from `EDUAUDIO_LOG` (e.g. `EDUAUDIO_LOG=debug`) and
//! defaults to `warn`. While the full-screen player runs, stderr belongs to
//! the terminal UI, so logs go to a file in the cache directory instead.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "EDUAUDIO_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Log file used while the player owns the terminal.
pub fn log_file_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("eduaudio")
        .join("eduaudio.log")
}

/// Filter from `EDUAUDIO_LOG`, or the default when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
pub fn init(target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_in_eduaudio_dir() {
        let path = log_file_path();
        assert_eq!(path.file_name().unwrap(), "eduaudio.log");
        assert!(path.parent().unwrap().ends_with("eduaudio"));
    }

    #[test]
    fn default_filter_is_warn() {
        // The filter from the environment may be anything; the fallback is fixed
        assert_eq!(EnvFilter::new(DEFAULT_FILTER).to_string(), "warn");
    }
}
