//! Clipboard operation errors.

/// Errors that can occur during clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available. On Linux, install xclip, xsel, or wl-copy.")]
    NoToolAvailable,

    #[error("Clipboard tool '{tool}' failed: {message}")]
    ToolFailed { tool: &'static str, message: String },

    #[error("Clipboard access is not supported on this platform (only macOS and Linux)")]
    UnsupportedPlatform,
}
