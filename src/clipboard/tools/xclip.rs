//! Linux xclip clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Linux X11 clipboard tool using xclip.
///
/// Writes to the CLIPBOARD selection (not PRIMARY), so the link pastes
/// with Ctrl+V.
pub struct Xclip;

impl Xclip {
    /// Create a new Xclip tool.
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Xclip {
    fn method(&self) -> CopyMethod {
        CopyMethod::Xclip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && super::binary_exists("xclip")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        super::pipe_text("xclip", &["-selection", "clipboard"], text)
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
