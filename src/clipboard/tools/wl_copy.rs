//! Linux Wayland wl-copy clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Linux Wayland clipboard tool using wl-copy.
///
/// Only usable inside a Wayland session.
pub struct WlCopy;

impl WlCopy {
    /// Create a new WlCopy tool.
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for WlCopy {
    fn method(&self) -> CopyMethod {
        CopyMethod::WlCopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
            && std::env::var_os("WAYLAND_DISPLAY").is_some()
            && super::binary_exists("wl-copy")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        super::pipe_text("wl-copy", &[], text)
    }
}

impl Default for WlCopy {
    fn default() -> Self {
        Self::new()
    }
}
