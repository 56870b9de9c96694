//! Linux xsel clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Linux X11 clipboard tool using xsel.
pub struct Xsel;

impl Xsel {
    /// Create a new Xsel tool.
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Xsel {
    fn method(&self) -> CopyMethod {
        CopyMethod::Xsel
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && super::binary_exists("xsel")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        super::pipe_text("xsel", &["--clipboard", "--input"], text)
    }
}

impl Default for Xsel {
    fn default() -> Self {
        Self::new()
    }
}
