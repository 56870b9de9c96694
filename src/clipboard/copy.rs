//! Copy orchestrator for clipboard operations.

use super::error::ClipboardError;
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;

/// Orchestrates clipboard copy operations using available tools.
///
/// Tools are tried in priority order; the first one that succeeds wins.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    /// Copy text to the clipboard.
    ///
    /// Reports the last tool failure when every available tool failed, and
    /// `NoToolAvailable` when none was installed.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if self.tools.is_empty() {
            return Err(ClipboardError::UnsupportedPlatform);
        }

        let mut last_failure = None;
        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => {
                    tracing::debug!(tool = tool.name(), "copied {} bytes", text.len());
                    return Ok(CopyResult::new(tool.method(), text.len()));
                }
                Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(message)) => {
                    tracing::debug!(tool = tool.name(), %message, "clipboard tool failed");
                    last_failure = Some(ClipboardError::ToolFailed {
                        tool: tool.name(),
                        message,
                    });
                }
            }
        }

        Err(last_failure.unwrap_or(ClipboardError::NoToolAvailable))
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
