//! Platform-specific clipboard tools.

mod pbcopy;
mod wl_copy;
mod xclip;
mod xsel;

pub use pbcopy::Pbcopy;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::Write;
use std::process::{Command, Stdio};

use super::tool::{CopyTool, CopyToolError};

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Pbcopy::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
            Box::new(WlCopy::new()),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Check if a binary is on the PATH.
fn binary_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Spawn `program` and write `text` to its stdin.
fn pipe_text(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    // Stdin is closed at the end of this block so the tool sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    if let Err(e) = written {
        // Reap the tool before reporting the failed write
        let _ = child.kill();
        let _ = child.wait();
        return Err(CopyToolError::Failed(e.to_string()));
    }

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{} exited with {}", program, status)))
    }
}
