//! System clipboard access
//!
//! Copies text (share links) to the clipboard by piping it into the
//! platform's clipboard tool:
//!
//! - macOS: `pbcopy`
//! - Linux: `xclip`, `xsel`, `wl-copy` (first available wins)
//!
//! # Usage
//!
//! ```no_run
//! use eduaudio::clipboard::Copy;
//!
//! match Copy::new().text("https://eduaudio.app/lectures/intro?t=125") {
//!     Ok(result) => println!("{}", result.message()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

mod copy;
mod error;
mod result;
mod tool;
pub mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};
