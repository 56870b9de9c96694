//! Shareable timestamp links
//!
//! A share link is the lecture page URL with a single `t` query parameter
//! holding the position in whole seconds, e.g.
//! `https://eduaudio.app/lectures/intro?t=125`. Opening such a link starts
//! the player at that position.

use url::Url;

use crate::clipboard::{ClipboardError, Copy, CopyResult};

/// Query parameter carrying the start position.
pub const TIME_PARAM: &str = "t";

/// Build a share link for `seconds` on `page`.
///
/// Keeps the page's origin and path, drops any existing query and
/// fragment, and appends `t=<whole seconds>`. Negative or non-finite
/// positions are shared as `t=0`.
pub fn share_url(page: &Url, seconds: f64) -> Url {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let mut url = page.clone();
    url.set_fragment(None);
    url.set_query(None);
    url.query_pairs_mut()
        .append_pair(TIME_PARAM, &whole.to_string());
    url
}

/// Read the start position from a loaded page URL.
///
/// Returns the first `t` value when it is a non-negative integer. Missing
/// or malformed values yield `None` and playback starts at 0.
pub fn start_position(url: &Url) -> Option<u64> {
    url.query_pairs()
        .find(|(key, _)| key == TIME_PARAM)
        .and_then(|(_, value)| value.trim().parse::<u64>().ok())
}

/// Result of a share request: the link, and what happened on the clipboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareOutcome {
    pub url: Url,
    pub clipboard: Result<CopyResult, ClipboardError>,
}

impl ShareOutcome {
    /// One-line, user-facing summary.
    pub fn message(&self) -> String {
        match &self.clipboard {
            Ok(result) => format!("{}: {}", result.message(), self.url),
            Err(err) => format!("Could not copy link ({}): {}", err, self.url),
        }
    }

    pub fn copied(&self) -> bool {
        self.clipboard.is_ok()
    }
}

/// Build the share link for `seconds` and copy it to the clipboard.
///
/// Clipboard failures are returned in the outcome, never raised: the link
/// itself is always produced.
pub fn share_timestamp(copier: &Copy, page: &Url, seconds: f64) -> ShareOutcome {
    let url = share_url(page, seconds);
    let clipboard = copier.text(url.as_str());
    if let Err(err) = &clipboard {
        tracing::warn!(%url, error = %err, "failed to copy share link");
    }
    ShareOutcome { url, clipboard }
}
