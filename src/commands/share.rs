//! Share command handler

use std::path::Path;

use anyhow::Result;

use eduaudio::clipboard::Copy;
use eduaudio::share::{share_timestamp, share_url};
use eduaudio::theme::current_theme;
use eduaudio::Config;

use super::load_lecture;

/// Print a share link for `seconds` and copy it unless `no_copy`.
///
/// A clipboard failure is a warning, not an error: the link is printed
/// either way.
pub fn handle(seconds: f64, lecture: Option<&Path>, no_copy: bool) -> Result<()> {
    let config = Config::load()?;
    let lecture = load_lecture(lecture)?;
    let page = config.page_url(&lecture)?;

    if no_copy {
        println!("{}", share_url(&page, seconds));
        return Ok(());
    }

    let outcome = share_timestamp(&Copy::new(), &page, seconds);
    println!("{}", outcome.url);

    let theme = current_theme();
    match &outcome.clipboard {
        Ok(result) => eprintln!("{}", theme.success_text(&result.message())),
        Err(e) => eprintln!(
            "{}",
            theme.error_text(&format!("Warning: could not copy link: {}", e))
        ),
    }
    Ok(())
}
