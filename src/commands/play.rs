//! Play command handler

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use url::Url;

use eduaudio::player::{play_lecture, PlayOptions, PlaybackRate};
use eduaudio::player::render::format_time;
use eduaudio::share::share_url;
use eduaudio::theme::current_theme;
use eduaudio::Config;

use super::load_lecture;

/// Arguments of `eduaudio play`.
#[derive(Debug)]
pub struct PlayArgs {
    pub lecture: Option<PathBuf>,
    pub url: Option<String>,
    pub start: Option<f64>,
    pub rate: Option<PlaybackRate>,
    pub volume: Option<f64>,
}

/// Build the session options from config and command-line overrides.
pub fn build_options(config: &Config, page: Option<Url>, args: &PlayArgs) -> Result<PlayOptions> {
    let start_url = match &args.url {
        Some(raw) => {
            Some(Url::parse(raw).with_context(|| format!("Invalid --url '{}'", raw))?)
        }
        None => None,
    };
    let rate = match args.rate {
        Some(rate) => rate,
        None => config.playback_rate()?,
    };
    let volume = args
        .volume
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 1.0))
        .unwrap_or_else(|| config.volume());

    Ok(PlayOptions {
        page,
        start_url,
        start: args.start,
        rate,
        volume,
        skip_seconds: config.player.skip_seconds,
        tick: config.tick(),
        theme: config.theme()?,
    })
}

/// Play a lecture in the terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("The player needs an interactive terminal");
    }

    let config = Config::load()?;
    let lecture = load_lecture(args.lecture.as_deref())?;
    let page = match config.page_url(&lecture) {
        Ok(page) => Some(page),
        Err(e) => {
            tracing::warn!("sharing disabled: {:#}", e);
            None
        }
    };
    let options = build_options(&config, page.clone(), &args)?;

    let summary = play_lecture(lecture, options)?;

    let theme = current_theme();
    if summary.finished() {
        println!("{}", theme.success_text("Finished the lecture."));
    } else {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Stopped at {} of {}",
                format_time(summary.position),
                format_time(summary.duration)
            ))
        );
        if let Some(page) = page {
            println!(
                "{} {}",
                theme.secondary_text("Resume:"),
                theme.accent_text(share_url(&page, summary.position).as_str())
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PlayArgs {
        PlayArgs {
            lecture: None,
            url: None,
            start: None,
            rate: None,
            volume: None,
        }
    }

    #[test]
    fn options_come_from_config() {
        let mut config = Config::default();
        config.player.default_rate = 2.0;
        config.player.skip_seconds = 10.0;
        let options = build_options(&config, None, &args()).unwrap();
        assert_eq!(options.rate, PlaybackRate::Double);
        assert_eq!(options.skip_seconds, 10.0);
        assert_eq!(options.volume, 1.0);
    }

    #[test]
    fn arguments_override_config() {
        let config = Config::default();
        let args = PlayArgs {
            rate: Some(PlaybackRate::Half),
            volume: Some(3.0),
            url: Some("https://eduaudio.app/l?t=125".to_string()),
            ..args()
        };
        let options = build_options(&config, None, &args).unwrap();
        assert_eq!(options.rate, PlaybackRate::Half);
        assert_eq!(options.volume, 1.0);
        assert_eq!(options.start_url.unwrap().query(), Some("t=125"));
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let mut config = Config::default();
        config.player.theme = "neon".to_string();
        assert!(build_options(&config, None, &args()).is_err());
    }

    #[test]
    fn invalid_url_is_an_error() {
        let args = PlayArgs {
            url: Some("::nope".to_string()),
            ..args()
        };
        assert!(build_options(&Config::default(), None, &args).is_err());
    }
}
