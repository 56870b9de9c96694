//! Interactive lecture player.
//!
//! Runs the single-threaded event loop: poll input with a tick timeout,
//! advance the media clock by the elapsed wall time, apply its events and
//! redraw when something changed.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;
use tracing::{debug, info};
use url::Url;

use crate::clipboard::Copy;
use crate::lecture::Lecture;
use crate::media::ClockMedia;
use crate::player::controller::{Player, DEFAULT_SKIP_SECONDS};
use crate::player::input::{handle_event, InputContext};
use crate::player::rate::PlaybackRate;
use crate::player::render::{draw_player, PlayerView};
use crate::player::state::{InputResult, PlaybackState};
use crate::theme::{current_theme, Theme};

/// Default interval between media clock ticks.
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// How to start a playback session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Page URL share links are built from
    pub page: Option<Url>,
    /// Loaded page URL; its `t` parameter sets the start position
    pub start_url: Option<Url>,
    /// Explicit start position in seconds, applied after `start_url`
    pub start: Option<f64>,
    pub rate: PlaybackRate,
    pub volume: f64,
    pub skip_seconds: f64,
    pub tick: Duration,
    pub theme: Theme,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            page: None,
            start_url: None,
            start: None,
            rate: PlaybackRate::Normal,
            volume: 1.0,
            skip_seconds: DEFAULT_SKIP_SECONDS,
            tick: DEFAULT_TICK,
            theme: current_theme(),
        }
    }
}

/// Where playback stood when the player closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSummary {
    pub position: f64,
    pub duration: f64,
}

impl PlaybackSummary {
    /// Whether the lecture was played to the end.
    pub fn finished(&self) -> bool {
        self.duration > 0.0 && self.position >= self.duration
    }
}

/// Seed for the decorative waveform, stable per lecture.
pub fn waveform_seed(lecture: &Lecture) -> u64 {
    let mut hasher = DefaultHasher::new();
    lecture.source.hash(&mut hasher);
    lecture.title.hash(&mut hasher);
    hasher.finish()
}

/// Build the player for a session and apply the start position.
///
/// The start position is applied once, before playback starts.
pub fn prepare_player(
    lecture: Lecture,
    options: &PlayOptions,
    cols: u16,
    rows: u16,
) -> Player<ClockMedia> {
    let mut state = PlaybackState::new(cols, rows);
    state.playback_rate = options.rate;
    state.volume = options.volume;

    let media = ClockMedia::new(lecture.source.clone(), lecture.media_duration());
    let mut player = Player::new(lecture, media, state).with_skip_seconds(options.skip_seconds);

    if let Some(url) = &options.start_url {
        player.load_start_position(url);
    }
    if let Some(start) = options.start {
        player.seek(start);
    }
    player.follow_active_row();
    player
}

/// Play `lecture` in the terminal until the user quits.
pub fn play_lecture(lecture: Lecture, options: PlayOptions) -> Result<PlaybackSummary> {
    let (cols, rows) = crossterm::terminal::size().context("Failed to read terminal size")?;
    info!(title = %lecture.title, source = %lecture.source, "starting player");

    let view = PlayerView::new(&lecture, options.theme.clone(), waveform_seed(&lecture));
    let mut player = prepare_player(lecture, &options, cols, rows);
    let ctx = InputContext::new(Copy::new(), options.page.clone());

    let mut terminal = ratatui::try_init().context("Failed to initialize terminal")?;
    let result = match execute!(io::stdout(), EnableMouseCapture) {
        Ok(()) => run(&mut terminal, &mut player, &view, &ctx, options.tick),
        Err(e) => Err(e).context("Failed to enable mouse capture"),
    };
    // Restore the terminal even when the loop failed
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(
    terminal: &mut DefaultTerminal,
    player: &mut Player<ClockMedia>,
    view: &PlayerView,
    ctx: &InputContext,
    tick: Duration,
) -> Result<PlaybackSummary> {
    let mut last_tick = Instant::now();

    loop {
        if player.state.needs_render {
            terminal.draw(|frame| draw_player(frame, player, view))?;
            player.state.needs_render = false;
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? && handle_event(event::read()?, player, ctx) == InputResult::Quit
        {
            let summary = PlaybackSummary {
                position: player.state.current_time,
                duration: player.state.duration,
            };
            debug!("player closed at {:.1}s", summary.position);
            return Ok(summary);
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            player.tick(elapsed);
            player.follow_active_row();
            player.state.expire_notification(last_tick);
        }
    }
}
