//! Keyboard input handling for the lecture player.
//!
//! Handles all keyboard shortcuts including playback controls, rate and
//! volume, list navigation and sharing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::InputContext;
use crate::media::MediaElement;
use crate::player::controller::Player;
use crate::player::rate::PlaybackRate;
use crate::player::state::{InputResult, Notification};
use crate::share::share_timestamp;

/// Volume change per `+`/`-` press.
pub const VOLUME_STEP: f64 = 0.1;

/// Handle a keyboard event.
///
/// This is the main keyboard input handler that processes all key events
/// and updates state or returns control flow signals.
pub fn handle_key_event<M: MediaElement>(
    key: KeyEvent,
    player: &mut Player<M>,
    ctx: &InputContext,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if player.state.show_help {
        player.state.toggle_help();
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }

        KeyCode::Char('?') => player.state.toggle_help(),

        // === Playback controls ===
        KeyCode::Char(' ') => player.toggle_play(),
        KeyCode::Left => player.skip_backward(),
        KeyCode::Right => player.skip_forward(),
        KeyCode::Home => player.seek(0.0),
        KeyCode::End => {
            let end = player.state.duration;
            player.seek(end);
        }
        KeyCode::Char('n') => {
            player.next_chapter();
        }
        KeyCode::Char('p') => player.previous_chapter(),

        // === Rate and volume ===
        KeyCode::Char('[') => player.cycle_playback_rate(-1),
        KeyCode::Char(']') => player.cycle_playback_rate(1),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            player.set_playback_rate(PlaybackRate::ALL[idx]);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => player.nudge_volume(VOLUME_STEP),
        KeyCode::Char('-') | KeyCode::Char('_') => player.nudge_volume(-VOLUME_STEP),

        // === Transcript / chapters ===
        KeyCode::Tab | KeyCode::BackTab => {
            player.state.toggle_tab();
            player.follow_active_row();
        }
        KeyCode::Up => {
            let len = player.row_count();
            player.state.move_selection(-1, len);
        }
        KeyCode::Down => {
            let len = player.row_count();
            player.state.move_selection(1, len);
        }
        KeyCode::Enter => player.seek_to_selected(),

        // === Sharing ===
        KeyCode::Char('s') => {
            let seconds = player
                .selected_time()
                .unwrap_or(player.state.current_time);
            share_position(player, ctx, seconds);
        }
        KeyCode::Char('S') => {
            let seconds = player.state.current_time;
            share_position(player, ctx, seconds);
        }

        _ => {}
    }

    InputResult::Continue
}

/// Share a link to `seconds` and report the outcome as a notification.
pub fn share_position<M: MediaElement>(player: &mut Player<M>, ctx: &InputContext, seconds: f64) {
    let notification = match &ctx.page {
        Some(page) => {
            let outcome = share_timestamp(&ctx.copier, page, seconds);
            if outcome.copied() {
                Notification::info(outcome.message())
            } else {
                Notification::error(outcome.message())
            }
        }
        None => Notification::error("This lecture has no page URL to share"),
    };
    player.state.notify(notification);
}
