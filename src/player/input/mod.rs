//! Input handling for the lecture player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::{handle_key_event, share_position, VOLUME_STEP};
pub use mouse::handle_mouse_event;

use crossterm::event::Event;
use url::Url;

use crate::clipboard::Copy;
use crate::media::MediaElement;
use crate::player::controller::Player;
use crate::player::state::InputResult;

/// What input handlers need besides the player itself.
pub struct InputContext {
    /// Clipboard used for share links
    pub copier: Copy,
    /// Page URL share links are built from; `None` when it did not parse
    pub page: Option<Url>,
}

impl InputContext {
    pub fn new(copier: Copy, page: Option<Url>) -> Self {
        Self { copier, page }
    }
}

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event<M: MediaElement>(
    event: Event,
    player: &mut Player<M>,
    ctx: &InputContext,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, player, ctx),
        Event::Mouse(mouse) => handle_mouse_event(mouse, player),
        Event::Resize(new_cols, new_rows) => {
            player.state.handle_resize(new_cols, new_rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lecture::Lecture;
    use crate::media::ClockMedia;
    use crate::player::state::PlaybackState;
    use crossterm::event::{KeyCode, KeyEvent};
    use std::time::Duration;

    #[test]
    fn resize_event_updates_state() {
        let lecture = Lecture::sample();
        let media = ClockMedia::new(lecture.source.clone(), lecture.media_duration());
        let mut player = Player::new(lecture, media, PlaybackState::new(80, 24));
        player.tick(Duration::ZERO);
        let ctx = InputContext::new(Copy::with_tools(vec![]), None);

        let result = handle_event(Event::Resize(120, 40), &mut player, &ctx);
        assert_eq!(result, InputResult::Continue);
        assert_eq!(player.state.term_cols, 120);

        let quit = handle_event(Event::Key(KeyEvent::from(KeyCode::Char('q'))), &mut player, &ctx);
        assert_eq!(quit, InputResult::Quit);
    }
}
