//! Mouse input handling for the lecture player.
//!
//! Handles click-to-seek on the progress bar and waveform, and wheel
//! scrolling in the list panel.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::media::MediaElement;
use crate::player::controller::Player;
use crate::player::render::{bar_area, player_layout};
use crate::player::state::InputResult;
use crate::tui::ui::{column_fraction, contains};

/// Handle a mouse event.
///
/// Currently handles:
/// - Left click on progress bar or waveform to seek to that position
/// - Wheel over the list panel to move the selection
pub fn handle_mouse_event<M: MediaElement>(mouse: MouseEvent, player: &mut Player<M>) -> InputResult {
    let screen = Rect::new(0, 0, player.state.term_cols, player.state.term_rows);
    let layout = player_layout(screen);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let bar = bar_area(layout.progress);
            let target = [bar, layout.waveform]
                .into_iter()
                .find(|area| contains(*area, mouse.column, mouse.row));
            if let Some(area) = target {
                player.seek_to_fraction(column_fraction(area, mouse.column));
            }
        }
        MouseEventKind::ScrollUp if contains(layout.list, mouse.column, mouse.row) => {
            let len = player.row_count();
            player.state.move_selection(-1, len);
        }
        MouseEventKind::ScrollDown if contains(layout.list, mouse.column, mouse.row) => {
            let len = player.row_count();
            player.state.move_selection(1, len);
        }
        _ => {}
    }

    InputResult::Continue
}
