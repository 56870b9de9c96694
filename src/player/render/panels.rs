//! Transcript and chapter panels.
//!
//! The lower half of the player shows one of two lists. The row active at
//! the current position is drawn in the accent colour; the selected row
//! carries the highlight background.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::lecture::{Chapter, TranscriptSegment};
use crate::player::state::Tab;
use crate::theme::Theme;

use super::progress::format_time;

/// Symbol in front of the selected row.
pub const SELECTION_SYMBOL: &str = "> ";

/// Text of a transcript row: `  1:05  text`.
pub fn transcript_line(segment: &TranscriptSegment) -> String {
    format!("{:>6}  {}", format_time(segment.timestamp), segment.text)
}

/// Text of a chapter row: `  3:00 - 15:00  title`.
pub fn chapter_line(chapter: &Chapter) -> String {
    format!(
        "{:>6} - {:<6} {}",
        format_time(chapter.start_time),
        format_time(chapter.end_time),
        chapter.title
    )
}

/// Tab strip for the panel border, current tab emphasised.
pub fn tab_title(current: Tab, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, tab) in [Tab::Transcript, Tab::Chapters].into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        let style = if tab == current {
            theme.accent_bold_style()
        } else {
            theme.text_secondary_style()
        };
        spans.push(Span::styled(tab.title(), style));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

fn row_style(active: bool, theme: &Theme) -> Style {
    if active {
        theme.accent_bold_style()
    } else {
        theme.text_style()
    }
}

/// Render the visible tab.
///
/// `active` is the row playing now, `selected` the row under the cursor.
#[allow(clippy::too_many_arguments)]
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    tab: Tab,
    chapters: &[Chapter],
    transcript: &[TranscriptSegment],
    active: Option<usize>,
    selected: usize,
    theme: &Theme,
) {
    let lines: Vec<String> = match tab {
        Tab::Transcript => transcript.iter().map(transcript_line).collect(),
        Tab::Chapters => chapters.iter().map(chapter_line).collect(),
    };
    let is_empty = lines.is_empty();

    let items: Vec<ListItem> = if is_empty {
        vec![ListItem::new(Span::styled(
            format!("  No {} available", tab.title().to_lowercase()),
            theme.text_secondary_style(),
        ))]
    } else {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| ListItem::new(text).style(row_style(active == Some(i), theme)))
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(tab_title(tab, theme));

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight_style())
        .highlight_symbol(SELECTION_SYMBOL);

    let mut list_state = ListState::default();
    if !is_empty {
        list_state.select(Some(selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lecture::Lecture;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_text(tab: Tab, lecture: &Lecture, active: Option<usize>, selected: usize) -> String {
        let backend = TestBackend::new(70, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_panel(
                    frame,
                    frame.area(),
                    tab,
                    &lecture.chapters,
                    &lecture.transcript,
                    active,
                    selected,
                    &Theme::plain(),
                )
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn transcript_line_has_time_and_text() {
        let segment = TranscriptSegment::new(65.0, "Hooks");
        assert_eq!(transcript_line(&segment), "  1:05  Hooks");
    }

    #[test]
    fn chapter_line_has_range_and_title() {
        let chapter = Chapter::new("2", "Custom Hooks", 180.0, 900.0);
        assert_eq!(chapter_line(&chapter), "  3:00 - 15:00  Custom Hooks");
    }

    #[test]
    fn transcript_panel_lists_segments() {
        let lecture = Lecture::sample();
        let text = render_to_text(Tab::Transcript, &lecture, Some(0), 0);
        assert!(text.contains("Transcript"));
        assert!(text.contains("0:30"));
        assert!(text.contains("> "));
    }

    #[test]
    fn chapters_panel_lists_titles() {
        let lecture = Lecture::sample();
        let text = render_to_text(Tab::Chapters, &lecture, Some(1), 1);
        assert!(text.contains("Introduction"));
        assert!(text.contains("> "));
        assert!(text.contains("Custom Hooks Fundamentals"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let mut lecture = Lecture::sample();
        lecture.transcript.clear();
        let text = render_to_text(Tab::Transcript, &lecture, None, 0);
        assert!(text.contains("No transcript available"));
    }

    #[test]
    fn tab_title_contains_both_tabs() {
        let title = tab_title(Tab::Chapters, &Theme::plain());
        let text: String = title.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Transcript | Chapters ");
    }
}
