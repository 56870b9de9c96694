//! Chapter markers for the progress bar.
//!
//! Every chapter that does not start at the very beginning of the lecture
//! gets a marker at its start time, so the bar shows where chapters change.

use crate::lecture::Chapter;
use crate::player::state::MarkerPosition;

/// Collect chapter start markers, in chapter order.
///
/// # Arguments
/// * `chapters` - The lecture chapters (sorted by start time)
///
/// # Returns
/// A vector of `MarkerPosition` structs sorted by time
pub fn collect_markers(chapters: &[Chapter]) -> Vec<MarkerPosition> {
    chapters
        .iter()
        .filter(|chapter| chapter.start_time > 0.0)
        .map(|chapter| MarkerPosition {
            time: chapter.start_time,
            label: chapter.title.clone(),
        })
        .collect()
}

/// Find the first marker strictly after `time`.
///
/// A small tolerance keeps repeated presses from sticking to the marker the
/// playhead is already sitting on.
pub fn next_marker(markers: &[MarkerPosition], time: f64) -> Option<&MarkerPosition> {
    markers.iter().find(|m| m.time > time + 0.1)
}

/// Find the last marker strictly before `time`, with the same tolerance.
pub fn previous_marker(markers: &[MarkerPosition], time: f64) -> Option<&MarkerPosition> {
    markers.iter().rev().find(|m| m.time < time - 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lecture::Lecture;

    #[test]
    fn no_chapters_returns_no_markers() {
        assert!(collect_markers(&[]).is_empty());
    }

    #[test]
    fn chapter_at_zero_has_no_marker() {
        let chapters = vec![Chapter::new("1", "Intro", 0.0, 10.0)];
        assert!(collect_markers(&chapters).is_empty());
    }

    #[test]
    fn sample_lecture_markers() {
        let markers = collect_markers(&Lecture::sample().chapters);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].time, 180.0);
        assert_eq!(markers[0].label, "Custom Hooks Fundamentals");
        assert_eq!(markers[1].time, 900.0);
        assert_eq!(markers[1].label, "Performance Optimization");
    }

    #[test]
    fn next_marker_skips_current_position() {
        let markers = collect_markers(&Lecture::sample().chapters);
        assert_eq!(next_marker(&markers, 0.0).unwrap().time, 180.0);
        assert_eq!(next_marker(&markers, 180.0).unwrap().time, 900.0);
        assert!(next_marker(&markers, 900.0).is_none());
    }

    #[test]
    fn previous_marker_skips_current_position() {
        let markers = collect_markers(&Lecture::sample().chapters);
        assert_eq!(previous_marker(&markers, 1000.0).unwrap().time, 900.0);
        assert_eq!(previous_marker(&markers, 900.0).unwrap().time, 180.0);
        assert!(previous_marker(&markers, 180.0).is_none());
    }
}
