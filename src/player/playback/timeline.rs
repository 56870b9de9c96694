//! Timeline synchronization for the lecture player.
//!
//! Pure lookups from a playback position to the chapter and transcript
//! segment that are active at that position. Both lists must be sorted by
//! start time; chapters must not overlap.

use crate::lecture::{Chapter, TranscriptSegment};

/// Find the chapter whose `[start_time, end_time)` interval contains `time`.
///
/// Linear scan returning the first match. With end-exclusive intervals the
/// later chapter wins at a shared boundary.
pub fn active_chapter(chapters: &[Chapter], time: f64) -> Option<&Chapter> {
    chapters.iter().find(|chapter| chapter.contains(time))
}

/// Index of the active chapter, if any.
pub fn active_chapter_index(chapters: &[Chapter], time: f64) -> Option<usize> {
    chapters.iter().position(|chapter| chapter.contains(time))
}

/// Whether segment `index` is active at `time`.
///
/// A segment is active from its timestamp until the next segment's
/// timestamp; the last segment stays active forever.
pub fn is_segment_active(segments: &[TranscriptSegment], index: usize, time: f64) -> bool {
    let Some(segment) = segments.get(index) else {
        return false;
    };
    if time < segment.timestamp {
        return false;
    }
    match segments.get(index + 1) {
        Some(next) => time < next.timestamp,
        None => true,
    }
}

/// Index of the transcript segment active at `time`.
///
/// Returns `None` only when `time` lies before the first segment (or the
/// transcript is empty).
pub fn active_segment(segments: &[TranscriptSegment], time: f64) -> Option<usize> {
    (0..segments.len()).find(|&idx| is_segment_active(segments, idx, time))
}

/// Playback progress as a percentage in `[0, 100]`.
///
/// Defined as 0 while the duration is unknown (zero, negative or not
/// finite), so callers never see NaN.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if !(duration.is_finite() && duration > 0.0) || !current_time.is_finite() {
        return 0.0;
    }
    (current_time / duration * 100.0).clamp(0.0, 100.0)
}
