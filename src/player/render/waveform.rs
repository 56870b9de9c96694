//! Decorative waveform strip.
//!
//! The bars are random heights, not derived from the audio. The strip
//! doubles as a click-to-seek target and shows the played portion in the
//! accent colour.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

/// Number of bars in the strip.
pub const BAR_COUNT: usize = 100;

/// Block glyphs from lowest to tallest.
const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Random bar heights in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    bars: Vec<f64>,
}

impl Waveform {
    /// Generate a waveform from `seed`. The same seed gives the same bars.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bars = (0..BAR_COUNT).map(|_| rng.gen_range(0.0..=1.0)).collect();
        Self { bars }
    }

    pub fn bars(&self) -> &[f64] {
        &self.bars
    }

    /// Bar height for terminal column `col` of `width`, resampled.
    pub fn height_at(&self, col: usize, width: usize) -> f64 {
        if width == 0 || self.bars.is_empty() {
            return 0.0;
        }
        let idx = (col * self.bars.len() / width).min(self.bars.len() - 1);
        self.bars[idx]
    }
}

/// Widget drawing a [`Waveform`] with a played/unplayed split.
pub struct WaveformWidget<'a> {
    waveform: &'a Waveform,
    /// Fraction already played, `[0, 1]`
    played: f64,
    played_style: Style,
    unplayed_style: Style,
}

impl<'a> WaveformWidget<'a> {
    pub fn new(waveform: &'a Waveform, played: f64) -> Self {
        Self {
            waveform,
            played: played.clamp(0.0, 1.0),
            played_style: Style::default(),
            unplayed_style: Style::default(),
        }
    }

    pub fn styles(mut self, played: Style, unplayed: Style) -> Self {
        self.played_style = played;
        self.unplayed_style = unplayed;
        self
    }
}

impl Widget for WaveformWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let rows = area.height as usize;
        let played_cols = (width as f64 * self.played) as usize;
        // Each row holds 8 glyph levels
        let total_levels = rows * LEVELS.len();

        for col in 0..width {
            let height = self.waveform.height_at(col, width);
            let mut remaining = ((height * total_levels as f64).round() as usize).max(1);
            let style = if col < played_cols {
                self.played_style
            } else {
                self.unplayed_style
            };

            // Fill from the bottom row up
            for row in (0..rows).rev() {
                if remaining == 0 {
                    break;
                }
                let level = remaining.min(LEVELS.len());
                remaining -= level;
                let x = area.x + col as u16;
                let y = area.y + row as u16;
                buf[(x, y)].set_char(LEVELS[level - 1]).set_style(style);
            }
        }
    }
}
