//! Playback rate selection.

use std::fmt;
use std::str::FromStr;

/// Error for a rate outside the supported set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unsupported playback rate '{0}' (expected one of 0.5, 1, 1.5, 2)")]
pub struct RateError(pub String);

/// The fixed set of speeds offered by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackRate {
    Half,
    #[default]
    Normal,
    OneAndHalf,
    Double,
}

impl PlaybackRate {
    /// All rates in display order.
    pub const ALL: [PlaybackRate; 4] = [
        PlaybackRate::Half,
        PlaybackRate::Normal,
        PlaybackRate::OneAndHalf,
        PlaybackRate::Double,
    ];

    /// Speed multiplier handed to the media element.
    pub fn as_f64(self) -> f64 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
        }
    }

    /// Button label, e.g. `1.5x`.
    pub fn label(self) -> &'static str {
        match self {
            PlaybackRate::Half => "0.5x",
            PlaybackRate::Normal => "1x",
            PlaybackRate::OneAndHalf => "1.5x",
            PlaybackRate::Double => "2x",
        }
    }

    /// Position in [`PlaybackRate::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&r| r == self).unwrap_or(1)
    }

    /// Step through the rates, saturating at both ends.
    pub fn step(self, delta: i32) -> Self {
        let idx = (self.index() as i32 + delta).clamp(0, Self::ALL.len() as i32 - 1);
        Self::ALL[idx as usize]
    }

    /// Exact lookup of a multiplier.
    pub fn from_f64(value: f64) -> Result<Self, RateError> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_f64() == value)
            .ok_or_else(|| RateError(value.to_string()))
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlaybackRate {
    type Err = RateError;

    /// Accepts `1.5`, `1.5x` and `1.5X`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.trim_end_matches(['x', 'X']);
        let value: f64 = number
            .parse()
            .map_err(|_| RateError(trimmed.to_string()))?;
        Self::from_f64(value).map_err(|_| RateError(trimmed.to_string()))
    }
}
