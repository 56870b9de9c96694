//! Theme configuration for the player and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for TUI) and ANSI escape codes (for CLI).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and important elements
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Chapter marker color on the progress bar
    pub marker: Color,
    /// Background of the highlighted list row
    pub highlight_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::lecture_hall()
    }
}

impl Theme {
    /// Default theme - light gray text with a green accent.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn lecture_hall() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            error: Color::Red,
            success: Color::Green,
            marker: Color::Yellow,
            highlight_bg: Color::Indexed(236),
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            error: Color::Red,
            success: Color::Green,
            marker: Color::Yellow,
            highlight_bg: Color::Indexed(236),
        }
    }

    /// No colors at all, for `NO_COLOR` environments.
    pub fn plain() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            error: Color::Reset,
            success: Color::Reset,
            marker: Color::Reset,
            highlight_bg: Color::Reset,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for the highlighted (active or selected) list row.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// Wrap `text` in the ANSI code for `color`; plain text for `Color::Reset`.
fn paint(color: Color, text: &str) -> String {
    match color {
        Color::Reset => text.to_string(),
        _ => format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET),
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

/// Names accepted by [`Theme::by_name`].
pub const THEME_NAMES: &[&str] = &["lecture_hall", "ocean", "plain"];

impl Theme {
    /// Look up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "lecture_hall" => Some(Self::lecture_hall()),
            "ocean" => Some(Self::ocean()),
            "plain" => Some(Self::plain()),
            _ => None,
        }
    }
}

fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Global theme instance.
///
/// Honors the `NO_COLOR` convention (https://no-color.org).
pub fn current_theme() -> Theme {
    if no_color() {
        Theme::plain()
    } else {
        Theme::default()
    }
}

/// Theme `name`, or plain when `NO_COLOR` is set.
pub fn named_theme(name: &str) -> Option<Theme> {
    let theme = Theme::by_name(name)?;
    Some(if no_color() { Theme::plain() } else { theme })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_lecture_hall() {
        let theme = Theme::default();
        assert_eq!(theme.text_primary, Color::Gray);
        assert_eq!(theme.accent, Color::Green);
        assert_eq!(theme.marker, Color::Yellow);
    }

    #[test]
    fn ocean_theme_uses_cyan() {
        let theme = Theme::ocean();
        assert_eq!(theme.text_primary, Color::Cyan);
    }

    #[test]
    fn style_helpers_return_correct_colors() {
        let theme = Theme::lecture_hall();
        assert_eq!(theme.text_style().fg, Some(Color::Gray));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.accent_style().fg, Some(Color::Green));
        assert_eq!(theme.highlight_style().bg, Some(Color::Indexed(236)));
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::lecture_hall();

        let accent = theme.accent_text("test");
        assert!(accent.starts_with("\x1b[32m"));
        assert!(accent.ends_with("\x1b[0m"));
        assert!(accent.contains("test"));

        let primary = theme.primary_text("hello");
        assert!(primary.starts_with("\x1b[37m"));
        assert!(primary.ends_with("\x1b[0m"));
    }

    #[test]
    fn plain_theme_emits_no_escape_codes() {
        let theme = Theme::plain();
        assert_eq!(theme.accent_text("link"), "link");
        assert_eq!(theme.error_text("oops"), "oops");
    }

    #[test]
    fn themes_by_name() {
        for name in THEME_NAMES {
            assert!(Theme::by_name(name).is_some(), "{}", name);
        }
        assert_eq!(Theme::by_name("ocean").unwrap().accent, Color::LightCyan);
        assert!(Theme::by_name("neon").is_none());
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::Red), "\x1b[31m");
        assert_eq!(color_to_ansi(Color::Gray), "\x1b[37m");
        assert_eq!(color_to_ansi(Color::DarkGray), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Reset), "\x1b[0m");
    }
}
