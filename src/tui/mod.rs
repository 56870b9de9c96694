//! TUI (Text User Interface) module
//!
//! Shared terminal UI pieces built on ratatui/crossterm: the colour theme,
//! layout helpers and the status/footer lines.

pub mod app;
pub mod theme;
pub mod ui;
