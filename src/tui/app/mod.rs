//! Shared building blocks for full-screen views.

pub mod status_footer;

pub use status_footer::{build_footer_spans, render_footer, render_status_line};
