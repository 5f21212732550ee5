//! Output rendering (text report, JSON)

pub mod json;
pub mod text;

pub use json::render_json;
pub use text::{format_float, render_text};
