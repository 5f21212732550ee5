//! Shared helpers for reading and measuring text input

pub mod encoding;
pub mod text;

pub use encoding::read_text_file;
pub use text::{char_count_i64, count_chars};
