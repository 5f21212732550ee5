//! Character counting

use crate::error::EstimateError;

/// Number of Unicode scalar values in `text`.
///
/// Byte length over-counts multi-byte UTF-8 content (CJK text, emoji), which
/// would inflate the token estimate.
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

pub fn char_count_i64(text: &str) -> Result<i64, EstimateError> {
    let count = count_chars(text);
    i64::try_from(count).map_err(|_| EstimateError::CountOverflow { count })
}
