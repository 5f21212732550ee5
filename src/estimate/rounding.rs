//! Round-half-to-even helpers
//!
//! Ties go to the nearest even value (banker's rounding), so `0.5 -> 0`,
//! `1.5 -> 2` and `2.5 -> 2`. Decimal rounding works on the exact decimal
//! expansion of the binary value; scaling by a power of ten first would round
//! twice and can turn a near-tie into an exact one.

pub fn round_to_integer(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Round `value` to `decimals` places.
///
/// Precision formatting prints the exact binary value and breaks exact ties
/// to even, so parsing it back gives the nearest `f64` to the rounded decimal.
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
