//! Indexing cost estimation
//!
//! The estimate is a fixed chain of arithmetic:
//! characters -> tokens (`/ 4`) -> tokens with overhead (`* 1.5`) -> dollars
//! (`/ 1000 * price`). Every stage works on the unrounded value of the stage
//! before it; rounding only happens when the output fields are filled in.

pub mod rounding;

use crate::domain::{
    CostEstimate, CHARS_PER_TOKEN, COST_DECIMALS, DEFAULT_PRICE_PER_1K_TOKENS, OVERHEAD_MULTIPLIER,
};
use crate::error::EstimateError;

pub use rounding::{round_to_decimals, round_to_integer};

/// Estimate indexing cost for `char_count` characters at `price_per_1k_tokens`.
///
/// Never fails: zero and negative counts are computed straight from the
/// formulas, so a negative count yields negative tokens and cost. Use
/// [`estimate_checked`] to reject such inputs.
pub fn estimate(char_count: i64, price_per_1k_tokens: f64) -> CostEstimate {
    let estimated_tokens = char_count as f64 / CHARS_PER_TOKEN;
    let total_tokens_with_overhead = estimated_tokens * OVERHEAD_MULTIPLIER;
    let estimated_cost = (total_tokens_with_overhead / 1000.0) * price_per_1k_tokens;

    CostEstimate {
        input_chars: char_count,
        estimated_tokens: round_to_integer(estimated_tokens),
        total_estimated_tokens_with_overhead: round_to_integer(total_tokens_with_overhead),
        estimated_cost_usd: round_to_decimals(estimated_cost, COST_DECIMALS),
    }
}

/// [`estimate`] at the default price of $0.03 per 1000 tokens.
pub fn estimate_default(char_count: i64) -> CostEstimate {
    estimate(char_count, DEFAULT_PRICE_PER_1K_TOKENS)
}

/// Validating variant of [`estimate`].
pub fn estimate_checked(
    char_count: i64,
    price_per_1k_tokens: f64,
) -> Result<CostEstimate, EstimateError> {
    if char_count < 0 {
        return Err(EstimateError::InvalidInput { char_count });
    }
    let price = validate_price(price_per_1k_tokens)?;
    Ok(estimate(char_count, price))
}

pub fn validate_price(price: f64) -> Result<f64, EstimateError> {
    if !price.is_finite() || price < 0.0 {
        return Err(EstimateError::InvalidPrice { price });
    }
    Ok(price)
}
