//! Core domain types

use serde::{Deserialize, Serialize};

/// Heuristic character-to-token ratio (1 token is about 4 characters).
pub const CHARS_PER_TOKEN: f64 = 4.0;

/// Extra LLM passes GraphRAG indexing performs (entity/relationship
/// extraction plus summarization), modelled as a constant factor.
pub const OVERHEAD_MULTIPLIER: f64 = 1.5;

pub const DEFAULT_PRICE_PER_1K_TOKENS: f64 = 0.03;

/// Decimal places kept in `estimated_cost_usd`.
pub const COST_DECIMALS: usize = 4;

/// Result of a single cost estimation.
///
/// Field order is the print order of the text report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub input_chars: i64,
    pub estimated_tokens: i64,
    pub total_estimated_tokens_with_overhead: i64,
    pub estimated_cost_usd: f64,
}

/// Output format for the estimate report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective configuration after merging defaults, config file and CLI flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub price_per_1k_tokens: f64,
    pub format: OutputFormat,
    /// Reject negative character counts instead of passing them through.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            price_per_1k_tokens: DEFAULT_PRICE_PER_1K_TOKENS,
            format: OutputFormat::Text,
            strict: false,
        }
    }
}
