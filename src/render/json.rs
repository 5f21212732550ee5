//! JSON rendering

use crate::domain::CostEstimate;
use anyhow::{Context, Result};

/// Pretty-printed JSON object with the fields in report order.
pub fn render_json(estimate: &CostEstimate) -> Result<String> {
    serde_json::to_string_pretty(estimate).context("Failed to serialize cost estimate")
}
