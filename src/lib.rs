//! graphrag-cost: Estimate the LLM cost of indexing a corpus with GraphRAG
//!
//! Converts a character count into an approximate token count, applies the
//! fixed multi-pass indexing overhead and prices the result per 1000 tokens.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod render;
pub mod utils;

pub use domain::CostEstimate;
pub use error::EstimateError;
pub use estimate::{estimate, estimate_checked, estimate_default};
