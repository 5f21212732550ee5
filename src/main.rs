//! graphrag-cost: Estimate the LLM cost of indexing a corpus with GraphRAG
//!
//! Prints a token and dollar breakdown for a given number of characters.

use anyhow::Result;

fn main() -> Result<()> {
    graphrag_cost::cli::run()
}
