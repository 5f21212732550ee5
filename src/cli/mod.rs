//! Command-line interface for graphrag-cost
//!
//! A single command: `graphrag-cost <number_of_characters>` with optional
//! price, input file, output format and config overrides.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod estimate;

pub use estimate::EstimateArgs;

pub const PROGRAM_NAME: &str = "graphrag-cost";

/// Estimate the LLM cost of indexing a text corpus with GraphRAG
#[derive(Parser)]
#[command(name = PROGRAM_NAME)]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    #[command(flatten)]
    estimate: EstimateArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    estimate::run(cli.estimate)
}
