//! Estimate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::PROGRAM_NAME;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::OutputFormat;
use crate::estimate::{estimate, estimate_checked};
use crate::render::{render_json, render_text};
use crate::utils::{char_count_i64, read_text_file};

#[derive(Args)]
pub struct EstimateArgs {
    /// Total number of characters in the corpus
    #[arg(value_name = "NUMBER_OF_CHARACTERS", conflicts_with = "file")]
    pub chars: Option<String>,

    /// Count the characters of this text file instead
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// LLM price in USD per 1000 tokens [default: 0.03]
    #[arg(short, long, value_name = "USD")]
    pub price: Option<f64>,

    /// Output format
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Reject negative character counts
    #[arg(long)]
    pub strict: bool,

    /// Path to config file (graphrag-cost.toml or .graphrag-cost.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: EstimateArgs) -> Result<()> {
    let char_count = match (&args.chars, &args.file) {
        (Some(raw), _) => parse_char_count(raw)?,
        (None, Some(path)) => {
            let text = read_text_file(path)?;
            let count = char_count_i64(&text)?;
            tracing::info!("Counted {} characters in {}", count, path.display());
            count
        }
        (None, None) => {
            println!("{}", usage());
            return Ok(());
        }
    };

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let file_config = load_config(&cwd, args.config.as_deref())?;
    let overrides =
        CliOverrides { price_per_1k_tokens: args.price, format: args.format, strict: args.strict };
    let config = merge_cli_with_config(file_config, &overrides)?;

    let result = if config.strict {
        estimate_checked(char_count, config.price_per_1k_tokens)?
    } else {
        estimate(char_count, config.price_per_1k_tokens)
    };
    tracing::debug!("Estimate: {:?}", result);

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&result)),
        OutputFormat::Json => println!("{}", render_json(&result)?),
    }

    Ok(())
}

pub fn usage() -> String {
    format!("Usage: {PROGRAM_NAME} <number_of_characters>")
}

/// Parse the positional count as a signed integer.
///
/// Surrounding whitespace and single `_` separators between digits are
/// allowed (`1_000_000`).
fn parse_char_count(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        anyhow::bail!("Invalid character count '{raw}': misplaced digit separator");
    }
    trimmed
        .replace('_', "")
        .parse::<i64>()
        .with_context(|| format!("Invalid character count '{raw}'"))
}
