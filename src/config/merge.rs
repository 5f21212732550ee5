//! Merge CLI flags over file configuration

use crate::domain::{Config, OutputFormat};
use crate::estimate::validate_price;
use anyhow::Result;

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub price_per_1k_tokens: Option<f64>,
    pub format: Option<OutputFormat>,
    pub strict: bool,
}

pub fn merge_cli_with_config(config: Config, overrides: &CliOverrides) -> Result<Config> {
    let mut merged = config;

    if let Some(price) = overrides.price_per_1k_tokens {
        merged.price_per_1k_tokens = price;
    }
    if let Some(format) = overrides.format {
        merged.format = format;
    }
    // --strict can only turn validation on
    merged.strict |= overrides.strict;

    merged.price_per_1k_tokens = validate_price(merged.price_per_1k_tokens)?;
    tracing::debug!("Effective config: {:?}", merged);
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EstimateError;

    #[test]
    fn cli_price_wins_over_file() {
        let file = Config { price_per_1k_tokens: 0.06, ..Config::default() };
        let overrides = CliOverrides { price_per_1k_tokens: Some(0.01), ..Default::default() };
        let merged = merge_cli_with_config(file, &overrides).expect("merge");
        assert_eq!(merged.price_per_1k_tokens, 0.01);
    }

    #[test]
    fn file_values_survive_without_overrides() {
        let file = Config { price_per_1k_tokens: 0.06, format: OutputFormat::Json, strict: true };
        let merged = merge_cli_with_config(file.clone(), &CliOverrides::default()).expect("merge");
        assert_eq!(merged, file);
    }

    #[test]
    fn strict_flag_enables_validation() {
        let overrides = CliOverrides { strict: true, ..Default::default() };
        let merged = merge_cli_with_config(Config::default(), &overrides).expect("merge");
        assert!(merged.strict);
    }

    #[test]
    fn negative_price_is_rejected() {
        let overrides = CliOverrides { price_per_1k_tokens: Some(-1.0), ..Default::default() };
        let err = merge_cli_with_config(Config::default(), &overrides).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EstimateError>(),
            Some(&EstimateError::InvalidPrice { price: -1.0 })
        );
    }
}
