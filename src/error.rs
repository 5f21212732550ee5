//! Error types for estimation and input validation

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// A negative character count was rejected by the checked estimator.
    #[error("Invalid character count {char_count}: must be non-negative")]
    InvalidInput { char_count: i64 },

    #[error("Invalid price per 1k tokens {price}: must be a finite, non-negative number")]
    InvalidPrice { price: f64 },

    #[error("Character count {count} does not fit in a signed 64-bit integer")]
    CountOverflow { count: usize },
}

#[cfg(test)]
mod tests {
    use super::EstimateError;

    #[test]
    fn invalid_input_message_names_the_count() {
        let err = EstimateError::InvalidInput { char_count: -12 };
        assert_eq!(err.to_string(), "Invalid character count -12: must be non-negative");
    }

    #[test]
    fn invalid_price_message_names_the_price() {
        let err = EstimateError::InvalidPrice { price: -0.5 };
        assert!(err.to_string().contains("-0.5"));
    }
}
