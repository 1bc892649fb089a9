//! Error types for bond modelling and yield estimation.

use intrinsic_math::MathError;
use thiserror::Error;

/// Result type alias for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond construction, pricing, or yield search.
#[derive(Error, Debug)]
pub enum BondError {
    /// The instrument definition is invalid.
    #[error("Invalid bond spec: {reason}")]
    InvalidSpec {
        /// Description of the problem.
        reason: String,
    },

    /// A required builder field was not provided.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },

    /// The discount rate breaks the pricing formula.
    #[error("Degenerate discount rate: per-period rate {per_period_rate} is <= -1")]
    DegenerateRate {
        /// The offending per-period rate.
        per_period_rate: f64,
    },

    /// An error from the numerical layer.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl BondError {
    /// Creates an invalid spec error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a degenerate rate error.
    #[must_use]
    pub fn degenerate_rate(per_period_rate: f64) -> Self {
        Self::DegenerateRate { per_period_rate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spec_display() {
        let err = BondError::invalid_spec("face value must be positive");
        assert_eq!(err.to_string(), "Invalid bond spec: face value must be positive");
    }

    #[test]
    fn test_missing_field_display() {
        let err = BondError::missing_field("observed_price");
        assert_eq!(err.to_string(), "Missing required field: observed_price");
    }

    #[test]
    fn test_degenerate_rate_display() {
        let err = BondError::degenerate_rate(-1.5);
        assert!(err.to_string().contains("-1.5"));
        assert!(err.to_string().contains("<= -1"));
    }

    #[test]
    fn test_math_error_conversion() {
        let math = MathError::invalid_input("tolerance must be positive");
        let err = BondError::from(math);
        assert!(matches!(err, BondError::Math(_)));
        assert!(err.to_string().contains("tolerance must be positive"));
    }
}
