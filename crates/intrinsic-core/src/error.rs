//! Error types for the Intrinsic core domain layer.
//!
//! These errors cover construction-time invariants on the domain records;
//! computation-level failures live with the calculators that produce them.

use thiserror::Error;

/// A specialized Result type for core domain operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core domain validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Ticker failed normalization (empty or whitespace-only).
    #[error("Invalid ticker: {reason}")]
    InvalidTicker {
        /// Description of what was rejected.
        reason: String,
    },

    /// Valuation assumptions violate the terminal-value requirement.
    #[error(
        "Invalid assumptions: discount rate {discount_rate} must exceed \
         perpetuity growth rate {perpetuity_growth_rate}"
    )]
    InvalidAssumptions {
        /// The supplied discount rate (WACC).
        discount_rate: f64,
        /// The supplied perpetuity growth rate.
        perpetuity_growth_rate: f64,
    },
}

impl CoreError {
    /// Creates an invalid ticker error.
    #[must_use]
    pub fn invalid_ticker(reason: impl Into<String>) -> Self {
        Self::InvalidTicker {
            reason: reason.into(),
        }
    }

    /// Creates an invalid assumptions error.
    #[must_use]
    pub fn invalid_assumptions(discount_rate: f64, perpetuity_growth_rate: f64) -> Self {
        Self::InvalidAssumptions {
            discount_rate,
            perpetuity_growth_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ticker_display() {
        let err = CoreError::invalid_ticker("empty symbol");
        assert!(err.to_string().contains("Invalid ticker"));
        assert!(err.to_string().contains("empty symbol"));
    }

    #[test]
    fn test_invalid_assumptions_display() {
        let err = CoreError::invalid_assumptions(0.02, 0.05);
        assert!(err.to_string().contains("0.02"));
        assert!(err.to_string().contains("0.05"));
    }
}
