//! Error types for the metrics and valuation calculators.
//!
//! Ratio helpers never error; a denominator that fails its guard yields
//! `None`. Errors are reserved for the DCF path, where a bad input makes
//! the whole valuation meaningless rather than a single cell blank.

use thiserror::Error;

use intrinsic_core::CoreError;

/// A specialized Result type for metrics operations.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// The error type for valuation calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    // ========== Valuation Inputs ==========
    /// Projection needs a strictly positive starting cash flow.
    #[error("Invalid base cash flow: {base_fcf} (must be positive to project)")]
    NonPositiveBaseFlow {
        /// The rejected base free cash flow.
        base_fcf: f64,
    },

    /// Per-share value needs a strictly positive share count.
    #[error("Invalid shares outstanding: {shares} (must be positive)")]
    NonPositiveShares {
        /// The rejected share count.
        shares: f64,
    },

    // ========== Upstream Validation ==========
    /// A core record or the valuation assumptions failed validation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl MetricsError {
    /// Creates a non-positive base flow error.
    #[must_use]
    pub fn non_positive_base_flow(base_fcf: f64) -> Self {
        Self::NonPositiveBaseFlow { base_fcf }
    }

    /// Creates a non-positive share count error.
    #[must_use]
    pub fn non_positive_shares(shares: f64) -> Self {
        Self::NonPositiveShares { shares }
    }
}
