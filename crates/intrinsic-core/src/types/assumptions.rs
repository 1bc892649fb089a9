//! User-supplied valuation assumptions.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Scalar assumptions for the discounted-cash-flow valuation.
///
/// Range enforcement on each scalar is the entry surface's concern; the one
/// invariant this type owns is that the discount rate strictly exceeds the
/// perpetuity growth rate, without which the terminal value is not finite
/// and positive. [`validate`](Self::validate) checks it before any
/// valuation runs. Scalars omitted from a serialized form fall back to the
/// conventional defaults.
///
/// # Example
///
/// ```
/// use intrinsic_core::types::ValuationAssumptions;
///
/// let assumptions = ValuationAssumptions::default()
///     .with_growth_rate_5y(0.08)
///     .with_discount_rate(0.12);
/// assert!(assumptions.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationAssumptions {
    /// Annual growth rate applied over the explicit five-year horizon.
    pub growth_rate_5y: f64,
    /// Growth rate assumed in perpetuity beyond the horizon.
    pub perpetuity_growth_rate: f64,
    /// Discount rate (WACC).
    pub discount_rate: f64,
}

impl Default for ValuationAssumptions {
    /// Conventional starting point: 5% growth, 2% perpetuity, 10% WACC.
    fn default() -> Self {
        Self {
            growth_rate_5y: 0.05,
            perpetuity_growth_rate: 0.02,
            discount_rate: 0.10,
        }
    }
}

impl ValuationAssumptions {
    /// Creates assumptions from the three scalars.
    #[must_use]
    pub fn new(growth_rate_5y: f64, perpetuity_growth_rate: f64, discount_rate: f64) -> Self {
        Self {
            growth_rate_5y,
            perpetuity_growth_rate,
            discount_rate,
        }
    }

    /// Sets the five-year growth rate.
    #[must_use]
    pub fn with_growth_rate_5y(mut self, rate: f64) -> Self {
        self.growth_rate_5y = rate;
        self
    }

    /// Sets the perpetuity growth rate.
    #[must_use]
    pub fn with_perpetuity_growth_rate(mut self, rate: f64) -> Self {
        self.perpetuity_growth_rate = rate;
        self
    }

    /// Sets the discount rate (WACC).
    #[must_use]
    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = rate;
        self
    }

    /// Checks that the discount rate strictly exceeds the perpetuity growth
    /// rate.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAssumptions`] when the ordering does not
    /// hold (including equality).
    pub fn validate(&self) -> CoreResult<()> {
        if self.discount_rate > self.perpetuity_growth_rate {
            Ok(())
        } else {
            Err(CoreError::invalid_assumptions(
                self.discount_rate,
                self.perpetuity_growth_rate,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assumptions_are_valid() {
        assert!(ValuationAssumptions::default().validate().is_ok());
    }

    #[test]
    fn test_discount_below_perpetuity_rejected() {
        let assumptions = ValuationAssumptions::new(0.05, 0.08, 0.03);
        assert!(matches!(
            assumptions.validate(),
            Err(CoreError::InvalidAssumptions { .. })
        ));
    }

    #[test]
    fn test_equal_rates_rejected() {
        let assumptions = ValuationAssumptions::new(0.05, 0.10, 0.10);
        assert!(assumptions.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let assumptions = ValuationAssumptions::default()
            .with_growth_rate_5y(0.07)
            .with_perpetuity_growth_rate(0.025)
            .with_discount_rate(0.11);
        assert_eq!(assumptions.growth_rate_5y, 0.07);
        assert_eq!(assumptions.perpetuity_growth_rate, 0.025);
        assert_eq!(assumptions.discount_rate, 0.11);
    }

    #[test]
    fn test_partial_deserialization_falls_back_per_field() {
        let assumptions: ValuationAssumptions =
            serde_json::from_str(r#"{"discount_rate": 0.12}"#).unwrap();
        assert_eq!(assumptions.discount_rate, 0.12);
        assert_eq!(assumptions.growth_rate_5y, 0.05);
        assert_eq!(assumptions.perpetuity_growth_rate, 0.02);
    }
}
