//! Root-finding for scalar equations.
//!
//! This module provides the bracketing solver used by the yield
//! estimator:
//!
//! - [`bisection`]: sign-change bracketing; linear convergence, guaranteed
//!   once a bracket is found
//!
//! Present value is monotonically decreasing in the discount rate, so a
//! sign-changing bracket exists for every attainable price and bisection
//! cannot diverge.
//!
//! # Example: implied rate
//!
//! ```rust
//! use intrinsic_math::solvers::{bisection, SolverConfig};
//!
//! // 5% annual coupon, 5 years, face 100, observed price 95
//! let price_gap = |r: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + r).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + r).powi(5);
//!     pv - 95.0
//! };
//!
//! let result = bisection(price_gap, 0.0, 0.20, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05); // discount bond yields above its coupon
//! ```

mod bisection;

pub use bisection::bisection;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    // ============ Implied-Rate Tests ============

    /// Helper to price a coupon bond at an annualized rate.
    fn bond_price(rate: f64, coupon_rate: f64, face: f64, years: i32, freq: i32) -> f64 {
        let periods = years * freq;
        let coupon = coupon_rate / freq as f64 * face;
        let per_period = rate / freq as f64;

        let mut pv = 0.0;
        for t in 1..=periods {
            pv += coupon / (1.0 + per_period).powi(t);
        }
        pv += face / (1.0 + per_period).powi(periods);
        pv
    }

    #[test]
    fn test_par_bond_rate() {
        // A bond priced at par implies a rate equal to its coupon rate
        let f = |r: f64| bond_price(r, 0.05, 100.0, 10, 2) - 100.0;

        let result = bisection(f, 0.0, 0.20, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.05, epsilon = 1e-8);
    }

    #[test]
    fn test_discount_bond_rate() {
        // Priced below par, the implied rate exceeds the coupon rate
        let f = |r: f64| bond_price(r, 0.05, 100.0, 5, 2) - 95.0;

        let result = bisection(f, 0.0, 0.20, &SolverConfig::default()).unwrap();

        assert!(result.root > 0.05);
        assert!(f(result.root).abs() < 1e-6);
    }

    #[test]
    fn test_premium_bond_rate() {
        // Priced above par, the implied rate is below the coupon rate
        let f = |r: f64| bond_price(r, 0.07, 100.0, 5, 2) - 105.0;

        let result = bisection(f, 0.0, 0.20, &SolverConfig::default()).unwrap();

        assert!(result.root < 0.07);
        assert!(f(result.root).abs() < 1e-6);
    }

    #[test]
    fn test_deep_discount_rate() {
        // Deep discount pushes the implied rate well above the coupon
        let f = |r: f64| bond_price(r, 0.08, 100.0, 5, 2) - 85.0;

        let result = bisection(f, 0.0, 0.40, &SolverConfig::default()).unwrap();

        assert!(result.root > 0.10);
        assert!(f(result.root).abs() < 1e-6);
    }

    #[test]
    fn test_zero_coupon_rate() {
        // Price = Face / (1 + r)^n
        // At 10% over 5 years: 100 / (1.10)^5 = 62.0921...
        let f = |r: f64| 100.0 / (1.0 + r).powi(5) - 62.0921;

        let result = bisection(f, 0.0, 0.30, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.10, epsilon = 1e-3);
    }

    #[test]
    fn test_rate_monotone_in_price() {
        // Raising the observed price lowers the implied rate
        let config = SolverConfig::default();
        let mut last_rate = f64::INFINITY;

        for price in [90.0, 95.0, 100.0, 105.0, 110.0] {
            let f = move |r: f64| bond_price(r, 0.06, 100.0, 7, 2) - price;
            let result = bisection(f, -0.05, 0.40, &config).unwrap();

            assert!(result.root < last_rate);
            last_rate = result.root;
        }
    }
}
