//! Yield-to-maturity estimation.
//!
//! Two search strategies are available. [`YtmMethod::FixedStep`] walks the
//! trial rate in fixed [`RATE_STEP`] increments from the coupon-rate
//! starting guess and stops when the model price lands within
//! [`PRICE_EPSILON`] of the quote. The step is coarse enough that for
//! longer-dated bonds a single adjustment can jump straight over the
//! tolerance window; the walk then reports [`YtmStatus::MaxIterations`]
//! together with the best rate it reached, and the caller decides whether
//! that is good enough. [`YtmMethod::Bisection`] (the default) brackets
//! the rate around the same starting guess and hands the interval to
//! [`intrinsic_math::solvers::bisection`], which converges for any
//! priceable instrument.
//!
//! Both methods agree on the degenerate cases: a matured bond yields
//! exactly `0.0`, and when no admissible rate can reproduce the quote the
//! sentinel [`UNDEFINED_YIELD`] is returned with
//! [`YtmStatus::Undefined`]. Neither case is an error.

use intrinsic_math::solvers::{bisection, SolverConfig, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BondResult;
use crate::instrument::BondInstrument;
use crate::pricing::discounted_price;

/// Price gap below which the fixed-step walk counts as converged.
pub const PRICE_EPSILON: f64 = 1e-4;

/// Rate adjustment applied per iteration of the fixed-step walk.
pub const RATE_STEP: f64 = 1e-4;

/// Default iteration budget for the yield search.
pub const MAX_ITERATIONS: u32 = 100;

/// Sentinel rate returned when no admissible yield exists.
pub const UNDEFINED_YIELD: f64 = -1.0;

/// Search strategy for the yield solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YtmMethod {
    /// Walk the trial rate in fixed increments from the coupon rate.
    /// Retained for reproducing historical estimates.
    FixedStep,
    /// Bracket the rate and bisect. Converges for any priceable
    /// instrument.
    Bisection,
}

/// How a yield search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YtmStatus {
    /// The search converged within tolerance.
    Converged,
    /// The iteration budget ran out; the rate is the best effort found.
    MaxIterations,
    /// The bond has already matured; the rate is zero by definition.
    Matured,
    /// No admissible rate reproduces the observed price; the rate is the
    /// sentinel [`UNDEFINED_YIELD`].
    Undefined,
}

impl std::fmt::Display for YtmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Converged => "converged",
            Self::MaxIterations => "max iterations",
            Self::Matured => "matured",
            Self::Undefined => "undefined",
        };
        write!(f, "{label}")
    }
}

/// Outcome of a yield search.
#[derive(Debug, Clone, Copy)]
pub struct YtmResult {
    /// The estimated annual yield, or a sentinel for the degenerate cases.
    pub rate: f64,
    /// Rate adjustments (fixed-step) or interval halvings (bisection)
    /// performed.
    pub iterations: u32,
    /// Absolute price gap at the returned rate. `INFINITY` when the yield
    /// is undefined.
    pub residual: f64,
    /// How the search ended.
    pub status: YtmStatus,
}

impl YtmResult {
    /// Whether the rate can be taken at face value: the search converged,
    /// or the bond matured and the rate is zero by definition.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self.status, YtmStatus::Converged | YtmStatus::Matured)
    }
}

/// Yield-to-maturity solver.
///
/// # Example
///
/// ```
/// use intrinsic_bonds::instrument::BondInstrument;
/// use intrinsic_bonds::ytm::YtmSolver;
///
/// let bond = BondInstrument::new(100.0, 0.05, 5.0, 2, 95.0).unwrap();
/// let result = YtmSolver::new().solve(&bond);
///
/// assert!(result.is_converged());
/// assert!(result.rate > 0.05); // discount bond yields above coupon
/// ```
#[derive(Debug, Clone)]
pub struct YtmSolver {
    config: SolverConfig,
    method: YtmMethod,
}

impl Default for YtmSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YtmSolver {
    /// Creates a solver with the default price tolerance, iteration
    /// budget, and the bisection method.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(PRICE_EPSILON, MAX_ITERATIONS),
            method: YtmMethod::Bisection,
        }
    }

    /// Sets the search strategy.
    #[must_use]
    pub fn with_method(mut self, method: YtmMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the price tolerance for the fixed-step walk.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = SolverConfig::new(tolerance, self.config.max_iterations);
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = SolverConfig::new(self.config.tolerance, max_iterations);
        self
    }

    /// Estimates the yield to maturity of the instrument.
    ///
    /// Never fails: matured bonds, undefined yields, and exhausted
    /// iteration budgets are all reported through [`YtmStatus`].
    #[must_use]
    pub fn solve(&self, instrument: &BondInstrument) -> YtmResult {
        if instrument.is_matured() {
            return YtmResult {
                rate: 0.0,
                iterations: 0,
                residual: 0.0,
                status: YtmStatus::Matured,
            };
        }

        match self.method {
            YtmMethod::FixedStep => self.fixed_step(instrument),
            YtmMethod::Bisection => self.bisect(instrument),
        }
    }

    /// The legacy walk: start at the coupon rate, compare the model price
    /// against the quote, and nudge the trial rate one step toward it.
    fn fixed_step(&self, instrument: &BondInstrument) -> YtmResult {
        let frequency = f64::from(instrument.payments_per_year());
        let coupon = instrument.coupon_payment();
        let face = instrument.face_value();
        let periods = instrument.num_periods();
        let observed = instrument.observed_price();

        let mut rate = instrument.annual_coupon_rate();

        for iteration in 0..self.config.max_iterations {
            // Discounting breaks once the per-period rate reaches -1
            if rate / frequency <= -1.0 {
                debug!(rate, "trial rate left the discounting domain");
                return YtmResult {
                    rate: UNDEFINED_YIELD,
                    iterations: iteration,
                    residual: f64::INFINITY,
                    status: YtmStatus::Undefined,
                };
            }

            let gap = discounted_price(coupon, face, periods, rate / frequency) - observed;
            if gap.abs() < self.config.tolerance {
                return YtmResult {
                    rate,
                    iterations: iteration,
                    residual: gap.abs(),
                    status: YtmStatus::Converged,
                };
            }

            // Model price above the quote means the trial rate is too low
            if gap > 0.0 {
                rate += RATE_STEP;
            } else {
                rate -= RATE_STEP;
            }
        }

        if rate / frequency <= -1.0 {
            return YtmResult {
                rate: UNDEFINED_YIELD,
                iterations: self.config.max_iterations,
                residual: f64::INFINITY,
                status: YtmStatus::Undefined,
            };
        }
        let residual = (discounted_price(coupon, face, periods, rate / frequency) - observed).abs();
        YtmResult {
            rate,
            iterations: self.config.max_iterations,
            residual,
            status: YtmStatus::MaxIterations,
        }
    }

    /// Brackets the yield around the coupon-rate guess and bisects.
    fn bisect(&self, instrument: &BondInstrument) -> YtmResult {
        let frequency = f64::from(instrument.payments_per_year());
        let coupon = instrument.coupon_payment();
        let face = instrument.face_value();
        let periods = instrument.num_periods();
        let observed = instrument.observed_price();

        let objective =
            |rate: f64| discounted_price(coupon, face, periods, rate / frequency) - observed;

        // Annual rates at or below -frequency break per-period discounting
        let floor = -frequency + RATE_STEP;
        let guess = instrument.annual_coupon_rate();

        // Refine in rate space; the price residual lands well inside the
        // price tolerance for any realistic maturity
        let config = SolverConfig::new(DEFAULT_TOLERANCE, self.config.max_iterations);

        let brackets = [
            (guess - 0.05, guess + 0.05),
            (guess - 0.25, guess + 0.25),
            (-0.5, 2.0),
            (floor, 10.0),
        ];

        for (a, b) in brackets {
            let lo = a.max(floor);
            let hi = b.max(floor);
            if hi - lo < RATE_STEP {
                continue;
            }
            if let Ok(solved) = bisection(&objective, lo, hi, &config) {
                return YtmResult {
                    rate: solved.root,
                    iterations: solved.iterations,
                    residual: solved.residual.abs(),
                    status: YtmStatus::Converged,
                };
            }
        }

        // No sign change anywhere. If even the floored rate cannot lift
        // the model price up to the quote, no admissible yield exists.
        if objective(floor) < 0.0 {
            debug!(observed, "price unattainable at any admissible rate");
            return YtmResult {
                rate: UNDEFINED_YIELD,
                iterations: 0,
                residual: f64::INFINITY,
                status: YtmStatus::Undefined,
            };
        }

        debug!(guess, "no bracket above the starting guess, walking instead");
        self.fixed_step(instrument)
    }
}

/// Estimates yield to maturity with the fixed-step walk.
///
/// This is the flat convenience entry point for spreadsheet-facing
/// callers. Returns the sentinel [`UNDEFINED_YIELD`] when no admissible
/// rate exists and exactly `0.0` for matured bonds; in both cases, and
/// when the iteration budget runs out, a rate is reported without an
/// error. Use [`YtmSolver`] directly when convergence status matters.
///
/// # Errors
///
/// Returns [`crate::BondError::InvalidSpec`] when the instrument
/// parameters fail validation.
pub fn estimate_ytm(
    observed_price: f64,
    face_value: f64,
    annual_coupon_rate: f64,
    years_to_maturity: f64,
    payments_per_year: u32,
) -> BondResult<f64> {
    let instrument = BondInstrument::new(
        face_value,
        annual_coupon_rate,
        years_to_maturity,
        payments_per_year,
        observed_price,
    )?;
    let solver = YtmSolver::new().with_method(YtmMethod::FixedStep);
    Ok(solver.solve(&instrument).rate)
}
