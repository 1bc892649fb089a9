//! # Intrinsic
//!
//! Fundamental-analysis toolkit: financial ratios, DuPont decomposition,
//! discounted-cash-flow valuation, and bond yield estimation.
//!
//! This crate is a facade over the toolkit's building blocks:
//!
//! - The shared domain types from `intrinsic-core` are re-exported at the
//!   root: [`Ticker`], [`FinancialPeriod`], [`MarketSnapshot`],
//!   [`CompanyProfile`], and [`ValuationAssumptions`]
//! - [`bonds`]: bond instrument modelling and yield-to-maturity solving
//! - [`metrics`]: ratio calculators, DuPont series, peer groups, and DCF
//!   valuation
//!
//! Data loading (CSV sources, snapshot caching, configuration) lives in
//! the separate `intrinsic-data` crate so library consumers that bring
//! their own data do not pull in the file-handling stack.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use intrinsic::prelude::*;
//!
//! // Yield implied by a discounted bond quote
//! let bond = BondInstrument::builder()
//!     .annual_coupon_rate(0.05)
//!     .years_to_maturity(10.0)
//!     .observed_price(92.0)
//!     .build()?;
//! let ytm = YtmSolver::new().solve(&bond);
//! assert!(ytm.is_converged());
//! assert!(ytm.rate > 0.05);
//!
//! // Profitability ratios for one fiscal period
//! let mut period = FinancialPeriod::new(
//!     Ticker::new("ACME")?,
//!     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//! );
//! period.revenue = 1_000.0;
//! period.net_income = 120.0;
//! period.equity = 800.0;
//!
//! let report = MetricsCalculator::new(RatioSet::profitability()).evaluate(&period, None);
//! assert_eq!(report.get(Ratio::NetMargin), Some(0.12));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: evaluate peer groups with rayon (pass-through to
//!   `intrinsic-metrics`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use intrinsic_bonds as bonds;
pub use intrinsic_metrics as metrics;

pub use intrinsic_core::error::{CoreError, CoreResult};
pub use intrinsic_core::types::{
    CompanyProfile, FinancialPeriod, MarketSnapshot, Ticker, ValuationAssumptions,
};

/// Commonly used types and functions from across the toolkit.
pub mod prelude {
    pub use intrinsic_bonds::prelude::*;
    pub use intrinsic_core::prelude::*;
    pub use intrinsic_metrics::prelude::*;
}
