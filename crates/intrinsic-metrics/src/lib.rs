//! # Intrinsic Metrics
//!
//! Fundamental-analysis calculators for the Intrinsic toolkit:
//!
//! - **Ratios**: the guarded ratio functions in [`ratios`], and a
//!   [`MetricsCalculator`] that evaluates a [`RatioSet`] into an ordered,
//!   renderable [`MetricsReport`]
//! - **DuPont**: [`dupont::dupont_series`] splits ROE into margin,
//!   turnover, and leverage per period
//! - **DCF**: [`dcf::dcf_valuation`], a two-stage discounted-cash-flow
//!   model producing a per-share target and upside
//! - **Peers**: [`peers::evaluate_peer_group`] runs one calculator across
//!   a comparison set, on rayon behind the `parallel` feature
//!
//! Not-computable is a first-class outcome here: a ratio whose denominator
//! fails its guard reports `None` and renders as `n/a`, it never poisons
//! the rest of the report.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use intrinsic_core::{FinancialPeriod, Ticker};
//! use intrinsic_metrics::prelude::*;
//!
//! let mut period = FinancialPeriod::new(
//!     Ticker::new("ACME")?,
//!     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//! );
//! period.revenue = 1000.0;
//! period.net_income = 120.0;
//! period.equity = 800.0;
//!
//! let calculator = MetricsCalculator::new(RatioSet::profitability());
//! let report = calculator.evaluate(&period, None);
//! assert_eq!(report.get(Ratio::ReturnOnEquity), Some(0.15));
//! println!("{report}");
//! # Ok::<(), intrinsic_core::CoreError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod calculator;
pub mod dcf;
pub mod dupont;
pub mod error;
pub mod peers;
pub mod ratios;

// Re-export commonly used types at crate root
pub use calculator::{MetricsCalculator, MetricsReport, Ratio, RatioSet};
pub use error::{MetricsError, MetricsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{MetricsCalculator, MetricsReport, Ratio, RatioSet};
    pub use crate::dcf::{dcf_from_period, dcf_valuation, DcfValuation, PROJECTION_YEARS};
    pub use crate::dupont::{dupont_series, DuPontPoint};
    pub use crate::error::{MetricsError, MetricsResult};
    pub use crate::peers::{evaluate_peer_group, PeerMetrics};
}
