//! # Intrinsic Core
//!
//! Core domain types for the Intrinsic fundamental-analysis toolkit.
//!
//! This crate provides the records the calculators operate on:
//!
//! - **Identifiers**: [`Ticker`](types::Ticker), the normalized company key
//! - **Statements**: [`FinancialPeriod`](types::FinancialPeriod), one fiscal
//!   period of statement figures keyed by `(ticker, period_end)`
//! - **Market data**: [`MarketSnapshot`](types::MarketSnapshot), point-in-time
//!   capitalization and balance items per ticker
//! - **Reference data**: [`CompanyProfile`](types::CompanyProfile)
//! - **Valuation inputs**: [`ValuationAssumptions`](types::ValuationAssumptions)
//!
//! ## Design Philosophy
//!
//! - **Zero-filled figures**: statement figures absent from a source are `0.0`,
//!   never null; downstream ratios guard denominators instead
//! - **Plain records**: types carry data and cheap identities; formulas live
//!   in the calculator crates
//! - **Explicit validation**: invariants are checked at construction or via
//!   `validate()`, returning typed errors
//!
//! ## Example
//!
//! ```rust
//! use intrinsic_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let mut period = FinancialPeriod::new(
//!     Ticker::new("AAPL").unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//! );
//! period.operating_cash_flow = 110_000.0;
//! period.capital_expenditure = -10_000.0;
//! assert_eq!(period.free_cash_flow(), 100_000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        CompanyProfile, FinancialPeriod, MarketSnapshot, Ticker, ValuationAssumptions,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CompanyProfile, FinancialPeriod, MarketSnapshot, Ticker, ValuationAssumptions};
