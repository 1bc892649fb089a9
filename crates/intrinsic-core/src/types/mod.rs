//! Domain types for fundamental analysis.
//!
//! This module provides the records the calculators consume:
//!
//! - [`Ticker`]: normalized company identifier
//! - [`FinancialPeriod`]: one fiscal period of statement figures
//! - [`MarketSnapshot`]: point-in-time market data for a ticker
//! - [`CompanyProfile`]: descriptive reference data for a company
//! - [`ValuationAssumptions`]: user-supplied DCF scalars

mod assumptions;
mod period;
mod profile;
mod snapshot;
mod ticker;

pub use assumptions::ValuationAssumptions;
pub use period::FinancialPeriod;
pub use profile::CompanyProfile;
pub use snapshot::MarketSnapshot;
pub use ticker::Ticker;
