//! Data source traits.
//!
//! These traits are the seam between the calculators and wherever the
//! figures actually come from:
//!
//! - [`EquitySource`]: statement history and company profiles
//! - [`SnapshotSource`]: point-in-time market data
//! - [`BondSource`]: bond listings per issuer
//!
//! Lookups are infallible: a backend does its fallible work up front
//! (construction and `reload`), after which reads are served from
//! memory. A ticker the source has never seen yields `None` or an
//! empty list, not an error.

use intrinsic_bonds::instrument::BondInstrument;
use intrinsic_core::{CompanyProfile, FinancialPeriod, MarketSnapshot, Ticker};

/// Source of statement history and reference data per company.
pub trait EquitySource: Send + Sync {
    /// Every ticker the source has data for, sorted.
    fn tickers(&self) -> Vec<Ticker>;

    /// Descriptive profile for a ticker, when one is on file.
    fn profile(&self, ticker: &Ticker) -> Option<CompanyProfile>;

    /// Statement history for a ticker, sorted ascending by period end.
    ///
    /// Empty when the ticker is unknown.
    fn statements(&self, ticker: &Ticker) -> Vec<FinancialPeriod>;
}

/// Source of point-in-time market data.
pub trait SnapshotSource: Send + Sync {
    /// Current market snapshot for a ticker, when one is on file.
    fn snapshot(&self, ticker: &Ticker) -> Option<MarketSnapshot>;
}

/// Source of bond listings per issuer.
pub trait BondSource: Send + Sync {
    /// Every listed bond for an issuer. Empty when the issuer is unknown.
    fn listings(&self, ticker: &Ticker) -> Vec<BondListing>;
}

/// One listed bond, paired with its issuer and display description.
///
/// The instrument inside is already validated and ready for the yield
/// solver; the listing adds the identification the data layer knows.
#[derive(Debug, Clone, PartialEq)]
pub struct BondListing {
    /// Issuer ticker.
    pub ticker: Ticker,
    /// Human-readable description from the source file.
    pub description: String,
    /// The priced instrument.
    pub instrument: BondInstrument,
}
