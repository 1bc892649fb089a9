//! DuPont decomposition of return on equity.
//!
//! Splits ROE into the three levers that drive it:
//!
//! ```text
//! ROE = net margin x asset turnover x financial leverage
//!     = (NI / revenue) x (revenue / assets) x (assets / equity)
//! ```
//!
//! Each factor keeps its own guard, so a point can carry a margin without
//! a leverage (negative book value) and still tell the analyst something.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use intrinsic_core::FinancialPeriod;

use crate::ratios;

/// One period's DuPont factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuPontPoint {
    /// Fiscal period end.
    pub period_end: NaiveDate,
    /// Net income over revenue.
    pub net_margin: Option<f64>,
    /// Revenue over total assets.
    pub asset_turnover: Option<f64>,
    /// Total assets over equity.
    pub financial_leverage: Option<f64>,
    /// ROE computed directly as net income over equity.
    pub reported_roe: Option<f64>,
}

impl DuPontPoint {
    /// The product of the three factors, when all are present.
    ///
    /// Matches [`DuPontPoint::reported_roe`] up to floating-point rounding
    /// whenever revenue and assets are nonzero, since the intermediate
    /// terms cancel algebraically.
    #[must_use]
    pub fn implied_roe(&self) -> Option<f64> {
        Some(self.net_margin? * self.asset_turnover? * self.financial_leverage?)
    }
}

/// Decomposes ROE for each period, ordered oldest first.
///
/// Input order does not matter; the series is sorted by period end so a
/// trend reads left to right.
#[must_use]
pub fn dupont_series(periods: &[FinancialPeriod]) -> Vec<DuPontPoint> {
    let mut ordered: Vec<&FinancialPeriod> = periods.iter().collect();
    ordered.sort_by_key(|period| period.period_end);
    ordered
        .into_iter()
        .map(|period| DuPontPoint {
            period_end: period.period_end,
            net_margin: ratios::net_margin(period),
            asset_turnover: ratios::asset_turnover(period),
            financial_leverage: ratios::financial_leverage(period),
            reported_roe: ratios::return_on_equity(period),
        })
        .collect()
}
