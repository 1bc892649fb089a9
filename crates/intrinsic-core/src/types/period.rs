//! Per-period financial statement figures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Ticker;

/// One fiscal period (year or quarter) of statement figures for a company.
///
/// Identified by `(ticker, period_end)`. Every figure that is missing from
/// the source data is `0.0`; the record never carries nulls, and the ratio
/// layer guards denominators instead of this type policing its inputs.
/// Income-statement and cash-flow figures keep the sign the source reports:
/// capital expenditure is a signed outflow (typically negative), interest
/// expense is typically negative.
///
/// A company's history is an ordered sequence of periods sorted by
/// `period_end`; [`FinancialPeriod::latest`] picks the record the
/// point-in-time calculators operate on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialPeriod {
    /// Company ticker.
    pub ticker: Ticker,
    /// Last day of the fiscal period.
    pub period_end: NaiveDate,
    /// Net revenue for the period.
    #[serde(default)]
    pub revenue: f64,
    /// Net income (bottom line).
    #[serde(default)]
    pub net_income: f64,
    /// Earnings before interest and taxes.
    #[serde(default)]
    pub ebit: f64,
    /// Total assets at period end.
    #[serde(default)]
    pub total_assets: f64,
    /// Total liabilities at period end.
    #[serde(default)]
    pub total_liabilities: f64,
    /// Shareholders' equity at period end.
    #[serde(default)]
    pub equity: f64,
    /// Cash and cash equivalents at period end.
    #[serde(default)]
    pub cash: f64,
    /// Long-term debt at period end.
    #[serde(default)]
    pub long_term_debt: f64,
    /// Interest expense for the period (signed as reported).
    #[serde(default)]
    pub interest_expense: f64,
    /// Cash flow from operating activities.
    #[serde(default)]
    pub operating_cash_flow: f64,
    /// Capital expenditure (signed outflow).
    #[serde(default)]
    pub capital_expenditure: f64,
    /// Cash flow from investing activities.
    #[serde(default)]
    pub investing_cash_flow: f64,
    /// Cash flow from financing activities.
    #[serde(default)]
    pub financing_cash_flow: f64,
    /// Working capital at period end.
    #[serde(default)]
    pub working_capital: f64,
}

impl FinancialPeriod {
    /// Creates a period with every figure zeroed.
    #[must_use]
    pub fn new(ticker: Ticker, period_end: NaiveDate) -> Self {
        Self {
            ticker,
            period_end,
            revenue: 0.0,
            net_income: 0.0,
            ebit: 0.0,
            total_assets: 0.0,
            total_liabilities: 0.0,
            equity: 0.0,
            cash: 0.0,
            long_term_debt: 0.0,
            interest_expense: 0.0,
            operating_cash_flow: 0.0,
            capital_expenditure: 0.0,
            investing_cash_flow: 0.0,
            financing_cash_flow: 0.0,
            working_capital: 0.0,
        }
    }

    /// Returns the identifying key `(ticker, period_end)`.
    #[must_use]
    pub fn key(&self) -> (&Ticker, NaiveDate) {
        (&self.ticker, self.period_end)
    }

    /// Free cash flow: operating cash flow plus signed capital expenditure.
    ///
    /// Capex carries its sign from the source, so the sum subtracts spend.
    #[must_use]
    pub fn free_cash_flow(&self) -> f64 {
        self.operating_cash_flow + self.capital_expenditure
    }

    /// Net debt at the statement level: long-term debt less cash.
    ///
    /// Can be negative for cash-rich balance sheets.
    #[must_use]
    pub fn net_debt(&self) -> f64 {
        self.long_term_debt - self.cash
    }

    /// Sorts periods chronologically (oldest first).
    pub fn sort_chronological(periods: &mut [FinancialPeriod]) {
        periods.sort_by_key(|p| p.period_end);
    }

    /// Returns the most recent period by period end, if any.
    #[must_use]
    pub fn latest(periods: &[FinancialPeriod]) -> Option<&FinancialPeriod> {
        periods.iter().max_by_key(|p| p.period_end)
    }
}
