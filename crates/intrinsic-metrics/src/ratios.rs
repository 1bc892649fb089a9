//! Guarded financial ratio functions.
//!
//! Every ratio is a free function over the core records. Statement figures
//! are zero-filled upstream, so each function guards its denominator and
//! returns `None` when the ratio is not meaningful for this company-period
//! instead of emitting an infinity or a sign-flipped artifact.
//!
//! All ratios are plain fractions (0.15, not 15%). Rendering as percent or
//! as a multiple is the report's job.

use intrinsic_core::{FinancialPeriod, MarketSnapshot};

// ============================================================================
// PROFITABILITY
// ============================================================================

/// Return on equity: `net_income / equity`.
///
/// Guarded on `equity > 0`; a negative book value makes the ratio
/// uninterpretable (a loss over negative equity would read as positive).
#[must_use]
pub fn return_on_equity(period: &FinancialPeriod) -> Option<f64> {
    if period.equity > 0.0 {
        Some(period.net_income / period.equity)
    } else {
        None
    }
}

/// Net margin: `net_income / revenue`. Guarded on `revenue > 0`.
#[must_use]
pub fn net_margin(period: &FinancialPeriod) -> Option<f64> {
    if period.revenue > 0.0 {
        Some(period.net_income / period.revenue)
    } else {
        None
    }
}

/// Operating (EBIT) margin: `ebit / revenue`. Guarded on `revenue > 0`.
#[must_use]
pub fn ebit_margin(period: &FinancialPeriod) -> Option<f64> {
    if period.revenue > 0.0 {
        Some(period.ebit / period.revenue)
    } else {
        None
    }
}

// ============================================================================
// EFFICIENCY & LEVERAGE
// ============================================================================

/// Asset turnover: `revenue / total_assets`. Guarded on `total_assets > 0`.
#[must_use]
pub fn asset_turnover(period: &FinancialPeriod) -> Option<f64> {
    if period.total_assets > 0.0 {
        Some(period.revenue / period.total_assets)
    } else {
        None
    }
}

/// Financial leverage (equity multiplier): `total_assets / equity`.
///
/// Guarded on `equity > 0`, same reasoning as [`return_on_equity`].
#[must_use]
pub fn financial_leverage(period: &FinancialPeriod) -> Option<f64> {
    if period.equity > 0.0 {
        Some(period.total_assets / period.equity)
    } else {
        None
    }
}

/// Net debt: `long_term_debt - cash`.
///
/// Unguarded; a cash-rich balance sheet legitimately reports a negative
/// net debt.
#[must_use]
pub fn net_debt(period: &FinancialPeriod) -> f64 {
    period.net_debt()
}

/// Net debt to EBIT: `net_debt / ebit`. Guarded on `ebit > 0`.
#[must_use]
pub fn net_debt_to_ebit(period: &FinancialPeriod) -> Option<f64> {
    if period.ebit > 0.0 {
        Some(period.net_debt() / period.ebit)
    } else {
        None
    }
}

/// Interest coverage: `ebit / |interest_expense|`.
///
/// Statement sources disagree on the sign of interest expense, so the
/// denominator is taken in magnitude. Guarded on a nonzero expense; a
/// debt-free company has no coverage ratio, not an infinite one.
#[must_use]
pub fn interest_coverage(period: &FinancialPeriod) -> Option<f64> {
    if period.interest_expense != 0.0 {
        Some(period.ebit / period.interest_expense.abs())
    } else {
        None
    }
}

// ============================================================================
// MARKET VALUATION
// ============================================================================

/// Price to earnings: `market_cap / net_income`.
///
/// Guarded on `net_income > 0`; a negative P/E carries no ranking signal.
#[must_use]
pub fn price_to_earnings(period: &FinancialPeriod, snapshot: &MarketSnapshot) -> Option<f64> {
    if period.net_income > 0.0 {
        Some(snapshot.market_cap / period.net_income)
    } else {
        None
    }
}

/// Price to book: `market_cap / equity`. Guarded on `equity > 0`.
#[must_use]
pub fn price_to_book(period: &FinancialPeriod, snapshot: &MarketSnapshot) -> Option<f64> {
    if period.equity > 0.0 {
        Some(snapshot.market_cap / period.equity)
    } else {
        None
    }
}

/// Enterprise value: `market_cap + total_debt - total_cash`.
///
/// Unguarded; can sit below market cap (net cash) or, in pathological
/// snapshots, below zero.
#[must_use]
pub fn enterprise_value(snapshot: &MarketSnapshot) -> f64 {
    snapshot.market_cap + snapshot.net_debt()
}

/// EV to EBIT: `enterprise_value / ebit`. Guarded on `ebit > 0`.
#[must_use]
pub fn ev_to_ebit(period: &FinancialPeriod, snapshot: &MarketSnapshot) -> Option<f64> {
    if period.ebit > 0.0 {
        Some(enterprise_value(snapshot) / period.ebit)
    } else {
        None
    }
}
