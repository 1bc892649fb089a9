//! Ratio-set driven metrics calculator.
//!
//! One calculator serves every screen: it is parameterized by a [`RatioSet`]
//! instead of hard-coding one list per caller. The report preserves the
//! set's order, keeps not-computable cells explicit, and renders as a
//! fixed-width tearsheet.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use intrinsic_core::{FinancialPeriod, MarketSnapshot, Ticker};

use crate::ratios;

// ============================================================================
// RATIO IDENTIFIERS
// ============================================================================

/// Identifier for one of the supported ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ratio {
    /// Net income over equity.
    ReturnOnEquity,
    /// Net income over revenue.
    NetMargin,
    /// EBIT over revenue.
    EbitMargin,
    /// Revenue over total assets.
    AssetTurnover,
    /// Total assets over equity.
    FinancialLeverage,
    /// Long-term debt less cash.
    NetDebt,
    /// Net debt over EBIT.
    NetDebtToEbit,
    /// EBIT over the magnitude of interest expense.
    InterestCoverage,
    /// Market cap over net income.
    PriceToEarnings,
    /// Market cap over equity.
    PriceToBook,
    /// Market cap plus net debt.
    EnterpriseValue,
    /// Enterprise value over EBIT.
    EvToEbit,
}

impl Ratio {
    /// Every supported ratio, in canonical screen order.
    pub const ALL: [Ratio; 12] = [
        Ratio::ReturnOnEquity,
        Ratio::NetMargin,
        Ratio::EbitMargin,
        Ratio::AssetTurnover,
        Ratio::FinancialLeverage,
        Ratio::NetDebt,
        Ratio::NetDebtToEbit,
        Ratio::InterestCoverage,
        Ratio::PriceToEarnings,
        Ratio::PriceToBook,
        Ratio::EnterpriseValue,
        Ratio::EvToEbit,
    ];

    /// Human-readable screen label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Ratio::ReturnOnEquity => "Return on equity",
            Ratio::NetMargin => "Net margin",
            Ratio::EbitMargin => "EBIT margin",
            Ratio::AssetTurnover => "Asset turnover",
            Ratio::FinancialLeverage => "Financial leverage",
            Ratio::NetDebt => "Net debt",
            Ratio::NetDebtToEbit => "Net debt / EBIT",
            Ratio::InterestCoverage => "Interest coverage",
            Ratio::PriceToEarnings => "P/E",
            Ratio::PriceToBook => "P/B",
            Ratio::EnterpriseValue => "Enterprise value",
            Ratio::EvToEbit => "EV / EBIT",
        }
    }

    /// Whether this ratio needs a market snapshot in addition to the
    /// statement figures.
    #[must_use]
    pub fn requires_snapshot(self) -> bool {
        matches!(
            self,
            Ratio::PriceToEarnings | Ratio::PriceToBook | Ratio::EnterpriseValue | Ratio::EvToEbit
        )
    }

    /// Renders a raw ratio value the way the tearsheet shows it: margins
    /// as percent, multiples with an `x` suffix, monetary figures plain.
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        match self {
            Ratio::ReturnOnEquity | Ratio::NetMargin | Ratio::EbitMargin => {
                format!("{:.2}%", value * 100.0)
            }
            Ratio::NetDebt | Ratio::EnterpriseValue => format!("{:.2}", value),
            _ => format!("{:.2}x", value),
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// RATIO SETS
// ============================================================================

/// An ordered, duplicate-free selection of ratios.
///
/// The set's order is the report's order. Presets cover the common screens;
/// [`RatioSet::custom`] builds any other selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioSet {
    ratios: Vec<Ratio>,
}

impl RatioSet {
    /// Builds a set from an explicit selection, dropping duplicates while
    /// keeping the first occurrence's position.
    #[must_use]
    pub fn custom(selection: impl IntoIterator<Item = Ratio>) -> Self {
        let mut ratios = Vec::new();
        for ratio in selection {
            if !ratios.contains(&ratio) {
                ratios.push(ratio);
            }
        }
        Self { ratios }
    }

    /// Profitability screen: returns, margins, and turnover.
    #[must_use]
    pub fn profitability() -> Self {
        Self::custom([
            Ratio::ReturnOnEquity,
            Ratio::NetMargin,
            Ratio::EbitMargin,
            Ratio::AssetTurnover,
        ])
    }

    /// Leverage screen: balance-sheet structure and debt service.
    #[must_use]
    pub fn leverage() -> Self {
        Self::custom([
            Ratio::FinancialLeverage,
            Ratio::NetDebt,
            Ratio::NetDebtToEbit,
            Ratio::InterestCoverage,
        ])
    }

    /// Valuation screen: market multiples.
    #[must_use]
    pub fn valuation() -> Self {
        Self::custom([
            Ratio::PriceToEarnings,
            Ratio::PriceToBook,
            Ratio::EnterpriseValue,
            Ratio::EvToEbit,
        ])
    }

    /// Every supported ratio in canonical order.
    #[must_use]
    pub fn full() -> Self {
        Self::custom(Ratio::ALL)
    }

    /// Whether the set includes `ratio`.
    #[must_use]
    pub fn contains(&self, ratio: Ratio) -> bool {
        self.ratios.contains(&ratio)
    }

    /// Iterates the set in report order.
    pub fn iter(&self) -> impl Iterator<Item = Ratio> + '_ {
        self.ratios.iter().copied()
    }

    /// The set as a slice, in report order.
    #[must_use]
    pub fn as_slice(&self) -> &[Ratio] {
        &self.ratios
    }

    /// Number of ratios in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}

impl Default for RatioSet {
    fn default() -> Self {
        Self::full()
    }
}

// ============================================================================
// CALCULATOR
// ============================================================================

/// Evaluates a [`RatioSet`] against one company-period.
///
/// The calculator itself is stateless and cheap to clone; build one per
/// screen and reuse it across tickers.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use intrinsic_core::{FinancialPeriod, Ticker};
/// use intrinsic_metrics::{MetricsCalculator, Ratio, RatioSet};
///
/// let mut period = FinancialPeriod::new(
///     Ticker::new("ACME")?,
///     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
/// );
/// period.revenue = 1000.0;
/// period.net_income = 120.0;
///
/// let calculator = MetricsCalculator::new(RatioSet::profitability());
/// let report = calculator.evaluate(&period, None);
/// assert_eq!(report.get(Ratio::NetMargin), Some(0.12));
/// // No assets on file, so turnover is not computable.
/// assert_eq!(report.get(Ratio::AssetTurnover), None);
/// # Ok::<(), intrinsic_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsCalculator {
    ratios: RatioSet,
}

impl MetricsCalculator {
    /// Creates a calculator for the given ratio set.
    #[must_use]
    pub fn new(ratios: RatioSet) -> Self {
        Self { ratios }
    }

    /// The ratio set this calculator evaluates.
    #[must_use]
    pub fn ratios(&self) -> &RatioSet {
        &self.ratios
    }

    /// Evaluates the ratio set against one period and, optionally, a market
    /// snapshot.
    ///
    /// Without a snapshot the market multiples stay in the report as
    /// not-computable cells; the statement ratios are unaffected.
    #[must_use]
    pub fn evaluate(
        &self,
        period: &FinancialPeriod,
        snapshot: Option<&MarketSnapshot>,
    ) -> MetricsReport {
        let values = self
            .ratios
            .iter()
            .map(|ratio| (ratio, compute(ratio, period, snapshot)))
            .collect();
        MetricsReport {
            ticker: period.ticker.clone(),
            period_end: period.period_end,
            values,
        }
    }
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new(RatioSet::full())
    }
}

fn compute(ratio: Ratio, period: &FinancialPeriod, snapshot: Option<&MarketSnapshot>) -> Option<f64> {
    match ratio {
        Ratio::ReturnOnEquity => ratios::return_on_equity(period),
        Ratio::NetMargin => ratios::net_margin(period),
        Ratio::EbitMargin => ratios::ebit_margin(period),
        Ratio::AssetTurnover => ratios::asset_turnover(period),
        Ratio::FinancialLeverage => ratios::financial_leverage(period),
        Ratio::NetDebt => Some(ratios::net_debt(period)),
        Ratio::NetDebtToEbit => ratios::net_debt_to_ebit(period),
        Ratio::InterestCoverage => ratios::interest_coverage(period),
        Ratio::PriceToEarnings => snapshot.and_then(|s| ratios::price_to_earnings(period, s)),
        Ratio::PriceToBook => snapshot.and_then(|s| ratios::price_to_book(period, s)),
        Ratio::EnterpriseValue => snapshot.map(ratios::enterprise_value),
        Ratio::EvToEbit => snapshot.and_then(|s| ratios::ev_to_ebit(period, s)),
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// The evaluated ratios for one company-period.
///
/// Cell order follows the calculator's ratio set. A `None` cell means the
/// ratio's guard rejected the inputs (or its snapshot was absent), which is
/// a finding in itself and stays visible in the rendered tearsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Company the report describes.
    pub ticker: Ticker,
    /// Fiscal period end the statement figures are from.
    pub period_end: NaiveDate,
    /// `(ratio, value)` cells in ratio-set order.
    pub values: Vec<(Ratio, Option<f64>)>,
}

impl MetricsReport {
    /// Returns the computed value for `ratio`.
    ///
    /// `None` covers both "not in this report's set" and "guard rejected
    /// the inputs"; use [`MetricsReport::contains`] to tell them apart.
    #[must_use]
    pub fn get(&self, ratio: Ratio) -> Option<f64> {
        self.values
            .iter()
            .find(|(r, _)| *r == ratio)
            .and_then(|(_, v)| *v)
    }

    /// Whether the report's set included `ratio` at all.
    #[must_use]
    pub fn contains(&self, ratio: Ratio) -> bool {
        self.values.iter().any(|(r, _)| *r == ratio)
    }

    /// Number of cells (computed or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the report has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of cells whose guard passed.
    #[must_use]
    pub fn computed_count(&self) -> usize {
        self.values.iter().filter(|(_, v)| v.is_some()).count()
    }

    /// Iterates `(ratio, value)` cells in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Ratio, Option<f64>)> + '_ {
        self.values.iter().copied()
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "================================================================"
        )?;
        writeln!(f, " METRICS  {}  {}", self.ticker, self.period_end)?;
        writeln!(
            f,
            "================================================================"
        )?;
        for (ratio, value) in &self.values {
            let rendered = match value {
                Some(v) => ratio.format_value(*v),
                None => "n/a".to_string(),
            };
            writeln!(f, "   {:<22}{:>14}", ratio.label(), rendered)?;
        }
        writeln!(
            f,
            "----------------------------------------------------------------"
        )?;
        writeln!(
            f,
            "   {:<22}{:>14}",
            "Computed",
            format!("{} of {}", self.computed_count(), self.len())
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_period() -> FinancialPeriod {
        let mut period = FinancialPeriod::new(
            Ticker::new("TEST").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        );
        period.revenue = 1000.0;
        period.net_income = 120.0;
        period.ebit = 200.0;
        period.total_assets = 2000.0;
        period.equity = 800.0;
        period.cash = 150.0;
        period.long_term_debt = 400.0;
        period.interest_expense = -40.0;
        period
    }

    fn sample_snapshot() -> MarketSnapshot {
        let mut snapshot = MarketSnapshot::new(Ticker::new("TEST").unwrap());
        snapshot.market_cap = 2400.0;
        snapshot.total_debt = 500.0;
        snapshot.total_cash = 150.0;
        snapshot.current_price = 24.0;
        snapshot.shares_outstanding = 100.0;
        snapshot
    }

    #[test]
    fn test_presets_partition_the_full_set() {
        let mut combined: Vec<Ratio> = Vec::new();
        combined.extend(RatioSet::profitability().iter());
        combined.extend(RatioSet::leverage().iter());
        combined.extend(RatioSet::valuation().iter());
        assert_eq!(combined, Ratio::ALL.to_vec());
        assert_eq!(RatioSet::full().as_slice(), &Ratio::ALL);
    }

    #[test]
    fn test_custom_set_dedups_keeping_first_position() {
        let set = RatioSet::custom([
            Ratio::NetDebt,
            Ratio::ReturnOnEquity,
            Ratio::NetDebt,
            Ratio::EvToEbit,
        ]);
        assert_eq!(
            set.as_slice(),
            &[Ratio::NetDebt, Ratio::ReturnOnEquity, Ratio::EvToEbit]
        );
        assert_eq!(set.len(), 3);
        assert!(set.contains(Ratio::EvToEbit));
        assert!(!set.contains(Ratio::NetMargin));
    }

    #[test]
    fn test_report_preserves_set_order() {
        let set = RatioSet::custom([Ratio::EvToEbit, Ratio::NetMargin, Ratio::NetDebt]);
        let calculator = MetricsCalculator::new(set);
        let report = calculator.evaluate(&sample_period(), Some(&sample_snapshot()));
        let order: Vec<Ratio> = report.iter().map(|(r, _)| r).collect();
        assert_eq!(order, vec![Ratio::EvToEbit, Ratio::NetMargin, Ratio::NetDebt]);
    }

    #[test]
    fn test_full_report_with_snapshot() {
        let calculator = MetricsCalculator::default();
        let report = calculator.evaluate(&sample_period(), Some(&sample_snapshot()));
        assert_eq!(report.len(), 12);
        assert_eq!(report.computed_count(), 12);
        assert_relative_eq!(report.get(Ratio::ReturnOnEquity).unwrap(), 0.15);
        assert_relative_eq!(report.get(Ratio::EnterpriseValue).unwrap(), 2750.0);
        assert_relative_eq!(report.get(Ratio::EvToEbit).unwrap(), 13.75);
    }

    #[test]
    fn test_market_ratios_blank_without_snapshot() {
        let calculator = MetricsCalculator::default();
        let report = calculator.evaluate(&sample_period(), None);
        assert_eq!(report.len(), 12);
        assert_eq!(report.computed_count(), 8);
        for ratio in Ratio::ALL {
            if ratio.requires_snapshot() {
                assert!(report.contains(ratio));
                assert_eq!(report.get(ratio), None);
            } else {
                assert!(report.get(ratio).is_some(), "{} should compute", ratio);
            }
        }
    }

    #[test]
    fn test_get_distinguishes_absent_from_rejected() {
        let calculator = MetricsCalculator::new(RatioSet::profitability());
        let report = calculator.evaluate(&sample_period(), None);
        // Not in the set at all.
        assert!(!report.contains(Ratio::NetDebt));
        assert_eq!(report.get(Ratio::NetDebt), None);
        // In the set and computed.
        assert!(report.contains(Ratio::NetMargin));
        assert_relative_eq!(report.get(Ratio::NetMargin).unwrap(), 0.12);
    }

    #[test]
    fn test_display_tearsheet() {
        let calculator = MetricsCalculator::default();
        let report = calculator.evaluate(&sample_period(), None);
        let rendered = report.to_string();
        assert!(rendered.contains("METRICS  TEST  2024-12-31"));
        assert!(rendered.contains("Return on equity"));
        assert!(rendered.contains("15.00%"));
        assert!(rendered.contains("n/a"));
        assert!(rendered.contains("8 of 12"));
    }

    #[test]
    fn test_format_value_styles() {
        assert_eq!(Ratio::ReturnOnEquity.format_value(0.15), "15.00%");
        assert_eq!(Ratio::InterestCoverage.format_value(5.0), "5.00x");
        assert_eq!(Ratio::NetDebt.format_value(250.0), "250.00");
    }

    #[test]
    fn test_ratio_serde_names() {
        let json = serde_json::to_string(&Ratio::EvToEbit).unwrap();
        assert_eq!(json, "\"ev_to_ebit\"");
        let back: Ratio = serde_json::from_str("\"price_to_earnings\"").unwrap();
        assert_eq!(back, Ratio::PriceToEarnings);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let calculator = MetricsCalculator::new(RatioSet::leverage());
        let report = calculator.evaluate(&sample_period(), None);
        let json = serde_json::to_string(&report).unwrap();
        let back: MetricsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
