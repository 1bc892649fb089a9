//! End-to-end tests across the metrics crate's public surface: one
//! company analyzed the way a screen would, from statement history to
//! ratio report, DuPont trend, DCF target, and peer table.

use approx::assert_relative_eq;
use chrono::{Datelike, NaiveDate};
use intrinsic_core::{FinancialPeriod, MarketSnapshot, Ticker, ValuationAssumptions};
use intrinsic_metrics::prelude::*;

fn acme_period(year: i32) -> FinancialPeriod {
    let mut period = FinancialPeriod::new(
        Ticker::new("ACME").unwrap(),
        NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
    );
    // Steadily growing, consistently profitable figures.
    let step = f64::from(year - 2022);
    period.revenue = 1000.0 + 150.0 * step;
    period.net_income = 80.0 + 30.0 * step;
    period.ebit = 150.0 + 40.0 * step;
    period.total_assets = 1800.0 + 150.0 * step;
    period.equity = 700.0 + 85.0 * step;
    period.cash = 100.0 + 40.0 * step;
    period.long_term_debt = 400.0 - 10.0 * step;
    period.interest_expense = -30.0 + step;
    period.operating_cash_flow = 200.0 + 60.0 * step;
    period.capital_expenditure = -50.0 - 10.0 * step;
    period
}

fn acme_snapshot() -> MarketSnapshot {
    let mut snapshot = MarketSnapshot::new(Ticker::new("ACME").unwrap());
    snapshot.market_cap = 2800.0;
    snapshot.shares_outstanding = 200.0;
    snapshot.current_price = 14.0;
    snapshot.total_debt = 420.0;
    snapshot.total_cash = 180.0;
    snapshot
}

#[test]
fn test_full_screen_workflow() {
    let latest = acme_period(2024);
    let snapshot = acme_snapshot();

    let calculator = MetricsCalculator::new(RatioSet::full());
    let report = calculator.evaluate(&latest, Some(&snapshot));

    assert_eq!(report.len(), 12);
    assert_eq!(report.computed_count(), 12);
    assert_relative_eq!(
        report.get(Ratio::ReturnOnEquity).unwrap(),
        140.0 / 870.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(report.get(Ratio::PriceToEarnings).unwrap(), 20.0);
    assert_relative_eq!(
        report.get(Ratio::EnterpriseValue).unwrap(),
        2800.0 + 420.0 - 180.0
    );

    let rendered = report.to_string();
    assert!(rendered.contains("METRICS  ACME  2024-12-31"));
    assert!(rendered.contains("12 of 12"));
}

#[test]
fn test_dupont_trend_is_chronological_and_consistent() {
    // Deliberately shuffled input.
    let history = vec![acme_period(2024), acme_period(2022), acme_period(2023)];
    let series = dupont_series(&history);

    let years: Vec<i32> = series.iter().map(|p| p.period_end.year()).collect();
    assert_eq!(years, vec![2022, 2023, 2024]);

    for point in &series {
        let implied = point.implied_roe().unwrap();
        let reported = point.reported_roe.unwrap();
        assert_relative_eq!(implied, reported, epsilon = 1e-12);
    }

    // ROE improves across the window in this scenario.
    assert!(series[2].reported_roe.unwrap() > series[0].reported_roe.unwrap());
}

#[test]
fn test_dcf_target_from_latest_period() {
    let latest = acme_period(2024);
    assert_relative_eq!(latest.free_cash_flow(), 250.0);

    let valuation = dcf_from_period(&latest, &acme_snapshot(), &ValuationAssumptions::default())
        .unwrap();

    // Linear in the base flow: 2.5x the fcf=100 reference valuation.
    assert_relative_eq!(valuation.enterprise_value, 3615.5297, epsilon = 1e-3);
    assert_relative_eq!(valuation.equity_value, 3375.5297, epsilon = 1e-3);
    assert_relative_eq!(valuation.target_price, 16.87765, epsilon = 1e-4);
    assert_relative_eq!(valuation.upside.unwrap(), 0.205546, epsilon = 1e-5);

    let rendered = valuation.to_string();
    assert!(rendered.contains("DCF VALUATION"));
    assert!(rendered.contains("Target price:"));
}

#[test]
fn test_peer_table_serializes_with_snake_case_ratio_names() {
    let calculator = MetricsCalculator::new(RatioSet::valuation());
    let peers: Vec<(FinancialPeriod, Option<MarketSnapshot>)> = vec![
        (acme_period(2024), Some(acme_snapshot())),
        (acme_period(2023), None),
    ];
    let rows = evaluate_peer_group(&calculator, &peers);
    assert_eq!(rows.len(), 2);

    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(json[0]["ticker"], "ACME");
    assert_eq!(json[0]["report"]["values"][0][0], "price_to_earnings");
    // The quoteless peer keeps its market cells as explicit nulls.
    assert!(json[1]["report"]["values"][0][1].is_null());
}

#[test]
fn test_profitability_screen_ignores_snapshot() {
    let calculator = MetricsCalculator::new(RatioSet::profitability());
    let with_quote = calculator.evaluate(&acme_period(2024), Some(&acme_snapshot()));
    let without_quote = calculator.evaluate(&acme_period(2024), None);
    assert_eq!(with_quote, without_quote);
    assert_eq!(with_quote.computed_count(), 4);
}
