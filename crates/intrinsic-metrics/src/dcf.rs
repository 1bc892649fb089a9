//! Simplified discounted cash flow valuation.
//!
//! A two-stage model: five years of explicit free-cash-flow projection at
//! a constant growth rate, then a Gordon terminal value on the final
//! projected flow. Everything is discounted at one rate, enterprise value
//! is bridged to equity through net debt, and the result lands as a
//! per-share target.
//!
//! The model's claim is comparability, not precision: the same mechanical
//! assumptions applied to every ticker in a screen.

use std::fmt;

use serde::{Deserialize, Serialize};

use intrinsic_core::{FinancialPeriod, MarketSnapshot, ValuationAssumptions};

use crate::error::{MetricsError, MetricsResult};

/// Number of explicitly projected years before the terminal value.
pub const PROJECTION_YEARS: usize = 5;

/// The full output of one DCF run.
///
/// Intermediate figures are kept so a report can show the build-up, not
/// just the final target price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcfValuation {
    /// Starting free cash flow the projection grows from.
    pub base_fcf: f64,
    /// Projected flows for years 1 through [`PROJECTION_YEARS`], undiscounted.
    pub projected: [f64; PROJECTION_YEARS],
    /// Gordon terminal value at the end of the projection window, undiscounted.
    pub terminal_value: f64,
    /// Sum of the discounted projected flows.
    pub present_value_of_flows: f64,
    /// Discounted terminal value.
    pub present_value_of_terminal: f64,
    /// Present value of the whole flow stream.
    pub enterprise_value: f64,
    /// Enterprise value less the snapshot's net debt.
    pub equity_value: f64,
    /// Equity value per share outstanding.
    pub target_price: f64,
    /// `target_price / current_price - 1`, or `None` when the snapshot has
    /// no positive quote to compare against.
    pub upside: Option<f64>,
    /// The assumptions this valuation was run under.
    pub assumptions: ValuationAssumptions,
}

impl fmt::Display for DcfValuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "================================================================"
        )?;
        writeln!(f, " DCF VALUATION")?;
        writeln!(
            f,
            "================================================================"
        )?;
        writeln!(f, " ASSUMPTIONS")?;
        writeln!(
            f,
            "   Growth (5y):        {:>12.2}%",
            self.assumptions.growth_rate_5y * 100.0
        )?;
        writeln!(
            f,
            "   Perpetuity growth:  {:>12.2}%",
            self.assumptions.perpetuity_growth_rate * 100.0
        )?;
        writeln!(
            f,
            "   Discount rate:      {:>12.2}%",
            self.assumptions.discount_rate * 100.0
        )?;
        writeln!(
            f,
            "----------------------------------------------------------------"
        )?;
        writeln!(f, " PROJECTED FREE CASH FLOW")?;
        writeln!(f, "   Base flow:          {:>13.2}", self.base_fcf)?;
        for (i, flow) in self.projected.iter().enumerate() {
            writeln!(f, "   Year {}:             {:>13.2}", i + 1, flow)?;
        }
        writeln!(f, "   Terminal value:     {:>13.2}", self.terminal_value)?;
        writeln!(
            f,
            "----------------------------------------------------------------"
        )?;
        writeln!(f, " VALUATION")?;
        writeln!(
            f,
            "   PV of flows:        {:>13.2}",
            self.present_value_of_flows
        )?;
        writeln!(
            f,
            "   PV of terminal:     {:>13.2}",
            self.present_value_of_terminal
        )?;
        writeln!(f, "   Enterprise value:   {:>13.2}", self.enterprise_value)?;
        writeln!(f, "   Equity value:       {:>13.2}", self.equity_value)?;
        writeln!(f, "   Target price:       {:>13.2}", self.target_price)?;
        match self.upside {
            Some(upside) => writeln!(f, "   Upside:             {:>12.2}%", upside * 100.0)?,
            None => writeln!(f, "   Upside:             {:>13}", "n/a")?,
        }
        Ok(())
    }
}

/// Runs the two-stage DCF from an explicit base flow.
///
/// Steps, in order:
///
/// 1. validate the assumptions (discount rate must exceed perpetuity growth)
/// 2. project `base_fcf * (1 + g)^t` for `t = 1..=5`
/// 3. terminal value on the year-5 flow via Gordon growth
/// 4. discount flows and terminal at the discount rate
/// 5. bridge to equity through the snapshot's net debt
/// 6. divide by shares outstanding for the target price
/// 7. compare against the current quote when one exists
///
/// # Errors
///
/// - [`MetricsError::Core`] when the assumptions fail validation
/// - [`MetricsError::NonPositiveBaseFlow`] when `base_fcf <= 0`; growing a
///   negative flow would compound the burn into a meaningless target
/// - [`MetricsError::NonPositiveShares`] when the snapshot has no share
///   count to spread the equity value over
pub fn dcf_valuation(
    base_fcf: f64,
    snapshot: &MarketSnapshot,
    assumptions: &ValuationAssumptions,
) -> MetricsResult<DcfValuation> {
    assumptions.validate()?;
    if base_fcf <= 0.0 {
        return Err(MetricsError::non_positive_base_flow(base_fcf));
    }
    if snapshot.shares_outstanding <= 0.0 {
        return Err(MetricsError::non_positive_shares(snapshot.shares_outstanding));
    }

    let growth = 1.0 + assumptions.growth_rate_5y;
    let discount = 1.0 + assumptions.discount_rate;

    let mut projected = [0.0; PROJECTION_YEARS];
    let mut present_value_of_flows = 0.0;
    for (index, flow) in projected.iter_mut().enumerate() {
        let year = (index + 1) as i32;
        *flow = base_fcf * growth.powi(year);
        present_value_of_flows += *flow / discount.powi(year);
    }

    let final_flow = projected[PROJECTION_YEARS - 1];
    let terminal_value = final_flow * (1.0 + assumptions.perpetuity_growth_rate)
        / (assumptions.discount_rate - assumptions.perpetuity_growth_rate);
    let present_value_of_terminal = terminal_value / discount.powi(PROJECTION_YEARS as i32);

    let enterprise_value = present_value_of_flows + present_value_of_terminal;
    let equity_value = enterprise_value - snapshot.net_debt();
    let target_price = equity_value / snapshot.shares_outstanding;
    let upside = if snapshot.current_price > 0.0 {
        Some(target_price / snapshot.current_price - 1.0)
    } else {
        None
    };

    Ok(DcfValuation {
        base_fcf,
        projected,
        terminal_value,
        present_value_of_flows,
        present_value_of_terminal,
        enterprise_value,
        equity_value,
        target_price,
        upside,
        assumptions: *assumptions,
    })
}

/// Runs the DCF from a statement period, using its free cash flow as the
/// base.
///
/// # Errors
///
/// Same conditions as [`dcf_valuation`]; a period whose operating cash flow
/// does not cover capital expenditure rejects with
/// [`MetricsError::NonPositiveBaseFlow`].
pub fn dcf_from_period(
    period: &FinancialPeriod,
    snapshot: &MarketSnapshot,
    assumptions: &ValuationAssumptions,
) -> MetricsResult<DcfValuation> {
    dcf_valuation(period.free_cash_flow(), snapshot, assumptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use intrinsic_core::Ticker;

    fn snapshot(shares: f64, debt: f64, cash: f64, price: f64) -> MarketSnapshot {
        let mut snapshot = MarketSnapshot::new(Ticker::new("DCF").unwrap());
        snapshot.shares_outstanding = shares;
        snapshot.total_debt = debt;
        snapshot.total_cash = cash;
        snapshot.current_price = price;
        snapshot.market_cap = shares * price;
        snapshot
    }

    fn standard_assumptions() -> ValuationAssumptions {
        ValuationAssumptions::new(0.05, 0.02, 0.10)
    }

    #[test]
    fn test_projected_flows_regression() {
        let valuation =
            dcf_valuation(100.0, &snapshot(1000.0, 500.0, 100.0, 50.0), &standard_assumptions())
                .unwrap();

        let expected = [105.0, 110.25, 115.7625, 121.550625, 127.62815625];
        for (flow, want) in valuation.projected.iter().zip(expected) {
            assert_relative_eq!(*flow, want, epsilon = 1e-9);
        }
        // The screen-rounded figures everyone quotes.
        let rounded: Vec<f64> = valuation
            .projected
            .iter()
            .map(|flow| (flow * 100.0).round() / 100.0)
            .collect();
        assert_eq!(rounded, vec![105.0, 110.25, 115.76, 121.55, 127.63]);
    }

    #[test]
    fn test_terminal_and_bridge_regression() {
        let valuation =
            dcf_valuation(100.0, &snapshot(1000.0, 500.0, 100.0, 50.0), &standard_assumptions())
                .unwrap();

        // 127.62815625 * 1.02 / 0.08
        assert_relative_eq!(valuation.terminal_value, 1627.2589921875, epsilon = 1e-6);
        assert_relative_eq!(
            valuation.present_value_of_flows,
            435.812065,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            valuation.present_value_of_terminal,
            1010.399806,
            epsilon = 1e-4
        );
        assert_relative_eq!(valuation.enterprise_value, 1446.211872, epsilon = 1e-4);
        // Net debt 400 off the EV, spread over 1000 shares.
        assert_relative_eq!(valuation.equity_value, 1046.211872, epsilon = 1e-4);
        assert_relative_eq!(valuation.target_price, 1.046212, epsilon = 1e-6);
        assert_relative_eq!(valuation.upside.unwrap(), -0.979076, epsilon = 1e-6);
    }

    #[test]
    fn test_pv_components_sum_to_enterprise_value() {
        let valuation =
            dcf_valuation(80.0, &snapshot(500.0, 0.0, 0.0, 2.0), &standard_assumptions()).unwrap();
        assert_relative_eq!(
            valuation.enterprise_value,
            valuation.present_value_of_flows + valuation.present_value_of_terminal,
            epsilon = 1e-9
        );
        // No net debt, so equity equals enterprise value.
        assert_relative_eq!(valuation.equity_value, valuation.enterprise_value);
    }

    #[test]
    fn test_rejects_non_positive_base_flow() {
        let snap = snapshot(1000.0, 0.0, 0.0, 10.0);
        let err = dcf_valuation(0.0, &snap, &standard_assumptions()).unwrap_err();
        assert_eq!(err, MetricsError::NonPositiveBaseFlow { base_fcf: 0.0 });
        assert!(dcf_valuation(-25.0, &snap, &standard_assumptions()).is_err());
    }

    #[test]
    fn test_rejects_non_positive_shares() {
        let snap = snapshot(0.0, 0.0, 0.0, 10.0);
        let err = dcf_valuation(100.0, &snap, &standard_assumptions()).unwrap_err();
        assert_eq!(err, MetricsError::NonPositiveShares { shares: 0.0 });
    }

    #[test]
    fn test_rejects_discount_rate_at_or_below_perpetuity_growth() {
        let snap = snapshot(1000.0, 0.0, 0.0, 10.0);
        let equal = ValuationAssumptions::new(0.05, 0.10, 0.10);
        assert!(matches!(
            dcf_valuation(100.0, &snap, &equal),
            Err(MetricsError::Core(_))
        ));
        let inverted = ValuationAssumptions::new(0.05, 0.12, 0.10);
        assert!(dcf_valuation(100.0, &snap, &inverted).is_err());
    }

    #[test]
    fn test_upside_is_none_without_a_quote() {
        let valuation =
            dcf_valuation(100.0, &snapshot(1000.0, 0.0, 0.0, 0.0), &standard_assumptions())
                .unwrap();
        assert_eq!(valuation.upside, None);
        // The target itself is still priced.
        assert!(valuation.target_price > 0.0);
    }

    #[test]
    fn test_cash_heavy_snapshot_lifts_equity_above_enterprise() {
        let valuation =
            dcf_valuation(100.0, &snapshot(1000.0, 100.0, 600.0, 1.0), &standard_assumptions())
                .unwrap();
        assert!(valuation.equity_value > valuation.enterprise_value);
        assert_relative_eq!(
            valuation.equity_value - valuation.enterprise_value,
            500.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_dcf_from_period_uses_free_cash_flow() {
        let mut period = FinancialPeriod::new(
            Ticker::new("DCF").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        );
        period.operating_cash_flow = 500.0;
        period.capital_expenditure = -120.0;
        let snap = snapshot(1000.0, 0.0, 0.0, 10.0);

        let from_period = dcf_from_period(&period, &snap, &standard_assumptions()).unwrap();
        let direct = dcf_valuation(380.0, &snap, &standard_assumptions()).unwrap();
        assert_eq!(from_period, direct);

        // Capex above operating cash flow leaves nothing to project.
        period.capital_expenditure = -600.0;
        assert!(matches!(
            dcf_from_period(&period, &snap, &standard_assumptions()),
            Err(MetricsError::NonPositiveBaseFlow { .. })
        ));
    }

    #[test]
    fn test_display_tearsheet() {
        let valuation =
            dcf_valuation(100.0, &snapshot(1000.0, 500.0, 100.0, 50.0), &standard_assumptions())
                .unwrap();
        let rendered = valuation.to_string();
        assert!(rendered.contains("DCF VALUATION"));
        assert!(rendered.contains("Discount rate:"));
        assert!(rendered.contains("10.00%"));
        assert!(rendered.contains("Terminal value:"));
        assert!(rendered.contains("1627.26"));
        assert!(rendered.contains("Upside:"));
    }

    #[test]
    fn test_serde_round_trip() {
        let valuation =
            dcf_valuation(100.0, &snapshot(1000.0, 500.0, 100.0, 50.0), &standard_assumptions())
                .unwrap();
        let json = serde_json::to_string(&valuation).unwrap();
        let back: DcfValuation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, valuation);
    }
}
