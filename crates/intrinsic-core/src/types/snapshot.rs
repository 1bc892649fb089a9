//! Point-in-time market data for a ticker.

use serde::{Deserialize, Serialize};

use super::Ticker;

/// Market data for one ticker at evaluation time.
///
/// Sourced externally and treated as a read-only input to the valuation
/// formulas. Figures absent from the source default to `0.0`, matching the
/// statement-side convention; the multiple formulas guard their own
/// denominators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Company ticker.
    pub ticker: Ticker,
    /// Market capitalization.
    #[serde(default)]
    pub market_cap: f64,
    /// Shares outstanding.
    #[serde(default)]
    pub shares_outstanding: f64,
    /// Current share price.
    #[serde(default)]
    pub current_price: f64,
    /// Total debt.
    #[serde(default)]
    pub total_debt: f64,
    /// Total cash and equivalents.
    #[serde(default)]
    pub total_cash: f64,
}

impl MarketSnapshot {
    /// Creates a snapshot with every figure zeroed.
    #[must_use]
    pub fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            market_cap: 0.0,
            shares_outstanding: 0.0,
            current_price: 0.0,
            total_debt: 0.0,
            total_cash: 0.0,
        }
    }

    /// Net debt at the market-data level: total debt less total cash.
    ///
    /// Can be negative for cash-rich balance sheets.
    #[must_use]
    pub fn net_debt(&self) -> f64 {
        self.total_debt - self.total_cash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_debt() {
        let mut snapshot = MarketSnapshot::new(Ticker::from("TEST"));
        snapshot.total_debt = 500.0;
        snapshot.total_cash = 100.0;
        assert_eq!(snapshot.net_debt(), 400.0);
    }

    #[test]
    fn test_sparse_snapshot_deserializes_to_zero() {
        let json = r#"{"ticker": "TEST", "market_cap": 1200.0}"#;
        let snapshot: MarketSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.market_cap, 1200.0);
        assert_eq!(snapshot.current_price, 0.0);
        assert_eq!(snapshot.net_debt(), 0.0);
    }
}
