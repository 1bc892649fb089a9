//! Peer-group comparison.
//!
//! Runs one calculator across a set of companies so every row of the
//! comparison table was produced by the same ratio definitions and guards.
//! Each peer is independent of the others, so the map parallelizes behind
//! the `parallel` feature without changing any row.

use serde::{Deserialize, Serialize};

use intrinsic_core::{FinancialPeriod, MarketSnapshot, Ticker};

use crate::calculator::{MetricsCalculator, MetricsReport};

/// One row of a peer comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerMetrics {
    /// Company the row describes.
    pub ticker: Ticker,
    /// The evaluated ratio report for that company's period.
    pub report: MetricsReport,
}

/// Evaluates every peer with the same calculator, in parallel.
///
/// Row order follows input order, so downstream joins against the input
/// slice stay positional.
#[cfg(feature = "parallel")]
#[must_use]
pub fn evaluate_peer_group(
    calculator: &MetricsCalculator,
    peers: &[(FinancialPeriod, Option<MarketSnapshot>)],
) -> Vec<PeerMetrics> {
    use rayon::prelude::*;

    peers
        .par_iter()
        .map(|(period, snapshot)| PeerMetrics {
            ticker: period.ticker.clone(),
            report: calculator.evaluate(period, snapshot.as_ref()),
        })
        .collect()
}

/// Evaluates every peer with the same calculator, sequentially.
///
/// Row order follows input order, so downstream joins against the input
/// slice stay positional.
#[cfg(not(feature = "parallel"))]
#[must_use]
pub fn evaluate_peer_group(
    calculator: &MetricsCalculator,
    peers: &[(FinancialPeriod, Option<MarketSnapshot>)],
) -> Vec<PeerMetrics> {
    peers
        .iter()
        .map(|(period, snapshot)| PeerMetrics {
            ticker: period.ticker.clone(),
            report: calculator.evaluate(period, snapshot.as_ref()),
        })
        .collect()
}
