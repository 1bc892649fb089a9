//! CSV-backed market snapshot source.
//!
//! One row per ticker with the point-in-time figures the valuation side
//! consumes. Figures left blank default to `0.0` under the core zero-fill
//! convention; rows that fail to parse at all are logged and skipped.
//! When a ticker appears more than once the last row wins.

use std::path::{Path, PathBuf};

use dashmap::DashMap;
use serde::Deserialize;
use tracing::{debug, info, warn};

use intrinsic_core::{MarketSnapshot, Ticker};

use crate::error::DataResult;
use crate::sources::SnapshotSource;

/// CSV record for market snapshots.
#[derive(Debug, Deserialize)]
struct SnapshotRecord {
    ticker: String,
    #[serde(default)]
    market_cap: Option<f64>,
    #[serde(default)]
    shares_outstanding: Option<f64>,
    #[serde(default)]
    current_price: Option<f64>,
    #[serde(default)]
    total_debt: Option<f64>,
    #[serde(default)]
    total_cash: Option<f64>,
}

/// CSV-based snapshot source.
pub struct CsvSnapshotSource {
    file_path: PathBuf,
    snapshots: DashMap<Ticker, MarketSnapshot>,
}

impl CsvSnapshotSource {
    /// Creates a source over a snapshot file and loads it. A missing file
    /// loads as an empty source.
    pub fn new(file_path: impl AsRef<Path>) -> DataResult<Self> {
        let source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            snapshots: DashMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reloads the file, replacing previously loaded snapshots.
    pub fn reload(&self) -> DataResult<()> {
        self.snapshots.clear();
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no snapshot file, loading empty");
            return Ok(());
        }

        let mut reader = csv::Reader::from_path(&self.file_path)?;
        for (row, result) in reader.deserialize().enumerate() {
            let record: SnapshotRecord = match result {
                Ok(record) => record,
                Err(err) => {
                    warn!(row = row + 2, error = %err, "skipping malformed snapshot row");
                    continue;
                }
            };
            let ticker = match Ticker::new(&record.ticker) {
                Ok(ticker) => ticker,
                Err(err) => {
                    warn!(row = row + 2, error = %err, "skipping snapshot row");
                    continue;
                }
            };
            let snapshot = MarketSnapshot {
                ticker: ticker.clone(),
                market_cap: record.market_cap.unwrap_or(0.0),
                shares_outstanding: record.shares_outstanding.unwrap_or(0.0),
                current_price: record.current_price.unwrap_or(0.0),
                total_debt: record.total_debt.unwrap_or(0.0),
                total_cash: record.total_cash.unwrap_or(0.0),
            };
            self.snapshots.insert(ticker, snapshot);
        }
        info!(
            snapshots = self.snapshots.len(),
            path = %self.file_path.display(),
            "loaded market snapshots"
        );
        Ok(())
    }

    /// Number of loaded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether any snapshots are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SnapshotSource for CsvSnapshotSource {
    fn snapshot(&self, ticker: &Ticker) -> Option<MarketSnapshot> {
        self.snapshots.get(ticker).map(|entry| entry.clone())
    }
}
