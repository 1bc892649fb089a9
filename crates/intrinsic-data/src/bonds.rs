//! CSV-backed bond listing source.
//!
//! Listing files quote a maturity date rather than a remaining life, so
//! the loader converts each date to a year fraction against the source's
//! as-of date using ACT/365. Coupon rates are decimals (`0.05` = 5%).
//! Face value and payment frequency are optional columns falling back to
//! the listing conventions; rows that fail to parse, or describe an
//! instrument the solver could not price, are logged and skipped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use dashmap::DashMap;
use serde::Deserialize;
use tracing::{debug, info, warn};

use intrinsic_bonds::instrument::BondInstrument;
use intrinsic_core::Ticker;

use crate::error::DataResult;
use crate::sources::{BondListing, BondSource};

/// CSV record for bond listings.
#[derive(Debug, Deserialize)]
struct BondRecord {
    ticker: String,
    #[serde(default)]
    description: Option<String>,
    coupon_rate: f64,
    maturity_date: NaiveDate,
    #[serde(default)]
    face_value: Option<f64>,
    #[serde(default)]
    payments_per_year: Option<u32>,
    price: f64,
}

/// CSV-based bond source.
///
/// Listings per issuer come back sorted by remaining life, shortest first.
pub struct CsvBondSource {
    file_path: PathBuf,
    as_of: NaiveDate,
    listings: DashMap<Ticker, Vec<BondListing>>,
}

impl CsvBondSource {
    /// Creates a source over a listing file, dating every maturity against
    /// `as_of`, and loads it. A missing file loads as an empty source.
    pub fn new(file_path: impl AsRef<Path>, as_of: NaiveDate) -> DataResult<Self> {
        let source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            as_of,
            listings: DashMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// The date maturities are measured from.
    #[must_use]
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Reloads the file, replacing previously loaded listings.
    pub fn reload(&self) -> DataResult<()> {
        self.listings.clear();
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no bond file, loading empty");
            return Ok(());
        }

        let mut reader = csv::Reader::from_path(&self.file_path)?;
        let mut grouped: HashMap<Ticker, Vec<BondListing>> = HashMap::new();
        let mut loaded = 0usize;
        for (row, result) in reader.deserialize().enumerate() {
            let record: BondRecord = match result {
                Ok(record) => record,
                Err(err) => {
                    warn!(row = row + 2, error = %err, "skipping malformed bond row");
                    continue;
                }
            };
            let Some(listing) = self.build_listing(record, row) else {
                continue;
            };
            loaded += 1;
            grouped.entry(listing.ticker.clone()).or_default().push(listing);
        }

        for (ticker, mut listings) in grouped {
            listings.sort_by(|a, b| {
                a.instrument
                    .years_to_maturity()
                    .total_cmp(&b.instrument.years_to_maturity())
            });
            self.listings.insert(ticker, listings);
        }
        info!(
            listings = loaded,
            issuers = self.listings.len(),
            as_of = %self.as_of,
            path = %self.file_path.display(),
            "loaded bond listings"
        );
        Ok(())
    }

    fn build_listing(&self, record: BondRecord, row: usize) -> Option<BondListing> {
        let ticker = match Ticker::new(&record.ticker) {
            Ok(ticker) => ticker,
            Err(err) => {
                warn!(row = row + 2, error = %err, "skipping bond row");
                return None;
            }
        };

        let years = year_fraction(self.as_of, record.maturity_date);
        let mut builder = BondInstrument::builder()
            .annual_coupon_rate(record.coupon_rate)
            .years_to_maturity(years)
            .observed_price(record.price);
        if let Some(face_value) = record.face_value {
            builder = builder.face_value(face_value);
        }
        if let Some(payments) = record.payments_per_year {
            builder = builder.payments_per_year(payments);
        }
        let instrument = match builder.build() {
            Ok(instrument) => instrument,
            Err(err) => {
                warn!(row = row + 2, ticker = %ticker, error = %err, "skipping bond listing");
                return None;
            }
        };

        let description = record.description.unwrap_or_else(|| {
            format!(
                "{:.2}% due {}",
                record.coupon_rate * 100.0,
                record.maturity_date
            )
        });
        Some(BondListing {
            ticker,
            description,
            instrument,
        })
    }
}

/// Years between two dates under ACT/365 Fixed. Negative once `maturity`
/// is in the past.
fn year_fraction(as_of: NaiveDate, maturity: NaiveDate) -> f64 {
    (maturity - as_of).num_days() as f64 / 365.0
}

impl BondSource for CsvBondSource {
    fn listings(&self, ticker: &Ticker) -> Vec<BondListing> {
        self.listings
            .get(ticker)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }
}
