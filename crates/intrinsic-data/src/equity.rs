//! CSV-backed equity source.
//!
//! Statement files come from spreadsheet exports whose headers follow the
//! upstream provider's spelling (`Total Revenue`, `Total Stockholder
//! Equity`, ...), which also drifts between provider versions. Rather than
//! requiring a fixed layout, the loader normalizes each header and maps it
//! through an alias table onto the [`FinancialPeriod`] fields; canonical
//! snake_case headers pass through the same table.
//!
//! Figures that are absent or unparseable become `0.0`, matching the core
//! zero-fill convention. Rows without a usable ticker or period key are
//! logged and skipped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::{debug, info, warn};

use intrinsic_core::{CompanyProfile, FinancialPeriod, Ticker};

use crate::error::{DataError, DataResult};
use crate::sources::EquitySource;

// =============================================================================
// STATEMENT HEADER ALIASES
// =============================================================================

/// A statement figure a CSV column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum StatementField {
    Revenue,
    Ebit,
    NetIncome,
    TotalAssets,
    TotalLiabilities,
    Equity,
    Cash,
    LongTermDebt,
    InterestExpense,
    OperatingCashFlow,
    CapitalExpenditure,
    InvestingCashFlow,
    FinancingCashFlow,
    WorkingCapital,
}

impl StatementField {
    fn apply(self, period: &mut FinancialPeriod, value: f64) {
        match self {
            StatementField::Revenue => period.revenue = value,
            StatementField::Ebit => period.ebit = value,
            StatementField::NetIncome => period.net_income = value,
            StatementField::TotalAssets => period.total_assets = value,
            StatementField::TotalLiabilities => period.total_liabilities = value,
            StatementField::Equity => period.equity = value,
            StatementField::Cash => period.cash = value,
            StatementField::LongTermDebt => period.long_term_debt = value,
            StatementField::InterestExpense => period.interest_expense = value,
            StatementField::OperatingCashFlow => period.operating_cash_flow = value,
            StatementField::CapitalExpenditure => period.capital_expenditure = value,
            StatementField::InvestingCashFlow => period.investing_cash_flow = value,
            StatementField::FinancingCashFlow => period.financing_cash_flow = value,
            StatementField::WorkingCapital => period.working_capital = value,
        }
    }
}

/// Normalized header -> field table. Keys are what [`normalize_header`]
/// produces for both the provider spellings and the canonical names.
static HEADER_ALIASES: Lazy<HashMap<&'static str, StatementField>> = Lazy::new(|| {
    use StatementField::*;

    let mut table = HashMap::new();
    let entries: [(&'static str, StatementField); 33] = [
        // Income statement
        ("total_revenue", Revenue),
        ("revenue", Revenue),
        ("ebit", Ebit),
        ("operating_income", Ebit),
        ("net_income", NetIncome),
        ("interest_expense", InterestExpense),
        ("interest_expense_non_operating", InterestExpense),
        // Balance sheet
        ("total_assets", TotalAssets),
        ("total_liab", TotalLiabilities),
        ("total_liabilities", TotalLiabilities),
        ("total_stockholder_equity", Equity),
        ("stockholders_equity", Equity),
        ("shareholders_equity", Equity),
        ("equity", Equity),
        ("total_cash", Cash),
        ("cash", Cash),
        ("cash_and_cash_equivalents", Cash),
        ("long_term_debt", LongTermDebt),
        ("working_capital", WorkingCapital),
        // Cash flow
        ("operating_cash_flow", OperatingCashFlow),
        ("total_cash_from_operating_activities", OperatingCashFlow),
        ("investing_cash_flow", InvestingCashFlow),
        ("total_cashflows_from_investing_activities", InvestingCashFlow),
        ("financing_cash_flow", FinancingCashFlow),
        ("total_cash_from_financing_activities", FinancingCashFlow),
        ("capital_expenditures", CapitalExpenditure),
        ("capital_expenditure", CapitalExpenditure),
        // Remaining canonical field names
        ("net_income_common_stockholders", NetIncome),
        ("total_liabilities_net_minority_interest", TotalLiabilities),
        ("stockholders_equity_total", Equity),
        ("cash_and_equivalents", Cash),
        ("operating_cashflow", OperatingCashFlow),
        ("capex", CapitalExpenditure),
    ];
    for (alias, field) in entries {
        table.insert(alias, field);
    }
    table
});

fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Where each statement figure and key lives in this file's header row.
struct ColumnPlan {
    ticker: usize,
    year: Option<usize>,
    period_end: Option<usize>,
    /// `(column, field)` pairs; the first column claiming a field wins.
    fields: Vec<(usize, StatementField)>,
}

fn plan_columns(headers: &csv::StringRecord) -> Option<ColumnPlan> {
    let mut ticker = None;
    let mut year = None;
    let mut period_end = None;
    let mut fields: Vec<(usize, StatementField)> = Vec::new();

    for (index, raw) in headers.iter().enumerate() {
        let name = normalize_header(raw);
        match name.as_str() {
            "ticker" => {
                if ticker.is_none() {
                    ticker = Some(index);
                }
            }
            "year" => {
                if year.is_none() {
                    year = Some(index);
                }
            }
            "period_end" => {
                if period_end.is_none() {
                    period_end = Some(index);
                }
            }
            _ => {
                if let Some(field) = HEADER_ALIASES.get(name.as_str()) {
                    if !fields.iter().any(|(_, claimed)| claimed == field) {
                        fields.push((index, *field));
                    }
                } else {
                    debug!(column = raw, "ignoring unmapped statement column");
                }
            }
        }
    }

    if year.is_none() && period_end.is_none() {
        return None;
    }
    Some(ColumnPlan {
        ticker: ticker?,
        year,
        period_end,
        fields,
    })
}

fn parse_figure(cell: Option<&str>) -> f64 {
    cell.and_then(|raw| raw.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

// =============================================================================
// CSV EQUITY SOURCE
// =============================================================================

/// CSV record for company profiles.
#[derive(Debug, Deserialize)]
struct ProfileRecord {
    ticker: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    last_updated: Option<NaiveDate>,
}

/// CSV-based equity source: statement history plus profiles.
pub struct CsvEquitySource {
    statements_path: PathBuf,
    profiles_path: PathBuf,
    statements: DashMap<Ticker, Vec<FinancialPeriod>>,
    profiles: DashMap<Ticker, CompanyProfile>,
}

impl CsvEquitySource {
    /// Creates a source over a statements file and a profiles file and
    /// loads both. A missing file loads as an empty side.
    pub fn new(
        statements_path: impl AsRef<Path>,
        profiles_path: impl AsRef<Path>,
    ) -> DataResult<Self> {
        let source = Self {
            statements_path: statements_path.as_ref().to_path_buf(),
            profiles_path: profiles_path.as_ref().to_path_buf(),
            statements: DashMap::new(),
            profiles: DashMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reloads both files, replacing previously loaded data.
    pub fn reload(&self) -> DataResult<()> {
        self.load_statements()?;
        self.load_profiles()?;
        Ok(())
    }

    fn load_statements(&self) -> DataResult<()> {
        self.statements.clear();
        if !self.statements_path.exists() {
            debug!(path = %self.statements_path.display(), "no statements file, loading empty");
            return Ok(());
        }

        let mut reader = csv::Reader::from_path(&self.statements_path)?;
        let headers = reader.headers()?.clone();
        let Some(plan) = plan_columns(&headers) else {
            return Err(DataError::parse(format!(
                "statements file {} needs a ticker column and a year or period_end column",
                self.statements_path.display()
            )));
        };

        let mut grouped: HashMap<Ticker, Vec<FinancialPeriod>> = HashMap::new();
        for (row, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    warn!(row = row + 2, error = %err, "skipping malformed statement row");
                    continue;
                }
            };
            let Some(period) = parse_statement_row(&record, &plan, row) else {
                continue;
            };
            grouped.entry(period.ticker.clone()).or_default().push(period);
        }

        let mut loaded = 0usize;
        for (ticker, mut periods) in grouped {
            FinancialPeriod::sort_chronological(&mut periods);
            loaded += periods.len();
            self.statements.insert(ticker, periods);
        }
        info!(
            periods = loaded,
            companies = self.statements.len(),
            path = %self.statements_path.display(),
            "loaded statement history"
        );
        Ok(())
    }

    fn load_profiles(&self) -> DataResult<()> {
        self.profiles.clear();
        if !self.profiles_path.exists() {
            debug!(path = %self.profiles_path.display(), "no profiles file, loading empty");
            return Ok(());
        }

        let mut reader = csv::Reader::from_path(&self.profiles_path)?;
        for (row, result) in reader.deserialize().enumerate() {
            let record: ProfileRecord = match result {
                Ok(record) => record,
                Err(err) => {
                    warn!(row = row + 2, error = %err, "skipping malformed profile row");
                    continue;
                }
            };
            let ticker = match Ticker::new(&record.ticker) {
                Ok(ticker) => ticker,
                Err(err) => {
                    warn!(row = row + 2, error = %err, "skipping profile row");
                    continue;
                }
            };
            let profile = CompanyProfile {
                ticker: ticker.clone(),
                name: record.name,
                country: record.country,
                sector: record.sector,
                industry: record.industry,
                website: record.website,
                description: record.description,
                last_updated: record.last_updated,
            };
            self.profiles.insert(ticker, profile);
        }
        info!(
            companies = self.profiles.len(),
            path = %self.profiles_path.display(),
            "loaded company profiles"
        );
        Ok(())
    }
}

fn parse_statement_row(
    record: &csv::StringRecord,
    plan: &ColumnPlan,
    row: usize,
) -> Option<FinancialPeriod> {
    let ticker = match Ticker::new(record.get(plan.ticker).unwrap_or_default()) {
        Ok(ticker) => ticker,
        Err(err) => {
            warn!(row = row + 2, error = %err, "skipping statement row");
            return None;
        }
    };

    // An explicit period_end date wins over a bare fiscal year.
    let period_end = if let Some(index) = plan.period_end {
        let raw = record.get(index).unwrap_or_default().trim();
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(err) => {
                warn!(row = row + 2, value = raw, error = %err, "skipping statement row with bad period_end");
                return None;
            }
        }
    } else {
        let index = plan.year?;
        let raw = record.get(index).unwrap_or_default().trim();
        let Ok(year) = raw.parse::<i32>() else {
            warn!(row = row + 2, value = raw, "skipping statement row with bad year");
            return None;
        };
        let Some(date) = NaiveDate::from_ymd_opt(year, 12, 31) else {
            warn!(row = row + 2, year, "skipping statement row with out-of-range year");
            return None;
        };
        date
    };

    let mut period = FinancialPeriod::new(ticker, period_end);
    for (index, field) in &plan.fields {
        field.apply(&mut period, parse_figure(record.get(*index)));
    }
    Some(period)
}

impl EquitySource for CsvEquitySource {
    fn tickers(&self) -> Vec<Ticker> {
        let mut tickers: Vec<Ticker> = self
            .statements
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        for entry in &self.profiles {
            if !tickers.contains(entry.key()) {
                tickers.push(entry.key().clone());
            }
        }
        tickers.sort();
        tickers
    }

    fn profile(&self, ticker: &Ticker) -> Option<CompanyProfile> {
        self.profiles.get(ticker).map(|entry| entry.clone())
    }

    fn statements(&self, ticker: &Ticker) -> Vec<FinancialPeriod> {
        self.statements
            .get(ticker)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }
}
