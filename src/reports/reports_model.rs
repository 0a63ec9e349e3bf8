//! Read-only projection models for reports, exports and charts.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::instruments::Category;
use crate::portfolio::{InstrumentPeriodPerformance, PeriodTotals, PortfolioTotals};

/// What a ledger entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerEntryKind {
    Deposit,
    Withdrawal,
    Valuation,
}

/// One row of the flattened, date-descending activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub instrument: String,
    pub kind: LedgerEntryKind,
    pub instant: DateTime<Utc>,
    /// Flow amount, or the observed value for valuation entries.
    pub amount: Decimal,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// True for valuations the engine synthesized itself.
    #[serde(default)]
    pub auto: bool,
}

/// Deposits and withdrawals bucketed by calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFlows {
    /// Month key in `YYYY-MM` form; lexicographic order is chronological.
    pub month: String,
    pub deposits: Decimal,
    pub withdrawals: Decimal,
}

/// One day of the portfolio evolution series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionPoint {
    pub day: NaiveDate,
    /// Last observed value per instrument, present only for instruments with
    /// at least one valuation on or before the day.
    pub values: HashMap<String, Decimal>,
    pub total: Decimal,
}

/// One per-instrument line of the report detail table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
    pub net_invested: Decimal,
    pub current_value: Decimal,
    pub gain: Decimal,
    pub yield_pct: Decimal,
}

/// Period section of a report, present when the report is range-scoped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    pub totals: PeriodTotals,
    pub performance: Vec<InstrumentPeriodPerformance>,
    /// Market gain across every instrument, net of the period's flows.
    pub market_performance: Decimal,
}

/// Header block consumed by the export collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub totals: PortfolioTotals,
    pub instrument_count: usize,
    pub rows: Vec<ReportRow>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodReport>,
}
