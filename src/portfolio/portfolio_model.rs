//! Portfolio document and aggregate models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::instruments::Instrument;
use crate::temporal::{normalize, DateLike};

/// The stored portfolio document: every instrument the user tracks, in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub instruments: Vec<Instrument>,
    pub created_at: DateLike,
    pub updated_at: DateLike,
}

impl Portfolio {
    /// An empty portfolio stamped with the current instant, written on first
    /// use when no document exists yet.
    pub fn bootstrap() -> Self {
        let now = DateLike::now();
        Self {
            instruments: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Finds an instrument by name.
    pub fn instrument(&self, name: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.name == name)
    }

    /// Finds an instrument by name, mutably.
    pub fn instrument_mut(&mut self, name: &str) -> Option<&mut Instrument> {
        self.instruments.iter_mut().find(|i| i.name == name)
    }
}

/// An inclusive window of time used to scope queries. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Builds a range; `None` when the bounds are reversed. Callers treat a
    /// missing range as "no filter".
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Inclusive containment on both ends.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Whether the record's normalized date falls inside the range.
    /// Unreadable dates fall outside every range.
    pub fn contains_date(&self, date: &DateLike) -> bool {
        normalize(date).map_or(false, |instant| self.contains(instant))
    }
}

/// Whole-portfolio headline figures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub gain: Decimal,
    pub yield_pct: Decimal,
}

/// Deposit and withdrawal activity inside a period.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub deposits: Decimal,
    pub withdrawals: Decimal,
    /// Number of cash flows counted.
    pub movements: usize,
}

impl PeriodTotals {
    /// Deposits minus withdrawals.
    pub fn net_flow(&self) -> Decimal {
        self.deposits - self.withdrawals
    }
}

/// Per-instrument gain decomposition across a period.
///
/// `performance` is the value change net of flows: money paid in during the
/// period does not count as market gain, money taken out does not count as
/// market loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentPeriodPerformance {
    pub name: String,
    pub deposits: Decimal,
    pub withdrawals: Decimal,
    pub net_flow: Decimal,
    pub value_at_start: Decimal,
    pub value_at_end: Decimal,
    pub performance: Decimal,
    pub performance_pct: Decimal,
}
