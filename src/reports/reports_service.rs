//! Read-only projections for the presentation and export collaborators.
//!
//! Everything here is derived on demand from the stored histories; nothing
//! mutates the portfolio and nothing is cached between calls.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use super::reports_model::{
    EvolutionPoint, LedgerEntry, LedgerEntryKind, MonthlyFlows, PeriodReport, ReportRow,
    ReportSummary,
};
use crate::instruments::{
    current_value, flow_totals, gain, value_as_of, yield_pct, FlowType, Instrument,
};
use crate::portfolio::{period_performance, period_totals, portfolio_totals, DateRange, Portfolio};
use crate::temporal::{end_of_day, normalize};

/// Flattens every dated record into one feed, most recent first.
///
/// Records with unreadable dates are left out; date ties keep per-instrument
/// insertion order.
pub fn ledger_entries(portfolio: &Portfolio, range: Option<&DateRange>) -> Vec<LedgerEntry> {
    let mut entries = Vec::new();

    for instrument in &portfolio.instruments {
        for flow in &instrument.cash_flows {
            let Some(instant) = normalize(&flow.date) else {
                continue;
            };
            if let Some(range) = range {
                if !range.contains(instant) {
                    continue;
                }
            }
            entries.push(LedgerEntry {
                instrument: instrument.name.clone(),
                kind: match flow.flow_type {
                    FlowType::Deposit => LedgerEntryKind::Deposit,
                    FlowType::Withdrawal => LedgerEntryKind::Withdrawal,
                },
                instant,
                amount: flow.amount,
                description: flow.description.clone(),
                auto: false,
            });
        }
        for valuation in &instrument.valuations {
            let Some(instant) = normalize(&valuation.date) else {
                continue;
            };
            if let Some(range) = range {
                if !range.contains(instant) {
                    continue;
                }
            }
            entries.push(LedgerEntry {
                instrument: instrument.name.clone(),
                kind: LedgerEntryKind::Valuation,
                instant,
                amount: valuation.value,
                description: None,
                auto: valuation.auto,
            });
        }
    }

    entries.sort_by_key(|entry| Reverse(entry.instant));
    entries
}

/// Buckets in-range flows by calendar month, oldest month first.
pub fn monthly_flows(portfolio: &Portfolio, range: Option<&DateRange>) -> Vec<MonthlyFlows> {
    let mut months: BTreeMap<String, MonthlyFlows> = BTreeMap::new();

    for instrument in &portfolio.instruments {
        for flow in &instrument.cash_flows {
            let Some(instant) = normalize(&flow.date) else {
                continue;
            };
            if let Some(range) = range {
                if !range.contains(instant) {
                    continue;
                }
            }
            let key = instant.format("%Y-%m").to_string();
            let bucket = months.entry(key.clone()).or_insert_with(|| MonthlyFlows {
                month: key,
                deposits: Decimal::ZERO,
                withdrawals: Decimal::ZERO,
            });
            match flow.flow_type {
                FlowType::Deposit => bucket.deposits += flow.amount,
                FlowType::Withdrawal => bucket.withdrawals += flow.amount,
            }
        }
    }

    months.into_values().collect()
}

/// Portfolio value over time, one point per day that has a valuation.
///
/// Each instrument contributes its last observed value on or before the day;
/// an instrument with no observation yet is absent from the point, not zero.
/// The lookup reaches before `range.start`, so a scoped chart still opens at
/// the portfolio's real value. An empty instrument selection means all.
pub fn evolution_series(
    portfolio: &Portfolio,
    range: Option<&DateRange>,
    instruments: Option<&[String]>,
) -> Vec<EvolutionPoint> {
    let selection = instruments.filter(|names| !names.is_empty());
    let selected: Vec<&Instrument> = portfolio
        .instruments
        .iter()
        .filter(|i| selection.map_or(true, |names| names.contains(&i.name)))
        .collect();

    let mut days: Vec<NaiveDate> = selected
        .iter()
        .flat_map(|i| i.valuations.iter())
        .filter_map(|v| normalize(&v.date))
        .filter(|instant| range.map_or(true, |r| r.contains(*instant)))
        .map(|instant| instant.date_naive())
        .collect();
    days.sort_unstable();
    days.dedup();

    days.into_iter()
        .map(|day| {
            let cutoff = end_of_day(day);
            let mut values = HashMap::new();
            let mut total = Decimal::ZERO;

            for instrument in selected.iter().copied() {
                let observed = instrument
                    .valuations
                    .iter()
                    .filter_map(|v| normalize(&v.date))
                    .any(|instant| instant <= cutoff);
                if observed {
                    let value = value_as_of(instrument, cutoff);
                    values.insert(instrument.name.clone(), value);
                    total += value;
                }
            }

            EvolutionPoint { day, values, total }
        })
        .collect()
}

/// Everything a rendered report needs, computed in one pass.
pub fn report_summary(portfolio: &Portfolio, range: Option<&DateRange>) -> ReportSummary {
    let rows = portfolio
        .instruments
        .iter()
        .map(|instrument| ReportRow {
            name: instrument.name.clone(),
            category: instrument.category,
            broker: instrument.broker.clone(),
            net_invested: flow_totals(instrument).net_invested,
            current_value: current_value(instrument),
            gain: gain(instrument),
            yield_pct: yield_pct(instrument),
        })
        .collect();

    let period = range.map(|range| {
        let performance = period_performance(portfolio, range);
        let market_performance: Decimal = performance.iter().map(|row| row.performance).sum();
        PeriodReport {
            totals: period_totals(portfolio, Some(range)),
            performance,
            market_performance,
        }
    });

    ReportSummary {
        generated_at: Utc::now(),
        totals: portfolio_totals(portfolio),
        instrument_count: portfolio.instruments.len(),
        rows,
        period,
    }
}
