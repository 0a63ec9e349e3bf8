//! Cached ledger projections for a single instrument.
//!
//! The cached scalars on [`Instrument`] are materialized views over the two
//! histories. They are always rebuilt from scratch here, never adjusted
//! incrementally, so a missed edit cannot leave them drifting. Records whose
//! dates fail to normalize are excluded from every computation but stay
//! stored.

use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;

use super::instruments_model::{FlowType, Instrument};
use crate::temporal::normalize;

/// Recomputed cash-flow totals for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LedgerTotals {
    pub total_deposited: Decimal,
    pub total_withdrawn: Decimal,
    pub net_invested: Decimal,
}

/// Sums deposits and withdrawals over flows with a recognizable date.
///
/// `net_invested` is floored at zero: withdrawing more than was deposited
/// means no capital remains at risk, not negative capital.
pub fn flow_totals(instrument: &Instrument) -> LedgerTotals {
    let mut total_deposited = Decimal::ZERO;
    let mut total_withdrawn = Decimal::ZERO;

    for flow in &instrument.cash_flows {
        if normalize(&flow.date).is_none() {
            warn!(
                "Skipping cash flow {} on '{}': unreadable date",
                flow.id, instrument.name
            );
            continue;
        }
        match flow.flow_type {
            FlowType::Deposit => total_deposited += flow.amount,
            FlowType::Withdrawal => total_withdrawn += flow.amount,
        }
    }

    LedgerTotals {
        total_deposited,
        total_withdrawn,
        net_invested: (total_deposited - total_withdrawn).max(Decimal::ZERO),
    }
}

/// Rebuilds the cached cash-flow scalars from the full history.
///
/// The single write path for `total_deposited`, `total_withdrawn` and
/// `net_invested`; every cash-flow mutation ends here.
pub fn apply_flow_totals(instrument: &mut Instrument) {
    let totals = flow_totals(instrument);
    instrument.total_deposited = totals.total_deposited;
    instrument.total_withdrawn = totals.total_withdrawn;
    instrument.net_invested = totals.net_invested;
}

/// Rebuilds `current_value` and `last_valuation_date` from the valuation
/// with the most recent recognizable date. Later insertions win date ties.
/// Resets to zero/none when no usable valuation remains, so the cache never
/// points at a deleted record.
pub fn refresh_valuation_cache(instrument: &mut Instrument) {
    let mut latest: Option<(DateTime<Utc>, usize)> = None;

    for (index, valuation) in instrument.valuations.iter().enumerate() {
        match normalize(&valuation.date) {
            Some(dt) => {
                if latest.map_or(true, |(best, _)| dt >= best) {
                    latest = Some((dt, index));
                }
            }
            None => warn!(
                "Skipping valuation {} on '{}': unreadable date",
                valuation.id, instrument.name
            ),
        }
    }

    match latest {
        Some((_, index)) => {
            let valuation = &instrument.valuations[index];
            instrument.current_value = valuation.value;
            instrument.last_valuation_date = Some(valuation.date.clone());
        }
        None => {
            instrument.current_value = Decimal::ZERO;
            instrument.last_valuation_date = None;
        }
    }
}

/// Rebuilds every cached scalar on the instrument from its histories.
///
/// Called after each structural change to the cash-flow or valuation lists;
/// keeps the cache equal to a from-scratch recomputation at all times.
pub fn recompute(instrument: &mut Instrument) {
    apply_flow_totals(instrument);
    refresh_valuation_cache(instrument);
}

/// Value of the most recent valuation by normalized date; later insertions
/// win ties. Falls back to the cached `current_value` when no valuation has
/// a recognizable date.
pub fn current_value(instrument: &Instrument) -> Decimal {
    instrument
        .valuations
        .iter()
        .filter_map(|v| normalize(&v.date).map(|dt| (dt, v.value)))
        .max_by_key(|(dt, _)| *dt)
        .map(|(_, value)| value)
        .unwrap_or(instrument.current_value)
}

/// Unrealized gain: current value minus net invested capital.
pub fn gain(instrument: &Instrument) -> Decimal {
    current_value(instrument) - flow_totals(instrument).net_invested
}

/// Gain as a percentage of net invested capital. Zero when no capital is
/// at risk; never a division error.
pub fn yield_pct(instrument: &Instrument) -> Decimal {
    let totals = flow_totals(instrument);
    if totals.net_invested > Decimal::ZERO {
        (current_value(instrument) - totals.net_invested) / totals.net_invested
            * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}
