//! Point-in-time resolution of instrument value.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::instruments_model::Instrument;
use crate::temporal::normalize;

/// Resolves the instrument's value as of a moment in time.
///
/// Picks the valuation with the greatest normalized date at or before
/// `as_of`; insertion order breaks date ties with the later record winning.
/// Returns zero when no valuation lies at or before the moment, never the
/// live current value. Valuations with unreadable dates are ignored.
///
/// Pure and deterministic: the same histories and the same `as_of` always
/// resolve to the same value, regardless of when the question is asked.
pub fn value_as_of(instrument: &Instrument, as_of: DateTime<Utc>) -> Decimal {
    instrument
        .valuations
        .iter()
        .filter_map(|v| normalize(&v.date).map(|dt| (dt, v.value)))
        .filter(|(dt, _)| *dt <= as_of)
        .max_by_key(|(dt, _)| *dt)
        .map(|(_, value)| value)
        .unwrap_or(Decimal::ZERO)
}
