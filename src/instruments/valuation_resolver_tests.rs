//! Unit tests for point-in-time value resolution.

use super::*;
use crate::temporal::DateLike;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn valuation(id: &str, date: &str, value: Decimal) -> Valuation {
    Valuation {
        id: id.to_string(),
        date: DateLike::Text(date.to_string()),
        value,
        auto: false,
        created_at: None,
    }
}

fn instrument_with(valuations: Vec<Valuation>) -> Instrument {
    Instrument {
        name: "Index fund".to_string(),
        valuations,
        ..Default::default()
    }
}

fn at(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

#[test]
fn test_zero_before_first_valuation() {
    let instrument = instrument_with(vec![valuation("v1", "2024-02-01", dec!(100))]);
    assert_eq!(value_as_of(&instrument, at(2024, 1, 15)), Decimal::ZERO);
}

#[test]
fn test_zero_when_no_valuations() {
    let mut instrument = instrument_with(vec![]);
    instrument.current_value = dec!(500);
    // Never falls back to the live current value
    assert_eq!(value_as_of(&instrument, at(2024, 6, 1)), Decimal::ZERO);
}

#[test]
fn test_boundary_date_is_inclusive() {
    let instrument = instrument_with(vec![valuation("v1", "2024-02-01", dec!(100))]);
    let midnight = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    assert_eq!(value_as_of(&instrument, midnight), dec!(100));
}

#[test]
fn test_picks_latest_at_or_before() {
    let instrument = instrument_with(vec![
        valuation("v1", "2024-01-10", dec!(100)),
        valuation("v2", "2024-02-10", dec!(140)),
        valuation("v3", "2024-03-10", dec!(90)),
    ]);

    assert_eq!(value_as_of(&instrument, at(2024, 2, 20)), dec!(140));
    assert_eq!(value_as_of(&instrument, at(2024, 12, 31)), dec!(90));
}

#[test]
fn test_same_date_tie_goes_to_last_inserted() {
    let instrument = instrument_with(vec![
        valuation("v1", "2024-02-10", dec!(140)),
        valuation("v2", "2024-02-10", dec!(155)),
    ]);

    assert_eq!(value_as_of(&instrument, at(2024, 2, 20)), dec!(155));
}

#[test]
fn test_unreadable_dates_are_ignored() {
    let instrument = instrument_with(vec![
        valuation("v1", "2024-01-10", dec!(100)),
        valuation("v2", "not a date", dec!(9999)),
    ]);

    assert_eq!(value_as_of(&instrument, at(2024, 6, 1)), dec!(100));
}

#[test]
fn test_later_insertions_do_not_change_earlier_answers() {
    let mut instrument = instrument_with(vec![valuation("v1", "2024-01-10", dec!(100))]);
    let as_of = at(2024, 1, 20);
    let before = value_as_of(&instrument, as_of);

    instrument
        .valuations
        .push(valuation("v2", "2024-03-01", dec!(500)));

    assert_eq!(value_as_of(&instrument, as_of), before);
}

#[test]
fn test_mixed_date_shapes_resolve_together() {
    let instrument = instrument_with(vec![
        Valuation {
            id: "v1".to_string(),
            date: DateLike::Epoch {
                seconds: 1_704_931_200, // 2024-01-11T00:00:00Z
                nanoseconds: 0,
            },
            value: dec!(100),
            auto: false,
            created_at: None,
        },
        Valuation {
            id: "v2".to_string(),
            date: DateLike::Millis(1_707_609_600_000), // 2024-02-11T00:00:00Z
            value: dec!(130),
            auto: false,
            created_at: None,
        },
    ]);

    assert_eq!(value_as_of(&instrument, at(2024, 1, 20)), dec!(100));
    assert_eq!(value_as_of(&instrument, at(2024, 2, 20)), dec!(130));
}
