//! Property-based tests for the instrument ledger projections.
//!
//! These verify that the cached scalars always equal a from-scratch
//! recomputation and that point-in-time resolution stays consistent under
//! inserts, using the `proptest` crate for random test case generation.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use foliotrack_core::instruments::{
    flow_totals, recompute, value_as_of, CashFlow, FlowType, Instrument, Valuation,
};
use foliotrack_core::temporal::{normalize, DateLike};

// =============================================================================
// Generators
// =============================================================================

/// Generates an instant within a sane modern window.
fn arb_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (1_500_000_000i64..1_900_000_000).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

/// Generates each accepted date shape, plus the occasional unreadable one.
fn arb_date() -> impl Strategy<Value = DateLike> {
    prop_oneof![
        arb_instant().prop_map(DateLike::Instant),
        (1_500_000_000i64..1_900_000_000).prop_map(|secs| DateLike::Epoch {
            seconds: secs,
            nanoseconds: 0,
        }),
        (1_500_000_000_000i64..1_900_000_000_000).prop_map(DateLike::Millis),
        arb_instant().prop_map(|dt| DateLike::Text(dt.format("%Y-%m-%d").to_string())),
        Just(DateLike::Text("not a date".to_string())),
    ]
}

fn arb_flow_type() -> impl Strategy<Value = FlowType> {
    prop_oneof![Just(FlowType::Deposit), Just(FlowType::Withdrawal)]
}

fn arb_cash_flow() -> impl Strategy<Value = CashFlow> {
    (arb_date(), 1i64..=1_000_000, arb_flow_type(), 0u32..u32::MAX).prop_map(
        |(date, amount, flow_type, n)| CashFlow {
            id: format!("cf-{n}"),
            date,
            amount: Decimal::from(amount),
            flow_type,
            description: None,
            transfer_id: None,
            transfer_from: None,
            transfer_to: None,
            created_at: None,
        },
    )
}

fn arb_valuation() -> impl Strategy<Value = Valuation> {
    (arb_date(), 0i64..=1_000_000, 0u32..u32::MAX).prop_map(|(date, value, n)| Valuation {
        id: format!("val-{n}"),
        date,
        value: Decimal::from(value),
        auto: false,
        created_at: None,
    })
}

fn arb_instrument() -> impl Strategy<Value = Instrument> {
    (
        proptest::collection::vec(arb_cash_flow(), 0..12),
        proptest::collection::vec(arb_valuation(), 0..12),
    )
        .prop_map(|(cash_flows, valuations)| Instrument {
            name: "prop".to_string(),
            cash_flows,
            valuations,
            ..Default::default()
        })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After a recompute, the cached flow scalars equal a from-scratch
    /// rebuild, and the floor keeps net capital non-negative.
    #[test]
    fn prop_cached_totals_equal_rebuild(mut instrument in arb_instrument()) {
        recompute(&mut instrument);

        let totals = flow_totals(&instrument);
        prop_assert_eq!(instrument.total_deposited, totals.total_deposited);
        prop_assert_eq!(instrument.total_withdrawn, totals.total_withdrawn);
        prop_assert_eq!(instrument.net_invested, totals.net_invested);
        prop_assert_eq!(
            totals.net_invested,
            (totals.total_deposited - totals.total_withdrawn).max(Decimal::ZERO)
        );
    }

    /// After a recompute, the cached current value equals the value of the
    /// last usable valuation (later insertions winning date ties), or zero
    /// when none remains.
    #[test]
    fn prop_cached_value_tracks_latest_valuation(mut instrument in arb_instrument()) {
        recompute(&mut instrument);

        let expected = instrument
            .valuations
            .iter()
            .enumerate()
            .filter_map(|(i, v)| normalize(&v.date).map(|dt| (dt, i, v.value)))
            .max_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)))
            .map(|(_, _, value)| value)
            .unwrap_or(Decimal::ZERO);

        prop_assert_eq!(instrument.current_value, expected);
    }

    /// Appending a valuation dated after the query instant never changes the
    /// answer; appending one dated exactly at it always does.
    #[test]
    fn prop_value_as_of_insertion_consistency(
        mut instrument in arb_instrument(),
        as_of in arb_instant(),
        later_offset in 1i64..1_000_000,
        new_value in 0i64..=1_000_000,
    ) {
        let before = value_as_of(&instrument, as_of);

        instrument.valuations.push(Valuation {
            id: "later".to_string(),
            date: DateLike::Instant(as_of + chrono::Duration::seconds(later_offset)),
            value: Decimal::from(new_value) + Decimal::ONE,
            auto: false,
            created_at: None,
        });
        prop_assert_eq!(value_as_of(&instrument, as_of), before);

        instrument.valuations.push(Valuation {
            id: "at".to_string(),
            date: DateLike::Instant(as_of),
            value: Decimal::from(new_value),
            auto: false,
            created_at: None,
        });
        prop_assert_eq!(value_as_of(&instrument, as_of), Decimal::from(new_value));
    }

    /// Normalization is stable for canonical instants and returns cleanly
    /// for unreadable input.
    #[test]
    fn prop_normalize_is_stable_and_total(date in arb_date()) {
        match normalize(&date) {
            Some(instant) => {
                let canonical = DateLike::Instant(instant);
                prop_assert_eq!(normalize(&canonical), Some(instant));
            }
            None => {
                prop_assert_eq!(normalize(&date), None);
            }
        }
    }
}
