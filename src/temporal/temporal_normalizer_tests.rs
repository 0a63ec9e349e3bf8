//! Unit tests for date normalization.

use super::*;
use chrono::{NaiveDate, TimeZone, Utc};

#[test]
fn test_normalize_epoch_record() {
    let value = DateLike::Epoch {
        seconds: 1_705_276_800,
        nanoseconds: 0,
    };
    let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    assert_eq!(normalize(&value), Some(expected));
}

#[test]
fn test_normalize_epoch_record_with_nanoseconds() {
    let value = DateLike::Epoch {
        seconds: 1_705_276_800,
        nanoseconds: 500_000_000,
    };
    let normalized = normalize(&value).unwrap();
    assert_eq!(normalized.timestamp(), 1_705_276_800);
    assert_eq!(normalized.timestamp_subsec_millis(), 500);
}

#[test]
fn test_normalize_instant_is_identity() {
    let instant = Utc.with_ymd_and_hms(2023, 6, 30, 14, 45, 10).unwrap();
    let value = DateLike::Instant(instant);
    assert_eq!(normalize(&value), Some(instant));

    // Normalizing the normalized value again yields the same instant
    let renormalized = normalize(&DateLike::from(normalize(&value).unwrap()));
    assert_eq!(renormalized, Some(instant));
}

#[test]
fn test_normalize_rfc3339_text() {
    let value = DateLike::Text("2024-03-01T09:30:00+02:00".to_string());
    let expected = Utc.with_ymd_and_hms(2024, 3, 1, 7, 30, 0).unwrap();
    assert_eq!(normalize(&value), Some(expected));
}

#[test]
fn test_normalize_date_only_text_is_midnight_utc() {
    let value = DateLike::Text("2024-01-15".to_string());
    let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    assert_eq!(normalize(&value), Some(expected));
}

#[test]
fn test_normalize_naive_datetime_text() {
    let value = DateLike::Text("2024-01-15T10:30:00".to_string());
    let expected = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    assert_eq!(normalize(&value), Some(expected));
}

#[test]
fn test_normalize_trims_whitespace() {
    let value = DateLike::Text("  2024-01-15  ".to_string());
    assert!(normalize(&value).is_some());
}

#[test]
fn test_normalize_millis() {
    let value = DateLike::Millis(1_705_276_800_000);
    let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    assert_eq!(normalize(&value), Some(expected));
}

#[test]
fn test_normalize_garbage_returns_none() {
    assert_eq!(normalize(&DateLike::Text("not a date".to_string())), None);
    assert_eq!(normalize(&DateLike::Text(String::new())), None);
    assert_eq!(normalize(&DateLike::Text("2024-13-45".to_string())), None);
}

#[test]
fn test_normalize_out_of_range_epoch_returns_none() {
    let value = DateLike::Epoch {
        seconds: i64::MAX,
        nanoseconds: 0,
    };
    assert_eq!(normalize(&value), None);

    assert_eq!(normalize(&DateLike::Millis(i64::MAX)), None);
}

#[test]
fn test_normalized_day() {
    let value = DateLike::Text("2024-03-01T23:59:00Z".to_string());
    assert_eq!(
        normalized_day(&value),
        NaiveDate::from_ymd_opt(2024, 3, 1)
    );
}

#[test]
fn test_end_of_day_contains_whole_day() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let eod = end_of_day(day);
    assert_eq!(eod.date_naive(), day);

    let late = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap();
    assert!(late <= eod);
    let next_midnight = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
    assert!(next_midnight > eod);
}

#[test]
fn test_deserialize_shapes_from_json() {
    let epoch: DateLike = serde_json::from_str(r#"{"seconds":1705276800,"nanoseconds":0}"#).unwrap();
    assert!(matches!(epoch, DateLike::Epoch { .. }));

    let instant: DateLike = serde_json::from_str(r#""2024-01-15T00:00:00Z""#).unwrap();
    assert!(matches!(instant, DateLike::Instant(_)));

    let text: DateLike = serde_json::from_str(r#""2024-01-15""#).unwrap();
    assert!(matches!(text, DateLike::Text(_)));

    let millis: DateLike = serde_json::from_str("1705276800000").unwrap();
    assert!(matches!(millis, DateLike::Millis(_)));
}

#[test]
fn test_serde_round_trip_preserves_value() {
    let values = vec![
        DateLike::Epoch {
            seconds: 1_705_276_800,
            nanoseconds: 42,
        },
        DateLike::Instant(Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()),
        DateLike::Text("2024-01-15".to_string()),
        DateLike::Millis(1_705_276_800_000),
    ];

    for value in values {
        let json = serde_json::to_string(&value).unwrap();
        let back: DateLike = serde_json::from_str(&json).unwrap();
        assert_eq!(normalize(&back), normalize(&value), "round trip changed {json}");
    }
}
