//! Date representations accepted by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A date value as it may appear in a stored portfolio document.
///
/// Documents accumulate several date shapes over their lifetime: timestamp
/// records written by the document store, canonical instants, calendar text
/// typed by the user, and numeric epoch milliseconds from older exports.
/// The union is closed; anything else fails at the document boundary instead
/// of leaking into computations.
///
/// Variant order matters for deserialization: objects match `Epoch`, RFC3339
/// strings match `Instant`, any other string falls through to `Text`, and
/// bare numbers land on `Millis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateLike {
    /// Document-store timestamp record.
    Epoch { seconds: i64, nanoseconds: u32 },
    /// Canonical UTC instant, serialized as RFC3339.
    Instant(DateTime<Utc>),
    /// Calendar text: RFC3339, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`.
    Text(String),
    /// Epoch milliseconds.
    Millis(i64),
}

impl DateLike {
    /// The current instant, in canonical form.
    pub fn now() -> Self {
        DateLike::Instant(Utc::now())
    }
}

impl From<DateTime<Utc>> for DateLike {
    fn from(value: DateTime<Utc>) -> Self {
        DateLike::Instant(value)
    }
}
