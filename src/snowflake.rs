//! Time-derived fallback identifiers for message and thread ids.
//!
//! Ids are `|now - EPOCH|` in milliseconds plus [`OFFSET`]. They are unique only at
//! millisecond granularity; callers that need guaranteed uniqueness must supply
//! their own ids.

use chrono::{DateTime, Utc};

/// 2020-02-20T20:02:22Z, in milliseconds since the Unix epoch.
pub const EPOCH_MILLIS: i64 = 1_582_228_942_000;

/// Added to every generated id.
pub const OFFSET: i64 = 20_200_220_200_222;

/// Fallback message/thread id for the current instant.
pub fn generate_id() -> i64 {
    id_at(Utc::now())
}

/// Id for a given instant.
pub fn id_at(instant: DateTime<Utc>) -> i64 {
    (instant.timestamp_millis() - EPOCH_MILLIS).abs() + OFFSET
}
