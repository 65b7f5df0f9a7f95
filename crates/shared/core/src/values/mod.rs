use chrono::{DateTime, Utc};

/// A point in time as milliseconds since the UTC epoch.
/// This is the unit the public API trades in.
/// Future: could become a newtype with range validation
pub type Instant = i64;

/// Calendar representation of an instant, fixed to UTC.
/// Used internally for formatting and day arithmetic.
pub type Timestamp = DateTime<Utc>;
