//! UTC time facade
//!
//! Stateless helpers over the active clock source. All functions are pure
//! given the active source; [`now`] is the only read of shared state.
//!
//! The serialized form is the strict ISO-8601 UTC profile with a literal
//! trailing `Z` (e.g. `2000-01-01T00:00:00Z`). Offset forms such as
//! `+00:00` are rejected on parse.

use chrono::{DateTime, Days, NaiveDateTime, SecondsFormat};
use tempo_core::{Instant, Timestamp};
use tempo_ports::{TimeError, TimeResult};

use crate::provider;

/// Strict ISO-8601 UTC profile: literal trailing `Z`, optional fraction.
const ISO8601_UTC: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Current time according to the active clock source, in epoch milliseconds.
pub fn now() -> Instant {
    provider::now()
}

/// Format an instant as canonical ISO-8601 UTC, e.g. `2000-01-01T00:00:00Z`.
///
/// Sub-second milliseconds, when present, are emitted as a fraction
/// (`2000-01-01T00:00:00.123Z`) so that parsing the output returns the
/// exact input instant.
///
/// # Panics
///
/// Panics if `instant` lies outside chrono's representable range (roughly
/// ±262,000 years from the epoch).
pub fn to_iso8601(instant: Instant) -> String {
    datetime_of(instant).to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse a strict ISO-8601 UTC timestamp (literal trailing `Z`) into epoch
/// milliseconds.
pub fn parse_iso8601(iso8601: &str) -> TimeResult<Instant> {
    let parsed =
        NaiveDateTime::parse_from_str(iso8601, ISO8601_UTC).map_err(|e| TimeError::Parse {
            input: iso8601.to_string(),
            reason: e.to_string(),
        })?;
    Ok(parsed.and_utc().timestamp_millis())
}

/// `now()` shifted back by `days` whole days in the UTC calendar.
///
/// Month and year rollover follow calendar arithmetic; the zone is fixed
/// UTC so the shift is DST-independent. Negative `days` shifts forward.
pub fn before_days(days: i64) -> Instant {
    minus_days(now(), days)
}

/// `now()` shifted forward by `days` whole days in the UTC calendar.
///
/// Symmetric with [`before_days`]: `after_days(-n) == before_days(n)` for
/// the same frozen `now()`. `days = 0` returns `now()` unchanged.
pub fn after_days(days: i64) -> Instant {
    plus_days(now(), days)
}

fn plus_days(instant: Instant, days: i64) -> Instant {
    let datetime = datetime_of(instant);
    let shifted = if days >= 0 {
        datetime.checked_add_days(Days::new(days as u64))
    } else {
        datetime.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted
        .expect("day arithmetic out of representable range")
        .timestamp_millis()
}

fn minus_days(instant: Instant, days: i64) -> Instant {
    let datetime = datetime_of(instant);
    let shifted = if days >= 0 {
        datetime.checked_sub_days(Days::new(days as u64))
    } else {
        datetime.checked_add_days(Days::new(days.unsigned_abs()))
    };
    shifted
        .expect("day arithmetic out of representable range")
        .timestamp_millis()
}

fn datetime_of(instant: Instant) -> Timestamp {
    DateTime::from_timestamp_millis(instant).expect("instant outside representable range")
}
