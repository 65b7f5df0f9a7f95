use tempo_core::Instant;
use tempo_ports::{ClockSource, TimeResult};

use crate::time;

/// Fixed clock for deterministic tests
///
/// Returns the same instant on every call, regardless of call count.
/// Substitute this into the provider (normally via the freeze harness) to
/// make `now()` deterministic for one test.
pub struct FixedClock {
    instant: Instant,
}

impl FixedClock {
    /// Create a fixed clock pinned at `instant`
    pub fn at(instant: Instant) -> Self {
        Self { instant }
    }

    /// Create a fixed clock pinned at an ISO-8601 UTC timestamp
    /// (e.g. `2000-01-01T00:00:00Z`)
    pub fn parse(iso8601: &str) -> TimeResult<Self> {
        Ok(Self::at(time::parse_iso8601(iso8601)?))
    }

    /// The instant this clock is pinned at
    pub fn instant(&self) -> Instant {
        self.instant
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> Instant {
        self.instant
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
