//! Process-wide active clock source
//!
//! Production code only ever reads time through [`now`]; the freeze harness
//! is the only intended caller of [`substitute`] and
//! [`restore_system_clock`].
//!
//! Single-threaded test execution is assumed. The `RwLock` exists because a
//! Rust `static` must be `Sync`, not as a thread-safety guarantee for the
//! freeze discipline.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use log::debug;
use tempo_core::Instant;
use tempo_ports::ClockSource;

use crate::SystemClock;

static ACTIVE: LazyLock<RwLock<Arc<dyn ClockSource>>> =
    LazyLock::new(|| RwLock::new(Arc::new(SystemClock::new())));

fn active() -> Arc<dyn ClockSource> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Current time according to the active source, in epoch milliseconds.
///
/// No side effects beyond reading the shared slot.
pub fn now() -> Instant {
    active().now()
}

/// Replace the active clock source.
///
/// Intended for test use only; production code never calls this directly.
pub fn substitute(source: Arc<dyn ClockSource>) {
    debug!("clock source substituted: {}", source.name());
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    *slot = source;
}

/// Reset the active source back to the real system clock.
pub fn restore_system_clock() {
    debug!("clock source restored: SystemClock");
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Arc::new(SystemClock::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use crate::testutil::serial;

    #[test]
    fn test_substitute_and_restore() {
        let _serial = serial();

        substitute(Arc::new(FixedClock::at(42)));
        assert_eq!(now(), 42);
        assert_eq!(now(), 42);

        restore_system_clock();
        assert_ne!(now(), 42);
    }
}
