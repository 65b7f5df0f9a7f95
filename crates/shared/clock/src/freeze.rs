//! Test-scoped time freezing
//!
//! [`TimeRule`] wraps a single test so the code under test observes one
//! unchanging `now()`. The rule resolves which instant applies (per-test
//! [`Directive`] first, rule default otherwise), swaps the active clock
//! source for the duration of the test, and restores it afterwards even
//! when the test body panics.
//!
//! Not thread-safe: at most one freeze may be active per process, enforced
//! by a flag that panics on re-entrant use. Frozen tests must run
//! sequentially.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use tempo_ports::{ClockSource, TimeResult};

use crate::{FixedClock, SystemClock, provider};

/// Freeze instant used when a directive is present but unvalued.
pub const DEFAULT_FREEZE_TIME: &str = "2000-01-01T00:00:00Z";

// Detects double-lock/double-unlock. Thread safety is not guaranteed.
static LOCKED: AtomicBool = AtomicBool::new(false);

/// Per-test freeze directive.
///
/// `Inherit` means the test carries no directive and the rule's default
/// behavior applies, which may itself mean "do not freeze" depending on how
/// the rule was constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Directive {
    /// No directive; fall back to the rule's default behavior.
    #[default]
    Inherit,
    /// Freeze at [`DEFAULT_FREEZE_TIME`].
    Default,
    /// Freeze at an explicit ISO-8601 UTC instant.
    At(String),
}

impl Directive {
    /// Convenience for `Directive::At` from a literal.
    pub fn at(iso8601: impl Into<String>) -> Self {
        Self::At(iso8601.into())
    }
}

/// Test rule that freezes the current time for one test at a time.
///
/// Three configurations:
/// - [`TimeRule::new`]: tests without a directive are not frozen;
/// - [`TimeRule::with_source`]: tests without a directive read the supplied
///   default source;
/// - [`TimeRule::with_default_time`]: tests without a directive are frozen
///   at the supplied instant.
pub struct TimeRule {
    default_source: Arc<dyn ClockSource>,
}

impl TimeRule {
    /// Rule whose default behavior is "do not freeze": tests without a
    /// directive keep reading the real system clock.
    pub fn new() -> Self {
        Self::with_source(Arc::new(SystemClock::new()))
    }

    /// Rule whose directive-less tests read `default_source`.
    pub fn with_source(default_source: Arc<dyn ClockSource>) -> Self {
        Self { default_source }
    }

    /// Rule whose directive-less tests are frozen at `iso8601`.
    ///
    /// A malformed timestamp surfaces here, at construction, rather than
    /// inside every test that uses the rule.
    pub fn with_default_time(iso8601: &str) -> TimeResult<Self> {
        Ok(Self::with_source(Arc::new(FixedClock::parse(iso8601)?)))
    }

    /// Resolve the source for `directive`, substitute it, and return a
    /// guard that restores the system clock when dropped.
    ///
    /// # Panics
    ///
    /// Panics if a freeze is already active (nested or concurrent use).
    pub fn freeze(&self, directive: Directive) -> TimeResult<FreezeGuard> {
        let source: Arc<dyn ClockSource> = match directive {
            Directive::Inherit => self.default_source.clone(),
            Directive::Default => Arc::new(FixedClock::parse(DEFAULT_FREEZE_TIME)?),
            Directive::At(iso8601) => Arc::new(FixedClock::parse(&iso8601)?),
        };
        Ok(FreezeGuard::acquire(source))
    }

    /// Run `test` with the clock frozen per `directive`, then restore.
    ///
    /// Restoration is guaranteed by the guard's `Drop` even when `test`
    /// panics, so a failing frozen test never leaks its instant into later
    /// tests.
    pub fn wrap<T>(&self, directive: Directive, test: impl FnOnce() -> T) -> TimeResult<T> {
        let _guard = self.freeze(directive)?;
        Ok(test())
    }
}

impl Default for TimeRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped freeze: holds the process-wide lock flag and restores the real
/// system clock when dropped.
pub struct FreezeGuard {
    _priv: (),
}

impl FreezeGuard {
    fn acquire(source: Arc<dyn ClockSource>) -> Self {
        lock(source);
        Self { _priv: () }
    }
}

impl Drop for FreezeGuard {
    fn drop(&mut self) {
        unlock();
    }
}

/// Freeze the current time at whatever `source` provides.
///
/// Every `lock` must be paired with exactly one [`unlock`]; [`FreezeGuard`]
/// does this automatically.
fn lock(source: Arc<dyn ClockSource>) {
    if LOCKED.swap(true, Ordering::SeqCst) {
        panic!("clock source is already locked");
    }
    debug!("freeze acquired: {}", source.name());
    provider::substitute(source);
}

/// Release the freeze and restore the real system clock.
fn unlock() {
    if !LOCKED.swap(false, Ordering::SeqCst) {
        panic!("clock source is already unlocked");
    }
    debug!("freeze released");
    provider::restore_system_clock();
}
