//! Tempo Clock Infrastructure
//!
//! A swappable source of "now" plus a test harness that freezes it:
//!
//! ```text
//! provider (process-wide ClockSource slot, defaults to SystemClock)
//!     │
//!     ├── time facade
//!     │       now() / to_iso8601 / parse_iso8601 / before_days / after_days
//!     │
//!     └── TimeRule (test harness)
//!             swaps in a FixedClock for one test, restores afterwards
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use tempo_clock::{time, Directive, TimeRule};
//!
//! let rule = TimeRule::with_default_time("2000-01-01T00:00:00Z")?;
//! rule.wrap(Directive::at("2000-01-02T00:00:00Z"), || {
//!     assert_eq!(time::to_iso8601(time::after_days(13)), "2000-01-15T00:00:00Z");
//! })?;
//! ```
//!
//! Not thread-safe: the active source and the freeze flag are process-wide
//! state with no coordination beyond what a Rust `static` requires. Frozen
//! tests must run sequentially, one per process at a time.

mod fixed;
mod freeze;
pub mod provider;
mod system;
pub mod time;

pub use fixed::FixedClock;
pub use freeze::{DEFAULT_FREEZE_TIME, Directive, FreezeGuard, TimeRule};
pub use system::SystemClock;

// Re-export the ClockSource trait for convenience
pub use tempo_ports::ClockSource;
