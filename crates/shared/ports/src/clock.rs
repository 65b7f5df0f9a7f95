use tempo_core::Instant;

/// Port for time abstraction
///
/// This allows date/time-dependent code to read "now" through one
/// indirection point, backed by different sources:
/// - Real system time for production
/// - A fixed instant for deterministic tests
pub trait ClockSource: Send + Sync {
    /// Get the current time according to this source, in epoch milliseconds
    fn now(&self) -> Instant;

    /// Get the source's name/identifier for debugging
    fn name(&self) -> &str {
        "ClockSource"
    }
}
