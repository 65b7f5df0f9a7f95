use chrono::Utc;
use tempo_core::Instant;
use tempo_ports::ClockSource;

/// Real system clock for production use
///
/// This simply returns the current wall-clock time in epoch milliseconds.
/// Use this in production where you want real-time behavior.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for SystemClock {
    fn now(&self) -> Instant {
        Utc::now().timestamp_millis()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock::new();
        let time1 = clock.now();
        thread::sleep(std::time::Duration::from_millis(10));
        let time2 = clock.now();

        assert!(time2 > time1);
        assert!(time2 - time1 >= 9);
    }
}
