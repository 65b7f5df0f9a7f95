//! Integration tests for the freeze-rule lifecycle
//!
//! Exercises the harness the way a consuming test suite would: pin "now"
//! per test, compute relative dates from it, and verify nothing leaks into
//! the tests that follow.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tempo_clock::{Directive, FixedClock, TimeRule, time};
use tempo_core::Instant;

// Tests share the process-wide clock slot; keep them sequential.
static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

fn instant(iso8601: &str) -> Instant {
    time::parse_iso8601(iso8601).unwrap()
}

#[test]
fn test_unfrozen_test_reads_the_real_clock() {
    let _ = env_logger::try_init();
    let _serial = serial();
    let rule = TimeRule::new();

    rule.wrap(Directive::Inherit, || {
        // Could only collide with the literal if the wall clock were
        // actually set to 2000-01-01.
        assert_ne!(time::now(), instant("2000-01-01T00:00:00Z"));

        let first = time::now();
        let second = time::now();
        assert!(second >= first);
    })
    .unwrap();
}

#[test]
fn test_directive_pins_now() {
    let _serial = serial();
    let rule = TimeRule::new();

    rule.wrap(Directive::at("2000-01-01T00:00:00Z"), || {
        assert_eq!(time::now(), instant("2000-01-01T00:00:00Z"));
        assert_eq!(time::now(), time::now());
    })
    .unwrap();
}

#[test]
fn test_after_days_from_jan_2() {
    let _serial = serial();
    let rule = TimeRule::new();

    rule.wrap(Directive::at("2000-01-02T00:00:00Z"), || {
        assert_eq!(time::after_days(13), instant("2000-01-15T00:00:00Z"));
    })
    .unwrap();
}

#[test]
fn test_after_days_from_jan_3() {
    let _serial = serial();
    let rule = TimeRule::new();

    rule.wrap(Directive::at("2000-01-03T00:00:00Z"), || {
        assert_eq!(time::after_days(13), instant("2000-01-16T00:00:00Z"));
    })
    .unwrap();
}

#[test]
fn test_rule_default_time_applies_without_directive() {
    let _serial = serial();
    let rule = TimeRule::with_default_time("2000-01-01T00:00:00Z").unwrap();

    rule.wrap(Directive::Inherit, || {
        assert_eq!(time::now(), instant("2000-01-01T00:00:00Z"));
        assert_eq!(time::after_days(13), instant("2000-01-14T00:00:00Z"));
    })
    .unwrap();
}

#[test]
fn test_rule_default_source_applies_without_directive() {
    let _serial = serial();
    let source = Arc::new(FixedClock::at(instant("2000-02-01T00:00:00Z")));
    let rule = TimeRule::with_source(source);

    rule.wrap(Directive::Inherit, || {
        assert_eq!(time::now(), instant("2000-02-01T00:00:00Z"));
    })
    .unwrap();

    rule.wrap(Directive::at("2000-03-01T00:00:00Z"), || {
        assert_eq!(time::now(), instant("2000-03-01T00:00:00Z"));
        assert_eq!(time::after_days(13), instant("2000-03-15T00:00:00Z"));
    })
    .unwrap();
}

#[test]
fn test_frozen_time_does_not_leak_into_later_tests() {
    let _ = env_logger::try_init();
    let _serial = serial();
    let rule = TimeRule::new();

    rule.wrap(Directive::at("2000-01-01T00:00:00Z"), || {
        assert_eq!(time::now(), instant("2000-01-01T00:00:00Z"));
    })
    .unwrap();

    // Back on the real clock after the frozen run.
    rule.wrap(Directive::Inherit, || {
        assert_ne!(time::now(), instant("2000-01-01T00:00:00Z"));
        let first = time::now();
        let second = time::now();
        assert!(second >= first);
    })
    .unwrap();
}

#[test]
fn test_day_shift_symmetry_under_frozen_now() {
    let _serial = serial();
    let rule = TimeRule::new();

    rule.wrap(Directive::at("2000-06-15T12:00:00Z"), || {
        assert_eq!(time::after_days(5), time::before_days(-5));
        assert_eq!(time::after_days(-5), time::before_days(5));
        assert_eq!(time::after_days(0), time::now());
        assert_eq!(time::before_days(0), time::now());
    })
    .unwrap();
}

#[test]
fn test_guard_restores_on_drop() {
    let _serial = serial();
    let rule = TimeRule::new();

    {
        let _guard = rule.freeze(Directive::at("2000-01-01T00:00:00Z")).unwrap();
        assert_eq!(time::now(), instant("2000-01-01T00:00:00Z"));
    }
    assert_ne!(time::now(), instant("2000-01-01T00:00:00Z"));
}
