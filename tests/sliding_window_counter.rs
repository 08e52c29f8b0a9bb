use std::time::Duration;

use window_guard_core::clock::ManualClock;
use window_guard_core::counters::SlidingWindowCounter;

#[test]
fn test_new_sliding_window_counter() {
    let _ = SlidingWindowCounter::new(Duration::from_secs(5));
    // Constructor should succeed without panic
}

#[test]
#[should_panic(expected = "window duration must be greater than zero")]
fn test_new_with_zero_window() {
    SlidingWindowCounter::new(Duration::ZERO);
}

#[test]
fn test_window_accessor() {
    let counter = SlidingWindowCounter::new(Duration::from_secs(30));
    assert_eq!(counter.window(), Duration::from_secs(30));
}

#[test]
fn test_empty_counter_counts_zero() {
    let counter = SlidingWindowCounter::new(Duration::from_secs(5));
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_count_under_pinned_clock() {
    // Clock pinned at its origin: every recorded event has age zero,
    // so all of them are inside the window.
    let clock = ManualClock::new();
    let counter = SlidingWindowCounter::with_clock(Duration::from_secs(5), clock);

    counter.record_event();
    counter.record_event();
    counter.record_event();

    assert_eq!(counter.count(), 3);
}

#[test]
fn test_all_events_expire_past_window() {
    let clock = ManualClock::new();
    let counter = SlidingWindowCounter::with_clock(Duration::from_secs(5), clock.clone());

    counter.record_event();
    counter.record_event();
    counter.record_event();
    assert_eq!(counter.count(), 3);

    // 6s elapsed >= 5s window: all three events are gone
    clock.advance(Duration::from_secs(6));
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_count_never_exceeds_records() {
    let clock = ManualClock::new();
    let counter = SlidingWindowCounter::with_clock(Duration::from_secs(10), clock.clone());

    let mut recorded = 0;
    for step in 0..20 {
        counter.record_event();
        recorded += 1;
        assert!(counter.count() <= recorded);
        clock.advance(Duration::from_secs(1));
        assert!(counter.count() <= recorded);
        // After 10 steps the oldest events start falling out
        if step >= 10 {
            assert!(counter.count() < recorded);
        }
    }
}

#[test]
fn test_sliding_window_tracks_recent_events_only() {
    let clock = ManualClock::new();
    let counter = SlidingWindowCounter::with_clock(Duration::from_secs(10), clock.clone());

    // One event per second for 15 seconds: the window holds the last 10
    for _ in 0..15 {
        counter.record_event();
        clock.advance(Duration::from_secs(1));
    }

    // now = 15s: events at 6s..=14s have age < 10s; the 5s event's age is
    // exactly 10s and is expired
    assert_eq!(counter.count(), 9);
}

#[test]
fn test_count_resumes_after_expiry() {
    let clock = ManualClock::new();
    let counter = SlidingWindowCounter::with_clock(Duration::from_secs(5), clock.clone());

    counter.record_event();
    clock.advance(Duration::from_secs(6));
    assert_eq!(counter.count(), 0);

    // A fresh event is counted normally after the window emptied
    counter.record_event();
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_independent_counters_do_not_share_state() {
    let clock = ManualClock::new();
    let a = SlidingWindowCounter::with_clock(Duration::from_secs(5), clock.clone());
    let b = SlidingWindowCounter::with_clock(Duration::from_secs(5), clock.clone());

    a.record_event();
    a.record_event();
    b.record_event();

    assert_eq!(a.count(), 2);
    assert_eq!(b.count(), 1);
}
