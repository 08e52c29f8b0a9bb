use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use tracing::trace;

use crate::clock::{Clock, SystemClock};

/// Core implementation of the exact sliding window event counter.
///
/// The counter keeps one timestamp per recorded event, ordered oldest first,
/// and answers how many events fall inside the trailing window ending at the
/// current instant. Every access evicts timestamps whose age has reached the
/// window length, so the stored queue is always exactly the in-window events
/// as of the most recent operation.
///
/// # Algorithm Behavior
///
/// - `record_event` reads the clock, appends the instant, then evicts.
/// - `count` reads the clock, evicts, then reports the remaining length.
/// - An event is retained while `now - event_time < window` holds; once its
///   age equals the window it is expired. The window is half-open: an event
///   recorded at `T` stops counting exactly at `T + window`.
/// - Eviction only ever removes from the front of the queue. Timestamps are
///   appended in lock-acquisition order, so the queue stays non-decreasing
///   and the scan can stop at the first entry still inside the window.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use window_guard_core::clock::ManualClock;
/// use window_guard_core::counters::SlidingWindowCounter;
///
/// let clock = ManualClock::new();
/// let counter = SlidingWindowCounter::with_clock(Duration::from_secs(5), clock.clone());
///
/// counter.record_event();
/// counter.record_event();
/// assert_eq!(counter.count(), 2);
///
/// // At exactly the window length the events are expired
/// clock.advance(Duration::from_secs(5));
/// assert_eq!(counter.count(), 0);
/// ```
pub struct SlidingWindowCounter {
    /// Length of the trailing window
    window: Duration,
    /// Time source consulted inside the locked region
    clock: Box<dyn Clock>,
    /// Event timestamps, oldest first, protected by mutex for thread safety
    events: Mutex<VecDeque<Instant>>,
}

impl SlidingWindowCounter {
    /// Creates a counter over the given trailing window using the system clock.
    ///
    /// # Panics
    ///
    /// Panics if `window` is zero. A zero window would expire every event at
    /// the instant it is recorded, so it is rejected as an invalid
    /// configuration. (`Duration` is unsigned, so a negative window is
    /// unrepresentable.)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use window_guard_core::counters::SlidingWindowCounter;
    ///
    /// let counter = SlidingWindowCounter::new(Duration::from_secs(60));
    /// counter.record_event();
    /// assert_eq!(counter.count(), 1);
    /// ```
    pub fn new(window: Duration) -> Self {
        Self::with_clock(window, SystemClock::new())
    }

    /// Creates a counter over the given trailing window with an injected clock.
    ///
    /// The counter owns the clock for its lifetime and only ever reads it.
    /// Pass a [`ManualClock`](crate::clock::ManualClock) clone to drive time
    /// explicitly in tests.
    ///
    /// # Panics
    ///
    /// Panics if `window` is zero.
    pub fn with_clock(window: Duration, clock: impl Clock + 'static) -> Self {
        assert!(
            window > Duration::ZERO,
            "window duration must be greater than zero"
        );

        SlidingWindowCounter {
            window,
            clock: Box::new(clock),
            events: Mutex::new(VecDeque::new()),
        }
    }

    /// Returns the configured window length.
    #[inline]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Records one event occurrence at the current instant.
    ///
    /// The clock is read while the exclusive lock is held, so the queue order
    /// matches the order in which concurrent callers acquired the lock.
    /// Expired events are evicted in the same critical section, using the
    /// same instant as the reference time. Never fails.
    pub fn record_event(&self) {
        let mut events = self.lock_events();
        let now = self.clock.now();
        events.push_back(now);
        self.evict_expired(&mut events, now);
    }

    /// Returns the number of events inside the trailing window right now.
    ///
    /// Semantically a read, but it evicts expired entries first and therefore
    /// takes the same exclusive lock as [`record_event`]. Two back-to-back
    /// calls with no intervening record and no clock movement return the same
    /// value. Never fails.
    ///
    /// [`record_event`]: SlidingWindowCounter::record_event
    pub fn count(&self) -> usize {
        let mut events = self.lock_events();
        let now = self.clock.now();
        self.evict_expired(&mut events, now);
        events.len()
    }

    /// Drops every front entry whose age relative to `now` has reached the
    /// window length.
    ///
    /// `Instant::duration_since` saturates to zero when the entry is newer
    /// than `now` (a rewound manual clock), so nothing is evicted in that
    /// case and no underflow can occur. Each event is visited once on append
    /// and once when finally evicted, so the cost is amortized O(1) per event.
    #[inline]
    fn evict_expired(&self, events: &mut VecDeque<Instant>, now: Instant) {
        let mut evicted = 0usize;
        while let Some(&oldest) = events.front() {
            if now.duration_since(oldest) >= self.window {
                events.pop_front();
                evicted += 1;
            } else {
                break;
            }
        }

        if evicted > 0 {
            trace!(evicted, remaining = events.len(), "evicted expired events");
        }
    }

    /// Acquires the event queue lock, recovering from poisoning.
    ///
    /// The queue is structurally valid at every point a panic could unwind
    /// through the critical section, so a poisoned lock still guards a usable
    /// queue and both public operations stay infallible.
    #[inline]
    fn lock_events(&self) -> std::sync::MutexGuard<'_, VecDeque<Instant>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
