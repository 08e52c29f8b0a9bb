//! Time source abstraction for deterministic window behavior.
//!
//! The counters in this crate never call [`Instant::now`] directly. They read
//! time through the [`Clock`] trait, so production code runs against the real
//! clock while tests substitute a [`ManualClock`] and move time explicitly.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A source of the current instant.
///
/// Implementors must be cheap to call and infallible. The counter consults
/// the clock inside its locked region, so `now` is also the serialization
/// point that orders recorded timestamps.
pub trait Clock: Send + Sync {
    /// Returns the current instant according to this clock.
    fn now(&self) -> Instant;
}

/// The live system clock.
///
/// Wraps [`Instant::now`]. This is the clock used by
/// [`SlidingWindowCounter::new`](crate::counters::SlidingWindowCounter::new).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    pub fn new() -> Self {
        SystemClock
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A controllable clock for deterministic tests.
///
/// The reported instant is an origin captured at construction plus an offset
/// that only moves when the caller invokes [`set`](ManualClock::set) or
/// [`advance`](ManualClock::advance). The offset starts at zero. Cloning the
/// clock shares the offset, so a test can hand one clone to a counter and
/// keep another as the driver handle:
///
/// ```rust
/// use std::time::Duration;
/// use window_guard_core::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
///
/// let before = clock.now();
/// handle.advance(Duration::from_secs(3));
/// assert_eq!(clock.now() - before, Duration::from_secs(3));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    // Nanoseconds past the origin. u64 gives roughly 584 years of range.
    offset_nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a manual clock positioned at its origin (offset zero).
    pub fn new() -> Self {
        ManualClock {
            origin: Instant::now(),
            offset_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Moves the clock to exactly `elapsed` past its origin.
    ///
    /// Setting a value smaller than the current offset moves time backwards,
    /// which a counter tolerates but real clocks never do; tests that care
    /// about ordering should only move forward.
    pub fn set(&self, elapsed: Duration) {
        self.offset_nanos
            .store(duration_to_nanos(elapsed), Ordering::SeqCst);
    }

    /// Advances the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.offset_nanos
            .fetch_add(duration_to_nanos(delta), Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        ManualClock::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = self.offset_nanos.load(Ordering::SeqCst);
        self.origin + Duration::from_nanos(offset)
    }
}

fn duration_to_nanos(d: Duration) -> u64 {
    // Saturate rather than wrap for absurdly large test durations.
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}
