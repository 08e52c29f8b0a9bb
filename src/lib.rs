//! An exact sliding time-window event counter for Rust applications.
//!
//! This library provides a thread-safe counter that records event occurrences
//! and reports how many happened within the most recent fixed duration,
//! discarding older events. It is a building block for rate limiting,
//! throttling, or activity-rate observability.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use window_guard_core::counters::SlidingWindowCounter;
//!
//! // Count events over a trailing 5 second window
//! let counter = SlidingWindowCounter::new(Duration::from_secs(5));
//!
//! counter.record_event();
//! counter.record_event();
//!
//! assert_eq!(counter.count(), 2);
//! ```
//!
//! # Core Concepts
//!
//! ## Exact Counting
//! Unlike bucketed or approximate sliding windows, this counter stores one
//! timestamp per event and evicts each one individually once its age reaches
//! the window length. The reported count is exact at the instant it is taken.
//!
//! ## Time Source
//! The counter reads time through the [`Clock`] trait rather than calling
//! [`std::time::Instant::now`] directly. Production code uses [`SystemClock`];
//! tests inject a [`ManualClock`] and advance it explicitly, which makes
//! window behavior fully deterministic:
//!
//! ```rust
//! use std::time::Duration;
//! use window_guard_core::clock::ManualClock;
//! use window_guard_core::counters::SlidingWindowCounter;
//!
//! let clock = ManualClock::new();
//! let counter = SlidingWindowCounter::with_clock(Duration::from_secs(5), clock.clone());
//!
//! counter.record_event();
//! assert_eq!(counter.count(), 1);
//!
//! clock.advance(Duration::from_secs(6));
//! assert_eq!(counter.count(), 0);
//! ```
//!
//! ## Lazy Eviction
//! Expired timestamps are removed on every [`record_event`] and [`count`]
//! call, never by a background task. Between accesses the counter may retain
//! already-expired entries in memory; they can never be observed through the
//! public API.
//!
//! ## Thread Safety
//! All operations are safe to call concurrently through a shared reference.
//! Each operation holds an exclusive lock over the event queue while it reads
//! the clock and mutates the queue, so calls are linearizable in lock
//! acquisition order. Note that [`count`] takes the same exclusive lock as
//! [`record_event`] because it evicts as a side effect.
//!
//! [`record_event`]: counters::SlidingWindowCounter::record_event
//! [`count`]: counters::SlidingWindowCounter::count
//! [`Clock`]: clock::Clock
//! [`SystemClock`]: clock::SystemClock
//! [`ManualClock`]: clock::ManualClock

pub mod clock;
pub mod counters;

pub use clock::{Clock, ManualClock, SystemClock};
pub use counters::SlidingWindowCounter;
