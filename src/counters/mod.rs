//! Core counter implementations.
//!
//! This module contains the sliding window counter core. It is a thread-safe,
//! low-level building block that higher-level rate limiters or activity
//! monitors can be assembled from.
//!
//! # Thread Safety
//!
//! The counter guards its event queue with an internal mutex. Every public
//! operation, including the read-flavored `count`, acquires that lock because
//! eviction mutates the queue on every access.

pub mod sliding_window_counter;
pub use sliding_window_counter::SlidingWindowCounter;
