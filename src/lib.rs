//! # interval-timer
//! A cooperative, polling-based interval timer for control loops that
//! run without an operating system scheduler.
//!
//! Attach a zero-argument action to a tick interval, then call
//! [`IntervalTimer::poll`] from the main loop; the timer fires the
//! action synchronously whenever the interval has elapsed. Pausing
//! excludes the paused span from the accounting, and a one-shot mode
//! latches after a single firing until explicitly rearmed. All tick
//! arithmetic is wraparound-safe.
//!
//! Time comes from a [`Clock`] the host supplies: [`SystemClock`] for
//! hosted targets (behind the default `std` feature), [`ManualClock`]
//! for tests and hosts that count ticks themselves.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod clock;
pub mod timer;

#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use timer::{IntervalTimer, TimerCallback, TimerState, TimerStatistics};
