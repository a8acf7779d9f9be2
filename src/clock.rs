//! Clock sources for driving timers.
//!
//! A [`Clock`] hands out the current time as a free-running `u32` tick
//! counter. The unit (milliseconds, microseconds, hardware cycles) is
//! whatever the host picks; timers only ever look at tick differences,
//! computed with wrapping subtraction, so the counter is allowed to wrap
//! past `u32::MAX` and start over.

use core::cell::Cell;

/// A monotonic, wraparound-tolerant tick source.
///
/// Implementations must be monotonic modulo 2^32: consecutive readings
/// may wrap past `u32::MAX`, but must never jump backwards otherwise.
/// Consumers compare readings exclusively through wrapping subtraction,
/// never by ordering absolute values, so a wrap between two readings is
/// handled transparently as long as less than a full counter range
/// passes between them.
pub trait Clock {
    /// Returns the current time in clock ticks.
    fn now(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> u32 {
        (**self).now()
    }
}

/// Wall-clock milliseconds since construction.
///
/// Backed by [`std::time::Instant`]; the millisecond count is truncated
/// to `u32`, wrapping roughly every 49.7 days of uptime.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Creates a clock reading zero at the moment of the call.
    pub fn new() -> Self {
        SystemClock {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

/// A clock advanced by hand.
///
/// Serves two purposes: deterministic time control in tests, and an
/// adapter for hosts that already maintain their own tick counter (a
/// main loop counting iterations, a simulation stepping virtual time).
/// Interior mutability lets several timers share one `ManualClock` by
/// reference while the host keeps advancing it.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    ticks: Cell<u32>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    pub fn new() -> Self {
        ManualClock {
            ticks: Cell::new(0),
        }
    }

    /// Creates a clock reading `ticks`.
    pub fn with_initial(ticks: u32) -> Self {
        ManualClock {
            ticks: Cell::new(ticks),
        }
    }

    /// Sets the current reading to an absolute tick value.
    pub fn set(&self, ticks: u32) {
        self.ticks.set(ticks);
    }

    /// Advances the current reading, wrapping past `u32::MAX`.
    pub fn advance(&self, ticks: u32) {
        self.ticks.set(self.ticks.get().wrapping_add(ticks));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u32 {
        self.ticks.get()
    }
}
