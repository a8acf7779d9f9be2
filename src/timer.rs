use alloc::boxed::Box;
#[cfg(feature = "logging")]
use log::debug;

use crate::clock::Clock;

/// Represents the state of a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Elapsed time is accumulating toward the next firing.
    Running,
    /// Elapsed-time accumulation is suspended.
    Paused,
    /// A one-shot firing has occurred; paused until rearmed.
    Latched,
}

/// Statistics for a timer.
#[derive(Debug, Clone, Default)]
pub struct TimerStatistics {
    /// Number of times the timer has fired.
    pub execution_count: usize,
    /// Whole periods skipped beyond the first, summed over all firings.
    ///
    /// Grows when the host polls slower than the interval; zero while
    /// the polling cadence keeps up. Not counted for a zero interval.
    pub missed_periods: usize,
}

/// A trait for timer callbacks.
///
/// Implemented for every `FnMut()` closure and `fn()` pointer, so any
/// zero-argument action can be attached directly; stateful callbacks
/// are closures capturing their state.
pub trait TimerCallback {
    /// The action to run when the timer fires.
    fn execute(&mut self);
}

impl<F: FnMut()> TimerCallback for F {
    fn execute(&mut self) {
        self()
    }
}

/// A polled interval timer for cooperative main loops.
///
/// The timer never blocks and owns no thread; the host loop drives it
/// by calling [`poll`](IntervalTimer::poll) every iteration, and the
/// timer decides from the clock reading whether the interval has
/// elapsed. When it has, the attached callback runs synchronously
/// inside the poll call.
///
/// All tick arithmetic is modular, so the timer keeps firing correctly
/// when the clock wraps past `u32::MAX`.
///
/// # Example
///
/// ```
/// use interval_timer::{IntervalTimer, ManualClock};
///
/// let clock = ManualClock::new();
/// let mut blink = IntervalTimer::new(&clock, 500)
///     .with_callback(|| println!("toggle LED"));
///
/// loop {
///     blink.poll();
///     // ... the rest of the main loop ...
///     # break;
/// }
/// ```
pub struct IntervalTimer<C: Clock> {
    clock: C,
    callback: Option<Box<dyn TimerCallback>>,
    interval: u32,
    last_reference: u32,
    paused: bool,
    pause_start: u32,
    auto_retrigger: bool,
    latched: bool,
    statistics: TimerStatistics,
}

impl<C: Clock> IntervalTimer<C> {
    /// Creates a running, auto-retriggering timer with no callback.
    ///
    /// The first firing is due `interval` ticks after the call.
    pub fn new(clock: C, interval: u32) -> Self {
        let last_reference = clock.now();
        IntervalTimer {
            clock,
            callback: None,
            interval,
            last_reference,
            paused: false,
            pause_start: 0,
            auto_retrigger: true,
            latched: false,
            statistics: TimerStatistics::default(),
        }
    }

    /// Attaches a callback at construction.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: TimerCallback + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Puts the timer in one-shot mode: it fires once, latches, and
    /// stays paused until [`rearm`](IntervalTimer::rearm)ed.
    pub fn one_shot(mut self) -> Self {
        self.auto_retrigger = false;
        self
    }

    /// Starts the timer paused; [`resume`](IntervalTimer::resume)
    /// begins the first cycle.
    pub fn start_paused(mut self) -> Self {
        self.paused = true;
        self.pause_start = self.clock.now();
        self
    }

    /// Replaces the attached callback; takes effect on the next firing.
    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: TimerCallback + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Removes the attached callback; subsequent firings are no-ops
    /// that are still reported by `poll`.
    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    /// Replaces the interval.
    ///
    /// Takes effect on the next elapsed-time evaluation; the reference
    /// point of the current cycle is left untouched. A zero interval is
    /// a legitimate "fire every poll" mode.
    pub fn set_interval(&mut self, interval: u32) {
        self.interval = interval;
        #[cfg(feature = "logging")]
        debug!("Timer interval adjusted.");
    }

    /// Switches between auto-retrigger and one-shot mode.
    ///
    /// Enabling auto-retrigger clears a pending latch; the paused flag
    /// is left as-is either way.
    pub fn set_auto_retrigger(&mut self, auto_retrigger: bool) {
        self.auto_retrigger = auto_retrigger;
        if auto_retrigger {
            self.latched = false;
        }
    }

    /// Checks whether the interval has elapsed and fires if so,
    /// resetting the reference point to the current time.
    ///
    /// Returns `true` exactly when the timer fired. When the host loop
    /// polls late, the overshoot is carried into the next cycle as
    /// drift; use [`poll_catch_up`](IntervalTimer::poll_catch_up) where
    /// phase matters more than simplicity.
    pub fn poll(&mut self) -> bool {
        self.poll_internal(false)
    }

    /// Like [`poll`](IntervalTimer::poll), but advances the reference
    /// point by whole intervals instead of resetting it.
    ///
    /// Firing keeps the phase of the original schedule: missed periods
    /// are swallowed in one firing and the next firing is due at the
    /// next exact multiple of the interval, so a persistently late host
    /// fires on every poll without the schedule slipping.
    pub fn poll_catch_up(&mut self) -> bool {
        self.poll_internal(true)
    }

    /// Pauses the timer, freezing elapsed-time accumulation.
    ///
    /// Idempotent: pausing an already-paused timer keeps the original
    /// pause moment.
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.pause_start = self.clock.now();
            #[cfg(feature = "logging")]
            debug!("Timer paused.");
        }
    }

    /// Resumes a paused timer, excluding the paused span from interval
    /// accounting: the timer behaves as if it had been frozen.
    ///
    /// Idempotent: resuming a running timer is a no-op.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            let paused_for = self.clock.now().wrapping_sub(self.pause_start);
            self.last_reference = self.last_reference.wrapping_add(paused_for);
            #[cfg(feature = "logging")]
            debug!("Timer resumed.");
        }
    }

    /// Reports whether a one-shot firing is awaiting a rearm.
    ///
    /// Always `false` while auto-retrigger is enabled.
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Clears the latch and re-establishes a well-defined baseline.
    ///
    /// With `reset_reference` the current cycle restarts at the rearm
    /// time (a paused timer also gets its pause moment reset, so a
    /// later resume folds in a near-zero paused span). The timer then
    /// ends up running if `start` is set, paused otherwise, regardless
    /// of its state before the call.
    pub fn rearm(&mut self, reset_reference: bool, start: bool) {
        self.latched = false;

        if reset_reference {
            let now = self.clock.now();
            self.last_reference = now;
            if self.paused {
                self.pause_start = now;
            }
        }

        if start {
            self.resume();
        } else {
            self.pause();
        }
        #[cfg(feature = "logging")]
        debug!("Timer rearmed.");
    }

    /// Reports whether elapsed-time accumulation is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the configured interval in clock ticks.
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Gets the current state of the timer.
    pub fn get_state(&self) -> TimerState {
        if self.latched {
            TimerState::Latched
        } else if self.paused {
            TimerState::Paused
        } else {
            TimerState::Running
        }
    }

    /// Gets the timer's statistics.
    pub fn get_statistics(&self) -> TimerStatistics {
        self.statistics.clone()
    }

    /// Internal poll routine shared by both poll flavors.
    fn poll_internal(&mut self, catch_up: bool) -> bool {
        if self.paused {
            return false;
        }

        let now = self.clock.now();
        let elapsed = now.wrapping_sub(self.last_reference);
        if elapsed < self.interval {
            return false;
        }

        if self.interval == 0 {
            // No phase exists at period zero; both flavors collapse to
            // restarting at the current tick.
            self.last_reference = now;
        } else {
            let periods = elapsed / self.interval;
            self.statistics.missed_periods += (periods - 1) as usize;
            if catch_up {
                // Largest whole multiple of the interval not exceeding
                // the elapsed time, applied modulo 2^32.
                self.last_reference = self
                    .last_reference
                    .wrapping_add(periods.wrapping_mul(self.interval));
            } else {
                self.last_reference = now;
            }
        }

        if !self.auto_retrigger {
            self.latched = true;
            self.paused = true;
            self.pause_start = now;
        }

        if let Some(callback) = self.callback.as_mut() {
            callback.execute();
        }
        self.statistics.execution_count += 1;

        #[cfg(feature = "logging")]
        debug!("Timer fired.");
        true
    }
}
