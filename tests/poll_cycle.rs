//! End-to-end host-loop simulations over the public API.

use std::cell::Cell;
use std::rc::Rc;

use interval_timer::{IntervalTimer, ManualClock, TimerState};

fn counting_timer(
    clock: &ManualClock,
    interval: u32,
) -> (IntervalTimer<&ManualClock>, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&count);
    let timer = IntervalTimer::new(clock, interval)
        .with_callback(move || counter.set(counter.get() + 1));
    (timer, count)
}

#[test]
fn tight_loop_fires_once_per_period() {
    let clock = ManualClock::new();
    let (mut heartbeat, beats) = counting_timer(&clock, 100);

    // One tick per loop iteration, well under the interval.
    for _ in 0..1_000 {
        clock.advance(1);
        heartbeat.poll();
    }

    assert_eq!(beats.get(), 10);
    assert_eq!(heartbeat.get_statistics().missed_periods, 0);
}

#[test]
fn two_timers_share_one_clock() {
    let clock = ManualClock::new();
    let (mut fast, fast_count) = counting_timer(&clock, 50);
    let (mut slow, slow_count) = counting_timer(&clock, 300);

    for _ in 0..600 {
        clock.advance(1);
        fast.poll();
        slow.poll();
    }

    assert_eq!(fast_count.get(), 12);
    assert_eq!(slow_count.get(), 2);
}

#[test]
fn pause_mid_loop_stretches_the_cycle() {
    let clock = ManualClock::new();
    let (mut timer, count) = counting_timer(&clock, 100);

    for step in 0..450 {
        clock.advance(1);
        if step == 149 {
            timer.pause();
        }
        if step == 349 {
            timer.resume();
        }
        timer.poll();
    }

    // First firing at t=100. The next is due 100 non-paused ticks
    // later: 50 ran before the pause at t=150 and the remaining 50
    // after the resume at t=350, so it lands at t=400.
    assert_eq!(count.get(), 2);
}

#[test]
fn one_shot_cycle_through_rearm() {
    let clock = ManualClock::new();
    let count = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&count);
    let mut alarm = IntervalTimer::new(&clock, 200)
        .one_shot()
        .with_callback(move || counter.set(counter.get() + 1));

    for _ in 0..1_000 {
        clock.advance(1);
        alarm.poll();
    }
    assert_eq!(count.get(), 1);
    assert_eq!(alarm.get_state(), TimerState::Latched);

    alarm.rearm(true, true);
    for _ in 0..1_000 {
        clock.advance(1);
        alarm.poll();
    }
    assert_eq!(count.get(), 2);
}

#[test]
fn catch_up_accounts_for_every_period_under_irregular_polling() {
    let clock = ManualClock::new();
    let interval = 100u32;
    let mut timer = IntervalTimer::new(&clock, interval);
    fastrand::seed(7);

    // Poll at a jittery cadence that is sometimes faster and sometimes
    // much slower than the interval.
    let mut total = 0u32;
    while total < 1_000_000 {
        let step = fastrand::u32(1..=1_000);
        total += step;
        clock.advance(step);
        timer.poll_catch_up();
    }

    // Land on an exact multiple of the interval and poll once more: in
    // catch-up mode the reference only ever moves by whole periods, so
    // firings plus skipped periods must account for every period since
    // the start.
    let aligned = total.next_multiple_of(interval);
    clock.advance(aligned - total);
    timer.poll_catch_up();

    let stats = timer.get_statistics();
    assert_eq!(
        stats.execution_count + stats.missed_periods,
        (aligned / interval) as usize
    );
}
