use std::thread::sleep;
use std::time::Duration;

use interval_timer::{IntervalTimer, SystemClock};

fn poll_for(timer: &mut IntervalTimer<&SystemClock>, millis: u64) {
    for _ in 0..millis {
        timer.poll();
        sleep(Duration::from_millis(1));
    }
}

fn main() {
    let clock = SystemClock::new();

    // 1. Recurring Timer
    let mut heartbeat = IntervalTimer::new(&clock, 250)
        .with_callback(|| println!("Heartbeat timer fired!"));
    println!("Polling a 250 ms heartbeat for one second...");
    poll_for(&mut heartbeat, 1_000);

    // 2. Pause and Resume
    println!("Pausing the heartbeat for 500 ms; the paused span does not count...");
    heartbeat.pause();
    sleep(Duration::from_millis(500));
    heartbeat.resume();
    poll_for(&mut heartbeat, 300);

    // 3. Dynamic Interval Adjustment
    println!("Shrinking the heartbeat interval to 100 ms...");
    heartbeat.set_interval(100);
    poll_for(&mut heartbeat, 300);

    // 4. Catch-up After Missed Polls
    let mut metronome = IntervalTimer::new(&clock, 100)
        .with_callback(|| println!("Metronome timer fired!"));
    println!("Skipping ~350 ms of polling, then catching up...");
    sleep(Duration::from_millis(350));
    metronome.poll_catch_up();
    println!(
        "Metronome skipped {} period(s) but kept its phase.",
        metronome.get_statistics().missed_periods
    );

    // 5. One-shot Mode and Rearming
    let mut alarm = IntervalTimer::new(&clock, 200)
        .one_shot()
        .with_callback(|| println!("One-shot alarm fired!"));
    println!("Waiting for a 200 ms one-shot alarm...");
    while !alarm.poll() {
        sleep(Duration::from_millis(1));
    }
    println!("Alarm latched: {}. Rearming...", alarm.is_latched());
    alarm.rearm(true, true);
    while !alarm.poll() {
        sleep(Duration::from_millis(1));
    }
    println!("Alarm fired again after the rearm.");

    // 6. Timer Statistics
    println!("Heartbeat statistics: {:?}", heartbeat.get_statistics());
    println!("All timers completed!");
}
