use super::*;

#[test]
fn wait_is_remaining_budget() {
    let interval = Duration::from_micros(16_667);
    assert_eq!(
        frame_wait(interval, Duration::from_micros(6_667)),
        Duration::from_millis(10)
    );
    assert_eq!(frame_wait(interval, Duration::ZERO), interval);
}

#[test]
fn over_budget_frames_do_not_wait() {
    let interval = Duration::from_millis(16);
    assert_eq!(frame_wait(interval, Duration::from_millis(16)), Duration::ZERO);
    assert_eq!(frame_wait(interval, Duration::from_millis(40)), Duration::ZERO);
}

#[test]
fn manual_clock_moves_only_when_told() {
    let mut clock = ManualClock::new();
    let a = clock.now();
    let b = clock.now();
    assert_eq!(a, b);

    clock.sleep(Duration::from_millis(5));
    clock.advance(Duration::from_millis(1));
    let c = clock.now();
    assert_eq!(c - a, Duration::from_millis(6));
    assert_eq!(clock.total_slept(), Duration::from_millis(5));
    assert_eq!(clock.sleep_count(), 1);
}

#[test]
fn manual_clock_step_per_read_simulates_compute() {
    let mut clock = ManualClock::new().with_step_per_read(Duration::from_millis(3));
    let a = clock.now();
    let b = clock.now();
    assert_eq!(b - a, Duration::from_millis(3));
    assert_eq!(clock.elapsed(), Duration::from_millis(6));
}
