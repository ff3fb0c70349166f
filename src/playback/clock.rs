//! Time sources for frame pacing.

use std::time::{Duration, Instant};

/// Monotonic time source with the ability to suspend between frames.
pub trait Clock {
    /// Current instant.
    fn now(&mut self) -> Instant;

    /// Suspend for `d`.
    fn sleep(&mut self, d: Duration);
}

/// Wall-clock time; sleeping blocks the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, d: Duration) {
        std::thread::sleep(d);
    }
}

/// Virtual clock for headless playback and tests.
///
/// Time only moves when [`Clock::sleep`] or [`ManualClock::advance`] is called, plus an
/// optional fixed step applied after every [`Clock::now`] read, which stands in for per-frame
/// compute cost.
#[derive(Clone, Debug)]
pub struct ManualClock {
    base: Instant,
    elapsed: Duration,
    step_per_read: Duration,
    slept: Duration,
    sleeps: u64,
}

impl ManualClock {
    /// Clock starting now, with no per-read step.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed: Duration::ZERO,
            step_per_read: Duration::ZERO,
            slept: Duration::ZERO,
            sleeps: 0,
        }
    }

    /// Advance virtual time by `step` after every `now()` read.
    pub fn with_step_per_read(mut self, step: Duration) -> Self {
        self.step_per_read = step;
        self
    }

    /// Move virtual time forward.
    pub fn advance(&mut self, d: Duration) {
        self.elapsed += d;
    }

    /// Virtual time since creation.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total time spent in `sleep`.
    pub fn total_slept(&self) -> Duration {
        self.slept
    }

    /// Number of `sleep` calls.
    pub fn sleep_count(&self) -> u64 {
        self.sleeps
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> Instant {
        let t = self.base + self.elapsed;
        self.elapsed += self.step_per_read;
        t
    }

    fn sleep(&mut self, d: Duration) {
        self.elapsed += d;
        self.slept += d;
        self.sleeps += 1;
    }
}

/// Delay before the next frame, given the frame budget and the time the frame took.
///
/// Frames over budget get no delay; nothing is skipped or caught up.
pub fn frame_wait(interval: Duration, compute: Duration) -> Duration {
    interval.saturating_sub(compute)
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
