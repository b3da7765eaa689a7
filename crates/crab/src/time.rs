//! Frame timing and the fixed simulation tick.
//!
//! [`Time`] measures real frame durations. [`FixedTimestep`] turns those
//! variable durations into a whole number of fixed ticks so the simulation
//! advances at exactly `ticks_per_second`, independent of the display rate.

use std::time::{Duration, Instant};

/// Frame timing, updated by the window loop at the start of each frame.
#[derive(Clone, Copy)]
pub struct Time {
    startup: Instant,
    frame_start: Instant,
    delta: Duration,
    elapsed: Duration,
    frame_count: u64,
}

impl Time {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            startup: now,
            frame_start: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Call at the start of each frame to update timing.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now - self.frame_start;
        self.frame_start = now;
        self.elapsed = now - self.startup;
        self.frame_count += 1;
    }

    /// Duration of the previous frame.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Total elapsed time since startup.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates real time and hands out fixed ticks.
///
/// At most `max_ticks` are returned per call. Any time beyond that is
/// dropped so a long stall (window drag, breakpoint) does not make the game
/// fast-forward through hundreds of ticks afterwards.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick: Duration,
    accumulator: Duration,
    max_ticks: u32,
    total_ticks: u64,
}

impl FixedTimestep {
    pub fn new(ticks_per_second: u32, max_ticks: u32) -> Self {
        let ticks_per_second = ticks_per_second.max(1);
        Self {
            tick: Duration::from_secs(1) / ticks_per_second,
            accumulator: Duration::ZERO,
            max_ticks: max_ticks.max(1),
            total_ticks: 0,
        }
    }

    /// Duration of one tick.
    pub fn tick_duration(&self) -> Duration {
        self.tick
    }

    /// Ticks handed out since creation.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Add `delta` of real time and return how many ticks are now due.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.accumulator += delta;

        let mut due = 0;
        while self.accumulator >= self.tick && due < self.max_ticks {
            self.accumulator -= self.tick;
            due += 1;
        }

        if self.accumulator >= self.tick {
            log::debug!(
                "Simulation behind by {:?}, dropping it (max {} ticks per frame)",
                self.accumulator,
                self.max_ticks
            );
            self.accumulator = Duration::ZERO;
        }

        self.total_ticks += due as u64;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_update_counts_frames() {
        let mut time = Time::new();
        time.update();
        time.update();
        assert_eq!(time.frame_count(), 2);
        assert!(time.elapsed() >= time.delta());
    }

    #[test]
    fn one_second_yields_tick_rate_ticks() {
        let mut step = FixedTimestep::new(60, 1000);
        let mut ticks = 0;
        // 60 fps display: one tick per frame.
        for _ in 0..60 {
            ticks += step.advance(step.tick_duration());
        }
        assert_eq!(ticks, 60);
        assert_eq!(step.total_ticks(), 60);
    }

    #[test]
    fn short_frames_accumulate() {
        let mut step = FixedTimestep::new(60, 5);
        let half = step.tick_duration() / 2;
        assert_eq!(step.advance(half), 0);
        assert_eq!(step.advance(half), 1);
    }

    #[test]
    fn long_frame_runs_several_ticks() {
        let mut step = FixedTimestep::new(60, 5);
        assert_eq!(step.advance(step.tick_duration() * 3), 3);
    }

    #[test]
    fn stall_is_capped_and_discarded() {
        let mut step = FixedTimestep::new(60, 5);
        assert_eq!(step.advance(Duration::from_secs(2)), 5);
        // The backlog was dropped, nothing left over.
        assert_eq!(step.advance(Duration::ZERO), 0);
    }
}
