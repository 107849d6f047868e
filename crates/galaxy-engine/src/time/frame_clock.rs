use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Seconds since the clock was created or last reset. Not clamped.
    pub elapsed: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the host is paused
/// by the debugger, minimized, or stalls. `elapsed` is wall-clock and drives
/// time-based animation such as the galaxy rotation.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms to 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    ///
    /// Bounds given in the wrong order are swapped.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        let (dt_min, dt_max) = if dt_min <= dt_max { (dt_min, dt_max) } else { (dt_max, dt_min) };
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the elapsed-time baseline and the delta reference.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last = now;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`. Timestamps earlier than the previous tick
    /// count as zero delta (then clamped up to the minimum).
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let mut dt = now.saturating_duration_since(self.last);

        // Clamp delta time to keep downstream systems stable.
        if dt < self.dt_min {
            dt = self.dt_min;
        } else if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Timestamp elapsed time is measured from.
    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::new();
        let base = clock.start();
        for expected in 0..3 {
            let ft = clock.tick_at(base + Duration::from_millis(16 * (expected + 1)));
            assert_eq!(ft.frame_index, expected);
        }
    }

    #[test]
    fn dt_is_clamped_both_ways() {
        let mut clock = FrameClock::new();
        let base = clock.start();

        let ft = clock.tick_at(base);
        assert_eq!(ft.dt, Duration::from_micros(100).as_secs_f32());

        let ft = clock.tick_at(base + Duration::from_secs(5));
        assert_eq!(ft.dt, 0.25);
    }

    #[test]
    fn inverted_clamps_are_swapped() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(50), Duration::from_millis(10));
        let base = clock.start();

        assert_eq!(clock.tick_at(base).dt, 0.01);
        assert_eq!(clock.tick_at(base + Duration::from_secs(1)).dt, 0.05);
    }

    #[test]
    fn elapsed_is_not_clamped() {
        let mut clock = FrameClock::new();
        let base = clock.start();
        let ft = clock.tick_at(base + Duration::from_secs(5));
        assert_eq!(ft.elapsed, 5.0);
    }

    #[test]
    fn reset_moves_the_baseline() {
        let mut clock = FrameClock::new();
        let before = clock.start();
        clock.tick_at(before + Duration::from_secs(1));
        clock.reset();
        assert!(clock.start() >= before);
        let ft = clock.tick_at(clock.start() + Duration::from_millis(500));
        assert_eq!(ft.elapsed, 0.5);
    }
}
