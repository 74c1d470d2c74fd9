//! Frame pacing
//!
//! The game advances one fixed step per presented frame, so the clock only
//! decides when the next frame is due. A frame that runs late pushes the
//! schedule back instead of queueing extra steps.

use std::time::{Duration, Instant};

/// Fixed-rate frame deadline
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    /// First frame is due immediately
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            next: now,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next frame should be produced
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Schedule the frame after one produced at `now`
    pub fn advance(&mut self, now: Instant) {
        self.next += self.period;
        if self.next <= now {
            // Fell behind; no catch-up
            self.next = now + self.period;
        }
    }
}

/// Measured frame rate, reported once per second
#[derive(Debug, Clone)]
pub struct FpsMeter {
    window_start: Instant,
    frames: u32,
}

impl FpsMeter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
        }
    }

    /// Count a frame; returns the rate when a full second has elapsed
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.window_start = now;
        self.frames = 0;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_keeps_fixed_cadence() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60, start);
        assert!(clock.is_due(start));

        let period = clock.period();
        assert_eq!(period, Duration::from_secs(1) / 60);

        clock.advance(start);
        assert_eq!(clock.deadline(), start + period);
        assert!(!clock.is_due(start + period / 2));
        assert!(clock.is_due(start + period));

        // Slightly late frame stays on the 60 Hz grid
        clock.advance(start + period + Duration::from_millis(2));
        assert_eq!(clock.deadline(), start + period * 2);
    }

    #[test]
    fn test_clock_does_not_catch_up() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60, start);
        let late = start + Duration::from_millis(500);
        clock.advance(late);
        assert_eq!(clock.deadline(), late + clock.period());
    }

    #[test]
    fn test_fps_meter() {
        let start = Instant::now();
        let mut meter = FpsMeter::new(start);
        for i in 1..60 {
            assert_eq!(meter.frame(start + Duration::from_millis(i * 16)), None);
        }
        let fps = meter.frame(start + Duration::from_secs(1)).unwrap();
        assert!((fps - 60.0).abs() < 0.01);
        assert_eq!(meter.frame(start + Duration::from_millis(1010)), None);
    }
}
