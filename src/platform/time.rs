//! Clocks and fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Time source for the bonus timer and frame pacing
pub trait Clock {
    /// Seconds since the clock started
    fn now(&self) -> f64;

    fn elapsed_since(&self, t: f64) -> f64 {
        self.now() - t
    }

    /// Block until the next frame boundary
    fn wait_next_frame(&mut self, frame_secs: f64);
}

/// Fixed-rate frame pacer
///
/// Sleeps until the next frame boundary. When a frame overruns, the missed
/// boundaries are skipped rather than caught up.
#[derive(Debug, Clone, Default)]
pub struct FramePacer {
    next_frame: Option<Instant>,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep until one `frame` after the previous boundary; returns the time slept
    pub fn wait(&mut self, frame: Duration) -> Duration {
        let now = Instant::now();
        let deadline = self.next_frame.unwrap_or(now) + frame;

        if deadline > now {
            let slept = deadline - now;
            std::thread::sleep(slept);
            self.next_frame = Some(deadline);
            slept
        } else {
            log::trace!("Frame overran by {:?}", now - deadline);
            self.next_frame = Some(now);
            Duration::ZERO
        }
    }
}

/// Wall clock that sleeps between frames
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
    pacer: FramePacer,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            pacer: FramePacer::new(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn wait_next_frame(&mut self, frame_secs: f64) {
        let frame_secs = if frame_secs.is_finite() { frame_secs.max(0.0) } else { 0.0 };
        self.pacer.wait(Duration::from_secs_f64(frame_secs));
    }
}

/// Clock that only moves when told to; waiting advances it by one frame
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: start }
    }

    pub fn advance(&mut self, secs: f64) {
        self.now += secs;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now
    }

    fn wait_next_frame(&mut self, frame_secs: f64) {
        self.advance(frame_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances_per_frame() {
        let mut clock = ManualClock::new(1.0);
        clock.wait_next_frame(0.5);
        assert_eq!(clock.now(), 1.5);
        assert_eq!(clock.elapsed_since(1.0), 0.5);
    }

    #[test]
    fn test_pacer_skips_missed_frames() {
        let mut pacer = FramePacer::new();
        let frame = Duration::from_millis(5);
        assert!(pacer.wait(frame) > Duration::ZERO);

        // Overrun: no sleep, and the next frame is a full frame from now
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(pacer.wait(frame), Duration::ZERO);
        let start = Instant::now();
        pacer.wait(frame);
        assert!(start.elapsed() >= Duration::from_millis(4));
    }

    #[test]
    fn test_system_clock_paces_frames() {
        let mut clock = SystemClock::new();
        let start = Instant::now();
        for _ in 0..3 {
            clock.wait_next_frame(0.01);
        }
        assert!(start.elapsed() >= Duration::from_millis(25));
        assert!(clock.now() > 0.0);
    }
}
