//! Frame timing for the headless driver.
//!
//! The clock either advances by a fixed interval per frame (simulated) or
//! paces itself against the wall clock. Either way a single frame never
//! advances time by more than [`MAX_FRAME_TIME_MS`].

use std::time::{Duration, Instant};

use orrery_config::RunConfig;
use tracing::warn;

/// Default frame interval: 60 Hz.
pub const DEFAULT_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Largest time step a single frame may take.
/// Longer frames are clamped and the animation slows down instead of jumping.
pub const MAX_FRAME_TIME_MS: f64 = 250.0;

/// How frame times are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    /// Every frame advances by exactly the interval.
    Simulated,
    /// Frames are paced to the interval and measured with [`Instant`].
    Realtime,
}

/// Produces the `time_ms` passed to the scene each frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: ClockMode,
    interval_ms: f64,
    previous: Instant,
    now_ms: f64,
    frame_count: u64,
}

impl FrameClock {
    /// Creates a clock starting at zero. Invalid intervals fall back to
    /// [`DEFAULT_INTERVAL_MS`].
    pub fn new(mode: ClockMode, interval_ms: f64) -> Self {
        let interval_ms = if interval_ms.is_finite() && interval_ms > 0.0 {
            interval_ms
        } else {
            warn!("Invalid frame interval {interval_ms}ms, using {DEFAULT_INTERVAL_MS:.3}ms");
            DEFAULT_INTERVAL_MS
        };
        Self {
            mode,
            interval_ms,
            previous: Instant::now(),
            now_ms: 0.0,
            frame_count: 0,
        }
    }

    /// Clock described by the `run` config section.
    pub fn from_config(run: &RunConfig) -> Self {
        let mode = if run.realtime {
            ClockMode::Realtime
        } else {
            ClockMode::Simulated
        };
        Self::new(mode, run.frame_interval_ms)
    }

    /// Simulated or realtime.
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Milliseconds since start, as of the last tick.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Number of ticks so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Start the next frame and return its time in milliseconds.
    pub fn tick(&mut self) -> f64 {
        let frame_time_ms = match self.mode {
            ClockMode::Simulated => self.interval_ms,
            ClockMode::Realtime => self.wait_for_next_frame(),
        };
        self.advance(frame_time_ms)
    }

    fn wait_for_next_frame(&mut self) -> f64 {
        let interval = Duration::from_secs_f64(self.interval_ms / 1000.0);
        let elapsed = self.previous.elapsed();
        if elapsed < interval {
            std::thread::sleep(interval - elapsed);
        }
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous);
        self.previous = now;
        frame_time.as_secs_f64() * 1000.0
    }

    fn advance(&mut self, frame_time_ms: f64) -> f64 {
        let frame_time_ms = if frame_time_ms > MAX_FRAME_TIME_MS {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time_ms, MAX_FRAME_TIME_MS
            );
            MAX_FRAME_TIME_MS
        } else {
            frame_time_ms.max(0.0)
        };
        self.now_ms += frame_time_ms;
        self.frame_count += 1;
        self.now_ms
    }
}
