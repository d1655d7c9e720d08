//! Drifting diffuse color.
//!
//! Every frame each RGB velocity receives a small random nudge, is clamped to
//! `max_speed`, and bounces off the `[0, 1]` range before being applied.

use rand::Rng;
use tracing::warn;

use crate::random::{quantized, symmetric};

/// Velocity cap used when the configured one is not finite.
pub const DEFAULT_MAX_SPEED: f32 = 0.01;

/// A body's diffuse color and its per-channel velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDrift {
    color: [f32; 4],
    velocity: [f32; 4],
    jitter: f32,
    max_speed: f32,
}

impl ColorDrift {
    /// Start at `color` with every RGB channel moving at `speed`.
    ///
    /// Alpha velocity is always zero. `max_speed` is taken as an absolute
    /// value and also caps the initial speed. A non-finite `max_speed` falls
    /// back to [`DEFAULT_MAX_SPEED`]; a non-finite speed or jitter is zero.
    pub fn new(color: [f32; 4], speed: f32, jitter: f32, max_speed: f32) -> Self {
        let max_speed = if max_speed.is_finite() {
            max_speed.abs()
        } else {
            warn!("Color speed cap {max_speed} is not finite, using {DEFAULT_MAX_SPEED}");
            DEFAULT_MAX_SPEED
        };
        let speed = if speed.is_finite() {
            speed.clamp(-max_speed, max_speed)
        } else {
            0.0
        };
        let jitter = if jitter.is_finite() { jitter.abs() } else { 0.0 };
        Self {
            color,
            velocity: [speed, speed, speed, 0.0],
            jitter,
            max_speed,
        }
    }

    /// Current RGBA color.
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Current per-channel velocity. Alpha is always zero.
    pub fn velocity(&self) -> [f32; 4] {
        self.velocity
    }

    /// Largest velocity magnitude a channel can reach.
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Advance one frame. Returns which RGB channels bounced.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> [bool; 3] {
        let mut bounced = [false; 3];
        for (ch, flag) in bounced.iter_mut().enumerate() {
            let v = (self.velocity[ch] + symmetric(rng, self.jitter))
                .clamp(-self.max_speed, self.max_speed);
            let c = self.color[ch];
            let v = if (c >= 1.0 && v > 0.0) || (c <= 0.0 && v < 0.0) {
                *flag = true;
                -v
            } else {
                v
            };
            self.velocity[ch] = v;
            self.color[ch] = c + v;
        }
        bounced
    }

    /// Replace RGB with fresh random values in `[0, 1]`, two decimals each.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for c in &mut self.color[..3] {
            *c = quantized(rng, 0.0, 1.0, 2);
        }
    }
}
