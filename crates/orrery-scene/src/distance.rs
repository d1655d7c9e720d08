//! Bounded random walk of an orbit radius.

use rand::Rng;

use crate::random::symmetric;

/// Keeps a distance inside `[min, max]` while nudging it by up to `step`
/// each frame. A nudge that would leave the range is applied in the
/// opposite direction instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceWalk {
    min: f32,
    max: f32,
    step: f32,
}

impl DistanceWalk {
    /// Reversed bounds are swapped. `step` is limited to half the range so a
    /// reflected nudge always lands back inside it; a non-finite step means
    /// no movement.
    ///
    /// Returns `None` when either bound is not finite.
    pub fn new(min: f32, max: f32, step: f32) -> Option<Self> {
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let step = if step.is_finite() {
            step.abs().min((max - min) / 2.0)
        } else {
            0.0
        };
        Some(Self { min, max, step })
    }

    /// Lower bound.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Effective step after construction limits.
    pub fn step_size(&self) -> f32 {
        self.step
    }

    /// Clamp a distance into range. NaN maps to `min`.
    pub fn clamp(&self, distance: f32) -> f32 {
        if distance.is_nan() {
            self.min
        } else {
            distance.clamp(self.min, self.max)
        }
    }

    /// Next distance after one random nudge.
    pub fn step<R: Rng + ?Sized>(&self, distance: f32, rng: &mut R) -> f32 {
        let distance = self.clamp(distance);
        let delta = symmetric(rng, self.step);
        let next = distance + delta;
        let next = if next < self.min || next > self.max {
            distance - delta
        } else {
            next
        };
        self.clamp(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_step_limited_to_half_range() {
        let walk = DistanceWalk::new(3.0, 4.0, 5.0).unwrap();
        assert_eq!(walk.step_size(), 0.5);
    }

    #[test]
    fn test_reversed_bounds_swapped() {
        let walk = DistanceWalk::new(5.0, 2.0, 0.1).unwrap();
        assert_eq!((walk.min(), walk.max()), (2.0, 5.0));
    }

    #[test]
    fn test_out_of_range_start_clamped() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let walk = DistanceWalk::new(3.5, 4.5, 0.01).unwrap();
        let d = walk.step(10.0, &mut rng);
        assert!((4.49..=4.5).contains(&d));
    }

    #[test]
    fn test_walk_stays_in_range_near_edges() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let walk = DistanceWalk::new(0.0, 1.0, 0.5).unwrap();
        let mut d = 0.99;
        for _ in 0..10_000 {
            d = walk.step(d, &mut rng);
            assert!((0.0..=1.0).contains(&d), "distance {d} left range");
        }
    }

    #[test]
    fn test_zero_width_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let walk = DistanceWalk::new(2.0, 2.0, 0.3).unwrap();
        assert_eq!(walk.step(7.0, &mut rng), 2.0);
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        assert!(DistanceWalk::new(f32::NAN, 4.5, 0.01).is_none());
        assert!(DistanceWalk::new(3.5, f32::INFINITY, 0.01).is_none());
    }

    #[test]
    fn test_non_finite_step_and_distance_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let walk = DistanceWalk::new(3.5, 4.5, f32::NAN).unwrap();
        assert_eq!(walk.step_size(), 0.0);
        assert_eq!(walk.step(4.0, &mut rng), 4.0);
        assert_eq!(walk.step(f32::NAN, &mut rng), 3.5);
    }
}
