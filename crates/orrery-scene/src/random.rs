use rand::Rng;

/// Uniform value in `[min, max]`, rounded to `decimals` decimal places.
pub(crate) fn quantized<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32, decimals: i32) -> f32 {
    let raw = min + rng.random::<f32>() * (max - min);
    let factor = 10f32.powi(decimals);
    ((raw * factor).round() / factor).clamp(min, max)
}

/// Uniform value in `[-bound, bound]`; zero unless the bound is positive and
/// finite.
pub(crate) fn symmetric<R: Rng + ?Sized>(rng: &mut R, bound: f32) -> f32 {
    if bound > 0.0 && bound.is_finite() {
        rng.random_range(-bound..=bound)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_quantized_stays_in_range_with_two_decimals() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            let v = quantized(&mut rng, 0.0, 1.0, 2);
            assert!((0.0..=1.0).contains(&v));
            assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_symmetric_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..1000 {
            assert!(symmetric(&mut rng, 0.5).abs() <= 0.5);
        }
        assert_eq!(symmetric(&mut rng, 0.0), 0.0);
        assert_eq!(symmetric(&mut rng, f32::NAN), 0.0);
        assert_eq!(symmetric(&mut rng, f32::INFINITY), 0.0);
    }
}
