//! Scalar wave helpers shared by particle motions and oscillators.

/// `amplitude * sin(speed * t + phase)`
#[inline]
pub fn oscillate(amplitude: f32, speed: f32, t: f32, phase: f32) -> f32 {
    amplitude * (speed * t + phase).sin()
}

/// Loops `start + offset` into `[floor, floor + range)`.
///
/// Uses Euclidean remainder so negative offsets (falling motion) wrap
/// back to the top instead of going below the floor.
#[inline]
pub fn wrap(start: f32, offset: f32, floor: f32, range: f32) -> f32 {
    if range <= 0.0 {
        return start;
    }
    floor + (start - floor + offset).rem_euclid(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn oscillate_starts_at_phase() {
        assert_eq!(oscillate(2.0, 5.0, 0.0, 0.0), 0.0);
        assert!((oscillate(2.0, 1.0, 0.0, PI / 2.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn wrap_stays_in_range() {
        for i in 0..200 {
            let t = i as f32 * 0.37;
            let rising = wrap(3.0, 4.0 * t, -1.0, 10.0);
            let falling = wrap(3.0, -4.0 * t, -1.0, 10.0);
            assert!((-1.0..=9.0).contains(&rising), "rising {rising}");
            assert!((-1.0..=9.0).contains(&falling), "falling {falling}");
        }
    }

    #[test]
    fn wrap_with_zero_range_is_identity() {
        assert_eq!(wrap(3.0, 100.0, 0.0, 0.0), 3.0);
    }
}
