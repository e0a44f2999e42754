//! Closed square staircase loops (Penrose stairs).
//!
//! Steps climb monotonically around all four sides of a square, so the last
//! step sits `closure_drop` above the first even though the loop closes in
//! plan view. Scenes hide the drop with camera placement or by stacking
//! loops.

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub index: usize,
    /// Center of the tread; `y` is the tread height.
    pub position: Vec3,
    /// Yaw of the walking direction, radians about +Y.
    pub facing: f32,
    /// Which side of the square, `0..4`.
    pub side: usize,
}

#[derive(Debug, Clone)]
pub struct StairLoop {
    pub steps: Vec<Step>,
    pub rise: f32,
    pub tread: f32,
}

impl StairLoop {
    /// Builds a loop of `4 * steps_per_side` steps around a square of
    /// half-size `half_size` centered on `center`.
    pub fn new(center: Vec3, half_size: f32, steps_per_side: usize, rise: f32) -> Self {
        let steps_per_side = steps_per_side.max(1);
        let side_length = half_size * 2.0;
        let tread = side_length / steps_per_side as f32;

        let corners = [
            Vec3::new(-half_size, 0.0, -half_size),
            Vec3::new(half_size, 0.0, -half_size),
            Vec3::new(half_size, 0.0, half_size),
            Vec3::new(-half_size, 0.0, half_size),
        ];

        let steps = (0..4)
            .flat_map(|side| {
                let from = corners[side];
                let to = corners[(side + 1) % 4];
                let dir = (to - from).normalize();
                (0..steps_per_side).map(move |i| (side, from + dir * tread * (i as f32 + 0.5)))
            })
            .enumerate()
            .map(|(index, (side, offset))| Step {
                index,
                position: center + offset + Vec3::Y * rise * index as f32,
                facing: -(side as f32) * FRAC_PI_2,
                side,
            })
            .collect();

        Self { steps, rise, tread }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Height difference between the last and first tread.
    pub fn closure_drop(&self) -> f32 {
        match (self.steps.first(), self.steps.last()) {
            (Some(first), Some(last)) => last.position.y - first.position.y,
            _ => 0.0,
        }
    }

    /// Plan-view distance between the last tread and the first. Both sit half
    /// a tread from the starting corner, so a closed loop gives `tread / √2`.
    pub fn closure_gap(&self) -> f32 {
        match (self.steps.first(), self.steps.last()) {
            (Some(first), Some(last)) => {
                let a = Vec3::new(first.position.x, 0.0, first.position.z);
                let b = Vec3::new(last.position.x, 0.0, last.position.z);
                a.distance(b)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_has_four_sides_of_steps() {
        let stairs = StairLoop::new(Vec3::ZERO, 4.0, 6, 0.25);
        assert_eq!(stairs.len(), 24);
        for side in 0..4 {
            assert_eq!(stairs.steps.iter().filter(|s| s.side == side).count(), 6);
        }
    }

    #[test]
    fn heights_rise_monotonically() {
        let stairs = StairLoop::new(Vec3::new(0.0, 1.0, 0.0), 3.0, 5, 0.2);
        for pair in stairs.steps.windows(2) {
            assert!(pair[1].position.y > pair[0].position.y);
        }
        assert!((stairs.closure_drop() - 0.2 * 19.0).abs() < 1e-4);
    }

    #[test]
    fn loop_closes_in_plan_view() {
        let stairs = StairLoop::new(Vec3::ZERO, 4.0, 8, 0.1);
        let expected = stairs.tread * std::f32::consts::FRAC_1_SQRT_2;
        assert!((stairs.closure_gap() - expected).abs() < 1e-4);
    }
}
