//! Point generators for laying out scene geometry.
//!
//! These return positions only; scenes decide what to put at each point.

pub mod maze;
pub mod staircase;

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Evenly spaced points on a horizontal circle, with the angle of each point.
pub fn ring(center: Vec3, radius: f32, count: usize) -> impl Iterator<Item = (Vec3, f32)> {
    (0..count).map(move |i| {
        let angle = (i as f32 / count as f32) * TAU;
        let pos = center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
        (pos, angle)
    })
}

/// Grid in the XZ plane centered on `center`, yielding `(x, z, position)`.
pub fn grid(center: Vec3, spacing: f32, count_x: usize, count_z: usize) -> impl Iterator<Item = (usize, usize, Vec3)> {
    let offset_x = (count_x as f32 - 1.0) * spacing * 0.5;
    let offset_z = (count_z as f32 - 1.0) * spacing * 0.5;

    (0..count_x).flat_map(move |x| {
        (0..count_z).map(move |z| {
            let pos = Vec3::new(
                center.x + x as f32 * spacing - offset_x,
                center.y,
                center.z + z as f32 * spacing - offset_z,
            );
            (x, z, pos)
        })
    })
}

/// Rising spiral from `start_radius` to `end_radius` over `turns` turns.
pub fn spiral(
    center: Vec3,
    start_radius: f32,
    end_radius: f32,
    height_per_turn: f32,
    turns: f32,
    points_per_turn: usize,
) -> impl Iterator<Item = (Vec3, f32)> {
    let total = (turns * points_per_turn as f32) as usize;

    (0..total).map(move |i| {
        let t = i as f32 / total as f32;
        let angle = t * turns * TAU;
        let radius = start_radius + (end_radius - start_radius) * t;
        let y = t * turns * height_per_turn;
        let pos = center + Vec3::new(angle.cos() * radius, y, angle.sin() * radius);
        (pos, angle)
    })
}

/// `count` points from `from` to `to` inclusive.
pub fn line(from: Vec3, to: Vec3, count: usize) -> impl Iterator<Item = Vec3> {
    (0..count).map(move |i| {
        if count <= 1 {
            from
        } else {
            from.lerp(to, i as f32 / (count - 1) as f32)
        }
    })
}

/// Uniform random points inside the box `center ± half_extents`.
pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize, center: Vec3, half_extents: Vec3) -> Vec<Vec3> {
    (0..count)
        .map(|_| center + jitter(rng, half_extents))
        .collect()
}

/// Random offset inside `± half_extents`. Zero extents stay zero.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, half_extents: Vec3) -> Vec3 {
    Vec3::new(
        symmetric(rng, half_extents.x),
        symmetric(rng, half_extents.y),
        symmetric(rng, half_extents.z),
    )
}

/// Uniform in `[-extent, extent)`, or exactly zero for a zero extent.
pub fn symmetric<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(-extent..extent)
    } else {
        0.0
    }
}

/// Random point on an annulus in the XZ plane.
pub fn annulus<R: Rng + ?Sized>(rng: &mut R, center: Vec3, inner: f32, outer: f32) -> Vec3 {
    let angle = rng.gen_range(0.0..TAU);
    let radius = if outer > inner { rng.gen_range(inner..outer) } else { inner };
    center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ring_points_sit_on_radius() {
        let points: Vec<_> = ring(Vec3::new(0.0, 1.0, 0.0), 5.0, 12).collect();
        assert_eq!(points.len(), 12);
        for (p, _) in points {
            assert!((p.y - 1.0).abs() < 1e-6);
            assert!((Vec3::new(p.x, 0.0, p.z).length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn grid_is_centered() {
        let sum: Vec3 = grid(Vec3::ZERO, 2.0, 4, 3).map(|(_, _, p)| p).sum();
        assert!(sum.length() < 1e-4);
        assert_eq!(grid(Vec3::ZERO, 2.0, 4, 3).count(), 12);
    }

    #[test]
    fn line_hits_both_ends() {
        let pts: Vec<_> = line(Vec3::ZERO, Vec3::X * 10.0, 6).collect();
        assert_eq!(pts.first(), Some(&Vec3::ZERO));
        assert!((pts[5] - Vec3::X * 10.0).length() < 1e-6);
    }

    #[test]
    fn scatter_stays_in_box() {
        let mut rng = StdRng::seed_from_u64(9);
        let center = Vec3::new(5.0, 0.0, -5.0);
        let half = Vec3::new(2.0, 0.0, 1.0);
        for p in scatter(&mut rng, 200, center, half) {
            let d = (p - center).abs();
            assert!(d.x <= 2.0 && d.y == 0.0 && d.z <= 1.0);
        }
    }

    #[test]
    fn annulus_respects_radii() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let p = annulus(&mut rng, Vec3::ZERO, 4.0, 6.0);
            let r = p.length();
            assert!((4.0 - 1e-4..=6.0 + 1e-4).contains(&r));
        }
    }
}
