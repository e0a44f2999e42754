//! Ready-made particle effects.
//!
//! Every preset fills the box `center ± half` (or a shell/annulus where
//! noted) and returns the batch it created.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use crate::graph::{BatchId, Material, Shape};
use crate::layout::{annulus, jitter};
use crate::math::Color;
use crate::particles::{Motion, ParticleSpec};
use crate::scene::{SceneBuilder, SceneRng};

fn spec_in(rng: &mut SceneRng, center: Vec3, half: Vec3) -> ParticleSpec {
    ParticleSpec::at(center + jitter(rng, half)).phase(rng.gen_range(0.0..TAU))
}

fn falling(center: Vec3, half: Vec3) -> Motion {
    Motion::Fall { floor: center.y - half.y, range: half.y * 2.0 }
}

fn rising(center: Vec3, half: Vec3) -> Motion {
    Motion::Rise { floor: center.y - half.y, range: half.y * 2.0 }
}

/// Glowing motes wandering in place.
pub fn fireflies(b: &mut SceneBuilder, count: usize, center: Vec3, half: Vec3, color: impl Into<Color>) -> BatchId {
    b.particles(Shape::sphere(0.05), Material::glow(color, 2.5), Motion::Drift, count, |_, rng| {
        spec_in(rng, center, half)
            .amplitude(rng.gen_range(0.4..1.4))
            .speed(rng.gen_range(0.3..0.9))
            .scale(rng.gen_range(0.6..1.3))
    })
}

/// Slow-rising spores with a gentle sway.
pub fn spores(b: &mut SceneBuilder, count: usize, center: Vec3, half: Vec3, color: impl Into<Color>) -> BatchId {
    b.particles(Shape::sphere(0.04), Material::glow(color, 1.5), rising(center, half), count, |_, rng| {
        spec_in(rng, center, half)
            .amplitude(rng.gen_range(0.1..0.4))
            .speed(rng.gen_range(0.15..0.5))
            .scale(rng.gen_range(0.5..1.5))
    })
}

/// Quick, tumbling embers rising from a fire.
pub fn embers(b: &mut SceneBuilder, count: usize, center: Vec3, half: Vec3, color: impl Into<Color>) -> BatchId {
    b.particles(Shape::cube(0.05), Material::glow(color, 3.0), rising(center, half), count, |_, rng| {
        spec_in(rng, center, half)
            .amplitude(rng.gen_range(0.05..0.3))
            .speed(rng.gen_range(0.8..2.2))
            .scale(rng.gen_range(0.4..1.0))
            .spin(rng.gen_range(-4.0..4.0))
    })
}

/// Straight, fast rain streaks.
pub fn rain(b: &mut SceneBuilder, count: usize, center: Vec3, half: Vec3, color: impl Into<Color>) -> BatchId {
    let material = Material::standard(color).opacity(0.5);
    b.particles(Shape::cuboid(0.01, 0.35, 0.01), material, falling(center, half), count, |_, rng| {
        ParticleSpec::at(center + jitter(rng, half)).speed(rng.gen_range(8.0..14.0))
    })
}

/// Drifting snowflakes.
pub fn snow(b: &mut SceneBuilder, count: usize, center: Vec3, half: Vec3) -> BatchId {
    b.particles(Shape::sphere(0.04), Material::glow(0xffffff, 0.4), falling(center, half), count, |_, rng| {
        spec_in(rng, center, half)
            .amplitude(rng.gen_range(0.2..0.8))
            .speed(rng.gen_range(0.4..1.2))
            .scale(rng.gen_range(0.6..1.4))
    })
}

/// Barely moving dust in a light shaft.
pub fn dust(b: &mut SceneBuilder, count: usize, center: Vec3, half: Vec3, color: impl Into<Color>) -> BatchId {
    let material = Material::glow(color, 0.6).opacity(0.6);
    b.particles(Shape::sphere(0.02), material, Motion::Drift, count, |_, rng| {
        spec_in(rng, center, half)
            .amplitude(rng.gen_range(0.1..0.5))
            .speed(rng.gen_range(0.05..0.25))
    })
}

/// Low translucent blobs rolling along the ground.
pub fn mist(b: &mut SceneBuilder, count: usize, center: Vec3, half: Vec3, color: impl Into<Color>) -> BatchId {
    let material = Material::standard(color).opacity(0.15);
    b.particles(Shape::sphere(1.0), material, Motion::Drift, count, |_, rng| {
        spec_in(rng, center, half)
            .amplitude(rng.gen_range(0.5..2.0))
            .speed(rng.gen_range(0.03..0.12))
            .scale(rng.gen_range(0.8..2.5))
    })
}

/// Paper lanterns drifting upwards.
pub fn lanterns(b: &mut SceneBuilder, count: usize, center: Vec3, half: Vec3, color: impl Into<Color>) -> BatchId {
    b.particles(Shape::tapered(0.18, 0.12, 0.3), Material::glow(color, 2.0), rising(center, half), count, |_, rng| {
        spec_in(rng, center, half)
            .amplitude(rng.gen_range(0.2..0.6))
            .speed(rng.gen_range(0.25..0.6))
            .scale(rng.gen_range(0.8..1.3))
            .spin(rng.gen_range(-0.3..0.3))
    })
}

/// Rising bubbles for underwater scenes.
pub fn bubbles(b: &mut SceneBuilder, count: usize, center: Vec3, half: Vec3) -> BatchId {
    let material = Material::standard(0xcceeff).metal(0.1, 0.05).opacity(0.35);
    b.particles(Shape::sphere(0.08), material, rising(center, half), count, |_, rng| {
        spec_in(rng, center, half)
            .amplitude(rng.gen_range(0.05..0.25))
            .speed(rng.gen_range(0.5..1.5))
            .scale(rng.gen_range(0.4..1.6))
    })
}

/// Twinkling points on a sphere shell of `radius` around `center`.
pub fn stars(b: &mut SceneBuilder, count: usize, center: Vec3, radius: f32, color: impl Into<Color>) -> BatchId {
    b.particles(Shape::sphere(0.15), Material::glow(color, 1.5), Motion::Pulse, count, |_, rng| {
        let dir = Vec3::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
            .try_normalize()
            .unwrap_or(Vec3::Y);
        ParticleSpec::at(center + dir * radius)
            .amplitude(rng.gen_range(0.2..0.6))
            .speed(rng.gen_range(0.5..3.0))
            .phase(rng.gen_range(0.0..TAU))
            .scale(rng.gen_range(0.3..1.2))
    })
}

/// Tumbling rocks orbiting `center` between `inner` and `outer` radius.
pub fn debris_ring(
    b: &mut SceneBuilder,
    count: usize,
    center: Vec3,
    inner: f32,
    outer: f32,
    thickness: f32,
    color: impl Into<Color>,
) -> BatchId {
    let material = Material::standard(color).metal(0.2, 0.9);
    b.particles(Shape::Icosahedron { radius: 0.3 }, material, Motion::Orbit, count, |_, rng| {
        let lift = crate::layout::symmetric(rng, thickness);
        ParticleSpec::at(center + Vec3::Y * lift)
            .amplitude(rng.gen_range(inner..outer.max(inner + 0.01)))
            .speed(rng.gen_range(0.05..0.2))
            .phase(rng.gen_range(0.0..TAU))
            .scale(rng.gen_range(0.3..1.5))
            .spin(rng.gen_range(-1.0..1.0))
    })
}

/// Bright sparks showering down, as from a grinder or forge.
pub fn sparks(b: &mut SceneBuilder, count: usize, center: Vec3, half: Vec3, color: impl Into<Color>) -> BatchId {
    b.particles(Shape::cube(0.03), Material::glow(color, 4.0), falling(center, half), count, |_, rng| {
        spec_in(rng, center, half)
            .amplitude(rng.gen_range(0.1..0.5))
            .speed(rng.gen_range(2.5..6.0))
            .spin(rng.gen_range(-8.0..8.0))
    })
}

/// Flat petals or leaves fluttering down.
pub fn petals(b: &mut SceneBuilder, count: usize, center: Vec3, half: Vec3, color: impl Into<Color>) -> BatchId {
    b.particles(Shape::cuboid(0.12, 0.01, 0.08), Material::standard(color), falling(center, half), count, |_, rng| {
        spec_in(rng, center, half)
            .amplitude(rng.gen_range(0.3..1.0))
            .speed(rng.gen_range(0.3..0.9))
            .scale(rng.gen_range(0.7..1.3))
            .spin(rng.gen_range(-2.0..2.0))
    })
}

/// Small bodies circling a point at random radii, like moths round a lamp.
pub fn swarm(b: &mut SceneBuilder, count: usize, center: Vec3, inner: f32, outer: f32, color: impl Into<Color>) -> BatchId {
    b.particles(Shape::sphere(0.04), Material::glow(color, 1.2), Motion::Orbit, count, |_, rng| {
        let anchor = annulus(rng, center, 0.0, 0.3) + Vec3::Y * rng.gen_range(-0.5..0.5);
        ParticleSpec::at(anchor)
            .amplitude(rng.gen_range(inner..outer.max(inner + 0.01)))
            .speed(rng.gen_range(1.0..3.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 })
            .phase(rng.gen_range(0.0..TAU))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::scene_rng;

    #[test]
    fn rain_stays_inside_its_column() {
        let mut rng = scene_rng(Some(2));
        let mut b = SceneBuilder::new(&mut rng);
        let center = Vec3::new(0.0, 10.0, 0.0);
        let half = Vec3::new(5.0, 10.0, 5.0);
        let batch = rain(&mut b, 50, center, half, 0x99aabb);
        assert_eq!(b.graph().batch(batch).buffer.len(), 50);
    }

    #[test]
    fn zero_count_preset_is_valid() {
        let mut rng = scene_rng(Some(2));
        let mut b = SceneBuilder::new(&mut rng);
        let batch = fireflies(&mut b, 0, Vec3::ZERO, Vec3::ONE, 0xffee88);
        assert!(b.graph().batch(batch).buffer.is_empty());
    }
}
