//! Instanced particle animation.
//!
//! A [`ParticleSystem`] owns one immutable [`ParticleSpec`] per instance slot
//! of a batch. Every frame it recomputes each slot's transform from
//! `(spec, time)` alone and raises the batch's dirty flag once, so the whole
//! system costs one buffer upload regardless of particle count.

pub mod presets;

use glam::{Mat4, Quat, Vec3};
use rand::Rng;

use crate::animate::Animator;
use crate::graph::{BatchId, InstanceBuffer, SceneGraph};
use crate::math::{oscillate, wrap};
use crate::types::InstanceRaw;

/// Per-particle parameters, fixed for the lifetime of the system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    pub base: Vec3,
    pub amplitude: f32,
    pub speed: f32,
    pub phase: f32,
    pub scale: f32,
    /// Angular velocity about Y, radians per second
    pub spin: f32,
}

impl ParticleSpec {
    pub fn at(base: Vec3) -> Self {
        Self {
            base,
            amplitude: 0.0,
            speed: 1.0,
            phase: 0.0,
            scale: 1.0,
            spin: 0.0,
        }
    }

    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }
}

/// How a particle moves over time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Vertical sine around the base position
    Bob,
    /// Wander on all three axes at different frequencies
    Drift,
    /// Stationary, breathing scale
    Pulse,
    /// Circle of radius `amplitude` around the base in the XZ plane
    Orbit,
    /// Looping descent through `[floor, floor + range)`
    Fall { floor: f32, range: f32 },
    /// Looping ascent through `[floor, floor + range)`
    Rise { floor: f32, range: f32 },
}

impl Motion {
    /// Transform of one particle at `t` seconds.
    pub fn sample(&self, spec: &ParticleSpec, t: f32) -> Mat4 {
        let ParticleSpec { base, amplitude, speed, phase, scale, spin } = *spec;
        let mut scale = scale;

        let position = match *self {
            Motion::Bob => base + Vec3::Y * oscillate(amplitude, speed, t, phase),
            Motion::Drift => {
                base + Vec3::new(
                    oscillate(amplitude, speed, t, phase),
                    oscillate(amplitude * 0.5, speed * 0.7, t, phase * 1.3),
                    oscillate(amplitude, speed * 0.9, t, phase + std::f32::consts::FRAC_PI_2),
                )
            }
            Motion::Pulse => {
                scale *= 1.0 + oscillate(amplitude, speed, t, phase);
                base
            }
            Motion::Orbit => {
                let angle = speed * t + phase;
                base + Vec3::new(amplitude * angle.cos(), 0.0, amplitude * angle.sin())
            }
            Motion::Fall { floor, range } => Vec3::new(
                base.x + oscillate(amplitude, 1.0, t, phase),
                wrap(base.y, -speed * t, floor, range),
                base.z,
            ),
            Motion::Rise { floor, range } => Vec3::new(
                base.x + oscillate(amplitude, 1.0, t, phase),
                wrap(base.y, speed * t, floor, range),
                base.z,
            ),
        };

        let rotation = Quat::from_rotation_y(spin * t + phase);
        Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, position)
    }
}

/// N particles bound to one instanced batch
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    batch: BatchId,
    motion: Motion,
    specs: Box<[ParticleSpec]>,
}

impl ParticleSystem {
    /// Draws `count` specs from `generator`, which receives the particle
    /// index and the scene's random source.
    pub fn generate<R, F>(batch: BatchId, motion: Motion, count: usize, rng: &mut R, mut generator: F) -> Self
    where
        R: Rng + ?Sized,
        F: FnMut(usize, &mut R) -> ParticleSpec,
    {
        let specs = (0..count).map(|i| generator(i, &mut *rng)).collect();
        Self { batch, motion, specs }
    }

    pub fn from_specs(batch: BatchId, motion: Motion, specs: Vec<ParticleSpec>) -> Self {
        Self {
            batch,
            motion,
            specs: specs.into_boxed_slice(),
        }
    }

    pub fn batch(&self) -> BatchId {
        self.batch
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn specs(&self) -> &[ParticleSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn transform_at(&self, index: usize, t: f32) -> Mat4 {
        self.motion.sample(&self.specs[index], t)
    }

    /// Writes every particle's transform for time `t` into `buffer` and marks
    /// it dirty once. Does nothing for an empty system.
    pub fn write_frame(&self, buffer: &mut InstanceBuffer, t: f32) {
        debug_assert_eq!(buffer.len(), self.specs.len(), "instance count drifted from spec count");
        if self.specs.is_empty() {
            return;
        }

        for (slot, spec) in buffer.slots_mut().iter_mut().zip(self.specs.iter()) {
            *slot = InstanceRaw::from_matrix(self.motion.sample(spec, t));
        }
        buffer.mark_dirty();
    }
}

impl Animator for ParticleSystem {
    fn update(&mut self, graph: &mut SceneGraph, time: f32) {
        let batch = graph.batch_mut(self.batch);
        self.write_frame(&mut batch.buffer, time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn bob_starts_at_sine_of_phase() {
        let spec = ParticleSpec::at(Vec3::new(1.0, 2.0, 3.0)).amplitude(0.5).phase(std::f32::consts::FRAC_PI_2);
        let m = Motion::Bob.sample(&spec, 0.0);
        let p = m.transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(1.0, 2.5, 3.0)).length() < 1e-6);
    }

    #[test]
    fn fall_wraps_back_to_top() {
        let motion = Motion::Fall { floor: 0.0, range: 10.0 };
        let spec = ParticleSpec::at(Vec3::new(0.0, 1.0, 0.0)).speed(4.0);
        // 1.0 - 4.0 * 0.5 = -1.0, wraps to 9.0
        let y = motion.sample(&spec, 0.5).w_axis.y;
        assert!((y - 9.0).abs() < 1e-5);
    }

    #[test]
    fn rise_loops_within_range() {
        let motion = Motion::Rise { floor: -2.0, range: 6.0 };
        let spec = ParticleSpec::at(Vec3::new(0.0, 3.0, 0.0)).speed(1.5);
        for i in 0..100 {
            let y = motion.sample(&spec, i as f32 * 0.25).w_axis.y;
            assert!((-2.0..=4.0).contains(&y), "y = {y}");
        }
    }

    #[test]
    fn orbit_keeps_radius() {
        let spec = ParticleSpec::at(Vec3::ZERO).amplitude(3.0).speed(0.8);
        for i in 0..20 {
            let p = Motion::Orbit.sample(&spec, i as f32).w_axis.truncate();
            assert!((p.length() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn pulse_only_changes_scale() {
        let spec = ParticleSpec::at(Vec3::X).amplitude(0.5).scale(2.0);
        let m = Motion::Pulse.sample(&spec, std::f32::consts::FRAC_PI_2);
        let (scale, _, translation) = m.to_scale_rotation_translation();
        assert!((translation - Vec3::X).length() < 1e-6);
        assert!((scale.x - 3.0).abs() < 1e-5);
    }

    #[test]
    fn generate_passes_index_to_generator() {
        let mut rng = StdRng::seed_from_u64(1);
        let system = ParticleSystem::generate(BatchId(0), Motion::Bob, 5, &mut rng, |i, _| {
            ParticleSpec::at(Vec3::new(i as f32, 0.0, 0.0))
        });
        let xs: Vec<f32> = system.specs().iter().map(|s| s.base.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
