use std::f32::consts::PI;

use glam::Vec3;
use scene_catalog::animate::Animator;
use scene_catalog::graph::{Material, SceneGraph, Shape};
use scene_catalog::particles::{Motion, ParticleSpec, ParticleSystem};
use scene_catalog::scene::scene_rng;
use rand::Rng;

fn system_with(graph: &mut SceneGraph, motion: Motion, specs: Vec<ParticleSpec>) -> ParticleSystem {
    let batch = graph.add_batch(Shape::sphere(0.1), Material::glow(0xffffff, 1.0), specs.len());
    ParticleSystem::from_specs(batch, motion, specs)
}

fn positions(graph: &SceneGraph, batch: usize) -> Vec<Vec3> {
    graph.batches()[batch].buffer.as_slice().iter().map(|i| i.translation()).collect()
}

#[cfg(test)]
mod particle_tests {
    use super::*;

    // === Determinism ===

    #[test]
    fn test_same_time_gives_identical_bytes() {
        let mut graph = SceneGraph::new();
        let batch = graph.add_batch(Shape::sphere(0.1), Material::standard(0xffffff), 300);
        let mut rng = scene_rng(Some(42));
        let mut system = ParticleSystem::generate(batch, Motion::Drift, 300, &mut rng, |_, rng| {
            ParticleSpec::at(Vec3::new(rng.gen_range(-5.0..5.0), rng.gen_range(0.0..3.0), rng.gen_range(-5.0..5.0)))
                .amplitude(rng.gen_range(0.1..1.0))
                .speed(rng.gen_range(0.5..2.0))
                .phase(rng.gen_range(0.0..6.28))
        });

        system.update(&mut graph, 3.7);
        let first = graph.batches()[0].buffer.bytes().to_vec();
        system.update(&mut graph, 9.1);
        system.update(&mut graph, 3.7);
        assert_eq!(graph.batches()[0].buffer.bytes(), first.as_slice());
    }

    #[test]
    fn test_positions_do_not_depend_on_update_history() {
        let specs = vec![ParticleSpec::at(Vec3::ZERO).amplitude(1.0).speed(0.7); 4];

        let mut stepped = SceneGraph::new();
        let mut a = system_with(&mut stepped, Motion::Orbit, specs.clone());
        for i in 0..50 {
            a.update(&mut stepped, i as f32 * 0.1);
        }

        let mut jumped = SceneGraph::new();
        let mut b = system_with(&mut jumped, Motion::Orbit, specs);
        b.update(&mut jumped, 4.9);

        assert_eq!(positions(&stepped, 0), positions(&jumped, 0));
    }

    // === Batching ===

    #[test]
    fn test_one_dirty_mark_per_update_regardless_of_count() {
        for count in [1, 3, 100, 1000] {
            let mut graph = SceneGraph::new();
            let mut system = system_with(&mut graph, Motion::Bob, vec![ParticleSpec::at(Vec3::ZERO); count]);
            for t in 0..7 {
                system.update(&mut graph, t as f32);
            }
            assert_eq!(graph.batches()[0].buffer.dirty_marks(), 7, "count = {count}");
        }
    }

    #[test]
    fn test_empty_system_never_marks_dirty() {
        let mut graph = SceneGraph::new();
        let mut system = system_with(&mut graph, Motion::Pulse, Vec::new());
        assert!(system.is_empty());
        system.update(&mut graph, 0.0);
        system.update(&mut graph, 1.0);

        let buffer = &graph.batches()[0].buffer;
        assert_eq!(buffer.dirty_marks(), 0);
        assert!(!buffer.is_dirty());
    }

    // === Worked example ===

    #[test]
    fn test_three_bobbing_particles() {
        let amplitude = 0.5;
        let specs = vec![
            ParticleSpec::at(Vec3::new(0.0, 1.0, 0.0)).amplitude(amplitude).speed(1.0).phase(0.0),
            ParticleSpec::at(Vec3::new(1.0, 1.0, 0.0)).amplitude(amplitude).speed(1.0).phase(PI),
            ParticleSpec::at(Vec3::new(2.0, 1.0, 0.0)).amplitude(amplitude).speed(2.0).phase(0.0),
        ];
        let mut graph = SceneGraph::new();
        let mut system = system_with(&mut graph, Motion::Bob, specs);

        system.update(&mut graph, 0.0);
        let start = positions(&graph, 0);
        for (i, p) in start.iter().enumerate() {
            assert!((p.y - 1.0).abs() < 1e-5, "particle {i} starts at base: {p}");
            assert_eq!(p.x, i as f32);
        }

        system.update(&mut graph, 0.5);
        let later = positions(&graph, 0);
        // Opposite phases move in opposite directions; the faster one moves further.
        assert!(later[0].y > 1.0);
        assert!(later[1].y < 1.0);
        assert!((later[0].y - 1.0 + (later[1].y - 1.0)).abs() < 1e-5);
        assert!((later[2].y - (1.0 + amplitude * 1.0f32.sin())).abs() < 1e-5);
        assert_eq!(graph.batches()[0].buffer.dirty_marks(), 2);
    }
}
