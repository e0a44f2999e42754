use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use rand::Rng;
use scene_catalog::ambient::Stage;
use scene_catalog::animate::Animator;
use scene_catalog::graph::{Material, SceneGraph, Shape};
use scene_catalog::particles::{Motion, ParticleSpec, ParticleSystem};
use scene_catalog::scene::{scene_rng, MountedScene};
use scene_catalog::scenes::find;

fn particle_system(count: usize, motion: Motion) -> (SceneGraph, ParticleSystem) {
    let mut graph = SceneGraph::new();
    let batch = graph.add_batch(Shape::sphere(0.05), Material::glow(0xffffff, 1.0), count);
    let mut rng = scene_rng(Some(7));
    let system = ParticleSystem::generate(batch, motion, count, &mut rng, |_, rng| {
        ParticleSpec::at(Vec3::new(rng.gen_range(-10.0..10.0), rng.gen_range(0.0..5.0), rng.gen_range(-10.0..10.0)))
            .amplitude(rng.gen_range(0.2..1.0))
            .speed(rng.gen_range(0.5..2.0))
            .phase(rng.gen_range(0.0..6.28))
    });
    (graph, system)
}

fn bench_particle_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_update");
    for motion in [Motion::Bob, Motion::Drift, Motion::Fall { floor: 0.0, range: 5.0 }] {
        let (mut graph, mut system) = particle_system(300, motion);
        let mut t = 0.0f32;
        group.bench_with_input(BenchmarkId::new("300", format!("{motion:?}")), &motion, |b, _| {
            b.iter(|| {
                t += 1.0 / 60.0;
                system.update(&mut graph, black_box(t));
            })
        });
    }
    group.finish();
}

fn bench_particle_count_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_count");
    for count in [100, 1_000, 10_000] {
        let (mut graph, mut system) = particle_system(count, Motion::Drift);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| system.update(&mut graph, black_box(1.5)))
        });
    }
    group.finish();
}

fn bench_scene_frame(c: &mut Criterion) {
    let stage = Stage::new();
    let mut rng = scene_rng(Some(1));
    let mut scene = MountedScene::mount(&stage, find("Firefly Marsh").unwrap(), &mut rng);
    let mut t = 0.0f32;
    c.bench_function("scene_frame", |b| {
        b.iter(|| {
            t += 1.0 / 60.0;
            scene.update(black_box(t));
        })
    });
}

criterion_group!(benches, bench_particle_update, bench_particle_count_scaling, bench_scene_frame);
criterion_main!(benches);
