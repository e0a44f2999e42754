use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::ambient::{AmbientScope, AmbientState, Stage};
use crate::animate::{Animator, Oscillator, Property, Target, Wave};
use crate::graph::{BatchId, Fog, Light, LightId, Material, Node, NodeId, SceneGraph, Shape};
use crate::math::Color;
use crate::particles::{Motion, ParticleSpec, ParticleSystem};
use crate::scenes::SceneEntry;
use crate::types::Transform;

/// Random source handed to scene builders
pub type SceneRng = StdRng;

/// Seeded source when `seed` is given, otherwise seeded from OS entropy.
pub fn scene_rng(seed: Option<u64>) -> SceneRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Collects everything one scene declares at mount time
pub struct SceneBuilder<'a> {
    graph: SceneGraph,
    ambient: AmbientState,
    animators: Vec<Box<dyn Animator>>,
    rng: &'a mut SceneRng,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(rng: &'a mut SceneRng) -> Self {
        Self {
            graph: SceneGraph::new(),
            ambient: AmbientState::default(),
            animators: Vec::new(),
            rng,
        }
    }

    // === Ambient state ===

    pub fn background(&mut self, color: impl Into<Color>) -> &mut Self {
        if self.ambient.background.is_some() {
            log::warn!("scene set its background twice, keeping the last one");
        }
        self.ambient.background = Some(color.into());
        self
    }

    pub fn fog(&mut self, fog: Fog) -> &mut Self {
        if self.ambient.fog.is_some() {
            log::warn!("scene set its fog twice, keeping the last one");
        }
        self.ambient.fog = Some(fog);
        self
    }

    // === Geometry and lights ===

    pub fn light(&mut self, light: Light) -> LightId {
        self.graph.add_light(light)
    }

    pub fn mesh(&mut self, shape: Shape, material: Material, transform: Transform) -> NodeId {
        self.graph.add_node(Node {
            shape: Some(shape),
            material,
            transform,
            parent: None,
        })
    }

    /// Mesh at `position` with no rotation or scale.
    pub fn place(&mut self, shape: Shape, material: Material, position: Vec3) -> NodeId {
        self.mesh(shape, material, Transform::at(position))
    }

    pub fn child(&mut self, parent: NodeId, shape: Shape, material: Material, transform: Transform) -> NodeId {
        self.graph.add_node(Node {
            shape: Some(shape),
            material,
            transform,
            parent: Some(parent),
        })
    }

    /// Empty node used to move or spin its children together.
    pub fn group(&mut self, transform: Transform) -> NodeId {
        self.graph.add_node(Node {
            shape: None,
            material: Material::standard(Color::BLACK),
            transform,
            parent: None,
        })
    }

    pub fn child_group(&mut self, parent: NodeId, transform: Transform) -> NodeId {
        self.graph.add_node(Node {
            shape: None,
            material: Material::standard(Color::BLACK),
            transform,
            parent: Some(parent),
        })
    }

    // === Animation ===

    /// Instanced particle batch of `count` copies of `shape`, animated by
    /// `motion` from specs drawn through `generator`.
    pub fn particles<F>(&mut self, shape: Shape, material: Material, motion: Motion, count: usize, generator: F) -> BatchId
    where
        F: FnMut(usize, &mut SceneRng) -> ParticleSpec,
    {
        let batch = self.graph.add_batch(shape, material, count);
        let system = ParticleSystem::generate(batch, motion, count, &mut *self.rng, generator);
        self.animators.push(Box::new(system));
        batch
    }

    /// Sine oscillation of `property` around its current value.
    pub fn oscillate(&mut self, target: impl Into<Target>, property: Property, amplitude: f32, speed: f32, phase: f32) {
        self.wave(target, property, amplitude, speed, phase, Wave::Sine);
    }

    pub fn wave(
        &mut self,
        target: impl Into<Target>,
        property: Property,
        amplitude: f32,
        speed: f32,
        phase: f32,
        wave: Wave,
    ) {
        let target = target.into();
        let base = Oscillator::read(&self.graph, target, property);
        self.animators.push(Box::new(Oscillator {
            target,
            property,
            base,
            amplitude,
            speed,
            phase,
            wave,
        }));
    }

    /// Continuous rotation about one axis at `speed` radians per second.
    pub fn spin(&mut self, node: NodeId, axis: Property, speed: f32) {
        self.wave(node, axis, 0.0, speed, 0.0, Wave::Linear);
    }

    pub fn animate(&mut self, animator: impl Animator + 'static) {
        self.animators.push(Box::new(animator));
    }

    // === Randomness ===

    pub fn rng(&mut self) -> &mut SceneRng {
        &mut *self.rng
    }

    /// Uniform in `[lo, hi)`; returns `lo` when the range is empty.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi > lo {
            self.rng.gen_range(lo..hi)
        } else {
            lo
        }
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    fn finish(self) -> (SceneGraph, AmbientState, Vec<Box<dyn Animator>>) {
        (self.graph, self.ambient, self.animators)
    }
}

/// Counts describing a mounted scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SceneStats {
    pub meshes: usize,
    pub groups: usize,
    pub lights: usize,
    pub batches: usize,
    pub instances: usize,
    pub animators: usize,
}

/// A registry entry built and installed on a stage.
///
/// Dropping it, or calling [`MountedScene::unmount`], releases the ambient
/// state it installed.
pub struct MountedScene {
    name: &'static str,
    graph: SceneGraph,
    animators: Vec<Box<dyn Animator>>,
    scope: AmbientScope,
}

impl MountedScene {
    /// Builds `entry`, installs its ambient state and poses it at `t = 0`.
    pub fn mount(stage: &Stage, entry: &SceneEntry, rng: &mut SceneRng) -> Self {
        let mut builder = SceneBuilder::new(rng);
        (entry.build)(&mut builder);
        let (graph, ambient, animators) = builder.finish();

        let scope = stage.scope(ambient);
        let mut scene = Self {
            name: entry.name,
            graph,
            animators,
            scope,
        };
        scene.update(0.0);

        let stats = scene.stats();
        log::info!(
            "mounted {:?}: {} meshes, {} lights, {} instances in {} batches, {} animators",
            scene.name,
            stats.meshes,
            stats.lights,
            stats.instances,
            stats.batches,
            stats.animators,
        );
        scene
    }

    /// Runs every animator for `time` seconds since mount, in declaration order.
    pub fn update(&mut self, time: f32) {
        for animator in &mut self.animators {
            animator.update(&mut self.graph, time);
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    /// Ambient state that was active before this scene mounted.
    pub fn previous_ambient(&self) -> AmbientState {
        self.scope.previous()
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            meshes: self.graph.mesh_count(),
            groups: self.graph.nodes().len() - self.graph.mesh_count(),
            lights: self.graph.lights().len(),
            batches: self.graph.batches().len(),
            instances: self.graph.instance_count(),
            animators: self.animators.len(),
        }
    }

    pub fn unmount(self) {
        log::info!("unmounted {:?}", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lantern(b: &mut SceneBuilder) {
        b.background(0x101020).fog(Fog::linear(0x101020, 5.0, 40.0));
        b.light(Light::ambient(0xffffff, 0.3));
        let post = b.place(Shape::cylinder(0.1, 3.0), Material::standard(0x222222), Vec3::new(0.0, 1.5, 0.0));
        let lamp = b.child(post, Shape::sphere(0.3), Material::glow(0xffcc66, 2.0), Transform::xyz(0.0, 1.6, 0.0));
        b.oscillate(lamp, Property::EmissiveIntensity, 0.5, 3.0, 0.0);
        b.particles(Shape::sphere(0.05), Material::glow(0xffee88, 3.0), Motion::Drift, 10, |i, rng| {
            ParticleSpec::at(Vec3::new(i as f32, rng.gen_range(1.0..3.0), 0.0)).amplitude(0.4)
        });
    }

    const LANTERN: SceneEntry = SceneEntry::new("Lantern", lantern);

    #[test]
    fn mount_collects_stats() {
        let stage = Stage::new();
        let mut rng = scene_rng(Some(5));
        let scene = MountedScene::mount(&stage, &LANTERN, &mut rng);
        let stats = scene.stats();
        assert_eq!(stats.meshes, 2);
        assert_eq!(stats.lights, 1);
        assert_eq!(stats.instances, 10);
        assert_eq!(stats.animators, 2);
        assert_eq!(stage.ambient().background, Some(Color::hex(0x101020)));
        scene.unmount();
        assert_eq!(stage.ambient(), AmbientState::default());
    }

    #[test]
    fn mount_poses_particles_at_time_zero() {
        let stage = Stage::new();
        let mut rng = scene_rng(Some(5));
        let scene = MountedScene::mount(&stage, &LANTERN, &mut rng);
        let batch = &scene.graph().batches()[0];
        assert_eq!(batch.buffer.dirty_marks(), 1);
        assert!(batch.buffer.as_slice().iter().any(|i| i.translation() != Vec3::ZERO));
    }

    #[test]
    fn same_seed_builds_same_specs() {
        let stage = Stage::new();
        let a = MountedScene::mount(&stage, &LANTERN, &mut scene_rng(Some(11)));
        let bytes_a = a.graph().batches()[0].buffer.bytes().to_vec();
        drop(a);
        let b = MountedScene::mount(&stage, &LANTERN, &mut scene_rng(Some(11)));
        assert_eq!(bytes_a, b.graph().batches()[0].buffer.bytes());
    }

    #[test]
    fn second_background_wins() {
        let mut rng = scene_rng(Some(0));
        let mut b = SceneBuilder::new(&mut rng);
        b.background(0x111111).background(0x222222);
        let (_, ambient, _) = b.finish();
        assert_eq!(ambient.background, Some(Color::hex(0x222222)));
        assert_eq!(ambient.fog, None);
    }

    #[test]
    fn oscillate_uses_current_value_as_base() {
        let mut rng = scene_rng(Some(0));
        let mut b = SceneBuilder::new(&mut rng);
        let cube = b.place(Shape::cube(1.0), Material::standard(0xffffff), Vec3::new(0.0, 2.0, 0.0));
        b.oscillate(cube, Property::PositionY, 0.5, 1.0, std::f32::consts::FRAC_PI_2);
        let (mut graph, _, mut animators) = b.finish();

        animators[0].update(&mut graph, 0.0);
        assert!((graph.node(cube).transform.translation.y - 2.5).abs() < 1e-6);
    }

    #[test]
    fn spin_and_closures_run_in_order() {
        let mut rng = scene_rng(Some(0));
        let mut b = SceneBuilder::new(&mut rng);
        let hub = b.group(Transform::IDENTITY);
        let arm = b.child(hub, Shape::cube(0.2), Material::standard(0xffffff), Transform::xyz(1.0, 0.0, 0.0));
        b.spin(hub, Property::RotationY, 2.0);
        b.animate(move |g: &mut SceneGraph, _t: f32| {
            let yaw = g.node(hub).transform.rotation.y;
            g.node_mut(arm).transform.translation.y = yaw;
        });
        let (mut graph, _, mut animators) = b.finish();
        for animator in &mut animators {
            animator.update(&mut graph, 0.25);
        }

        assert!((graph.node(hub).transform.rotation.y - 0.5).abs() < 1e-6);
        assert!((graph.node(arm).transform.translation.y - 0.5).abs() < 1e-6);
        let world = graph.world_matrix(arm).transform_point3(Vec3::ZERO);
        assert!((world.length() - 0.5f32.hypot(1.0)).abs() < 1e-5);
    }
}
