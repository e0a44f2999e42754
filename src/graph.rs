//! In-memory render tree for one mounted scene.
//!
//! Nodes, lights and instanced batches live in flat arenas and are addressed
//! by typed indices. Handles are only minted by [`SceneGraph`] itself, so an
//! out-of-range handle is a construction bug and indexing panics.

use glam::{Mat4, Vec3};

use crate::math::Color;
use crate::types::{InstanceRaw, Transform};

/// Primitive geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box { size: Vec3 },
    Sphere { radius: f32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    Cone { radius: f32, height: f32 },
    Torus { radius: f32, tube: f32 },
    Plane { width: f32, depth: f32 },
    Icosahedron { radius: f32 },
    Octahedron { radius: f32 },
}

impl Shape {
    pub fn cube(size: f32) -> Self {
        Shape::Box { size: Vec3::splat(size) }
    }

    pub fn cuboid(x: f32, y: f32, z: f32) -> Self {
        Shape::Box { size: Vec3::new(x, y, z) }
    }

    pub fn sphere(radius: f32) -> Self {
        Shape::Sphere { radius }
    }

    pub fn cylinder(radius: f32, height: f32) -> Self {
        Shape::Cylinder { radius_top: radius, radius_bottom: radius, height }
    }

    pub fn tapered(radius_top: f32, radius_bottom: f32, height: f32) -> Self {
        Shape::Cylinder { radius_top, radius_bottom, height }
    }

    pub fn cone(radius: f32, height: f32) -> Self {
        Shape::Cone { radius, height }
    }

    pub fn torus(radius: f32, tube: f32) -> Self {
        Shape::Torus { radius, tube }
    }

    pub fn plane(width: f32, depth: f32) -> Self {
        Shape::Plane { width, depth }
    }

    /// Half extents of the shape's local bounding box.
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            Shape::Box { size } => size * 0.5,
            Shape::Sphere { radius }
            | Shape::Icosahedron { radius }
            | Shape::Octahedron { radius } => Vec3::splat(radius),
            Shape::Cylinder { radius_top, radius_bottom, height } => {
                let r = radius_top.max(radius_bottom);
                Vec3::new(r, height * 0.5, r)
            }
            Shape::Cone { radius, height } => Vec3::new(radius, height * 0.5, radius),
            Shape::Torus { radius, tube } => Vec3::new(radius + tube, tube, radius + tube),
            Shape::Plane { width, depth } => Vec3::new(width * 0.5, 0.0, depth * 0.5),
        }
    }
}

/// Surface description shared by nodes and batches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub opacity: f32,
}

impl Material {
    pub fn standard(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            metalness: 0.0,
            roughness: 0.8,
            opacity: 1.0,
        }
    }

    /// Self-lit material, emissive color equal to the base color.
    pub fn glow(color: impl Into<Color>, intensity: f32) -> Self {
        let color = color.into();
        Self::standard(color).emissive(color, intensity)
    }

    pub fn emissive(mut self, color: impl Into<Color>, intensity: f32) -> Self {
        self.emissive = color.into();
        self.emissive_intensity = intensity;
        self
    }

    pub fn metal(mut self, metalness: f32, roughness: f32) -> Self {
        self.metalness = metalness;
        self.roughness = roughness;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient { color: Color, intensity: f32 },
    Hemisphere { sky: Color, ground: Color, intensity: f32 },
    Directional { color: Color, intensity: f32, position: Vec3 },
    Point { color: Color, intensity: f32, position: Vec3, distance: f32 },
    Spot { color: Color, intensity: f32, position: Vec3, target: Vec3, angle: f32 },
}

impl Light {
    pub fn ambient(color: impl Into<Color>, intensity: f32) -> Self {
        Light::Ambient { color: color.into(), intensity }
    }

    pub fn hemisphere(sky: impl Into<Color>, ground: impl Into<Color>, intensity: f32) -> Self {
        Light::Hemisphere { sky: sky.into(), ground: ground.into(), intensity }
    }

    pub fn directional(color: impl Into<Color>, intensity: f32, position: Vec3) -> Self {
        Light::Directional { color: color.into(), intensity, position }
    }

    pub fn point(color: impl Into<Color>, intensity: f32, position: Vec3, distance: f32) -> Self {
        Light::Point { color: color.into(), intensity, position, distance }
    }

    pub fn spot(color: impl Into<Color>, intensity: f32, position: Vec3, target: Vec3, angle: f32) -> Self {
        Light::Spot { color: color.into(), intensity, position, target, angle }
    }

    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity, .. }
            | Light::Hemisphere { intensity, .. }
            | Light::Directional { intensity, .. }
            | Light::Point { intensity, .. }
            | Light::Spot { intensity, .. } => intensity,
        }
    }

    pub fn set_intensity(&mut self, value: f32) {
        match self {
            Light::Ambient { intensity, .. }
            | Light::Hemisphere { intensity, .. }
            | Light::Directional { intensity, .. }
            | Light::Point { intensity, .. }
            | Light::Spot { intensity, .. } => *intensity = value,
        }
    }

    pub fn position(&self) -> Option<Vec3> {
        match *self {
            Light::Directional { position, .. }
            | Light::Point { position, .. }
            | Light::Spot { position, .. } => Some(position),
            Light::Ambient { .. } | Light::Hemisphere { .. } => None,
        }
    }

    pub fn set_position(&mut self, value: Vec3) {
        match self {
            Light::Directional { position, .. }
            | Light::Point { position, .. }
            | Light::Spot { position, .. } => *position = value,
            Light::Ambient { .. } | Light::Hemisphere { .. } => {}
        }
    }
}

/// Scene fog, linear by distance or exponential by density
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fog {
    Linear { color: Color, near: f32, far: f32 },
    Exponential { color: Color, density: f32 },
}

impl Fog {
    pub fn linear(color: impl Into<Color>, near: f32, far: f32) -> Self {
        Fog::Linear { color: color.into(), near, far }
    }

    pub fn exp(color: impl Into<Color>, density: f32) -> Self {
        Fog::Exponential { color: color.into(), density }
    }

    pub fn color(&self) -> Color {
        match *self {
            Fog::Linear { color, .. } | Fog::Exponential { color, .. } => color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchId(pub(crate) usize);

/// A mesh, or a group when `shape` is `None`
#[derive(Debug, Clone)]
pub struct Node {
    pub shape: Option<Shape>,
    pub material: Material,
    pub transform: Transform,
    pub parent: Option<NodeId>,
}

/// Fixed-size array of instance transforms plus its upload flag.
///
/// The dirty flag is what a GPU uploader polls; `dirty_marks` counts how many
/// times it was raised so callers can verify batching.
#[derive(Debug, Clone)]
pub struct InstanceBuffer {
    instances: Box<[InstanceRaw]>,
    dirty: bool,
    dirty_marks: u64,
}

impl InstanceBuffer {
    pub fn new(count: usize) -> Self {
        Self {
            instances: vec![InstanceRaw::IDENTITY; count].into_boxed_slice(),
            dirty: false,
            dirty_marks: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn as_slice(&self) -> &[InstanceRaw] {
        &self.instances
    }

    /// Mutable view of the slots. Writing through it does not raise the
    /// dirty flag; call [`InstanceBuffer::mark_dirty`] once afterwards.
    pub fn slots_mut(&mut self) -> &mut [InstanceRaw] {
        &mut self.instances
    }

    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
        self.dirty_marks += 1;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the dirty flag and clears it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn dirty_marks(&self) -> u64 {
        self.dirty_marks
    }
}

/// One shape and material drawn once per instance slot
#[derive(Debug, Clone)]
pub struct InstancedBatch {
    pub shape: Shape,
    pub material: Material,
    pub buffer: InstanceBuffer,
}

#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    lights: Vec<Light>,
    batches: Vec<InstancedBatch>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        if let Some(parent) = node.parent {
            assert!(parent.0 < self.nodes.len(), "parent {parent:?} does not exist");
        }
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn add_light(&mut self, light: Light) -> LightId {
        self.lights.push(light);
        LightId(self.lights.len() - 1)
    }

    pub fn add_batch(&mut self, shape: Shape, material: Material, count: usize) -> BatchId {
        self.batches.push(InstancedBatch {
            shape,
            material,
            buffer: InstanceBuffer::new(count),
        });
        BatchId(self.batches.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn light(&self, id: LightId) -> &Light {
        &self.lights[id.0]
    }

    pub fn light_mut(&mut self, id: LightId) -> &mut Light {
        &mut self.lights[id.0]
    }

    pub fn batch(&self, id: BatchId) -> &InstancedBatch {
        &self.batches[id.0]
    }

    pub fn batch_mut(&mut self, id: BatchId) -> &mut InstancedBatch {
        &mut self.batches[id.0]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn batches(&self) -> &[InstancedBatch] {
        &self.batches
    }

    pub fn batches_mut(&mut self) -> &mut [InstancedBatch] {
        &mut self.batches
    }

    pub fn mesh_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.shape.is_some()).count()
    }

    pub fn instance_count(&self) -> usize {
        self.batches.iter().map(|b| b.buffer.len()).sum()
    }

    /// World matrix of a node, composed through its parents.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = self.node(id);
        let local = node.transform.matrix();
        match node.parent {
            Some(parent) => self.world_matrix(parent) * local,
            None => local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(parent: Option<NodeId>, at: Vec3) -> Node {
        Node {
            shape: Some(Shape::cube(1.0)),
            material: Material::standard(0xffffff),
            transform: Transform::at(at),
            parent,
        }
    }

    #[test]
    fn world_matrix_composes_parents() {
        let mut graph = SceneGraph::new();
        let root = graph.add_node(mesh(None, Vec3::new(1.0, 0.0, 0.0)));
        let child = graph.add_node(mesh(Some(root), Vec3::new(0.0, 2.0, 0.0)));

        let world = graph.world_matrix(child);
        let origin = world.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6);
    }

    #[test]
    #[should_panic]
    fn unknown_parent_is_rejected() {
        let mut graph = SceneGraph::new();
        graph.add_node(mesh(Some(NodeId(3)), Vec3::ZERO));
    }

    #[test]
    fn take_dirty_clears_flag_but_keeps_count() {
        let mut buffer = InstanceBuffer::new(4);
        assert!(!buffer.is_dirty());
        buffer.mark_dirty();
        assert!(buffer.take_dirty());
        assert!(!buffer.is_dirty());
        assert_eq!(buffer.dirty_marks(), 1);
    }

    #[test]
    fn instance_count_sums_batches() {
        let mut graph = SceneGraph::new();
        graph.add_batch(Shape::sphere(0.1), Material::standard(0xffffff), 12);
        graph.add_batch(Shape::sphere(0.1), Material::standard(0xffffff), 0);
        graph.add_batch(Shape::cube(0.1), Material::standard(0xffffff), 5);
        assert_eq!(graph.instance_count(), 17);
        assert_eq!(graph.batch(BatchId(0)).buffer.bytes().len(), 12 * 64);
    }

    #[test]
    fn light_intensity_is_writable() {
        let mut light = Light::point(0xff8800, 1.0, Vec3::Y, 10.0);
        light.set_intensity(2.5);
        assert_eq!(light.intensity(), 2.5);
        assert_eq!(light.position(), Some(Vec3::Y));
    }
}
