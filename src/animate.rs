//! Per-frame animation: the [`Animator`] trait and single-object oscillators.

use crate::graph::{LightId, NodeId, SceneGraph};
use crate::math::oscillate;

/// Something that mutates the scene graph as a function of elapsed time.
///
/// Implementations must be pure in `time`: calling `update` twice with the
/// same time leaves the graph in the same state.
pub trait Animator {
    fn update(&mut self, graph: &mut SceneGraph, time: f32);
}

impl<F> Animator for F
where
    F: FnMut(&mut SceneGraph, f32),
{
    fn update(&mut self, graph: &mut SceneGraph, time: f32) {
        self(graph, time)
    }
}

/// Scalar a node or light exposes to oscillators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    Scale,
    EmissiveIntensity,
    LightIntensity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Node(NodeId),
    Light(LightId),
}

impl From<NodeId> for Target {
    fn from(id: NodeId) -> Self {
        Target::Node(id)
    }
}

impl From<LightId> for Target {
    fn from(id: LightId) -> Self {
        Target::Light(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Cosine,
    /// Unbounded ramp, `base + speed * t`. Amplitude and phase are ignored.
    Linear,
}

/// Drives one property of one object with a single wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub target: Target,
    pub property: Property,
    pub base: f32,
    pub amplitude: f32,
    pub speed: f32,
    pub phase: f32,
    pub wave: Wave,
}

impl Oscillator {
    pub fn value_at(&self, time: f32) -> f32 {
        match self.wave {
            Wave::Sine => self.base + oscillate(self.amplitude, self.speed, time, self.phase),
            Wave::Cosine => {
                self.base + self.amplitude * (self.speed * time + self.phase).cos()
            }
            Wave::Linear => self.base + self.speed * time,
        }
    }

    /// Current value of `property` on `target`, used as the oscillation base.
    pub fn read(graph: &SceneGraph, target: Target, property: Property) -> f32 {
        match target {
            Target::Node(id) => {
                let node = graph.node(id);
                let t = &node.transform;
                match property {
                    Property::PositionX => t.translation.x,
                    Property::PositionY => t.translation.y,
                    Property::PositionZ => t.translation.z,
                    Property::RotationX => t.rotation.x,
                    Property::RotationY => t.rotation.y,
                    Property::RotationZ => t.rotation.z,
                    Property::Scale => t.scale.x,
                    Property::EmissiveIntensity => node.material.emissive_intensity,
                    Property::LightIntensity => {
                        panic!("LightIntensity is not a node property")
                    }
                }
            }
            Target::Light(id) => match property {
                Property::LightIntensity => graph.light(id).intensity(),
                Property::PositionX | Property::PositionY | Property::PositionZ => {
                    let p = graph.light(id).position().unwrap_or_default();
                    match property {
                        Property::PositionX => p.x,
                        Property::PositionY => p.y,
                        _ => p.z,
                    }
                }
                other => panic!("{other:?} is not a light property"),
            },
        }
    }

    fn write(graph: &mut SceneGraph, target: Target, property: Property, value: f32) {
        match target {
            Target::Node(id) => {
                let node = graph.node_mut(id);
                let t = &mut node.transform;
                match property {
                    Property::PositionX => t.translation.x = value,
                    Property::PositionY => t.translation.y = value,
                    Property::PositionZ => t.translation.z = value,
                    Property::RotationX => t.rotation.x = value,
                    Property::RotationY => t.rotation.y = value,
                    Property::RotationZ => t.rotation.z = value,
                    Property::Scale => t.scale = glam::Vec3::splat(value),
                    Property::EmissiveIntensity => node.material.emissive_intensity = value,
                    Property::LightIntensity => {
                        panic!("LightIntensity is not a node property")
                    }
                }
            }
            Target::Light(id) => {
                let light = graph.light_mut(id);
                match property {
                    Property::LightIntensity => light.set_intensity(value),
                    Property::PositionX | Property::PositionY | Property::PositionZ => {
                        let mut p = light.position().unwrap_or_default();
                        match property {
                            Property::PositionX => p.x = value,
                            Property::PositionY => p.y = value,
                            _ => p.z = value,
                        }
                        light.set_position(p);
                    }
                    other => panic!("{other:?} is not a light property"),
                }
            }
        }
    }
}

impl Animator for Oscillator {
    fn update(&mut self, graph: &mut SceneGraph, time: f32) {
        Self::write(graph, self.target, self.property, self.value_at(time));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Light, Material, Node, Shape};
    use crate::types::Transform;
    use glam::Vec3;

    fn graph_with_lantern() -> (SceneGraph, NodeId, LightId) {
        let mut graph = SceneGraph::new();
        let node = graph.add_node(Node {
            shape: Some(Shape::sphere(0.3)),
            material: Material::glow(0xffaa33, 1.5),
            transform: Transform::xyz(0.0, 2.0, 0.0),
            parent: None,
        });
        let light = graph.add_light(Light::point(0xffaa33, 2.0, Vec3::new(0.0, 2.0, 0.0), 8.0));
        (graph, node, light)
    }

    #[test]
    fn sine_oscillator_bobs_around_base() {
        let (mut graph, node, _) = graph_with_lantern();
        let mut osc = Oscillator {
            target: node.into(),
            property: Property::PositionY,
            base: 2.0,
            amplitude: 0.5,
            speed: 1.0,
            phase: 0.0,
            wave: Wave::Sine,
        };

        osc.update(&mut graph, std::f32::consts::FRAC_PI_2);
        assert!((graph.node(node).transform.translation.y - 2.5).abs() < 1e-6);
    }

    #[test]
    fn linear_wave_spins_without_bound() {
        let osc = Oscillator {
            target: Target::Node(NodeId(0)),
            property: Property::RotationY,
            base: 1.0,
            amplitude: 99.0,
            speed: 0.5,
            phase: 3.0,
            wave: Wave::Linear,
        };
        assert_eq!(osc.value_at(10.0), 6.0);
    }

    #[test]
    fn light_intensity_flickers() {
        let (mut graph, _, light) = graph_with_lantern();
        let base = Oscillator::read(&graph, light.into(), Property::LightIntensity);
        let mut osc = Oscillator {
            target: light.into(),
            property: Property::LightIntensity,
            base,
            amplitude: 0.4,
            speed: 7.0,
            phase: 0.0,
            wave: Wave::Cosine,
        };
        osc.update(&mut graph, 0.0);
        assert!((graph.light(light).intensity() - 2.4).abs() < 1e-6);
    }

    #[test]
    fn closures_are_animators() {
        let (mut graph, node, _) = graph_with_lantern();
        let mut spin = move |g: &mut SceneGraph, t: f32| {
            g.node_mut(node).transform.rotation.y = t * 2.0;
        };
        spin.update(&mut graph, 1.5);
        assert_eq!(graph.node(node).transform.rotation.y, 3.0);
    }
}
