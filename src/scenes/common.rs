//! Props and lighting rigs reused across themed scenes.

use glam::Vec3;

use crate::animate::Property;
use crate::graph::{Light, LightId, Material, NodeId, Shape};
use crate::math::{golden_hue, hsv_to_rgb, Color};
use crate::particles::presets;
use crate::scene::SceneBuilder;
use crate::types::Transform;

pub fn should_terminate_fractal(depth: u32, size: f32, min_size: f32) -> bool {
    depth == 0 || size < min_size
}

pub fn fractal_color(color_seed: u32, saturation: f32, value: f32) -> Color {
    Color(hsv_to_rgb(golden_hue(color_seed), saturation, value))
}

/// Flat square floor centered on the origin.
pub fn ground(b: &mut SceneBuilder, size: f32, color: impl Into<Color>) -> NodeId {
    b.mesh(Shape::plane(size, size), Material::standard(color).metal(0.0, 1.0), Transform::IDENTITY)
}

/// Sky/ground fill plus one directional key light.
pub fn outdoor_lights(
    b: &mut SceneBuilder,
    sky: impl Into<Color>,
    ground: impl Into<Color>,
    sun: impl Into<Color>,
    sun_intensity: f32,
) -> LightId {
    b.light(Light::hemisphere(sky, ground, 0.6));
    b.light(Light::directional(sun, sun_intensity, Vec3::new(10.0, 20.0, 8.0)))
}

/// Dim ambient fill for interiors and night scenes.
pub fn night_fill(b: &mut SceneBuilder, color: impl Into<Color>, intensity: f32) -> LightId {
    b.light(Light::ambient(color, intensity))
}

/// Trunk with a round crown, returned as a group so it can sway.
pub fn tree(b: &mut SceneBuilder, at: Vec3, height: f32, crown: f32, bark: impl Into<Color>, leaves: impl Into<Color>) -> NodeId {
    let root = b.group(Transform::at(at));
    b.child(
        root,
        Shape::tapered(0.12 * height / 3.0, 0.2 * height / 3.0, height),
        Material::standard(bark),
        Transform::xyz(0.0, height * 0.5, 0.0),
    );
    b.child(root, Shape::sphere(crown), Material::standard(leaves), Transform::xyz(0.0, height + crown * 0.6, 0.0));
    root
}

/// Cone-stacked conifer.
pub fn pine(b: &mut SceneBuilder, at: Vec3, height: f32, needles: impl Into<Color>) -> NodeId {
    let needles = needles.into();
    let root = b.group(Transform::at(at));
    b.child(root, Shape::cylinder(0.15, height * 0.3), Material::standard(0x4a3020), Transform::xyz(0.0, height * 0.15, 0.0));
    for tier in 0..3 {
        let t = tier as f32;
        let radius = height * (0.35 - t * 0.08);
        b.child(
            root,
            Shape::cone(radius, height * 0.4),
            Material::standard(needles.scale(1.0 - t * 0.1)),
            Transform::xyz(0.0, height * (0.4 + t * 0.2), 0.0),
        );
    }
    root
}

pub fn rock(b: &mut SceneBuilder, at: Vec3, size: f32, color: impl Into<Color>) -> NodeId {
    let yaw = b.range(0.0, std::f32::consts::TAU);
    b.mesh(
        Shape::Icosahedron { radius: size },
        Material::standard(color).metal(0.0, 0.95),
        Transform::at(at).rotated_y(yaw).scaled_by(Vec3::new(1.0, 0.6, 1.0)),
    )
}

/// Block with a lit band of windows on the front face.
pub fn building(b: &mut SceneBuilder, at: Vec3, size: Vec3, wall: impl Into<Color>, windows: impl Into<Color>) -> NodeId {
    let windows = windows.into();
    let block = b.mesh(
        Shape::Box { size },
        Material::standard(wall).metal(0.1, 0.7),
        Transform::at(at + Vec3::Y * size.y * 0.5),
    );
    let floors = ((size.y / 1.5) as usize).max(1);
    for floor in 0..floors {
        if b.chance(0.35) {
            continue;
        }
        let y = -size.y * 0.5 + 0.9 + floor as f32 * 1.5;
        b.child(
            block,
            Shape::cuboid(size.x * 0.8, 0.5, 0.02),
            Material::glow(windows, 1.2),
            Transform::xyz(0.0, y, size.z * 0.5 + 0.01),
        );
    }
    block
}

/// Pole with a glowing head and a point light; returns the head and light.
pub fn lamp_post(b: &mut SceneBuilder, at: Vec3, height: f32, glow: impl Into<Color>) -> (NodeId, LightId) {
    let glow = glow.into();
    let pole = b.mesh(
        Shape::cylinder(0.06, height),
        Material::standard(0x202020).metal(0.8, 0.4),
        Transform::at(at + Vec3::Y * height * 0.5),
    );
    let head = b.child(pole, Shape::sphere(0.2), Material::glow(glow, 2.0), Transform::xyz(0.0, height * 0.5 + 0.1, 0.0));
    let light = b.light(Light::point(glow, 1.5, at + Vec3::Y * (height + 0.1), height * 4.0));
    (head, light)
}

/// Flickering fire: glowing cone, point light and rising embers.
pub fn campfire(b: &mut SceneBuilder, at: Vec3, scale: f32) -> LightId {
    for i in 0..5 {
        let angle = i as f32 / 5.0 * std::f32::consts::TAU;
        b.mesh(
            Shape::cylinder(0.06 * scale, 0.8 * scale),
            Material::standard(0x3b2414),
            Transform::at(at + Vec3::new(angle.cos() * 0.2 * scale, 0.1 * scale, angle.sin() * 0.2 * scale))
                .rotated(Vec3::new(1.2, angle, 0.0)),
        );
    }
    let flame = b.place(Shape::cone(0.3 * scale, 0.8 * scale), Material::glow(0xff6a00, 3.0), at + Vec3::Y * 0.45 * scale);
    b.oscillate(flame, Property::Scale, 0.12, 9.0, 0.0);
    let light = b.light(Light::point(0xff8a2a, 2.5, at + Vec3::Y * scale, 12.0 * scale));
    b.oscillate(light, Property::LightIntensity, 0.6, 13.0, 1.0);
    presets::embers(b, 40, at + Vec3::Y * 1.5 * scale, Vec3::new(0.4, 1.5, 0.4) * scale, 0xffa040);
    light
}
