use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::common::{campfire, ground, night_fill, outdoor_lights, pine, rock, tree};
use crate::animate::{Property, Wave};
use crate::graph::{Fog, Light, Material, NodeId, SceneGraph, Shape};
use crate::layout;
use crate::math::Color;
use crate::particles::presets;
use crate::scene::SceneBuilder;
use crate::types::Transform;

/// Upright faceted crystal; returns the node so callers can pulse it.
fn crystal(b: &mut SceneBuilder, at: Vec3, height: f32, color: impl Into<Color>, tilt: Vec3) -> NodeId {
    b.mesh(
        Shape::Octahedron { radius: 1.0 },
        Material::glow(color, 1.5).metal(0.2, 0.1).opacity(0.85),
        Transform::at(at + Vec3::Y * height * 0.5)
            .rotated(tilt)
            .scaled_by(Vec3::new(height * 0.2, height * 0.5, height * 0.2)),
    )
}

/// Inverted rock cone with grass on top.
fn sky_island(b: &mut SceneBuilder, at: Vec3, radius: f32) -> NodeId {
    let island = b.group(Transform::at(at));
    b.child(island, Shape::cylinder(radius, 0.6), Material::standard(0x5a9a3a), Transform::IDENTITY);
    b.child(
        island,
        Shape::cone(radius, radius * 1.6),
        Material::standard(0x6a5040),
        Transform::xyz(0.0, -radius * 0.8 - 0.3, 0.0).rotated_x(PI),
    );
    island
}

pub fn floating_islands(b: &mut SceneBuilder) {
    b.background(0x9ad0ff).fog(Fog::linear(0x9ad0ff, 60.0, 220.0));
    outdoor_lights(b, 0xe0f4ff, 0x8090a0, 0xfff8e0, 1.3);

    for (i, (at, _)) in layout::spiral(Vec3::new(0.0, -10.0, 0.0), 10.0, 60.0, 12.0, 2.0, 5).enumerate() {
        let radius = 4.0 + (i % 3) as f32 * 2.5;
        let island = sky_island(b, at, radius);
        let phase = b.range(0.0, TAU);
        b.oscillate(island, Property::PositionY, 1.0, 0.3, phase);
        if i % 2 == 0 {
            let house = b.child(island, Shape::cuboid(2.0, 1.6, 2.0), Material::standard(0xf0e0c0), Transform::xyz(0.0, 1.1, 0.0));
            b.child(house, Shape::cone(1.7, 1.2), Material::standard(0xa04030), Transform::xyz(0.0, 1.4, 0.0));
        } else {
            b.child(island, Shape::sphere(1.6), Material::standard(0x3a8a3a), Transform::xyz(0.5, 2.4, 0.0));
            b.child(island, Shape::cylinder(0.25, 2.0), Material::standard(0x5a3a20), Transform::xyz(0.5, 1.2, 0.0));
        }
    }

    let falls = b.place(Shape::cuboid(1.0, 30.0, 0.2), Material::standard(0xc0e8ff).opacity(0.5), Vec3::new(10.0, -25.0, 0.0));
    b.oscillate(falls, Property::EmissiveIntensity, 0.2, 4.0, 0.0);
    presets::mist(b, 40, Vec3::new(0.0, -30.0, 0.0), Vec3::new(60.0, 4.0, 60.0), 0xffffff);
    presets::swarm(b, 30, Vec3::new(0.0, 20.0, 0.0), 20.0, 40.0, 0x404040);
}

pub fn wizard_tower(b: &mut SceneBuilder) {
    b.background(0x1a1030).fog(Fog::exp(0x1a1030, 0.02));
    night_fill(b, 0x302050, 0.4);
    ground(b, 100.0, 0x2a3a2a);

    let tower = b.group(Transform::IDENTITY);
    for tier in 0..5 {
        let radius = 4.0 - tier as f32 * 0.4;
        let y = tier as f32 * 5.0 + 2.5;
        b.child(tower, Shape::tapered(radius - 0.3, radius, 5.0), Material::standard(0x6a6070), Transform::xyz(0.0, y, 0.0));
        for (at, angle) in layout::ring(Vec3::new(0.0, y, 0.0), radius - 0.1, 4) {
            let window = b.child(
                tower,
                Shape::cuboid(0.6, 1.0, 0.05),
                Material::glow(0xffc060, 1.5),
                Transform::at(at).rotated_y(-angle + FRAC_PI_2 + tier as f32),
            );
            b.oscillate(window, Property::EmissiveIntensity, 0.5, 2.0, angle + tier as f32);
        }
    }
    b.child(tower, Shape::cone(2.8, 6.0), Material::standard(0x302060), Transform::xyz(0.0, 28.0, 0.0));

    let orb = b.place(Shape::sphere(0.8), Material::glow(0x80a0ff, 4.0), Vec3::new(0.0, 33.0, 0.0));
    b.oscillate(orb, Property::PositionY, 0.6, 1.0, 0.0);
    let halo = b.light(Light::point(0x80a0ff, 3.0, Vec3::new(0.0, 33.0, 0.0), 60.0));
    b.oscillate(halo, Property::LightIntensity, 1.0, 1.5, 0.0);
    let rings = b.group(Transform::xyz(0.0, 33.0, 0.0));
    for k in 0..3 {
        b.child(rings, Shape::torus(2.0 + k as f32 * 0.6, 0.05), Material::glow(0xa0c0ff, 2.0), Transform::IDENTITY.rotated(Vec3::new(k as f32, 0.0, k as f32 * 0.7)));
    }
    b.spin(rings, Property::RotationY, 1.2);

    presets::swarm(b, 100, Vec3::new(0.0, 30.0, 0.0), 3.0, 8.0, 0xc0d0ff);
    presets::stars(b, 300, Vec3::ZERO, 200.0, 0xffffff);
}

pub fn crystal_cavern(b: &mut SceneBuilder) {
    b.background(0x05050c).fog(Fog::exp(0x0a0818, 0.05));
    night_fill(b, 0x1a1030, 0.3);
    ground(b, 60.0, 0x1a1820);
    b.mesh(Shape::sphere(30.0), Material::standard(0x201c28).metal(0.0, 1.0), Transform::IDENTITY.scaled_by(Vec3::new(1.0, 0.5, 1.0)));

    let hues = [0x9b5de5, 0x00bbf9, 0x00f5d4, 0xf15bb5];
    for at in layout::scatter(b.rng(), 50, Vec3::ZERO, Vec3::new(20.0, 0.0, 20.0)) {
        let color = b.pick(&hues);
        let height = b.range(1.0, 5.0);
        let tilt = layout::jitter(b.rng(), Vec3::new(0.4, 0.0, 0.4));
        let c = crystal(b, at, height, color, tilt);
        let rate = b.range(0.3, 1.2);
        b.oscillate(c, Property::EmissiveIntensity, 0.8, rate, at.x);
    }
    for at in layout::scatter(b.rng(), 20, Vec3::new(0.0, 13.0, 0.0), Vec3::new(18.0, 0.0, 18.0)) {
        let color = b.pick(&hues);
        crystal(b, at - Vec3::Y * 3.0, 3.0, color, Vec3::new(PI, 0.0, 0.0));
    }
    for (i, color) in hues.into_iter().enumerate() {
        let at = Vec3::new(-12.0 + i as f32 * 8.0, 3.0, 0.0);
        let light = b.light(Light::point(color, 1.5, at, 18.0));
        b.oscillate(light, Property::LightIntensity, 0.5, 0.7, i as f32);
    }

    presets::spores(b, 150, Vec3::new(0.0, 5.0, 0.0), Vec3::new(18.0, 5.0, 18.0), 0xc0a0ff);
}

pub fn dragon_hoard(b: &mut SceneBuilder) {
    b.background(0x100804).fog(Fog::exp(0x1a0c04, 0.04));
    night_fill(b, 0x3a2010, 0.3);
    ground(b, 60.0, 0x2a2018);

    for i in 0..14 {
        let radius = 9.0 - i as f32 * 0.55;
        b.mesh(
            Shape::sphere(radius),
            Material::standard(0xd4a020).metal(1.0, 0.3),
            Transform::xyz(0.0, i as f32 * 0.15 - 2.0, 0.0).scaled_by(Vec3::new(1.0, 0.35, 1.0)),
        );
    }
    for at in layout::scatter(b.rng(), 40, Vec3::new(0.0, 1.5, 0.0), Vec3::new(7.0, 0.5, 7.0)) {
        let gem = b.pick(&[0xe0115f, 0x50c878, 0x0f52ba, 0xffd700]);
        let spin = b.range(0.2, 1.0);
        let g = b.place(Shape::Octahedron { radius: 0.25 }, Material::glow(gem, 1.0).metal(0.5, 0.1), at);
        b.spin(g, Property::RotationY, spin);
    }

    let dragon = b.group(Transform::xyz(0.0, 4.0, -4.0));
    b.child(dragon, Shape::sphere(3.0), Material::standard(0x4a1a1a).metal(0.4, 0.5), Transform::IDENTITY.scaled_by(Vec3::new(1.0, 0.7, 2.0)));
    b.child(dragon, Shape::cone(1.2, 4.0), Material::standard(0x4a1a1a), Transform::xyz(0.0, 2.5, 5.0).rotated_x(1.2));
    for side in [-1.0f32, 1.0] {
        let wing = b.child(dragon, Shape::cuboid(7.0, 0.1, 4.0), Material::standard(0x3a1010).opacity(0.9), Transform::xyz(side * 5.0, 1.5, 0.0));
        b.oscillate(wing, Property::RotationZ, 0.15 * side, 0.4, 0.0);
    }
    // Slow breathing.
    b.oscillate(dragon, Property::Scale, 0.03, 0.5, 0.0);
    let eye = b.child(dragon, Shape::sphere(0.2), Material::glow(0xffa000, 4.0), Transform::xyz(0.5, 3.2, 6.5));
    b.oscillate(eye, Property::EmissiveIntensity, 2.0, 0.2, 0.0);

    campfire(b, Vec3::new(8.0, 0.0, 6.0), 1.5);
    presets::dust(b, 150, Vec3::new(0.0, 4.0, 0.0), Vec3::new(12.0, 4.0, 12.0), 0xffd070);
}

pub fn enchanted_library(b: &mut SceneBuilder) {
    b.background(0x1a1008).fog(Fog::exp(0x1a1008, 0.03));
    night_fill(b, 0x402818, 0.5);
    ground(b, 50.0, 0x3a2418);

    let bindings = [0x7a1a1a, 0x1a3a6a, 0x2a5a2a, 0x6a4a1a, 0x4a1a5a];
    for (at, angle) in layout::ring(Vec3::ZERO, 14.0, 12) {
        let case = b.group(Transform::at(at).rotated_y(-angle - FRAC_PI_2));
        b.child(case, Shape::cuboid(5.0, 10.0, 1.2), Material::standard(0x4a2a18), Transform::xyz(0.0, 5.0, 0.0));
        for shelf in 0..5 {
            let color = b.pick(&bindings);
            b.child(case, Shape::cuboid(4.6, 1.4, 0.9), Material::standard(color), Transform::xyz(0.0, 1.0 + shelf as f32 * 1.9, 0.2));
        }
    }

    for (i, (at, _)) in layout::spiral(Vec3::new(0.0, 2.0, 0.0), 3.0, 8.0, 3.0, 2.5, 8).enumerate() {
        let book = b.mesh(Shape::cuboid(0.6, 0.1, 0.8), Material::standard(bindings[i % bindings.len()]), Transform::at(at));
        b.oscillate(book, Property::PositionY, 0.3, 0.8, i as f32 * 0.5);
        b.oscillate(book, Property::RotationZ, 0.3, 1.5, i as f32);
    }

    let candles = b.group(Transform::xyz(0.0, 6.0, 0.0));
    for (at, _) in layout::ring(Vec3::ZERO, 5.0, 8) {
        b.child(candles, Shape::cylinder(0.08, 0.5), Material::standard(0xf0e8d0), Transform::at(at));
        b.child(candles, Shape::sphere(0.07), Material::glow(0xffb040, 3.0), Transform::at(at + Vec3::Y * 0.32));
    }
    b.spin(candles, Property::RotationY, 0.15);
    b.light(Light::point(0xffb060, 2.5, Vec3::new(0.0, 6.0, 0.0), 30.0));

    presets::dust(b, 200, Vec3::new(0.0, 5.0, 0.0), Vec3::new(12.0, 5.0, 12.0), 0xffe0a0);
}

pub fn fairy_ring(b: &mut SceneBuilder) {
    b.background(0x0c1810).fog(Fog::exp(0x0c1810, 0.05));
    night_fill(b, 0x203a30, 0.4);
    ground(b, 60.0, 0x1e3a1e);

    for (i, (at, _)) in layout::ring(Vec3::ZERO, 5.0, 24).enumerate() {
        let stem = b.place(Shape::cylinder(0.06, 0.4), Material::standard(0xf0e8d8), at + Vec3::Y * 0.2);
        let cap = b.child(
            stem,
            Shape::sphere(0.25),
            Material::glow(0xfff0c0, 0.8),
            Transform::xyz(0.0, 0.22, 0.0).scaled_by(Vec3::new(1.0, 0.5, 1.0)),
        );
        b.oscillate(cap, Property::EmissiveIntensity, 0.6, 1.5, i as f32 * TAU / 24.0);
    }

    let dancers = b.group(Transform::xyz(0.0, 1.2, 0.0));
    for (at, _) in layout::ring(Vec3::ZERO, 3.0, 6) {
        let fairy = b.child(dancers, Shape::sphere(0.12), Material::glow(0xc0ffe0, 4.0), Transform::at(at));
        b.oscillate(fairy, Property::PositionY, 0.4, 2.0, at.x);
    }
    b.spin(dancers, Property::RotationY, 0.8);
    b.light(Light::point(0xa0ffd0, 2.0, Vec3::new(0.0, 1.5, 0.0), 15.0));

    for at in layout::scatter(b.rng(), 25, Vec3::ZERO, Vec3::new(25.0, 0.0, 25.0)) {
        if at.length() > 10.0 {
            let height = b.range(6.0, 12.0);
            pine(b, at, height, 0x1a3a22);
        }
    }
    presets::fireflies(b, 180, Vec3::new(0.0, 1.5, 0.0), Vec3::new(10.0, 1.2, 10.0), 0xe0ff90);
}

pub fn elven_bridge(b: &mut SceneBuilder) {
    b.background(0xc8e0d8).fog(Fog::linear(0xc8e0d8, 30.0, 120.0));
    outdoor_lights(b, 0xf0fff8, 0x406050, 0xfff8e8, 1.1);

    for side in [-1.0f32, 1.0] {
        b.mesh(Shape::cuboid(30.0, 40.0, 40.0), Material::standard(0x8a9088), Transform::xyz(side * 30.0, -10.0, 0.0));
        for at in layout::scatter(b.rng(), 6, Vec3::new(side * 28.0, 10.0, 0.0), Vec3::new(10.0, 0.0, 15.0)) {
            let height = b.range(6.0, 10.0);
            tree(b, at, height, 2.5, 0xd0d0c0, 0xd8c060);
        }
    }

    let span = 30.0;
    for i in 0..31 {
        let t = i as f32 / 30.0;
        let x = -span * 0.5 + span * t;
        let y = 10.0 + (t * PI).sin() * 3.0;
        let slope = (t * PI).cos() * 3.0 * PI / span;
        b.mesh(Shape::cuboid(1.1, 0.2, 3.0), Material::standard(0xe8e4d8).metal(0.3, 0.4), Transform::xyz(x, y, 0.0).rotated_z(slope.atan()));
        if i % 5 == 0 {
            for z in [-1.5f32, 1.5] {
                let lamp = b.place(Shape::sphere(0.15), Material::glow(0xd0ffe0, 2.5), Vec3::new(x, y + 1.4, z));
                b.oscillate(lamp, Property::EmissiveIntensity, 0.8, 0.6, x);
                b.place(Shape::cylinder(0.04, 1.3), Material::standard(0xe0e0d0), Vec3::new(x, y + 0.65, z));
            }
        }
    }

    let river = b.place(Shape::plane(20.0, 200.0), Material::standard(0x4a8aa0).metal(0.5, 0.1), Vec3::new(0.0, -8.0, 0.0));
    b.oscillate(river, Property::PositionY, 0.1, 1.0, 0.0);
    presets::petals(b, 120, Vec3::new(0.0, 8.0, 0.0), Vec3::new(20.0, 8.0, 15.0), 0xe8d070);
    presets::mist(b, 20, Vec3::new(0.0, -6.0, 0.0), Vec3::new(10.0, 1.0, 40.0), 0xffffff);
}

pub fn sky_whale_migration(b: &mut SceneBuilder) {
    b.background(0xf0b890).fog(Fog::linear(0xf0b890, 80.0, 400.0));
    outdoor_lights(b, 0xffd8b0, 0x806050, 0xffc080, 1.2);

    for (i, at) in layout::line(Vec3::new(-80.0, 30.0, -40.0), Vec3::new(80.0, 50.0, 40.0), 6).enumerate() {
        let whale = b.group(Transform::at(at).rotated_y(-0.4));
        let size = 6.0 + (i % 3) as f32 * 3.0;
        b.child(whale, Shape::sphere(size), Material::standard(0x4a5a78), Transform::IDENTITY.scaled_by(Vec3::new(2.5, 0.8, 1.0)));
        b.child(whale, Shape::sphere(size * 0.9), Material::standard(0xd8d0c8), Transform::xyz(0.0, -size * 0.25, 0.0).scaled_by(Vec3::new(2.2, 0.5, 0.9)));
        let tail = b.child(whale, Shape::cuboid(size * 0.3, size * 0.1, size * 1.6), Material::standard(0x4a5a78), Transform::xyz(-size * 2.6, 0.0, 0.0));
        b.oscillate(tail, Property::RotationZ, 0.4, 0.8, i as f32);
        for side in [-1.0f32, 1.0] {
            let fin = b.child(whale, Shape::cuboid(size * 0.8, size * 0.08, size * 0.4), Material::standard(0x3a4a68), Transform::xyz(size * 0.5, -size * 0.3, side * size));
            b.oscillate(fin, Property::RotationX, 0.3 * side, 0.6, i as f32);
        }
        b.oscillate(whale, Property::PositionY, 3.0, 0.15, i as f32 * 1.1);
        b.oscillate(whale, Property::PositionX, 6.0, 0.05, i as f32);
    }

    for i in 0..12 {
        let at = layout::jitter(b.rng(), Vec3::new(150.0, 10.0, 150.0)) + Vec3::Y * 15.0;
        let cloud = b.mesh(Shape::sphere(10.0), Material::standard(0xfff0e8).opacity(0.7), Transform::at(at).scaled_by(Vec3::new(2.5, 0.6, 1.5)));
        b.oscillate(cloud, Property::PositionX, 8.0, 0.02, i as f32);
    }
    presets::swarm(b, 80, Vec3::new(0.0, 40.0, 0.0), 30.0, 60.0, 0x303030);
}

pub fn runestone_circle(b: &mut SceneBuilder) {
    b.background(0x303848).fog(Fog::exp(0x303848, 0.03));
    b.light(Light::hemisphere(0x8090b0, 0x202820, 0.5));
    ground(b, 100.0, 0x3a4a30);

    for (i, (at, angle)) in layout::ring(Vec3::ZERO, 10.0, 9).enumerate() {
        let height = b.range(3.5, 5.0);
        let stone = b.mesh(
            Shape::cuboid(1.4, height, 0.8),
            Material::standard(0x707870).metal(0.0, 0.95),
            Transform::at(at + Vec3::Y * height * 0.5).rotated_y(-angle),
        );
        let rune = b.child(stone, Shape::cuboid(0.5, 0.8, 0.02), Material::glow(0x60c0ff, 2.0), Transform::xyz(0.0, 0.5, 0.41));
        // Runes light up one after another around the circle.
        b.wave(rune, Property::EmissiveIntensity, 2.0, 1.2, -(i as f32) * TAU / 9.0, Wave::Cosine);
    }
    let altar = b.place(Shape::cylinder(1.5, 1.0), Material::standard(0x5a605a), Vec3::Y * 0.5);
    let focus = b.child(altar, Shape::Octahedron { radius: 0.6 }, Material::glow(0x80d0ff, 3.0), Transform::xyz(0.0, 1.8, 0.0));
    b.spin(focus, Property::RotationY, 1.0);
    b.oscillate(focus, Property::PositionY, 0.3, 0.8, 0.0);
    let pulse = b.light(Light::point(0x80d0ff, 2.0, Vec3::new(0.0, 2.5, 0.0), 25.0));
    b.oscillate(pulse, Property::LightIntensity, 1.0, 1.2, 0.0);

    presets::spores(b, 120, Vec3::new(0.0, 4.0, 0.0), Vec3::new(8.0, 4.0, 8.0), 0x80d0ff);
    presets::mist(b, 25, Vec3::new(0.0, 0.5, 0.0), Vec3::new(20.0, 0.4, 20.0), 0x8090a0);
}

pub fn cursed_graveyard(b: &mut SceneBuilder) {
    b.background(0x0a0c0a).fog(Fog::exp(0x10180f, 0.06));
    night_fill(b, 0x203020, 0.3);
    let moon = b.light(Light::directional(0xa0c0a0, 0.4, Vec3::new(-20.0, 30.0, -10.0)));
    b.oscillate(moon, Property::LightIntensity, 0.1, 0.3, 0.0);
    ground(b, 80.0, 0x1a2418);

    for (x, z, at) in layout::grid(Vec3::ZERO, 3.0, 8, 6) {
        if b.chance(0.2) {
            continue;
        }
        let lean = layout::jitter(b.rng(), Vec3::new(0.15, 0.0, 0.15));
        let shape = if (x + z) % 3 == 0 { Shape::cuboid(0.3, 2.0, 0.3) } else { Shape::cuboid(1.0, 1.4, 0.2) };
        let height = shape.half_extents().y;
        b.mesh(shape, Material::standard(0x5a5a58), Transform::at(at + Vec3::Y * height).rotated(lean));
    }

    for at in layout::scatter(b.rng(), 6, Vec3::ZERO, Vec3::new(15.0, 0.0, 10.0)) {
        let dead = b.group(Transform::at(at));
        b.child(dead, Shape::tapered(0.15, 0.4, 6.0), Material::standard(0x2a2420), Transform::xyz(0.0, 3.0, 0.0));
        for k in 0..4 {
            let yaw = k as f32 * FRAC_PI_2 + 0.3;
            b.child(dead, Shape::cylinder(0.06, 2.5), Material::standard(0x2a2420), Transform::xyz(0.0, 4.5 + k as f32 * 0.4, 0.0).rotated(Vec3::new(0.0, yaw, 1.0)));
        }
    }

    for at in layout::scatter(b.rng(), 8, Vec3::new(0.0, 1.5, 0.0), Vec3::new(12.0, 0.5, 9.0)) {
        let wisp = b.place(Shape::sphere(0.2), Material::glow(0x60ff90, 3.0).opacity(0.7), at);
        let speed = b.range(0.3, 0.8);
        b.oscillate(wisp, Property::PositionX, 2.0, speed, at.z);
        b.oscillate(wisp, Property::PositionY, 0.5, speed * 2.0, at.x);
        b.oscillate(wisp, Property::EmissiveIntensity, 1.5, 3.0, at.y);
    }
    presets::mist(b, 50, Vec3::new(0.0, 0.3, 0.0), Vec3::new(15.0, 0.3, 12.0), 0x406040);
}

pub fn alchemist_workshop(b: &mut SceneBuilder) {
    b.background(0x140c08);
    night_fill(b, 0x3a2418, 0.4);
    ground(b, 30.0, 0x3a2a1e);

    b.mesh(Shape::cuboid(6.0, 0.2, 2.5), Material::standard(0x5a3a20), Transform::xyz(0.0, 1.0, 0.0));
    let brews = [0x40ff80, 0xff40a0, 0x4080ff, 0xffd040, 0xa040ff];
    for (i, at) in layout::line(Vec3::new(-2.5, 1.1, 0.0), Vec3::new(2.5, 1.1, 0.0), 6).enumerate() {
        let color = brews[i % brews.len()];
        let flask = b.place(Shape::sphere(0.3), Material::standard(0xe0f0ff).metal(0.1, 0.05).opacity(0.4), at + Vec3::Y * 0.3);
        let liquid = b.child(flask, Shape::sphere(0.22), Material::glow(color, 1.5), Transform::xyz(0.0, -0.05, 0.0));
        b.oscillate(liquid, Property::EmissiveIntensity, 0.8, 1.0 + i as f32 * 0.3, i as f32);
        b.child(flask, Shape::cylinder(0.06, 0.4), Material::standard(0xe0f0ff).opacity(0.4), Transform::xyz(0.0, 0.45, 0.0));
        presets::bubbles(b, 8, at + Vec3::Y * 0.9, Vec3::new(0.05, 0.3, 0.05));
    }

    let cauldron = b.place(Shape::sphere(1.2), Material::standard(0x202020).metal(0.8, 0.5), Vec3::new(0.0, 1.0, -4.0));
    let brew = b.child(cauldron, Shape::cylinder(1.0, 0.05), Material::glow(0x60ff60, 2.0), Transform::xyz(0.0, 0.6, 0.0));
    b.oscillate(brew, Property::EmissiveIntensity, 1.0, 2.5, 0.0);
    campfire(b, Vec3::new(0.0, 0.0, -4.0), 0.6);
    presets::spores(b, 60, Vec3::new(0.0, 3.5, -4.0), Vec3::new(0.8, 2.0, 0.8), 0x80ff80);

    for (at, _) in layout::ring(Vec3::new(0.0, 3.5, 0.0), 6.0, 10) {
        let herb = b.place(Shape::cone(0.2, 0.6), Material::standard(0x4a6a2a), at);
        b.oscillate(herb, Property::RotationZ, 0.1, 0.7, at.x);
    }
    presets::dust(b, 80, Vec3::new(0.0, 2.5, 0.0), Vec3::new(4.0, 2.0, 4.0), 0xffd0a0);
}

pub fn gnome_village(b: &mut SceneBuilder) {
    b.background(0xb0e0ff);
    outdoor_lights(b, 0xe8f8ff, 0x507030, 0xfffae0, 1.3);
    ground(b, 80.0, 0x6aa040);

    let caps = [0xd03030, 0xe06020, 0xc04080];
    for (i, (at, angle)) in layout::ring(Vec3::ZERO, 7.0, 8).enumerate() {
        let house = b.group(Transform::at(at).rotated_y(-angle));
        let height = b.range(1.5, 2.5);
        b.child(house, Shape::cylinder(0.9, height), Material::standard(0xf0e8d0), Transform::xyz(0.0, height * 0.5, 0.0));
        b.child(house, Shape::cone(1.3, 1.5), Material::standard(caps[i % caps.len()]), Transform::xyz(0.0, height + 0.75, 0.0));
        b.child(house, Shape::cuboid(0.4, 0.7, 0.05), Material::standard(0x6a4020), Transform::xyz(0.0, 0.35, 0.9));
        let window = b.child(house, Shape::sphere(0.15), Material::glow(0xffe080, 1.2), Transform::xyz(0.4, height * 0.6, 0.85));
        b.oscillate(window, Property::EmissiveIntensity, 0.3, 0.5, i as f32);
        let chimney_puff = at + Vec3::Y * (height + 1.8);
        presets::mist(b, 3, chimney_puff, Vec3::new(0.1, 0.4, 0.1), 0xe0e0e0);
    }

    let wheel = b.group(Transform::xyz(0.0, 1.5, -12.0));
    for k in 0..8 {
        b.child(wheel, Shape::cuboid(0.2, 3.0, 0.6), Material::standard(0x8a6a40), Transform::IDENTITY.rotated_z(k as f32 * PI / 8.0));
    }
    b.spin(wheel, Property::RotationZ, 0.8);
    b.place(Shape::plane(3.0, 30.0), Material::standard(0x5090c0).metal(0.4, 0.1), Vec3::new(0.0, 0.02, -12.0));

    for at in layout::scatter(b.rng(), 40, Vec3::ZERO, Vec3::new(18.0, 0.0, 18.0)) {
        if at.length() > 9.0 {
            rock(b, at, 0.3, 0x808078);
        }
    }
    presets::petals(b, 60, Vec3::new(0.0, 4.0, 0.0), Vec3::new(12.0, 4.0, 12.0), 0xffffff);
    presets::swarm(b, 20, Vec3::new(3.0, 1.0, 3.0), 0.5, 1.5, 0xffe060);
}

pub fn portal_nexus(b: &mut SceneBuilder) {
    b.background(0x05020a).fog(Fog::exp(0x100520, 0.02));
    night_fill(b, 0x201040, 0.4);
    b.place(Shape::cylinder(20.0, 1.0), Material::standard(0x302838).metal(0.5, 0.6), Vec3::Y * -0.5);

    for (i, (at, angle)) in layout::ring(Vec3::ZERO, 14.0, 6).enumerate() {
        let hue = i as f32 / 6.0;
        let color = Color::hsv(hue, 0.8, 1.0);
        let frame = b.group(Transform::at(at + Vec3::Y * 4.0).rotated_y(-angle + FRAC_PI_2));
        b.child(frame, Shape::torus(3.0, 0.3), Material::standard(0x606070).metal(0.9, 0.3), Transform::IDENTITY);
        let surface = b.child(frame, Shape::cylinder(2.7, 0.05), Material::glow(color, 2.0).opacity(0.7), Transform::IDENTITY.rotated_x(FRAC_PI_2));
        b.spin(surface, Property::RotationY, 1.0 + i as f32 * 0.2);
        b.oscillate(surface, Property::EmissiveIntensity, 1.0, 1.5, hue * TAU);
        let glow = b.light(Light::point(color, 1.5, at + Vec3::Y * 4.0, 20.0));
        b.oscillate(glow, Property::LightIntensity, 0.6, 1.5, hue * TAU);
    }

    let hub = b.place(Shape::Octahedron { radius: 1.5 }, Material::glow(0xffffff, 3.0), Vec3::Y * 5.0);
    b.spin(hub, Property::RotationY, 0.7);
    b.oscillate(hub, Property::PositionY, 0.8, 0.5, 0.0);
    for (i, (at, _)) in layout::ring(Vec3::ZERO, 14.0, 6).enumerate() {
        let hue = i as f32 / 6.0;
        presets::swarm(b, 30, at + Vec3::Y * 4.0, 1.0, 2.5, Color::hsv(hue, 0.6, 1.0));
    }
    presets::stars(b, 200, Vec3::ZERO, 150.0, 0xd0c0ff);
}

pub fn mage_duel_arena(b: &mut SceneBuilder) {
    b.background(0x180c20).fog(Fog::exp(0x180c20, 0.025));
    night_fill(b, 0x302040, 0.4);
    b.place(Shape::cylinder(16.0, 0.5), Material::standard(0x6a6068), Vec3::Y * -0.25);

    for (at, _) in layout::ring(Vec3::ZERO, 18.0, 16) {
        b.place(Shape::cylinder(0.8, 8.0), Material::standard(0x8a8088), at + Vec3::Y * 4.0);
        b.place(Shape::sphere(0.4), Material::glow(0xffa040, 2.0), at + Vec3::Y * 8.4);
    }

    let duelists = [(Vec3::new(-8.0, 0.0, 0.0), 0xff4020), (Vec3::new(8.0, 0.0, 0.0), 0x2080ff)];
    for (at, color) in duelists {
        let mage = b.group(Transform::at(at));
        b.child(mage, Shape::cone(0.8, 2.2), Material::standard(Color::hex(color).scale(0.4)), Transform::xyz(0.0, 1.1, 0.0));
        b.child(mage, Shape::sphere(0.35), Material::standard(0xe0c8a8), Transform::xyz(0.0, 2.5, 0.0));
        let hat = b.child(mage, Shape::cone(0.45, 1.0), Material::standard(Color::hex(color).scale(0.5)), Transform::xyz(0.0, 3.1, 0.0));
        b.oscillate(hat, Property::RotationZ, 0.1, 1.0, at.x);
        let shield = b.child(mage, Shape::sphere(1.8), Material::glow(color, 1.0).opacity(0.2), Transform::xyz(0.0, 1.5, 0.0));
        b.oscillate(shield, Property::Scale, 0.1, 3.0, at.x);
        b.light(Light::point(color, 2.0, at + Vec3::Y * 2.0, 15.0));
    }

    // A bolt shuttles between the two mages.
    let bolt = b.place(Shape::sphere(0.4), Material::glow(0xffffff, 5.0), Vec3::new(0.0, 2.0, 0.0));
    b.wave(bolt, Property::PositionX, 6.0, 1.5, 0.0, Wave::Sine);
    b.oscillate(bolt, Property::PositionY, 0.5, 6.0, 0.0);
    b.animate(move |g: &mut SceneGraph, t: f32| {
        let node = g.node_mut(bolt);
        let blend = (node.transform.translation.x / 12.0 + 0.5).clamp(0.0, 1.0);
        node.material.emissive = Color::hex(0xff4020).lerp(Color::hex(0x2080ff), blend);
        node.material.emissive_intensity = 5.0 + (t * 20.0).sin();
    });

    presets::sparks(b, 120, Vec3::new(0.0, 3.0, 0.0), Vec3::new(8.0, 3.0, 1.0), 0xfff0d0);
    presets::embers(b, 80, Vec3::new(0.0, 4.0, 0.0), Vec3::new(16.0, 4.0, 16.0), 0xffa040);
}

pub fn sunken_temple(b: &mut SceneBuilder) {
    b.background(0x04283a).fog(Fog::exp(0x04283a, 0.045));
    b.light(Light::hemisphere(0x40a0c0, 0x041820, 0.6));
    let shafts = b.light(Light::directional(0x80e0ff, 0.8, Vec3::new(0.0, 40.0, 5.0)));
    b.oscillate(shafts, Property::LightIntensity, 0.3, 0.4, 0.0);
    ground(b, 100.0, 0x8a8060);

    for step in 0..4 {
        let size = 20.0 - step as f32 * 4.0;
        b.mesh(Shape::cuboid(size, 1.2, size), Material::standard(0x7a8070), Transform::xyz(0.0, 0.6 + step as f32 * 1.2, 0.0));
    }
    for (i, (at, _)) in layout::ring(Vec3::new(0.0, 4.8, 0.0), 5.0, 8).enumerate() {
        if i == 3 {
            b.mesh(Shape::cylinder(0.5, 4.0), Material::standard(0x8a9080), Transform::at(at + Vec3::new(1.0, 0.3, 0.0)).rotated_z(1.4));
            continue;
        }
        let column = b.place(Shape::cylinder(0.5, 6.0), Material::standard(0x8a9080), at + Vec3::Y * 3.0);
        b.child(column, Shape::cuboid(1.4, 0.4, 1.4), Material::standard(0x7a8070), Transform::xyz(0.0, 3.2, 0.0));
    }
    let idol = b.place(Shape::Octahedron { radius: 1.0 }, Material::glow(0x40ffd0, 2.5), Vec3::new(0.0, 6.5, 0.0));
    b.spin(idol, Property::RotationY, 0.4);
    b.oscillate(idol, Property::EmissiveIntensity, 1.0, 0.8, 0.0);

    for at in layout::scatter(b.rng(), 30, Vec3::ZERO, Vec3::new(30.0, 0.0, 30.0)) {
        if at.length() < 12.0 {
            continue;
        }
        let height = b.range(3.0, 8.0);
        let weed = b.place(Shape::cuboid(0.3, height, 0.04), Material::standard(0x2a6a3a).opacity(0.9), at + Vec3::Y * height * 0.5);
        let phase = b.range(0.0, TAU);
        b.oscillate(weed, Property::RotationZ, 0.15, 0.6, phase);
    }
    presets::swarm(b, 80, Vec3::new(6.0, 6.0, 6.0), 2.0, 5.0, 0xffd080);
    presets::bubbles(b, 120, Vec3::new(0.0, 10.0, 0.0), Vec3::new(20.0, 10.0, 20.0));
    presets::dust(b, 150, Vec3::new(0.0, 8.0, 0.0), Vec3::new(20.0, 8.0, 20.0), 0xa0e0d0);
}
