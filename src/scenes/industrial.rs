use glam::Vec3;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::common::{campfire, ground, night_fill, outdoor_lights, rock};
use crate::animate::{Property, Wave};
use crate::graph::{Fog, Light, Material, NodeId, SceneGraph, Shape};
use crate::layout;
use crate::math::Color;
use crate::particles::{presets, Motion, ParticleSpec};
use crate::scene::SceneBuilder;
use crate::types::Transform;

const RUST: u32 = 0x8a4a2a;
const STEEL: u32 = 0x8a9098;
const HAZARD: u32 = 0xf0c020;

/// Toothed wheel as a torus ring with cube teeth, spinning about its axle.
fn gear(b: &mut SceneBuilder, at: Vec3, radius: f32, teeth: usize, speed: f32) -> NodeId {
    let wheel = b.group(Transform::at(at).rotated_x(FRAC_PI_2));
    let metal = Material::standard(0xb08040).metal(1.0, 0.35);
    b.child(wheel, Shape::torus(radius, radius * 0.15), metal, Transform::IDENTITY);
    for (spot, angle) in layout::ring(Vec3::ZERO, radius * 1.15, teeth) {
        b.child(wheel, Shape::cube(radius * 0.2), metal, Transform::at(spot).rotated_y(-angle));
    }
    b.child(wheel, Shape::cylinder(radius * 0.2, radius * 0.3), metal, Transform::IDENTITY);
    b.spin(wheel, Property::RotationY, speed);
    wheel
}

/// Lattice tower of four legs and cross braces.
fn truss(b: &mut SceneBuilder, at: Vec3, width: f32, height: f32, color: u32) -> NodeId {
    let tower = b.group(Transform::at(at));
    let half = width * 0.5;
    for (x, z) in [(-half, -half), (half, -half), (-half, half), (half, half)] {
        b.child(tower, Shape::cylinder(0.08, height), Material::standard(color).metal(0.8, 0.5), Transform::xyz(x, height * 0.5, z));
    }
    let levels = (height / width).ceil().max(1.0) as usize;
    for level in 0..=levels {
        let y = level as f32 * height / levels as f32;
        for (offset, yaw) in [(Vec3::new(0.0, y, -half), 0.0), (Vec3::new(0.0, y, half), 0.0), (Vec3::new(-half, y, 0.0), FRAC_PI_2), (Vec3::new(half, y, 0.0), FRAC_PI_2)] {
            b.child(tower, Shape::cuboid(width, 0.08, 0.08), Material::standard(color).metal(0.8, 0.5), Transform::at(offset).rotated_y(yaw));
        }
    }
    tower
}

/// Rotating beacon: a lamp head whose spot light sweeps around `at`.
fn beacon(b: &mut SceneBuilder, at: Vec3, reach: f32, speed: f32, color: impl Into<Color>) {
    let color = color.into();
    let head = b.place(Shape::cuboid(0.6, 0.4, 0.4), Material::glow(color, 3.0), at);
    b.spin(head, Property::RotationY, speed);
    let beam = b.light(Light::spot(color, 4.0, at, at + Vec3::new(reach, -at.y, 0.0), 0.25));
    b.animate(move |g: &mut SceneGraph, t: f32| {
        let angle = t * speed;
        if let Light::Spot { target, .. } = g.light_mut(beam) {
            *target = at + Vec3::new(angle.cos() * reach, -at.y, angle.sin() * reach);
        }
    });
}

pub fn steampunk_foundry(b: &mut SceneBuilder) {
    b.background(0x140a04).fog(Fog::exp(0x2a1408, 0.03));
    night_fill(b, 0x402010, 0.4);
    ground(b, 60.0, 0x2a2018);

    let crucible = b.group(Transform::xyz(0.0, 6.0, -4.0));
    b.child(crucible, Shape::tapered(1.6, 1.0, 2.0), Material::standard(0x303030).metal(0.9, 0.6), Transform::IDENTITY);
    b.child(crucible, Shape::cylinder(1.5, 0.1), Material::glow(0xff6010, 4.0), Transform::xyz(0.0, 1.0, 0.0));
    b.oscillate(crucible, Property::RotationZ, 0.35, 0.3, 0.0);
    let pour = b.place(Shape::cylinder(0.15, 5.0), Material::glow(0xff8020, 5.0), Vec3::new(1.5, 3.0, -4.0));
    b.wave(pour, Property::EmissiveIntensity, 2.0, 0.3, 0.0, Wave::Sine);
    b.place(Shape::cuboid(4.0, 0.6, 2.0), Material::glow(0xff4000, 2.0), Vec3::new(1.5, 0.3, -4.0));

    // A gear train: neighbours mesh, so they counter-rotate at inverse speed.
    let mut x = -12.0;
    for (i, radius) in [1.5f32, 0.8, 2.2, 1.0, 1.6].into_iter().enumerate() {
        x += radius;
        let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
        gear(b, Vec3::new(x, 5.0, -10.0), radius, (radius * 10.0) as usize, direction * 1.2 / radius);
        x += radius + 0.3;
    }

    for at in layout::line(Vec3::new(-10.0, 0.0, 6.0), Vec3::new(10.0, 0.0, 6.0), 4) {
        let boiler = b.place(Shape::cylinder(1.2, 4.0), Material::standard(0x6a4a2a).metal(0.9, 0.4), at + Vec3::Y * 2.0);
        let gauge = b.child(boiler, Shape::cylinder(0.3, 0.05), Material::glow(0xfff0c0, 1.0), Transform::xyz(0.0, 1.0, 1.21).rotated_x(FRAC_PI_2));
        b.oscillate(gauge, Property::RotationY, 0.6, 2.0, at.x);
        b.place(Shape::cylinder(0.2, 6.0), Material::standard(0x3a3a3a).metal(0.8, 0.5), at + Vec3::new(0.0, 7.0, 0.0));
        presets::mist(b, 15, at + Vec3::Y * 11.0, Vec3::new(0.6, 2.0, 0.6), 0xc0b0a0);
    }
    let furnace = b.light(Light::point(0xff6020, 4.0, Vec3::new(1.5, 2.0, -4.0), 30.0));
    b.oscillate(furnace, Property::LightIntensity, 0.8, 5.0, 0.0);
    presets::sparks(b, 120, Vec3::new(1.5, 1.5, -4.0), Vec3::new(2.0, 1.5, 1.0), 0xffa030);
}

pub fn wind_farm(b: &mut SceneBuilder) {
    b.background(0x9cc8e8).fog(Fog::linear(0x9cc8e8, 60.0, 260.0));
    outdoor_lights(b, 0xd0e8ff, 0x5a7a3a, 0xfff8e8, 1.4);
    ground(b, 400.0, 0x6a9a4a);

    for (x, z, at) in layout::grid(Vec3::ZERO, 40.0, 4, 3) {
        let height = 28.0 + ((x * 7 + z * 3) % 5) as f32;
        b.place(Shape::tapered(0.6, 1.2, height), Material::standard(0xf4f4f4), at + Vec3::Y * height * 0.5);
        let nacelle = b.place(Shape::cuboid(1.2, 1.2, 3.0), Material::standard(0xeeeeee), at + Vec3::new(0.0, height, 0.0));
        let rotor = b.child_group(nacelle, Transform::xyz(0.0, 0.0, 1.7));
        for blade in 0..3 {
            let angle = blade as f32 / 3.0 * TAU;
            b.child(
                rotor,
                Shape::cuboid(0.5, 12.0, 0.15),
                Material::standard(0xf8f8f8),
                Transform::xyz(angle.sin() * 6.0, angle.cos() * 6.0, 0.0).rotated_z(-angle),
            );
        }
        // Turbines face the wind together but spin slightly out of sync.
        let speed = b.range(0.8, 1.2);
        b.spin(rotor, Property::RotationZ, speed);
        b.place(Shape::sphere(0.2), Material::glow(0xff2020, 2.0), at + Vec3::new(0.0, height + 0.8, 0.0));
    }
    let warning = b.light(Light::point(0xff2020, 0.5, Vec3::new(0.0, 34.0, 0.0), 80.0));
    b.wave(warning, Property::LightIntensity, 0.5, 1.5, 0.0, Wave::Cosine);
    presets::swarm(b, 40, Vec3::new(0.0, 45.0, 0.0), 30.0, 60.0, 0x202020);
}

pub fn oil_rig_storm(b: &mut SceneBuilder) {
    b.background(0x1a2028).fog(Fog::exp(0x1a2028, 0.02));
    night_fill(b, 0x303a48, 0.4);

    let sea = b.mesh(Shape::plane(300.0, 300.0), Material::standard(0x102030).metal(0.3, 0.2), Transform::IDENTITY);
    b.oscillate(sea, Property::PositionY, 0.6, 0.7, 0.0);
    let swell = b.place(Shape::cuboid(300.0, 0.4, 8.0), Material::standard(0x183040).metal(0.3, 0.2), Vec3::new(0.0, 0.2, -30.0));
    b.animate(move |g: &mut SceneGraph, t: f32| {
        g.node_mut(swell).transform.translation.z = (t * 6.0).rem_euclid(60.0) - 30.0;
    });

    for (x, z) in [(-8.0f32, -8.0f32), (8.0, -8.0), (-8.0, 8.0), (8.0, 8.0)] {
        b.place(Shape::cylinder(1.2, 24.0), Material::standard(HAZARD).metal(0.6, 0.5), Vec3::new(x, 6.0, z));
    }
    let deck = b.mesh(Shape::cuboid(24.0, 2.0, 24.0), Material::standard(0x505860).metal(0.7, 0.5), Transform::xyz(0.0, 18.0, 0.0));
    b.child(deck, Shape::cuboid(8.0, 5.0, 8.0), Material::standard(0xe0e0e0), Transform::xyz(-6.0, 3.5, -6.0));
    truss(b, Vec3::new(4.0, 19.0, 2.0), 3.0, 22.0, 0xc04020);

    let boom = b.group(Transform::xyz(9.0, 19.0, 9.0));
    b.child(boom, Shape::cuboid(0.6, 0.6, 16.0), Material::standard(HAZARD), Transform::xyz(0.0, 0.0, 8.0).rotated_x(-0.3));
    b.oscillate(boom, Property::RotationY, 0.4, 0.15, 0.0);

    let flare = b.place(Shape::cone(1.0, 4.0), Material::glow(0xff6010, 5.0), Vec3::new(-14.0, 26.0, 0.0));
    b.oscillate(flare, Property::Scale, 0.25, 7.0, 0.0);
    let flare_light = b.light(Light::point(0xff7030, 4.0, Vec3::new(-14.0, 27.0, 0.0), 60.0));
    b.oscillate(flare_light, Property::LightIntensity, 1.2, 6.0, 0.0);

    // Lightning: a dark sky light that spikes briefly every few seconds.
    let lightning = b.light(Light::directional(0xe0e8ff, 0.0, Vec3::new(-20.0, 60.0, 10.0)));
    b.animate(move |g: &mut SceneGraph, t: f32| {
        let cycle = t.rem_euclid(5.3);
        let flash = if cycle < 0.08 || (0.16..0.22).contains(&cycle) { 6.0 } else { 0.0 };
        g.light_mut(lightning).set_intensity(flash);
    });
    presets::rain(b, 500, Vec3::new(0.0, 25.0, 0.0), Vec3::new(40.0, 25.0, 40.0), 0x90a0b8);
}

pub fn shipyard_dry_dock(b: &mut SceneBuilder) {
    b.background(0x6a7888).fog(Fog::linear(0x6a7888, 40.0, 200.0));
    outdoor_lights(b, 0xb0c0d0, 0x404040, 0xffe8c8, 1.0);
    ground(b, 240.0, 0x505458);
    b.mesh(Shape::cuboid(30.0, 12.0, 100.0), Material::standard(0x383c40), Transform::xyz(0.0, -6.0, 0.0));

    let hull = b.group(Transform::xyz(0.0, -4.0, 0.0));
    b.child(hull, Shape::cuboid(14.0, 10.0, 70.0), Material::standard(0x8a2020).metal(0.6, 0.5), Transform::xyz(0.0, 5.0, 0.0));
    b.child(hull, Shape::cone(7.0, 14.0), Material::standard(0x8a2020).metal(0.6, 0.5), Transform::xyz(0.0, 5.0, 42.0).rotated_x(FRAC_PI_2));
    b.child(hull, Shape::cuboid(14.2, 3.0, 70.2), Material::standard(0x202428), Transform::xyz(0.0, 11.0, 0.0));
    b.child(hull, Shape::cuboid(8.0, 8.0, 10.0), Material::standard(0xe8e8e8), Transform::xyz(0.0, 16.0, -25.0));
    for at in layout::line(Vec3::new(-9.0, 0.0, -30.0), Vec3::new(-9.0, 0.0, 30.0), 10) {
        b.place(Shape::cylinder(0.4, 8.0), Material::standard(STEEL), at + Vec3::new(0.0, 2.0, 0.0));
    }

    for (i, z) in [-25.0f32, 10.0].into_iter().enumerate() {
        let gantry = b.group(Transform::xyz(0.0, 0.0, z));
        for side in [-1.0f32, 1.0] {
            b.child(gantry, Shape::cuboid(1.5, 36.0, 1.5), Material::standard(HAZARD), Transform::xyz(side * 18.0, 18.0, 0.0));
        }
        b.child(gantry, Shape::cuboid(38.0, 2.0, 2.0), Material::standard(HAZARD), Transform::xyz(0.0, 36.0, 0.0));
        let trolley = b.child_group(gantry, Transform::xyz(0.0, 35.0, 0.0));
        b.child(trolley, Shape::cuboid(3.0, 1.5, 3.0), Material::standard(0x404040), Transform::IDENTITY);
        b.child(trolley, Shape::cylinder(0.05, 12.0), Material::standard(0x202020), Transform::xyz(0.0, -6.0, 0.0));
        b.child(trolley, Shape::cuboid(4.0, 2.0, 2.0), Material::standard(0x2050a0), Transform::xyz(0.0, -13.0, 0.0));
        b.oscillate(trolley, Property::PositionX, 12.0, 0.2, i as f32 * PI);
        b.oscillate(gantry, Property::PositionZ, 6.0, 0.05, i as f32);
    }

    // Welding arcs along the hull flicker independently.
    for at in layout::line(Vec3::new(7.2, 4.0, -20.0), Vec3::new(7.2, 4.0, 20.0), 5) {
        let arc = b.light(Light::point(0xa0d0ff, 1.5, at, 8.0));
        let rate = b.range(15.0, 30.0);
        b.oscillate(arc, Property::LightIntensity, 1.5, rate, at.z);
        presets::sparks(b, 20, at, Vec3::new(0.3, 0.8, 0.3), 0xc0e0ff);
    }
}

pub fn particle_accelerator(b: &mut SceneBuilder) {
    b.background(0x04060a);
    night_fill(b, 0x182030, 0.3);
    b.mesh(Shape::cuboid(120.0, 0.2, 120.0), Material::standard(0x404448), Transform::xyz(0.0, -0.1, 0.0));

    const RADIUS: f32 = 40.0;
    b.mesh(Shape::torus(RADIUS, 1.2), Material::standard(0x6080a0).metal(0.9, 0.3), Transform::xyz(0.0, 1.5, 0.0).rotated_x(FRAC_PI_2));
    for (i, (at, angle)) in layout::ring(Vec3::new(0.0, 1.5, 0.0), RADIUS, 48).enumerate() {
        let magnet = Color::hex(if i % 4 == 0 { 0x2060c0 } else { 0xc02020 });
        b.mesh(Shape::cuboid(1.8, 2.0, 1.8), Material::standard(magnet).metal(0.7, 0.4), Transform::at(at).rotated_y(-angle));
    }

    // Two counter-rotating bunches that meet at the detector twice per lap.
    for direction in [1.0f32, -1.0] {
        let color = if direction > 0.0 { 0x60c0ff } else { 0xff60c0 };
        b.particles(Shape::sphere(0.2), Material::glow(color, 5.0), Motion::Orbit, 40, move |i, _| {
            ParticleSpec::at(Vec3::new(0.0, 1.5, 0.0))
                .amplitude(RADIUS)
                .speed(direction * 3.0)
                .phase(i as f32 * 0.01)
        });
    }

    let detector = b.group(Transform::xyz(RADIUS, 1.5, 0.0));
    for layer in 0..4 {
        let ring = b.child(
            detector,
            Shape::torus(3.0 + layer as f32 * 1.2, 0.3),
            Material::standard(Color::hsv(layer as f32 * 0.2, 0.6, 0.8)).metal(0.8, 0.3),
            Transform::IDENTITY.rotated_z(FRAC_PI_2),
        );
        b.spin(ring, Property::RotationY, 0.2 * (layer + 1) as f32);
    }
    let collision = b.light(Light::point(0xffffff, 0.0, Vec3::new(RADIUS, 1.5, 0.0), 30.0));
    b.wave(collision, Property::LightIntensity, 3.0, 6.0, 0.0, Wave::Cosine);
    presets::sparks(b, 60, Vec3::new(RADIUS, 1.5, 0.0), Vec3::splat(1.0), 0xffffff);
}

pub fn solar_array(b: &mut SceneBuilder) {
    b.background(0xf0d8a8).fog(Fog::linear(0xf0d8a8, 80.0, 300.0));
    let sun = outdoor_lights(b, 0xfff0d0, 0xc09060, 0xfff8e0, 2.0);
    b.oscillate(sun, Property::LightIntensity, 0.4, 0.05, 0.0);
    ground(b, 400.0, 0xd0b080);

    let mut panels = Vec::new();
    for (_, _, at) in layout::grid(Vec3::ZERO, 8.0, 10, 8) {
        b.place(Shape::cylinder(0.15, 2.0), Material::standard(STEEL), at + Vec3::Y);
        let panel = b.mesh(
            Shape::cuboid(6.0, 0.1, 3.5),
            Material::standard(0x10204a).metal(0.9, 0.1),
            Transform::at(at + Vec3::Y * 2.2),
        );
        panels.push(panel);
    }
    // Every panel tracks the sun across the sky on the same schedule.
    b.animate(move |g: &mut SceneGraph, t: f32| {
        let tilt = (t * 0.05).sin() * 0.7;
        for &panel in &panels {
            g.node_mut(panel).transform.rotation.z = tilt;
        }
    });

    let tower = b.place(Shape::cylinder(2.0, 40.0), Material::standard(0xe0e0e0), Vec3::new(0.0, 20.0, -60.0));
    b.child(tower, Shape::cylinder(3.0, 5.0), Material::glow(0xffffd0, 4.0), Transform::xyz(0.0, 20.0, 0.0));
    presets::dust(b, 150, Vec3::new(0.0, 3.0, 0.0), Vec3::new(40.0, 3.0, 32.0), 0xe0c090);
    for at in layout::scatter(b.rng(), 12, Vec3::ZERO, Vec3::new(120.0, 0.0, 120.0)) {
        if at.length() > 60.0 {
            let size = b.range(1.0, 3.0);
            rock(b, at, size, 0xa07850);
        }
    }
}

pub fn hydroelectric_dam(b: &mut SceneBuilder) {
    b.background(0x8ab0d0).fog(Fog::linear(0x8ab0d0, 60.0, 240.0));
    outdoor_lights(b, 0xc8e0ff, 0x4a5a3a, 0xfff4e0, 1.3);
    ground(b, 300.0, 0x4a6a3a);

    b.mesh(Shape::cuboid(80.0, 40.0, 14.0), Material::standard(0xb8b4a8), Transform::xyz(0.0, 20.0, 0.0));
    b.mesh(Shape::cuboid(80.0, 2.0, 6.0), Material::standard(0x8a8880), Transform::xyz(0.0, 41.0, 0.0));
    b.mesh(Shape::plane(80.0, 120.0), Material::standard(0x204a6a).metal(0.3, 0.15), Transform::xyz(0.0, 36.0, -67.0));
    for side in [-1.0f32, 1.0] {
        b.mesh(Shape::cuboid(60.0, 60.0, 130.0), Material::standard(0x6a6050), Transform::xyz(side * 70.0, 20.0, -50.0));
    }

    for at in layout::line(Vec3::new(-24.0, 0.0, 7.0), Vec3::new(24.0, 0.0, 7.0), 5) {
        let spill = b.place(Shape::cuboid(5.0, 30.0, 0.6), Material::glow(0xd0f0ff, 0.6).opacity(0.7), at + Vec3::new(0.0, 16.0, 1.0));
        b.wave(spill, Property::EmissiveIntensity, 0.3, 4.0, at.x, Wave::Cosine);
        presets::rain(b, 60, at + Vec3::new(0.0, 16.0, 1.5), Vec3::new(2.5, 15.0, 0.3), 0xe0f4ff);
        presets::mist(b, 20, at + Vec3::new(0.0, 1.5, 4.0), Vec3::new(4.0, 1.5, 3.0), 0xffffff);
    }
    b.mesh(Shape::plane(80.0, 100.0), Material::standard(0x2a5a7a).metal(0.3, 0.2), Transform::xyz(0.0, 0.05, 57.0));

    let house = b.place(Shape::cuboid(30.0, 8.0, 10.0), Material::standard(0xa8a498), Vec3::new(0.0, 4.0, 14.0));
    for k in 0..4 {
        let turbine = b.child(
            house,
            Shape::torus(1.5, 0.4),
            Material::standard(STEEL).metal(1.0, 0.3),
            Transform::xyz(-10.5 + k as f32 * 7.0, 5.0, 0.0),
        );
        b.spin(turbine, Property::RotationY, 2.0);
    }
    for at in layout::line(Vec3::new(-60.0, 0.0, 40.0), Vec3::new(60.0, 0.0, 40.0), 4) {
        truss(b, at, 3.0, 30.0, 0x808080);
    }
}

pub fn junkyard_robots(b: &mut SceneBuilder) {
    b.background(0x8a7a6a).fog(Fog::linear(0x8a7a6a, 30.0, 140.0));
    outdoor_lights(b, 0xd8c8b0, 0x4a3a2a, 0xffe0b0, 1.1);
    ground(b, 200.0, 0x6a5a48);

    for at in layout::scatter(b.rng(), 14, Vec3::ZERO, Vec3::new(50.0, 0.0, 50.0)) {
        if at.length() < 10.0 {
            continue;
        }
        for k in 0..5 {
            let size = Vec3::new(b.range(1.5, 4.0), b.range(0.8, 1.5), b.range(2.0, 5.0));
            let tone = b.pick(&[RUST, 0x5a6a7a, 0x3a4a3a, 0x7a2a2a]);
            let tilt = layout::symmetric(b.rng(), 0.3);
            let yaw = b.range(0.0, TAU);
            b.mesh(
                Shape::cuboid(size.x, size.y, size.z),
                Material::standard(tone).metal(0.7, 0.9),
                Transform::at(at + Vec3::Y * (k as f32 * 1.1 + size.y * 0.5)).rotated(Vec3::new(tilt, yaw, -tilt)),
            );
        }
    }

    // Scavenger bots wander on circles of their own.
    for i in 0..6 {
        let bot = b.group(Transform::IDENTITY);
        b.child(bot, Shape::cuboid(1.2, 1.4, 1.0), Material::standard(RUST).metal(0.8, 0.7), Transform::xyz(0.0, 1.2, 0.0));
        let head = b.child(bot, Shape::sphere(0.4), Material::standard(STEEL).metal(0.9, 0.4), Transform::xyz(0.0, 2.2, 0.0));
        b.child(head, Shape::sphere(0.1), Material::glow(0x30ff60, 3.0), Transform::xyz(0.0, 0.0, 0.38));
        b.oscillate(head, Property::RotationY, 0.8, 1.1, i as f32);
        for side in [-0.5f32, 0.5] {
            b.child(bot, Shape::cylinder(0.35, 0.2), Material::standard(0x202020), Transform::xyz(side, 0.35, 0.0).rotated_z(FRAC_PI_2));
        }
        let center = layout::annulus(b.rng(), Vec3::ZERO, 4.0, 16.0);
        let radius = b.range(2.0, 5.0);
        let speed = b.range(0.2, 0.5) * if b.chance(0.5) { 1.0 } else { -1.0 };
        b.animate(move |g: &mut SceneGraph, t: f32| {
            let angle = t * speed;
            let node = g.node_mut(bot);
            node.transform.translation = center + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
            node.transform.rotation.y = -angle + if speed > 0.0 { PI } else { 0.0 };
        });
    }

    let magnet = b.group(Transform::xyz(-20.0, 0.0, -20.0));
    truss(b, Vec3::new(-20.0, 0.0, -20.0), 2.0, 18.0, HAZARD);
    let arm = b.child_group(magnet, Transform::xyz(0.0, 18.0, 0.0));
    b.child(arm, Shape::cuboid(20.0, 1.0, 1.0), Material::standard(HAZARD), Transform::xyz(10.0, 0.0, 0.0));
    b.child(arm, Shape::cylinder(2.0, 0.6), Material::standard(0x303030).metal(1.0, 0.4), Transform::xyz(19.0, -6.0, 0.0));
    b.spin(arm, Property::RotationY, 0.15);
    campfire(b, Vec3::new(6.0, 0.0, -4.0), 0.8);
    presets::dust(b, 120, Vec3::new(0.0, 3.0, 0.0), Vec3::new(40.0, 3.0, 40.0), 0xb09070);
}

pub fn lighthouse_storm(b: &mut SceneBuilder) {
    b.background(0x0a1018).fog(Fog::exp(0x0a1018, 0.015));
    night_fill(b, 0x202a3a, 0.3);

    let sea = b.mesh(Shape::plane(400.0, 400.0), Material::standard(0x0a1a2a).metal(0.3, 0.2), Transform::IDENTITY);
    b.oscillate(sea, Property::PositionY, 0.8, 0.6, 0.0);
    b.mesh(Shape::sphere(14.0), Material::standard(0x3a3a38), Transform::xyz(0.0, -6.0, 0.0).scaled_by(Vec3::new(1.0, 0.6, 1.0)));
    for at in layout::scatter(b.rng(), 10, Vec3::ZERO, Vec3::new(14.0, 0.0, 14.0)) {
        let size = b.range(1.0, 3.0);
        rock(b, at + Vec3::Y * 1.0, size, 0x2a2a28);
    }

    let tower = b.group(Transform::xyz(0.0, 2.0, 0.0));
    for band in 0..6 {
        let color = if band % 2 == 0 { 0xf0f0f0 } else { 0xc02020 };
        let r = 2.6 - band as f32 * 0.15;
        b.child(tower, Shape::tapered(r - 0.15, r, 3.0), Material::standard(color), Transform::xyz(0.0, 1.5 + band as f32 * 3.0, 0.0));
    }
    b.child(tower, Shape::cylinder(1.6, 2.5), Material::glow(0xfff0c0, 1.5).opacity(0.6), Transform::xyz(0.0, 19.3, 0.0));
    b.child(tower, Shape::cone(2.0, 2.0), Material::standard(0x202020).metal(0.8, 0.4), Transform::xyz(0.0, 21.5, 0.0));
    beacon(b, Vec3::new(0.0, 21.3, 0.0), 120.0, 0.8, 0xfff4d0);

    // Breakers: foam walls rolling in and dissolving at the rocks.
    for k in 0..3 {
        let foam = b.place(Shape::cuboid(60.0, 1.0, 2.0), Material::standard(0xe0f0ff).opacity(0.7), Vec3::new(0.0, 0.5, 60.0));
        let offset = k as f32 * 15.0;
        b.animate(move |g: &mut SceneGraph, t: f32| {
            let z = 60.0 - (t * 8.0 + offset).rem_euclid(45.0);
            let node = g.node_mut(foam);
            node.transform.translation.z = z;
            node.material.opacity = ((z - 15.0) / 45.0).clamp(0.0, 0.8);
        });
    }
    let lightning = b.light(Light::directional(0xd8e0ff, 0.0, Vec3::new(30.0, 80.0, -20.0)));
    b.animate(move |g: &mut SceneGraph, t: f32| {
        let cycle = t.rem_euclid(7.1);
        g.light_mut(lightning).set_intensity(if cycle < 0.1 { 5.0 } else { 0.0 });
    });
    presets::rain(b, 600, Vec3::new(0.0, 30.0, 0.0), Vec3::new(60.0, 30.0, 60.0), 0x8090a8);
}

pub fn mining_tunnel(b: &mut SceneBuilder) {
    b.background(0x040302).fog(Fog::exp(0x0a0806, 0.06));
    night_fill(b, 0x201810, 0.15);

    const LENGTH: f32 = 80.0;
    b.mesh(Shape::cuboid(6.0, 0.2, LENGTH), Material::standard(0x3a3028), Transform::xyz(0.0, -0.1, 0.0));
    for side in [-0.8f32, 0.8] {
        b.mesh(Shape::cuboid(0.1, 0.1, LENGTH), Material::standard(STEEL).metal(1.0, 0.4), Transform::xyz(side, 0.1, 0.0));
    }
    for (i, at) in layout::line(Vec3::new(0.0, 0.0, -LENGTH * 0.5), Vec3::new(0.0, 0.0, LENGTH * 0.5), 20).enumerate() {
        let frame = b.group(Transform::at(at));
        for side in [-1.0f32, 1.0] {
            b.child(frame, Shape::cuboid(0.4, 4.0, 0.4), Material::standard(0x5a3a1a), Transform::xyz(side * 2.6, 2.0, 0.0));
        }
        b.child(frame, Shape::cuboid(5.6, 0.4, 0.4), Material::standard(0x5a3a1a), Transform::xyz(0.0, 4.1, 0.0));
        if i % 3 == 0 {
            let bulb = b.child(frame, Shape::sphere(0.15), Material::glow(0xffc060, 3.0), Transform::xyz(0.0, 3.7, 0.0));
            let light = b.light(Light::point(0xffb050, 1.2, at + Vec3::Y * 3.6, 10.0));
            if b.chance(0.3) {
                b.oscillate(bulb, Property::EmissiveIntensity, 2.5, 17.0, at.z);
                b.oscillate(light, Property::LightIntensity, 1.0, 17.0, at.z);
            }
        }
        let vein = b.rng().gen_range(0.0..1.0f32);
        if vein < 0.4 {
            let side = if vein < 0.2 { -2.9 } else { 2.9 };
            let ore = b.place(Shape::Octahedron { radius: 0.3 }, Material::glow(0x40e0ff, 1.0).metal(0.5, 0.2), at + Vec3::new(side, 2.0, 1.0));
            b.oscillate(ore, Property::EmissiveIntensity, 0.6, 1.5, at.z);
        }
    }

    // A mine cart train loops along the rails.
    let train = b.group(Transform::IDENTITY);
    for car in 0..3 {
        let cart = b.child_group(train, Transform::xyz(0.0, 0.0, car as f32 * 2.6));
        b.child(cart, Shape::tapered(1.1, 0.8, 1.2), Material::standard(RUST).metal(0.8, 0.7), Transform::xyz(0.0, 0.9, 0.0));
        b.child(cart, Shape::cube(1.2), Material::standard(0x202020), Transform::xyz(0.0, 1.4, 0.0).scaled_by(Vec3::new(1.0, 0.3, 1.2)));
    }
    b.animate(move |g: &mut SceneGraph, t: f32| {
        g.node_mut(train).transform.translation.z = (t * 5.0).rem_euclid(LENGTH) - LENGTH * 0.5;
    });
    let headlamp = b.light(Light::spot(0xfff0c0, 3.0, Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, 20.0), 0.4));
    b.animate(move |g: &mut SceneGraph, t: f32| {
        let z = (t * 5.0).rem_euclid(LENGTH) - LENGTH * 0.5 + 7.0;
        if let Light::Spot { position, target, .. } = g.light_mut(headlamp) {
            *position = Vec3::new(0.0, 2.0, z);
            *target = Vec3::new(0.0, 0.0, z + 20.0);
        }
    });
    presets::dust(b, 250, Vec3::new(0.0, 2.0, 0.0), Vec3::new(2.5, 2.0, LENGTH * 0.5), 0xc0a080);
}
