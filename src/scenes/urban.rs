use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::common::{building, ground, lamp_post, night_fill, outdoor_lights, tree};
use crate::animate::{Property, Wave};
use crate::graph::{Fog, Light, Material, SceneGraph, Shape};
use crate::layout;
use crate::math::Color;
use crate::particles::presets;
use crate::scene::SceneBuilder;
use crate::types::Transform;

const NEON: [u32; 5] = [0xff2a6d, 0x05d9e8, 0xd1f7ff, 0xf9c80e, 0x9b5de5];

/// Glowing sign bar with a flicker.
fn neon_sign(b: &mut SceneBuilder, at: Vec3, width: f32, color: u32, yaw: f32) {
    let sign = b.mesh(
        Shape::cuboid(width, 0.4, 0.05),
        Material::glow(color, 2.5),
        Transform::at(at).rotated_y(yaw),
    );
    let rate = b.range(4.0, 14.0);
    let phase = b.range(0.0, TAU);
    b.oscillate(sign, Property::EmissiveIntensity, 0.8, rate, phase);
}

pub fn cyberpunk_alley(b: &mut SceneBuilder) {
    b.background(0x0a0612).fog(Fog::exp(0x140a24, 0.06));
    night_fill(b, 0x2a1a40, 0.5);
    ground(b, 60.0, 0x1a1a22);

    for i in 0..10 {
        let z = -20.0 + i as f32 * 4.5;
        for side in [-1.0f32, 1.0] {
            let height = b.range(10.0, 24.0);
            building(b, Vec3::new(side * 5.5, 0.0, z), Vec3::new(4.0, height, 4.0), 0x1e1e2a, 0xffb86c);
            let color = b.pick(&NEON);
            let y = b.range(2.5, 8.0);
            neon_sign(b, Vec3::new(side * 3.4, y, z), 1.8, color, FRAC_PI_2);
        }
    }

    for z in [-12.0f32, 0.0, 12.0] {
        b.light(Light::point(0xff2a6d, 2.0, Vec3::new(0.0, 4.0, z), 12.0));
    }
    b.place(Shape::plane(3.0, 48.0), Material::standard(0x0a0a12).metal(0.9, 0.05), Vec3::Y * 0.01);

    presets::rain(b, 400, Vec3::new(0.0, 12.0, 0.0), Vec3::new(4.0, 12.0, 22.0), 0x8fa8d8);
    presets::mist(b, 15, Vec3::new(0.0, 0.5, 0.0), Vec3::new(3.0, 0.3, 20.0), 0x402060);
}

pub fn neon_rooftops(b: &mut SceneBuilder) {
    b.background(0x120824).fog(Fog::linear(0x120824, 30.0, 120.0));
    night_fill(b, 0x301850, 0.6);

    for (x, z, at) in layout::grid(Vec3::ZERO, 9.0, 7, 7) {
        let height = 12.0 + ((x * 7 + z * 3) % 5) as f32 * 4.0;
        // Roofs sit at y = 0; the towers hang below the viewer.
        building(b, at - Vec3::Y * height, Vec3::new(7.0, height, 7.0), 0x221a30, 0x05d9e8);
        if (x + z) % 3 == 0 {
            let color = NEON[(x + z) % NEON.len()];
            neon_sign(b, at + Vec3::Y * 1.0, 3.0, color, (x as f32) * 0.3);
        }
        if (x * z) % 4 == 1 {
            let tank = b.place(Shape::cylinder(0.8, 1.5), Material::standard(0x4a4050).metal(0.7, 0.4), at + Vec3::new(2.0, 0.75, 2.0));
            b.child(tank, Shape::cone(0.9, 0.6), Material::standard(0x3a3040), Transform::xyz(0.0, 1.05, 0.0));
        }
    }

    let beacon = b.light(Light::spot(0x05d9e8, 3.0, Vec3::new(0.0, 8.0, 0.0), Vec3::new(20.0, 30.0, 0.0), 0.3));
    b.oscillate(beacon, Property::PositionX, 4.0, 0.5, 0.0);
    presets::dust(b, 120, Vec3::new(0.0, 4.0, 0.0), Vec3::new(25.0, 4.0, 25.0), 0xff2a6d);
}

pub fn rainy_bus_stop(b: &mut SceneBuilder) {
    b.background(0x1a2030).fog(Fog::exp(0x1a2030, 0.05));
    night_fill(b, 0x303a50, 0.5);
    ground(b, 50.0, 0x22262e);

    let shelter = b.group(Transform::IDENTITY);
    b.child(shelter, Shape::cuboid(4.0, 0.1, 1.6), Material::standard(0x3a4050).metal(0.6, 0.3), Transform::xyz(0.0, 2.5, 0.0));
    b.child(shelter, Shape::cuboid(4.0, 2.4, 0.05), Material::standard(0xa8c8e0).opacity(0.3), Transform::xyz(0.0, 1.25, -0.8));
    for x in [-1.9f32, 1.9] {
        b.child(shelter, Shape::cylinder(0.05, 2.5), Material::standard(0x606870).metal(0.9, 0.3), Transform::xyz(x, 1.25, 0.7));
    }
    b.child(shelter, Shape::cuboid(3.0, 0.08, 0.5), Material::standard(0x5a4a3a), Transform::xyz(0.0, 0.5, -0.4));
    let ad = b.child(shelter, Shape::cuboid(1.2, 1.8, 0.04), Material::glow(0xfff0d0, 1.5), Transform::xyz(1.4, 1.3, -0.75));
    b.oscillate(ad, Property::EmissiveIntensity, 0.2, 0.8, 0.0);

    let (_, light) = lamp_post(b, Vec3::new(-4.0, 0.0, 1.5), 4.5, 0xffc070);
    b.oscillate(light, Property::LightIntensity, 0.15, 17.0, 0.0);
    b.place(Shape::plane(8.0, 3.0), Material::standard(0x101418).metal(0.9, 0.02), Vec3::new(0.0, 0.01, 3.0));

    presets::rain(b, 500, Vec3::new(0.0, 8.0, 0.0), Vec3::new(10.0, 8.0, 10.0), 0x9fb0c8);
}

pub fn night_market(b: &mut SceneBuilder) {
    b.background(0x140c10).fog(Fog::exp(0x140c10, 0.04));
    night_fill(b, 0x402820, 0.5);
    ground(b, 60.0, 0x2a2220);

    let awnings = [0xc8302c, 0x2a8a4a, 0xe8a020, 0x3050a8];
    for row in [-3.5f32, 3.5] {
        for (i, at) in layout::line(Vec3::new(-15.0, 0.0, row), Vec3::new(15.0, 0.0, row), 8).enumerate() {
            let stall = b.group(Transform::at(at));
            let color = awnings[i % awnings.len()];
            b.child(stall, Shape::cuboid(2.8, 0.9, 1.4), Material::standard(0x5a4030), Transform::xyz(0.0, 0.45, 0.0));
            b.child(stall, Shape::cuboid(3.0, 0.05, 1.8), Material::standard(color), Transform::xyz(0.0, 2.4, 0.0).rotated_x(0.15 * row.signum()));
            for k in 0..3 {
                let bulb = b.child(
                    stall,
                    Shape::sphere(0.08),
                    Material::glow(0xffd080, 2.0),
                    Transform::xyz(-1.0 + k as f32, 2.2, -0.7 * row.signum()),
                );
                b.oscillate(bulb, Property::EmissiveIntensity, 0.4, 3.0, (i * 3 + k) as f32);
            }
        }
    }

    for x in [-10.0f32, 0.0, 10.0] {
        b.light(Light::point(0xffb060, 2.0, Vec3::new(x, 3.0, 0.0), 12.0));
    }
    presets::lanterns(b, 30, Vec3::new(0.0, 5.0, 0.0), Vec3::new(15.0, 1.0, 3.0), 0xff7040);
    presets::mist(b, 12, Vec3::new(0.0, 2.0, 0.0), Vec3::new(14.0, 1.0, 2.0), 0x80706a);
}

pub fn subway_platform(b: &mut SceneBuilder) {
    b.background(0x101214).fog(Fog::linear(0x101214, 15.0, 60.0));
    night_fill(b, 0x404a40, 0.6);

    b.mesh(Shape::cuboid(6.0, 1.0, 60.0), Material::standard(0x8a8a80), Transform::xyz(-3.0, 0.5, 0.0));
    b.mesh(Shape::cuboid(6.0, 0.05, 60.0), Material::standard(0x2a2420), Transform::xyz(3.0, 0.0, 0.0));
    b.mesh(Shape::cuboid(0.3, 0.2, 60.0), Material::glow(0xf2c12e, 0.5), Transform::xyz(-0.2, 1.01, 0.0));
    b.mesh(Shape::cuboid(14.0, 0.2, 60.0), Material::standard(0xc8c8b8), Transform::xyz(0.0, 5.0, 0.0));

    for z in (-5..=5).map(|i| i as f32 * 5.0) {
        b.place(Shape::cylinder(0.25, 4.0), Material::standard(0xd8d0c0), Vec3::new(-5.0, 3.0, z));
        let tube = b.place(Shape::cuboid(0.2, 0.08, 2.5), Material::glow(0xe8f0ff, 1.8), Vec3::new(-2.0, 4.85, z));
        if b.chance(0.2) {
            b.oscillate(tube, Property::EmissiveIntensity, 1.2, 25.0, z);
        }
    }

    let train = b.group(Transform::xyz(3.0, 0.0, -80.0));
    for car in 0..4 {
        b.child(train, Shape::cuboid(3.0, 3.2, 14.0), Material::standard(0xb8bcc0).metal(0.8, 0.3), Transform::xyz(0.0, 1.8, car as f32 * 14.5));
        b.child(train, Shape::cuboid(3.02, 0.8, 12.0), Material::glow(0xfff4d0, 1.0), Transform::xyz(0.0, 2.3, car as f32 * 14.5));
    }
    b.animate(move |g: &mut SceneGraph, t: f32| {
        g.node_mut(train).transform.translation.z = -80.0 + (t * 12.0).rem_euclid(160.0);
    });

    presets::dust(b, 100, Vec3::new(-3.0, 2.5, 0.0), Vec3::new(3.0, 1.5, 25.0), 0xd8d0b0);
}

pub fn harbor_cranes(b: &mut SceneBuilder) {
    b.background(0x6a88a0).fog(Fog::linear(0x6a88a0, 40.0, 160.0));
    outdoor_lights(b, 0xb8d0e0, 0x203040, 0xffe8c8, 1.0);

    let sea = b.place(Shape::plane(300.0, 300.0), Material::standard(0x2a4a60).metal(0.5, 0.2), Vec3::new(0.0, -0.5, 0.0));
    b.oscillate(sea, Property::PositionY, 0.1, 0.6, 0.0);
    b.mesh(Shape::cuboid(80.0, 2.0, 20.0), Material::standard(0x606060), Transform::xyz(0.0, 0.5, -15.0));

    let paints = [0xe05a2a, 0x2a6ae0, 0x2ab05a, 0xe0c02a];
    for (i, at) in layout::line(Vec3::new(-30.0, 1.5, -10.0), Vec3::new(30.0, 1.5, -10.0), 4).enumerate() {
        let crane = b.group(Transform::at(at));
        let color = paints[i];
        for (dx, dz) in [(-3.0f32, -3.0f32), (3.0, -3.0), (-3.0, 3.0), (3.0, 3.0)] {
            b.child(crane, Shape::cuboid(0.6, 24.0, 0.6), Material::standard(color), Transform::xyz(dx, 12.0, dz));
        }
        let boom = b.child_group(crane, Transform::xyz(0.0, 24.0, 0.0));
        b.child(boom, Shape::cuboid(1.0, 1.0, 40.0), Material::standard(color), Transform::xyz(0.0, 0.0, 10.0));
        b.child(boom, Shape::cylinder(0.05, 10.0), Material::standard(0x202020), Transform::xyz(0.0, -5.0, 22.0));
        b.oscillate(boom, Property::RotationY, 0.4, 0.1, i as f32 * 1.3);
    }

    let palette = [0xa83a2a, 0x2a5a8a, 0x3a7a3a, 0xc8a030, 0x707070];
    for (x, z, at) in layout::grid(Vec3::new(0.0, 1.5, -20.0), 3.2, 12, 3) {
        let stack = 1 + (x * 5 + z) % 3;
        for level in 0..stack {
            let color = b.pick(&palette);
            b.place(Shape::cuboid(3.0, 2.6, 6.0), Material::standard(color).metal(0.5, 0.6), at + Vec3::Y * (1.3 + level as f32 * 2.6));
        }
    }

    presets::mist(b, 20, Vec3::new(0.0, 2.0, 20.0), Vec3::new(50.0, 1.0, 20.0), 0xc0d0e0);
}

pub fn suburban_cul_de_sac(b: &mut SceneBuilder) {
    b.background(0xa8d8f0);
    outdoor_lights(b, 0xe0f0ff, 0x4a6a3a, 0xfff8e0, 1.3);
    ground(b, 120.0, 0x5a9a40);
    b.place(Shape::cylinder(9.0, 0.05), Material::standard(0x404044), Vec3::Y * 0.02);
    b.place(Shape::cuboid(6.0, 0.05, 30.0), Material::standard(0x404044), Vec3::new(0.0, 0.02, 22.0));

    let walls = [0xf0e8d8, 0xd8e8f0, 0xf0d8d0, 0xe0f0d8, 0xf8f0c0];
    for (i, (at, angle)) in layout::ring(Vec3::ZERO, 18.0, 7).enumerate() {
        if at.z > 12.0 {
            continue;
        }
        let house = b.group(Transform::at(at).rotated_y(-angle - FRAC_PI_2));
        b.child(house, Shape::cuboid(7.0, 3.5, 6.0), Material::standard(walls[i % walls.len()]), Transform::xyz(0.0, 1.75, 0.0));
        b.child(
            house,
            Shape::cone(5.5, 2.5),
            Material::standard(0x6a3a2a),
            Transform::xyz(0.0, 4.75, 0.0).rotated_y(std::f32::consts::FRAC_PI_4).scaled_by(Vec3::new(1.0, 1.0, 0.85)),
        );
        b.child(house, Shape::cuboid(1.0, 2.0, 0.05), Material::standard(0x5a3a20), Transform::xyz(0.0, 1.0, 3.01));
        let porch = b.child(house, Shape::sphere(0.12), Material::glow(0xffe0a0, 1.5), Transform::xyz(0.8, 2.2, 3.1));
        b.oscillate(porch, Property::EmissiveIntensity, 0.3, 0.5, i as f32);
        tree(b, at * 0.75 + Vec3::new(2.5, 0.0, 0.0), 4.0, 1.8, 0x5a4030, 0x3a7a30);
    }

    let sprinkler = b.place(Shape::cylinder(0.05, 0.3), Material::standard(0x404040), Vec3::new(10.0, 0.15, -6.0));
    b.spin(sprinkler, Property::RotationY, 2.0);
    presets::sparks(b, 60, Vec3::new(10.0, 0.8, -6.0), Vec3::new(1.5, 0.8, 1.5), 0xc8e8ff);
}

pub fn parking_garage(b: &mut SceneBuilder) {
    b.background(0x181a1c).fog(Fog::linear(0x181a1c, 10.0, 60.0));
    night_fill(b, 0x3a4038, 0.4);

    for level in 0..3 {
        let y = level as f32 * 3.5;
        b.mesh(Shape::cuboid(40.0, 0.3, 30.0), Material::standard(0x6a6a68), Transform::xyz(0.0, y, 0.0));
        for (_, _, at) in layout::grid(Vec3::new(0.0, y + 1.75, 0.0), 8.0, 5, 4) {
            b.place(Shape::cuboid(0.6, 3.2, 0.6), Material::standard(0x8a8a84), at);
        }
        for (i, at) in layout::line(Vec3::new(-16.0, y + 3.2, 0.0), Vec3::new(16.0, y + 3.2, 0.0), 6).enumerate() {
            let tube = b.place(Shape::cuboid(1.4, 0.06, 0.15), Material::glow(0xd0ffd8, 1.6), at);
            if (i + level) % 4 == 0 {
                b.wave(tube, Property::EmissiveIntensity, 1.5, 30.0, i as f32, Wave::Cosine);
            }
        }
    }

    let paints = [0xb02020, 0x2040a0, 0xd0d0d0, 0x202020, 0xc0a020];
    for (x, _, at) in layout::grid(Vec3::new(0.0, 0.9, 6.0), 3.0, 8, 1) {
        if x % 3 == 2 {
            continue;
        }
        let car = b.group(Transform::at(at));
        let color = b.pick(&paints);
        b.child(car, Shape::cuboid(1.8, 0.7, 4.2), Material::standard(color).metal(0.7, 0.3), Transform::IDENTITY);
        b.child(car, Shape::cuboid(1.6, 0.6, 2.2), Material::standard(0x20242a).metal(0.9, 0.1), Transform::xyz(0.0, 0.6, -0.2));
    }

    let exit = b.place(Shape::cuboid(1.5, 0.5, 0.05), Material::glow(0x30ff60, 2.0), Vec3::new(18.0, 2.5, -14.0));
    b.oscillate(exit, Property::EmissiveIntensity, 0.3, 1.0, 0.0);
    presets::dust(b, 80, Vec3::new(0.0, 1.5, 0.0), Vec3::new(18.0, 1.5, 12.0), 0xb0b0a0);
}

pub fn skyscraper_canyon(b: &mut SceneBuilder) {
    b.background(0x7a98b8).fog(Fog::linear(0x7a98b8, 60.0, 300.0));
    outdoor_lights(b, 0xd0e0f0, 0x303840, 0xfff0d8, 1.2);
    ground(b, 400.0, 0x3a3a40);

    let glass = [0x6a88a8, 0x4a6078, 0x8aa0b0, 0x3a5068];
    for (x, z, at) in layout::grid(Vec3::ZERO, 22.0, 9, 9) {
        if x == 4 {
            continue;
        }
        let height = 40.0 + ((x * 13 + z * 7) % 9) as f32 * 12.0;
        let color = glass[(x + z) % glass.len()];
        let tower = b.place(Shape::cuboid(16.0, height, 16.0), Material::standard(color).metal(0.8, 0.15), at + Vec3::Y * height * 0.5);
        if height > 120.0 {
            let tip = b.child(tower, Shape::sphere(0.5), Material::glow(0xff2020, 3.0), Transform::xyz(0.0, height * 0.5 + 4.0, 0.0));
            b.child(tower, Shape::cylinder(0.2, 8.0), Material::standard(0x808080), Transform::xyz(0.0, height * 0.5 + 4.0, 0.0));
            b.wave(tip, Property::EmissiveIntensity, 3.0, 2.0, x as f32, Wave::Cosine);
        }
    }

    let blimp = b.mesh(
        Shape::sphere(6.0),
        Material::standard(0xd8d8d0),
        Transform::xyz(0.0, 90.0, 0.0).scaled_by(Vec3::new(1.0, 0.4, 0.4)),
    );
    b.oscillate(blimp, Property::PositionZ, 60.0, 0.05, 0.0);

    presets::swarm(b, 40, Vec3::new(-20.0, 60.0, 10.0), 5.0, 12.0, 0x303030);
}

pub fn lantern_festival(b: &mut SceneBuilder) {
    b.background(0x0a0a20).fog(Fog::exp(0x0a0a20, 0.012));
    night_fill(b, 0x20204a, 0.4);

    let river = b.place(Shape::plane(200.0, 30.0), Material::standard(0x0a1030).metal(0.8, 0.05), Vec3::ZERO);
    b.oscillate(river, Property::PositionY, 0.05, 0.8, 0.0);
    for side in [-1.0f32, 1.0] {
        b.mesh(Shape::cuboid(200.0, 1.5, 20.0), Material::standard(0x2a2a30), Transform::xyz(0.0, 0.5, side * 25.0));
        for at in layout::line(Vec3::new(-60.0, 1.25, side * 18.0), Vec3::new(60.0, 1.25, side * 18.0), 12) {
            let (_, light) = lamp_post(b, at, 3.0, 0xff9040);
            b.oscillate(light, Property::LightIntensity, 0.4, 5.0, at.x);
        }
    }

    for at in layout::scatter(b.rng(), 40, Vec3::new(0.0, 0.1, 0.0), Vec3::new(60.0, 0.0, 12.0)) {
        let float = b.place(Shape::cube(0.4), Material::glow(0xffb050, 1.8), at);
        let phase = b.range(0.0, TAU);
        b.oscillate(float, Property::PositionY, 0.05, 1.5, phase);
        b.oscillate(float, Property::RotationY, 0.3, 0.3, phase);
    }

    presets::lanterns(b, 300, Vec3::new(0.0, 25.0, 0.0), Vec3::new(50.0, 25.0, 30.0), 0xff8030);
    presets::stars(b, 200, Vec3::ZERO, 150.0, 0xe0e0ff);
}

pub fn ramen_stall(b: &mut SceneBuilder) {
    b.background(0x120a08).fog(Fog::exp(0x120a08, 0.06));
    night_fill(b, 0x3a2010, 0.4);
    ground(b, 40.0, 0x2a2622);

    let stall = b.group(Transform::IDENTITY);
    b.child(stall, Shape::cuboid(4.0, 1.1, 1.2), Material::standard(0x6a4a2a), Transform::xyz(0.0, 0.55, 0.0));
    b.child(stall, Shape::cuboid(4.4, 0.08, 1.6), Material::standard(0x8a6a40), Transform::xyz(0.0, 1.12, 0.2));
    b.child(stall, Shape::cuboid(4.4, 0.1, 2.4), Material::standard(0x3a2a20), Transform::xyz(0.0, 2.8, 0.0));
    for (i, x) in [-1.5f32, -0.5, 0.5, 1.5].into_iter().enumerate() {
        b.child(stall, Shape::cuboid(0.9, 0.7, 0.02), Material::standard(0xd82a20).opacity(0.9), Transform::xyz(x, 2.35, 1.2));
        let lantern = b.child(stall, Shape::sphere(0.22), Material::glow(0xff3020, 2.0), Transform::xyz(x, 2.5, 1.5));
        b.oscillate(lantern, Property::PositionX, 0.03, 1.6, i as f32);
        b.place(Shape::cylinder(0.25, 0.05), Material::standard(0x8a2a1a), Vec3::new(x, 0.75, 1.3));
    }
    for x in [-1.2f32, 0.0, 1.2] {
        b.mesh(
            Shape::sphere(0.18),
            Material::standard(0xf0e8d8),
            Transform::xyz(x, 1.2, 0.2).scaled_by(Vec3::new(1.0, 0.5, 1.0)),
        );
        presets::mist(b, 6, Vec3::new(x, 1.6, 0.2), Vec3::new(0.1, 0.3, 0.1), 0xeeeeee);
    }

    let light = b.light(Light::point(0xffb070, 2.5, Vec3::new(0.0, 2.4, 0.5), 10.0));
    b.oscillate(light, Property::LightIntensity, 0.2, 11.0, 0.0);
    presets::rain(b, 250, Vec3::new(0.0, 8.0, 3.0), Vec3::new(8.0, 8.0, 4.0), 0x8890a0);
}

pub fn abandoned_mall(b: &mut SceneBuilder) {
    b.background(0x2a2822).fog(Fog::linear(0x2a2822, 10.0, 70.0));
    night_fill(b, 0x5a5848, 0.5);
    b.light(Light::directional(0xd8d0b0, 0.6, Vec3::new(0.0, 30.0, 0.0)));
    ground(b, 80.0, 0x8a8478);

    for side in [-1.0f32, 1.0] {
        for (i, at) in layout::line(Vec3::new(side * 10.0, 0.0, -24.0), Vec3::new(side * 10.0, 0.0, 24.0), 7).enumerate() {
            let front = b.place(Shape::cuboid(0.2, 4.0, 6.0), Material::standard(0x505a60).opacity(0.4), at + Vec3::new(-side * 2.0, 2.0, 0.0));
            let sign_color = Color::hex(NEON[i % NEON.len()]).scale(0.4);
            let sign = b.child(front, Shape::cuboid(0.1, 0.6, 4.0), Material::glow(sign_color, 0.8), Transform::xyz(0.0, 2.5, 0.0));
            if b.chance(0.3) {
                b.oscillate(sign, Property::EmissiveIntensity, 0.8, 20.0, i as f32);
            }
        }
    }

    b.place(Shape::cylinder(3.0, 0.6), Material::standard(0x6a6a60), Vec3::new(0.0, 0.3, 0.0));
    for at in layout::scatter(b.rng(), 25, Vec3::ZERO, Vec3::new(7.0, 0.0, 22.0)) {
        if b.chance(0.5) {
            b.place(Shape::cone(0.3, 0.9), Material::standard(0x3a6a2a), at + Vec3::Y * 0.45);
        } else {
            let yaw = b.range(0.0, TAU);
            b.mesh(Shape::cuboid(0.5, 0.05, 0.5), Material::standard(0xc8c0b0), Transform::at(at).rotated_y(yaw));
        }
    }
    let escalator = b.mesh(Shape::cuboid(1.5, 0.2, 10.0), Material::standard(0x707070).metal(0.8, 0.4), Transform::xyz(0.0, 3.0, -14.0).rotated_x(-0.5));
    b.oscillate(escalator, Property::RotationZ, 0.005, 0.2, 0.0);

    presets::dust(b, 250, Vec3::new(0.0, 6.0, 0.0), Vec3::new(8.0, 6.0, 24.0), 0xf0e0b0);
}

pub fn elevated_highway(b: &mut SceneBuilder) {
    b.background(0x201a30).fog(Fog::linear(0x201a30, 30.0, 200.0));
    night_fill(b, 0x302848, 0.5);
    ground(b, 400.0, 0x181820);

    let deck_y = 12.0;
    b.mesh(Shape::cuboid(16.0, 1.0, 400.0), Material::standard(0x505058), Transform::xyz(0.0, deck_y, 0.0));
    for at in layout::line(Vec3::new(0.0, deck_y * 0.5, -190.0), Vec3::new(0.0, deck_y * 0.5, 190.0), 20) {
        b.place(Shape::cuboid(3.0, deck_y, 2.0), Material::standard(0x606068), at);
        b.place(Shape::cylinder(0.1, 5.0), Material::standard(0x404040), at + Vec3::new(7.5, deck_y * 0.5 + 2.5, 0.0));
        b.place(Shape::sphere(0.3), Material::glow(0xffb060, 2.0), at + Vec3::new(7.0, deck_y * 0.5 + 5.0, 0.0));
    }

    // Each lane is a train of evenly spaced cars; sliding the lane by up to
    // one spacing and wrapping reads as endless traffic.
    let spacing = 10.0;
    for lane in 0..4 {
        let x = -6.0 + lane as f32 * 4.0;
        let speed = if lane >= 2 { -25.0 } else { 25.0 };
        let color = if lane >= 2 { 0xff2020 } else { 0xfff0d0 };
        let traffic = b.group(Transform::xyz(x, deck_y + 1.0, 0.0));
        for at in layout::line(Vec3::new(0.0, 0.0, -190.0), Vec3::new(0.0, 0.0, 190.0), 39) {
            b.child(traffic, Shape::cuboid(1.8, 1.2, 4.0), Material::standard(0x303038).metal(0.7, 0.3), Transform::at(at));
            b.child(traffic, Shape::cuboid(1.6, 0.2, 0.05), Material::glow(color, 3.0), Transform::at(at + Vec3::new(0.0, 0.0, 2.01)));
        }
        b.animate(move |g: &mut SceneGraph, t: f32| {
            g.node_mut(traffic).transform.translation.z = (speed * t).rem_euclid(spacing);
        });
    }

    presets::dust(b, 60, Vec3::new(0.0, 6.0, 0.0), Vec3::new(60.0, 6.0, 60.0), 0xa090c0);
}

pub fn laundromat_at_midnight(b: &mut SceneBuilder) {
    b.background(0x0c0c14);
    night_fill(b, 0x303040, 0.3);
    b.light(Light::point(0xe8fff0, 2.5, Vec3::new(0.0, 3.5, 0.0), 20.0));
    ground(b, 30.0, 0xd8d8d0);

    for (i, at) in layout::line(Vec3::new(-6.0, 0.0, -3.0), Vec3::new(6.0, 0.0, -3.0), 7).enumerate() {
        let washer = b.place(Shape::cube(1.4), Material::standard(0xf4f4f0).metal(0.3, 0.4), at + Vec3::Y * 0.7);
        let drum = b.child(washer, Shape::cylinder(0.45, 0.05), Material::standard(0x405060).metal(0.8, 0.1), Transform::xyz(0.0, 0.0, 0.71).rotated_x(FRAC_PI_2));
        b.spin(drum, Property::RotationY, 3.0 + i as f32 * 0.7);
        if i % 2 == 0 {
            b.oscillate(washer, Property::PositionX, 0.01, 30.0, i as f32);
        }
        let led = b.child(washer, Shape::sphere(0.04), Material::glow(0x30ff60, 2.0), Transform::xyz(0.5, 0.55, 0.71));
        b.oscillate(led, Property::EmissiveIntensity, 1.0, 2.0, i as f32);
    }
    b.mesh(Shape::cuboid(8.0, 0.9, 1.0), Material::standard(0xd8c8a0), Transform::xyz(0.0, 0.45, 2.5));
    b.mesh(Shape::cuboid(14.0, 2.5, 0.05), Material::standard(0x203040).opacity(0.3), Transform::xyz(0.0, 1.6, 5.0));

    let sign = b.place(Shape::cuboid(3.0, 0.5, 0.05), Material::glow(0x05d9e8, 2.0), Vec3::new(0.0, 3.0, 4.95));
    b.oscillate(sign, Property::EmissiveIntensity, 1.5, 7.0, 0.0);

    presets::bubbles(b, 40, Vec3::new(0.0, 1.5, -2.0), Vec3::new(6.0, 1.0, 0.5));
    presets::rain(b, 200, Vec3::new(0.0, 6.0, 9.0), Vec3::new(10.0, 6.0, 3.0), 0x708090);
}

pub fn water_tower_district(b: &mut SceneBuilder) {
    b.background(0xe0a070).fog(Fog::linear(0xe0a070, 50.0, 200.0));
    outdoor_lights(b, 0xffd0a0, 0x402818, 0xffa050, 1.1);
    ground(b, 300.0, 0x4a3a30);

    let bricks = [0x8a3a2a, 0x7a4a3a, 0x6a3020, 0x9a5040];
    for (x, z, at) in layout::grid(Vec3::ZERO, 14.0, 8, 8) {
        let height = 8.0 + ((x * 3 + z * 5) % 4) as f32 * 4.0;
        let color = bricks[(x + 2 * z) % bricks.len()];
        building(b, at, Vec3::new(11.0, height, 11.0), color, 0xffe0a0);
        if (x + z) % 3 == 0 {
            let top = at + Vec3::Y * height;
            let tower = b.group(Transform::at(top));
            for (leg, _) in layout::ring(Vec3::ZERO, 1.5, 4) {
                b.child(tower, Shape::cylinder(0.1, 3.0), Material::standard(0x3a2a20), Transform::at(leg + Vec3::Y * 1.5));
            }
            b.child(tower, Shape::cylinder(1.8, 2.5), Material::standard(0x6a4a30), Transform::xyz(0.0, 4.2, 0.0));
            b.child(tower, Shape::cone(2.0, 1.0), Material::standard(0x3a3a3a), Transform::xyz(0.0, 6.0, 0.0));
        }
    }

    presets::swarm(b, 50, Vec3::new(0.0, 40.0, 0.0), 10.0, 25.0, 0x202020);
    presets::dust(b, 80, Vec3::new(0.0, 10.0, 0.0), Vec3::new(50.0, 10.0, 50.0), 0xffc080);
}
