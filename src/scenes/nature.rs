use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::common::{campfire, ground, outdoor_lights, pine, rock, tree};
use crate::animate::{Property, Wave};
use crate::graph::{Fog, Light, Material, Shape};
use crate::layout::{self, maze::Maze};
use crate::math::Color;
use crate::particles::presets;
use crate::scene::SceneBuilder;
use crate::types::Transform;

pub fn bamboo_forest(b: &mut SceneBuilder) {
    b.background(0xa8c8a0).fog(Fog::exp(0xa8c8a0, 0.035));
    outdoor_lights(b, 0xdff5d8, 0x2d3a1e, 0xfff3c4, 1.1);
    ground(b, 80.0, 0x4b5d2a);

    let stalks = layout::scatter(b.rng(), 140, Vec3::ZERO, Vec3::new(25.0, 0.0, 25.0));
    for (i, at) in stalks.into_iter().enumerate() {
        if at.length() < 3.0 {
            continue;
        }
        let height = b.range(6.0, 12.0);
        let radius = b.range(0.06, 0.14);
        let stalk = b.group(Transform::at(at));
        let segments = 5;
        for s in 0..segments {
            let seg_h = height / segments as f32;
            let shade = Color::hex(0x6f9a3a).lerp(Color::hex(0x9cbf52), s as f32 / segments as f32);
            b.child(
                stalk,
                Shape::cylinder(radius, seg_h * 0.96),
                Material::standard(shade).metal(0.0, 0.5),
                Transform::xyz(0.0, seg_h * (s as f32 + 0.5), 0.0),
            );
        }
        for leaf in 0..3 {
            let yaw = b.range(0.0, TAU);
            b.child(
                stalk,
                Shape::cuboid(0.9, 0.02, 0.12),
                Material::standard(0x5d8c2c),
                Transform::xyz(0.3, height * (0.7 + leaf as f32 * 0.1), 0.0).rotated(Vec3::new(0.0, yaw, -0.4)),
            );
        }
        b.oscillate(stalk, Property::RotationZ, 0.03, 0.8, i as f32 * 0.37);
    }

    presets::dust(b, 120, Vec3::new(0.0, 3.0, 0.0), Vec3::new(12.0, 3.0, 12.0), 0xf4f0c8);
}

pub fn sunflower_maze(b: &mut SceneBuilder) {
    b.background(0x8ec9f0).fog(Fog::linear(0x8ec9f0, 30.0, 90.0));
    outdoor_lights(b, 0xbfe3ff, 0x5a4a20, 0xffe6a0, 1.3);
    ground(b, 100.0, 0x7a6a32);

    let cell = 3.0;
    let maze = Maze::generate(9, 9, b.rng());
    let origin = Vec3::new(-(maze.width() as f32) * cell * 0.5, 0.0, -(maze.height() as f32) * cell * 0.5);

    for wall in maze.walls() {
        let (mx, mz) = wall.midpoint();
        let center = origin + Vec3::new(mx * cell, 0.0, mz * cell);
        let size = if wall.is_horizontal() {
            Vec3::new(cell + 0.3, 1.6, 0.5)
        } else {
            Vec3::new(0.5, 1.6, cell + 0.3)
        };
        b.mesh(Shape::Box { size }, Material::standard(0x3f6b22), Transform::at(center + Vec3::Y * 0.8));

        for k in 0..2 {
            let along = (k as f32 - 0.5) * cell * 0.5;
            let offset = if wall.is_horizontal() { Vec3::X * along } else { Vec3::Z * along };
            let height = b.range(2.0, 2.6);
            let head = b.mesh(
                Shape::cylinder(0.35, 0.08),
                Material::standard(0xf2c12e),
                Transform::at(center + offset + Vec3::Y * height).rotated_x(PI / 2.4),
            );
            b.child(head, Shape::cylinder(0.16, 0.1), Material::standard(0x4a2c12), Transform::xyz(0.0, 0.03, 0.0));
            b.oscillate(head, Property::RotationY, 0.15, 0.4, hedge_phase(mx, mz, k));
        }
    }

    for (x, z) in maze.solve() {
        let at = origin + Vec3::new((x as f32 + 0.5) * cell, 0.05, (z as f32 + 0.5) * cell);
        b.place(Shape::cylinder(0.5, 0.05), Material::standard(0xd8c89a), at);
    }

    presets::petals(b, 80, Vec3::new(0.0, 4.0, 0.0), Vec3::new(14.0, 4.0, 14.0), 0xf7d038);
}

fn hedge_phase(x: f32, z: f32, k: usize) -> f32 {
    (x * 1.7 + z * 0.9 + k as f32) % TAU
}

pub fn cherry_blossom_grove(b: &mut SceneBuilder) {
    b.background(0xfbe3ea).fog(Fog::exp(0xfbe3ea, 0.03));
    outdoor_lights(b, 0xffeef4, 0x6b5a4a, 0xfff0e0, 1.0);
    ground(b, 80.0, 0x8fae6b);

    for (at, _) in layout::ring(Vec3::ZERO, 9.0, 10) {
        let height = b.range(3.0, 4.5);
        let pink = Color::hex(0xf7b6c8).lerp(Color::hex(0xf4d7e0), b.range(0.0, 1.0));
        let t = tree(b, at, height, height * 0.45, 0x4a3328, pink);
        b.oscillate(t, Property::RotationZ, 0.02, 0.6, at.x);
    }

    b.mesh(Shape::torus(3.0, 0.15), Material::standard(0xc8302c), Transform::at(Vec3::new(0.0, 0.0, 3.5)));
    b.place(Shape::cylinder(3.5, 0.05), Material::standard(0x6fa8c8).metal(0.3, 0.1), Vec3::new(0.0, 0.02, 0.0));

    presets::petals(b, 250, Vec3::new(0.0, 5.0, 0.0), Vec3::new(14.0, 5.0, 14.0), 0xf9c4d2);
}

pub fn mushroom_glade(b: &mut SceneBuilder) {
    b.background(0x0c1a14).fog(Fog::exp(0x0c1a14, 0.06));
    b.light(Light::ambient(0x305040, 0.4));
    ground(b, 60.0, 0x1d2b1a);

    let caps = [0xe04f5f, 0x6fd0c8, 0xb07ae8, 0xf0a040];
    for at in layout::scatter(b.rng(), 35, Vec3::ZERO, Vec3::new(10.0, 0.0, 10.0)) {
        let height = b.range(0.3, 2.2);
        let cap = b.pick(&caps);
        let stem = b.place(Shape::tapered(0.08, 0.14, height), Material::standard(0xe8e0cc), at + Vec3::Y * height * 0.5);
        let head = b.child(
            stem,
            Shape::Sphere { radius: height * 0.45 + 0.2 },
            Material::glow(cap, 0.8),
            Transform::xyz(0.0, height * 0.5, 0.0).scaled_by(Vec3::new(1.0, 0.45, 1.0)),
        );
        let phase = b.range(0.0, TAU);
        b.oscillate(head, Property::EmissiveIntensity, 0.5, 1.2, phase);
    }

    for at in layout::scatter(b.rng(), 12, Vec3::ZERO, Vec3::new(12.0, 0.0, 12.0)) {
        rock(b, at, 0.6, 0x3b4a3a);
    }

    presets::spores(b, 200, Vec3::new(0.0, 3.0, 0.0), Vec3::new(10.0, 3.0, 10.0), 0x9effd0);
}

pub fn autumn_lake(b: &mut SceneBuilder) {
    b.background(0xe8c8a0).fog(Fog::linear(0xe8c8a0, 20.0, 70.0));
    outdoor_lights(b, 0xffe0b8, 0x5a3a1a, 0xffc070, 1.2);
    ground(b, 120.0, 0x7a5a2a);

    let water = b.place(Shape::cylinder(12.0, 0.1), Material::standard(0x3a6a8a).metal(0.6, 0.05), Vec3::Y * 0.05);
    b.oscillate(water, Property::PositionY, 0.02, 0.7, 0.0);

    let leaves = [0xd2691e, 0xb22222, 0xdaa520, 0x8b4513];
    for (at, _) in layout::ring(Vec3::ZERO, 16.0, 22) {
        let jitter = layout::jitter(b.rng(), Vec3::new(2.0, 0.0, 2.0));
        let color = b.pick(&leaves);
        let height = b.range(3.5, 6.0);
        tree(b, at + jitter, height, height * 0.4, 0x3a2a1a, color);
    }

    let dock = b.place(Shape::cuboid(1.5, 0.15, 6.0), Material::standard(0x6b4a2a), Vec3::new(0.0, 0.4, 10.0));
    for z in [-2.5f32, 0.0, 2.5] {
        b.child(dock, Shape::cylinder(0.1, 1.2), Material::standard(0x4a3018), Transform::xyz(0.6, -0.5, z));
        b.child(dock, Shape::cylinder(0.1, 1.2), Material::standard(0x4a3018), Transform::xyz(-0.6, -0.5, z));
    }

    presets::petals(b, 180, Vec3::new(0.0, 5.0, 0.0), Vec3::new(18.0, 5.0, 18.0), 0xc8641e);
}

pub fn desert_oasis(b: &mut SceneBuilder) {
    b.background(0xf6d7a0).fog(Fog::linear(0xf6d7a0, 40.0, 120.0));
    outdoor_lights(b, 0xfff4d6, 0xc89a5a, 0xfff0c0, 1.6);
    ground(b, 200.0, 0xd9b26f);

    for (i, (at, _)) in layout::ring(Vec3::ZERO, 60.0, 14).enumerate() {
        let size = 8.0 + (i % 4) as f32 * 3.0;
        b.mesh(
            Shape::sphere(size),
            Material::standard(0xe0b878),
            Transform::at(at).scaled_by(Vec3::new(2.0, 0.35, 1.2)).rotated_y(i as f32),
        );
    }

    b.place(Shape::cylinder(6.0, 0.1), Material::standard(0x2f8fa0).metal(0.5, 0.05), Vec3::Y * 0.05);

    for (at, angle) in layout::ring(Vec3::ZERO, 7.5, 7) {
        let height = b.range(4.0, 6.5);
        let palm = b.group(Transform::at(at).rotated_z(0.15 * angle.cos()));
        b.child(palm, Shape::tapered(0.12, 0.2, height), Material::standard(0x8a6a3a), Transform::xyz(0.0, height * 0.5, 0.0));
        for f in 0..6 {
            let yaw = f as f32 / 6.0 * TAU;
            b.child(
                palm,
                Shape::cuboid(2.2, 0.04, 0.4),
                Material::standard(0x3f8a2a),
                Transform::xyz(yaw.cos() * 1.0, height, yaw.sin() * 1.0).rotated(Vec3::new(0.0, -yaw, -0.35)),
            );
        }
        b.oscillate(palm, Property::RotationX, 0.04, 0.9, angle);
    }

    presets::dust(b, 90, Vec3::new(0.0, 2.0, 0.0), Vec3::new(30.0, 2.0, 30.0), 0xf2d59a);
}

pub fn coral_reef(b: &mut SceneBuilder) {
    b.background(0x0a4a6a).fog(Fog::exp(0x0a4a6a, 0.05));
    b.light(Light::hemisphere(0x6fd0ff, 0x0a2a3a, 0.8));
    b.light(Light::directional(0x9fe8ff, 0.8, Vec3::new(0.0, 30.0, 0.0)));
    ground(b, 80.0, 0xc8b888);

    let palette = [0xff6f61, 0xffb347, 0xb19cd9, 0x77dd77, 0xff9ad5];
    for at in layout::scatter(b.rng(), 60, Vec3::ZERO, Vec3::new(14.0, 0.0, 14.0)) {
        let color = b.pick(&palette);
        match b.pick(&[0u8, 1, 2]) {
            0 => {
                let branch = b.place(Shape::tapered(0.05, 0.15, 1.5), Material::standard(color), at + Vec3::Y * 0.75);
                b.child(branch, Shape::sphere(0.2), Material::glow(color, 0.3), Transform::xyz(0.0, 0.8, 0.0));
            }
            1 => {
                b.mesh(Shape::sphere(0.7), Material::standard(color), Transform::at(at).scaled_by(Vec3::new(1.0, 0.6, 1.0)));
            }
            _ => {
                let fan = b.mesh(Shape::cuboid(1.4, 1.2, 0.05), Material::standard(color).opacity(0.85), Transform::at(at + Vec3::Y * 0.6));
                let phase = b.range(0.0, TAU);
                b.oscillate(fan, Property::RotationY, 0.2, 0.7, phase);
            }
        }
    }

    presets::swarm(b, 60, Vec3::new(3.0, 3.0, 0.0), 1.5, 3.0, 0xffd54f);
    presets::swarm(b, 40, Vec3::new(-5.0, 2.0, -4.0), 1.0, 2.0, 0x4fc3f7);
    presets::bubbles(b, 80, Vec3::new(0.0, 6.0, 0.0), Vec3::new(12.0, 6.0, 12.0));
}

pub fn kelp_forest(b: &mut SceneBuilder) {
    b.background(0x06303a).fog(Fog::exp(0x06303a, 0.07));
    b.light(Light::hemisphere(0x5fb8a8, 0x04181c, 0.7));
    ground(b, 80.0, 0x6a6048);

    for (i, at) in layout::scatter(b.rng(), 45, Vec3::ZERO, Vec3::new(15.0, 0.0, 15.0)).into_iter().enumerate() {
        let height = b.range(6.0, 14.0);
        let stalk = b.group(Transform::at(at));
        let segments = 6;
        for s in 0..segments {
            let seg = height / segments as f32;
            let blade = b.child(
                stalk,
                Shape::cuboid(0.35, seg, 0.04),
                Material::standard(Color::hex(0x3d6b2a).lerp(Color::hex(0x7a9a3a), s as f32 / 6.0)).opacity(0.9),
                Transform::xyz(0.0, seg * (s as f32 + 0.5), 0.0),
            );
            b.oscillate(blade, Property::RotationZ, 0.05 + s as f32 * 0.02, 0.6, i as f32 + s as f32 * 0.4);
        }
    }

    presets::dust(b, 150, Vec3::new(0.0, 5.0, 0.0), Vec3::new(15.0, 5.0, 15.0), 0xa8e0d0);
    presets::bubbles(b, 40, Vec3::new(0.0, 7.0, 0.0), Vec3::new(10.0, 7.0, 10.0));
}

pub fn alpine_meadow(b: &mut SceneBuilder) {
    b.background(0x9fd3ff).fog(Fog::linear(0x9fd3ff, 40.0, 160.0));
    outdoor_lights(b, 0xd8f0ff, 0x4a6a2a, 0xffffff, 1.4);
    ground(b, 200.0, 0x6a9a3a);

    for (i, (at, _)) in layout::ring(Vec3::ZERO, 70.0, 9).enumerate() {
        let height = 25.0 + (i % 3) as f32 * 10.0;
        let peak = b.place(Shape::cone(18.0, height), Material::standard(0x6a6a78), at + Vec3::Y * height * 0.5);
        b.child(peak, Shape::cone(6.0, height * 0.3), Material::standard(0xf4f8ff), Transform::xyz(0.0, height * 0.35, 0.0));
    }

    let flowers = [0xffffff, 0xf7e04a, 0xb070e0, 0x4a7af0];
    for at in layout::scatter(b.rng(), 160, Vec3::ZERO, Vec3::new(25.0, 0.0, 25.0)) {
        let color = b.pick(&flowers);
        let head = b.place(Shape::sphere(0.08), Material::standard(color), at + Vec3::Y * 0.3);
        let phase = b.range(0.0, TAU);
        b.oscillate(head, Property::PositionX, 0.03, 1.5, phase);
    }

    for at in layout::scatter(b.rng(), 10, Vec3::new(0.0, 0.0, -20.0), Vec3::new(20.0, 0.0, 6.0)) {
        let height = b.range(5.0, 8.0);
        pine(b, at, height, 0x2f5a2a);
    }

    presets::fireflies(b, 30, Vec3::new(0.0, 1.0, 0.0), Vec3::new(15.0, 0.8, 15.0), 0xffffff);
}

pub fn rainforest_canopy(b: &mut SceneBuilder) {
    b.background(0x4f7a4a).fog(Fog::exp(0x4f7a4a, 0.045));
    outdoor_lights(b, 0xc8f0c0, 0x1a2a12, 0xfff0b0, 0.9);
    ground(b, 80.0, 0x2a3a1a);

    for at in layout::scatter(b.rng(), 40, Vec3::ZERO, Vec3::new(20.0, 0.0, 20.0)) {
        let height = b.range(10.0, 18.0);
        let crown = b.range(3.0, 5.0);
        let t = tree(b, at, height, crown, 0x5a4a30, 0x2f6a2a);
        let phase = b.range(0.0, TAU);
        b.oscillate(t, Property::RotationX, 0.01, 0.5, phase);
    }

    for (i, (at, _)) in layout::ring(Vec3::new(0.0, 7.0, 0.0), 6.0, 12).enumerate() {
        let vine = b.place(Shape::cylinder(0.04, 6.0), Material::standard(0x3a5a2a), at);
        b.oscillate(vine, Property::RotationZ, 0.08, 0.7, i as f32);
    }

    presets::rain(b, 300, Vec3::new(0.0, 12.0, 0.0), Vec3::new(15.0, 12.0, 15.0), 0xbfd8c0);
    presets::mist(b, 20, Vec3::new(0.0, 1.0, 0.0), Vec3::new(15.0, 0.5, 15.0), 0xd8f0d8);
}

pub fn firefly_marsh(b: &mut SceneBuilder) {
    b.background(0x0b1420).fog(Fog::exp(0x0b1420, 0.05));
    b.light(Light::ambient(0x1a2a40, 0.5));
    b.light(Light::directional(0x8090c0, 0.3, Vec3::new(-10.0, 20.0, -5.0)));
    ground(b, 80.0, 0x1a2418);

    b.place(Shape::cylinder(10.0, 0.05), Material::standard(0x0f1e2a).metal(0.7, 0.05), Vec3::Y * 0.03);
    for at in layout::scatter(b.rng(), 80, Vec3::ZERO, Vec3::new(14.0, 0.0, 14.0)) {
        if at.length() < 9.0 {
            continue;
        }
        let height = b.range(0.8, 2.0);
        let reed = b.place(Shape::cylinder(0.02, height), Material::standard(0x3a4a2a), at + Vec3::Y * height * 0.5);
        b.child(reed, Shape::cylinder(0.05, 0.3), Material::standard(0x4a3020), Transform::xyz(0.0, height * 0.5, 0.0));
        let phase = b.range(0.0, TAU);
        b.oscillate(reed, Property::RotationZ, 0.05, 1.1, phase);
    }

    for (at, _) in layout::ring(Vec3::ZERO, 4.0, 6) {
        b.mesh(Shape::cylinder(0.6, 0.05), Material::standard(0x2f6a2a), Transform::at(at + Vec3::Y * 0.07));
    }

    presets::fireflies(b, 250, Vec3::new(0.0, 1.5, 0.0), Vec3::new(14.0, 1.2, 14.0), 0xd8ff6a);
    presets::mist(b, 25, Vec3::new(0.0, 0.4, 0.0), Vec3::new(14.0, 0.3, 14.0), 0x8090a8);
}

pub fn tundra_aurora(b: &mut SceneBuilder) {
    b.background(0x030814).fog(Fog::linear(0x030814, 40.0, 140.0));
    b.light(Light::ambient(0x203050, 0.4));
    ground(b, 200.0, 0xdde8f0);

    for band in 0..5 {
        let y = 30.0 + band as f32 * 3.0;
        let color = Color::hsv(0.35 + band as f32 * 0.07, 0.8, 0.9);
        let ribbon = b.mesh(
            Shape::cuboid(120.0, 6.0, 0.2),
            Material::glow(color, 1.5).opacity(0.35),
            Transform::xyz(0.0, y, -50.0 + band as f32 * 4.0),
        );
        b.oscillate(ribbon, Property::PositionX, 6.0, 0.08, band as f32);
        b.oscillate(ribbon, Property::EmissiveIntensity, 0.7, 0.5, band as f32 * 1.3);
    }

    for at in layout::scatter(b.rng(), 20, Vec3::ZERO, Vec3::new(40.0, 0.0, 40.0)) {
        rock(b, at, 1.2, 0xc0ccd8);
    }
    for at in layout::scatter(b.rng(), 8, Vec3::new(0.0, 0.0, -25.0), Vec3::new(25.0, 0.0, 5.0)) {
        pine(b, at, 4.0, 0x1f3a2a);
    }

    presets::stars(b, 300, Vec3::ZERO, 120.0, 0xffffff);
    presets::snow(b, 200, Vec3::new(0.0, 8.0, 0.0), Vec3::new(20.0, 8.0, 20.0));
}

pub fn volcanic_caldera(b: &mut SceneBuilder) {
    b.background(0x1a0a08).fog(Fog::exp(0x2a0e08, 0.03));
    b.light(Light::ambient(0x401810, 0.6));
    ground(b, 120.0, 0x1e1614);

    let lava = b.place(Shape::cylinder(10.0, 0.2), Material::glow(0xff4500, 2.5), Vec3::Y * 0.1);
    b.oscillate(lava, Property::EmissiveIntensity, 0.8, 0.9, 0.0);
    let glow = b.light(Light::point(0xff5a1a, 4.0, Vec3::Y * 3.0, 40.0));
    b.oscillate(glow, Property::LightIntensity, 1.0, 2.3, 0.0);

    for (i, (at, angle)) in layout::ring(Vec3::ZERO, 14.0, 18).enumerate() {
        let height = 6.0 + (i % 5) as f32 * 1.5;
        b.mesh(
            Shape::cone(4.0, height),
            Material::standard(0x2a1e1a),
            Transform::at(at + Vec3::Y * height * 0.5).rotated_z(0.25 * angle.sin()),
        );
    }

    presets::embers(b, 220, Vec3::new(0.0, 8.0, 0.0), Vec3::new(8.0, 8.0, 8.0), 0xff7a20);
    presets::mist(b, 30, Vec3::new(0.0, 6.0, 0.0), Vec3::new(12.0, 3.0, 12.0), 0x3a2a28);
}

pub fn tidal_pools(b: &mut SceneBuilder) {
    b.background(0xbfe4f0).fog(Fog::linear(0xbfe4f0, 25.0, 90.0));
    outdoor_lights(b, 0xe8f8ff, 0x6a5a48, 0xfff4e0, 1.2);
    ground(b, 100.0, 0xcdb892);

    let sea = b.place(Shape::plane(200.0, 80.0), Material::standard(0x2a7a9a).metal(0.4, 0.1).opacity(0.9), Vec3::new(0.0, 0.2, -60.0));
    b.oscillate(sea, Property::PositionY, 0.15, 0.5, 0.0);

    for at in layout::scatter(b.rng(), 14, Vec3::ZERO, Vec3::new(14.0, 0.0, 10.0)) {
        b.mesh(Shape::cylinder(1.2, 0.05), Material::standard(0x3a8aa0).metal(0.5, 0.05), Transform::at(at + Vec3::Y * 0.02));
        for k in 0..4 {
            let around = layout::annulus(b.rng(), at, 1.2, 1.8);
            let size = 0.3 + k as f32 * 0.1;
            rock(b, around, size, 0x4a4a48);
        }
        if b.chance(0.5) {
            let star = b.mesh(Shape::cuboid(0.4, 0.05, 0.1), Material::standard(0xe86a3a), Transform::at(at + Vec3::Y * 0.05));
            b.spin(star, Property::RotationY, 0.2);
        }
    }

    presets::bubbles(b, 30, Vec3::new(0.0, 0.3, 0.0), Vec3::new(12.0, 0.3, 8.0));
}

pub fn savanna_dusk(b: &mut SceneBuilder) {
    b.background(0xf08a4a).fog(Fog::linear(0xf08a4a, 40.0, 150.0));
    outdoor_lights(b, 0xffb070, 0x5a3a1a, 0xff8a3a, 1.0);
    ground(b, 200.0, 0xb08a4a);

    b.place(Shape::sphere(12.0), Material::glow(0xffc060, 2.0), Vec3::new(0.0, 8.0, -120.0));

    for at in layout::scatter(b.rng(), 9, Vec3::ZERO, Vec3::new(40.0, 0.0, 25.0)) {
        let acacia = b.group(Transform::at(at));
        let height = b.range(3.5, 5.0);
        b.child(acacia, Shape::tapered(0.12, 0.22, height), Material::standard(0x3a2a1a), Transform::xyz(0.0, height * 0.5, 0.0));
        b.child(
            acacia,
            Shape::cylinder(2.8, 0.4),
            Material::standard(0x3a4a1a),
            Transform::xyz(0.0, height + 0.2, 0.0).scaled_by(Vec3::new(1.0, 1.0, 0.7)),
        );
    }

    for at in layout::scatter(b.rng(), 200, Vec3::ZERO, Vec3::new(30.0, 0.0, 30.0)) {
        let tuft = b.place(Shape::cone(0.15, 0.6), Material::standard(0xc8a050), at + Vec3::Y * 0.3);
        let phase = b.range(0.0, TAU);
        b.wave(tuft, Property::RotationZ, 0.1, 1.3, phase, Wave::Cosine);
    }

    campfire(b, Vec3::new(4.0, 0.0, 6.0), 1.0);
    presets::swarm(b, 40, Vec3::new(4.0, 2.0, 6.0), 0.5, 1.5, 0xffe8b0);
}
