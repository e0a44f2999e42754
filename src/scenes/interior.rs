use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::common::{campfire, night_fill};
use crate::animate::{Property, Wave};
use crate::graph::{Fog, Light, LightId, Material, NodeId, SceneGraph, Shape};
use crate::layout;
use crate::math::Color;
use crate::particles::presets;
use crate::scene::SceneBuilder;
use crate::types::Transform;

/// Floor, back and side walls and a ceiling for a `w × h × d` room.
fn room(b: &mut SceneBuilder, w: f32, h: f32, d: f32, floor: u32, walls: u32) -> NodeId {
    let shell = b.group(Transform::IDENTITY);
    b.child(shell, Shape::cuboid(w, 0.2, d), Material::standard(floor), Transform::xyz(0.0, -0.1, 0.0));
    b.child(shell, Shape::cuboid(w, 0.2, d), Material::standard(walls), Transform::xyz(0.0, h + 0.1, 0.0));
    b.child(shell, Shape::cuboid(w, h, 0.2), Material::standard(walls), Transform::xyz(0.0, h * 0.5, -d * 0.5));
    for side in [-1.0f32, 1.0] {
        b.child(shell, Shape::cuboid(0.2, h, d), Material::standard(walls), Transform::xyz(side * w * 0.5, h * 0.5, 0.0));
    }
    shell
}

/// Candle with a flickering flame and a small warm light.
fn candle(b: &mut SceneBuilder, at: Vec3, height: f32) -> LightId {
    b.place(Shape::cylinder(0.05, height), Material::standard(0xf4ecd8), at + Vec3::Y * height * 0.5);
    let flame = b.place(Shape::cone(0.03, 0.1), Material::glow(0xffa030, 4.0), at + Vec3::Y * (height + 0.06));
    let rate = b.range(8.0, 14.0);
    b.oscillate(flame, Property::EmissiveIntensity, 1.2, rate, at.x + at.z);
    let light = b.light(Light::point(0xffa040, 0.4, at + Vec3::Y * (height + 0.1), 4.0));
    b.oscillate(light, Property::LightIntensity, 0.1, rate * 1.3, at.x);
    light
}

pub fn cozy_cabin(b: &mut SceneBuilder) {
    b.background(0x1a100a);
    night_fill(b, 0x402818, 0.3);
    room(b, 10.0, 4.0, 10.0, 0x6a4424, 0x8a5a30);

    b.mesh(Shape::cuboid(3.0, 3.0, 1.0), Material::standard(0x6a6058), Transform::xyz(0.0, 1.5, -4.5));
    campfire(b, Vec3::new(0.0, 0.2, -4.3), 0.5);
    b.mesh(Shape::cuboid(4.0, 0.05, 3.0), Material::standard(0x8a2020), Transform::xyz(0.0, 0.01, -1.5));

    let chair = b.group(Transform::xyz(2.0, 0.0, -1.0).rotated_y(-0.6));
    b.child(chair, Shape::cuboid(1.2, 0.5, 1.2), Material::standard(0x4a6a3a), Transform::xyz(0.0, 0.5, 0.0));
    b.child(chair, Shape::cuboid(1.2, 1.2, 0.3), Material::standard(0x4a6a3a), Transform::xyz(0.0, 1.1, -0.5));
    b.oscillate(chair, Property::RotationX, 0.06, 1.2, 0.0);

    let cat = b.place(Shape::sphere(0.3), Material::standard(0xd08030), Vec3::new(-0.8, 0.2, -2.2));
    b.oscillate(cat, Property::Scale, 0.04, 1.0, 0.0);
    candle(b, Vec3::new(-3.5, 1.0, -3.0), 0.3);
    b.mesh(Shape::cuboid(1.5, 1.0, 0.8), Material::standard(0x5a3a20), Transform::xyz(-3.5, 0.5, -3.0));

    b.mesh(Shape::cuboid(2.0, 1.5, 0.05), Material::glow(0x304060, 0.6), Transform::xyz(4.9, 2.2, 0.0).rotated_y(FRAC_PI_2));
    presets::snow(b, 80, Vec3::new(6.0, 2.5, 0.0), Vec3::new(0.5, 1.5, 1.5));
    presets::dust(b, 60, Vec3::new(0.0, 2.0, -2.0), Vec3::new(3.0, 1.5, 3.0), 0xffc080);
}

pub fn grand_ballroom(b: &mut SceneBuilder) {
    b.background(0x1a1410);
    night_fill(b, 0x604830, 0.5);
    room(b, 40.0, 14.0, 30.0, 0xe8dcc8, 0xf0e4c8);

    for (x, z, at) in layout::grid(Vec3::ZERO, 2.0, 20, 15) {
        if (x + z) % 2 == 0 {
            b.place(Shape::cuboid(2.0, 0.02, 2.0), Material::standard(0x3a2a20).metal(0.3, 0.2), at + Vec3::Y * 0.01);
        }
    }

    for x in [-10.0f32, 10.0] {
        let chandelier = b.group(Transform::xyz(x, 11.0, 0.0));
        for tier in 0..3 {
            let radius = 2.0 - tier as f32 * 0.5;
            for (at, _) in layout::ring(Vec3::new(0.0, -(tier as f32) * 0.8, 0.0), radius, 12 - tier * 3) {
                b.child(chandelier, Shape::Octahedron { radius: 0.12 }, Material::glow(0xfff0d0, 2.5).metal(0.9, 0.0), Transform::at(at));
            }
        }
        b.oscillate(chandelier, Property::RotationY, 0.05, 0.3, x);
        b.light(Light::point(0xfff0d0, 3.0, Vec3::new(x, 10.0, 0.0), 40.0));
    }

    let dancers = b.group(Transform::IDENTITY);
    for (i, (at, _)) in layout::ring(Vec3::ZERO, 6.0, 8).enumerate() {
        let color = if i % 2 == 0 { 0x202020 } else { 0xc02040 };
        let pair = b.child_group(dancers, Transform::at(at));
        b.child(pair, Shape::cone(0.6, 1.8), Material::standard(color), Transform::xyz(0.0, 0.9, 0.0));
        b.child(pair, Shape::sphere(0.2), Material::standard(0xe8c8a8), Transform::xyz(0.0, 2.0, 0.0));
        b.spin(pair, Property::RotationY, 2.0);
    }
    b.spin(dancers, Property::RotationY, -0.3);
    presets::dust(b, 150, Vec3::new(0.0, 7.0, 0.0), Vec3::new(18.0, 6.0, 14.0), 0xfff0c0);
}

pub fn server_room(b: &mut SceneBuilder) {
    b.background(0x05080c).fog(Fog::linear(0x05080c, 10.0, 50.0));
    night_fill(b, 0x102030, 0.4);
    room(b, 20.0, 4.0, 30.0, 0x303840, 0x202830);

    for row in [-6.0f32, -2.0, 2.0, 6.0] {
        for (i, at) in layout::line(Vec3::new(row, 1.1, -12.0), Vec3::new(row, 1.1, 12.0), 12).enumerate() {
            let rack = b.place(Shape::cuboid(1.2, 2.2, 1.8), Material::standard(0x181c22).metal(0.8, 0.4), at);
            for led in 0..6 {
                let color = if (i + led) % 7 == 0 { 0xff3030 } else { 0x30ff60 };
                let light = b.child(
                    rack,
                    Shape::cube(0.04),
                    Material::glow(color, 3.0),
                    Transform::xyz(0.61 * row.signum(), -0.8 + led as f32 * 0.3, -0.6),
                );
                let rate = b.range(2.0, 20.0);
                b.wave(light, Property::EmissiveIntensity, 3.0, rate, i as f32, Wave::Cosine);
            }
        }
    }

    let cold = b.light(Light::point(0x40a0ff, 2.0, Vec3::new(0.0, 3.5, 0.0), 30.0));
    b.oscillate(cold, Property::LightIntensity, 0.2, 0.5, 0.0);
    let alarm = b.light(Light::point(0xff2020, 0.0, Vec3::new(0.0, 3.8, -14.0), 20.0));
    b.wave(alarm, Property::LightIntensity, 1.0, 3.0, 0.0, Wave::Sine);
    presets::mist(b, 20, Vec3::new(0.0, 0.3, 0.0), Vec3::new(8.0, 0.2, 12.0), 0x80c0ff);
}

pub fn greenhouse(b: &mut SceneBuilder) {
    b.background(0xd8f0e0);
    b.light(Light::hemisphere(0xf0fff0, 0x406030, 0.8));
    b.light(Light::directional(0xfffae8, 1.4, Vec3::new(5.0, 25.0, 5.0)));
    b.mesh(Shape::cuboid(20.0, 0.2, 12.0), Material::standard(0x6a5a48), Transform::xyz(0.0, -0.1, 0.0));

    for i in 0..11 {
        let x = -10.0 + i as f32 * 2.0;
        b.mesh(Shape::torus(6.0, 0.06), Material::standard(0xe0e0e0).metal(0.8, 0.3), Transform::xyz(x, 0.0, 0.0).rotated_y(FRAC_PI_2));
    }
    b.mesh(Shape::cylinder(6.0, 20.0), Material::standard(0xe0fff0).opacity(0.15), Transform::IDENTITY.rotated_z(FRAC_PI_2));

    for z in [-3.0f32, 3.0] {
        b.mesh(Shape::cuboid(16.0, 0.8, 1.4), Material::standard(0x5a4030), Transform::xyz(0.0, 0.4, z));
        for at in layout::line(Vec3::new(-7.0, 0.8, z), Vec3::new(7.0, 0.8, z), 10) {
            let height = b.range(0.4, 1.4);
            let plant = b.place(Shape::cone(0.4, height), Material::standard(0x3a8a3a), at + Vec3::Y * height * 0.5);
            if b.chance(0.4) {
                let bloom = b.pick(&[0xff6080, 0xffd040, 0xa060ff]);
                b.child(plant, Shape::sphere(0.12), Material::glow(bloom, 0.3), Transform::xyz(0.0, height * 0.5, 0.0));
            }
            let phase = b.range(0.0, TAU);
            b.oscillate(plant, Property::RotationZ, 0.03, 0.8, phase);
        }
    }
    let fan = b.place(Shape::cuboid(2.0, 0.05, 0.3), Material::standard(0x808080), Vec3::new(0.0, 5.0, 0.0));
    b.spin(fan, Property::RotationY, 3.0);
    presets::mist(b, 20, Vec3::new(0.0, 1.5, 0.0), Vec3::new(9.0, 1.0, 4.0), 0xffffff);
    presets::swarm(b, 20, Vec3::new(2.0, 2.0, 3.0), 0.3, 1.2, 0xffffff);
}

pub fn aquarium_tunnel(b: &mut SceneBuilder) {
    b.background(0x02304a).fog(Fog::exp(0x02304a, 0.04));
    b.light(Light::hemisphere(0x60c0e0, 0x02202a, 0.7));
    let ripple = b.light(Light::directional(0xa0f0ff, 0.8, Vec3::new(0.0, 30.0, 0.0)));
    b.oscillate(ripple, Property::LightIntensity, 0.2, 1.5, 0.0);

    b.mesh(Shape::cuboid(4.0, 0.2, 60.0), Material::standard(0x404850), Transform::xyz(0.0, -0.1, 0.0));
    for at in layout::line(Vec3::new(0.0, 0.0, -28.0), Vec3::new(0.0, 0.0, 28.0), 15) {
        b.mesh(Shape::torus(3.0, 0.08), Material::standard(0x808890).metal(0.9, 0.3), Transform::at(at));
    }
    b.mesh(Shape::cylinder(3.0, 60.0), Material::standard(0xc0f0ff).opacity(0.12), Transform::IDENTITY.rotated_x(FRAC_PI_2));

    let schools = [0xffa020, 0x40c0ff, 0xffff60, 0xff60a0];
    for (i, color) in schools.into_iter().enumerate() {
        let center = Vec3::new(if i % 2 == 0 { -6.0 } else { 6.0 }, 2.0 + i as f32, -15.0 + i as f32 * 10.0);
        presets::swarm(b, 50, center, 1.5, 4.0, color);
    }
    let ray = b.group(Transform::xyz(0.0, 5.0, 0.0));
    let body = b.child(ray, Shape::sphere(2.0), Material::standard(0x404a50), Transform::xyz(8.0, 0.0, 0.0).scaled_by(Vec3::new(1.2, 0.1, 1.0)));
    b.oscillate(body, Property::RotationX, 0.2, 1.2, 0.0);
    b.spin(ray, Property::RotationY, 0.2);
    presets::bubbles(b, 120, Vec3::new(0.0, 6.0, 0.0), Vec3::new(10.0, 6.0, 28.0));
    for at in layout::line(Vec3::new(-8.0, 0.0, -20.0), Vec3::new(-8.0, 0.0, 20.0), 8) {
        let height = b.range(3.0, 7.0);
        let kelp = b.place(Shape::tapered(0.05, 0.2, height), Material::standard(0x2a6a30), at + Vec3::Y * height * 0.5);
        b.oscillate(kelp, Property::RotationZ, 0.15, 0.7, at.z);
    }
}

pub fn clockmaker_shop(b: &mut SceneBuilder) {
    b.background(0x1a140c);
    night_fill(b, 0x5a4020, 0.4);
    room(b, 12.0, 4.0, 8.0, 0x4a3020, 0x6a4a30);
    b.light(Light::point(0xffd090, 2.0, Vec3::new(0.0, 3.5, 0.0), 15.0));

    for (i, (x, y)) in [(-4.0f32, 2.8f32), (-2.0, 2.2), (0.0, 3.0), (2.0, 2.4), (4.0, 2.9), (-3.0, 1.2), (3.0, 1.4)]
        .into_iter()
        .enumerate()
    {
        let radius = 0.4 + (i % 3) as f32 * 0.15;
        let face = b.mesh(
            Shape::cylinder(radius, 0.08),
            Material::standard(0xf0e8d0),
            Transform::xyz(x, y, -3.85).rotated_x(FRAC_PI_2),
        );
        b.child(face, Shape::torus(radius, 0.04), Material::standard(0xc0a040).metal(1.0, 0.3), Transform::IDENTITY);
        let hands = b.child_group(face, Transform::xyz(0.0, 0.06, 0.0));
        let minute = b.child_group(hands, Transform::IDENTITY);
        b.child(minute, Shape::cuboid(0.03, 0.01, radius * 0.85), Material::standard(0x101010), Transform::xyz(0.0, 0.0, radius * 0.4));
        let hour = b.child_group(hands, Transform::IDENTITY);
        b.child(hour, Shape::cuboid(0.04, 0.01, radius * 0.55), Material::standard(0x101010), Transform::xyz(0.0, 0.0, radius * 0.25));
        // Each clock runs at its own wrong speed.
        let rate = 0.5 + i as f32 * 0.3;
        b.spin(minute, Property::RotationY, rate);
        b.spin(hour, Property::RotationY, rate / 12.0);
    }

    let pendulum = b.group(Transform::xyz(5.0, 3.4, -3.5));
    b.child(pendulum, Shape::cylinder(0.02, 2.0), Material::standard(0xc0a040).metal(1.0, 0.3), Transform::xyz(0.0, -1.0, 0.0));
    b.child(pendulum, Shape::cylinder(0.2, 0.04), Material::standard(0xc0a040).metal(1.0, 0.2), Transform::xyz(0.0, -2.0, 0.0).rotated_x(FRAC_PI_2));
    b.oscillate(pendulum, Property::RotationZ, 0.3, PI, 0.0);

    b.mesh(Shape::cuboid(6.0, 1.0, 1.5), Material::standard(0x5a3a20), Transform::xyz(0.0, 0.5, 1.0));
    for at in layout::line(Vec3::new(-2.0, 1.05, 1.0), Vec3::new(2.0, 1.05, 1.0), 6) {
        let gear = b.place(Shape::torus(0.15, 0.04), Material::standard(0xd0b060).metal(1.0, 0.3), at);
        b.spin(gear, Property::RotationY, if at.x > 0.0 { 1.0 } else { -1.0 });
    }
    presets::dust(b, 80, Vec3::new(0.0, 2.0, 0.0), Vec3::new(5.0, 1.8, 3.5), 0xffe0a0);
}

pub fn concert_hall(b: &mut SceneBuilder) {
    b.background(0x0a0604);
    night_fill(b, 0x301810, 0.2);
    room(b, 30.0, 12.0, 40.0, 0x5a2018, 0x4a2a20);

    b.mesh(Shape::cuboid(20.0, 1.0, 10.0), Material::standard(0x3a2010), Transform::xyz(0.0, 0.5, -14.0));
    for row in 0..10 {
        let z = -4.0 + row as f32 * 2.0;
        let y = row as f32 * 0.3;
        for at in layout::line(Vec3::new(-10.0, y + 0.4, z), Vec3::new(10.0, y + 0.4, z), 16) {
            b.place(Shape::cuboid(0.9, 0.8, 0.8), Material::standard(0x8a1a1a), at);
        }
    }

    // Spotlights sweep across the stage in counterphase.
    for (i, x) in [-6.0f32, 0.0, 6.0].into_iter().enumerate() {
        let spot = b.light(Light::spot(0xfff0d0, 3.0, Vec3::new(x, 11.0, -4.0), Vec3::new(x, 1.0, -14.0), 0.35));
        b.oscillate(spot, Property::PositionX, 3.0, 0.6, i as f32 * PI);
    }
    let piano = b.place(Shape::cuboid(2.5, 1.0, 1.6), Material::standard(0x080808).metal(0.6, 0.05), Vec3::new(-4.0, 1.5, -14.0));
    let lid = b.child(piano, Shape::cuboid(2.4, 0.04, 1.5), Material::standard(0x080808).metal(0.6, 0.05), Transform::xyz(0.0, 0.8, -0.3).rotated_x(-0.6));
    b.oscillate(lid, Property::RotationX, 0.02, 4.0, 0.0);

    for (at, _) in layout::ring(Vec3::new(3.0, 1.0, -14.0), 3.0, 9) {
        let stand = b.place(Shape::cylinder(0.03, 1.2), Material::standard(0x202020), at + Vec3::Y * 0.6);
        let sheet = b.child(stand, Shape::cuboid(0.4, 0.3, 0.02), Material::standard(0xf8f0e0), Transform::xyz(0.0, 0.7, 0.0));
        b.oscillate(sheet, Property::RotationY, 0.05, 0.2, at.x);
    }
    presets::dust(b, 200, Vec3::new(0.0, 6.0, -10.0), Vec3::new(8.0, 5.0, 4.0), 0xfff0d0);
}

pub fn museum_atrium(b: &mut SceneBuilder) {
    b.background(0xf0f0f0);
    b.light(Light::hemisphere(0xffffff, 0xc0c0c0, 0.9));
    b.light(Light::directional(0xffffff, 1.0, Vec3::new(0.0, 40.0, 10.0)));
    b.mesh(Shape::cuboid(40.0, 0.2, 40.0), Material::standard(0xe8e4dc).metal(0.2, 0.1), Transform::xyz(0.0, -0.1, 0.0));

    for (at, _) in layout::ring(Vec3::ZERO, 16.0, 12) {
        b.place(Shape::cylinder(0.6, 16.0), Material::standard(0xf8f4ec), at + Vec3::Y * 8.0);
    }
    b.mesh(Shape::torus(16.0, 0.8), Material::standard(0xf0ece4), Transform::xyz(0.0, 16.0, 0.0).rotated_x(FRAC_PI_2));

    // Hanging skeleton, the centerpiece.
    let skeleton = b.group(Transform::xyz(0.0, 10.0, 0.0));
    for (i, at) in layout::line(Vec3::new(-8.0, 0.0, 0.0), Vec3::new(8.0, 0.0, 0.0), 22).enumerate() {
        let t = i as f32 / 21.0;
        let size = 0.5 + (t * PI).sin() * 0.8;
        b.child(skeleton, Shape::sphere(size * 0.4), Material::standard(0xe8e0c8), Transform::at(at + Vec3::Y * (t * TAU).sin() * 0.5));
        if (5..16).contains(&i) {
            b.child(skeleton, Shape::torus(size, 0.06), Material::standard(0xe8e0c8), Transform::at(at).rotated_y(FRAC_PI_2));
        }
    }
    b.oscillate(skeleton, Property::RotationY, 0.1, 0.1, 0.0);

    for (at, _) in layout::ring(Vec3::ZERO, 11.0, 6) {
        let plinth = b.place(Shape::cuboid(1.2, 1.2, 1.2), Material::standard(0x303030), at + Vec3::Y * 0.6);
        let exhibit = b.child(plinth, Shape::Icosahedron { radius: 0.4 }, Material::standard(0xc0a060).metal(0.9, 0.3), Transform::xyz(0.0, 1.0, 0.0));
        b.spin(exhibit, Property::RotationY, 0.3);
    }
    presets::dust(b, 200, Vec3::new(0.0, 10.0, 0.0), Vec3::new(4.0, 8.0, 4.0), 0xffffff);
}

pub fn bowling_alley(b: &mut SceneBuilder) {
    b.background(0x100818);
    night_fill(b, 0x402060, 0.4);

    for lane in 0..6 {
        let x = -7.5 + lane as f32 * 3.0;
        b.mesh(Shape::cuboid(2.0, 0.1, 20.0), Material::standard(0xd8a868).metal(0.3, 0.1), Transform::xyz(x, 0.0, 0.0));
        let glow = b.place(Shape::cuboid(0.1, 0.05, 20.0), Material::glow(0x40a0ff, 2.0), Vec3::new(x + 1.1, 0.03, 0.0));
        b.wave(glow, Property::EmissiveIntensity, 1.5, 2.0, lane as f32, Wave::Cosine);

        for (row, count) in [(0, 1), (1, 2), (2, 3), (3, 4)] {
            for k in 0..count {
                let px = x + (k as f32 - (count - 1) as f32 * 0.5) * 0.3;
                b.place(Shape::tapered(0.05, 0.08, 0.4), Material::standard(0xf8f8f8), Vec3::new(px, 0.25, -8.0 - row as f32 * 0.26));
            }
        }

        // A ball rolls down every lane, staggered.
        let ball = b.place(Shape::sphere(0.2), Material::glow(Color::hsv(lane as f32 / 6.0, 0.8, 0.8), 0.5).metal(0.5, 0.1), Vec3::new(x, 0.25, 9.0));
        let start = lane as f32 * 0.7;
        b.animate(move |g: &mut SceneGraph, t: f32| {
            let phase = (t + start).rem_euclid(4.0) / 4.0;
            let node = g.node_mut(ball);
            node.transform.translation.z = 9.0 - phase * 17.0;
            node.transform.rotation.x = -phase * 40.0;
        });
    }
    for (at, _) in layout::ring(Vec3::new(0.0, 4.0, 0.0), 8.0, 10) {
        let disco = b.light(Light::point(Color::hsv(at.x.abs() / 8.0, 0.8, 1.0), 1.0, at, 10.0));
        b.oscillate(disco, Property::LightIntensity, 0.8, 2.0, at.z);
    }
    presets::dust(b, 60, Vec3::new(0.0, 2.0, 0.0), Vec3::new(9.0, 2.0, 10.0), 0xc080ff);
}

pub fn arcade_parlor(b: &mut SceneBuilder) {
    b.background(0x05020a).fog(Fog::exp(0x05020a, 0.04));
    night_fill(b, 0x200840, 0.3);
    room(b, 16.0, 4.0, 14.0, 0x201020, 0x100818);

    for (i, (x, z, at)) in layout::grid(Vec3::ZERO, 3.0, 4, 3).enumerate() {
        let cabinet = b.mesh(
            Shape::cuboid(1.2, 2.2, 1.0),
            Material::standard(Color::hsv((x + z) as f32 * 0.15, 0.7, 0.5)),
            Transform::at(at + Vec3::Y * 1.1).rotated_y(if z % 2 == 0 { 0.0 } else { PI }),
        );
        let screen = b.child(
            cabinet,
            Shape::cuboid(0.9, 0.7, 0.02),
            Material::glow(Color::hsv(i as f32 * 0.13, 0.9, 1.0), 2.5),
            Transform::xyz(0.0, 0.4, 0.51),
        );
        let rate = b.range(3.0, 10.0);
        b.oscillate(screen, Property::EmissiveIntensity, 1.0, rate, i as f32);
        b.child(cabinet, Shape::cuboid(1.2, 0.3, 0.05), Material::glow(0xffffff, 1.5), Transform::xyz(0.0, 1.0, 0.51));
        b.light(Light::point(Color::hsv(i as f32 * 0.13, 0.9, 1.0), 0.6, at + Vec3::new(0.0, 1.5, 0.8), 4.0));
    }
    let sign = b.place(Shape::torus(1.2, 0.08), Material::glow(0xff2a6d, 3.0), Vec3::new(0.0, 3.2, -6.8));
    b.wave(sign, Property::EmissiveIntensity, 2.0, 8.0, 0.0, Wave::Cosine);
    let prize = b.place(Shape::Icosahedron { radius: 0.5 }, Material::glow(0xf9c80e, 1.5).metal(1.0, 0.2), Vec3::new(6.0, 1.5, 5.0));
    b.spin(prize, Property::RotationY, 1.5);
    presets::sparks(b, 40, Vec3::new(6.0, 2.5, 5.0), Vec3::new(0.5, 1.0, 0.5), 0xf9c80e);
}

pub fn candlelit_chapel(b: &mut SceneBuilder) {
    b.background(0x080604);
    night_fill(b, 0x201410, 0.2);
    room(b, 12.0, 10.0, 24.0, 0x605850, 0x706860);

    for z in (0..6).map(|i| -8.0 + i as f32 * 3.0) {
        for side in [-1.0f32, 1.0] {
            b.place(Shape::cuboid(3.5, 0.9, 0.8), Material::standard(0x4a3020), Vec3::new(side * 2.5, 0.45, z));
        }
    }
    b.mesh(Shape::cuboid(3.0, 1.2, 1.2), Material::standard(0xe8e0d0), Transform::xyz(0.0, 0.6, -10.5));

    let window = b.mesh(
        Shape::cylinder(2.0, 0.05),
        Material::glow(0x6040c0, 1.5).opacity(0.8),
        Transform::xyz(0.0, 7.0, -11.9).rotated_x(FRAC_PI_2),
    );
    for k in 0..8 {
        let angle = k as f32 / 8.0 * TAU;
        let pane = Color::hsv(k as f32 / 8.0, 0.8, 1.0);
        b.mesh(
            Shape::cuboid(0.15, 1.8, 0.06),
            Material::glow(pane, 1.5),
            Transform::xyz(angle.cos() * 1.0, 7.0 + angle.sin() * 1.0, -11.85).rotated_z(angle + FRAC_PI_2),
        );
    }
    b.oscillate(window, Property::EmissiveIntensity, 0.4, 0.2, 0.0);

    for at in layout::line(Vec3::new(-1.2, 1.2, -10.5), Vec3::new(1.2, 1.2, -10.5), 7) {
        let height = b.range(0.2, 0.5);
        candle(b, at, height);
    }
    for (at, _) in layout::ring(Vec3::new(0.0, 0.0, -2.0), 5.5, 10) {
        candle(b, at, 1.2);
    }
    presets::dust(b, 150, Vec3::new(0.0, 5.0, -6.0), Vec3::new(2.0, 4.0, 4.0), 0xffe0b0);
}

pub fn library_stacks(b: &mut SceneBuilder) {
    b.background(0x140e08).fog(Fog::linear(0x140e08, 8.0, 40.0));
    night_fill(b, 0x403020, 0.4);
    b.mesh(Shape::cuboid(30.0, 0.2, 40.0), Material::standard(0x5a3a20), Transform::xyz(0.0, -0.1, 0.0));

    let spines = [0x6a1a1a, 0x1a2a5a, 0x2a4a2a, 0x5a4a2a, 0x3a1a3a, 0x8a6a3a];
    for (x, z, at) in layout::grid(Vec3::ZERO, 3.0, 6, 8) {
        if x % 2 == 1 {
            continue;
        }
        let shelf = b.place(Shape::cuboid(1.0, 5.0, 2.6), Material::standard(0x3a2414), at + Vec3::Y * 2.5);
        for level in 0..5 {
            let color = spines[(x + z + level) % spines.len()];
            b.child(shelf, Shape::cuboid(1.05, 0.8, 2.4), Material::standard(color), Transform::xyz(0.0, -2.0 + level as f32, 0.0));
        }
    }
    for at in layout::line(Vec3::new(-6.0, 4.5, -10.0), Vec3::new(6.0, 4.5, 10.0), 5) {
        let lamp = b.place(Shape::sphere(0.25), Material::glow(0x90ff90, 1.5), at);
        b.place(Shape::cylinder(0.01, 1.0), Material::standard(0x202020), at + Vec3::Y * 0.6);
        b.light(Light::point(0xd0ffc0, 1.0, at, 10.0));
        b.oscillate(lamp, Property::PositionX, 0.05, 1.0, at.z);
    }

    let ladder = b.group(Transform::xyz(1.5, 0.0, 0.0));
    b.child(ladder, Shape::cuboid(0.6, 5.0, 0.1), Material::standard(0x8a5a30), Transform::xyz(0.0, 2.5, 0.0).rotated_x(0.2));
    b.oscillate(ladder, Property::PositionZ, 8.0, 0.1, 0.0);
    presets::dust(b, 250, Vec3::new(0.0, 3.0, 0.0), Vec3::new(9.0, 3.0, 12.0), 0xffe0a0);
}

pub fn observatory_dome(b: &mut SceneBuilder) {
    b.background(0x02030a);
    night_fill(b, 0x101830, 0.3);
    b.mesh(Shape::cylinder(12.0, 0.4), Material::standard(0x404048), Transform::xyz(0.0, -0.2, 0.0));

    let dome = b.group(Transform::IDENTITY);
    for k in 0..8 {
        let yaw = k as f32 / 8.0 * PI;
        b.child(dome, Shape::torus(12.0, 0.15), Material::standard(0xb0b4b8).metal(0.8, 0.3), Transform::IDENTITY.rotated(Vec3::new(FRAC_PI_2, yaw, 0.0)));
    }
    b.child(dome, Shape::sphere(12.0), Material::standard(0x909498).metal(0.6, 0.4).opacity(0.5), Transform::IDENTITY.scaled_by(Vec3::new(1.0, 0.8, 1.0)));
    b.oscillate(dome, Property::RotationY, 0.3, 0.05, 0.0);

    let mount = b.group(Transform::xyz(0.0, 2.0, 0.0));
    b.child(mount, Shape::cylinder(0.6, 4.0), Material::standard(0x303040), Transform::IDENTITY);
    let tube = b.child_group(mount, Transform::xyz(0.0, 2.0, 0.0));
    b.child(tube, Shape::tapered(0.7, 0.9, 8.0), Material::standard(0xe8e8f0).metal(0.5, 0.3), Transform::xyz(0.0, 3.5, 0.0).rotated_x(-0.2));
    b.oscillate(tube, Property::RotationX, 0.15, 0.08, 0.0);
    b.spin(mount, Property::RotationY, 0.05);

    let console = b.place(Shape::cuboid(2.0, 1.0, 0.8), Material::standard(0x202020), Vec3::new(6.0, 0.5, 3.0));
    b.child(console, Shape::cuboid(1.6, 0.6, 0.02), Material::glow(0xff3030, 1.0), Transform::xyz(0.0, 0.3, 0.41));
    presets::stars(b, 500, Vec3::ZERO, 60.0, 0xffffff);
}

pub fn submarine_bridge(b: &mut SceneBuilder) {
    b.background(0x020808).fog(Fog::exp(0x041010, 0.06));
    night_fill(b, 0x102020, 0.2);

    b.mesh(Shape::cylinder(5.0, 16.0), Material::standard(0x303a38).metal(0.8, 0.5), Transform::xyz(0.0, 2.5, 0.0).rotated_x(FRAC_PI_2));
    b.mesh(Shape::cuboid(6.0, 0.1, 15.0), Material::standard(0x202624), Transform::IDENTITY);
    for (i, at) in layout::line(Vec3::new(-4.0, 1.2, -6.0), Vec3::new(-4.0, 1.2, 6.0), 5).enumerate() {
        let panel = b.place(Shape::cuboid(0.8, 1.6, 2.0), Material::standard(0x2a3230).metal(0.7, 0.4), at);
        for d in 0..3 {
            let dial = b.child(panel, Shape::cylinder(0.15, 0.02), Material::glow(0x40ff80, 1.0), Transform::xyz(0.41, 0.4 - d as f32 * 0.4, 0.0).rotated_z(FRAC_PI_2));
            let phase = b.range(0.0, TAU);
            b.oscillate(dial, Property::EmissiveIntensity, 0.5, 1.0 + i as f32 * 0.2, phase);
        }
    }

    let sonar = b.place(Shape::cylinder(1.0, 0.1), Material::glow(0x103010, 1.0), Vec3::new(0.0, 1.0, -4.0));
    let sweep = b.child(sonar, Shape::cuboid(0.05, 0.02, 1.0), Material::glow(0x40ff40, 3.0), Transform::xyz(0.0, 0.06, 0.5));
    b.spin(sonar, Property::RotationY, 1.2);
    b.oscillate(sweep, Property::EmissiveIntensity, 0.5, 7.5, 0.0);

    let alert = b.light(Light::point(0xff2010, 1.5, Vec3::new(0.0, 4.5, 0.0), 15.0));
    b.wave(alert, Property::LightIntensity, 1.5, 2.0, 0.0, Wave::Cosine);
    let periscope = b.place(Shape::cylinder(0.2, 4.0), Material::standard(0x404a48).metal(0.9, 0.3), Vec3::new(0.0, 3.0, 2.0));
    b.oscillate(periscope, Property::RotationY, 1.0, 0.2, 0.0);
    b.oscillate(periscope, Property::PositionY, 0.3, 0.1, 0.0);
    presets::bubbles(b, 30, Vec3::new(3.5, 2.0, 0.0), Vec3::new(0.3, 2.0, 6.0));
}

pub fn train_carriage(b: &mut SceneBuilder) {
    b.background(0x40506a);
    night_fill(b, 0x504030, 0.6);
    room(b, 3.2, 2.6, 18.0, 0x3a2a22, 0x6a2a2a);

    for z in (0..6).map(|i| -7.5 + i as f32 * 3.0) {
        for side in [-1.0f32, 1.0] {
            let seat = b.place(Shape::cuboid(1.0, 0.5, 1.0), Material::standard(0x8a1a20), Vec3::new(side * 1.0, 0.45, z));
            b.child(seat, Shape::cuboid(1.0, 0.9, 0.15), Material::standard(0x8a1a20), Transform::xyz(0.0, 0.6, -0.45));
        }
        let lamp = b.place(Shape::sphere(0.15), Material::glow(0xffd090, 2.0), Vec3::new(0.0, 2.4, z));
        b.oscillate(lamp, Property::PositionX, 0.04, 2.3, z);
    }

    // Windows scroll a landscape of poles and trees past the carriage.
    for side in [-1.0f32, 1.0] {
        b.mesh(Shape::cuboid(0.02, 1.0, 17.0), Material::glow(0x90b0d0, 0.8).opacity(0.4), Transform::xyz(side * 1.6, 1.5, 0.0));
        let scenery = b.group(Transform::xyz(side * 8.0, 0.0, 0.0));
        for at in layout::line(Vec3::new(0.0, 0.0, -40.0), Vec3::new(0.0, 0.0, 40.0), 9) {
            b.child(scenery, Shape::cylinder(0.1, 4.0), Material::standard(0x5a4030), Transform::at(at + Vec3::Y * 2.0));
            b.child(scenery, Shape::sphere(1.2), Material::standard(0x3a6a30), Transform::at(at + Vec3::new(3.0, 2.0, 5.0)));
        }
        b.animate(move |g: &mut SceneGraph, t: f32| {
            g.node_mut(scenery).transform.translation.z = (t * 20.0).rem_euclid(10.0);
        });
    }
    let rumble = b.light(Light::point(0xffe0b0, 1.5, Vec3::new(0.0, 2.3, 0.0), 12.0));
    b.oscillate(rumble, Property::LightIntensity, 0.1, 13.0, 0.0);
    presets::dust(b, 80, Vec3::new(0.0, 1.5, 0.0), Vec3::new(1.4, 1.0, 8.0), 0xffe0b0);
}
