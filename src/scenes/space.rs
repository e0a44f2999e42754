use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::common::{ground, night_fill, rock};
use crate::animate::{Property, Wave};
use crate::graph::{Fog, Light, Material, SceneGraph, Shape};
use crate::layout;
use crate::math::Color;
use crate::particles::{presets, Motion, ParticleSpec};
use crate::scene::SceneBuilder;
use crate::types::Transform;

/// Black sky, dim fill and a star shell, shared by every orbital scene.
fn deep_space(b: &mut SceneBuilder, fill: u32, stars: usize) {
    b.background(0x000005);
    night_fill(b, fill, 0.25);
    presets::stars(b, stars, Vec3::ZERO, 400.0, 0xffffff);
}

pub fn dyson_sphere_fragment(b: &mut SceneBuilder) {
    deep_space(b, 0x201810, 500);
    let star = b.place(Shape::sphere(12.0), Material::glow(0xfff0a0, 4.0), Vec3::ZERO);
    b.oscillate(star, Property::Scale, 0.03, 0.7, 0.0);
    b.light(Light::point(0xfff0c0, 6.0, Vec3::ZERO, 400.0));

    let shell = b.group(Transform::IDENTITY);
    for lat in 0..6 {
        let pitch = -0.6 + lat as f32 * 0.24;
        for lon in 0..14 {
            if (lat * 7 + lon * 3) % 5 == 0 {
                continue;
            }
            let yaw = lon as f32 / 14.0 * PI;
            let dir = Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin());
            let panel = b.child(
                shell,
                Shape::cuboid(9.0, 6.0, 0.4),
                Material::standard(0x303038).metal(0.9, 0.3),
                Transform::at(dir * 60.0).rotated(Vec3::new(-pitch, FRAC_PI_2 - yaw, 0.0)),
            );
            if lon % 4 == 0 {
                b.child(panel, Shape::cuboid(8.0, 0.2, 0.1), Material::glow(0x40c0ff, 1.5), Transform::xyz(0.0, 0.0, 0.25));
            }
        }
    }
    b.spin(shell, Property::RotationY, 0.02);
    presets::debris_ring(b, 150, Vec3::ZERO, 70.0, 90.0, 3.0, 0x605850);
}

pub fn asteroid_mining_rig(b: &mut SceneBuilder) {
    deep_space(b, 0x202028, 400);
    b.light(Light::directional(0xfff0e0, 1.5, Vec3::new(50.0, 30.0, 20.0)));

    let roid = b.mesh(
        Shape::Icosahedron { radius: 18.0 },
        Material::standard(0x5a5048).metal(0.1, 0.95),
        Transform::IDENTITY.scaled_by(Vec3::new(1.3, 0.9, 1.0)),
    );
    b.spin(roid, Property::RotationY, 0.03);

    let rig = b.group(Transform::xyz(0.0, 18.0, 0.0));
    b.child(rig, Shape::cuboid(10.0, 3.0, 6.0), Material::standard(0xd0a030).metal(0.6, 0.4), Transform::xyz(0.0, 2.0, 0.0));
    b.child(rig, Shape::cylinder(0.6, 12.0), Material::standard(0x808080).metal(0.9, 0.3), Transform::xyz(0.0, 9.0, 0.0));
    let drill = b.child(rig, Shape::cone(1.2, 4.0), Material::standard(0x9090a0).metal(1.0, 0.2), Transform::xyz(0.0, -1.5, 0.0).rotated_x(PI));
    b.spin(drill, Property::RotationY, 8.0);
    for (at, _) in layout::ring(Vec3::new(0.0, 2.0, 0.0), 6.0, 4) {
        let beacon = b.child(rig, Shape::sphere(0.3), Material::glow(0xff3030, 3.0), Transform::at(at));
        b.wave(beacon, Property::EmissiveIntensity, 3.0, 3.0, at.x, Wave::Cosine);
    }

    presets::sparks(b, 150, Vec3::new(0.0, 16.0, 0.0), Vec3::new(2.0, 2.0, 2.0), 0xffc060);
    presets::debris_ring(b, 200, Vec3::ZERO, 28.0, 45.0, 4.0, 0x4a4038);
}

pub fn orbital_ring_station(b: &mut SceneBuilder) {
    deep_space(b, 0x182030, 500);
    b.light(Light::directional(0xffffff, 1.4, Vec3::new(-40.0, 20.0, 30.0)));

    let planet = b.place(Shape::sphere(80.0), Material::standard(0x2a5a9a).metal(0.0, 0.6), Vec3::new(0.0, -110.0, 0.0));
    b.spin(planet, Property::RotationY, 0.01);

    let station = b.group(Transform::IDENTITY);
    b.child(station, Shape::torus(40.0, 2.5), Material::standard(0xc8ccd0).metal(0.8, 0.3), Transform::IDENTITY.rotated_x(FRAC_PI_2));
    for (at, angle) in layout::ring(Vec3::ZERO, 40.0, 12) {
        b.child(station, Shape::cuboid(4.0, 4.0, 6.0), Material::standard(0xa0a4a8).metal(0.8, 0.3), Transform::at(at).rotated_y(-angle));
        b.child(station, Shape::cylinder(0.4, 40.0), Material::standard(0x707478), Transform::at(at * 0.5).rotated(Vec3::new(0.0, -angle, FRAC_PI_2)));
        let window = b.child(station, Shape::cuboid(4.05, 0.4, 5.0), Material::glow(0xfff0c0, 1.2), Transform::at(at).rotated_y(-angle));
        b.oscillate(window, Property::EmissiveIntensity, 0.2, 0.3, angle);
    }
    b.child(station, Shape::sphere(5.0), Material::standard(0xd8d8d8).metal(0.7, 0.2), Transform::IDENTITY);
    b.spin(station, Property::RotationY, 0.08);

    presets::swarm(b, 80, Vec3::ZERO, 45.0, 60.0, 0xe0e8ff);
}

pub fn binary_star_system(b: &mut SceneBuilder) {
    deep_space(b, 0x100808, 600);

    let pair = b.group(Transform::IDENTITY);
    let hot = b.child(pair, Shape::sphere(8.0), Material::glow(0xa0c0ff, 4.0), Transform::xyz(18.0, 0.0, 0.0));
    let cool = b.child(pair, Shape::sphere(5.0), Material::glow(0xffa050, 3.5), Transform::xyz(-28.0, 0.0, 0.0));
    b.oscillate(hot, Property::Scale, 0.04, 1.3, 0.0);
    b.oscillate(cool, Property::Scale, 0.06, 0.9, 1.0);
    b.spin(pair, Property::RotationY, 0.15);

    let blue = b.light(Light::point(0xa0c0ff, 4.0, Vec3::new(18.0, 0.0, 0.0), 300.0));
    let orange = b.light(Light::point(0xffa050, 3.0, Vec3::new(-28.0, 0.0, 0.0), 300.0));
    // Lights follow the stars around the barycenter.
    b.animate(move |g: &mut SceneGraph, t: f32| {
        let angle = 0.15 * t;
        let (s, c) = angle.sin_cos();
        g.light_mut(blue).set_position(Vec3::new(18.0 * c, 0.0, -18.0 * s));
        g.light_mut(orange).set_position(Vec3::new(-28.0 * c, 0.0, 28.0 * s));
    });

    for (i, radius) in [60.0f32, 85.0, 120.0].into_iter().enumerate() {
        let orbit = b.group(Transform::IDENTITY.rotated_x(0.05 * i as f32));
        let color = Color::hsv(0.1 + i as f32 * 0.25, 0.5, 0.7);
        b.child(orbit, Shape::sphere(2.0 + i as f32), Material::standard(color), Transform::xyz(radius, 0.0, 0.0));
        b.spin(orbit, Property::RotationY, 0.3 / (i as f32 + 1.0));
    }

    presets::debris_ring(b, 250, Vec3::ZERO, 140.0, 170.0, 5.0, 0x806050);
}

pub fn nebula_nursery(b: &mut SceneBuilder) {
    b.background(0x08020f).fog(Fog::exp(0x200a30, 0.004));
    night_fill(b, 0x402050, 0.5);

    for i in 0..40 {
        let hue = 0.75 + (i as f32 / 40.0) * 0.3;
        let at = layout::jitter(b.rng(), Vec3::new(120.0, 50.0, 120.0));
        let size = b.range(15.0, 45.0);
        let cloud = b.place(Shape::sphere(size), Material::glow(Color::hsv(hue, 0.7, 0.6), 0.6).opacity(0.08), at);
        let phase = b.range(0.0, TAU);
        b.oscillate(cloud, Property::Scale, 0.08, 0.1, phase);
    }

    for at in layout::scatter(b.rng(), 12, Vec3::ZERO, Vec3::new(80.0, 30.0, 80.0)) {
        let protostar = b.place(Shape::sphere(1.5), Material::glow(0xfff0ff, 5.0), at);
        let rate = b.range(0.5, 2.0);
        b.oscillate(protostar, Property::EmissiveIntensity, 2.0, rate, at.y);
        b.light(Light::point(0xffc0ff, 1.0, at, 60.0));
    }

    presets::dust(b, 400, Vec3::ZERO, Vec3::new(100.0, 40.0, 100.0), 0xff80c0);
    presets::stars(b, 300, Vec3::ZERO, 350.0, 0xe0d0ff);
}

pub fn lunar_base(b: &mut SceneBuilder) {
    b.background(0x000000);
    b.light(Light::directional(0xffffff, 1.8, Vec3::new(30.0, 15.0, -20.0)));
    night_fill(b, 0x202028, 0.2);
    ground(b, 300.0, 0x8a8a88);

    for _ in 0..25 {
        let at = layout::jitter(b.rng(), Vec3::new(100.0, 0.0, 100.0));
        let radius = b.range(2.0, 12.0);
        b.mesh(Shape::torus(radius, radius * 0.15), Material::standard(0x7a7a78), Transform::at(at).rotated_x(FRAC_PI_2).scaled_by(Vec3::new(1.0, 1.0, 0.3)));
    }

    for (at, _) in layout::ring(Vec3::ZERO, 12.0, 5) {
        let dome = b.place(Shape::sphere(4.0), Material::standard(0xe0e0e0).metal(0.4, 0.3), at);
        b.child(dome, Shape::cuboid(1.5, 1.0, 0.05), Material::glow(0xfff0c0, 1.0), Transform::xyz(0.0, 1.5, 3.8));
    }
    b.place(Shape::sphere(6.0), Material::standard(0xd0d0d0).metal(0.4, 0.3), Vec3::ZERO);
    for (i, at) in layout::ring(Vec3::ZERO, 6.5, 5).map(|(p, _)| p).enumerate() {
        b.mesh(Shape::cylinder(0.8, 5.5), Material::standard(0xb0b0b0), Transform::at(at + Vec3::Y * 0.8).rotated(Vec3::new(0.0, -(i as f32) * TAU / 5.0, FRAC_PI_2)));
    }

    let dish = b.place(Shape::cylinder(3.0, 0.3), Material::standard(0xf0f0f0).metal(0.8, 0.2), Vec3::new(20.0, 6.0, 0.0));
    b.spin(dish, Property::RotationY, 0.2);
    b.place(Shape::sphere(25.0), Material::standard(0x3a6ab0), Vec3::new(-150.0, 120.0, -300.0));

    presets::dust(b, 100, Vec3::new(0.0, 0.5, 0.0), Vec3::new(30.0, 0.5, 30.0), 0xa0a0a0);
    presets::stars(b, 400, Vec3::ZERO, 450.0, 0xffffff);
}

pub fn martian_dunes(b: &mut SceneBuilder) {
    b.background(0xc87a50).fog(Fog::linear(0xc87a50, 30.0, 180.0));
    b.light(Light::hemisphere(0xe8a070, 0x5a2a18, 0.7));
    b.light(Light::directional(0xffe0c0, 1.2, Vec3::new(20.0, 25.0, 10.0)));
    ground(b, 400.0, 0xa8502a);

    for i in 0..30 {
        let at = layout::jitter(b.rng(), Vec3::new(120.0, 0.0, 120.0));
        let size = b.range(8.0, 20.0);
        b.mesh(
            Shape::sphere(size),
            Material::standard(0xb85a30),
            Transform::at(at).scaled_by(Vec3::new(2.5, 0.25, 1.0)).rotated_y(i as f32 * 0.4),
        );
    }
    for at in layout::scatter(b.rng(), 30, Vec3::ZERO, Vec3::new(40.0, 0.0, 40.0)) {
        rock(b, at, 0.8, 0x6a3020);
    }

    let rover = b.group(Transform::xyz(0.0, 0.6, 0.0));
    b.child(rover, Shape::cuboid(2.0, 0.6, 3.0), Material::standard(0xe0e0d8).metal(0.6, 0.4), Transform::IDENTITY);
    for (dx, dz) in [(-1.1f32, -1.0f32), (1.1, -1.0), (-1.1, 1.0), (1.1, 1.0)] {
        b.child(rover, Shape::cylinder(0.4, 0.3), Material::standard(0x303030), Transform::xyz(dx, -0.3, dz).rotated_z(FRAC_PI_2));
    }
    let mast = b.child(rover, Shape::cuboid(0.3, 0.3, 0.3), Material::standard(0xd0d0c8), Transform::xyz(0.0, 1.2, 1.0));
    b.oscillate(mast, Property::RotationY, 0.8, 0.4, 0.0);
    b.oscillate(rover, Property::PositionZ, 8.0, 0.05, 0.0);

    b.place(Shape::sphere(1.5), Material::glow(0xc0d0ff, 1.5), Vec3::new(60.0, 50.0, -200.0));
    presets::dust(b, 350, Vec3::new(0.0, 3.0, 0.0), Vec3::new(40.0, 3.0, 40.0), 0xe0905a);
}

pub fn ringed_gas_giant(b: &mut SceneBuilder) {
    deep_space(b, 0x181410, 500);
    b.light(Light::directional(0xfff4e0, 1.6, Vec3::new(100.0, 20.0, 50.0)));

    let giant = b.group(Transform::IDENTITY.rotated_z(0.35));
    for band in 0..7 {
        let y = -30.0 + band as f32 * 10.0;
        let radius = (45.0f32 * 45.0 - y * y).max(0.0).sqrt();
        let color = Color::hex(0xd8b080).lerp(Color::hex(0xa06a40), (band % 2) as f32);
        b.child(giant, Shape::cylinder(radius, 10.0), Material::standard(color), Transform::xyz(0.0, y, 0.0));
    }
    b.child(giant, Shape::sphere(44.0), Material::standard(0xc89a68), Transform::IDENTITY);
    for (i, radius) in [60.0f32, 68.0, 78.0].into_iter().enumerate() {
        let tint = Color::hex(0xd8c8a8).scale(1.0 - i as f32 * 0.15);
        b.child(giant, Shape::torus(radius, 3.0), Material::standard(tint).opacity(0.6), Transform::IDENTITY.scaled_by(Vec3::new(1.0, 0.05, 1.0)));
    }
    b.spin(giant, Property::RotationY, 0.04);

    let moon = b.group(Transform::IDENTITY);
    b.child(moon, Shape::sphere(4.0), Material::standard(0x9a9a98), Transform::xyz(110.0, 10.0, 0.0));
    b.spin(moon, Property::RotationY, 0.1);

    presets::debris_ring(b, 400, Vec3::ZERO, 58.0, 82.0, 0.8, 0xc0b090);
}

pub fn comet_tail(b: &mut SceneBuilder) {
    deep_space(b, 0x101820, 500);
    b.light(Light::directional(0xffffff, 1.2, Vec3::new(-100.0, 0.0, 0.0)));

    let nucleus = b.mesh(
        Shape::Icosahedron { radius: 3.0 },
        Material::standard(0x4a4440).emissive(0x80c0ff, 0.4),
        Transform::IDENTITY,
    );
    b.spin(nucleus, Property::RotationX, 0.3);
    let coma = b.place(Shape::sphere(8.0), Material::glow(0xa0e0ff, 1.2).opacity(0.25), Vec3::ZERO);
    b.oscillate(coma, Property::Scale, 0.1, 0.8, 0.0);

    // The tail streams away from the sun along +X.
    b.particles(Shape::sphere(0.3), Material::glow(0xc0f0ff, 2.0).opacity(0.6), Motion::Drift, 500, |_, rng| {
        let along = layout::symmetric(rng, 1.0) * 0.5 + 0.5;
        let spread = 2.0 + along * 25.0;
        let lateral = layout::jitter(rng, Vec3::new(0.0, spread, spread));
        ParticleSpec::at(Vec3::new(along * along * 150.0, 0.0, 0.0) + lateral)
            .amplitude(1.0 + along * 3.0)
            .speed(0.3)
            .phase(along * 40.0)
            .scale(1.5 - along)
    });
    presets::dust(b, 200, Vec3::new(60.0, 0.0, 0.0), Vec3::new(60.0, 10.0, 10.0), 0xffe0b0);
}

pub fn space_elevator(b: &mut SceneBuilder) {
    deep_space(b, 0x202838, 300);
    b.light(Light::directional(0xffffff, 1.5, Vec3::new(60.0, 40.0, 40.0)));

    b.place(Shape::sphere(300.0), Material::standard(0x3a7ab8), Vec3::new(0.0, -320.0, 0.0));
    b.place(Shape::cylinder(0.8, 600.0), Material::standard(0xa0a0a8).metal(0.9, 0.2), Vec3::new(0.0, 280.0, 0.0));
    let counterweight = b.place(Shape::Octahedron { radius: 12.0 }, Material::standard(0x808088).metal(0.8, 0.4), Vec3::new(0.0, 580.0, 0.0));
    b.spin(counterweight, Property::RotationY, 0.05);

    let station = b.place(Shape::torus(14.0, 1.5), Material::standard(0xd0d4d8).metal(0.7, 0.3), Vec3::new(0.0, 120.0, 0.0));
    b.spin(station, Property::RotationY, 0.1);

    let climbers = [(0.0f32, 14.0f32), (200.0, -10.0), (380.0, 18.0)];
    for (start, speed) in climbers {
        let climber = b.place(Shape::cuboid(3.0, 4.0, 3.0), Material::standard(0xf0b030).metal(0.6, 0.4), Vec3::new(0.0, start, 0.0));
        let light = b.child(climber, Shape::sphere(0.4), Material::glow(0x40ff80, 3.0), Transform::xyz(0.0, 2.2, 0.0));
        b.oscillate(light, Property::EmissiveIntensity, 2.0, 4.0, start);
        b.animate(move |g: &mut SceneGraph, t: f32| {
            g.node_mut(climber).transform.translation.y = crate::math::wrap(start, speed * t, 0.0, 560.0);
        });
    }

    presets::swarm(b, 60, Vec3::new(0.0, 120.0, 0.0), 18.0, 30.0, 0xffffff);
}

pub fn derelict_freighter(b: &mut SceneBuilder) {
    deep_space(b, 0x101010, 400);
    let sun = b.light(Light::directional(0xffe8d0, 1.0, Vec3::new(50.0, 10.0, 0.0)));
    b.oscillate(sun, Property::LightIntensity, 0.1, 0.2, 0.0);

    let hull = b.group(Transform::IDENTITY.rotated(Vec3::new(0.2, 0.4, 0.15)));
    for section in 0..6 {
        if section == 3 {
            continue;
        }
        let z = -40.0 + section as f32 * 16.0;
        let seg = b.child(hull, Shape::cuboid(14.0, 10.0, 14.0), Material::standard(0x5a5048).metal(0.7, 0.8), Transform::xyz(0.0, 0.0, z));
        let breach = b.child(seg, Shape::cuboid(2.0, 1.0, 0.1), Material::glow(0xff5020, 1.0), Transform::xyz(3.0, 2.0, 7.05));
        b.oscillate(breach, Property::EmissiveIntensity, 0.9, 6.0 + section as f32, 0.0);
    }
    b.child(hull, Shape::cylinder(4.0, 8.0), Material::standard(0x404040).metal(0.9, 0.5), Transform::xyz(0.0, 0.0, 58.0).rotated_x(FRAC_PI_2));
    b.spin(hull, Property::RotationZ, 0.02);

    presets::debris_ring(b, 200, Vec3::ZERO, 10.0, 40.0, 15.0, 0x605850);
    presets::sparks(b, 60, Vec3::new(0.0, 0.0, 8.0), Vec3::new(3.0, 3.0, 3.0), 0xffa040);
}

pub fn pulsar_beacon(b: &mut SceneBuilder) {
    deep_space(b, 0x080818, 600);

    let core = b.place(Shape::sphere(3.0), Material::glow(0xe0f0ff, 6.0), Vec3::ZERO);
    b.oscillate(core, Property::EmissiveIntensity, 3.0, 30.0, 0.0);
    let beams = b.group(Transform::IDENTITY.rotated_z(0.4));
    for sign in [1.0f32, -1.0] {
        b.child(
            beams,
            Shape::tapered(0.5, 6.0, 120.0),
            Material::glow(0x80c0ff, 3.0).opacity(0.3),
            Transform::xyz(0.0, sign * 62.0, 0.0).rotated_x(if sign > 0.0 { PI } else { 0.0 }),
        );
    }
    b.spin(beams, Property::RotationY, 4.0);
    let flash = b.light(Light::point(0xa0d0ff, 4.0, Vec3::ZERO, 200.0));
    b.oscillate(flash, Property::LightIntensity, 3.5, 25.0, 0.0);

    for (i, radius) in [15.0f32, 22.0, 30.0].into_iter().enumerate() {
        b.mesh(Shape::torus(radius, 0.15), Material::glow(0x4060ff, 0.8).opacity(0.4), Transform::IDENTITY.rotated_x(FRAC_PI_2 + i as f32 * 0.1));
    }
    presets::swarm(b, 120, Vec3::ZERO, 8.0, 35.0, 0x80a0ff);
}

pub fn black_hole_accretion(b: &mut SceneBuilder) {
    deep_space(b, 0x100800, 700);

    b.place(Shape::sphere(10.0), Material::standard(0x000000).metal(0.0, 1.0), Vec3::ZERO);
    let photon = b.mesh(Shape::torus(11.5, 0.4), Material::glow(0xffe0a0, 4.0), Transform::IDENTITY.rotated_x(FRAC_PI_2));
    b.oscillate(photon, Property::EmissiveIntensity, 1.0, 3.0, 0.0);

    // Inner disc rings orbit faster than outer ones.
    for ring in 0..8 {
        let radius = 16.0 + ring as f32 * 5.0;
        let t = ring as f32 / 7.0;
        let color = Color::hex(0xfff0c0).lerp(Color::hex(0xc03000), t);
        let disc = b.mesh(
            Shape::torus(radius, 1.2 + t),
            Material::glow(color, 3.0 - t * 2.0).opacity(0.7),
            Transform::IDENTITY.scaled_by(Vec3::new(1.0, 0.15, 1.0)),
        );
        b.spin(disc, Property::RotationY, 2.0 / (1.0 + ring as f32));
    }
    let lensing = b.mesh(Shape::torus(14.0, 1.0), Material::glow(0xffc080, 2.0).opacity(0.5), Transform::IDENTITY.rotated_x(0.2));
    b.oscillate(lensing, Property::RotationZ, 0.05, 0.5, 0.0);

    b.light(Light::point(0xffa050, 3.0, Vec3::new(0.0, 5.0, 0.0), 200.0));
    presets::debris_ring(b, 500, Vec3::ZERO, 14.0, 60.0, 1.5, 0xff9040);
}

pub fn satellite_swarm(b: &mut SceneBuilder) {
    deep_space(b, 0x101820, 400);
    b.light(Light::directional(0xffffff, 1.5, Vec3::new(-50.0, 20.0, 30.0)));

    let earth = b.place(Shape::sphere(40.0), Material::standard(0x2a6ab0).metal(0.1, 0.5), Vec3::ZERO);
    b.child(earth, Shape::sphere(41.0), Material::standard(0xffffff).opacity(0.25), Transform::IDENTITY);
    b.spin(earth, Property::RotationY, 0.05);

    for shell in 0..5 {
        let tilt = shell as f32 * 0.6;
        let orbit = b.group(Transform::IDENTITY.rotated(Vec3::new(tilt, 0.0, tilt * 0.5)));
        for (at, angle) in layout::ring(Vec3::ZERO, 55.0 + shell as f32 * 4.0, 12) {
            let sat = b.child(orbit, Shape::cuboid(0.8, 0.8, 1.2), Material::standard(0xd0c080).metal(0.9, 0.2), Transform::at(at).rotated_y(-angle));
            b.child(sat, Shape::cuboid(4.0, 0.05, 1.0), Material::standard(0x203060).metal(0.8, 0.1), Transform::IDENTITY);
            if shell % 2 == 0 {
                let blink = b.child(sat, Shape::sphere(0.15), Material::glow(0xff2020, 3.0), Transform::xyz(0.0, 0.5, 0.0));
                b.wave(blink, Property::EmissiveIntensity, 3.0, 5.0, angle, Wave::Cosine);
            }
        }
        b.spin(orbit, Property::RotationY, 0.25 - shell as f32 * 0.03);
    }
    presets::debris_ring(b, 150, Vec3::ZERO, 50.0, 80.0, 20.0, 0x909090);
}

pub fn starship_hangar(b: &mut SceneBuilder) {
    b.background(0x0a0c10).fog(Fog::linear(0x0a0c10, 30.0, 140.0));
    night_fill(b, 0x303a48, 0.5);
    ground(b, 120.0, 0x3a3e44);

    for x in [-30.0f32, 30.0] {
        b.mesh(Shape::cuboid(1.0, 30.0, 100.0), Material::standard(0x2a2e34).metal(0.8, 0.5), Transform::xyz(x, 15.0, 0.0));
    }
    for (i, at) in layout::line(Vec3::new(0.0, 29.0, -45.0), Vec3::new(0.0, 29.0, 45.0), 10).enumerate() {
        b.place(Shape::cuboid(60.0, 1.0, 1.5), Material::standard(0x404850).metal(0.9, 0.4), at);
        let strip = b.place(Shape::cuboid(40.0, 0.2, 0.4), Material::glow(0xd0e8ff, 2.0), at - Vec3::Y * 0.6);
        b.oscillate(strip, Property::EmissiveIntensity, 0.2, 0.5, i as f32);
    }

    let ship = b.group(Transform::xyz(0.0, 6.0, 0.0));
    b.child(ship, Shape::cuboid(8.0, 3.0, 30.0), Material::standard(0xc8ccd4).metal(0.8, 0.3), Transform::IDENTITY);
    b.child(ship, Shape::cone(4.0, 10.0), Material::standard(0xc8ccd4).metal(0.8, 0.3), Transform::xyz(0.0, 0.0, 20.0).rotated_x(FRAC_PI_2));
    b.child(ship, Shape::cuboid(28.0, 0.5, 10.0), Material::standard(0xa8acb4).metal(0.8, 0.3), Transform::xyz(0.0, -0.5, -6.0));
    for x in [-2.5f32, 2.5] {
        let engine = b.child(ship, Shape::cylinder(1.2, 0.4), Material::glow(0x40a0ff, 3.0), Transform::xyz(x, 0.0, -15.2).rotated_x(FRAC_PI_2));
        b.oscillate(engine, Property::EmissiveIntensity, 1.0, 12.0, x);
    }
    b.oscillate(ship, Property::PositionY, 0.3, 0.8, 0.0);

    let sweep = b.light(Light::spot(0xffe0a0, 3.0, Vec3::new(0.0, 25.0, 30.0), Vec3::new(0.0, 6.0, 0.0), 0.5));
    b.oscillate(sweep, Property::PositionX, 15.0, 0.3, 0.0);
    presets::sparks(b, 100, Vec3::new(12.0, 4.0, -6.0), Vec3::new(1.0, 4.0, 1.0), 0xffd070);
    presets::dust(b, 150, Vec3::new(0.0, 10.0, 0.0), Vec3::new(25.0, 10.0, 45.0), 0xa0b0c0);
}
