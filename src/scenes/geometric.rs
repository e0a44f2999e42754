use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::common::{fractal_color, ground, night_fill, should_terminate_fractal};
use crate::animate::{Property, Wave};
use crate::graph::{Fog, Light, Material, NodeId, SceneGraph, Shape};
use crate::layout::{self, staircase::StairLoop};
use crate::math::Color;
use crate::particles::{presets, Motion, ParticleSpec};
use crate::scene::SceneBuilder;
use crate::types::Transform;

const GOLDEN_ANGLE: f32 = 2.399_963;

fn gallery(b: &mut SceneBuilder, background: u32) {
    b.background(background);
    b.light(Light::hemisphere(0xffffff, 0x404040, 0.7));
    b.light(Light::directional(0xffffff, 1.0, Vec3::new(10.0, 20.0, 10.0)));
}

pub fn escher_staircase(b: &mut SceneBuilder) {
    gallery(b, 0xe8e0d0);
    b.fog(Fog::linear(0xe8e0d0, 40.0, 140.0));

    // Three stacked loops; each one's top tread lines up under the next
    // loop's first, hiding the closure drop from most angles.
    let steps_per_side = 8;
    let rise = 0.35;
    let mut base = Vec3::ZERO;
    for level in 0..3 {
        let stairs = StairLoop::new(base, 8.0, steps_per_side, rise);
        let tower = b.group(Transform::IDENTITY);
        let shade = 0.85 - level as f32 * 0.1;
        for step in &stairs.steps {
            b.child(
                tower,
                Shape::cuboid(stairs.tread, rise, 3.0),
                Material::standard(Color::rgb(shade, shade * 0.95, shade * 0.9)),
                Transform::at(step.position).rotated_y(step.facing),
            );
            let wall_height = step.position.y - base.y + 2.0;
            b.child(
                tower,
                Shape::cuboid(stairs.tread, wall_height, 0.3),
                Material::standard(Color::rgb(shade * 0.8, shade * 0.75, shade * 0.7)),
                Transform::at(step.position - Vec3::Y * wall_height * 0.5).rotated_y(step.facing),
            );
            if step.index % steps_per_side == 0 {
                b.child(tower, Shape::cylinder(0.3, 4.0), Material::standard(0x706860), Transform::at(step.position + Vec3::Y * 2.0));
            }
        }
        base += Vec3::Y * stairs.closure_drop();
    }

    // Walkers climb forever.
    let stairs = StairLoop::new(Vec3::ZERO, 8.0, steps_per_side, rise);
    let loop_len = stairs.len();
    for walker in 0..4 {
        let figure = b.place(Shape::tapered(0.15, 0.25, 1.2), Material::standard(0x303030), Vec3::ZERO);
        let offset = walker * loop_len / 4;
        let steps = stairs.steps.clone();
        b.animate(move |g: &mut SceneGraph, t: f32| {
            let index = ((t * 2.0) as usize + offset) % steps.len();
            let step = steps[index];
            g.node_mut(figure).transform.translation = step.position + Vec3::Y * 0.8;
            g.node_mut(figure).transform.rotation.y = step.facing;
        });
    }
    presets::dust(b, 80, Vec3::new(0.0, 5.0, 0.0), Vec3::new(10.0, 5.0, 10.0), 0xfff8e0);
}

/// Menger-style sponge of cube nodes parented under `parent`.
fn sponge(b: &mut SceneBuilder, parent: NodeId, center: Vec3, size: f32, depth: u32, color_seed: u32) {
    if should_terminate_fractal(depth, size, 0.4) {
        b.child(
            parent,
            Shape::cube(size * 0.96),
            Material::standard(fractal_color(color_seed, 0.6, 0.9)).metal(0.3, 0.4),
            Transform::at(center),
        );
        return;
    }
    let third = size / 3.0;
    for x in -1i32..=1 {
        for y in -1i32..=1 {
            for z in -1i32..=1 {
                let zeros = [x, y, z].iter().filter(|&&v| v == 0).count();
                if zeros >= 2 {
                    continue;
                }
                let offset = Vec3::new(x as f32, y as f32, z as f32) * third;
                let seed = color_seed.wrapping_add((x + y * 3 + z * 9 + 13) as u32);
                sponge(b, parent, center + offset, third, depth - 1, seed);
            }
        }
    }
}

pub fn infinite_cubes(b: &mut SceneBuilder) {
    b.background(0x08080c).fog(Fog::exp(0x08080c, 0.015));
    night_fill(b, 0x303040, 0.6);
    b.light(Light::directional(0xfff0e0, 1.2, Vec3::new(20.0, 30.0, 10.0)));

    let core = b.group(Transform::IDENTITY);
    sponge(b, core, Vec3::ZERO, 9.0, 2, 0);
    b.spin(core, Property::RotationY, 0.2);
    b.wave(core, Property::RotationX, 0.3, 0.15, 0.0, Wave::Cosine);

    // Receding copies fake an endless corridor of sponges.
    for (i, at) in layout::line(Vec3::new(0.0, 0.0, -25.0), Vec3::new(0.0, 0.0, -200.0), 8).enumerate() {
        let copy = b.group(Transform::at(at).scaled(1.0 + i as f32 * 0.3));
        sponge(b, copy, Vec3::ZERO, 9.0, 1, 100 + i as u32 * 17);
        b.spin(copy, Property::RotationY, if i % 2 == 0 { 0.3 } else { -0.3 });
    }
    presets::stars(b, 300, Vec3::ZERO, 250.0, 0xffffff);
}

/// Recursive branching, each branch a child group of its parent.
fn branch(b: &mut SceneBuilder, parent: NodeId, length: f32, depth: u32, color_seed: u32) {
    if should_terminate_fractal(depth, length, 0.25) {
        let leaf = b.child(parent, Shape::sphere(length * 1.5), Material::glow(fractal_color(color_seed, 0.7, 1.0), 0.6), Transform::xyz(0.0, length, 0.0));
        b.oscillate(leaf, Property::EmissiveIntensity, 0.4, 1.0, color_seed as f32);
        return;
    }
    let color = fractal_color(color_seed, 0.4, 0.5);
    b.child(parent, Shape::tapered(length * 0.06, length * 0.09, length), Material::standard(color), Transform::xyz(0.0, length * 0.5, 0.0));

    for (k, yaw) in [0.0f32, TAU / 3.0, 2.0 * TAU / 3.0].into_iter().enumerate() {
        let joint = b.child_group(parent, Transform::xyz(0.0, length, 0.0).rotated(Vec3::new(0.0, yaw, 0.5)));
        branch(b, joint, length * 0.68, depth - 1, color_seed.wrapping_add(k as u32 * 13 + 1));
        b.oscillate(joint, Property::RotationZ, 0.04, 0.6, k as f32 + depth as f32);
    }
}

pub fn fractal_tree(b: &mut SceneBuilder) {
    gallery(b, 0x101418);
    b.fog(Fog::exp(0x101418, 0.02));
    ground(b, 80.0, 0x1a2020);

    let trunk = b.group(Transform::IDENTITY);
    branch(b, trunk, 5.0, 5, 7);
    b.spin(trunk, Property::RotationY, 0.05);

    for (i, (at, _)) in layout::ring(Vec3::ZERO, 22.0, 5).enumerate() {
        let sapling = b.group(Transform::at(at));
        branch(b, sapling, 2.0, 3, 40 + i as u32 * 11);
    }
    presets::fireflies(b, 120, Vec3::new(0.0, 8.0, 0.0), Vec3::new(12.0, 6.0, 12.0), 0xfff0a0);
}

pub fn mobius_ribbon(b: &mut SceneBuilder) {
    gallery(b, 0x0c0c18);
    b.fog(Fog::exp(0x0c0c18, 0.02));

    // Flat segments whose roll turns half a revolution over one lap.
    let ribbon = b.group(Transform::xyz(0.0, 6.0, 0.0));
    let segments = 96;
    let radius = 8.0;
    for i in 0..segments {
        let u = i as f32 / segments as f32 * TAU;
        let at = Vec3::new(u.cos() * radius, 0.0, u.sin() * radius);
        let color = Color::hsv(i as f32 / segments as f32, 0.7, 1.0);
        b.child(
            ribbon,
            Shape::cuboid(0.6, 0.05, 3.0),
            Material::glow(color, 0.4).metal(0.6, 0.2),
            Transform::at(at).rotated(Vec3::new(0.0, -u, u * 0.5 + FRAC_PI_2)),
        );
    }
    b.spin(ribbon, Property::RotationY, 0.25);
    b.wave(ribbon, Property::RotationX, 0.4, 0.2, 0.0, Wave::Sine);

    // A bead rides the surface.
    let bead = b.place(Shape::sphere(0.4), Material::glow(0xffffff, 3.0), Vec3::ZERO);
    b.animate(move |g: &mut SceneGraph, t: f32| {
        let u = t * 0.6;
        let twist = u * 0.5;
        let normal = Vec3::new(u.cos() * twist.cos(), twist.sin(), u.sin() * twist.cos());
        g.node_mut(bead).transform.translation = Vec3::new(u.cos() * radius, 6.0, u.sin() * radius) + normal * 0.4;
    });
    presets::dust(b, 100, Vec3::new(0.0, 6.0, 0.0), Vec3::new(12.0, 4.0, 12.0), 0xa0a0ff);
}

pub fn voronoi_pillars(b: &mut SceneBuilder) {
    gallery(b, 0xf0ece4);
    ground(b, 120.0, 0xd8d4cc);

    let sites = layout::scatter(b.rng(), 9, Vec3::ZERO, Vec3::new(25.0, 0.0, 25.0));
    let palette: Vec<Color> = (0..sites.len()).map(|i| fractal_color(i as u32, 0.5, 0.85)).collect();

    for (_, _, at) in layout::grid(Vec3::ZERO, 1.6, 32, 32) {
        // Nearest site picks the color; distance to the border drives height.
        let mut nearest = (f32::MAX, 0usize);
        let mut second = f32::MAX;
        for (i, site) in sites.iter().enumerate() {
            let d = at.distance(*site);
            if d < nearest.0 {
                second = nearest.0;
                nearest = (d, i);
            } else if d < second {
                second = d;
            }
        }
        let edge = (second - nearest.0).min(6.0);
        let height = 0.3 + edge * 1.2;
        let pillar = b.place(Shape::cuboid(1.5, height, 1.5), Material::standard(palette[nearest.1]), at + Vec3::Y * height * 0.5);
        if edge < 0.6 {
            b.oscillate(pillar, Property::PositionY, 0.2, 1.5, at.x * 0.3 + at.z * 0.2);
        }
    }
    for site in &sites {
        b.place(Shape::sphere(0.6), Material::glow(0xffffff, 2.0), *site + Vec3::Y * 9.0);
    }
}

pub fn sine_wave_field(b: &mut SceneBuilder) {
    gallery(b, 0x05060a);
    b.fog(Fog::linear(0x05060a, 30.0, 90.0));

    // One instanced batch bobbing with a phase set by distance from center,
    // so rings radiate outwards.
    let side = 40usize;
    let spacing = 1.0;
    b.particles(Shape::cube(0.8), Material::glow(0x30a0ff, 0.8).metal(0.5, 0.3), Motion::Bob, side * side, move |i, _| {
        let x = (i % side) as f32 - side as f32 * 0.5;
        let z = (i / side) as f32 - side as f32 * 0.5;
        let r = (x * x + z * z).sqrt() * spacing;
        ParticleSpec::at(Vec3::new(x * spacing, 0.0, z * spacing)).amplitude(1.5).speed(2.0).phase(-r * 0.5)
    });

    let ring = b.mesh(Shape::torus(30.0, 0.1), Material::glow(0xff40a0, 2.0), Transform::IDENTITY);
    b.oscillate(ring, Property::PositionY, 1.5, 2.0, 0.0);
    presets::stars(b, 200, Vec3::ZERO, 120.0, 0xffffff);
}

pub fn tesseract_shadow(b: &mut SceneBuilder) {
    gallery(b, 0x0a0a14);
    b.fog(Fog::exp(0x0a0a14, 0.02));

    // 16 vertices of a hypercube projected from 4D while rotating in the
    // XW and ZW planes.
    let vertices: Vec<[f32; 4]> = (0..16u32)
        .map(|i| {
            let bit = |k: u32| if i & (1 << k) != 0 { 1.0 } else { -1.0 };
            [bit(0), bit(1), bit(2), bit(3)]
        })
        .collect();
    let nodes: Vec<NodeId> = (0..vertices.len())
        .map(|i| b.place(Shape::sphere(0.25), Material::glow(Color::hsv(i as f32 / 16.0, 0.6, 1.0), 2.0), Vec3::ZERO))
        .collect();

    b.animate(move |g: &mut SceneGraph, t: f32| {
        let (sa, ca) = (t * 0.5).sin_cos();
        let (sb, cb) = (t * 0.3).sin_cos();
        for (v, &node) in vertices.iter().zip(&nodes) {
            let [x, y, z, w] = *v;
            let (x, w) = (x * ca - w * sa, x * sa + w * ca);
            let (z, w) = (z * cb - w * sb, z * sb + w * cb);
            let perspective = 3.0 / (3.0 - w);
            g.node_mut(node).transform.translation = Vec3::new(x, y, z) * perspective * 3.0 + Vec3::Y * 6.0;
        }
    });

    b.mesh(Shape::plane(40.0, 40.0), Material::standard(0x202028).metal(0.6, 0.2), Transform::IDENTITY);
    b.light(Light::point(0xc0c0ff, 2.0, Vec3::new(0.0, 6.0, 0.0), 30.0));
    presets::dust(b, 60, Vec3::new(0.0, 6.0, 0.0), Vec3::new(8.0, 6.0, 8.0), 0x8080ff);
}

pub fn cube_galaxy(b: &mut SceneBuilder) {
    b.background(0x000004);
    night_fill(b, 0x202030, 0.4);

    for arm in 0..4 {
        let offset = arm as f32 * FRAC_PI_2;
        let hue = 0.55 + arm as f32 * 0.08;
        b.particles(Shape::cube(0.3), Material::glow(Color::hsv(hue, 0.6, 1.0), 1.5), Motion::Orbit, 300, move |i, rng| {
            let r = 2.0 + i as f32 * 0.12;
            let scatter = layout::jitter(rng, Vec3::new(0.8, 0.4, 0.8));
            ParticleSpec::at(scatter)
                .amplitude(r)
                .speed(3.0 / r.sqrt())
                .phase(offset + r * 0.35)
                .scale(1.2 - i as f32 / 300.0)
                .spin(2.0)
        });
    }
    let core = b.place(Shape::cube(2.0), Material::glow(0xfff0d0, 4.0), Vec3::ZERO);
    b.spin(core, Property::RotationY, 0.5);
    b.light(Light::point(0xfff0d0, 3.0, Vec3::ZERO, 80.0));
    presets::stars(b, 400, Vec3::ZERO, 300.0, 0xffffff);
}

pub fn kaleidoscope_tunnel(b: &mut SceneBuilder) {
    b.background(0x000000);
    night_fill(b, 0x404040, 0.5);

    let tunnel = b.group(Transform::IDENTITY);
    let facets = 12;
    for ring in 0..30 {
        let z = -(ring as f32) * 3.0;
        for k in 0..facets {
            let angle = k as f32 / facets as f32 * TAU + ring as f32 * 0.13;
            let at = Vec3::new(angle.cos() * 5.0, angle.sin() * 5.0, z);
            let hue = (k as f32 / facets as f32 + ring as f32 * 0.03).fract();
            b.child(
                tunnel,
                Shape::cuboid(2.6, 0.2, 2.8),
                Material::glow(Color::hsv(hue, 0.8, 1.0), 1.0).metal(0.9, 0.1),
                Transform::at(at).rotated_z(angle + FRAC_PI_2),
            );
        }
    }
    b.spin(tunnel, Property::RotationZ, 0.4);
    // Scroll the tunnel towards the viewer and loop every ring.
    b.animate(move |g: &mut SceneGraph, t: f32| {
        g.node_mut(tunnel).transform.translation.z = (t * 6.0).rem_euclid(3.0);
    });
    let eye = b.light(Light::point(0xffffff, 2.0, Vec3::new(0.0, 0.0, -10.0), 40.0));
    b.oscillate(eye, Property::LightIntensity, 1.0, 2.0, 0.0);
}

pub fn op_art_checkerboard(b: &mut SceneBuilder) {
    gallery(b, 0x808080);

    // Checker tiles dip and rise in a diagonal travelling wave.
    for (x, z, at) in layout::grid(Vec3::ZERO, 1.0, 24, 24) {
        let black = (x + z) % 2 == 0;
        let tile = b.place(Shape::cuboid(1.0, 0.2, 1.0), Material::standard(if black { 0x000000 } else { 0xffffff }), at);
        b.oscillate(tile, Property::PositionY, 0.5, 2.0, (x + z) as f32 * 0.35);
        if black {
            b.oscillate(tile, Property::RotationY, 0.2, 1.0, x as f32 * 0.5);
        }
    }
    let sphere = b.place(Shape::sphere(3.0), Material::standard(0xffffff).metal(1.0, 0.0), Vec3::new(0.0, 5.0, 0.0));
    b.oscillate(sphere, Property::PositionY, 1.0, 0.7, 0.0);
}

pub fn lissajous_garden(b: &mut SceneBuilder) {
    gallery(b, 0x101010);
    b.fog(Fog::exp(0x101010, 0.02));
    ground(b, 60.0, 0x181818);

    let ratios = [(1.0f32, 2.0f32), (3.0, 2.0), (3.0, 4.0), (5.0, 4.0), (1.0, 3.0), (5.0, 6.0)];
    for (i, ((at, _), (a, c))) in layout::ring(Vec3::new(0.0, 4.0, 0.0), 12.0, ratios.len()).zip(ratios).enumerate() {
        let color = Color::hsv(i as f32 / ratios.len() as f32, 0.7, 1.0);
        b.place(Shape::cylinder(0.1, 4.0), Material::standard(0x404040), at - Vec3::Y * 2.0);
        // Trail of beads lagging the head along the same curve.
        for lag in 0..12 {
            let bead = b.place(
                Shape::sphere(0.25 - lag as f32 * 0.015),
                Material::glow(color, 3.0 - lag as f32 * 0.2),
                at,
            );
            let delay = lag as f32 * 0.06;
            b.oscillate(bead, Property::PositionX, 2.0, a, -delay * a);
            b.oscillate(bead, Property::PositionY, 2.0, c, FRAC_PI_2 - delay * c);
        }
    }
    presets::fireflies(b, 60, Vec3::new(0.0, 4.0, 0.0), Vec3::new(15.0, 3.0, 15.0), 0xffffff);
}

pub fn golden_spiral(b: &mut SceneBuilder) {
    gallery(b, 0xf8f0e0);
    ground(b, 80.0, 0xe8dcc0);

    // Phyllotaxis: the n-th seed sits at angle n * golden angle, radius √n.
    let seeds = 400;
    let head = b.group(Transform::xyz(0.0, 0.1, 0.0));
    for n in 0..seeds {
        let angle = n as f32 * GOLDEN_ANGLE;
        let radius = (n as f32).sqrt() * 0.8;
        let t = n as f32 / seeds as f32;
        let color = Color::hex(0x6a3a10).lerp(Color::hex(0xe8a020), t);
        let height = 0.3 + (1.0 - t) * 1.5;
        b.child(
            head,
            Shape::cylinder(0.35, height),
            Material::standard(color),
            Transform::xyz(angle.cos() * radius, height * 0.5, angle.sin() * radius),
        );
    }
    b.spin(head, Property::RotationY, 0.1);

    // Quarter arcs of the golden rectangle subdivision.
    let mut size = 1.0f32;
    let mut corner = Vec3::new(0.0, 0.05, 0.0);
    for k in 0..9 {
        let arc = b.mesh(
            Shape::torus(size, 0.05),
            Material::glow(0xb08020, 1.0),
            Transform::at(corner).rotated_x(FRAC_PI_2),
        );
        b.oscillate(arc, Property::EmissiveIntensity, 0.5, 1.0, k as f32 * 0.7);
        let dir = k as f32 * FRAC_PI_2;
        corner += Vec3::new(dir.cos(), 0.0, dir.sin()) * size * 0.618;
        size *= 1.618;
    }
}

pub fn hexagon_hive(b: &mut SceneBuilder) {
    b.background(0x201408).fog(Fog::exp(0x201408, 0.02));
    night_fill(b, 0x604020, 0.6);
    b.light(Light::directional(0xffd080, 1.0, Vec3::new(5.0, 20.0, 10.0)));

    let cell = 1.0;
    let width = cell * 3f32.sqrt();
    for row in -8i32..=8 {
        for col in -8i32..=8 {
            let x = col as f32 * width + if row % 2 != 0 { width * 0.5 } else { 0.0 };
            let z = row as f32 * cell * 1.5;
            if x * x + z * z > 14.0 * 14.0 {
                continue;
            }
            let filled = b.chance(0.6);
            let color = if filled { 0xe8a020 } else { 0xc89040 };
            let comb = b.mesh(
                Shape::tapered(cell, cell, if filled { 1.2 } else { 0.8 }),
                Material::standard(color).metal(0.2, 0.3),
                Transform::xyz(x, 0.0, z).rotated_y(PI / 6.0),
            );
            if filled {
                let phase = b.range(0.0, TAU);
                b.oscillate(comb, Property::EmissiveIntensity, 0.2, 0.5, phase);
            }
        }
    }
    presets::swarm(b, 60, Vec3::new(0.0, 2.0, 0.0), 2.0, 8.0, 0x302000);
    presets::swarm(b, 40, Vec3::new(5.0, 3.0, -3.0), 1.0, 3.0, 0xf0c020);
    presets::dust(b, 100, Vec3::new(0.0, 4.0, 0.0), Vec3::new(14.0, 4.0, 14.0), 0xffd070);
}

pub fn pendulum_wave(b: &mut SceneBuilder) {
    gallery(b, 0x101418);
    ground(b, 40.0, 0x202830);

    // Pendulum k completes (51 + k) swings in 60 seconds, so the row drifts
    // through snakes and splits and realigns every minute.
    let count = 15;
    let beam_y = 10.0;
    b.mesh(Shape::cuboid(count as f32 + 1.0, 0.3, 0.3), Material::standard(0x808890).metal(0.9, 0.3), Transform::xyz(0.0, beam_y, 0.0));
    for k in 0..count {
        let x = k as f32 - count as f32 * 0.5 + 0.5;
        let swings = 51.0 + k as f32;
        let omega = swings * TAU / 60.0;
        let length = 9.81 / (omega * omega);
        let arm = b.group(Transform::xyz(x, beam_y, 0.0));
        b.child(arm, Shape::cylinder(0.02, length), Material::standard(0xc0c0c0), Transform::xyz(0.0, -length * 0.5, 0.0));
        b.child(
            arm,
            Shape::sphere(0.35),
            Material::glow(Color::hsv(k as f32 / count as f32, 0.8, 1.0), 1.5).metal(0.8, 0.2),
            Transform::xyz(0.0, -length, 0.0),
        );
        b.oscillate(arm, Property::RotationX, 0.45, omega, 0.0);
    }
    b.light(Light::spot(0xffffff, 2.0, Vec3::new(0.0, 20.0, 6.0), Vec3::new(0.0, 8.0, 0.0), 0.6));
}

pub fn torus_knot_shrine(b: &mut SceneBuilder) {
    b.background(0x100818).fog(Fog::exp(0x100818, 0.03));
    night_fill(b, 0x302040, 0.5);
    ground(b, 60.0, 0x1a1020);

    // (3, 7) torus knot sampled as a chain of spheres.
    let knot = b.group(Transform::xyz(0.0, 8.0, 0.0));
    let (p, q) = (3.0f32, 7.0f32);
    let samples = 240;
    for i in 0..samples {
        let u = i as f32 / samples as f32 * TAU;
        let r = 3.0 + (q * u).cos();
        let at = Vec3::new(r * (p * u).cos(), (q * u).sin(), r * (p * u).sin()) * 1.3;
        let color = Color::hsv(i as f32 / samples as f32, 0.6, 1.0);
        b.child(knot, Shape::sphere(0.3), Material::glow(color, 1.2).metal(0.7, 0.2), Transform::at(at));
    }
    b.spin(knot, Property::RotationY, 0.3);
    b.wave(knot, Property::RotationZ, 0.2, 0.4, 0.0, Wave::Sine);

    for (at, angle) in layout::ring(Vec3::ZERO, 10.0, 8) {
        let torii = b.group(Transform::at(at).rotated_y(-angle));
        for side in [-1.2f32, 1.2] {
            b.child(torii, Shape::cylinder(0.15, 3.0), Material::standard(0xc02020), Transform::xyz(side, 1.5, 0.0));
        }
        b.child(torii, Shape::cuboid(3.4, 0.25, 0.3), Material::standard(0xc02020), Transform::xyz(0.0, 3.1, 0.0));
    }
    let glow = b.light(Light::point(0xff80ff, 3.0, Vec3::new(0.0, 8.0, 0.0), 30.0));
    b.oscillate(glow, Property::LightIntensity, 1.0, 0.8, 0.0);
    presets::spores(b, 120, Vec3::new(0.0, 6.0, 0.0), Vec3::new(10.0, 6.0, 10.0), 0xff90ff);
}
