/// Static backdrop population: starfield, background galaxy, the zodiac
/// ring and the planet orbit circles. Everything here is generated once
/// into the backdrop buffers and never touched again.

use std::f32::consts::{PI, TAU};

use glam::{EulerRot, Quat, Vec3};
use orrery_engine::{BackdropBuffers, Rng};

use crate::bodies::PLANETS;
use crate::constellations::ZODIAC;

// ── Starfield ────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 3000;
/// Stars live on a thick shell well outside the planet orbits.
pub const STAR_SHELL_MIN: f32 = 100.0;
pub const STAR_SHELL_MAX: f32 = 500.0;
const STAR_SIZE: f32 = 0.7;

// ── Galaxy ───────────────────────────────────────────────────────────

pub const GALAXY_COUNT: usize = 5000;
const GALAXY_POS: Vec3 = Vec3::new(-500.0, 150.0, -500.0);
const GALAXY_SCALE: f32 = 4.0;
const GALAXY_SIZE: f32 = 0.6;
/// Core/arm color split radius in galaxy-local units.
const GALAXY_CORE_RADIUS: f32 = 10.0;

// ── Zodiac ring ──────────────────────────────────────────────────────

pub const ZODIAC_RING_RADIUS: f32 = 400.0;
const ZODIAC_SCALE: f32 = 8.0;
const ZODIAC_STAR_SIZE: f32 = 2.0;
const ZODIAC_HEIGHT_HALF: f32 = 50.0;
const ZODIAC_LINE_COLOR: (f32, f32, f32) = (0.33, 0.33, 1.0);
const ZODIAC_LINE_ALPHA: f32 = 0.3;

// ── Orbit circles ────────────────────────────────────────────────────

pub const ORBIT_SAMPLES: usize = 128;
const ORBIT_LINE_COLOR: (f32, f32, f32) = (0.27, 0.27, 0.27);
const ORBIT_LINE_ALPHA: f32 = 0.3;

/// Scatter stars uniformly over a spherical shell, in the classic
/// white / yellowish / blueish mix.
pub fn build_starfield(rng: &mut Rng, backdrop: &mut BackdropBuffers) {
    for _ in 0..STAR_COUNT {
        let r = rng.next_range(STAR_SHELL_MIN, STAR_SHELL_MAX);
        let theta = rng.next_f32() * TAU;
        let phi = (2.0 * rng.next_f32() - 1.0).acos();

        let pos = Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        );

        let roll = rng.next_f32();
        let color = if roll > 0.9 {
            (0.67, 0.67, 1.0) // blueish
        } else if roll > 0.7 {
            (1.0, 0.87, 0.67) // yellowish
        } else {
            (1.0, 1.0, 1.0)
        };

        backdrop.push_point(pos, color, STAR_SIZE);
    }
}

/// Two-armed spiral galaxy, parked far outside the zodiac ring and baked
/// through its group transform at build time.
pub fn build_galaxy(rng: &mut Rng, backdrop: &mut BackdropBuffers) {
    let orient = Quat::from_euler(EulerRot::XYZ, PI / 3.0, 0.0, PI / 6.0);

    for i in 0..GALAXY_COUNT {
        let branch = (i % 2) as f32 * PI;
        let radius = rng.next_f32() * 40.0;
        let spin = radius * 0.8;

        // Cubed random spread clusters particles toward the arm centers.
        let spread = |rng: &mut Rng| {
            let sign = if rng.next_f32() < 0.5 { 1.0 } else { -1.0 };
            rng.next_f32().powi(3) * sign * 2.0
        };
        let rx = spread(rng);
        let ry = spread(rng);
        let rz = spread(rng);

        let local = Vec3::new(
            (branch + spin).cos() * radius + rx,
            ry * (1.0 - radius / 50.0), // flatter at the rim
            (branch + spin).sin() * radius + rz,
        );

        let color = if radius < GALAXY_CORE_RADIUS {
            hsl_to_rgb(0.1, 1.0, 0.6) // warm core
        } else {
            hsl_to_rgb(0.6 + rng.next_f32() * 0.1, 0.8, 0.5) // blue-violet arms
        };

        let world = GALAXY_POS + orient * (local * GALAXY_SCALE);
        backdrop.push_point(world, color, GALAXY_SIZE);
    }
}

/// Place the twelve zodiac figures evenly around a distant ring, each
/// rotated to face the origin.
pub fn build_constellations(rng: &mut Rng, backdrop: &mut BackdropBuffers) {
    let angle_step = TAU / ZODIAC.len() as f32;

    for (i, figure) in ZODIAC.iter().enumerate() {
        let angle = i as f32 * angle_step;
        let center = Vec3::new(
            angle.cos() * ZODIAC_RING_RADIUS,
            rng.next_signed(ZODIAC_HEIGHT_HALF),
            angle.sin() * ZODIAC_RING_RADIUS,
        );

        // Basis facing the origin.
        let fwd = (-center).normalize_or_zero();
        let right = fwd.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(fwd).normalize_or_zero();

        let star_pos: Vec<Vec3> = figure
            .stars
            .iter()
            .map(|&(x, y)| center + right * (x * ZODIAC_SCALE) + up * (y * ZODIAC_SCALE))
            .collect();

        for &pos in &star_pos {
            backdrop.push_point(pos, (1.0, 1.0, 1.0), ZODIAC_STAR_SIZE);
        }
        for &(a, b) in figure.lines {
            backdrop.push_line(star_pos[a], star_pos[b], ZODIAC_LINE_COLOR, ZODIAC_LINE_ALPHA);
        }
    }
}

/// Faint circle in the ecliptic plane for every planet orbit.
pub fn build_orbit_rings(backdrop: &mut BackdropBuffers) {
    for planet in &PLANETS {
        for s in 0..ORBIT_SAMPLES {
            let a0 = s as f32 / ORBIT_SAMPLES as f32 * TAU;
            let a1 = (s + 1) as f32 / ORBIT_SAMPLES as f32 * TAU;
            let p0 = Vec3::new(a0.cos() * planet.orbit, 0.0, a0.sin() * planet.orbit);
            let p1 = Vec3::new(a1.cos() * planet.orbit, 0.0, a1.sin() * planet.orbit);
            backdrop.push_line(p0, p1, ORBIT_LINE_COLOR, ORBIT_LINE_ALPHA);
        }
    }
}

/// HSL → RGB, all channels in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s <= 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
