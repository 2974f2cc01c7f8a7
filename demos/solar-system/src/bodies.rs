/// Body catalog — visual parameters and info-panel text for everything
/// clickable. Sizes and distances are exaggerated for readability; real
/// proportions would put every planet at sub-pixel scale.

use serde::Serialize;

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

/// Catalog indices of the two non-planet clickables.
pub const SUN_INDEX: usize = PLANET_COUNT;
pub const MOON_INDEX: usize = PLANET_COUNT + 1;

/// Surface family, also steering texture style on the renderer side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    Rocky,
    Terran,
    Gas,
    Moon,
}

/// Visual and orbital parameters for one planet.
pub struct PlanetSpec {
    pub name: &'static str,
    /// Visual radius in world units.
    pub radius: f32,
    /// Distance from the sun along the orbit plane.
    pub orbit: f32,
    /// Orbital angular speed, radians per normalized frame.
    pub speed: f32,
    pub kind: BodyKind,
    pub primary: (f32, f32, f32),
    pub secondary: (f32, f32, f32),
    pub blurb: &'static str,
}

pub const PLANETS: [PlanetSpec; PLANET_COUNT] = [
    PlanetSpec {
        name: "Mercury",
        radius: 0.3,
        orbit: 6.0,
        speed: 0.02,
        kind: BodyKind::Rocky,
        primary: (0.60, 0.60, 0.60),
        secondary: (0.40, 0.40, 0.40),
        blurb: "The innermost planet. Surface temperatures swing wildly between day and night.",
    },
    PlanetSpec {
        name: "Venus",
        radius: 0.6,
        orbit: 8.0,
        speed: 0.015,
        kind: BodyKind::Rocky,
        primary: (0.86, 0.69, 0.38),
        secondary: (0.72, 0.56, 0.25),
        blurb: "A scorching world wrapped in thick clouds, close to Earth in size.",
    },
    PlanetSpec {
        name: "Earth",
        radius: 0.65,
        orbit: 11.0,
        speed: 0.0125,
        kind: BodyKind::Terran,
        primary: (0.06, 0.19, 0.44),
        secondary: (0.13, 0.31, 0.13),
        blurb: "The only known world to harbor life. Oceans cover seven tenths of its surface.",
    },
    PlanetSpec {
        name: "Mars",
        radius: 0.45,
        orbit: 14.0,
        speed: 0.01,
        kind: BodyKind::Rocky,
        primary: (0.71, 0.21, 0.02),
        secondary: (0.54, 0.15, 0.0),
        blurb: "The red planet. Dry riverbeds hint at a wetter past.",
    },
    PlanetSpec {
        name: "Jupiter",
        radius: 1.6,
        orbit: 18.0,
        speed: 0.006,
        kind: BodyKind::Gas,
        primary: (0.75, 0.50, 0.13),
        secondary: (0.56, 0.38, 0.19),
        blurb: "The largest planet in the solar system, famous for its Great Red Spot.",
    },
    PlanetSpec {
        name: "Saturn",
        radius: 1.3,
        orbit: 22.0,
        speed: 0.005,
        kind: BodyKind::Gas,
        primary: (0.83, 0.75, 0.56),
        secondary: (0.69, 0.63, 0.44),
        blurb: "A gas giant ringed by ice and rock, less dense than water.",
    },
    PlanetSpec {
        name: "Uranus",
        radius: 1.0,
        orbit: 26.0,
        speed: 0.0035,
        kind: BodyKind::Gas,
        primary: (0.38, 0.82, 0.85),
        secondary: (0.25, 0.69, 0.72),
        blurb: "An ice giant tipped on its side, rolling along its orbit.",
    },
    PlanetSpec {
        name: "Neptune",
        radius: 0.98,
        orbit: 30.0,
        speed: 0.003,
        kind: BodyKind::Gas,
        primary: (0.19, 0.31, 0.80),
        secondary: (0.13, 0.25, 0.63),
        blurb: "The outermost planet, scoured by supersonic storms.",
    },
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 3.5;
/// Corona glow billboard around the sun.
pub const SUN_HALO_RADIUS: f32 = 6.0;
pub const SUN_HALO_COLOR: (f32, f32, f32) = (1.0, 0.67, 0.0);
pub const SUN_HALO_ALPHA: f32 = 0.7;
pub const SUN_COLOR: (f32, f32, f32) = (1.0, 0.45, 0.05);
pub const SUN_BLURB: &str =
    "The star at the center of the solar system, pouring out colossal energy.";

// ── Moon ─────────────────────────────────────────────────────────────

pub const MOON_RADIUS: f32 = 0.18;
/// Fixed local offset from the moon pivot, reasserted every tick.
pub const MOON_OFFSET: f32 = 1.8;
/// Pivot angular speed, radians per normalized frame.
pub const MOON_SPIN: f32 = 0.04;
pub const MOON_COLOR: (f32, f32, f32) = (0.87, 0.87, 0.87);
pub const MOON_BLURB: &str = "Earth's only natural satellite, driver of the tides.";

// ── Saturn ring ──────────────────────────────────────────────────────

pub const RING_INNER: f32 = 1.6;
pub const RING_OUTER: f32 = 2.4;
pub const RING_COLOR: (f32, f32, f32) = (0.85, 0.76, 0.60);
/// Lay the annulus almost flat, with a slight visible incline.
pub const RING_TILT: f32 = std::f32::consts::PI / 2.2;

// ── Shared ───────────────────────────────────────────────────────────

/// Axial tilt applied to every planet mesh.
pub const AXIAL_TILT: f32 = 0.1;
/// Enlarged invisible pick spheres: planets and the moon get 2.5×,
/// the sun (already huge) gets 1.5×.
pub const PLANET_HIT_FACTOR: f32 = 2.5;
pub const SUN_HIT_FACTOR: f32 = 1.5;

/// One info-panel entry.
#[derive(Debug, Serialize)]
pub struct BodyInfo {
    pub name: &'static str,
    pub kind: BodyKind,
    pub blurb: &'static str,
}

/// Full clickable-body catalog, indexed by the focus-event payload:
/// planets first, then the sun, then the moon.
pub fn catalog() -> Vec<BodyInfo> {
    let mut entries: Vec<BodyInfo> = PLANETS
        .iter()
        .map(|p| BodyInfo { name: p.name, kind: p.kind, blurb: p.blurb })
        .collect();
    entries.push(BodyInfo { name: "Sun", kind: BodyKind::Star, blurb: SUN_BLURB });
    entries.push(BodyInfo { name: "Moon", kind: BodyKind::Moon, blurb: MOON_BLURB });
    entries
}

/// Catalog serialized for the DOM info panel.
pub fn catalog_json() -> String {
    serde_json::to_string(&catalog()).unwrap_or_default()
}
