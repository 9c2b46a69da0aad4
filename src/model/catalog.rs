//! Fixed definition tables for the standard scene: the sun, the eight
//! planets, the named near-Earth objects, and the belt parameters.
//!
//! Orbital radii and speeds are hand-tuned display values, not derived from
//! real orbital mechanics. Descriptive attributes (diameter, period, moon
//! count) are the real figures shown in the info panel.

use nalgebra::Point3;
use rand::Rng;

use super::belt::scatter_belt;
use super::body::{BodyInfo, Classification};
use super::orrery::Orrery;

pub const SUN_RADIUS: f32 = 1.5;
pub const SUN_TEXTURE: &str = "8k_sun.jpg";
pub const SUN_COLOR: (f32, f32, f32) = (1.0, 0.9, 0.5);

pub const ASTEROID_TEXTURE: &str = "3215-v1.jpg";
pub const ASTEROID_COLOR: (f32, f32, f32) = (0.45, 0.40, 0.35);

/// All named NEOs share one display size and one per-frame angular speed.
pub const NEO_DISPLAY_RADIUS: f32 = 0.2;
pub const NEO_ANGULAR_SPEED: f64 = 0.01;

pub struct PlanetDef {
    pub name: &'static str,
    pub description: &'static str,
    pub size: f32,
    pub texture: &'static str,
    pub orbital_radius: f64,
    pub speed: f64,
    pub tilt_deg: f64,
    /// Fallback when the texture asset is missing.
    pub color: (f32, f32, f32),
    pub diameter_km: f64,
    pub orbital_period_days: f64,
    pub moons: u32,
}

pub struct NeoDef {
    pub name: &'static str,
    pub discovery: &'static str,
    pub orbital_radius: f64,
    pub classification: Classification,
    pub texture: Option<&'static str>,
}

pub const PLANETS: [PlanetDef; 8] = [
    PlanetDef {
        name: "Mercury",
        description: "The smallest planet in our solar system and closest to the Sun.",
        size: 0.3,
        texture: "8k_mercury.jpg",
        orbital_radius: 2.0,
        speed: 0.02,
        tilt_deg: 0.03,
        color: (0.60, 0.55, 0.50),
        diameter_km: 4879.0,
        orbital_period_days: 88.0,
        moons: 0,
    },
    PlanetDef {
        name: "Venus",
        description: "The second planet from the Sun and Earth's closest planetary neighbor.",
        size: 0.4,
        texture: "8k_venus_surface.jpg",
        orbital_radius: 3.0,
        speed: 0.015,
        tilt_deg: 177.4,
        color: (0.90, 0.75, 0.40),
        diameter_km: 12104.0,
        orbital_period_days: 225.0,
        moons: 0,
    },
    PlanetDef {
        name: "Earth",
        description: "The only planet known to support life.",
        size: 0.5,
        texture: "8k_earth_daymap.jpg",
        orbital_radius: 5.0,
        speed: 0.01,
        tilt_deg: 23.5,
        color: (0.20, 0.40, 0.80),
        diameter_km: 12742.0,
        orbital_period_days: 365.0,
        moons: 1,
    },
    PlanetDef {
        name: "Mars",
        description: "The Red Planet, known for its dusty, dry landscape.",
        size: 0.4,
        texture: "8k_mars.jpg",
        orbital_radius: 7.0,
        speed: 0.008,
        tilt_deg: 25.19,
        color: (0.80, 0.30, 0.15),
        diameter_km: 6779.0,
        orbital_period_days: 687.0,
        moons: 2,
    },
    PlanetDef {
        name: "Jupiter",
        description: "The largest planet in our solar system.",
        size: 1.0,
        texture: "8k_jupiter.jpg",
        orbital_radius: 12.0,
        speed: 0.005,
        tilt_deg: 3.13,
        color: (0.80, 0.70, 0.50),
        diameter_km: 139820.0,
        orbital_period_days: 4333.0,
        moons: 79,
    },
    PlanetDef {
        name: "Saturn",
        description: "The planet known for its stunning ring system.",
        size: 0.9,
        texture: "8k_saturn.jpg",
        orbital_radius: 15.0,
        speed: 0.004,
        tilt_deg: 26.73,
        color: (0.85, 0.75, 0.50),
        diameter_km: 116460.0,
        orbital_period_days: 10759.0,
        moons: 82,
    },
    PlanetDef {
        name: "Uranus",
        description: "An ice giant with a unique sideways rotation.",
        size: 0.6,
        texture: "2k_uranus.jpg",
        orbital_radius: 18.0,
        speed: 0.003,
        tilt_deg: 97.77,
        color: (0.50, 0.75, 0.85),
        diameter_km: 50724.0,
        orbital_period_days: 30687.0,
        moons: 27,
    },
    PlanetDef {
        name: "Neptune",
        description: "The farthest planet from the Sun in our solar system.",
        size: 0.6,
        texture: "2k_neptune.jpg",
        orbital_radius: 21.0,
        speed: 0.002,
        tilt_deg: 28.32,
        color: (0.25, 0.35, 0.80),
        diameter_km: 49244.0,
        orbital_period_days: 60190.0,
        moons: 14,
    },
];

pub const NEOS: [NeoDef; 6] = [
    NeoDef {
        name: "Ryugu",
        discovery: "Discovered in 1999 by LINEAR",
        orbital_radius: 10.0,
        classification: Classification::Neo,
        texture: Some("3215-v3.jpg"),
    },
    NeoDef {
        name: "Itokawa",
        discovery: "Discovered in 2005 by Hayabusa",
        orbital_radius: 15.0,
        classification: Classification::Pho,
        texture: Some("3215-v4.jpg"),
    },
    NeoDef {
        name: "Donald Johanson",
        discovery: "Discovered in 1992.",
        orbital_radius: 20.0,
        classification: Classification::Neo,
        texture: None,
    },
    NeoDef {
        name: "Dinkinesh",
        discovery: "Discovered in 2008.",
        orbital_radius: 25.0,
        classification: Classification::Neo,
        texture: None,
    },
    NeoDef {
        name: "Apophis",
        discovery: "Discovered in 2004. Notable for its potential impact risk.",
        orbital_radius: 30.0,
        classification: Classification::Pho,
        texture: None,
    },
    NeoDef {
        name: "Bennu",
        discovery: "Discovered in 1999. Studied by NASA's OSIRIS-REx mission.",
        orbital_radius: 35.0,
        classification: Classification::Pho,
        texture: None,
    },
];

impl From<&PlanetDef> for BodyInfo {
    fn from(def: &PlanetDef) -> Self {
        BodyInfo {
            name: def.name.to_owned(),
            description: def.description.to_owned(),
            display_radius: def.size,
            orbital_radius: def.orbital_radius,
            angular_speed: def.speed,
            axial_tilt_deg: def.tilt_deg,
            rotating: true,
            color: Point3::new(def.color.0, def.color.1, def.color.2),
            texture: Some(def.texture),
            diameter_km: Some(def.diameter_km),
            orbital_period_days: Some(def.orbital_period_days),
            moons: Some(def.moons),
            classification: None,
        }
    }
}

impl From<&NeoDef> for BodyInfo {
    fn from(def: &NeoDef) -> Self {
        BodyInfo {
            name: def.name.to_owned(),
            description: def.discovery.to_owned(),
            display_radius: NEO_DISPLAY_RADIUS,
            orbital_radius: def.orbital_radius,
            angular_speed: NEO_ANGULAR_SPEED,
            axial_tilt_deg: 0.0,
            rotating: false,
            color: def.classification.color(),
            texture: def.texture,
            diameter_km: None,
            orbital_period_days: None,
            moons: None,
            classification: Some(def.classification),
        }
    }
}

/// Build the standard registry: eight planets, six NEOs, and the randomized
/// belt. Construction is order-independent and infallible.
pub fn standard_orrery<R: Rng>(rng: &mut R) -> Orrery {
    let mut orrery = Orrery::new();
    for def in &PLANETS {
        orrery.add_body(def.into());
    }
    for def in &NEOS {
        orrery.add_body(def.into());
    }
    orrery.add_asteroids(scatter_belt(rng));
    orrery
}
