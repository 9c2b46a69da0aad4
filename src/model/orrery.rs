use std::collections::HashMap;

use nalgebra::Point3;

use super::belt::AsteroidParticle;
use super::body::{Body, BodyID, BodyInfo, Classification};

/// Decorative axial spin advance per frame for rotating bodies. Deliberately
/// not scaled by the time scale.
pub const SPIN_STEP: f64 = 0.01;

/// Read-only projection of a body's metadata plus its position at the moment
/// of a pick. Replaced wholesale on every new pick.
#[derive(Debug, Clone)]
pub struct SelectionSnapshot {
    pub name: String,
    pub description: String,
    pub classification: Option<Classification>,
    pub orbital_radius: f64,
    pub diameter_km: Option<f64>,
    pub orbital_period_days: Option<f64>,
    pub moons: Option<u32>,
    pub position: Point3<f64>,
}

/// The whole mutable scene state: every orbiting body plus the asteroid belt.
/// Owned by the simulation and passed by reference to picking and the view,
/// so the per-frame math is testable without a rendering context.
#[derive(Debug, Clone)]
pub struct Orrery {
    bodies: HashMap<BodyID, Body>,
    next_body_id: usize,
    asteroids: Vec<AsteroidParticle>,
}

impl Orrery {
    pub fn new() -> Self {
        Orrery {
            bodies: HashMap::new(),
            next_body_id: 0,
            asteroids: Vec::new(),
        }
    }

    pub fn add_body(&mut self, info: BodyInfo) -> BodyID {
        let id = BodyID(self.next_body_id);
        self.next_body_id += 1;
        self.bodies.insert(id, Body::new(id, info));
        id
    }

    pub fn add_asteroids(&mut self, particles: Vec<AsteroidParticle>) {
        self.asteroids.extend(particles);
    }

    pub fn get_body(&self, id: BodyID) -> &Body {
        &self.bodies[&id]
    }

    /// Every registered body. This is also the pickable set: the sun and the
    /// belt live outside the registry.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.values()
    }

    pub fn asteroids(&self) -> &[AsteroidParticle] {
        &self.asteroids
    }

    /// Advance simulated time by one frame. Runs unconditionally every frame;
    /// `time_scale` must be the value current at call time, never a cached one.
    pub fn advance(&mut self, time_scale: f64) {
        for body in self.bodies.values_mut() {
            body.angle += body.info.angular_speed * time_scale;
            if body.info.rotating {
                body.spin += SPIN_STEP;
            }
        }
        for asteroid in self.asteroids.iter_mut() {
            asteroid.angle += asteroid.angular_speed * time_scale;
        }
    }

    pub fn snapshot(&self, id: BodyID) -> SelectionSnapshot {
        let body = self.get_body(id);
        SelectionSnapshot {
            name: body.info.name.clone(),
            description: body.info.description.clone(),
            classification: body.info.classification,
            orbital_radius: body.info.orbital_radius,
            diameter_km: body.info.diameter_km,
            orbital_period_days: body.info.orbital_period_days,
            moons: body.info.moons,
            position: body.position(),
        }
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn plain_body(orbital_radius: f64, angular_speed: f64) -> BodyInfo {
        BodyInfo {
            name: "body".to_owned(),
            description: String::new(),
            display_radius: 0.5,
            orbital_radius,
            angular_speed,
            axial_tilt_deg: 0.0,
            rotating: true,
            color: Point3::new(1.0, 1.0, 1.0),
            texture: None,
            diameter_km: None,
            orbital_period_days: None,
            moons: None,
            classification: None,
        }
    }

    #[test]
    fn angle_accumulates_linearly() {
        let mut orrery = Orrery::new();
        let id = orrery.add_body(plain_body(5.0, 0.01));

        for _ in 0..250 {
            orrery.advance(2.0);
        }

        let body = orrery.get_body(id);
        assert_relative_eq!(body.angle, 250.0 * 0.01 * 2.0, max_relative = 1e-12);
        let expected = Point3::new(body.angle.cos() * 5.0, 0.0, body.angle.sin() * 5.0);
        assert_relative_eq!(body.position(), expected);
    }

    #[test]
    fn hundred_frame_scenario() {
        // speed 0.01, radius 5, scale 1: after 100 frames the body sits at
        // angle 1.0 rad, position roughly (2.70, 0, 4.21).
        let mut orrery = Orrery::new();
        let id = orrery.add_body(plain_body(5.0, 0.01));

        for _ in 0..100 {
            orrery.advance(1.0);
        }

        let body = orrery.get_body(id);
        assert_relative_eq!(body.angle, 1.0, max_relative = 1e-12);
        assert_relative_eq!(body.position().x, 2.70, epsilon = 0.005);
        assert_eq!(body.position().y, 0.0);
        assert_relative_eq!(body.position().z, 4.21, epsilon = 0.005);
    }

    #[test]
    fn spin_ignores_time_scale() {
        let mut orrery = Orrery::new();
        let id = orrery.add_body(plain_body(5.0, 0.01));

        orrery.advance(3.5);
        assert_relative_eq!(orrery.get_body(id).spin, SPIN_STEP);
    }

    #[test]
    fn asteroid_radius_is_invariant() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut orrery = Orrery::new();
        orrery.add_asteroids(crate::model::belt::scatter_belt(&mut rng));

        let radii: Vec<f64> = orrery.asteroids().iter().map(|a| a.orbital_radius).collect();
        for _ in 0..500 {
            orrery.advance(1.0);
        }
        for (asteroid, radius) in orrery.asteroids().iter().zip(radii) {
            assert_eq!(asteroid.orbital_radius, radius);
            assert_relative_eq!(
                asteroid.position().coords.norm(),
                radius,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn snapshot_reflects_current_position() {
        let mut orrery = Orrery::new();
        let id = orrery.add_body(plain_body(5.0, 0.01));
        for _ in 0..10 {
            orrery.advance(1.0);
        }

        let snapshot = orrery.snapshot(id);
        assert_relative_eq!(snapshot.position, orrery.get_body(id).position());
        assert_eq!(snapshot.orbital_radius, 5.0);
    }
}
