use nalgebra::Point3;
use rand::Rng;

pub const BELT_COUNT: usize = 50;
/// Orbital radius band for the belt, scene units.
pub const BELT_RADIUS_MIN: f64 = 7.5;
pub const BELT_RADIUS_MAX: f64 = 12.0;
/// Per-frame angular speed band.
pub const BELT_SPEED_MIN: f64 = 0.0005;
pub const BELT_SPEED_MAX: f64 = 0.0015;
/// Rendered sphere radius band.
pub const BELT_SIZE_MIN: f32 = 0.05;
pub const BELT_SIZE_MAX: f32 = 0.1;

/// One belt particle. The orbital radius is captured from the initial random
/// placement and held constant afterwards.
#[derive(Debug, Clone)]
pub struct AsteroidParticle {
    pub orbital_radius: f64,
    pub angle: f64,
    pub angular_speed: f64,
    pub display_radius: f32,
}

impl AsteroidParticle {
    pub fn position(&self) -> Point3<f64> {
        let r = self.orbital_radius;
        Point3::new(self.angle.cos() * r, 0.0, self.angle.sin() * r)
    }
}

/// Scatter the fixed-count belt: radius uniform over the band, initial angle
/// uniform over the whole circle, independent random speed per particle.
pub fn scatter_belt<R: Rng>(rng: &mut R) -> Vec<AsteroidParticle> {
    (0..BELT_COUNT)
        .map(|_| AsteroidParticle {
            orbital_radius: rng.gen_range(BELT_RADIUS_MIN..BELT_RADIUS_MAX),
            angle: rng.gen_range(0.0..std::f64::consts::TAU),
            angular_speed: rng.gen_range(BELT_SPEED_MIN..BELT_SPEED_MAX),
            display_radius: rng.gen_range(BELT_SIZE_MIN..BELT_SIZE_MAX),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn belt_parameters_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let belt = scatter_belt(&mut rng);
        assert_eq!(belt.len(), BELT_COUNT);
        for particle in &belt {
            assert!(particle.orbital_radius >= BELT_RADIUS_MIN);
            assert!(particle.orbital_radius < BELT_RADIUS_MAX);
            assert!(particle.angular_speed >= BELT_SPEED_MIN);
            assert!(particle.angular_speed < BELT_SPEED_MAX);
            assert!(particle.angle >= 0.0 && particle.angle < std::f64::consts::TAU);
            assert!(particle.display_radius >= BELT_SIZE_MIN);
            assert!(particle.display_radius < BELT_SIZE_MAX);
        }
    }

    #[test]
    fn particle_starts_on_its_own_radius() {
        let mut rng = StdRng::seed_from_u64(99);
        for particle in scatter_belt(&mut rng) {
            approx::assert_relative_eq!(
                particle.position().coords.norm(),
                particle.orbital_radius,
                max_relative = 1e-12
            );
        }
    }
}
