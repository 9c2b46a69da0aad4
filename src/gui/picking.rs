use kiss3d::camera::Camera;
use nalgebra::{Point2, Point3, Vector2};

use crate::math::ray::{intersect_sphere, Ray};
use crate::model::{BodyID, Orrery};

/// Unproject the cursor through the camera into a world-space ray.
pub fn cursor_ray(camera: &dyn Camera, cursor: Point2<f32>, window_size: Vector2<f32>) -> Ray {
    let (origin, direction) = camera.unproject(&cursor, &window_size);
    Ray::new(origin, direction)
}

/// Nearest pickable body along the ray, if any. Every registered body is
/// pickable (the sun, the belt and the rings live outside the registry);
/// an empty intersection set is the normal miss outcome.
pub fn pick_body(orrery: &Orrery, ray: &Ray) -> Option<BodyID> {
    let mut nearest: Option<(f32, BodyID)> = None;
    for body in orrery.bodies() {
        let center: Point3<f32> = nalgebra::convert(body.position());
        if let Some(t) = intersect_sphere(ray, &center, body.info.display_radius) {
            if nearest.map_or(true, |(best, _)| t < best) {
                nearest = Some((t, body.id));
            }
        }
    }
    nearest.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::model::catalog::standard_orrery;
    use crate::model::Classification;

    fn ray_through(target: Point3<f64>) -> Ray {
        let origin = Point3::new(0.0, 50.0, 0.0);
        let target: Point3<f32> = nalgebra::convert(target);
        Ray::new(origin, target - origin)
    }

    #[test]
    fn hits_the_targeted_body() {
        let mut rng = StdRng::seed_from_u64(3);
        let orrery = standard_orrery(&mut rng);

        let earth = orrery
            .bodies()
            .find(|b| b.info.name == "Earth")
            .unwrap();
        let picked = pick_body(&orrery, &ray_through(earth.position())).unwrap();
        assert_eq!(picked, earth.id);
    }

    #[test]
    fn miss_returns_none() {
        let mut rng = StdRng::seed_from_u64(4);
        let orrery = standard_orrery(&mut rng);

        // Straight up from far above the plane: nothing there.
        let ray = Ray::new(Point3::new(0.0, 100.0, 0.0), Vector3::y());
        assert!(pick_body(&orrery, &ray).is_none());
    }

    #[test]
    fn nearest_body_wins_on_multiple_hits() {
        use crate::model::BodyInfo;

        let mut orrery = Orrery::new();
        let mut body_at = |orbital_radius: f64| {
            orrery.add_body(BodyInfo {
                name: format!("r{orbital_radius}"),
                description: String::new(),
                display_radius: 0.5,
                orbital_radius,
                angular_speed: 0.0,
                axial_tilt_deg: 0.0,
                rotating: false,
                color: Point3::new(1.0, 1.0, 1.0),
                texture: None,
                diameter_km: None,
                orbital_period_days: None,
                moons: None,
                classification: None,
            })
        };
        let near = body_at(5.0);
        let _far = body_at(10.0);

        // Both bodies sit at angle 0 on the +x axis; a ray down that axis
        // crosses both spheres, and the nearer one must win.
        let ray = Ray::new(Point3::new(-100.0, 0.0, 0.0), Vector3::x());
        assert_eq!(pick_body(&orrery, &ray), Some(near));
    }

    #[test]
    fn picked_neo_reports_configured_classification() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut orrery = standard_orrery(&mut rng);
        for _ in 0..42 {
            orrery.advance(1.0);
        }

        let apophis = orrery
            .bodies()
            .find(|b| b.info.name == "Apophis")
            .unwrap();
        let picked = pick_body(&orrery, &ray_through(apophis.position())).unwrap();

        let snapshot = orrery.snapshot(picked);
        assert_eq!(snapshot.name, "Apophis");
        assert_eq!(snapshot.classification, Some(Classification::Pho));
        approx::assert_relative_eq!(snapshot.position, apophis.position());
    }
}
