use nalgebra::{Point3, Vector3};

/// A world-space ray cast from the camera through the pointer.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    /// The direction is normalized so intersection distances are comparable.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn point_at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Distance along the ray to the nearest intersection with the sphere, or
/// None if the ray misses it or the sphere lies entirely behind the origin.
pub fn intersect_sphere(ray: &Ray, center: &Point3<f32>, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(&ray.direction);
    let c = oc.norm_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    // Near root first; fall back to the far root when the origin is inside.
    let t = -b - sqrt_d;
    if t >= 0.0 {
        return Some(t);
    }
    let t = -b + sqrt_d;
    if t >= 0.0 {
        return Some(t);
    }
    None
}
