use nalgebra::Point3;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

/// Near-Earth-object hazard classification, as assigned by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Near-Earth object.
    Neo,
    /// Potentially hazardous object.
    Pho,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Classification::Neo => "NEO",
            Classification::Pho => "PHO",
        }
    }

    /// Marker color used when no texture is available (green for plain NEOs,
    /// red for potentially hazardous ones).
    pub fn color(self) -> Point3<f32> {
        match self {
            Classification::Neo => Point3::new(0.0, 1.0, 0.0),
            Classification::Pho => Point3::new(1.0, 0.0, 0.0),
        }
    }
}

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    pub description: String,
    /// Radius of the rendered sphere, also the picking radius.
    pub display_radius: f32,
    /// Distance from the central star, abstract scene units.
    pub orbital_radius: f64,
    /// Orbital angle advance per frame, before time scaling.
    pub angular_speed: f64,
    /// Display-only; does not affect the orbit.
    pub axial_tilt_deg: f64,
    pub rotating: bool,
    /// Fallback color when the texture asset is missing.
    pub color: Point3<f32>,
    /// File name under the texture directory, if the body has one.
    pub texture: Option<&'static str>,
    pub diameter_km: Option<f64>,
    pub orbital_period_days: Option<f64>,
    pub moons: Option<u32>,
    pub classification: Option<Classification>,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
    /// Current orbital angle in radians. Grows without bound; at these
    /// magnitudes the float error is negligible, so we never reduce mod 2pi.
    pub angle: f64,
    /// Decorative axial spin angle in radians.
    pub spin: f64,
}

impl Body {
    pub fn new(id: BodyID, info: BodyInfo) -> Self {
        Body {
            id,
            info,
            angle: 0.0,
            spin: 0.0,
        }
    }

    /// Planar circular orbit: y is held at zero.
    pub fn position(&self) -> Point3<f64> {
        let r = self.info.orbital_radius;
        Point3::new(self.angle.cos() * r, 0.0, self.angle.sin() * r)
    }
}
