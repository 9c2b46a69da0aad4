use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kiss3d::camera::{ArcBall, Camera};
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3, Translation3, UnitQuaternion, Vector2, Vector3};
use tracing::warn;

use super::overlay::Overlay;
use super::picking;
use super::rings::RingRenderer;
use crate::model::catalog::{ASTEROID_COLOR, ASTEROID_TEXTURE, SUN_COLOR, SUN_RADIUS, SUN_TEXTURE};
use crate::model::{Body, BodyID, Orrery, SelectionSnapshot};

const CAMERA_START_EYE: [f32; 3] = [0.0, 5.0, 30.0];
const CAMERA_MIN_DIST: f32 = 10.0;
const CAMERA_MAX_DIST: f32 = 200.0;
// Offset of the camera from a freshly selected body: a little above, further
// behind.
const FOCUS_OFFSET_UP: f32 = 3.0;
const FOCUS_OFFSET_BACK: f32 = 10.0;

const PLANET_RING_COLOR: (f32, f32, f32) = (1.0, 1.0, 1.0);

pub struct View {
    // Scene state
    orrery: Orrery,
    body_nodes: HashMap<BodyID, SceneNode>,
    asteroid_nodes: Vec<SceneNode>,
    _sun_node: SceneNode,
    // Camera
    camera: ArcBall,
    // Extra draw passes
    rings: RingRenderer,
}

impl View {
    pub fn new(orrery: Orrery, window: &mut Window, texture_dir: &Path) -> Self {
        let mut sun_node = window.add_sphere(SUN_RADIUS);
        if !try_apply_texture(&mut sun_node, texture_dir, SUN_TEXTURE) {
            sun_node.set_color(SUN_COLOR.0, SUN_COLOR.1, SUN_COLOR.2);
        }

        let mut body_nodes = HashMap::new();
        for body in orrery.bodies() {
            let node = Self::create_body_object(window, body, texture_dir);
            body_nodes.insert(body.id, node);
        }

        let mut asteroid_nodes = Vec::new();
        let asteroid_texture = texture_dir.join(ASTEROID_TEXTURE);
        let have_asteroid_texture =
            asteroid_texture.is_file() && image::open(&asteroid_texture).is_ok();
        if !have_asteroid_texture {
            warn!(
                texture = ASTEROID_TEXTURE,
                "asteroid texture missing, belt renders with fallback color"
            );
        }
        for asteroid in orrery.asteroids() {
            let mut node = window.add_sphere(asteroid.display_radius);
            if have_asteroid_texture {
                node.set_texture_from_file(&asteroid_texture, ASTEROID_TEXTURE);
            } else {
                node.set_color(ASTEROID_COLOR.0, ASTEROID_COLOR.1, ASTEROID_COLOR.2);
            }
            asteroid_nodes.push(node);
        }

        let mut camera = ArcBall::new(Point3::from(CAMERA_START_EYE), Point3::origin());
        camera.set_min_dist(CAMERA_MIN_DIST);
        camera.set_max_dist(CAMERA_MAX_DIST);

        let mut view = Self {
            orrery,
            body_nodes,
            asteroid_nodes,
            _sun_node: sun_node,
            camera,
            rings: RingRenderer::new(),
        };
        view.sync_scene_nodes();
        view
    }

    fn create_body_object(window: &mut Window, body: &Body, texture_dir: &Path) -> SceneNode {
        let mut node = window.add_sphere(body.info.display_radius);
        match body.info.classification {
            // NEO markers always carry their classification color; a texture,
            // when the asset exists, is tinted by it.
            Some(classification) => {
                let color = classification.color();
                node.set_color(color.x, color.y, color.z);
                if let Some(file) = body.info.texture {
                    try_apply_texture(&mut node, texture_dir, file);
                }
            }
            None => {
                let textured = body
                    .info
                    .texture
                    .map(|file| try_apply_texture(&mut node, texture_dir, file))
                    .unwrap_or(false);
                if !textured {
                    let color = body.info.color;
                    node.set_color(color.x, color.y, color.z);
                }
            }
        }
        node
    }

    /// Advance the orrery by one frame and move the scene nodes into place.
    pub fn advance(&mut self, time_scale: f64) {
        self.orrery.advance(time_scale);
        self.sync_scene_nodes();
    }

    fn sync_scene_nodes(&mut self) {
        for (id, node) in self.body_nodes.iter_mut() {
            let body = self.orrery.get_body(*id);
            let position: Point3<f32> = nalgebra::convert(body.position());
            node.set_local_translation(Translation3::from(position.coords));

            let tilt = UnitQuaternion::from_axis_angle(
                &Vector3::z_axis(),
                body.info.axial_tilt_deg.to_radians() as f32,
            );
            let spin = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), body.spin as f32);
            node.set_local_rotation(tilt * spin);
        }

        for (asteroid, node) in self.orrery.asteroids().iter().zip(&mut self.asteroid_nodes) {
            let position: Point3<f32> = nalgebra::convert(asteroid.position());
            node.set_local_translation(Translation3::from(position.coords));
        }
    }

    /// Buffer the per-frame draw work that is not part of the scene graph:
    /// orbit ring markers and the overlay text.
    pub fn prerender(&mut self, window: &mut Window, overlay: &Overlay) {
        for body in self.orrery.bodies() {
            let color = match body.info.classification {
                Some(classification) => Point3::from(classification.color().coords * 0.35),
                None => Point3::new(
                    PLANET_RING_COLOR.0,
                    PLANET_RING_COLOR.1,
                    PLANET_RING_COLOR.2,
                ),
            };
            self.rings.draw_ring(body.info.orbital_radius as f32, color);
        }

        overlay.draw(window);
    }

    /// Resolve a click to the nearest pickable body. On a hit the camera is
    /// re-targeted to frame the body; on a miss nothing changes.
    pub fn pick_at(
        &mut self,
        cursor: Point2<f32>,
        window_size: Vector2<f32>,
    ) -> Option<SelectionSnapshot> {
        let ray = picking::cursor_ray(&self.camera, cursor, window_size);
        let id = picking::pick_body(&self.orrery, &ray)?;
        let snapshot = self.orrery.snapshot(id);
        self.focus_camera(&snapshot.position);
        Some(snapshot)
    }

    fn focus_camera(&mut self, position: &Point3<f64>) {
        let target: Point3<f32> = nalgebra::convert(*position);
        let dist = FOCUS_OFFSET_UP.hypot(FOCUS_OFFSET_BACK);
        self.camera.set_at(target);
        self.camera.set_dist(dist);
        // Eye ends up at the target plus (0, up, back).
        self.camera.set_yaw(std::f32::consts::FRAC_PI_2);
        self.camera.set_pitch((FOCUS_OFFSET_UP / dist).acos());
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.camera), None, Some(&mut self.rings), None)
    }
}

/// Apply a texture asset if the file exists and decodes; returns whether it
/// was applied. A missing or broken asset degrades to the caller's fallback
/// color. The engine's own loader panics on bad files, so the image is
/// validated before it is handed over.
fn try_apply_texture(node: &mut SceneNode, dir: &Path, file: &str) -> bool {
    let path: PathBuf = dir.join(file);
    if !path.is_file() {
        warn!(texture = file, "texture asset missing, using fallback color");
        return false;
    }
    match image::open(&path) {
        Ok(_) => {
            node.set_texture_from_file(&path, file);
            true
        }
        Err(err) => {
            warn!(texture = file, "texture asset unreadable ({err}), using fallback color");
            false
        }
    }
}
