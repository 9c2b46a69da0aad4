use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};
use nalgebra::Vector2;
use std::path::Path;
use tracing::info;

use self::controller::Controller;
use self::overlay::Overlay;
use self::view::View;
use crate::feed::FeedHandle;
use crate::model::Orrery;

mod controller;
pub mod overlay;
pub mod picking;
mod rings;
mod view;

pub struct Simulation {
    view: View,
    overlay: Overlay,
    controller: Controller,
    feed: FeedHandle,
}

impl Simulation {
    pub fn new(orrery: Orrery, feed: FeedHandle, window: &mut Window, texture_dir: &Path) -> Self {
        Self {
            view: View::new(orrery, window, texture_dir),
            overlay: Overlay::new(),
            controller: Controller::new(),
            feed,
        }
    }

    fn process_user_input(&mut self, window: &mut Window) {
        for event in window.events().iter() {
            self.controller.process_event(event, &mut self.overlay);
        }

        // Clicks are resolved here rather than in the controller: picking
        // needs the camera and the window size. Only the selection is ever
        // written; a miss leaves it untouched.
        if let Some(cursor) = self.controller.take_pending_click() {
            let size = Vector2::new(window.size().x as f32, window.size().y as f32);
            if let Some(snapshot) = self.view.pick_at(cursor, size) {
                self.overlay.set_selection(snapshot);
            }
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.view.cameras_and_effect_and_renderer()
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window);

        if let Some(records) = self.feed.poll() {
            info!(count = records.len(), "near-Earth-object feed loaded");
            self.overlay.set_feed(records);
        }

        // The scene advances unconditionally, at whatever scale the overlay
        // holds right now.
        self.view.advance(self.overlay.time_scale());
        self.view.prerender(window, &self.overlay);
    }
}
