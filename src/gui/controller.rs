use kiss3d::event::{Action, Event, Key, MouseButton, WindowEvent};
use nalgebra::Point2;

use super::overlay::{InfoTab, Overlay};

// Key config, all in one place
const KEY_SPEED_UP: Key = Key::Period;
const KEY_SLOW_DOWN: Key = Key::Comma;
const KEY_TOGGLE_CARD: Key = Key::I;
const KEY_TAB_ASTEROIDS: Key = Key::Key1;
const KEY_TAB_PHOS: Key = Key::Key2;
const KEY_TAB_NEOS: Key = Key::Key3;
const KEY_DISMISS_SELECTION: Key = Key::X;

/// Turns window events into overlay operations, and remembers where the
/// cursor was so a click can be resolved into a pick by the simulation step
/// (which has the window and the camera at hand).
pub struct Controller {
    last_cursor_pos: Point2<f32>,
    pending_click: Option<Point2<f32>>,
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            last_cursor_pos: Point2::origin(),
            pending_click: None,
        }
    }

    pub fn process_event(&mut self, event: Event, overlay: &mut Overlay) {
        match event.value {
            WindowEvent::CursorPos(x, y, _) => {
                self.last_cursor_pos = Point2::new(x as f32, y as f32);
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                self.pending_click = Some(self.last_cursor_pos);
            }
            WindowEvent::Key(KEY_SPEED_UP, Action::Press, _) => {
                overlay.increase_speed();
            }
            WindowEvent::Key(KEY_SLOW_DOWN, Action::Press, _) => {
                overlay.decrease_speed();
            }
            WindowEvent::Key(KEY_TOGGLE_CARD, Action::Press, _) => {
                overlay.toggle_visible();
            }
            WindowEvent::Key(KEY_TAB_ASTEROIDS, Action::Press, _) => {
                overlay.select_tab(InfoTab::Asteroids);
            }
            WindowEvent::Key(KEY_TAB_PHOS, Action::Press, _) => {
                overlay.select_tab(InfoTab::Phos);
            }
            WindowEvent::Key(KEY_TAB_NEOS, Action::Press, _) => {
                overlay.select_tab(InfoTab::Neos);
            }
            WindowEvent::Key(KEY_DISMISS_SELECTION, Action::Press, _) => {
                overlay.clear_selection();
            }
            _ => {}
        }
    }

    /// The cursor position of a click seen since the last call, if any.
    pub fn take_pending_click(&mut self) -> Option<Point2<f32>> {
        self.pending_click.take()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
