use kiss3d::text::Font;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3};

use crate::feed::NeoRecord;
use crate::model::SelectionSnapshot;

pub const TIME_SCALE_DEFAULT: f64 = 1.0;
pub const TIME_SCALE_STEP: f64 = 0.5;
pub const TIME_SCALE_FLOOR: f64 = 0.1;

const TEXT_SIZE: f32 = 46.0;
const TEXT_COLOR: (f32, f32, f32) = (1.0, 1.0, 1.0);

/// The fixed set of informational tabs on the info card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTab {
    Asteroids,
    Phos,
    Neos,
}

impl InfoTab {
    pub const ALL: [InfoTab; 3] = [InfoTab::Asteroids, InfoTab::Phos, InfoTab::Neos];

    pub fn title(self) -> &'static str {
        match self {
            InfoTab::Asteroids => "Asteroids",
            InfoTab::Phos => "PHOs",
            InfoTab::Neos => "NEOs",
        }
    }

    fn text(self) -> &'static str {
        match self {
            InfoTab::Asteroids => {
                "Asteroids and comets are remnants left over from the early\n\
                 formation of our solar system 4.6 billion years ago. Asteroids\n\
                 are mostly rocky bodies that formed closer to the Sun than\n\
                 Jupiter, while comets formed farther from the Sun and contain\n\
                 substantial amounts of frozen ices. The vast majority of these\n\
                 small bodies are asteroids, and most of them reside within the\n\
                 main belt, between the orbits of Mars and Jupiter.\n\
                 \n\
                 The current number of known asteroids in the entire solar\n\
                 system is: 1,362,002"
            }
            InfoTab::Phos => {
                "Some asteroids will inevitably approach Earth, and these are\n\
                 tracked by NASA. The Center for Near-Earth Object Studies\n\
                 (CNEOS) computes the orbits of asteroids and comets and their\n\
                 odds of impacting Earth. The orbits of all asteroids seen here\n\
                 are publicly available from NASA's Solar System Dynamics (SSD)\n\
                 group."
            }
            InfoTab::Neos => {
                "NEOs are small Solar System bodies that orbit the sun and come\n\
                 within 1.3 times the distance between the Earth and the sun.\n\
                 NEOs are formed when nearby planets' gravitational pull nudges\n\
                 asteroids and comets into orbits that bring them close to\n\
                 Earth."
            }
        }
    }
}

/// UI-facing state: the time scale, the info card, the active tab, and the
/// current selection. Nothing outside the user-facing controls mutates this;
/// picking only ever writes the selection.
pub struct Overlay {
    time_scale: f64,
    visible: bool,
    active_tab: InfoTab,
    selection: Option<SelectionSnapshot>,
    feed: Option<Vec<NeoRecord>>,
}

impl Overlay {
    pub fn new() -> Self {
        Overlay {
            time_scale: TIME_SCALE_DEFAULT,
            visible: false,
            active_tab: InfoTab::ALL[0],
            selection: None,
            feed: None,
        }
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn increase_speed(&mut self) {
        self.time_scale += TIME_SCALE_STEP;
    }

    pub fn decrease_speed(&mut self) {
        self.time_scale = (self.time_scale - TIME_SCALE_STEP).max(TIME_SCALE_FLOOR);
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn active_tab(&self) -> InfoTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: InfoTab) {
        self.active_tab = tab;
    }

    pub fn selection(&self) -> Option<&SelectionSnapshot> {
        self.selection.as_ref()
    }

    pub fn set_selection(&mut self, snapshot: SelectionSnapshot) {
        self.selection = Some(snapshot);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// One-shot: stores the background feed result for the NEO tab.
    pub fn set_feed(&mut self, records: Vec<NeoRecord>) {
        self.feed = Some(records);
    }

    pub fn draw(&self, window: &mut Window) {
        let font = Font::default();
        let color = Point3::new(TEXT_COLOR.0, TEXT_COLOR.1, TEXT_COLOR.2);

        if let Some(snapshot) = &self.selection {
            window.draw_text(
                &selection_text(snapshot),
                &Point2::origin(),
                TEXT_SIZE,
                &font,
                &color,
            );
        }

        // draw_text coordinates are framebuffer pixels, hence the factor 2
        // on window dimensions (same oddity the scene text has always had).
        window.draw_text(
            &self.controls_text(),
            &Point2::new(0.0, window.height() as f32 * 2.0 - 300.0),
            TEXT_SIZE,
            &font,
            &color,
        );

        if self.visible {
            window.draw_text(
                &self.info_card_text(),
                &Point2::new(window.width() as f32 * 2.0 - 1400.0, 0.0),
                TEXT_SIZE,
                &font,
                &color,
            );
        }
    }

    fn controls_text(&self) -> String {
        format!(
            "Time scale: {:.1}\n\
             [.] speed up  [,] slow down\n\
             [I] toggle info card  [1/2/3] info tab\n\
             [X] dismiss selection\n\
             click a body to inspect it",
            self.time_scale,
        )
    }

    fn info_card_text(&self) -> String {
        let tabs: Vec<String> = InfoTab::ALL
            .iter()
            .map(|tab| {
                if *tab == self.active_tab {
                    format!("[{}]", tab.title())
                } else {
                    format!(" {} ", tab.title())
                }
            })
            .collect();

        let mut text = format!("{}\n\n{}", tabs.join("  "), self.active_tab.text());
        if self.active_tab == InfoTab::Neos {
            if let Some(summary) = self.feed_summary() {
                text.push_str("\n\n");
                text.push_str(&summary);
            }
        }
        text
    }

    fn feed_summary(&self) -> Option<String> {
        let records = self.feed.as_ref()?;
        let hazardous = records.iter().filter(|r| r.potentially_hazardous).count();
        let mut summary = format!(
            "Live feed: {} objects in the current window, {} potentially hazardous.",
            records.len(),
            hazardous,
        );
        if !records.is_empty() {
            let names: Vec<&str> = records.iter().take(4).map(|r| r.name.as_str()).collect();
            summary.push_str("\nIncluding: ");
            summary.push_str(&names.join(", "));
        }
        Some(summary)
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

fn selection_text(snapshot: &SelectionSnapshot) -> String {
    let mut text = format!("{}\n{}", snapshot.name, snapshot.description);
    if let Some(classification) = snapshot.classification {
        text.push_str(&format!("\nClassification: {}", classification.label()));
    }
    text.push_str(&format!("\nDistance from Sun: {} AU", snapshot.orbital_radius));
    if let Some(diameter) = snapshot.diameter_km {
        text.push_str(&format!("\nDiameter: {diameter} km"));
    }
    if let Some(period) = snapshot.orbital_period_days {
        text.push_str(&format!("\nOrbital Period: {period} days"));
    }
    if let Some(moons) = snapshot.moons {
        text.push_str(&format!("\nNumber of Moons: {moons}"));
    }
    text.push_str(&format!(
        "\nCoordinates: x: {:.2}, y: {:.2}, z: {:.2}",
        snapshot.position.x, snapshot.position.y, snapshot.position.z,
    ));
    text
}
