//! The AOI map controller.
//!
//! [`MapController`] is the only thing that touches the map. It owns the
//! drawing session and the current AOI, and pushes every visible change
//! through a [`MapSurface`].

use serde::{Deserialize, Serialize};

use crate::draw::{DrawSession, DrawStep};
use crate::geo::{Aoi, AreaRules, Bounds, LatLng, Viewport};
use crate::notice::Notice;

pub const DARK_TILES_URL: &str =
    "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub home: Viewport,
    pub fit_padding_px: u32,
    pub tile_url: String,
    pub tile_subdomains: String,
    pub max_zoom: u8,
    pub attribution_prefix: String,
    /// Delay between entering the dashboard and creating the map, so the
    /// container has been laid out.
    pub init_delay_ms: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            home: Viewport::new(20.0, 0.0, 2),
            fit_padding_px: 50,
            tile_url: DARK_TILES_URL.to_string(),
            tile_subdomains: "abcd".to_string(),
            max_zoom: 18,
            attribution_prefix: "GalaxEye Space".to_string(),
            init_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleStyle {
    pub color: &'static str,
    pub weight: u8,
    pub fill_opacity: f64,
}

impl RectangleStyle {
    pub fn for_aoi(aoi: &Aoi) -> Self {
        Self {
            color: aoi.status.color(),
            weight: 3,
            fill_opacity: 0.2,
        }
    }
}

/// The slippy map as seen by the controller.
pub trait MapSurface {
    fn set_view(&mut self, viewport: Viewport);
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
    /// Draws the AOI rectangle. At most one is shown; the controller clears
    /// the previous one first.
    fn show_rectangle(&mut self, bounds: &Bounds, style: &RectangleStyle);
    fn clear_rectangle(&mut self);
    fn fit_bounds(&mut self, bounds: &Bounds, padding_px: u32);
    fn set_crosshair(&mut self, enabled: bool);
}

/// Contents of the AOI info panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AoiPanel {
    #[default]
    Empty,
    Selected(Aoi),
}

impl AoiPanel {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Empty => "info-box glass-effect",
            Self::Selected(aoi) if aoi.is_valid() => {
                "info-box glass-effect valid"
            }
            Self::Selected(_) => "info-box glass-effect invalid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    Ignored,
    AwaitingSecondCorner,
    AoiCreated(Aoi),
}

pub struct MapController<S: MapSurface> {
    surface: S,
    session: DrawSession,
    current: Option<Aoi>,
    rules: AreaRules,
    settings: MapSettings,
}

impl<S: MapSurface> MapController<S> {
    pub fn new(surface: S, rules: AreaRules, settings: MapSettings) -> Self {
        Self {
            surface,
            session: DrawSession::default(),
            current: None,
            rules,
            settings,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn current(&self) -> Option<&Aoi> {
        self.current.as_ref()
    }

    pub fn panel(&self) -> AoiPanel {
        self.current.map_or(AoiPanel::Empty, AoiPanel::Selected)
    }

    pub fn is_drawing(&self) -> bool {
        self.session.is_active()
    }

    /// Returns a hint when draw mode was switched on.
    pub fn toggle_draw_mode(&mut self) -> Option<Notice> {
        let active = self.session.toggle();
        self.surface.set_crosshair(active);
        tracing::debug!(active, "draw mode toggled");
        active.then(|| {
            Notice::info("Draw Mode: Click twice to create a rectangle")
        })
    }

    pub fn handle_click(&mut self, point: LatLng) -> ClickOutcome {
        match self.session.click(point) {
            DrawStep::Ignored => ClickOutcome::Ignored,
            DrawStep::Started(_) => ClickOutcome::AwaitingSecondCorner,
            DrawStep::Completed(bounds) => {
                self.surface.set_crosshair(false);
                ClickOutcome::AoiCreated(self.place_aoi(bounds))
            }
        }
    }

    /// Replaces the current AOI and frames it.
    pub fn place_aoi(&mut self, bounds: Bounds) -> Aoi {
        if self.current.take().is_some() {
            self.surface.clear_rectangle();
        }
        let aoi = Aoi::new(bounds, &self.rules);
        self.surface
            .show_rectangle(&aoi.bounds, &RectangleStyle::for_aoi(&aoi));
        self.surface
            .fit_bounds(&aoi.bounds, self.settings.fit_padding_px);
        tracing::info!(
            area = aoi.area,
            valid = aoi.is_valid(),
            bounds = %aoi.bounds,
            "AOI selected"
        );
        self.current = Some(aoi);
        aoi
    }

    /// Drops the AOI and returns to the home viewport.
    pub fn reset_view(&mut self) {
        self.surface.set_view(self.settings.home);
        if self.current.take().is_some() {
            self.surface.clear_rectangle();
        }
    }

    pub fn recenter(&mut self, viewport: Viewport) {
        self.surface.set_view(viewport);
    }

    pub fn zoom_in(&mut self) {
        self.surface.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.surface.zoom_out();
    }
}

pub fn toggle_layer() -> Notice {
    Notice::info("Layer switching coming soon!")
}

pub fn toggle_measure() -> Notice {
    Notice::info("Measurement tool coming soon!")
}
