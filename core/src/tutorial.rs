//! The onboarding walkthrough shown on the first dashboard visit.
//!
//! A strictly linear six-step machine. Each step may frame one region of the
//! dashboard; which region, and how much breathing room it gets, comes from
//! the [`STEPS`] table.

use serde::{Deserialize, Serialize};

pub const STEP_COUNT: u8 = 6;

/// A dashboard region to frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightTarget {
    pub selector: &'static str,
    /// Frame the matched element's parent instead of the element itself.
    pub parent: bool,
    pub padding: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepCard {
    pub title: &'static str,
    pub body: &'static str,
    pub target: Option<HighlightTarget>,
}

const fn region(selector: &'static str, padding: f64) -> Option<HighlightTarget> {
    Some(HighlightTarget {
        selector,
        parent: false,
        padding,
    })
}

pub static STEPS: [StepCard; STEP_COUNT as usize] = [
    StepCard {
        title: "Welcome to Mission Drishti",
        body: "This short tour shows how to select an Area of Interest \
               for satellite tasking.",
        target: region(".sidebar", 10.0),
    },
    StepCard {
        title: "Upload an AOI",
        body: "Upload a KML, KMZ, GeoJSON, JSON, TXT or zipped Shapefile \
               describing your area.",
        target: region(".menu-section:first-of-type", 15.0),
    },
    StepCard {
        title: "Draw an AOI",
        body: "Pick the draw tool, then click two opposite corners on the \
               map. Areas between 1 and 10,000 sq. km are accepted.",
        target: region(".map-toolbar", 15.0),
    },
    StepCard {
        title: "Search a Location",
        body: "Jump to a place by name before drawing.",
        target: Some(HighlightTarget {
            selector: "[data-tool=\"search\"]",
            parent: true,
            padding: 10.0,
        }),
    },
    StepCard {
        title: "Map Controls",
        body: "Zoom, reset the view or switch layers from here.",
        target: region(".menu-section:nth-of-type(2)", 15.0),
    },
    StepCard {
        title: "You're all set!",
        body: "Select your first AOI to get started.",
        target: None,
    },
];

/// An on-screen box in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    /// Grows the box by `padding` on every side.
    pub fn padded(&self, padding: f64) -> Self {
        Self {
            top: self.top - padding,
            left: self.left - padding,
            width: self.width + padding * 2.0,
            height: self.height + padding * 2.0,
        }
    }

    /// Inline style placing a fixed-position frame over this box.
    pub fn to_style(&self) -> String {
        format!(
            "top: {}px; left: {}px; width: {}px; height: {}px;",
            self.top, self.left, self.width, self.height
        )
    }
}

/// Measures dashboard regions.
pub trait RegionLocator {
    fn locate(&self, target: &HighlightTarget) -> Option<ClientRect>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialTransition {
    Entered(u8),
    Exited,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tutorial {
    step: u8,
    visible: bool,
    highlight: Option<ClientRect>,
}

impl Default for Tutorial {
    fn default() -> Self {
        Self {
            step: 1,
            visible: false,
            highlight: None,
        }
    }
}

impl Tutorial {
    pub fn start(&mut self, locator: &impl RegionLocator) {
        self.visible = true;
        self.enter(1, locator);
    }

    pub fn advance(&mut self, locator: &impl RegionLocator) -> TutorialTransition {
        if !self.visible {
            return TutorialTransition::Unchanged;
        }
        if self.step < STEP_COUNT {
            self.enter(self.step + 1, locator);
            TutorialTransition::Entered(self.step)
        } else {
            self.skip();
            TutorialTransition::Exited
        }
    }

    pub fn retreat(&mut self, locator: &impl RegionLocator) -> TutorialTransition {
        if !self.visible || self.step <= 1 {
            return TutorialTransition::Unchanged;
        }
        self.enter(self.step - 1, locator);
        TutorialTransition::Entered(self.step)
    }

    /// Closes the overlay from any step.
    pub fn skip(&mut self) {
        self.highlight = None;
        self.visible = false;
        tracing::info!(step = self.step, "tutorial closed");
    }

    fn enter(&mut self, step: u8, locator: &impl RegionLocator) {
        self.step = step;
        self.highlight = self
            .card()
            .target
            .and_then(|target| {
                locator
                    .locate(&target)
                    .map(|rect| rect.padded(target.padding))
            });
        tracing::info!(step, highlighted = self.highlight.is_some(), "tutorial step");
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn highlight(&self) -> Option<&ClientRect> {
        self.highlight.as_ref()
    }

    pub fn card(&self) -> &'static StepCard {
        &STEPS[usize::from(self.step - 1)]
    }

    pub fn can_retreat(&self) -> bool {
        self.step > 1
    }

    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.step, STEP_COUNT)
    }

    pub fn primary_label(&self) -> &'static str {
        if self.step == STEP_COUNT { "Finish" } else { "Next" }
    }

    /// One flag per progress dot, set for the current step.
    pub fn dots(&self) -> impl Iterator<Item = bool> + '_ {
        (1..=STEP_COUNT).map(move |step| step == self.step)
    }
}
