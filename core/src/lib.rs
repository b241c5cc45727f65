//! Domain logic for the Mission Drishti AOI dashboard.
//!
//! Everything here is plain Rust with no DOM access, so the browser app in
//! `drishti-ui` stays a thin event-binding layer and every rule can be tested
//! natively. Browser collaborators (the Leaflet map, DOM measurement, timers)
//! enter through the [`MapSurface`], [`RegionLocator`] and [`Timer`] traits.

pub mod clock;
pub mod config;
pub mod draw;
pub mod error;
pub mod geo;
pub mod login;
pub mod map;
pub mod notice;
pub mod registration;
pub mod search;
pub mod session;
pub mod time;
pub mod tutorial;
pub mod upload;

pub use config::DrishtiConfig;
pub use error::{ConfigError, DrishtiError};
pub use geo::{Aoi, AoiStatus, AreaRules, Bounds, LatLng, Viewport};
pub use login::{LoginMachine, LoginRules, LoginState};
pub use map::{AoiPanel, MapController, MapSurface};
pub use notice::{Notice, NoticeLevel};
pub use registration::{Registration, RegistrationRules};
pub use session::{Dialog, Screen, ScreenEffect, Session};
pub use time::Timer;
pub use tutorial::{RegionLocator, Tutorial};
