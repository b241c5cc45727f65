//! Geographic primitives and the approximate AOI area model.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Square kilometres per square degree used by the area estimate.
///
/// This is a flat-earth scale, not a geodesic area. It overstates areas away
/// from the reference latitude and is kept because the dashboard only needs
/// a coarse size check.
pub const SQ_KM_PER_SQUARE_DEGREE: f64 = 12_100.0;
pub const MIN_AOI_SQ_KM: f64 = 1.0;
pub const MAX_AOI_SQ_KM: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An axis-aligned rectangle, always stored with `south_west <= north_east`.
///
/// [`Bounds::from_corners`] is the only constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    south_west: LatLng,
    north_east: LatLng,
}

impl Bounds {
    /// Builds bounds from two opposite corners given in any order.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    pub fn south_west(&self) -> LatLng {
        self.south_west
    }

    pub fn north_east(&self) -> LatLng {
        self.north_east
    }

    pub fn lat_span(&self) -> f64 {
        (self.north_east.lat - self.south_west.lat).abs()
    }

    pub fn lng_span(&self) -> f64 {
        (self.north_east.lng - self.south_west.lng).abs()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4}, {:.4} to {:.4}, {:.4}",
            self.south_west.lat,
            self.south_west.lng,
            self.north_east.lat,
            self.north_east.lng
        )
    }
}

/// A map centre and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
}

impl Viewport {
    pub const fn new(lat: f64, lng: f64, zoom: u8) -> Self {
        Self {
            center: LatLng::new(lat, lng),
            zoom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AoiStatus {
    #[display("Valid")]
    Valid,
    #[display("Invalid")]
    Invalid,
}

impl AoiStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Stroke colour of the rectangle on the map.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Valid => "#06ffa5",
            Self::Invalid => "#ff006e",
        }
    }
}

/// The area estimate and the accepted size range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaRules {
    pub sq_km_per_square_degree: f64,
    pub min_sq_km: f64,
    pub max_sq_km: f64,
}

impl Default for AreaRules {
    fn default() -> Self {
        Self {
            sq_km_per_square_degree: SQ_KM_PER_SQUARE_DEGREE,
            min_sq_km: MIN_AOI_SQ_KM,
            max_sq_km: MAX_AOI_SQ_KM,
        }
    }
}

impl AreaRules {
    /// Whole square kilometres covered by `bounds`.
    pub fn area(&self, bounds: &Bounds) -> f64 {
        (bounds.lat_span() * bounds.lng_span() * self.sq_km_per_square_degree)
            .round()
    }

    /// The accepted range as shown to users, e.g. `1 and 10,000 sq. km`.
    pub fn range_label(&self) -> String {
        format!(
            "{} and {} sq. km",
            group_thousands(self.min_sq_km.round() as i64),
            group_thousands(self.max_sq_km.round() as i64)
        )
    }

    pub fn classify(&self, area: f64) -> AoiStatus {
        if area >= self.min_sq_km && area <= self.max_sq_km {
            AoiStatus::Valid
        } else {
            AoiStatus::Invalid
        }
    }
}

pub fn compute_area(bounds: &Bounds) -> f64 {
    AreaRules::default().area(bounds)
}

pub fn classify_aoi(area: f64) -> AoiStatus {
    AreaRules::default().classify(area)
}

/// A drawn area of interest with its derived size and status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aoi {
    pub bounds: Bounds,
    pub area: f64,
    pub status: AoiStatus,
}

impl Aoi {
    pub fn new(bounds: Bounds, rules: &AreaRules) -> Self {
        let area = rules.area(&bounds);
        Self {
            bounds,
            area,
            status: rules.classify(area),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    /// Area with thousands separators, e.g. `12,345 sq. km`.
    pub fn area_label(&self) -> String {
        format!("{} sq. km", group_thousands(self.area.round() as i64))
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}
