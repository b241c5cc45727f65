mod dialogs;
mod login;
mod map;
mod registration;
mod session;
mod tutorial;

use drishti_core::DrishtiConfig;
use drishti_core::geo::{AoiStatus, Bounds, LatLng, compute_area};

#[test]
fn default_config_matches_the_demo() {
    let config = DrishtiConfig::default();
    assert_eq!(config.login.success_attempt, 3);
    assert_eq!(config.login.lock_attempt, 4);
    assert_eq!(config.map.home.zoom, 2);
    assert_eq!(config.search.target.center, LatLng::new(28.6139, 77.2090));
}

#[test]
fn drawn_scenario_is_valid() {
    let bounds =
        Bounds::from_corners(LatLng::new(10.0, 10.0), LatLng::new(10.5, 10.6));
    let area = compute_area(&bounds);
    assert_eq!(area, 3630.0);
    assert_eq!(
        drishti_core::geo::classify_aoi(area),
        AoiStatus::Valid
    );
}
