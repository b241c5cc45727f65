use drishti_core::geo::{Bounds, LatLng, compute_area};
use drishti_core::map::{AoiPanel, ClickOutcome, toggle_layer, toggle_measure};
use drishti_core::{DrishtiConfig, NoticeLevel};
use test_helpers::{SurfaceCall, init_test_logging, recording_controller};

#[test]
fn area_ignores_corner_order_and_sign() {
    let corners = [
        (LatLng::new(10.0, 10.0), LatLng::new(10.5, 10.6)),
        (LatLng::new(-33.2, 151.0), LatLng::new(-33.9, 151.4)),
        (LatLng::new(0.0, -0.3), LatLng::new(0.25, 0.3)),
        (LatLng::new(45.0, 7.0), LatLng::new(45.0, 9.0)),
    ];

    for (a, b) in corners {
        let area = compute_area(&Bounds::from_corners(a, b));
        let swapped = compute_area(&Bounds::from_corners(b, a));
        let negated = compute_area(&Bounds::from_corners(
            LatLng::new(-a.lat, -a.lng),
            LatLng::new(-b.lat, -b.lng),
        ));
        assert_eq!(area, swapped, "swap changed area for {a:?} {b:?}");
        assert_eq!(area, negated, "negation changed area for {a:?} {b:?}");
    }
}

#[test]
fn two_clicks_draw_a_valid_aoi() {
    init_test_logging();
    let mut controller = recording_controller();

    let hint = controller.toggle_draw_mode().expect("activation hint");
    assert_eq!(hint.level, NoticeLevel::Info);
    assert!(controller.surface().crosshair);

    assert_eq!(
        controller.handle_click(LatLng::new(10.0, 10.0)),
        ClickOutcome::AwaitingSecondCorner
    );
    let ClickOutcome::AoiCreated(aoi) =
        controller.handle_click(LatLng::new(10.5, 10.6))
    else {
        panic!("second click should create an AOI");
    };

    assert_eq!(aoi.area, 3630.0);
    assert!(aoi.is_valid());
    assert_eq!(aoi.area_label(), "3,630 sq. km");
    assert!(!controller.is_drawing());
    assert!(!controller.surface().crosshair);
    assert!(controller.surface().calls.contains(&SurfaceCall::FitBounds {
        bounds: aoi.bounds,
        padding_px: 50,
    }));
    assert_eq!(controller.panel(), AoiPanel::Selected(aoi));
}

#[test]
fn clicks_without_draw_mode_do_nothing() {
    let mut controller = recording_controller();
    assert_eq!(
        controller.handle_click(LatLng::new(1.0, 1.0)),
        ClickOutcome::Ignored
    );
    assert!(controller.surface().calls.is_empty());
    assert_eq!(controller.panel(), AoiPanel::Empty);
}

#[test]
fn a_new_aoi_replaces_the_old_one() {
    let mut controller = recording_controller();

    for corner in [LatLng::new(1.0, 1.0), LatLng::new(20.0, 20.0)] {
        controller.toggle_draw_mode();
        controller.handle_click(LatLng::new(0.0, 0.0));
        controller.handle_click(corner);
    }

    assert_eq!(controller.surface().rectangles_shown, 1);
    let current = controller.current().expect("an AOI");
    assert_eq!(current.bounds.north_east(), LatLng::new(20.0, 20.0));
    assert!(!current.is_valid());
    assert!(controller.surface().calls.contains(&SurfaceCall::ShowRectangle {
        bounds: current.bounds,
        color: "#ff006e",
    }));
}

#[test]
fn reset_view_clears_the_aoi_and_goes_home() {
    let mut controller = recording_controller();
    controller.toggle_draw_mode();
    controller.handle_click(LatLng::new(0.0, 0.0));
    controller.handle_click(LatLng::new(0.5, 0.5));

    controller.reset_view();

    assert_eq!(controller.current(), None);
    assert_eq!(controller.panel(), AoiPanel::Empty);
    assert_eq!(controller.surface().rectangles_shown, 0);
    assert_eq!(
        controller.surface().last_view(),
        Some(DrishtiConfig::default().map.home)
    );
}

#[test]
fn toggling_off_mid_draw_discards_the_first_corner() {
    let mut controller = recording_controller();
    controller.toggle_draw_mode();
    controller.handle_click(LatLng::new(3.0, 3.0));
    assert_eq!(controller.toggle_draw_mode(), None);

    controller.toggle_draw_mode();
    assert_eq!(
        controller.handle_click(LatLng::new(4.0, 4.0)),
        ClickOutcome::AwaitingSecondCorner
    );
}

#[test]
fn zoom_and_placeholder_tools() {
    let mut controller = recording_controller();
    controller.zoom_in();
    controller.zoom_out();
    assert_eq!(
        controller.surface().calls,
        vec![SurfaceCall::ZoomIn, SurfaceCall::ZoomOut]
    );

    assert_eq!(toggle_layer().message, "Layer switching coming soon!");
    assert_eq!(toggle_measure().level, NoticeLevel::Info);
}
