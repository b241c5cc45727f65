use drishti_core::Tutorial;
use drishti_core::tutorial::{STEP_COUNT, STEPS, TutorialTransition};
use test_helpers::{FixedLocator, capture_logs, rect};
use tracing::Level;

#[test]
fn retreat_at_the_first_step_is_a_no_op() {
    let locator = FixedLocator::everywhere(rect(10.0, 10.0, 100.0, 40.0));
    let mut tutorial = Tutorial::default();
    tutorial.start(&locator);

    assert_eq!(tutorial.retreat(&locator), TutorialTransition::Unchanged);
    assert_eq!(tutorial.step(), 1);
    assert!(!tutorial.can_retreat());
}

#[test]
fn five_advances_reach_the_last_step_and_a_sixth_exits() {
    let locator = FixedLocator::everywhere(rect(10.0, 10.0, 100.0, 40.0));
    let mut tutorial = Tutorial::default();
    tutorial.start(&locator);

    for expected in 2..=STEP_COUNT {
        assert_eq!(
            tutorial.advance(&locator),
            TutorialTransition::Entered(expected)
        );
    }
    assert_eq!(tutorial.step(), 6);
    assert_eq!(tutorial.primary_label(), "Finish");
    assert_eq!(tutorial.highlight(), None);

    assert_eq!(tutorial.advance(&locator), TutorialTransition::Exited);
    assert!(!tutorial.is_visible());
    assert_eq!(tutorial.step(), 6);
    assert_eq!(tutorial.highlight(), None);
}

#[test]
fn each_step_frames_its_region_with_padding() {
    let locator = FixedLocator::default()
        .with(".sidebar", rect(0.0, 0.0, 280.0, 900.0))
        .with(".map-toolbar", rect(20.0, 400.0, 300.0, 50.0));
    let mut tutorial = Tutorial::default();

    tutorial.start(&locator);
    assert_eq!(tutorial.highlight(), Some(&rect(-10.0, -10.0, 300.0, 920.0)));

    tutorial.advance(&locator);
    assert_eq!(tutorial.highlight(), None, "upload section is not on screen");

    tutorial.advance(&locator);
    assert_eq!(tutorial.highlight(), Some(&rect(5.0, 385.0, 330.0, 80.0)));

    tutorial.retreat(&locator);
    assert_eq!(tutorial.step(), 2);
    assert_eq!(tutorial.highlight(), None);
}

#[test]
fn highlight_table_matches_the_dashboard_layout() {
    let targets: Vec<_> = STEPS
        .iter()
        .map(|step| {
            step.target
                .map(|target| (target.selector, target.parent, target.padding))
        })
        .collect();

    assert_eq!(
        targets,
        vec![
            Some((".sidebar", false, 10.0)),
            Some((".menu-section:first-of-type", false, 15.0)),
            Some((".map-toolbar", false, 15.0)),
            Some(("[data-tool=\"search\"]", true, 10.0)),
            Some((".menu-section:nth-of-type(2)", false, 15.0)),
            None,
        ]
    );
}

#[test]
fn search_step_frames_the_buttons_parent_group() {
    let button = rect(30.0, 500.0, 40.0, 40.0);
    let group = rect(25.0, 460.0, 90.0, 50.0);
    let locator = FixedLocator::default()
        .with("[data-tool=\"search\"]", button)
        .with_parent("[data-tool=\"search\"]", group);
    let mut tutorial = Tutorial::default();
    tutorial.start(&locator);
    for _ in 0..3 {
        tutorial.advance(&locator);
    }

    assert_eq!(tutorial.step(), 4);
    assert_eq!(tutorial.highlight(), Some(&rect(15.0, 450.0, 110.0, 70.0)));
}

#[test]
fn search_step_has_no_frame_without_the_parent_group() {
    let locator = FixedLocator::default()
        .with("[data-tool=\"search\"]", rect(30.0, 500.0, 40.0, 40.0));
    let mut tutorial = Tutorial::default();
    tutorial.start(&locator);
    for _ in 0..3 {
        tutorial.advance(&locator);
    }

    assert_eq!(tutorial.step(), 4);
    assert_eq!(tutorial.highlight(), None);
}

#[test]
fn progress_indicator_follows_the_step() {
    let locator = FixedLocator::default();
    let mut tutorial = Tutorial::default();
    tutorial.start(&locator);
    tutorial.advance(&locator);
    tutorial.advance(&locator);

    assert_eq!(tutorial.progress_label(), "3 / 6");
    assert_eq!(tutorial.primary_label(), "Next");
    let dots: Vec<bool> = tutorial.dots().collect();
    assert_eq!(dots, vec![false, false, true, false, false, false]);
}

#[test]
fn skip_hides_the_overlay_from_any_step() {
    let locator = FixedLocator::everywhere(rect(1.0, 1.0, 1.0, 1.0));
    let mut tutorial = Tutorial::default();
    tutorial.start(&locator);
    tutorial.advance(&locator);

    tutorial.skip();
    assert!(!tutorial.is_visible());
    assert_eq!(tutorial.highlight(), None);

    tutorial.start(&locator);
    assert_eq!(tutorial.step(), 1);
    assert!(tutorial.highlight().is_some());
}

#[test]
fn entering_a_step_is_logged_at_info() {
    let locator = FixedLocator::everywhere(rect(10.0, 10.0, 100.0, 40.0));
    let mut tutorial = Tutorial::default();

    let logs = capture_logs(Level::INFO, || {
        tutorial.start(&locator);
        tutorial.advance(&locator);
    });

    assert!(logs.contains("INFO"), "{logs}");
    assert!(logs.contains("tutorial step"), "{logs}");
    assert!(logs.contains("step=1"), "{logs}");
    assert!(logs.contains("step=2"), "{logs}");
}
