use drishti_core::session::{Dialog, Screen, ScreenEffect};
use drishti_core::{DrishtiError, LoginState, Registration, Session};
use std::time::Duration;
use test_helpers::{FixedLocator, assert_rejected, rect};

#[test]
fn first_dashboard_entry_starts_the_tutorial_once() {
    let mut session = Session::default();

    let effects = session.show_screen(Screen::Dashboard);
    assert_eq!(
        effects,
        vec![
            ScreenEffect::InitMap {
                after: Duration::from_millis(100)
            },
            ScreenEffect::StartTutorial {
                after: Duration::from_millis(800)
            },
        ]
    );

    session.show_screen(Screen::Login);
    let effects = session.show_screen(Screen::Dashboard);
    assert_eq!(
        effects,
        vec![ScreenEffect::InitMap {
            after: Duration::from_millis(100)
        }]
    );
}

#[test]
fn logout_resets_attempts_and_rearms_the_tutorial() -> anyhow::Result<()> {
    let mut session = Session::default();
    for _ in 0..3 {
        session.submit_login(true)?;
    }
    assert_eq!(session.login().state(), LoginState::Succeeded);
    session.show_screen(Screen::Dashboard);
    session.start_tutorial(&FixedLocator::everywhere(rect(0.0, 0.0, 1.0, 1.0)));

    session.logout();

    assert_eq!(session.screen(), Screen::Login);
    assert_eq!(session.login().attempts(), 0);
    assert!(!session.tutorial().is_visible());
    let effects = session.show_screen(Screen::Dashboard);
    assert!(effects
        .iter()
        .any(|e| matches!(e, ScreenEffect::StartTutorial { .. })));

    Ok(())
}

#[test]
fn lockout_survives_until_logout() -> anyhow::Result<()> {
    let mut session = Session::default();
    for _ in 0..4 {
        session.submit_login(true)?;
    }
    assert_rejected(session.submit_login(true), DrishtiError::AccountLocked);

    session.logout();
    assert_eq!(session.submit_login(true)?, LoginState::Attempting(1));

    Ok(())
}

#[test]
fn registration_opens_the_confirmation_then_returns_to_login() -> anyhow::Result<()> {
    let mut session = Session::default();
    session.show_screen(Screen::Register);

    session.register(&Registration {
        full_name: "Kalpana Chawla".into(),
        email: "kc@isro.gov.in".into(),
        consent: true,
        subscriptions: vec!["Optical Imagery".into()],
    })?;
    assert_eq!(session.dialog(), Some(Dialog::RegistrationComplete));

    session.finish_registration();
    assert_eq!(session.dialog(), None);
    assert_eq!(session.screen(), Screen::Login);

    Ok(())
}

#[test]
fn rejected_registration_keeps_the_form_open() {
    let mut session = Session::default();
    session.show_screen(Screen::Register);

    assert_rejected(
        session.register(&Registration {
            full_name: "Kalpana Chawla".into(),
            email: "kc@gmail.com".into(),
            consent: true,
            subscriptions: vec!["Optical Imagery".into()],
        }),
        DrishtiError::DisallowedEmailDomain,
    );
    assert_eq!(session.dialog(), None);
    assert_eq!(session.screen(), Screen::Register);
}

#[test]
fn tutorial_restarts_from_the_first_step() {
    let locator = FixedLocator::default();
    let mut session = Session::default();
    session.start_tutorial(&locator);
    session.advance_tutorial(&locator);
    session.advance_tutorial(&locator);
    session.skip_tutorial();

    session.start_tutorial(&locator);
    assert_eq!(session.tutorial().step(), 1);
    assert!(session.tutorial().is_visible());
}
