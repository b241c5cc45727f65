use drishti_core::login::{LoginProgress, play_success};
use drishti_core::{DrishtiError, LoginMachine, LoginRules, LoginState};
use std::time::Duration;
use test_helpers::{MockTimer, assert_rejected};

#[test]
fn missing_consent_never_counts() {
    let mut machine = LoginMachine::new(LoginRules::default());

    for _ in 0..5 {
        assert_rejected(machine.submit(false), DrishtiError::MissingConsent);
    }
    assert_eq!(machine.attempts(), 0);
    assert_eq!(machine.state(), LoginState::Idle);
}

#[test]
fn third_attempt_succeeds_and_fourth_locks() -> anyhow::Result<()> {
    let mut machine = LoginMachine::new(LoginRules::default());

    assert_eq!(machine.submit(true)?, LoginState::Attempting(1));
    assert_rejected(machine.submit(false), DrishtiError::MissingConsent);
    assert_eq!(machine.submit(true)?, LoginState::Attempting(2));
    assert_eq!(machine.submit(true)?, LoginState::Succeeded);
    assert!(!machine.controls_disabled());

    assert_eq!(machine.submit(true)?, LoginState::Locked);
    assert!(machine.controls_disabled());
    assert_eq!(machine.attempts(), 4);

    Ok(())
}

#[test]
fn locked_form_rejects_everything_until_reset() -> anyhow::Result<()> {
    let mut machine = LoginMachine::new(LoginRules::default());
    for _ in 0..4 {
        machine.submit(true)?;
    }

    assert_rejected(machine.submit(true), DrishtiError::AccountLocked);
    assert_rejected(machine.submit(false), DrishtiError::AccountLocked);
    assert_eq!(machine.attempts(), 4);

    machine.reset();
    assert_eq!(machine.attempts(), 0);
    assert_eq!(machine.state(), LoginState::Idle);
    assert!(!machine.controls_disabled());
    assert_eq!(machine.submit(true)?, LoginState::Attempting(1));

    Ok(())
}

#[test]
fn attempts_increase_monotonically() -> anyhow::Result<()> {
    let mut machine = LoginMachine::new(LoginRules {
        success_attempt: 50,
        lock_attempt: 100,
        ..LoginRules::default()
    });

    let mut previous = machine.attempts();
    for consent in [true, false, true, true, false, true] {
        let _ = machine.submit(consent);
        assert!(machine.attempts() >= previous);
        previous = machine.attempts();
    }
    assert_eq!(machine.attempts(), 4);

    Ok(())
}

#[tokio::test]
async fn success_plays_confirm_then_redirect() -> anyhow::Result<()> {
    let timer = MockTimer::new();
    let rules = LoginRules::default();
    let mut progress = Vec::new();

    play_success(&timer, &rules, |step| progress.push(step)).await;

    assert_eq!(
        progress,
        vec![LoginProgress::Confirmed, LoginProgress::Redirect]
    );
    assert_eq!(
        timer.slept(),
        vec![Duration::from_millis(500), Duration::from_millis(1000)]
    );

    Ok(())
}
