use drishti_core::{DrishtiError, Registration, RegistrationRules};
use test_helpers::assert_rejected;

fn valid_form() -> Registration {
    Registration {
        full_name: "John Doe".into(),
        email: "a@company.com".into(),
        consent: true,
        subscriptions: vec!["SAR Imagery".into()],
    }
}

#[test]
fn valid_form_passes() -> anyhow::Result<()> {
    valid_form().validate(&RegistrationRules::default())?;
    Ok(())
}

#[test]
fn name_with_digits_is_rejected() {
    let form = Registration {
        full_name: "John123".into(),
        ..valid_form()
    };
    assert_rejected(
        form.validate(&RegistrationRules::default()),
        DrishtiError::InvalidName,
    );
}

#[test]
fn unknown_domain_is_rejected() {
    let form = Registration {
        email: "a@other.com".into(),
        ..valid_form()
    };
    assert_rejected(
        form.validate(&RegistrationRules::default()),
        DrishtiError::DisallowedEmailDomain,
    );
}

#[test]
fn consent_is_required_even_when_the_rest_is_valid() {
    let form = Registration {
        consent: false,
        ..valid_form()
    };
    assert_rejected(
        form.validate(&RegistrationRules::default()),
        DrishtiError::MissingConsent,
    );
}

#[test]
fn at_least_one_subscription() {
    let form = Registration {
        subscriptions: Vec::new(),
        ..valid_form()
    };
    assert_rejected(
        form.validate(&RegistrationRules::default()),
        DrishtiError::NoSubscriptionSelected,
    );
}

#[test]
fn first_failure_wins() {
    let form = Registration {
        full_name: "R2D2".into(),
        email: "nobody".into(),
        consent: false,
        subscriptions: Vec::new(),
    };
    assert_rejected(
        form.validate(&RegistrationRules::default()),
        DrishtiError::InvalidName,
    );

    let form = Registration {
        full_name: "Ada".into(),
        ..form
    };
    assert_rejected(
        form.validate(&RegistrationRules::default()),
        DrishtiError::DisallowedEmailDomain,
    );
}

#[test]
fn custom_domain_list() {
    let rules = RegistrationRules {
        allowed_domains: vec!["galaxeye.space".into()],
    };
    let form = Registration {
        email: "ops@galaxeye.space".into(),
        ..valid_form()
    };
    assert!(form.validate(&rules).is_ok());
    assert_rejected(valid_form().validate(&rules), DrishtiError::DisallowedEmailDomain);
}
