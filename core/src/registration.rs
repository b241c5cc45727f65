use serde::{Deserialize, Serialize};

use crate::error::DrishtiError;

/// Data products a new account can subscribe to.
pub const SUBSCRIPTION_OPTIONS: &[&str] = &[
    "SAR Imagery",
    "Optical Imagery",
    "Change Detection Alerts",
    "Analytics Reports",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRules {
    /// Matched as substrings of everything after the `@`.
    pub allowed_domains: Vec<String>,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            allowed_domains: ["organization.com", "company.com", "gov.in", "edu", "space"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// The registration form as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub consent: bool,
    pub subscriptions: Vec<String>,
}

impl Registration {
    /// Checks name, email domain, consent and subscriptions, in that order,
    /// stopping at the first failure.
    pub fn validate(&self, rules: &RegistrationRules) -> Result<(), DrishtiError> {
        if !is_alphabetic_name(&self.full_name) {
            return Err(DrishtiError::InvalidName);
        }
        if !rules.allows_email(&self.email) {
            return Err(DrishtiError::DisallowedEmailDomain);
        }
        if !self.consent {
            return Err(DrishtiError::MissingConsent);
        }
        if self.subscriptions.is_empty() {
            return Err(DrishtiError::NoSubscriptionSelected);
        }
        Ok(())
    }
}

impl RegistrationRules {
    pub fn allows_email(&self, email: &str) -> bool {
        email_domain(email).is_some_and(|domain| {
            self.allowed_domains
                .iter()
                .any(|allowed| domain.contains(allowed.as_str()))
        })
    }
}

/// Letters and whitespace only, at least one character.
pub fn is_alphabetic_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// The segment after the first `@`, up to any second `@`.
pub fn email_domain(email: &str) -> Option<&str> {
    email.split('@').nth(1)
}
