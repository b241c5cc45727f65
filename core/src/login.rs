//! The simulated login flow.
//!
//! There is no credential check. A configured attempt number "succeeds" and
//! a later one locks the form, which is enough to demo both outcomes.

use serde::{Deserialize, Serialize};

use crate::error::DrishtiError;
use crate::time::{Timer, millis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRules {
    pub success_attempt: u32,
    pub lock_attempt: u32,
    pub confirm_delay_ms: u32,
    pub redirect_delay_ms: u32,
}

impl Default for LoginRules {
    fn default() -> Self {
        Self {
            success_attempt: 3,
            lock_attempt: 4,
            confirm_delay_ms: 500,
            redirect_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Attempting(u32),
    Succeeded,
    Locked,
}

/// The banner under the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginBanner {
    Attempt { attempt: u32, limit: u32 },
    Success,
    Locked,
}

impl LoginBanner {
    pub fn message(&self) -> String {
        match self {
            Self::Attempt { attempt, limit } => {
                format!("Login attempt {attempt}/{limit}")
            }
            Self::Success => "Login successful! Redirecting...".to_string(),
            Self::Locked => DrishtiError::AccountLocked.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginMachine {
    rules: LoginRules,
    attempts: u32,
    state: LoginState,
    confirmed: bool,
}

impl LoginMachine {
    pub fn new(rules: LoginRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn rules(&self) -> &LoginRules {
        &self.rules
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    /// Inputs and buttons are disabled while locked.
    pub fn controls_disabled(&self) -> bool {
        self.state == LoginState::Locked
    }

    /// Handles one form submission.
    ///
    /// An unchecked consent box rejects the submission without consuming an
    /// attempt. A submission after success still counts, so a user who keeps
    /// submitting before the redirect lands can lock the form.
    pub fn submit(&mut self, consent: bool) -> Result<LoginState, DrishtiError> {
        if self.state == LoginState::Locked {
            return Err(DrishtiError::AccountLocked);
        }
        if !consent {
            return Err(DrishtiError::MissingConsent);
        }

        self.attempts += 1;
        self.state = if self.attempts >= self.rules.lock_attempt {
            tracing::warn!(attempts = self.attempts, "login locked");
            LoginState::Locked
        } else if self.attempts == self.rules.success_attempt {
            tracing::info!(attempts = self.attempts, "login accepted");
            LoginState::Succeeded
        } else {
            LoginState::Attempting(self.attempts)
        };
        Ok(self.state)
    }

    /// Marks that the success message has been shown.
    pub fn confirm(&mut self) {
        if self.state == LoginState::Succeeded {
            self.confirmed = true;
        }
    }

    pub fn banner(&self) -> Option<LoginBanner> {
        match self.state {
            LoginState::Idle => None,
            LoginState::Locked => Some(LoginBanner::Locked),
            LoginState::Succeeded if self.confirmed => {
                Some(LoginBanner::Success)
            }
            LoginState::Attempting(_) | LoginState::Succeeded => {
                Some(LoginBanner::Attempt {
                    attempt: self.attempts,
                    limit: self.rules.lock_attempt,
                })
            }
        }
    }

    /// Back to a fresh form; used on logout.
    pub fn reset(&mut self) {
        *self = Self::new(self.rules);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginProgress {
    /// Show the success banner.
    Confirmed,
    /// Switch to the dashboard.
    Redirect,
}

/// Plays the delays between an accepted login and the dashboard.
pub async fn play_success<T: Timer>(
    timer: &T,
    rules: &LoginRules,
    mut on_progress: impl FnMut(LoginProgress),
) {
    timer.sleep(millis(rules.confirm_delay_ms)).await;
    on_progress(LoginProgress::Confirmed);
    timer.sleep(millis(rules.redirect_delay_ms)).await;
    on_progress(LoginProgress::Redirect);
}
