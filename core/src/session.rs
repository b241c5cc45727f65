//! Application state and the screen router.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::DrishtiConfig;
use crate::error::DrishtiError;
use crate::login::{LoginMachine, LoginState};
use crate::registration::Registration;
use crate::time::millis;
use crate::tutorial::{RegionLocator, Tutorial, TutorialTransition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Screen {
    #[default]
    #[display("login")]
    Login,
    #[display("register")]
    Register,
    #[display("dashboard")]
    Dashboard,
}

impl Screen {
    pub fn element_id(&self) -> &'static str {
        match self {
            Self::Login => "login-screen",
            Self::Register => "register-screen",
            Self::Dashboard => "dashboard-screen",
        }
    }
}

/// Deferred work requested by a screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEffect {
    InitMap { after: Duration },
    StartTutorial { after: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    Upload,
    Search,
    RegistrationComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
    /// Delay between entering the dashboard and opening the tutorial.
    pub tutorial_delay_ms: u32,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            tutorial_delay_ms: 800,
        }
    }
}

/// Everything the dashboard remembers between events. Lost on reload.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    config: DrishtiConfig,
    screen: Screen,
    login: LoginMachine,
    tutorial: Tutorial,
    first_entry: bool,
    dialog: Option<Dialog>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DrishtiConfig::default())
    }
}

impl Session {
    pub fn new(config: DrishtiConfig) -> Self {
        Self {
            login: LoginMachine::new(config.login),
            config,
            screen: Screen::default(),
            tutorial: Tutorial::default(),
            first_entry: true,
            dialog: None,
        }
    }

    pub fn config(&self) -> &DrishtiConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn login(&self) -> &LoginMachine {
        &self.login
    }

    pub fn tutorial(&self) -> &Tutorial {
        &self.tutorial
    }

    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    /// Switches screens. Entering the dashboard always asks for the map and,
    /// the first time after login, for the tutorial.
    pub fn show_screen(&mut self, screen: Screen) -> Vec<ScreenEffect> {
        tracing::info!(from = %self.screen, to = %screen, "show screen");
        self.screen = screen;

        let mut effects = Vec::new();
        if screen == Screen::Dashboard {
            effects.push(ScreenEffect::InitMap {
                after: millis(self.config.map.init_delay_ms),
            });
            if self.first_entry {
                self.first_entry = false;
                effects.push(ScreenEffect::StartTutorial {
                    after: millis(self.config.router.tutorial_delay_ms),
                });
            }
        }
        effects
    }

    pub fn submit_login(
        &mut self,
        consent: bool,
    ) -> Result<LoginState, DrishtiError> {
        self.login.submit(consent)
    }

    pub fn confirm_login(&mut self) {
        self.login.confirm();
    }

    /// Clears the login attempts, re-arms the tutorial and returns to the
    /// login screen.
    pub fn logout(&mut self) {
        self.login.reset();
        self.first_entry = true;
        self.dialog = None;
        if self.tutorial.is_visible() {
            self.tutorial.skip();
        }
        self.show_screen(Screen::Login);
    }

    pub fn register(
        &mut self,
        registration: &Registration,
    ) -> Result<(), DrishtiError> {
        registration.validate(&self.config.registration)?;
        tracing::info!(email = %registration.email, "registration accepted");
        self.dialog = Some(Dialog::RegistrationComplete);
        Ok(())
    }

    /// Dismisses the registration confirmation and goes back to login.
    pub fn finish_registration(&mut self) {
        self.dialog = None;
        self.show_screen(Screen::Login);
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn start_tutorial(&mut self, locator: &impl RegionLocator) {
        self.tutorial = Tutorial::default();
        self.tutorial.start(locator);
    }

    pub fn advance_tutorial(
        &mut self,
        locator: &impl RegionLocator,
    ) -> TutorialTransition {
        self.tutorial.advance(locator)
    }

    pub fn retreat_tutorial(
        &mut self,
        locator: &impl RegionLocator,
    ) -> TutorialTransition {
        self.tutorial.retreat(locator)
    }

    pub fn skip_tutorial(&mut self) {
        self.tutorial.skip();
    }
}
