use drishti_core::map::AoiPanel;
use drishti_core::{
    DrishtiError, LoginState, Notice, NoticeLevel, Registration, Session,
};
use yewdux::prelude::*;

/// A status line shown inside a dialog while a simulated job runs.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub level: NoticeLevel,
    pub message: String,
    pub detail: Option<&'static str>,
}

impl From<Notice> for StatusLine {
    fn from(notice: Notice) -> Self {
        Self {
            level: notice.level,
            message: notice.message,
            detail: None,
        }
    }
}

impl From<DrishtiError> for StatusLine {
    fn from(error: DrishtiError) -> Self {
        Self {
            level: error.level(),
            message: error.to_string(),
            detail: error.detail(),
        }
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Session (screen, login, tutorial, open dialog) ===
    pub session: Session,

    // === Map mirror (managed by contexts::map) ===
    pub aoi_panel: AoiPanel,
    pub drawing: bool,

    // === Form rejections ===
    pub login_status: Option<StatusLine>,
    pub register_status: Option<StatusLine>,

    // === Dialog status lines ===
    pub upload_status: Option<StatusLine>,
    pub search_status: Option<StatusLine>,
}

impl State {
    /// Submits the login form, keeping the last rejection for display under
    /// it.
    pub fn submit_login(
        &mut self,
        consent: bool,
    ) -> Result<LoginState, DrishtiError> {
        let result = self.session.submit_login(consent);
        // the attempts banner already reports a lockout
        self.login_status = result
            .err()
            .filter(|error| !error.is_terminal())
            .map(StatusLine::from);
        result
    }

    /// Submits the registration form, keeping the last rejection for display
    /// under it.
    pub fn register(
        &mut self,
        registration: &Registration,
    ) -> Result<(), DrishtiError> {
        let result = self.session.register(registration);
        self.register_status = result.err().map(StatusLine::from);
        result
    }

    pub fn finish_registration(&mut self) {
        self.session.finish_registration();
        self.register_status = None;
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.login_status = None;
        self.upload_status = None;
        self.search_status = None;
    }
}

/// Applies `f` to the store and hands back its result.
pub fn update<R>(
    dispatch: &Dispatch<State>,
    f: impl FnOnce(&mut State) -> R,
) -> R {
    let mut f = Some(f);
    let mut result = None;
    dispatch.reduce_mut(|state| {
        if let Some(f) = f.take() {
            result = Some(f(state));
        }
    });
    // reduce_mut runs its closure synchronously, exactly once
    match result {
        Some(result) => result,
        None => unreachable!("store reducer did not run"),
    }
}
