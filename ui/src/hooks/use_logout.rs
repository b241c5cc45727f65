use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::login_form::LOGIN_FORM_ID;
use crate::state::State;

const LOGOUT_PROMPT: &str =
    "Are you sure you want to logout from GalaxEye Mission Drishti?";

/// Asks for confirmation, then ends the session and clears the login form.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();

    Callback::from(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        if !window.confirm_with_message(LOGOUT_PROMPT).unwrap_or(false) {
            return;
        }

        dispatch.reduce_mut(|state| state.logout());

        if let Some(form) = window
            .document()
            .and_then(|d| d.get_element_by_id(LOGIN_FORM_ID))
            .and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
        tracing::info!("logged out");
    })
}
