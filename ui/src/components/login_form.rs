use drishti_core::login::{LoginBanner, LoginProgress, play_success};
use drishti_core::{DrishtiError, LoginState, Notice, NoticeLevel, Screen};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::StatusBox;
use crate::contexts::map::use_map;
use crate::contexts::toast::use_toast;
use crate::router::navigate;
use crate::state::{State, StatusLine, update};
use crate::timer::GlooTimer;

pub const LOGIN_FORM_ID: &str = "login-form";

fn banner_status(banner: LoginBanner) -> StatusLine {
    match banner {
        LoginBanner::Attempt { .. } => {
            Notice::new(NoticeLevel::Warning, banner.message()).into()
        }
        LoginBanner::Success => {
            Notice::new(NoticeLevel::Success, banner.message()).into()
        }
        LoginBanner::Locked => DrishtiError::AccountLocked.into(),
    }
}

#[function_component]
pub fn LoginForm() -> Html {
    let (state, dispatch) = use_store::<State>();
    let toasts = use_toast();
    let map = use_map();

    let captcha_ref = use_node_ref();
    let show_password = use_state(|| false);

    let on_submit = {
        let captcha_ref = captcha_ref.clone();
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        let map = map.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let consent = captcha_ref
                .cast::<HtmlInputElement>()
                .is_some_and(|input| input.checked());

            match update(&dispatch, |state| state.submit_login(consent)) {
                Err(error) => toasts.notify(error),
                Ok(LoginState::Succeeded) => {
                    let rules = *dispatch.get().session.login().rules();
                    let dispatch = dispatch.clone();
                    let toasts = toasts.clone();
                    let map = map.clone();

                    spawn_local(async move {
                        play_success(&GlooTimer, &rules, |progress| match progress {
                            LoginProgress::Confirmed => dispatch
                                .reduce_mut(|state| state.session.confirm_login()),
                            LoginProgress::Redirect => navigate(
                                Screen::Dashboard,
                                &dispatch,
                                &map,
                                &toasts,
                            ),
                        })
                        .await;
                    });
                }
                Ok(LoginState::Locked) => {
                    tracing::warn!("login locked after too many attempts");
                }
                Ok(_) => {}
            }
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let on_register = {
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        let map = map.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate(Screen::Register, &dispatch, &map, &toasts);
        })
    };

    let login = state.session.login();
    let disabled = login.controls_disabled();

    html! {
        <form id={LOGIN_FORM_ID} onsubmit={on_submit} class="space-y-5">
            <div class="input-group">
                <label for="username">{"Username"}</label>
                <input
                    type="text"
                    id="username"
                    name="username"
                    autocomplete="username"
                    required={true}
                    disabled={disabled}
                    placeholder="Enter your username"
                />
            </div>

            <div class="input-group">
                <label for="password">{"Password"}</label>
                <div class="relative">
                    <input
                        type={if *show_password { "text" } else { "password" }}
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        required={true}
                        disabled={disabled}
                        placeholder="Enter your password"
                    />
                    <button
                        type="button"
                        class="password-toggle"
                        onclick={on_toggle_password}
                        disabled={disabled}
                        title={if *show_password { "Hide password" } else { "Show password" }}
                    >
                        {if *show_password { "🙈" } else { "👁" }}
                    </button>
                </div>
            </div>

            <label class="captcha-box">
                <input
                    ref={captcha_ref}
                    type="checkbox"
                    id="captcha"
                    disabled={disabled}
                />
                <span>{"I'm not a robot"}</span>
            </label>

            <button type="submit" class="btn-primary w-full" disabled={disabled}>
                {"Access Mission Control"}
            </button>

            <div id="login-error">
                if let Some(status) = &state.login_status {
                    <StatusBox status={status.clone()} />
                }
            </div>

            <div id="login-attempts">
                if let Some(banner) = login.banner() {
                    <StatusBox status={banner_status(banner)} />
                }
            </div>

            <p class="text-center text-sm text-slate-400">
                {"New to Mission Drishti? "}
                <a href="#" onclick={on_register} class="link">{"Request access"}</a>
            </p>
        </form>
    }
}
