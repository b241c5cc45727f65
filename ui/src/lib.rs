use drishti_core::{Screen, Session};
use yew::prelude::*;
use yewdux::prelude::*;

mod components;
mod config;
mod contexts;
mod dom;
mod hooks;
mod leaflet;
pub mod logs;
mod pages;
mod router;
mod state;
mod timer;

use components::ToastContainer;
use contexts::map::MapProvider;
use contexts::toast::ToastProvider;
use pages::{DashboardScreen, LoginScreen, RegisterScreen, ScreenFrame};
use state::State;

#[function_component]
pub fn App() -> Html {
    let (_, dispatch) = use_store::<State>();

    // Page-level overrides replace the built-in defaults once, before any
    // interaction
    use_effect_with((), move |_| {
        let config = config::load_config();
        dispatch.reduce_mut(|state| state.session = Session::new(config));
    });

    html! {
        <ToastProvider>
            <MapProvider>
                <div class="app min-h-screen text-slate-100">
                    <Screens />
                    <ToastContainer />
                </div>
            </MapProvider>
        </ToastProvider>
    }
}

#[function_component]
fn Screens() -> Html {
    let (state, _) = use_store::<State>();
    let current = state.session.screen();

    html! {
        <>
            <ScreenFrame screen={Screen::Login} {current}>
                <LoginScreen />
            </ScreenFrame>
            <ScreenFrame screen={Screen::Register} {current}>
                <RegisterScreen />
            </ScreenFrame>
            <ScreenFrame screen={Screen::Dashboard} {current}>
                <DashboardScreen />
            </ScreenFrame>
        </>
    }
}
