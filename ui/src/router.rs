//! Runs the deferred work a screen change asks for.

use drishti_core::time::Timer;
use drishti_core::{Screen, ScreenEffect};
use yew::platform::spawn_local;
use yewdux::prelude::*;

use crate::contexts::map::MapHandle;
use crate::contexts::toast::ToastHandle;
use crate::dom::DomLocator;
use crate::state::{State, update};
use crate::timer::GlooTimer;

/// Switches to `screen` and schedules whatever it needs.
pub fn navigate(
    screen: Screen,
    dispatch: &Dispatch<State>,
    map: &MapHandle,
    toasts: &ToastHandle,
) {
    let effects = update(dispatch, |state| state.session.show_screen(screen));
    run_effects(effects, dispatch, map, toasts);
}

pub fn run_effects(
    effects: Vec<ScreenEffect>,
    dispatch: &Dispatch<State>,
    map: &MapHandle,
    toasts: &ToastHandle,
) {
    for effect in effects {
        let dispatch = dispatch.clone();
        match effect {
            ScreenEffect::InitMap { after } => {
                let map = map.clone();
                let toasts = toasts.clone();
                spawn_local(async move {
                    GlooTimer.sleep(after).await;
                    map.init(dispatch, toasts);
                });
            }
            ScreenEffect::StartTutorial { after } => spawn_local(async move {
                GlooTimer.sleep(after).await;
                dispatch.reduce_mut(|state| {
                    state.session.start_tutorial(&DomLocator);
                });
            }),
        }
    }
}
