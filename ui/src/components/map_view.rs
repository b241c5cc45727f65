use drishti_core::Dialog;
use drishti_core::map::{toggle_layer, toggle_measure};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::map::use_map;
use crate::contexts::toast::use_toast;
use crate::leaflet::MAP_CONTAINER_ID;
use crate::state::State;

/// The Leaflet container with its floating toolbar. The map itself is
/// created later, once the dashboard is visible.
#[function_component]
pub fn MapView() -> Html {
    let (state, dispatch) = use_store::<State>();
    let map = use_map();
    let toasts = use_toast();

    let on_draw = {
        let map = map.clone();
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| map.toggle_draw_mode(&dispatch, &toasts))
    };

    let on_measure = {
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| toasts.notify(toggle_measure()))
    };

    let on_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|state| state.session.open_dialog(Dialog::Search));
        })
    };

    let on_layers = {
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| toasts.notify(toggle_layer()))
    };

    html! {
        <section class="map-container">
            <div id={MAP_CONTAINER_ID} class="absolute inset-0"></div>

            <div class="map-toolbar glass-effect">
                <div class="tool-group">
                    <button
                        class={classes!("tool-btn", state.drawing.then_some("active"))}
                        data-tool="draw"
                        title="Draw rectangle"
                        onclick={on_draw}
                    >
                        {"▭"}
                    </button>
                    <button class="tool-btn" data-tool="measure" title="Measure" onclick={on_measure}>
                        {"📏"}
                    </button>
                </div>
                <div class="tool-group">
                    <button class="tool-btn" data-tool="search" title="Search location" onclick={on_search}>
                        {"⌕"}
                    </button>
                    <button class="tool-btn" data-tool="layers" title="Layers" onclick={on_layers}>
                        {"☰"}
                    </button>
                </div>
            </div>
        </section>
    }
}
