use drishti_core::Dialog;
use drishti_core::map::toggle_layer;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::AoiInfo;
use crate::contexts::map::use_map;
use crate::contexts::toast::use_toast;
use crate::state::State;

#[function_component]
pub fn Sidebar() -> Html {
    let (state, dispatch) = use_store::<State>();
    let map = use_map();
    let toasts = use_toast();

    let open_dialog = |dialog: Dialog| {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|state| state.session.open_dialog(dialog));
        })
    };

    let on_draw = {
        let map = map.clone();
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| map.toggle_draw_mode(&dispatch, &toasts))
    };

    let on_zoom_in = {
        let map = map.clone();
        Callback::from(move |_: MouseEvent| {
            map.with(|c| c.zoom_in());
        })
    };

    let on_zoom_out = {
        let map = map.clone();
        Callback::from(move |_: MouseEvent| {
            map.with(|c| c.zoom_out());
        })
    };

    let on_reset = {
        let map = map.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| map.reset_view(&dispatch))
    };

    let on_layers = {
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| toasts.notify(toggle_layer()))
    };

    html! {
        <aside class="sidebar glass-effect">
            <div class="menu-section">
                <h3 class="menu-title">{"AOI Selection"}</h3>
                <button class="menu-btn" onclick={open_dialog(Dialog::Upload)}>
                    {"⬆ Upload AOI"}
                </button>
                <button
                    class={classes!("menu-btn", state.drawing.then_some("active"))}
                    onclick={on_draw}
                >
                    {"▭ Draw AOI"}
                </button>
                <button class="menu-btn" onclick={open_dialog(Dialog::Search)}>
                    {"⌕ Search Location"}
                </button>
            </div>

            <div class="menu-section">
                <h3 class="menu-title">{"Map Controls"}</h3>
                <button class="menu-btn" onclick={on_zoom_in}>{"＋ Zoom In"}</button>
                <button class="menu-btn" onclick={on_zoom_out}>{"－ Zoom Out"}</button>
                <button class="menu-btn" onclick={on_reset}>{"⟲ Reset View"}</button>
                <button class="menu-btn" onclick={on_layers}>{"☰ Layers"}</button>
            </div>

            <AoiInfo />
        </aside>
    }
}
