use drishti_core::map::AoiPanel;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::State;

#[function_component]
pub fn AoiInfo() -> Html {
    let (state, _) = use_store::<State>();
    let panel = state.aoi_panel;

    let body = match panel {
        AoiPanel::Empty => html! {
            <>
                <p>{"📍 No AOI selected"}</p>
                <p class="info-hint">{"Draw or upload an area to begin"}</p>
            </>
        },
        AoiPanel::Selected(aoi) => {
            let rules = state.session.config().area;
            html! {
                <>
                    <p><strong>{"AOI Selected"}</strong></p>
                    <p class="mt-2"><strong>{"Area: "}</strong>{aoi.area_label()}</p>
                    <p>
                        <strong>{"Status: "}</strong>
                        {if aoi.is_valid() { "✓ " } else { "✕ " }}
                        {aoi.status.to_string()}
                    </p>
                    <p class="info-hint mt-2">{format!("Bounds: {}", aoi.bounds)}</p>
                    if !aoi.is_valid() {
                        <p class="invalid-hint mt-2">
                            <small>{format!("⚠ Area must be between {}", rules.range_label())}</small>
                        </p>
                    }
                </>
            }
        }
    };

    html! {
        <div id="aoi-info" class={panel.css_class()}>
            {body}
        </div>
    }
}
