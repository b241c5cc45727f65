use drishti_core::search::{SearchStatus, run_search};
use drishti_core::{Dialog, Notice, NoticeLevel};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{Modal, StatusBox};
use crate::contexts::map::{MapHandle, use_map};
use crate::contexts::toast::{ToastHandle, use_toast};
use crate::state::{State, StatusLine};
use crate::timer::GlooTimer;

fn start_search(
    dispatch: Dispatch<State>,
    map: MapHandle,
    toasts: ToastHandle,
    query: String,
) {
    let settings = dispatch.get().session.config().search;

    spawn_local(async move {
        let result = run_search(&GlooTimer, &settings, &query, |status| {
            let line = match &status {
                SearchStatus::Searching { .. } => Some(NoticeLevel::Info),
                SearchStatus::Found { .. } => Some(NoticeLevel::Success),
                SearchStatus::Closed => None,
            }
            .map(|level| StatusLine::from(Notice::new(level, status.message())));

            dispatch.reduce_mut(|state| {
                if line.is_none() && state.session.dialog() == Some(Dialog::Search) {
                    state.session.close_dialog();
                }
                state.search_status = line;
            });
        })
        .await;

        match result {
            Ok(viewport) => map.recenter(viewport),
            Err(error) => {
                toasts.notify(error);
                dispatch.reduce_mut(|state| state.search_status = Some(error.into()));
            }
        }
    });
}

#[function_component]
pub fn SearchDialog() -> Html {
    let (state, dispatch) = use_store::<State>();
    let map = use_map();
    let toasts = use_toast();
    let query_ref = use_node_ref();

    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            dispatch.reduce_mut(|state| {
                state.session.close_dialog();
                state.search_status = None;
            });
        })
    };

    let on_submit = {
        let dispatch = dispatch.clone();
        let query_ref = query_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let query = query_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            start_search(dispatch.clone(), map.clone(), toasts.clone(), query);
        })
    };

    html! {
        <Modal id="search-dialog" on_close={on_close.clone()}>
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-semibold">{"Search Location"}</h3>
                <button class="btn-ghost" onclick={on_close.reform(|_: MouseEvent| ())}>
                    {"×"}
                </button>
            </div>

            <form onsubmit={on_submit} class="flex gap-3">
                <input
                    ref={query_ref}
                    type="text"
                    id="location-search"
                    class="flex-1"
                    placeholder="City, region or coordinates"
                />
                <button type="submit" class="btn-primary">{"Search"}</button>
            </form>

            <div id="search-results">
                if let Some(status) = &state.search_status {
                    <StatusBox status={status.clone()} />
                }
            </div>
        </Modal>
    }
}
