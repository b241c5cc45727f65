use drishti_core::upload::{UploadStatus, process_upload};
use drishti_core::{Dialog, Notice};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{Modal, StatusBox};
use crate::contexts::toast::{ToastHandle, use_toast};
use crate::state::{State, StatusLine};
use crate::timer::GlooTimer;

/// Runs the simulated upload for `file_name`, mirroring each stage into the
/// dialog's status line. A rejected file is also raised as a toast.
fn start_upload(dispatch: Dispatch<State>, toasts: ToastHandle, file_name: String) {
    let settings = dispatch.get().session.config().upload.clone();

    spawn_local(async move {
        let result =
            process_upload(&GlooTimer, &settings, &file_name, |status| match status {
                UploadStatus::Closed => dispatch.reduce_mut(|state| {
                    if state.session.dialog() == Some(Dialog::Upload) {
                        state.session.close_dialog();
                    }
                    state.upload_status = None;
                }),
                status => {
                    let line = StatusLine::from(Notice::new(
                        status.level(),
                        status.message(),
                    ));
                    dispatch.reduce_mut(|state| state.upload_status = Some(line));
                }
            })
            .await;

        if let Err(error) = result {
            toasts.notify(error);
            dispatch.reduce_mut(|state| state.upload_status = Some(error.into()));
        }
    });
}

#[function_component]
pub fn UploadDialog() -> Html {
    let (state, dispatch) = use_store::<State>();
    let toasts = use_toast();
    let file_input_ref = use_node_ref();
    let dragover = use_state(|| false);

    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            dispatch.reduce_mut(|state| {
                state.session.close_dialog();
                state.upload_status = None;
            });
        })
    };

    let on_browse = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_drag_over = {
        let dragover = dragover.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragover.set(true);
        })
    };

    let on_drag_leave = {
        let dragover = dragover.clone();
        Callback::from(move |_: DragEvent| dragover.set(false))
    };

    let on_drop = {
        let dragover = dragover.clone();
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragover.set(false);
            if let Some(file) = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0))
            {
                start_upload(dispatch.clone(), toasts.clone(), file.name());
            }
        })
    };

    let on_file_selected = {
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                start_upload(dispatch.clone(), toasts.clone(), file.name());
            }
            // Let the same file be picked again
            input.set_value("");
        })
    };

    let accept = state.session.config().upload.extensions.join(",");

    html! {
        <Modal id="upload-dialog" on_close={on_close.clone()}>
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-semibold">{"Upload AOI"}</h3>
                <button class="btn-ghost" onclick={on_close.reform(|_: MouseEvent| ())}>
                    {"×"}
                </button>
            </div>

            <div
                id="upload-area"
                class={classes!("upload-area", dragover.then_some("dragover"))}
                onclick={on_browse}
                ondragover={on_drag_over}
                ondragleave={on_drag_leave}
                ondrop={on_drop}
            >
                <p class="text-3xl">{"⬆"}</p>
                <p>{"Drag & drop a file here, or click to browse"}</p>
                <p class="info-hint">{"KML, KMZ, GeoJSON, JSON, TXT, Shapefile (.zip)"}</p>
            </div>
            <input
                ref={file_input_ref}
                type="file"
                id="file-input"
                class="hidden"
                accept={accept}
                onchange={on_file_selected}
            />

            <div id="upload-status">
                if let Some(status) = &state.upload_status {
                    <StatusBox status={status.clone()} />
                }
            </div>
        </Modal>
    }
}
