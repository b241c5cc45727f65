use drishti_core::registration::SUBSCRIPTION_OPTIONS;
use drishti_core::{Dialog, Registration, Screen};
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{Modal, StatusBox};
use crate::contexts::map::use_map;
use crate::contexts::toast::use_toast;
use crate::router::navigate;
use crate::state::{State, update};

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Values of the ticked `subscription` checkboxes inside `form`.
fn checked_subscriptions(form: &HtmlFormElement) -> Vec<String> {
    let Ok(nodes) =
        form.query_selector_all("input[name=\"subscription\"]:checked")
    else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .collect()
}

#[function_component]
pub fn RegisterForm() -> Html {
    let (state, dispatch) = use_store::<State>();
    let toasts = use_toast();
    let map = use_map();

    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let captcha_ref = use_node_ref();

    let on_submit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let captcha_ref = captcha_ref.clone();
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let registration = Registration {
                full_name: input_value(&name_ref),
                email: input_value(&email_ref),
                consent: captcha_ref
                    .cast::<HtmlInputElement>()
                    .is_some_and(|input| input.checked()),
                subscriptions: checked_subscriptions(&form),
            };

            match update(&dispatch, |state| state.register(&registration)) {
                Ok(()) => form.reset(),
                Err(error) => toasts.notify(error),
            }
        })
    };

    let on_back = {
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        let map = map.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.reduce_mut(|state| state.register_status = None);
            navigate(Screen::Login, &dispatch, &map, &toasts);
        })
    };

    let on_finish = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|state| state.finish_registration());
        })
    };

    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            dispatch.reduce_mut(|state| state.session.close_dialog());
        })
    };

    html! {
        <>
            <form id="register-form" ref={form_ref} onsubmit={on_submit} class="space-y-5">
                <div class="input-group">
                    <label for="full-name">{"Full Name"}</label>
                    <input
                        ref={name_ref}
                        type="text"
                        id="full-name"
                        name="full-name"
                        autocomplete="name"
                        required={true}
                        placeholder="Enter your full name"
                    />
                </div>

                <div class="input-group">
                    <label for="email">{"Organizational Email"}</label>
                    <input
                        ref={email_ref}
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        required={true}
                        placeholder="name@organization.com"
                    />
                </div>

                <fieldset class="subscription-grid">
                    <legend>{"Data Subscriptions"}</legend>
                    {for SUBSCRIPTION_OPTIONS.iter().map(|option| html! {
                        <label class="subscription-option" key={*option}>
                            <input type="checkbox" name="subscription" value={*option} />
                            <span>{*option}</span>
                        </label>
                    })}
                </fieldset>

                <label class="captcha-box">
                    <input ref={captcha_ref} type="checkbox" id="register-captcha" />
                    <span>{"I'm not a robot"}</span>
                </label>

                <button type="submit" class="btn-primary w-full">
                    {"Submit Registration"}
                </button>

                if let Some(status) = &state.register_status {
                    <StatusBox status={status.clone()} />
                }

                <p class="text-center text-sm text-slate-400">
                    {"Already have access? "}
                    <a href="#" onclick={on_back} class="link">{"Back to login"}</a>
                </p>
            </form>

            if state.session.dialog() == Some(Dialog::RegistrationComplete) {
                <Modal id="success-modal" on_close={on_dismiss}>
                    <div class="text-center space-y-4">
                        <div class="text-4xl text-[#06ffa5]">{"✓"}</div>
                        <h3 class="text-xl font-semibold">{"Registration Submitted"}</h3>
                        <p class="text-slate-300">
                            {"Your access request is under review. You will receive an email once it is approved."}
                        </p>
                        <button class="btn-primary" onclick={on_finish}>
                            {"Back to Login"}
                        </button>
                    </div>
                </Modal>
            }
        </>
    }
}
