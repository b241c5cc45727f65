use super::ToastItem;
use crate::contexts::toast::ToastContext;
use yew::prelude::*;

#[function_component]
pub fn ToastContainer() -> Html {
    let toast_context = use_context::<ToastContext>();

    let toasts = match toast_context {
        Some(context) => context.ordered(),
        None => vec![],
    };

    if toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="notification-stack fixed top-4 right-4 z-[2000] space-y-3 max-w-sm w-full">
            {for toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            })}
        </div>
    }
}
