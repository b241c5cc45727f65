use crate::contexts::toast::{Toast, use_toast};
use drishti_core::NoticeLevel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;

    let (level_class, icon) = match toast.level {
        NoticeLevel::Error => ("notification error", "✕"),
        NoticeLevel::Warning => ("notification warning", "⚠"),
        NoticeLevel::Success => ("notification success", "✓"),
        NoticeLevel::Info => ("notification info", "ℹ"),
    };

    let on_close = {
        let toast_id = toast.id;
        let toast_handle = toast_handle.clone();
        Callback::from(move |_| {
            toast_handle.remove(toast_id);
        })
    };

    html! {
        <div class={classes!(
            level_class,
            "glass-effect",
            "relative", "p-4", "rounded-lg", "border", "shadow-lg", "transition-all", "duration-300", "ease-out"
        )}>
            <div class="flex items-start space-x-3">
                <div class="flex-shrink-0">
                    <span class="text-sm font-medium">{icon}</span>
                </div>
                <div class="flex-1 min-w-0">
                    <p class="text-sm font-medium leading-5">
                        {&toast.message}
                    </p>
                </div>
                <div class="flex-shrink-0">
                    <button
                        onclick={on_close}
                        class="inline-flex text-slate-400 hover:text-slate-200 focus:outline-none transition-colors"
                        title="Dismiss"
                    >
                        <span class="text-lg leading-none">{"×"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
