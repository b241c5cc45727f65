use drishti_core::NoticeLevel;
use yew::prelude::*;

use crate::state::StatusLine;

#[derive(Properties, PartialEq)]
pub struct StatusBoxProps {
    pub status: StatusLine,
}

/// Inline coloured status message, used under forms and inside dialogs.
#[function_component]
pub fn StatusBox(props: &StatusBoxProps) -> Html {
    let status = &props.status;
    let (level_class, icon) = match status.level {
        NoticeLevel::Error => ("status-box error", "✕"),
        NoticeLevel::Warning => ("status-box warning", "⚠"),
        NoticeLevel::Success => ("status-box success", "✓"),
        NoticeLevel::Info => ("status-box info", "ℹ"),
    };

    html! {
        <div class={classes!(level_class, "mt-4", "p-3", "rounded-xl", "border")}>
            <span class="mr-2">{icon}</span>
            <strong>{&status.message}</strong>
            if let Some(detail) = status.detail {
                <br />
                <small>{detail}</small>
            }
        </div>
    }
}
