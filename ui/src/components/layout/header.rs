use yew::prelude::*;

use crate::components::UtcClock;
use crate::hooks::use_logout;

#[function_component]
pub fn Header() -> Html {
    let on_logout = use_logout();

    html! {
        <header class="dashboard-header glass-effect">
            <div class="flex justify-between items-center h-16 px-6">
                <div class="flex items-center space-x-3">
                    <span class="logo-mark">{"◉"}</span>
                    <h1 class="text-xl font-semibold">
                        {"GalaxEye "}<span class="text-accent">{"Mission Drishti"}</span>
                    </h1>
                </div>
                <div class="flex items-center space-x-6">
                    <UtcClock />
                    <span class="status-pill">{"● Systems Nominal"}</span>
                    <button class="btn-ghost" onclick={on_logout} title="Logout">
                        {"Logout"}
                    </button>
                </div>
            </div>
        </header>
    }
}
