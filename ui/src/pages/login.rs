use yew::prelude::*;

use crate::components::LoginForm;

#[function_component]
pub fn LoginScreen() -> Html {
    html! {
        <div class="auth-layout min-h-screen flex items-center justify-center p-6">
            <div class="auth-card glass-effect max-w-md w-full p-8 rounded-2xl">
                <div class="mb-8 text-center">
                    <div class="logo-mark text-4xl mb-3">{"◉"}</div>
                    <h1 class="text-2xl font-bold mb-2">
                        {"GalaxEye "}<span class="text-accent">{"Mission Drishti"}</span>
                    </h1>
                    <p class="text-slate-400">
                        {"Satellite tasking and Area of Interest planning"}
                    </p>
                </div>
                <LoginForm />
            </div>
        </div>
    }
}
