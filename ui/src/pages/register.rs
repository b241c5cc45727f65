use yew::prelude::*;

use crate::components::RegisterForm;

#[function_component]
pub fn RegisterScreen() -> Html {
    html! {
        <div class="auth-layout min-h-screen flex items-center justify-center p-6">
            <div class="auth-card glass-effect max-w-lg w-full p-8 rounded-2xl">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold mb-2">{"Request Access"}</h1>
                    <p class="text-slate-400">
                        {"Registration is open to approved organizations only."}
                    </p>
                </div>
                <RegisterForm />
            </div>
        </div>
    }
}
