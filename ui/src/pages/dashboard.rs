use drishti_core::Dialog;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{
    Header, MapView, SearchDialog, Sidebar, TutorialOverlay, UploadDialog,
};
use crate::state::State;

#[function_component]
pub fn DashboardScreen() -> Html {
    let (state, _) = use_store::<State>();

    html! {
        <div class="dashboard flex flex-col h-screen">
            <Header />
            <main class="flex flex-1 min-h-0">
                <Sidebar />
                <MapView />
            </main>

            {match state.session.dialog() {
                Some(Dialog::Upload) => html! { <UploadDialog /> },
                Some(Dialog::Search) => html! { <SearchDialog /> },
                Some(Dialog::RegistrationComplete) | None => html! {},
            }}

            <TutorialOverlay />
        </div>
    }
}
