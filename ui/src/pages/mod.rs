//! The three screens. All stay mounted; only the active one is shown, so
//! the map and form contents survive screen changes.

mod dashboard;
mod login;
mod register;

pub use dashboard::DashboardScreen;
pub use login::LoginScreen;
pub use register::RegisterScreen;

use drishti_core::Screen;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScreenFrameProps {
    pub screen: Screen,
    pub current: Screen,
    pub children: Html,
}

#[function_component]
pub fn ScreenFrame(props: &ScreenFrameProps) -> Html {
    let active = props.screen == props.current;
    html! {
        <div
            id={props.screen.element_id()}
            class={classes!("screen", active.then_some("active"))}
        >
            {props.children.clone()}
        </div>
    }
}
