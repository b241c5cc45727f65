use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A dialog over a dimmed backdrop. Clicking the backdrop itself, not the
/// dialog body, calls `on_close`.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    pub children: Html,
    pub on_close: Callback<()>,
    /// Maximum width class (default: "max-w-md")
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            id={props.id.clone()}
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="modal active fixed inset-0 bg-black/60 z-[1500] flex
                   items-center justify-center p-4"
        >
            <div class={classes!(
                "modal-content",
                "glass-effect",
                "rounded-2xl",
                "shadow-xl",
                "w-full",
                "p-6",
                props.max_width.to_string()
            )}>
                {props.children.clone()}
            </div>
        </div>
    }
}
