use drishti_core::tutorial::STEP_COUNT;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::dom::DomLocator;
use crate::state::State;

/// The first-visit walkthrough. Clicking outside the card does nothing;
/// only Skip or Finish close it.
#[function_component]
pub fn TutorialOverlay() -> Html {
    let (state, dispatch) = use_store::<State>();
    let tutorial = state.session.tutorial();

    if !tutorial.is_visible() {
        return html! {};
    }

    let on_next = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|state| {
                state.session.advance_tutorial(&DomLocator);
            });
        })
    };

    let on_prev = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|state| {
                state.session.retreat_tutorial(&DomLocator);
            });
        })
    };

    let on_skip = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|state| state.session.skip_tutorial());
        })
    };

    let step = tutorial.card();

    html! {
        <>
            <div id="tutorial-overlay" class="tutorial-overlay active">
                <div class="tutorial-card glass-effect" data-step={tutorial.step().to_string()}>
                    <div class="flex justify-between items-center mb-3">
                        <span id="tutorial-step-indicator" class="text-sm text-slate-400">
                            {tutorial.progress_label()}
                        </span>
                        <button class="btn-ghost text-sm" onclick={on_skip}>
                            {"Skip Tutorial"}
                        </button>
                    </div>

                    <h3 class="text-xl font-semibold mb-2">{step.title}</h3>
                    <p class="text-slate-300">{step.body}</p>

                    <div id="progress-dots" class="flex justify-center gap-2 my-5">
                        {for tutorial.dots().map(|active| html! {
                            <span class={classes!("progress-dot", active.then_some("active"))}></span>
                        })}
                    </div>

                    <div class="flex justify-between">
                        <button
                            id="prev-btn"
                            class="btn-ghost"
                            disabled={!tutorial.can_retreat()}
                            onclick={on_prev}
                        >
                            {"← Previous"}
                        </button>
                        <button id="next-btn" class="btn-primary" onclick={on_next}>
                            {tutorial.primary_label()}
                            {if tutorial.step() == STEP_COUNT { " ✓" } else { " →" }}
                        </button>
                    </div>
                </div>
            </div>

            if let Some(rect) = tutorial.highlight() {
                <div class="tutorial-highlight" style={rect.to_style()}></div>
            }
        </>
    }
}
