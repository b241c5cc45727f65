use drishti_core::clock::format_utc_clock;
use gloo_timers::future::sleep;
use jiff::Timestamp;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use yew::platform::spawn_local;
use yew::prelude::*;

/// The header's `HH:MM UTC` readout, refreshed every second.
#[function_component]
pub fn UtcClock() -> Html {
    let now = use_state(|| format_utc_clock(Timestamp::now()));

    {
        let now = now.clone();

        use_effect_with((), move |_| {
            let cancelled = Rc::new(AtomicBool::new(false));
            let cancelled_clone = cancelled.clone();

            spawn_local(async move {
                while !cancelled_clone.load(Ordering::Relaxed) {
                    sleep(Duration::from_secs(1)).await;

                    if cancelled_clone.load(Ordering::Relaxed) {
                        break;
                    }
                    now.set(format_utc_clock(Timestamp::now()));
                }
            });

            // Stop the loop when the header unmounts
            move || {
                cancelled.store(true, Ordering::Relaxed);
            }
        });
    }

    html! {
        <span id="current-time" class="font-mono text-sm text-slate-300">
            {(*now).clone()}
        </span>
    }
}
