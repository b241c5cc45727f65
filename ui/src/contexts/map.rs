//! Shared access to the single map controller.
//!
//! The controller is created lazily the first time the dashboard is shown
//! and lives for the rest of the page. Everything that moves the map goes
//! through [`MapHandle`].

use drishti_core::geo::{LatLng, Viewport};
use drishti_core::map::{AoiPanel, ClickOutcome, MapController};
use drishti_core::Notice;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use yew::prelude::*;
use yewdux::prelude::*;

use super::toast::ToastHandle;
use crate::leaflet::LeafletSurface;
use crate::state::State;

type Controller = MapController<LeafletSurface>;

#[derive(Clone, Default)]
pub struct MapHandle(Rc<RefCell<Option<Controller>>>);

impl PartialEq for MapHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl MapHandle {
    /// Creates the map unless it already exists.
    pub fn init(&self, dispatch: Dispatch<State>, toasts: ToastHandle) {
        if self.0.borrow().is_some() {
            return;
        }

        let config = dispatch.get().session.config().clone();
        let weak = Rc::downgrade(&self.0);
        let on_click = move |point: LatLng| {
            handle_click(&weak, point, &dispatch, &toasts);
        };

        match LeafletSurface::mount(&config.map, on_click) {
            Ok(surface) => {
                *self.0.borrow_mut() =
                    Some(MapController::new(surface, config.area, config.map));
            }
            Err(e) => tracing::error!("failed to create map: {e:?}"),
        }
    }

    /// Runs `f` against the controller if the map exists yet.
    pub fn with<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
        self.0.borrow_mut().as_mut().map(f)
    }

    pub fn toggle_draw_mode(&self, dispatch: &Dispatch<State>, toasts: &ToastHandle) {
        let Some((hint, drawing)) =
            self.with(|c| (c.toggle_draw_mode(), c.is_drawing()))
        else {
            return;
        };
        dispatch.reduce_mut(|state| state.drawing = drawing);
        if let Some(hint) = hint {
            toasts.notify(hint);
        }
    }

    pub fn reset_view(&self, dispatch: &Dispatch<State>) {
        if self.with(|c| c.reset_view()).is_some() {
            dispatch.reduce_mut(|state| state.aoi_panel = AoiPanel::Empty);
        }
    }

    pub fn recenter(&self, viewport: Viewport) {
        self.with(|c| c.recenter(viewport));
    }
}

fn handle_click(
    controller: &Weak<RefCell<Option<Controller>>>,
    point: LatLng,
    dispatch: &Dispatch<State>,
    toasts: &ToastHandle,
) {
    let Some(cell) = controller.upgrade() else {
        return;
    };
    let outcome = cell.borrow_mut().as_mut().map(|c| c.handle_click(point));

    match outcome {
        Some(ClickOutcome::AwaitingSecondCorner) => {
            toasts.notify(Notice::info("Click again to complete the rectangle"));
        }
        Some(ClickOutcome::AoiCreated(aoi)) => {
            dispatch.reduce_mut(|state| {
                state.aoi_panel = AoiPanel::Selected(aoi);
                state.drawing = false;
            });
        }
        Some(ClickOutcome::Ignored) | None => {}
    }
}

#[derive(Properties, PartialEq)]
pub struct MapProviderProps {
    pub children: Children,
}

#[function_component]
pub fn MapProvider(props: &MapProviderProps) -> Html {
    let handle = use_state(MapHandle::default);

    html! {
        <ContextProvider<MapHandle> context={(*handle).clone()}>
            {props.children.clone()}
        </ContextProvider<MapHandle>>
    }
}

#[hook]
pub fn use_map() -> MapHandle {
    use_context::<MapHandle>()
        .expect("use_map must be used within a MapProvider")
}
