use drishti_core::{Notice, NoticeLevel};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;
use yew::prelude::*;

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    /// Creation order; stacks show older toasts first.
    pub seq: u64,
    pub message: String,
    pub level: NoticeLevel,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(message: String, level: NoticeLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            seq: NEXT_SEQ.fetch_add(1, Ordering::Relaxed),
            message,
            level,
            duration: Some(4000),
        }
    }
}

impl From<Notice> for Toast {
    fn from(notice: Notice) -> Self {
        Self::new(notice.message, notice.level)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: HashMap<Uuid, Toast>,
}

impl ToastState {
    /// Live toasts, oldest first.
    pub fn ordered(&self) -> Vec<Toast> {
        let mut toasts: Vec<_> = self.toasts.values().cloned().collect();
        toasts.sort_by_key(|toast| toast.seq);
        toasts
    }
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(
        self: std::rc::Rc<Self>,
        action: Self::Action,
    ) -> std::rc::Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => {
                toasts.insert(toast.id, toast);
            }
            ToastAction::Remove(id) => {
                toasts.remove(&id);
            }
        }

        std::rc::Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

/// Cloneable handle for raising notices, usable from timers and map
/// callbacks as well as components.
#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration = toast.duration;
        let context = self.context.clone();

        self.context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    /// Logs the notice and shows it as a toast.
    pub fn notify(&self, notice: impl Into<Notice>) {
        let notice = notice.into();
        notice.log();
        self.add(notice.into());
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}
