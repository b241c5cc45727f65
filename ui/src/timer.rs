use drishti_core::Timer;
use std::future::Future;
use std::time::Duration;

/// Browser timer backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}
