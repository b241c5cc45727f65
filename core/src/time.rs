use std::future::Future;
use std::time::Duration;
#[cfg(feature = "mock-time")]
use std::sync::{Arc, Mutex};

/// Source of the fixed delays that stand in for network round trips.
///
/// The browser app sleeps on a `gloo-timers` future; tests use
/// [`MockTimer`] so a whole simulated flow completes in one poll.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

pub fn millis(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}

/// Resolves every sleep immediately and remembers what was asked for.
#[cfg(feature = "mock-time")]
#[derive(Clone, Default)]
pub struct MockTimer {
    slept: Arc<Mutex<Vec<Duration>>>,
}

#[cfg(feature = "mock-time")]
impl MockTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every requested delay, in order.
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }

    pub fn total(&self) -> Duration {
        self.slept.lock().unwrap().iter().sum()
    }
}

#[cfg(feature = "mock-time")]
impl Timer for MockTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.slept.lock().unwrap().push(duration);
        std::future::ready(())
    }
}
