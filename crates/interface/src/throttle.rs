use std::{
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Minimum spacing between two outbound requests of one translator.
///
/// The first request never waits.
pub struct Throttle {
    spacing: Duration,
    last: Mutex<Option<Instant>>,
    sleeper: Arc<dyn Sleeper>,
}

impl Throttle {
    pub fn new(spacing: Duration) -> Self {
        Self {
            spacing,
            last: Mutex::new(None),
            sleeper: Arc::new(ThreadSleeper),
        }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Blocks until `spacing` has passed since the previous call.
    pub fn wait(&self) {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = *last {
            let remaining = self.spacing.saturating_sub(previous.elapsed());
            if !remaining.is_zero() {
                log::debug!("throttling next request for {remaining:?}");
                self.sleeper.sleep(remaining);
            }
        }
        *last = Some(Instant::now());
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::disabled()
    }
}
