//! Cancellable one-shot deferred task.

use std::time::{Duration, Instant};

/// Delay before a platform text field is actually focused.
pub const NATIVE_FOCUS_DELAY: Duration = Duration::from_millis(150);

/// A value scheduled to become due after a delay.
///
/// Nothing runs on its own: the owner polls with the current time and acts
/// on the value once it is due. Cancelling drops the pending value.
#[derive(Clone, Debug)]
pub struct Deferred<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Deferred<T> {
    /// Create an idle task with a fixed delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Configured delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing anything already pending.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Drop the pending value. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Check if a value is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(at, _)| *at)
    }

    /// Take the pending value if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((at, _)) if now >= *at => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self::new(NATIVE_FOCUS_DELAY)
    }
}
