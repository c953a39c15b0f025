/// Trailing-edge debounce, driven by caller-supplied instants.
///
/// There is no timer thread: the owner calls [`Debouncer::poll`] from its
/// own loop (the GUI does so once per frame) and asks to be woken after
/// [`Debouncer::time_remaining`]. Scheduling replaces whatever was pending,
/// so only the most recent value ever fires.
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` to fire `delay` after `now`, cancelling any
    /// previously pending value.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now >= deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Time until the pending value fires, `None` if nothing is pending.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }
}
