use std::time::Duration;

use tokio::time::Instant;

/// Default delay before a search edit is mirrored to the address
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Trailing-edge debounce for the search parameter
///
/// Each `push` restarts the timer; the value is released once `delay` has
/// passed without another push. The event loop sleeps until `deadline()`.
#[derive(Debug, Clone)]
pub struct SearchDebounce {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebounce {
    pub fn new(delay: Duration) -> Self {
        SearchDebounce {
            delay,
            pending: None,
        }
    }

    /// Record a new value and restart the timer
    pub fn push(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at)
    }

    /// Release the pending value once its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        if self.deadline().map_or(false, |at| at <= now) {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Drop any pending value without releasing it
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take().map(|(value, _)| value)
    }
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}
