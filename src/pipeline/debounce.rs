use std::time::Duration;

use super::time::{Timestamp, DEFAULT_QUIET_WINDOW_MS};

/// Single-slot sliding-window debouncer for scroll-class signals.
///
/// The stored timestamp moves forward on every call, suppressed or not, so a
/// burst spaced tighter than the quiet window keeps postponing the next
/// accepted signal. The slot is shared across origins.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_window_ms: u64,
    last: Option<Timestamp>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_QUIET_WINDOW_MS))
    }
}

impl Debouncer {
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window_ms: quiet_window.as_millis() as u64,
            last: None,
        }
    }

    pub fn should_suppress(&mut self, timestamp: Timestamp) -> bool {
        let suppress = match self.last {
            // Out-of-order timestamps saturate to 0 and count as inside the window.
            Some(last) => timestamp.saturating_sub(last) < self.quiet_window_ms,
            None => false,
        };
        self.last = Some(timestamp);
        suppress
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.last
    }

    pub fn quiet_window(&self) -> Duration {
        Duration::from_millis(self.quiet_window_ms)
    }
}
