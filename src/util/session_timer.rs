//! Forced-logout countdown for idle sessions.
//!
//! A single pending countdown per timer: re-arming cancels the previous
//! one (the browser timeout handle cancels on drop), so overlapping
//! expiries cannot stack. A non-positive configured duration disables the
//! timer entirely.

#[cfg(test)]
#[path = "session_timer_test.rs"]
mod session_timer_test;

/// Countdown that fires an expiry callback once, unless re-armed first.
pub struct SessionTimer {
    duration_ms: i64,
    #[cfg(feature = "hydrate")]
    pending: Option<gloo_timers::callback::Timeout>,
}

impl SessionTimer {
    pub fn new(duration_ms: i64) -> Self {
        Self {
            duration_ms,
            #[cfg(feature = "hydrate")]
            pending: None,
        }
    }

    /// Start (or restart) the countdown. The last `arm` call wins.
    pub fn arm<F>(&mut self, on_expire: F)
    where
        F: FnOnce() + 'static,
    {
        self.disarm();
        let Some(delay) = effective_delay(self.duration_ms) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            self.pending = Some(gloo_timers::callback::Timeout::new(delay, on_expire));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (delay, on_expire);
    }

    /// Cancel any pending countdown. Safe when nothing is armed.
    pub fn disarm(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            // Dropping the handle cancels the pending callback.
            self.pending = None;
        }
    }
}

/// Browser timeout delay for a configured duration.
///
/// `None` disables expiry: either the escape hatch (`duration_ms <= 0`) or
/// a duration too large for the browser timer API to represent.
pub fn effective_delay(duration_ms: i64) -> Option<u32> {
    if duration_ms <= 0 {
        return None;
    }
    u32::try_from(duration_ms).ok()
}
