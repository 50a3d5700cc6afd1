//! One-shot completion timers for the timed screens.
//!
//! A timed view arms a timer when it is entered and cancels it when it is
//! left. The timer remembers the screen and session epoch it was armed in,
//! so a timer that outlives its view or its session never fires.

use crate::navigation::{Intent, ScreenId};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CompletionTimer {
    screen: ScreenId,
    epoch: u64,
    armed_at: Instant,
    fires_at: Instant,
    armed: bool,
}

impl CompletionTimer {
    pub fn arm(screen: ScreenId, epoch: u64, delay: Duration, now: Instant) -> Self {
        debug!(screen = %screen, delay_ms = delay.as_millis() as u64, "completion timer armed");
        Self {
            screen,
            epoch,
            armed_at: now,
            fires_at: now + delay,
            armed: true,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn cancel(&mut self) {
        if self.armed {
            debug!(screen = %self.screen, "completion timer cancelled");
        }
        self.armed = false;
    }

    /// Fraction of the delay elapsed, clamped to `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f64 {
        let total = self.fires_at.saturating_duration_since(self.armed_at);
        if total.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.armed_at);
        (elapsed.as_secs_f64() / total.as_secs_f64()).min(1.0)
    }

    /// Fire at most once, and only into the session that armed the timer.
    pub fn poll(&mut self, now: Instant, screen: ScreenId, epoch: u64) -> Option<Intent> {
        if !self.armed {
            return None;
        }
        if screen != self.screen || epoch != self.epoch {
            debug!(armed_on = %self.screen, now_on = %screen, "stale completion timer dropped");
            self.armed = false;
            return None;
        }
        if now < self.fires_at {
            return None;
        }
        self.armed = false;
        Some(Intent::Complete)
    }
}
