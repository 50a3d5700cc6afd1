//! Inactivity monitor.
//!
//! Polls on a fixed interval and ends the session once the citizen has been
//! idle for longer than the timeout. Suspended on the entry screen, where
//! there is no session to expire.
//!
//! This is a liveness policy, not a security boundary: a logout may land up
//! to one poll interval late.

use crate::navigation::{NavigationController, ScreenId};
use crate::state::SessionState;
use std::time::{Duration, Instant};
use tracing::info;

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Whether the monitor would act on an expired session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Armed,
    Suspended,
}

/// Result of a poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The poll interval has not elapsed yet.
    NotDue,
    /// On the entry screen; nothing checked.
    Suspended,
    /// Checked and the session is still live.
    Active,
    /// Checked and the session was ended.
    LoggedOut,
}

#[derive(Debug, Clone)]
pub struct InactivityMonitor {
    timeout: Duration,
    poll_interval: Duration,
    next_poll: Instant,
}

impl InactivityMonitor {
    /// A zero `poll_interval` is raised to one millisecond.
    pub fn new(timeout: Duration, poll_interval: Duration, now: Instant) -> Self {
        let poll_interval = poll_interval.max(MIN_POLL_INTERVAL);
        Self {
            timeout,
            poll_interval,
            next_poll: now + poll_interval,
        }
    }

    /// When the next check is due.
    pub fn next_poll(&self) -> Instant {
        self.next_poll
    }

    pub fn status(&self, screen: ScreenId) -> MonitorState {
        if screen.is_entry() {
            MonitorState::Suspended
        } else {
            MonitorState::Armed
        }
    }

    /// Idle for strictly longer than the timeout.
    pub fn is_expired(&self, state: &SessionState, now: Instant) -> bool {
        now.saturating_duration_since(state.last_activity) > self.timeout
    }

    /// Time left before the session counts as idle.
    pub fn remaining(&self, state: &SessionState, now: Instant) -> Duration {
        self.timeout
            .saturating_sub(now.saturating_duration_since(state.last_activity))
    }

    /// Run the periodic check if it is due.
    ///
    /// The schedule stays on its original cadence; missed ticks are skipped,
    /// never replayed.
    pub fn tick(&mut self, nav: &mut NavigationController, now: Instant) -> PollOutcome {
        if now < self.next_poll {
            return PollOutcome::NotDue;
        }
        while self.next_poll <= now {
            self.next_poll += self.poll_interval;
        }
        self.check(nav, now)
    }

    /// Check immediately, regardless of the poll schedule.
    pub fn check(&self, nav: &mut NavigationController, now: Instant) -> PollOutcome {
        if self.status(nav.screen()) == MonitorState::Suspended {
            return PollOutcome::Suspended;
        }
        if self.is_expired(nav.state(), now) {
            let idle = now.saturating_duration_since(nav.state().last_activity);
            info!(screen = %nav.screen(), idle_secs = idle.as_secs(), "inactivity timeout");
            nav.logout(now);
            return PollOutcome::LoggedOut;
        }
        PollOutcome::Active
    }
}
