mod common;

use common::{at_wallet, fresh, ms, walk_to};
use kioskflow::navigation::{Intent, ScreenId};
use kioskflow::state::LoginMethod;
use kioskflow::timers::{CompletionTimer, InactivityMonitor, PollOutcome};
use std::time::{Duration, Instant};

const TIMEOUT: Duration = Duration::from_millis(600_000);
const POLL: Duration = Duration::from_millis(10_000);

#[test]
fn test_idle_past_timeout_logs_out_on_next_poll() {
    let t0 = Instant::now();
    let mut nav = at_wallet(t0, LoginMethod::CredentialCard);
    let mut monitor = InactivityMonitor::new(TIMEOUT, POLL, t0);

    // Every poll before the deadline finds the session alive
    let mut now = t0;
    while now + POLL < t0 + ms(600_000) {
        now += POLL;
        assert_eq!(monitor.tick(&mut nav, now), PollOutcome::Active);
    }

    let now = t0 + ms(601_000);
    assert_eq!(monitor.check(&mut nav, now), PollOutcome::LoggedOut);
    assert_eq!(nav.screen(), ScreenId::Welcome);
    assert!(nav.state().is_reset_shape());
}

#[test]
fn test_idle_just_under_timeout_stays() {
    let t0 = Instant::now();
    let mut nav = at_wallet(t0, LoginMethod::CredentialCard);
    let monitor = InactivityMonitor::new(TIMEOUT, POLL, t0);

    assert_eq!(monitor.check(&mut nav, t0 + ms(599_000)), PollOutcome::Active);
    assert_eq!(nav.screen(), ScreenId::EligibilityWallet);
}

#[test]
fn test_activity_pushes_the_deadline_back() {
    let t0 = Instant::now();
    let mut nav = at_wallet(t0, LoginMethod::CredentialCard);
    let monitor = InactivityMonitor::new(TIMEOUT, POLL, t0);

    nav.touch(t0 + ms(300_000));
    assert_eq!(monitor.check(&mut nav, t0 + ms(800_000)), PollOutcome::Active);
    assert_eq!(monitor.check(&mut nav, t0 + ms(901_000)), PollOutcome::LoggedOut);
}

#[test]
fn test_entry_screen_never_times_out() {
    let t0 = Instant::now();
    let mut nav = fresh(t0);
    let mut monitor = InactivityMonitor::new(TIMEOUT, POLL, t0);

    let much_later = t0 + Duration::from_secs(24 * 60 * 60);
    assert_eq!(monitor.tick(&mut nav, much_later), PollOutcome::Suspended);
    assert_eq!(nav.session_epoch(), 0);
    assert!(nav.state().is_reset_shape());
}

#[test]
fn test_poll_fires_once_for_a_long_gap() {
    let t0 = Instant::now();
    let mut nav = at_wallet(t0, LoginMethod::CredentialCard);
    let mut monitor = InactivityMonitor::new(TIMEOUT, POLL, t0);

    // A stalled loop catches up with a single check
    assert_eq!(monitor.tick(&mut nav, t0 + ms(95_000)), PollOutcome::Active);
    assert_eq!(monitor.tick(&mut nav, t0 + ms(95_001)), PollOutcome::NotDue);
    assert_eq!(monitor.next_poll(), t0 + ms(100_000));
}

#[test]
fn test_completion_timer_from_before_logout_never_fires() {
    let t0 = Instant::now();
    let mut nav = fresh(t0);
    walk_to(&mut nav, ScreenId::Processing, t0);

    let mut timer = CompletionTimer::arm(ScreenId::Processing, nav.session_epoch(), ms(3_000), t0);
    nav.logout(t0 + ms(1_000));

    // Same screen again in a new session: still stale
    walk_to(&mut nav, ScreenId::Processing, t0 + ms(1_500));
    assert_eq!(timer.poll(t0 + ms(3_000), nav.screen(), nav.session_epoch()), None);
    assert!(!timer.is_armed());
}

#[test]
fn test_completion_timer_fires_into_its_own_session() {
    let t0 = Instant::now();
    let mut nav = fresh(t0);
    walk_to(&mut nav, ScreenId::Verification, t0);

    let mut timer = CompletionTimer::arm(ScreenId::Verification, nav.session_epoch(), ms(2_000), t0);
    assert_eq!(timer.poll(t0 + ms(1_000), nav.screen(), nav.session_epoch()), None);
    let fired = timer.poll(t0 + ms(2_000), nav.screen(), nav.session_epoch());
    assert_eq!(fired, Some(Intent::Complete));
    nav.request(Intent::Complete, None, t0 + ms(2_000));
    assert_eq!(nav.screen(), ScreenId::IdentityVerified);
}
