mod common;

use common::{at_wallet, fresh, payload_for, service, walk_to};
use kioskflow::navigation::{Intent, Outcome, Payload, ScreenId, StayReason};
use kioskflow::state::{LoginMethod, SelectedService};
use std::time::{Duration, Instant};

#[test]
fn test_login_with_card_reaches_wallet() {
    let t0 = Instant::now();
    let mut nav = fresh(t0);

    let steps = [
        (Intent::StartLogin, Some(Payload::Login(LoginMethod::CredentialCard)), ScreenId::ReadingId),
        (Intent::Complete, None, ScreenId::Verification),
        (Intent::Complete, None, ScreenId::IdentityVerified),
        (Intent::Continue, None, ScreenId::EligibilityWallet),
    ];
    for (intent, payload, expected) in steps {
        let outcome = nav.request(intent, payload, t0);
        assert!(outcome.moved(), "{intent} did not move");
        assert_eq!(nav.screen(), expected);
    }
    assert_eq!(nav.state().login_method, LoginMethod::CredentialCard);
}

#[test]
fn test_service_application_then_finish() {
    let t0 = Instant::now();
    let mut nav = at_wallet(t0, LoginMethod::QuickResponseCode);
    let x = SelectedService::new("x", "Service X");

    nav.request(Intent::ViewServices, None, t0);
    nav.request(Intent::SelectService, Some(Payload::Service(x.clone())), t0);
    assert_eq!(nav.screen(), ScreenId::ServiceDetails);
    assert_eq!(nav.state().selected_service.as_ref(), Some(&x));

    nav.request(Intent::Accept, None, t0);
    nav.request(Intent::Confirm, None, t0);
    assert_eq!(nav.screen(), ScreenId::Processing);
    nav.request(Intent::Complete, None, t0);
    assert_eq!(nav.screen(), ScreenId::Success);
    assert_eq!(nav.state().selected_service.as_ref(), Some(&x));

    nav.request(Intent::Finish, None, t0);
    assert_eq!(nav.screen(), ScreenId::EligibilityWallet);
    assert!(nav.state().selected_service.is_none());

    assert_eq!(nav.logout(t0), Outcome::LoggedOut);
    assert!(nav.state().selected_service.is_none());
}

#[test]
fn test_check_other_services_clears_selection() {
    let t0 = Instant::now();
    let mut nav = at_wallet(t0, LoginMethod::CredentialCard);
    nav.request(Intent::ViewServices, None, t0);
    nav.request(Intent::SelectService, Some(Payload::Service(service("transit-pass"))), t0);
    nav.request(Intent::Accept, None, t0);
    nav.request(Intent::Confirm, None, t0);
    nav.request(Intent::Complete, None, t0);

    nav.request(Intent::CheckOtherServices, None, t0);
    assert_eq!(nav.screen(), ScreenId::EligibleServices);
    assert!(nav.state().selected_service.is_none());
}

#[test]
fn test_reference_lookup_and_check_another() {
    let t0 = Instant::now();
    let mut nav = at_wallet(t0, LoginMethod::CredentialCard);

    nav.request(Intent::CheckApplication, None, t0);
    assert_eq!(nav.screen(), ScreenId::CheckApplicationInput);
    nav.request(Intent::Submit, Some(Payload::Reference("REF123".into())), t0);
    assert_eq!(nav.screen(), ScreenId::ApplicationDetails);
    assert_eq!(nav.state().reference_id, "REF123");

    nav.request(Intent::CheckAnother, None, t0);
    assert_eq!(nav.screen(), ScreenId::CheckApplicationInput);
    assert_eq!(nav.state().reference_id, "REF123");

    nav.request(Intent::Submit, Some(Payload::Reference("  REF999 ".into())), t0);
    assert_eq!(nav.state().reference_id, "REF999");

    nav.request(Intent::Back, None, t0);
    assert_eq!(nav.screen(), ScreenId::EligibilityWallet);
    assert!(nav.state().reference_id.is_empty());
}

#[test]
fn test_grouped_services_open_their_category() {
    let t0 = Instant::now();
    let mut nav = at_wallet(t0, LoginMethod::CredentialCard);
    nav.request(Intent::ViewServices, None, t0);

    nav.request(Intent::SelectService, Some(Payload::Service(service("student-grant"))), t0);
    assert_eq!(nav.screen(), ScreenId::StudentGrantCategory);
    assert!(nav.state().selected_service.is_none());

    nav.request(Intent::SelectGrant, Some(Payload::choice("jpa")), t0);
    assert_eq!(nav.screen(), ScreenId::JpaDetail);
    nav.request(Intent::Back, None, t0);
    nav.request(Intent::Back, None, t0);

    nav.request(Intent::SelectService, Some(Payload::Service(service("healthcare-benefit"))), t0);
    assert_eq!(nav.screen(), ScreenId::HealthcareCoverage);
    nav.request(Intent::OpenCoverage, Some(Payload::choice("peka-b40")), t0);
    assert_eq!(nav.screen(), ScreenId::PekaB40Detail);
}

#[test]
fn test_history_dashboard_categories() {
    let t0 = Instant::now();
    let mut nav = at_wallet(t0, LoginMethod::CredentialCard);
    nav.request(Intent::ApplicationHistory, None, t0);

    for (choice, screen) in [
        ("social-services", ScreenId::SocialServicesHistory),
        ("transportation", ScreenId::TransportationHistory),
        ("education", ScreenId::EducationHistory),
        ("healthcare", ScreenId::HealthcareCoverageStatus),
    ] {
        nav.request(Intent::OpenHistory, Some(Payload::choice(choice)), t0);
        assert_eq!(nav.screen(), screen);
        nav.request(Intent::Back, None, t0);
        assert_eq!(nav.screen(), ScreenId::ApplicationHistoryDashboard);
    }
}

#[test]
fn test_logout_from_every_screen_resets_session() {
    for screen in ScreenId::ALL.into_iter().filter(|s| !s.is_entry()) {
        let t0 = Instant::now();
        let mut nav = fresh(t0);
        walk_to(&mut nav, screen, t0);

        let later = t0 + Duration::from_secs(30);
        let epoch = nav.session_epoch();
        assert_eq!(nav.request(Intent::Logout, None, later), Outcome::LoggedOut, "{screen}");
        let state = nav.state();
        assert_eq!(state.screen, ScreenId::Welcome);
        assert_eq!(state.login_method, LoginMethod::None);
        assert!(state.selected_service.is_none());
        assert!(state.reference_id.is_empty());
        assert_eq!(state.last_activity, later);
        assert_eq!(nav.session_epoch(), epoch + 1);
    }
}

#[test]
fn test_every_declared_intent_lands_on_a_registered_screen() {
    let graph = kioskflow::ScreenGraph::standard();
    for row in graph.rows() {
        let t0 = Instant::now();
        let mut nav = fresh(t0);
        if !row.from.is_entry() {
            walk_to(&mut nav, row.from, t0);
        }
        nav.request(row.intent, payload_for(&row), t0);
        assert!(ScreenId::ALL.contains(&nav.screen()));
        assert_eq!(nav.screen(), row.to, "{} --{}-->", row.from, row.intent);
    }
}

#[test]
fn test_unresolvable_intent_is_idempotent() {
    let t0 = Instant::now();
    let mut nav = at_wallet(t0, LoginMethod::CredentialCard);

    for i in 1..=2 {
        let now = t0 + Duration::from_secs(i);
        let outcome = nav.request(Intent::Confirm, None, now);
        assert_eq!(outcome, Outcome::Stayed(StayReason::Unresolvable));
        assert_eq!(nav.screen(), ScreenId::EligibilityWallet);
        assert_eq!(nav.state().last_activity, now);
    }
}

#[test]
fn test_unknown_card_stays_put() {
    let t0 = Instant::now();
    let mut nav = at_wallet(t0, LoginMethod::CredentialCard);
    let outcome = nav.request(Intent::OpenCard, Some(Payload::choice("pensioner")), t0);
    assert_eq!(outcome, Outcome::Stayed(StayReason::Unresolvable));
    assert_eq!(nav.screen(), ScreenId::EligibilityWallet);
}

#[test]
fn test_every_edge_targets_a_registered_screen() {
    let graph = kioskflow::ScreenGraph::standard();
    let reachable = graph.reachable();
    for screen in ScreenId::ALL {
        assert!(reachable.contains(&screen), "{screen} is unreachable");
    }
    for row in graph.rows() {
        assert!(ScreenId::ALL.contains(&row.to));
        assert_eq!(ScreenId::parse_or_entry(row.to.as_str()), row.to);
    }
}

#[test]
fn test_unknown_screen_tag_falls_back_to_entry() {
    assert_eq!(ScreenId::parse_or_entry("payment-gateway"), ScreenId::Welcome);
}
