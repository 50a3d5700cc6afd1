//! Shared helpers for the kiosk integration tests.
//!
//! Everything runs on injected instants, so flows that span minutes of
//! kiosk time finish instantly and never sleep.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use kioskflow::catalog;
use kioskflow::navigation::{
    EdgeRow, Intent, NavigationController, Payload, PayloadKind, ScreenGraph, ScreenId,
};
use kioskflow::state::{LoginMethod, SelectedService};
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// A fresh controller on the entry screen
pub fn fresh(now: Instant) -> NavigationController {
    NavigationController::new(ScreenGraph::standard(), now)
}

/// Walk a fresh session to the eligibility wallet with the given login method
pub fn at_wallet(now: Instant, method: LoginMethod) -> NavigationController {
    let mut nav = fresh(now);
    nav.request(Intent::StartLogin, Some(Payload::Login(method)), now);
    nav.request(Intent::Complete, None, now);
    nav.request(Intent::Complete, None, now);
    nav.request(Intent::Continue, None, now);
    assert_eq!(nav.screen(), ScreenId::EligibilityWallet);
    nav
}

/// A catalog service by id
pub fn service(id: &str) -> SelectedService {
    catalog::services()
        .into_iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| SelectedService::new(id, id))
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// A payload that satisfies the edge a row describes
pub fn payload_for(row: &EdgeRow) -> Option<Payload> {
    match row.requires? {
        PayloadKind::Login => Some(Payload::Login(LoginMethod::CredentialCard)),
        PayloadKind::Service => {
            let id = match row.choice {
                Some("*") | None => "x",
                Some(choice) => choice,
            };
            Some(Payload::Service(SelectedService::new(id, id)))
        }
        PayloadKind::Reference => Some(Payload::Reference("REF123".into())),
        PayloadKind::Choice => row.choice.map(Payload::choice),
    }
}

/// Shortest list of edges from the entry screen to `target`
pub fn path_to(target: ScreenId) -> Vec<EdgeRow> {
    let rows = ScreenGraph::standard().rows();
    let mut via: HashMap<ScreenId, EdgeRow> = HashMap::new();
    let mut queue = VecDeque::from([ScreenId::ENTRY]);
    while let Some(screen) = queue.pop_front() {
        if screen == target {
            break;
        }
        for row in rows.iter().filter(|r| r.from == screen) {
            if row.to != ScreenId::ENTRY && !via.contains_key(&row.to) {
                via.insert(row.to, row.clone());
                queue.push_back(row.to);
            }
        }
    }

    let mut path = Vec::new();
    let mut at = target;
    while at != ScreenId::ENTRY {
        let row = via[&at].clone();
        at = row.from;
        path.push(row);
    }
    path.reverse();
    path
}

/// Drive `nav` from the entry screen to `target` through real intents
pub fn walk_to(nav: &mut NavigationController, target: ScreenId, now: Instant) {
    for row in path_to(target) {
        let outcome = nav.request(row.intent, payload_for(&row), now);
        assert!(outcome.moved(), "{} --{}--> {} refused", row.from, row.intent, row.to);
    }
    assert_eq!(nav.screen(), target);
}
