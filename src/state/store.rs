//! Session state store.
//!
//! Holds exactly one [`SessionState`] and applies mutations to it. Every
//! mutation is total: combinations that make no sense are kept out by the
//! navigation controller, not rejected here.

use super::session::{LoginMethod, SelectedService, SessionState};
use crate::navigation::ScreenId;
use std::time::Instant;

/// A single change to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetScreen(ScreenId),
    SetLoginMethod(LoginMethod),
    SetSelectedService(Option<SelectedService>),
    SetReferenceId(String),
    TouchActivity(Instant),
    /// Zero every field and pin the screen to the entry screen.
    Reset(Instant),
}

/// Owner of the live session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    state: SessionState,
}

impl SessionStore {
    pub fn new(now: Instant) -> Self {
        Self {
            state: SessionState::new(now),
        }
    }

    /// Read-only view of the current session.
    pub fn get(&self) -> &SessionState {
        &self.state
    }

    /// Apply a mutation and return the updated session.
    pub fn apply(&mut self, mutation: Mutation) -> &SessionState {
        match mutation {
            Mutation::SetScreen(screen) => self.state.screen = screen,
            Mutation::SetLoginMethod(method) => self.state.login_method = method,
            Mutation::SetSelectedService(service) => self.state.selected_service = service,
            Mutation::SetReferenceId(reference) => self.state.reference_id = reference,
            Mutation::TouchActivity(now) => self.state.last_activity = now,
            Mutation::Reset(now) => self.state = SessionState::new(now),
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_apply_sets_each_field() {
        let start = Instant::now();
        let mut store = SessionStore::new(start);

        store.apply(Mutation::SetScreen(ScreenId::EligibilityWallet));
        store.apply(Mutation::SetLoginMethod(LoginMethod::QuickResponseCode));
        store.apply(Mutation::SetSelectedService(Some(SelectedService::new("x", "X"))));
        store.apply(Mutation::SetReferenceId("REF1".to_string()));
        let later = start + Duration::from_secs(5);
        let state = store.apply(Mutation::TouchActivity(later));

        assert_eq!(state.screen, ScreenId::EligibilityWallet);
        assert_eq!(state.login_method, LoginMethod::QuickResponseCode);
        assert_eq!(state.selected_service.as_ref().map(|s| s.id.as_str()), Some("x"));
        assert_eq!(state.reference_id, "REF1");
        assert_eq!(state.last_activity, later);
    }

    #[test]
    fn test_reset_leaves_no_residue() {
        let start = Instant::now();
        let mut store = SessionStore::new(start);
        store.apply(Mutation::SetScreen(ScreenId::Success));
        store.apply(Mutation::SetLoginMethod(LoginMethod::CredentialCard));
        store.apply(Mutation::SetSelectedService(Some(SelectedService::new("x", "X"))));
        store.apply(Mutation::SetReferenceId("REF1".to_string()));

        let now = start + Duration::from_secs(60);
        let state = store.apply(Mutation::Reset(now)).clone();

        assert_eq!(state, SessionState::new(now));
        assert!(state.is_reset_shape());
    }
}
