//! Navigation controller.
//!
//! The only writer of the session store. Views hand it an [`Intent`] with an
//! optional [`Payload`]; it validates the intent against the screen graph,
//! applies payload mutations before the screen changes (so the next view
//! sees complete state on its first render) and refreshes the activity
//! timestamp last.
//!
//! Refused intents are not errors. They come back as [`Outcome::Stayed`]
//! and still count as activity.

use super::graph::{Resolution, ScreenGraph};
use super::intent::{Intent, Payload};
use super::screen_id::ScreenId;
use crate::state::{Mutation, SessionState, SessionStore};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Why an intent left the screen unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StayReason {
    /// No edge for this intent, or the discriminator was not recognised.
    Unresolvable,
    /// The intent or its target needs data that was not supplied.
    MissingPayload,
}

/// What happened to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Moved { from: ScreenId, to: ScreenId },
    Stayed(StayReason),
    LoggedOut,
}

impl Outcome {
    pub fn moved(&self) -> bool {
        matches!(self, Outcome::Moved { .. } | Outcome::LoggedOut)
    }
}

/// Orchestrates screen changes for one kiosk.
#[derive(Debug, Clone)]
pub struct NavigationController {
    graph: ScreenGraph,
    store: SessionStore,
    /// Bumped on every logout so work armed in an earlier session can tell
    /// it has been superseded.
    epoch: u64,
}

impl NavigationController {
    /// Start a fresh session on the entry screen.
    pub fn new(graph: ScreenGraph, now: Instant) -> Self {
        Self {
            graph,
            store: SessionStore::new(now),
            epoch: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        self.store.get()
    }

    pub fn screen(&self) -> ScreenId {
        self.store.get().screen
    }

    pub fn session_epoch(&self) -> u64 {
        self.epoch
    }

    /// Liveness tap: refresh the activity timestamp without navigating.
    pub fn touch(&mut self, now: Instant) {
        self.store.apply(Mutation::TouchActivity(now));
    }

    /// End the session. The single way back to the entry screen.
    pub fn logout(&mut self, now: Instant) -> Outcome {
        let from = self.screen();
        self.store.apply(Mutation::Reset(now));
        self.epoch += 1;
        info!(from = %from, epoch = self.epoch, "session reset");
        Outcome::LoggedOut
    }

    /// Request a transition.
    pub fn request(&mut self, intent: Intent, payload: Option<Payload>, now: Instant) -> Outcome {
        let from = self.screen();
        debug!(screen = %from, intent = %intent, ?payload, "intent requested");

        if intent == Intent::Logout {
            return self.logout(now);
        }

        let outcome = match self.graph.resolve(from, intent, payload.as_ref()) {
            Resolution::Target(to) => self.transition(from, to, intent, payload),
            Resolution::NoEdge | Resolution::UnknownDiscriminator => {
                warn!(screen = %from, intent = %intent, "intent not resolvable, staying");
                Outcome::Stayed(StayReason::Unresolvable)
            }
            Resolution::MissingPayload => {
                warn!(screen = %from, intent = %intent, "intent payload missing, staying");
                Outcome::Stayed(StayReason::MissingPayload)
            }
        };

        self.touch(now);
        outcome
    }

    fn transition(
        &mut self,
        from: ScreenId,
        to: ScreenId,
        intent: Intent,
        payload: Option<Payload>,
    ) -> Outcome {
        let mut mutations = Vec::new();

        match payload {
            Some(Payload::Login(method)) => mutations.push(Mutation::SetLoginMethod(method)),
            Some(Payload::Service(service)) if to.in_service_flow() => {
                mutations.push(Mutation::SetSelectedService(Some(service)));
            }
            Some(Payload::Reference(reference)) => {
                let reference = reference.trim();
                if reference.is_empty() {
                    warn!(screen = %from, "blank reference id refused");
                    return Outcome::Stayed(StayReason::MissingPayload);
                }
                mutations.push(Mutation::SetReferenceId(reference.to_string()));
            }
            Some(Payload::Service(_) | Payload::Choice(_)) | None => {}
        }

        if to.requires_service() {
            let has_service = self.state().selected_service.is_some()
                || mutations
                    .iter()
                    .any(|m| matches!(m, Mutation::SetSelectedService(Some(_))));
            if !has_service {
                warn!(from = %from, to = %to, "no selected service, refusing transition");
                return Outcome::Stayed(StayReason::MissingPayload);
            }
        }

        if !to.in_service_flow() && self.state().selected_service.is_some() {
            mutations.push(Mutation::SetSelectedService(None));
        }
        if !to.in_reference_flow() && !self.state().reference_id.is_empty() {
            mutations.push(Mutation::SetReferenceId(String::new()));
        }

        for mutation in mutations {
            self.store.apply(mutation);
        }
        self.store.apply(Mutation::SetScreen(to));

        info!(from = %from, to = %to, intent = %intent, "screen changed");
        Outcome::Moved { from, to }
    }
}
