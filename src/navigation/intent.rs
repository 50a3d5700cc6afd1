//! Intents that views emit and the payloads they carry.

use crate::state::{LoginMethod, SelectedService};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named action requested by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    /// Login method chosen on the entry screen.
    StartLogin,
    /// Fired by a timed screen when its simulated work is done.
    Complete,
    Continue,
    ViewServices,
    OpenCard,
    CheckApplication,
    ApplicationHistory,
    SelectService,
    SelectGrant,
    OpenCoverage,
    OpenHistory,
    Accept,
    Confirm,
    Finish,
    CheckOtherServices,
    Submit,
    CheckAnother,
    Back,
    /// End the session. Handled by the controller, never by the graph.
    Logout,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::StartLogin => "start-login",
            Intent::Complete => "complete",
            Intent::Continue => "continue",
            Intent::ViewServices => "view-services",
            Intent::OpenCard => "open-card",
            Intent::CheckApplication => "check-application",
            Intent::ApplicationHistory => "application-history",
            Intent::SelectService => "select-service",
            Intent::SelectGrant => "select-grant",
            Intent::OpenCoverage => "open-coverage",
            Intent::OpenHistory => "open-history",
            Intent::Accept => "accept",
            Intent::Confirm => "confirm",
            Intent::Finish => "finish",
            Intent::CheckOtherServices => "check-other-services",
            Intent::Submit => "submit",
            Intent::CheckAnother => "check-another",
            Intent::Back => "back",
            Intent::Logout => "logout",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data attached to an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Login(LoginMethod),
    Service(SelectedService),
    Reference(String),
    /// Discriminator picked inside a grouped screen (card, category, detail).
    Choice(String),
}

impl Payload {
    pub fn choice(value: impl Into<String>) -> Self {
        Payload::Choice(value.into())
    }

    /// The string used to pick between fan-out edges, if this payload has one.
    pub fn discriminator(&self) -> Option<&str> {
        match self {
            Payload::Choice(value) => Some(value),
            Payload::Service(service) => Some(&service.id),
            Payload::Login(_) | Payload::Reference(_) => None,
        }
    }

    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Login(_) => PayloadKind::Login,
            Payload::Service(_) => PayloadKind::Service,
            Payload::Reference(_) => PayloadKind::Reference,
            Payload::Choice(_) => PayloadKind::Choice,
        }
    }
}

/// The payload shape an edge expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadKind {
    Login,
    Service,
    Reference,
    Choice,
}
