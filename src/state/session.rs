//! The session aggregate and the records it carries between screens.

use crate::navigation::ScreenId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// How the citizen chose to identify themselves on the entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginMethod {
    /// Physical identity card inserted into the reader.
    CredentialCard,
    /// QR code scanned from a phone.
    QuickResponseCode,
    #[default]
    None,
}

impl LoginMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginMethod::CredentialCard => "credential-card",
            LoginMethod::QuickResponseCode => "quick-response-code",
            LoginMethod::None => "none",
        }
    }

    /// Human-readable label for the reader screens.
    pub fn label(&self) -> &'static str {
        match self {
            LoginMethod::CredentialCard => "MyKad",
            LoginMethod::QuickResponseCode => "MyDigital ID QR",
            LoginMethod::None => "-",
        }
    }
}

impl fmt::Display for LoginMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service chosen on the eligible-services screen.
///
/// Owned by the session from selection until the application sub-flow is
/// left (finish, cancel, or logout).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedService {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub eligibility_requirements: Vec<String>,
    pub category: String,
}

impl SelectedService {
    /// Create a service with only an id and title; other fields empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: String::new(),
            description: String::new(),
            eligibility_requirements: Vec::new(),
            category: String::new(),
        }
    }
}

/// The single live session.
///
/// Recreated wholesale on logout; nothing from a previous citizen survives
/// except the screen, which is pinned to the entry screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub screen: ScreenId,
    pub login_method: LoginMethod,
    pub selected_service: Option<SelectedService>,
    /// Reference id typed on the check-application screen. Empty when unset.
    pub reference_id: String,
    pub last_activity: Instant,
}

impl SessionState {
    /// A fresh session on the entry screen.
    pub fn new(now: Instant) -> Self {
        Self {
            screen: ScreenId::ENTRY,
            login_method: LoginMethod::None,
            selected_service: None,
            reference_id: String::new(),
            last_activity: now,
        }
    }

    /// True when every field other than the activity timestamp is at its
    /// reset value.
    pub fn is_reset_shape(&self) -> bool {
        self.screen.is_entry()
            && self.login_method == LoginMethod::None
            && self.selected_service.is_none()
            && self.reference_id.is_empty()
    }
}
