//! Semantic actions the kiosk reacts to.

use serde::{Deserialize, Serialize};

/// All keyboard-triggered actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation within a screen ============
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Home,
    End,

    // ============ Selection ============
    /// Activate the highlighted option (Enter)
    Confirm,
    /// Go back one screen (Esc)
    Back,

    // ============ Session ============
    /// End the session and return to the welcome screen
    Logout,
    /// Shut the kiosk application down
    Quit,

    // ============ Text editing ============
    Backspace,
    DeleteChar,
}

impl Action {
    /// Human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Home => "First option",
            Action::End => "Last option",
            Action::Confirm => "Select",
            Action::Back => "Back",
            Action::Logout => "Log out",
            Action::Quit => "Quit",
            Action::Backspace => "Delete previous character",
            Action::DeleteChar => "Delete character",
        }
    }

    /// Whether the action still applies while a text field has focus.
    ///
    /// Actions bound to printable keys would otherwise swallow typing.
    pub fn allowed_while_typing(&self) -> bool {
        matches!(
            self,
            Action::Confirm
                | Action::Back
                | Action::Logout
                | Action::Quit
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
        )
    }
}
