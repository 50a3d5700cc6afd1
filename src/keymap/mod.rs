//! Keymap configuration module
//!
//! Maps terminal key events to kiosk [`Action`]s, from a preset plus
//! optional per-kiosk overrides in the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding};
pub use presets::KeymapPreset;

use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,
    /// Checked before the preset; an overridden action loses its preset keys
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// All effective bindings, overrides shadowing preset bindings of the same action
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Display string for the first key bound to `action`
    pub fn key_for(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer hint text. `session` adds the logout key.
    pub fn footer(&self, session: bool) -> String {
        let mut parts = vec![
            format!(
                "Navigate: {}/{}",
                self.key_for(Action::MoveUp),
                self.key_for(Action::MoveDown)
            ),
            format!("Select: {}", self.key_for(Action::Confirm)),
            format!("Back: {}", self.key_for(Action::Back)),
        ];
        if session {
            parts.push(format!("Log out: {}", self.key_for(Action::Logout)));
        }
        parts.join(" | ")
    }

    /// Reject overrides whose key strings cannot be parsed
    pub fn validate(&self) -> Result<()> {
        for binding in &self.overrides {
            parse_key_string(&binding.key)
                .map_err(|e| anyhow!("keymap override for {:?}: {}", binding.action, e))?;
        }
        Ok(())
    }
}
