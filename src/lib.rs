//! kioskflow - navigation and session control for a self-service citizen
//! services kiosk
//!
//! The core is terminal-independent: a declarative [`ScreenGraph`], a single
//! [`SessionState`] written only by the [`NavigationController`], and timers
//! that take the current instant as an argument. The `app`, `screens` and
//! `tui` modules put a ratatui front end on top.

// Core modules
pub mod navigation;
pub mod state;
pub mod timers;

// Front end
pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use navigation::{Intent, NavigationController, Outcome, Payload, ScreenGraph, ScreenId};
pub use state::{LoginMethod, SelectedService, SessionState};
pub use timers::{CompletionTimer, InactivityMonitor, PollOutcome};

pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
