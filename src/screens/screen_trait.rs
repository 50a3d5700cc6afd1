//! View trait and associated types.
//!
//! Views are presentational. They own only view-local state (highlighted
//! card, typed text, a pending completion timer) and talk to the session
//! through the intents they return, never by writing to it.

use crate::config::Config;
use crate::keymap::Keymap;
use crate::navigation::{Intent, Payload};
use crate::state::SessionState;
use crate::styles::Theme;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Instant;

/// Read-only context for rendering and event handling.
pub struct RenderContext<'a> {
    /// Current session snapshot.
    pub state: &'a SessionState,
    pub config: &'a Config,
    pub theme: &'a Theme,
    /// Session epoch, for timers that must not outlive their session.
    pub epoch: u64,
    pub now: Instant,
}

/// What a view wants after handling an event or a tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewAction {
    #[default]
    None,
    /// Ask the navigation controller for a transition.
    Request(Intent, Option<Payload>),
}

/// A screen's view.
pub trait View {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext);

    fn handle_event(&mut self, event: &Event, ctx: &RenderContext) -> ViewAction;

    /// Called on every loop iteration, whether or not an event arrived.
    fn tick(&mut self, _ctx: &RenderContext) -> ViewAction {
        ViewAction::None
    }

    /// Called when the session arrives on this view's screen.
    fn on_enter(&mut self, _ctx: &RenderContext) {}

    /// Called when the session leaves this view's screen.
    fn on_exit(&mut self) {}

    /// When true, plain character keys go to the view before any binding.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Footer hint text.
    fn footer(&self, keymap: &Keymap, in_session: bool) -> String {
        keymap.footer(in_session)
    }
}
