//! Kiosk views.
//!
//! One view per screen, built fresh each time the session arrives on it:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        App                           │
//! │   event ──► View::handle_event ──► ViewAction        │
//! │   tick  ──► View::tick         ──► ViewAction        │
//! │                                        │             │
//! │            NavigationController::request ◄┘          │
//! │                    │                                 │
//! │        screen changed? on_exit / for_screen / on_enter│
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod card_menu;
pub mod options;
pub mod reference_input;
pub mod screen_trait;
pub mod service_summary;
pub mod timed;

pub use card_menu::CardMenuView;
pub use reference_input::ReferenceInputView;
pub use screen_trait::{RenderContext, View, ViewAction};
pub use service_summary::ServiceSummaryView;
pub use timed::TimedView;

use crate::keymap::Action;
use crate::navigation::ScreenId;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::Rect;

/// Widest the content column gets on large displays
const CONTENT_WIDTH: u16 = 76;

/// Build the view for `screen`.
pub fn for_screen(screen: ScreenId) -> Box<dyn View> {
    match screen {
        ScreenId::ReadingId | ScreenId::Verification | ScreenId::Processing => {
            Box::new(TimedView::new(screen))
        }
        ScreenId::ServiceDetails | ScreenId::Confirmation | ScreenId::Success => {
            Box::new(ServiceSummaryView::new(screen))
        }
        ScreenId::CheckApplicationInput => Box::new(ReferenceInputView::new()),
        _ => Box::new(CardMenuView::new(screen)),
    }
}

/// Keymap action for a key press, if the event is one
pub(crate) fn key_action(event: &Event, ctx: &RenderContext) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            ctx.config.keymap.get_action(key.code, key.modifiers)
        }
        _ => None,
    }
}

/// Horizontally centered column, one row below the top of `area`
pub(crate) fn content_column(area: Rect) -> Rect {
    let width = CONTENT_WIDTH.min(area.width.saturating_sub(2));
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + 1.min(area.height),
        width,
        area.height.saturating_sub(1),
    )
}
