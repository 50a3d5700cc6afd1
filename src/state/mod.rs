//! Session state management.
//!
//! All transient data for one citizen lives in a single [`SessionState`]
//! owned by a [`SessionStore`]. Only the navigation controller writes to the
//! store; views receive a read-only reference when they render.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                SessionStore                   │
//! ├──────────────────────────────────────────────┤
//! │  SessionState                                 │
//! │   - screen          (ScreenId)                │
//! │   - login_method    (LoginMethod)             │
//! │   - selected_service (Option<SelectedService>)│
//! │   - reference_id    (String)                  │
//! │   - last_activity   (Instant)                 │
//! └──────────────────────────────────────────────┘
//!        ▲ apply(Mutation)           │ get()
//!        │                           ▼
//!  NavigationController          views (read-only)
//! ```

pub mod session;
pub mod store;

pub use session::{LoginMethod, SelectedService, SessionState};
pub use store::{Mutation, SessionStore};
