//! Screen graph and navigation control.
//!
//! ```text
//!  view ──Intent + Payload──▶ NavigationController ──resolve──▶ ScreenGraph
//!                                  │
//!                                  ▼ apply(Mutation)
//!                             SessionStore
//! ```

pub mod controller;
pub mod graph;
pub mod intent;
pub mod screen_id;

pub use controller::{NavigationController, Outcome, StayReason};
pub use graph::{Edge, EdgeRow, Resolution, ScreenGraph, Target};
pub use intent::{Intent, Payload, PayloadKind};
pub use screen_id::ScreenId;
