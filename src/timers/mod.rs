//! Time-driven session policies.
//!
//! Nothing here sleeps or spawns. Every check takes `now` explicitly and is
//! driven from the single event loop, so the session has one writer.

pub mod completion;
pub mod inactivity;

pub use completion::CompletionTimer;
pub use inactivity::{InactivityMonitor, MonitorState, PollOutcome};
