//! Core identifier traits and the dispatch log.
//!
//! This module contains the pure data side of the dispatcher:
//! - State, event and action identifiers via the `State`, `Event` and
//!   `Action` traits
//! - Macros for declaring identifier enums
//! - Immutable dispatch-log tracking
//!
//! Nothing in this module performs side effects; actions are invoked
//! only by the dispatcher through an injected handler.

mod action;
mod event;
mod log;
mod macros;
mod state;

pub use action::Action;
pub use event::Event;
pub use log::{DispatchLog, DispatchRecord};
pub use state::State;
