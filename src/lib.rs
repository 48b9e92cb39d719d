//! Tabula: a table-driven finite state machine dispatcher
//!
//! Tabula separates the *data* of a state machine (an immutable
//! transition table mapping (state, event) pairs to a next state and an
//! ordered list of action identifiers) from the *control* (a dispatcher
//! that looks up the pair and either commits the transition or routes
//! the event to an unhandled-transition hook).
//!
//! # Core Concepts
//!
//! - **State / Event / Action**: closed, named identifier sets via the
//!   [`core::State`], [`core::Event`] and [`core::Action`] traits
//! - **Transition Table**: a statically constructed, validated mapping
//!   built with [`table::TableBuilder`]
//! - **Dispatcher**: holds the current state, receives events, invokes
//!   actions through an injected [`dispatch::ActionHandler`]
//! - **Unhandled transitions**: a designed, non-exceptional outcome
//!   routed to a required fallback hook with the state and event names
//!
//! # Example
//!
//! The crate ships its reference instantiation, a coin-operated
//! turnstile, in the [`turnstile`] module:
//!
//! ```rust
//! use tabula::turnstile::{Turnstile, TurnstileControls, TurnstileState};
//!
//! struct Gate;
//!
//! impl TurnstileControls for Gate {
//!     fn alarm_on(&mut self) {}
//!     fn alarm_off(&mut self) {}
//!     fn lock(&mut self) {}
//!     fn unlock(&mut self) {}
//!     fn thankyou(&mut self) {}
//! }
//!
//! let mut turnstile = Turnstile::new(Gate, |state, event| {
//!     eprintln!("no transition from {state} on {event}");
//! });
//!
//! turnstile.coin();
//! turnstile.coin();
//! assert_eq!(turnstile.state(), &TurnstileState::Unlocked);
//! ```

pub mod core;
pub mod dispatch;
pub mod table;
pub mod turnstile;

// Re-export commonly used types
pub use crate::core::{Action, DispatchLog, DispatchRecord, Event, State};
pub use crate::dispatch::{ActionHandler, Dispatcher};
pub use crate::table::{BuildError, TableBuilder, TableEntry, TransitionTable};
