//! The dispatch engine.
//!
//! This module is the imperative shell around the table data: the
//! `Dispatcher` holds the current state, receives events one at a time,
//! and either commits the table-defined transition or routes the event
//! to the injected unhandled-transition hook.
//!
//! # Execution Model
//!
//! Dispatch is single-threaded and synchronous: `submit` runs to
//! completion before returning, including every invoked action and the
//! fallback hook. Events are processed strictly in submission order;
//! callers that share a dispatcher across threads must serialize access
//! externally.

mod dispatcher;
mod handler;

pub use dispatcher::Dispatcher;
pub use handler::{ActionHandler, UnhandledHook};
