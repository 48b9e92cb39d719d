//! Core Action trait for transition action identifiers.

use std::fmt::Debug;

/// Trait for action identifiers.
///
/// Actions are named, side-effecting operations supplied by an external
/// implementer. The transition table stores action identifiers only;
/// the dispatcher owns no knowledge of what an action does and hands
/// each identifier to the injected
/// [`ActionHandler`](crate::dispatch::ActionHandler) in declared order.
///
/// The [`action_enum!`](crate::action_enum) macro generates this
/// implementation for fieldless enums.
pub trait Action: Clone + PartialEq + Debug + Send + Sync {
    /// Get the action's name for logging.
    fn name(&self) -> &str;
}
