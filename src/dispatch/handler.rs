//! Capability interface for side-effecting actions.

use crate::core::Action;

/// Handler invoked for each action identifier a transition fires.
///
/// Implemented by the embedding application; the dispatcher is fully
/// opaque to what an action does (hardware control, logging, UI
/// updates). Actions take no arguments and return nothing the
/// dispatcher observes.
///
/// Using an injected handler instead of an abstract base class keeps
/// test doubles cheap: a recording handler implementing this trait can
/// stand in for real controls without subclassing.
///
/// # Example
///
/// ```rust
/// use tabula::dispatch::ActionHandler;
/// use tabula::action_enum;
///
/// action_enum! {
///     enum Chime { Ding, Dong }
/// }
///
/// struct Bell;
///
/// impl ActionHandler<Chime> for Bell {
///     fn perform(&mut self, action: &Chime) {
///         match action {
///             Chime::Ding => { /* strike high */ }
///             Chime::Dong => { /* strike low */ }
///         }
///     }
/// }
/// ```
pub trait ActionHandler<A: Action> {
    /// Perform the side effect identified by `action`.
    fn perform(&mut self, action: &A);
}

/// Fallback hook invoked when an event has no defined transition from
/// the current state.
///
/// Receives the current state's name and the submitted event's name as
/// opaque identifiers. The hook's policy (log, panic, ignore) is
/// entirely the implementer's; the dispatcher only guarantees it is
/// called exactly once per unhandled event with the pre-lookup state
/// name, and that state is left unchanged.
pub type UnhandledHook = Box<dyn FnMut(&str, &str)>;
