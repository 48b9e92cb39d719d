//! Static transition tables.
//!
//! A transition table is the *data* of a state machine: an ordered set
//! of entries mapping a (state, event) pair to a next state and the
//! actions to fire, in declared order. Pairs absent from the table are
//! unhandled and route to the dispatcher's fallback hook.
//!
//! Tables are immutable once built. Construction goes through
//! [`TableBuilder`], which rejects empty tables and duplicate
//! (state, event) pairs, so a built table fully and unambiguously
//! determines all reachable behavior.

mod builder;
mod error;

pub use builder::TableBuilder;
pub use error::BuildError;

use crate::core::{Action, Event, State};

/// A single entry in a transition table.
///
/// Maps one (state, event) pair to a next state plus an ordered list of
/// action identifiers. Entries with no actions are valid: the
/// transition still commits the state change.
///
/// # Example
///
/// ```rust
/// use tabula::table::TableEntry;
/// use tabula::{action_enum, event_enum, state_enum};
///
/// state_enum! {
///     enum Lamp { Off, On }
/// }
///
/// event_enum! {
///     enum Switch { Flip }
/// }
///
/// action_enum! {
///     enum Glow { Shine }
/// }
///
/// let entry = TableEntry::new(Lamp::Off, Switch::Flip, Lamp::On).action(Glow::Shine);
/// assert!(entry.matches(&Lamp::Off, &Switch::Flip));
/// assert!(!entry.matches(&Lamp::On, &Switch::Flip));
/// ```
#[derive(Clone, Debug)]
pub struct TableEntry<S: State, E: Event, A: Action> {
    /// The state this entry applies in
    pub from: S,
    /// The event this entry responds to
    pub on: E,
    /// The state the machine moves to
    pub to: S,
    /// Actions fired after the state change, in declared order
    pub actions: Vec<A>,
}

impl<S: State, E: Event, A: Action> TableEntry<S, E, A> {
    /// Create an entry with no actions.
    pub fn new(from: S, on: E, to: S) -> Self {
        Self {
            from,
            on,
            to,
            actions: Vec::new(),
        }
    }

    /// Append a single action.
    pub fn action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Append several actions at once, preserving order.
    pub fn actions(mut self, actions: impl IntoIterator<Item = A>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Check whether this entry applies to the given (state, event) pair.
    pub fn matches(&self, state: &S, event: &E) -> bool {
        self.from == *state && self.on == *event
    }
}

/// Immutable mapping from (state, event) pairs to transitions.
///
/// Built once via [`TableBuilder`]; never mutated afterwards. Lookup is
/// a linear scan over the declared entries, which is exact because the
/// builder guarantees at most one entry per (state, event) pair.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, E: Event, A: Action> {
    entries: Vec<TableEntry<S, E, A>>,
}

impl<S: State, E: Event, A: Action> TransitionTable<S, E, A> {
    pub(crate) fn new(entries: Vec<TableEntry<S, E, A>>) -> Self {
        Self { entries }
    }

    /// Find the entry for a (state, event) pair, if one is defined.
    pub fn lookup(&self, state: &S, event: &E) -> Option<&TableEntry<S, E, A>> {
        self.entries.iter().find(|e| e.matches(state, event))
    }

    /// Check whether a (state, event) pair has a defined transition.
    pub fn handles(&self, state: &S, event: &E) -> bool {
        self.lookup(state, event).is_some()
    }

    /// Get all entries in declaration order.
    pub fn entries(&self) -> &[TableEntry<S, E, A>] {
        &self.entries
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries. Always false for built tables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
