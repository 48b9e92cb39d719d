//! Dispatcher that executes table-defined transitions.

use crate::core::{Action, DispatchLog, DispatchRecord, Event, State};
use crate::dispatch::handler::{ActionHandler, UnhandledHook};
use crate::table::TransitionTable;
use chrono::Utc;

/// State machine dispatcher.
///
/// Holds the current state and a static transition table. Each
/// submitted event is looked up against the (current state, event)
/// pair:
///
/// - if an entry exists, the state change is committed first, then the
///   entry's actions are invoked in declared order through the handler;
/// - otherwise the state is left unchanged and the unhandled hook is
///   invoked once with the state and event names.
///
/// `submit` never errors: an absent table entry is a designed outcome,
/// not a fault. The state update always precedes action execution and
/// is never rolled back, even if an action misbehaves.
pub struct Dispatcher<S, E, A, H>
where
    S: State,
    E: Event,
    A: Action,
    H: ActionHandler<A>,
{
    table: TransitionTable<S, E, A>,
    current: S,
    handler: H,
    on_unhandled: UnhandledHook,
    log: DispatchLog<S, E>,
}

impl<S, E, A, H> Dispatcher<S, E, A, H>
where
    S: State,
    E: Event,
    A: Action,
    H: ActionHandler<A>,
{
    /// Create a dispatcher in the given initial state.
    ///
    /// The fallback hook is a required parameter: every machine must
    /// declare a policy for unhandled events, even if that policy is to
    /// ignore them.
    pub fn new<F>(table: TransitionTable<S, E, A>, initial: S, handler: H, on_unhandled: F) -> Self
    where
        F: FnMut(&str, &str) + 'static,
    {
        Self {
            table,
            current: initial,
            handler,
            on_unhandled: Box::new(on_unhandled),
            log: DispatchLog::new(),
        }
    }

    /// Submit one event for processing.
    ///
    /// Runs to completion before returning; the only observable effects
    /// are the state change (or its absence) and the side effects of
    /// the invoked actions or hook.
    pub fn submit(&mut self, event: E) {
        let Some(entry) = self.table.lookup(&self.current, &event) else {
            tracing::warn!(
                state = self.current.name(),
                event = event.name(),
                "unhandled transition"
            );
            (self.on_unhandled)(self.current.name(), event.name());
            return;
        };

        let from = self.current.clone();
        let to = entry.to.clone();
        let actions = entry.actions.clone();

        tracing::debug!(
            from = from.name(),
            event = event.name(),
            to = to.name(),
            "transition"
        );

        // State update precedes action execution and is never rolled back.
        self.current = to.clone();
        for action in &actions {
            self.handler.perform(action);
        }

        self.log = self.log.record(DispatchRecord {
            from,
            event,
            to,
            timestamp: Utc::now(),
        });
    }

    /// Get the current state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the transition table.
    pub fn table(&self) -> &TransitionTable<S, E, A> {
        &self.table
    }

    /// Get the log of handled transitions.
    pub fn log(&self) -> &DispatchLog<S, E> {
        &self.log
    }

    /// Get the action handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Get the action handler mutably.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}
