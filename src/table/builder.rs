//! Builder for constructing transition tables.

use crate::core::{Action, Event, State};
use crate::table::error::BuildError;
use crate::table::{TableEntry, TransitionTable};

/// Builder for constructing transition tables with a fluent API.
///
/// `build()` validates the collected entries: the table must be
/// non-empty, and no (state, event) pair may appear twice. A pair
/// declared twice would make dispatch order-dependent, so it is
/// rejected outright instead of silently shadowed.
pub struct TableBuilder<S: State, E: Event, A: Action> {
    entries: Vec<TableEntry<S, E, A>>,
}

impl<S: State, E: Event, A: Action> TableBuilder<S, E, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a pre-built entry.
    pub fn entry(mut self, entry: TableEntry<S, E, A>) -> Self {
        self.entries.push(entry);
        self
    }

    /// Add an action-free transition.
    pub fn transition(self, from: S, on: E, to: S) -> Self {
        self.entry(TableEntry::new(from, on, to))
    }

    /// Add multiple entries at once.
    pub fn entries(mut self, entries: impl IntoIterator<Item = TableEntry<S, E, A>>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Build the table, validating its invariants.
    pub fn build(self) -> Result<TransitionTable<S, E, A>, BuildError> {
        if self.entries.is_empty() {
            return Err(BuildError::EmptyTable);
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i]
                .iter()
                .any(|earlier| earlier.matches(&entry.from, &entry.on))
            {
                return Err(BuildError::DuplicateEntry {
                    state: entry.from.name().to_string(),
                    event: entry.on.name().to_string(),
                });
            }
        }

        Ok(TransitionTable::new(self.entries))
    }
}

impl<S: State, E: Event, A: Action> Default for TableBuilder<S, E, A> {
    fn default() -> Self {
        Self::new()
    }
}
