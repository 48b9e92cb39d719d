//! Build errors for transition table construction.

use thiserror::Error;

/// Errors that can occur when building a transition table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition table has no entries. Add at least one entry before .build()")]
    EmptyTable,

    #[error("Duplicate entry for state '{state}' and event '{event}'")]
    DuplicateEntry { state: String, event: String },
}
