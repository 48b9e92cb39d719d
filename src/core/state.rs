//! Core State trait for dispatcher states.
//!
//! All machine states must implement this trait, which names the state
//! for the unhandled-transition hook and for logging.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// States form a closed, finite set; exactly one state is active at any
/// instant, and the dispatcher can only ever hold a member of this set.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for dispatch-log tracking
/// - `PartialEq`: states must be comparable for table lookup
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so the
///   dispatch log can be serialized
///
/// The [`state_enum!`](crate::state_enum) macro generates this
/// implementation for fieldless enums.
///
/// # Example
///
/// ```rust
/// use tabula::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Latched,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Latched => "Latched",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Latched.name(), "Latched");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for the fallback hook and logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;
}
