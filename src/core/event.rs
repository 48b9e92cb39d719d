//! Core Event trait for dispatcher inputs.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine events.
///
/// Events form a closed, finite set of named inputs. Events are
/// submitted to the dispatcher one at a time and are not stored beyond
/// the dispatch log; a malformed event cannot exist because the set is
/// closed at compile time.
///
/// The [`event_enum!`](crate::event_enum) macro generates this
/// implementation for fieldless enums.
///
/// # Example
///
/// ```rust
/// use tabula::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorEvent {
///     Push,
///     Pull,
/// }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Push => "Push",
///             Self::Pull => "Pull",
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Push.name(), "Push");
/// ```
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for the fallback hook and logging.
    fn name(&self) -> &str;
}
