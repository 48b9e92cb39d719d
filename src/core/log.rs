//! Dispatch-log tracking.
//!
//! Provides immutable tracking of handled transitions over time.
//! Unhandled events never appear here: by contract they leave the
//! machine's state untouched.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single handled transition.
///
/// Records are immutable values capturing which event moved the machine
/// from one state to another at a specific point in time.
///
/// # Example
///
/// ```rust
/// use tabula::core::DispatchRecord;
/// use tabula::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Phase { Idle, Running }
/// }
///
/// event_enum! {
///     enum Trigger { Go }
/// }
///
/// let record = DispatchRecord {
///     from: Phase::Idle,
///     event: Trigger::Go,
///     to: Phase::Running,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<S: State, E: Event> {
    /// The state the machine was in when the event arrived
    pub from: S,
    /// The event that triggered the transition
    pub event: E,
    /// The state the machine moved to
    pub to: S,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of handled transitions.
///
/// The log is immutable - `record` returns a new log with the entry
/// added, leaving the original unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchLog<S: State, E: Event> {
    records: Vec<DispatchRecord<S, E>>,
}

impl<S: State, E: Event> Default for DispatchLog<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> DispatchLog<S, E> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    pub fn record(&self, record: DispatchRecord<S, E>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// first record, then the `to` state of each record.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last record.
    ///
    /// Returns `None` if the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[DispatchRecord<S, E>] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event_enum, state_enum};

    state_enum! {
        enum TestState {
            Locked,
            FirstCoin,
            Unlocked,
        }
    }

    event_enum! {
        enum TestEvent {
            Coin,
            Pass,
        }
    }

    fn coin(from: TestState, to: TestState) -> DispatchRecord<TestState, TestEvent> {
        DispatchRecord {
            from,
            event: TestEvent::Coin,
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log: DispatchLog<TestState, TestEvent> = DispatchLog::new();
        assert_eq!(log.records().len(), 0);
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_adds_entry() {
        let log = DispatchLog::new();
        let log = log.record(coin(TestState::Locked, TestState::FirstCoin));
        assert_eq!(log.records().len(), 1);
    }

    #[test]
    fn record_is_immutable() {
        let log = DispatchLog::new();
        let new_log = log.record(coin(TestState::Locked, TestState::FirstCoin));

        assert_eq!(log.records().len(), 0);
        assert_eq!(new_log.records().len(), 1);
    }

    #[test]
    fn path_returns_state_sequence() {
        let log = DispatchLog::new()
            .record(coin(TestState::Locked, TestState::FirstCoin))
            .record(coin(TestState::FirstCoin, TestState::Unlocked));

        let path = log.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Locked);
        assert_eq!(path[1], &TestState::FirstCoin);
        assert_eq!(path[2], &TestState::Unlocked);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let log = DispatchLog::new().record(coin(TestState::Locked, TestState::FirstCoin));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let log = log.record(coin(TestState::FirstCoin, TestState::Unlocked));

        let duration = log.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_record_has_duration_zero() {
        let log = DispatchLog::new().record(coin(TestState::Locked, TestState::FirstCoin));
        assert_eq!(log.duration().unwrap(), std::time::Duration::from_secs(0));
    }

    #[test]
    fn log_serializes_correctly() {
        let log = DispatchLog::new().record(coin(TestState::Locked, TestState::FirstCoin));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: DispatchLog<TestState, TestEvent> = serde_json::from_str(&json).unwrap();

        assert_eq!(log.records().len(), deserialized.records().len());
        assert_eq!(deserialized.records()[0].from, TestState::Locked);
    }
}
