//! Immutable transition logging.
//!
//! Every state change an [`Oven`](crate::machine::Oven) makes is
//! recorded here with its cause and a timestamp. The log is append-only
//! and immutable: `record` returns a new log rather than mutating in
//! place, keeping the core purely functional. No-ops are not recorded,
//! the state did not change.

use super::action::OvenInput;
use super::state::OvenState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from.
    pub from: OvenState,
    /// The state being transitioned to.
    pub to: OvenState,
    /// The input that caused the change.
    pub cause: OvenInput,
    /// When the change occurred.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of state changes.
///
/// # Example
///
/// ```rust
/// use magnetron::core::{OvenAction, OvenState, TransitionLog, TransitionRecord};
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: OvenState::ClosedNoTime,
///     to: OvenState::ClosedTimeNoMagnetron { remaining: 60 },
///     cause: OvenAction::SetTime(60).into(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.path().len(), 2); // initial state plus one change
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a state change, returning a new log.
    ///
    /// The existing log is left untouched.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The path of states traversed: the `from` of the first record,
    /// then the `to` of each record in order. Empty for an empty log.
    pub fn path(&self) -> Vec<&OvenState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Wall-clock time between the first and last recorded change, or
    /// `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded changes in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Number of recorded changes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True iff no change has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
