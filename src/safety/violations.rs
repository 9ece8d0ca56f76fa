//! Violations an audit can find in a transition log.

use crate::core::OvenState;
use thiserror::Error;

/// A way in which a recorded transition fails the audit.
///
/// Indices refer to positions in the audited log's record slice.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuditViolation {
    /// A record whose `from` and `to` are the same state. The log only
    /// holds actual changes; no-ops are never recorded.
    #[error("record {index} is a no-op on {state:?}; no-ops are never recorded")]
    RecordedNoop { index: usize, state: OvenState },

    /// A record whose `to` state is not what the transition function
    /// produces for its `from` state and cause. This also catches every
    /// interlock breach: no genuine transition energizes the magnetron
    /// with the door open.
    #[error("record {index} claims {found:?}, but its cause leads to {expected:?}")]
    ForgedTransition {
        index: usize,
        expected: OvenState,
        found: OvenState,
    },

    /// A record whose `from` state is not the previous record's `to`
    /// state.
    #[error("record {index} starts from {found:?}, but the previous record ended at {expected:?}")]
    BrokenChain {
        index: usize,
        expected: OvenState,
        found: OvenState,
    },

    /// A record stamped earlier than its predecessor.
    #[error("record {index} is stamped earlier than the record before it")]
    ClockRegression { index: usize },
}
