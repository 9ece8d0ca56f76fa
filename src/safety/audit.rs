//! The audit routine.

use super::violations::AuditViolation;
use crate::core::{transition, TransitionLog};

/// Audit a transition log, accumulating every violation.
///
/// Checks each record against the transition function (which also
/// rules out interlock breaches), checks that consecutive records
/// chain, and checks that timestamps never go backwards. All failing
/// checks are reported in one pass rather than stopping at the first.
///
/// # Example
///
/// ```rust
/// use magnetron::{safety, Oven, OvenControl};
///
/// let mut oven = Oven::new();
/// oven.set_time(10);
/// oven.start();
/// oven.open_door();
///
/// assert!(safety::audit(oven.log()).is_ok());
/// ```
pub fn audit(log: &TransitionLog) -> Result<(), Vec<AuditViolation>> {
    let mut violations = Vec::new();

    for (index, record) in log.records().iter().enumerate() {
        if record.from == record.to {
            violations.push(AuditViolation::RecordedNoop {
                index,
                state: record.from,
            });
        }

        let expected = transition(record.from, record.cause);
        if expected != record.to {
            violations.push(AuditViolation::ForgedTransition {
                index,
                expected,
                found: record.to,
            });
        }

        if let Some(previous) = index.checked_sub(1).map(|i| &log.records()[i]) {
            if record.from != previous.to {
                violations.push(AuditViolation::BrokenChain {
                    index,
                    expected: previous.to,
                    found: record.from,
                });
            }
            if record.timestamp < previous.timestamp {
                violations.push(AuditViolation::ClockRegression { index });
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
