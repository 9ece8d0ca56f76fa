//! Accumulating audit of recorded oven behavior.
//!
//! The state type already makes the unsafe door-open-with-magnetron-on
//! combination unrepresentable; this module closes the remaining gap
//! for data that crosses a trust boundary, such as a [`TransitionLog`]
//! deserialized from a host or another implementation. An audit does
//! not stop at the first problem: every violation in the log is
//! collected and reported together.
//!
//! [`TransitionLog`]: crate::core::TransitionLog

mod audit;
mod violations;

pub use audit::audit;
pub use violations::AuditViolation;
