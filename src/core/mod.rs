//! Core state machine types and logic.
//!
//! This module contains the pure functional core of the oven:
//! - The state sum type ([`OvenState`])
//! - The input types ([`OvenAction`], [`OvenInput`])
//! - The total transition function ([`transition`])
//! - Immutable transition logging ([`TransitionLog`])
//!
//! All logic in this module is pure (no side effects), following the
//! "pure core, imperative shell" philosophy. The imperative shell lives
//! in [`crate::machine`].

mod action;
mod log;
mod state;
mod transition;

pub use action::{OvenAction, OvenInput};
pub use log::{TransitionLog, TransitionRecord};
pub use state::OvenState;
pub use transition::{transition, QUICK_START_SECS};
