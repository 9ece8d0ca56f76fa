//! The imperative shell around the pure core.
//!
//! [`Oven`] owns one state value and feeds inputs through the pure
//! transition function; [`OvenControl`] is the boundary trait a host
//! driver programs against.

mod control;
mod oven;

pub use control::OvenControl;
pub use oven::Oven;
