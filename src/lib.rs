//! Magnetron: a pure functional microwave oven control state machine
//!
//! Magnetron models an oven's control logic (door position, timer, and
//! magnetron activation) as a finite state machine built on a "pure
//! core, imperative shell" split. The core is a single total transition
//! function over a five-variant state sum type; the shell is an owned
//! [`Oven`] handle a host driver calls synchronously. The machine never
//! blocks, never fails, and owns no clock: the host feeds it discrete
//! ticks and user actions, and reads three observers back for display.
//!
//! # Core Concepts
//!
//! - **State**: five mutually exclusive variants; the timer value lives
//!   inside the variants that own one, so "door open with the magnetron
//!   on" cannot even be constructed
//! - **Interlock**: opening the door cuts the magnetron on the spot and
//!   freezes the countdown; start is a dead button while the door is open
//! - **No-ops**: actions that make no sense in the current state do
//!   nothing, like a button with no effect; there is no error taxonomy
//!
//! # Example
//!
//! ```rust
//! use magnetron::{Oven, OvenControl};
//!
//! let mut oven = Oven::new();
//! oven.set_time(90);
//! oven.start();
//! assert!(oven.is_magnetron_on());
//!
//! oven.tick();
//! assert_eq!(oven.time_remaining(), 89);
//!
//! // Safety interlock: the countdown survives, the magnetron does not.
//! oven.open_door();
//! assert!(!oven.is_magnetron_on());
//! assert_eq!(oven.time_remaining(), 89);
//! ```

pub mod conformance;
pub mod core;
pub mod machine;
pub mod safety;
pub mod script;

// Re-export commonly used types
pub use crate::core::{transition, OvenAction, OvenInput, OvenState, QUICK_START_SECS};
pub use machine::{Oven, OvenControl};
