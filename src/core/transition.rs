//! The transition function.
//!
//! One pure, total function over the full state/input grid. Inputs that
//! have no effect in the current state are explicit match arms returning
//! the state unchanged, never omitted cases, so the table stays
//! auditable against the physical control panel.

use super::action::{OvenAction, OvenInput};
use super::state::OvenState;

/// Seconds a quick start puts on the timer, and seconds each further
/// press of start adds while already heating.
pub const QUICK_START_SECS: u32 = 30;

/// Apply one input to a state, returning the next state.
///
/// Pure and infallible: for every `(state, input)` pair there is exactly
/// one successor, possibly the same state.
///
/// # Example
///
/// ```rust
/// use magnetron::core::{transition, OvenAction, OvenInput, OvenState};
///
/// let armed = transition(OvenState::ClosedNoTime, OvenAction::SetTime(5).into());
/// assert_eq!(armed, OvenState::ClosedTimeNoMagnetron { remaining: 5 });
///
/// let heating = transition(armed, OvenAction::Start.into());
/// assert_eq!(heating, OvenState::ClosedTimeMagnetron { remaining: 5 });
///
/// let later = transition(heating, OvenInput::Tick);
/// assert_eq!(later, OvenState::ClosedTimeMagnetron { remaining: 4 });
/// ```
pub fn transition(state: OvenState, input: OvenInput) -> OvenState {
    match input {
        OvenInput::Tick => tick(state),
        OvenInput::Reset => OvenState::ClosedNoTime,
        OvenInput::Action(OvenAction::OpenDoor) => open_door(state),
        OvenInput::Action(OvenAction::CloseDoor) => close_door(state),
        OvenInput::Action(OvenAction::SetTime(secs)) => set_time(state, secs),
        OvenInput::Action(OvenAction::Start) => start(state),
        OvenInput::Action(OvenAction::Stop) => stop(state),
    }
}

/// One unit of elapsed time.
///
/// Only the heating state is affected: the countdown decrements, and the
/// moment it reaches zero the magnetron shuts off on that same tick. A
/// countdown already at zero expires without going below zero.
fn tick(state: OvenState) -> OvenState {
    match state {
        OvenState::ClosedTimeMagnetron { remaining } => {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                OvenState::ClosedTimeNoMagnetron { remaining: 0 }
            } else {
                OvenState::ClosedTimeMagnetron { remaining }
            }
        }
        OvenState::ClosedNoTime
        | OvenState::OpenNoTime
        | OvenState::OpenTime { .. }
        | OvenState::ClosedTimeNoMagnetron { .. } => state,
    }
}

/// Opening the door while heating is the safety interlock: the magnetron
/// cuts out immediately and the timer freezes at its current value.
fn open_door(state: OvenState) -> OvenState {
    match state {
        OvenState::ClosedNoTime => OvenState::OpenNoTime,
        OvenState::ClosedTimeNoMagnetron { remaining } => OvenState::OpenTime { remaining },
        OvenState::ClosedTimeMagnetron { remaining } => OvenState::OpenTime { remaining },
        OvenState::OpenNoTime | OvenState::OpenTime { .. } => state,
    }
}

/// Closing the door re-arms a frozen timer but never restarts the
/// magnetron; an explicit start is required.
fn close_door(state: OvenState) -> OvenState {
    match state {
        OvenState::OpenNoTime => OvenState::ClosedNoTime,
        OvenState::OpenTime { remaining } => OvenState::ClosedTimeNoMagnetron { remaining },
        OvenState::ClosedNoTime
        | OvenState::ClosedTimeNoMagnetron { .. }
        | OvenState::ClosedTimeMagnetron { .. } => state,
    }
}

/// Setting the time arms or overwrites the timer. Rejected while
/// actively heating; pressing start adds time instead.
fn set_time(state: OvenState, secs: u32) -> OvenState {
    match state {
        OvenState::OpenNoTime | OvenState::OpenTime { .. } => {
            OvenState::OpenTime { remaining: secs }
        }
        OvenState::ClosedNoTime | OvenState::ClosedTimeNoMagnetron { .. } => {
            OvenState::ClosedTimeNoMagnetron { remaining: secs }
        }
        OvenState::ClosedTimeMagnetron { .. } => state,
    }
}

/// Start never fires with the door open (interlock). Starting an armed
/// timer keeps its value, even a zero value: the run then expires on the
/// very next tick rather than being rejected here.
fn start(state: OvenState) -> OvenState {
    match state {
        OvenState::ClosedNoTime => OvenState::ClosedTimeMagnetron {
            remaining: QUICK_START_SECS,
        },
        OvenState::ClosedTimeNoMagnetron { remaining } => {
            OvenState::ClosedTimeMagnetron { remaining }
        }
        OvenState::ClosedTimeMagnetron { remaining } => OvenState::ClosedTimeMagnetron {
            remaining: remaining.saturating_add(QUICK_START_SECS),
        },
        OvenState::OpenNoTime | OvenState::OpenTime { .. } => state,
    }
}

/// Stop cancels the timer in armed states and pauses heating in the
/// running state, keeping the remaining time.
fn stop(state: OvenState) -> OvenState {
    match state {
        OvenState::OpenTime { .. } => OvenState::OpenNoTime,
        OvenState::ClosedTimeNoMagnetron { .. } => OvenState::ClosedNoTime,
        OvenState::ClosedTimeMagnetron { remaining } => {
            OvenState::ClosedTimeNoMagnetron { remaining }
        }
        OvenState::ClosedNoTime | OvenState::OpenNoTime => state,
    }
}
