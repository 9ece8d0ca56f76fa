//! Inputs that drive the oven.
//!
//! The machine consumes two kinds of input: user actions on the control
//! panel (or the door itself) and clock ticks supplied by the host
//! driver. Both are plain serializable values.

use serde::{Deserialize, Serialize};

/// A user action on the oven.
///
/// Actions carry no notion of validity; the transition function decides
/// per state whether an action has any effect, and actions that make no
/// physical sense in the current state are silent no-ops.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OvenAction {
    /// Open the door. Stops heating immediately (interlock).
    OpenDoor,
    /// Close the door. Heating never auto-resumes.
    CloseDoor,
    /// Set or overwrite the timer to an explicit number of seconds.
    SetTime(u32),
    /// Start heating, or add quick-start time while already heating.
    Start,
    /// Stop heating or cancel the timer, depending on state.
    Stop,
}

impl OvenAction {
    /// Get the action's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenDoor => "OpenDoor",
            Self::CloseDoor => "CloseDoor",
            Self::SetTime(_) => "SetTime",
            Self::Start => "Start",
            Self::Stop => "Stop",
        }
    }
}

/// One input to the transition function.
///
/// # Example
///
/// ```rust
/// use magnetron::core::{OvenAction, OvenInput};
///
/// let inputs = [
///     OvenInput::Action(OvenAction::SetTime(90)),
///     OvenInput::Action(OvenAction::Start),
///     OvenInput::Tick,
/// ];
/// assert_eq!(inputs[2].name(), "Tick");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OvenInput {
    /// One discrete unit of elapsed time from the host's clock source.
    Tick,
    /// Force the machine back to its initial state.
    Reset,
    /// A user action.
    Action(OvenAction),
}

impl OvenInput {
    /// Get the input's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tick => "Tick",
            Self::Reset => "Reset",
            Self::Action(action) => action.name(),
        }
    }
}

impl From<OvenAction> for OvenInput {
    fn from(action: OvenAction) -> Self {
        Self::Action(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_are_stable() {
        assert_eq!(OvenAction::OpenDoor.name(), "OpenDoor");
        assert_eq!(OvenAction::CloseDoor.name(), "CloseDoor");
        assert_eq!(OvenAction::SetTime(10).name(), "SetTime");
        assert_eq!(OvenAction::Start.name(), "Start");
        assert_eq!(OvenAction::Stop.name(), "Stop");
    }

    #[test]
    fn input_names_include_the_wrapped_action() {
        assert_eq!(OvenInput::Tick.name(), "Tick");
        assert_eq!(OvenInput::Reset.name(), "Reset");
        assert_eq!(OvenInput::Action(OvenAction::Start).name(), "Start");
    }

    #[test]
    fn actions_convert_into_inputs() {
        let input: OvenInput = OvenAction::Stop.into();
        assert_eq!(input, OvenInput::Action(OvenAction::Stop));
    }

    #[test]
    fn input_serializes_correctly() {
        let input = OvenInput::Action(OvenAction::SetTime(120));
        let json = serde_json::to_string(&input).unwrap();
        let deserialized: OvenInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, deserialized);
    }
}
