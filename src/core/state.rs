//! The oven's state type.
//!
//! `OvenState` is a sum type: the timer value lives inside the variants
//! that own one, so unsafe combinations (door open with the magnetron
//! energized) cannot be constructed at all.

use serde::{Deserialize, Serialize};

/// The five control states of a microwave oven.
///
/// States are immutable values. All methods are pure observers with no
/// side effects; transitions produce new values (see
/// [`transition`](crate::core::transition)).
///
/// # Example
///
/// ```rust
/// use magnetron::core::OvenState;
///
/// let heating = OvenState::ClosedTimeMagnetron { remaining: 12 };
/// assert!(heating.is_magnetron_on());
/// assert!(!heating.is_door_open());
/// assert_eq!(heating.time_remaining(), 12);
///
/// let idle = OvenState::ClosedNoTime;
/// assert!(!idle.is_magnetron_on());
/// assert_eq!(idle.time_remaining(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OvenState {
    /// Door closed, no timer set. The initial state.
    ClosedNoTime,
    /// Door open, no timer set.
    OpenNoTime,
    /// Door open with a frozen timer value.
    OpenTime {
        /// Seconds left on the timer, held while the door is open.
        remaining: u32,
    },
    /// Door closed, timer armed but paused, magnetron off.
    ClosedTimeNoMagnetron {
        /// Seconds left on the timer.
        remaining: u32,
    },
    /// Door closed, timer counting down, magnetron energized.
    ClosedTimeMagnetron {
        /// Seconds of heating left.
        remaining: u32,
    },
}

impl OvenState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClosedNoTime => "ClosedNoTime",
            Self::OpenNoTime => "OpenNoTime",
            Self::OpenTime { .. } => "OpenTime",
            Self::ClosedTimeNoMagnetron { .. } => "ClosedTimeNoMagnetron",
            Self::ClosedTimeMagnetron { .. } => "ClosedTimeMagnetron",
        }
    }

    /// True iff the magnetron is energized.
    ///
    /// Holds exactly in [`ClosedTimeMagnetron`](Self::ClosedTimeMagnetron).
    pub fn is_magnetron_on(&self) -> bool {
        matches!(self, Self::ClosedTimeMagnetron { .. })
    }

    /// True iff the door is open.
    pub fn is_door_open(&self) -> bool {
        matches!(self, Self::OpenNoTime | Self::OpenTime { .. })
    }

    /// Seconds left on the timer. States without a timer report 0.
    pub fn time_remaining(&self) -> u32 {
        match *self {
            Self::OpenTime { remaining }
            | Self::ClosedTimeNoMagnetron { remaining }
            | Self::ClosedTimeMagnetron { remaining } => remaining,
            Self::ClosedNoTime | Self::OpenNoTime => 0,
        }
    }
}

impl Default for OvenState {
    fn default() -> Self {
        Self::ClosedNoTime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_matches_each_variant() {
        assert_eq!(OvenState::ClosedNoTime.name(), "ClosedNoTime");
        assert_eq!(OvenState::OpenNoTime.name(), "OpenNoTime");
        assert_eq!(OvenState::OpenTime { remaining: 5 }.name(), "OpenTime");
        assert_eq!(
            OvenState::ClosedTimeNoMagnetron { remaining: 5 }.name(),
            "ClosedTimeNoMagnetron"
        );
        assert_eq!(
            OvenState::ClosedTimeMagnetron { remaining: 5 }.name(),
            "ClosedTimeMagnetron"
        );
    }

    #[test]
    fn magnetron_is_on_only_while_heating() {
        assert!(OvenState::ClosedTimeMagnetron { remaining: 1 }.is_magnetron_on());

        assert!(!OvenState::ClosedNoTime.is_magnetron_on());
        assert!(!OvenState::OpenNoTime.is_magnetron_on());
        assert!(!OvenState::OpenTime { remaining: 1 }.is_magnetron_on());
        assert!(!OvenState::ClosedTimeNoMagnetron { remaining: 1 }.is_magnetron_on());
    }

    #[test]
    fn door_is_open_only_in_open_variants() {
        assert!(OvenState::OpenNoTime.is_door_open());
        assert!(OvenState::OpenTime { remaining: 3 }.is_door_open());

        assert!(!OvenState::ClosedNoTime.is_door_open());
        assert!(!OvenState::ClosedTimeNoMagnetron { remaining: 3 }.is_door_open());
        assert!(!OvenState::ClosedTimeMagnetron { remaining: 3 }.is_door_open());
    }

    #[test]
    fn time_remaining_reads_the_carried_value() {
        assert_eq!(OvenState::OpenTime { remaining: 7 }.time_remaining(), 7);
        assert_eq!(
            OvenState::ClosedTimeNoMagnetron { remaining: 8 }.time_remaining(),
            8
        );
        assert_eq!(
            OvenState::ClosedTimeMagnetron { remaining: 9 }.time_remaining(),
            9
        );
    }

    #[test]
    fn timeless_states_report_zero() {
        assert_eq!(OvenState::ClosedNoTime.time_remaining(), 0);
        assert_eq!(OvenState::OpenNoTime.time_remaining(), 0);
    }

    #[test]
    fn default_is_the_initial_state() {
        assert_eq!(OvenState::default(), OvenState::ClosedNoTime);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = OvenState::ClosedTimeMagnetron { remaining: 42 };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: OvenState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
