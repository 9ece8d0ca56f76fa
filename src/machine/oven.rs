//! The owned oven handle.

use super::control::OvenControl;
use crate::core::{transition, OvenAction, OvenInput, OvenState, TransitionLog, TransitionRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A microwave oven control core.
///
/// Owns one [`OvenState`] plus a [`TransitionLog`] of every state
/// change. The struct is the imperative shell around the pure
/// [`transition`] function: entry points feed inputs through it and
/// record the changes.
///
/// The machine is single-threaded and synchronous: each call runs to
/// completion before the next is accepted, and there is no internal
/// locking. A multi-threaded host must serialize all calls against one
/// instance.
///
/// # Example
///
/// ```rust
/// use magnetron::{Oven, OvenControl};
///
/// let mut oven = Oven::new();
/// oven.set_time(5);
/// oven.start();
/// assert!(oven.is_magnetron_on());
///
/// for _ in 0..5 {
///     oven.tick();
/// }
/// assert!(!oven.is_magnetron_on());
/// assert_eq!(oven.time_remaining(), 0);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Oven {
    state: OvenState,
    log: TransitionLog,
}

impl Oven {
    /// Create an oven in the initial state: door closed, no timer,
    /// magnetron off.
    pub fn new() -> Self {
        Self {
            state: OvenState::ClosedNoTime,
            log: TransitionLog::new(),
        }
    }

    /// The current state (pure).
    pub fn state(&self) -> &OvenState {
        &self.state
    }

    /// The log of state changes since creation (pure).
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// Run one input through the transition function. Only actual
    /// changes are logged.
    fn feed(&mut self, input: OvenInput) {
        let next = transition(self.state, input);
        if next != self.state {
            self.log = self.log.record(TransitionRecord {
                from: self.state,
                to: next,
                cause: input,
                timestamp: Utc::now(),
            });
            self.state = next;
        }
    }
}

impl OvenControl for Oven {
    fn reset(&mut self) {
        self.feed(OvenInput::Reset);
    }

    fn tick(&mut self) {
        self.feed(OvenInput::Tick);
    }

    fn is_magnetron_on(&self) -> bool {
        self.state.is_magnetron_on()
    }

    fn is_door_open(&self) -> bool {
        self.state.is_door_open()
    }

    fn time_remaining(&self) -> u32 {
        self.state.time_remaining()
    }

    fn open_door(&mut self) {
        self.feed(OvenAction::OpenDoor.into());
    }

    fn close_door(&mut self) {
        self.feed(OvenAction::CloseDoor.into());
    }

    fn set_time(&mut self, secs: u32) {
        self.feed(OvenAction::SetTime(secs).into());
    }

    fn start(&mut self) {
        self.feed(OvenAction::Start.into());
    }

    fn stop(&mut self) {
        self.feed(OvenAction::Stop.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QUICK_START_SECS;
    use crate::safety;

    #[test]
    fn new_oven_starts_closed_and_idle() {
        let oven = Oven::new();
        assert_eq!(oven.state(), &OvenState::ClosedNoTime);
        assert!(!oven.is_door_open());
        assert!(!oven.is_magnetron_on());
        assert_eq!(oven.time_remaining(), 0);
        assert!(oven.log().is_empty());
    }

    #[test]
    fn full_cook_cycle_runs_down_to_expiry() {
        let mut oven = Oven::new();
        oven.set_time(5);
        assert_eq!(
            oven.state(),
            &OvenState::ClosedTimeNoMagnetron { remaining: 5 }
        );

        oven.start();
        assert!(oven.is_magnetron_on());

        for _ in 0..5 {
            oven.tick();
        }
        assert_eq!(
            oven.state(),
            &OvenState::ClosedTimeNoMagnetron { remaining: 0 }
        );
        assert_eq!(oven.time_remaining(), 0);
        assert!(!oven.is_magnetron_on());
    }

    #[test]
    fn quick_start_then_start_again_adds_time() {
        let mut oven = Oven::new();
        oven.start();
        assert_eq!(oven.time_remaining(), QUICK_START_SECS);
        assert!(oven.is_magnetron_on());

        oven.start();
        assert_eq!(oven.time_remaining(), 2 * QUICK_START_SECS);
        assert!(oven.is_magnetron_on());
    }

    #[test]
    fn interlock_preserves_the_countdown() {
        let mut oven = Oven::new();
        oven.set_time(12);
        oven.start();
        oven.open_door();

        assert!(!oven.is_magnetron_on());
        assert!(oven.is_door_open());
        assert_eq!(oven.time_remaining(), 12);
    }

    #[test]
    fn start_has_no_effect_with_the_door_open() {
        let mut oven = Oven::new();
        oven.open_door();
        oven.start();

        assert_eq!(oven.state(), &OvenState::OpenNoTime);
        assert!(!oven.is_magnetron_on());
    }

    #[test]
    fn closing_an_already_closed_door_twice_is_idempotent() {
        let mut oven = Oven::new();
        oven.close_door();
        assert_eq!(oven.state(), &OvenState::ClosedNoTime);
        oven.close_door();
        assert_eq!(oven.state(), &OvenState::ClosedNoTime);
        assert!(oven.log().is_empty());
    }

    #[test]
    fn reset_returns_to_initial_from_a_heating_state() {
        let mut oven = Oven::new();
        oven.set_time(90);
        oven.start();
        oven.reset();

        assert_eq!(oven.state(), &OvenState::ClosedNoTime);
        assert_eq!(oven.time_remaining(), 0);
    }

    #[test]
    fn noops_are_not_logged() {
        let mut oven = Oven::new();
        oven.tick();
        oven.stop();
        oven.close_door();
        assert!(oven.log().is_empty());

        oven.open_door();
        assert_eq!(oven.log().len(), 1);
        oven.open_door();
        assert_eq!(oven.log().len(), 1);
    }

    #[test]
    fn log_path_follows_the_session() {
        let mut oven = Oven::new();
        oven.set_time(2);
        oven.start();
        oven.tick();
        oven.tick();

        let path = oven.log().path();
        assert_eq!(path.first(), Some(&&OvenState::ClosedNoTime));
        assert_eq!(
            path.last(),
            Some(&&OvenState::ClosedTimeNoMagnetron { remaining: 0 })
        );
        assert!(safety::audit(oven.log()).is_ok());
    }

    #[test]
    fn oven_serializes_with_its_log() {
        let mut oven = Oven::new();
        oven.set_time(30);
        oven.start();

        let json = serde_json::to_string(&oven).unwrap();
        let restored: Oven = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.state(), oven.state());
        assert_eq!(restored.log().len(), oven.log().len());
    }
}
