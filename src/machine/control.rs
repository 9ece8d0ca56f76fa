//! The boundary trait between an oven core and its host driver.

use crate::core::{OvenAction, OvenInput};

/// Synchronous call interface of a microwave oven control core.
///
/// The host driver owns timing and input sourcing: it maps a real clock
/// onto [`tick`](OvenControl::tick), maps panel and door events onto the
/// action methods, and renders the three observers to a display. Every
/// method is total and infallible; an action that makes no sense in the
/// current state simply has no effect, exactly like a button that does
/// nothing.
///
/// [`Oven`](crate::machine::Oven) is the crate's implementation.
/// Hardware shims or alternative cores can implement the trait too and
/// be checked with [`conformance::exercise`](crate::conformance::exercise).
///
/// Construction is left to the implementor; implementations start in
/// the closed-door, no-timer state.
pub trait OvenControl {
    /// Force the machine back to its initial state. Never fails.
    fn reset(&mut self);

    /// One discrete unit of elapsed time from the host's clock source.
    fn tick(&mut self);

    /// True iff the magnetron is energized.
    fn is_magnetron_on(&self) -> bool;

    /// True iff the door is open.
    fn is_door_open(&self) -> bool;

    /// Seconds left on the timer; 0 in states without a timer.
    fn time_remaining(&self) -> u32;

    /// Open the door. Stops heating immediately (interlock).
    fn open_door(&mut self);

    /// Close the door. Heating never auto-resumes.
    fn close_door(&mut self);

    /// Set or overwrite the timer; rejected while actively heating.
    fn set_time(&mut self, secs: u32);

    /// Start heating, or add quick-start time while already heating.
    /// Never fires with the door open.
    fn start(&mut self);

    /// Stop heating or cancel the timer, depending on state.
    fn stop(&mut self);

    /// Dispatch one [`OvenInput`] to the matching entry point.
    ///
    /// Convenience for drivers that consume input streams, such as
    /// [`script::run`](crate::script::run).
    fn apply(&mut self, input: OvenInput) {
        match input {
            OvenInput::Tick => self.tick(),
            OvenInput::Reset => self.reset(),
            OvenInput::Action(OvenAction::OpenDoor) => self.open_door(),
            OvenInput::Action(OvenAction::CloseDoor) => self.close_door(),
            OvenInput::Action(OvenAction::SetTime(secs)) => self.set_time(secs),
            OvenInput::Action(OvenAction::Start) => self.start(),
            OvenInput::Action(OvenAction::Stop) => self.stop(),
        }
    }
}
