//! Conformance suite for [`OvenControl`] implementations.
//!
//! [`exercise`] walks an implementation through the full state/input
//! grid and panics on the first divergence from the specified control
//! behavior. The crate's own [`Oven`](crate::machine::Oven) is checked
//! with it in the integration tests; hardware shims and alternative
//! cores can run the same suite.

use crate::machine::OvenControl;

/// Assert one full reading of the control surface, including the
/// interlock: the magnetron must never be on with the door open.
fn assert_readings<T: OvenControl + ?Sized>(oven: &T, door_open: bool, magnetron_on: bool, remaining: u32) {
    if oven.is_magnetron_on() {
        assert!(
            !oven.is_door_open(),
            "interlock breach: magnetron on with the door open"
        );
    }
    assert_eq!(oven.is_door_open(), door_open, "door reading diverged");
    assert_eq!(
        oven.is_magnetron_on(),
        magnetron_on,
        "magnetron reading diverged"
    );
    assert_eq!(oven.time_remaining(), remaining, "timer reading diverged");
}

/// Drive an implementation through the conformance suite.
///
/// The implementation is reset first, so it may be handed over in any
/// state. Panics with a description of the divergence on failure.
///
/// # Example
///
/// ```rust
/// use magnetron::conformance;
/// use magnetron::Oven;
///
/// let mut oven = Oven::new();
/// conformance::exercise(&mut oven);
/// ```
pub fn exercise<T: OvenControl + ?Sized>(oven: &mut T) {
    door_interlock(oven);
    idle_ticks(oven);
    countdown_and_expiry(oven);
    quick_start(oven);
    set_time_rules(oven);
    stop_rules(oven);
    idempotent_edges(oven);
    zero_remaining_start(oven);
    reset_from_everywhere(oven);
}

/// Start and stop must be dead buttons while the door is open, and
/// opening the door while heating must cut the magnetron without
/// losing the countdown.
fn door_interlock<T: OvenControl + ?Sized>(oven: &mut T) {
    oven.reset();
    oven.open_door();
    assert_readings(oven, true, false, 0);
    oven.start();
    assert_readings(oven, true, false, 0);
    oven.stop();
    assert_readings(oven, true, false, 0);

    oven.set_time(20);
    assert_readings(oven, true, false, 20);
    oven.start();
    assert_readings(oven, true, false, 20);

    oven.close_door();
    oven.start();
    assert_readings(oven, false, true, 20);
    oven.open_door();
    assert_readings(oven, true, false, 20);
}

/// Ticks change nothing unless the magnetron is running.
fn idle_ticks<T: OvenControl + ?Sized>(oven: &mut T) {
    oven.reset();
    oven.tick();
    assert_readings(oven, false, false, 0);

    oven.open_door();
    oven.tick();
    assert_readings(oven, true, false, 0);

    oven.set_time(30);
    oven.tick();
    assert_readings(oven, true, false, 30);

    oven.close_door();
    oven.tick();
    assert_readings(oven, false, false, 30);
}

/// The countdown decrements once per tick and the magnetron shuts off
/// on the tick that reaches zero, not one tick later.
fn countdown_and_expiry<T: OvenControl + ?Sized>(oven: &mut T) {
    oven.reset();
    oven.set_time(2);
    oven.start();
    assert_readings(oven, false, true, 2);
    oven.tick();
    assert_readings(oven, false, true, 1);
    oven.tick();
    assert_readings(oven, false, false, 0);
    oven.tick();
    assert_readings(oven, false, false, 0);
}

/// Start with no timer is a 30 second quick start; start while running
/// adds 30 more.
fn quick_start<T: OvenControl + ?Sized>(oven: &mut T) {
    oven.reset();
    oven.start();
    assert_readings(oven, false, true, 30);
    oven.start();
    assert_readings(oven, false, true, 60);
    oven.tick();
    assert_readings(oven, false, true, 59);

    oven.open_door();
    assert_readings(oven, true, false, 59);
    oven.close_door();
    assert_readings(oven, false, false, 59);
    oven.start();
    assert_readings(oven, false, true, 59);
}

/// Setting the time arms or overwrites in every state except actively
/// heating, where it is rejected outright.
fn set_time_rules<T: OvenControl + ?Sized>(oven: &mut T) {
    oven.reset();
    oven.set_time(25);
    assert_readings(oven, false, false, 25);
    oven.set_time(35);
    assert_readings(oven, false, false, 35);

    oven.start();
    oven.set_time(5);
    assert_readings(oven, false, true, 35);

    oven.open_door();
    oven.set_time(45);
    assert_readings(oven, true, false, 45);
}

/// Stop pauses a running magnetron keeping the time, cancels an armed
/// timer, and does nothing with no timer set.
fn stop_rules<T: OvenControl + ?Sized>(oven: &mut T) {
    oven.reset();
    oven.stop();
    assert_readings(oven, false, false, 0);

    oven.set_time(40);
    oven.start();
    oven.tick();
    oven.stop();
    assert_readings(oven, false, false, 39);
    oven.stop();
    assert_readings(oven, false, false, 0);

    oven.open_door();
    oven.set_time(15);
    oven.stop();
    assert_readings(oven, true, false, 0);
}

/// Opening an open door or closing a closed one has no effect.
fn idempotent_edges<T: OvenControl + ?Sized>(oven: &mut T) {
    oven.reset();
    oven.close_door();
    assert_readings(oven, false, false, 0);
    oven.close_door();
    assert_readings(oven, false, false, 0);

    oven.open_door();
    oven.open_door();
    assert_readings(oven, true, false, 0);

    oven.set_time(24);
    oven.open_door();
    assert_readings(oven, true, false, 24);

    oven.close_door();
    oven.start();
    oven.close_door();
    assert_readings(oven, false, true, 24);
}

/// Starting an armed timer whose value is zero runs as-is; the next
/// tick expires it. The behavior is deliberate, not an accident of one
/// implementation.
fn zero_remaining_start<T: OvenControl + ?Sized>(oven: &mut T) {
    oven.reset();
    oven.set_time(1);
    oven.start();
    oven.tick();
    assert_readings(oven, false, false, 0);

    oven.start();
    assert_readings(oven, false, true, 0);
    oven.tick();
    assert_readings(oven, false, false, 0);
}

/// Reset lands in the initial state from every reachable shape.
fn reset_from_everywhere<T: OvenControl + ?Sized>(oven: &mut T) {
    oven.reset();
    assert_readings(oven, false, false, 0);

    oven.open_door();
    oven.reset();
    assert_readings(oven, false, false, 0);

    oven.open_door();
    oven.set_time(8);
    oven.reset();
    assert_readings(oven, false, false, 0);

    oven.set_time(8);
    oven.reset();
    assert_readings(oven, false, false, 0);

    oven.start();
    oven.reset();
    assert_readings(oven, false, false, 0);
}
