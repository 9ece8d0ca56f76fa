//! Cook Cycle
//!
//! Drives an oven through an ordinary heating session: arm the timer,
//! start, let the clock run, and watch the interlock cut the magnetron
//! when the door opens mid-cook.
//!
//! Run with: cargo run --example cook_cycle

use magnetron::{Oven, OvenControl};

fn report(oven: &Oven, label: &str) {
    println!(
        "{label:<24} state={:<22} door_open={:<5} magnetron_on={:<5} remaining={}",
        oven.state().name(),
        oven.is_door_open(),
        oven.is_magnetron_on(),
        oven.time_remaining()
    );
}

fn main() {
    println!("=== Cook Cycle ===\n");

    let mut oven = Oven::new();
    report(&oven, "fresh oven");

    oven.set_time(5);
    report(&oven, "set_time(5)");

    oven.start();
    report(&oven, "start");

    for second in 1..=3 {
        oven.tick();
        report(&oven, &format!("tick {second}"));
    }

    oven.open_door();
    report(&oven, "open_door (interlock)");

    oven.close_door();
    report(&oven, "close_door");

    oven.start();
    report(&oven, "start again");

    for second in 4..=5 {
        oven.tick();
        report(&oven, &format!("tick {second}"));
    }

    println!("\nTransitions recorded: {}", oven.log().len());
    for record in oven.log().records() {
        println!(
            "  {:<22} --{:>9}--> {}",
            record.from.name(),
            record.cause.name(),
            record.to.name()
        );
    }

    println!("\n=== Done ===");
}
