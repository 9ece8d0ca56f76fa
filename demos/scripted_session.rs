//! Scripted Session
//!
//! Runs a textual command script against an oven, then prints the
//! readings and the path the machine took. The script format is the
//! harness-side convenience from `magnetron::script`.
//!
//! Run with: cargo run --example scripted_session

use magnetron::{script, Oven, OvenControl};

const SESSION: &str = "
# reheat, interrupted halfway to check on the food
set 60
start
tick 30
open
tick 5    # ticks while open change nothing
close
start
tick 30
";

fn main() {
    println!("=== Scripted Session ===\n");
    println!("script:{SESSION}");

    let mut oven = Oven::new();
    if let Err(err) = script::run(&mut oven, SESSION) {
        eprintln!("script error: {err}");
        std::process::exit(1);
    }

    println!(
        "final readings: door_open={} magnetron_on={} remaining={}\n",
        oven.is_door_open(),
        oven.is_magnetron_on(),
        oven.time_remaining()
    );

    println!("path taken:");
    for state in oven.log().path() {
        println!("  {}", state.name());
    }

    println!("\n=== Done ===");
}
