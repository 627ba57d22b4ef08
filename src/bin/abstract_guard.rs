//! The construction-time guard, milestone by milestone: concrete names
//! build, the abstract contract is rejected, and a blueprint must carry
//! the full behavior set before it instantiates.
//!
//! Run with: cargo run --bin abstract_guard

use std::io::{self, Write};

use colored::Colorize;
use vehicle_dispatch::{build_named, Blueprint, Vehicle};

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    println!("=== Milestone 1: Concrete variants build by name ===");
    for name in ["car", "motorcycle"] {
        match build_named(name) {
            Ok(vehicle) => {
                println!("{}", format!("[ok] '{name}' constructed").green());
                vehicle.go(&mut out)?;
                vehicle.stop(&mut out)?;
            }
            Err(err) => println!("{}", format!("[err] {err}").red()),
        }
    }

    println!("\n=== Milestone 2: The abstract contract is rejected ===");
    match build_named("vehicle") {
        Ok(_) => println!("{}", "[err] the contract must never construct".red()),
        Err(err) => println!("{}", format!("[ok] rejected: {err}").green()),
    }

    println!("\n=== Milestone 3: Partial conformance is rejected ===");
    let half_done =
        Blueprint::new("Skateboard").with_go(|out: &mut dyn Write| writeln!(out, "You push the skateboard"));
    match half_done.instantiate() {
        Ok(_) => println!("{}", "[err] go alone must not satisfy the contract".red()),
        Err(err) => println!("{}", format!("[ok] rejected: {err}").green()),
    }

    println!("\n=== Milestone 4: The full behavior set constructs ===");
    let skateboard = Blueprint::new("Skateboard")
        .with_go(|out: &mut dyn Write| writeln!(out, "You push the skateboard"))
        .with_stop(|out: &mut dyn Write| writeln!(out, "This skateboard is stopped"))
        .instantiate()
        .expect("both behaviors provided");
    skateboard.go(&mut out)?;
    skateboard.stop(&mut out)?;

    out.flush()
}
