//! The driver: one of each concrete variant, dispatched through the
//! shared contract.
//!
//! Run with: cargo run --bin vehicle_demo

use std::io::{self, Write};

use vehicle_dispatch::{Car, Motorcycle, Vehicle};

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let car = Car;
    let motorcycle = Motorcycle;

    // Each call resolves to the impl behind the reference, not the
    // reference type.
    let fleet: [&dyn Vehicle; 2] = [&car, &motorcycle];

    for vehicle in fleet {
        vehicle.go(&mut out)?;
    }
    for vehicle in fleet {
        vehicle.stop(&mut out)?;
    }

    out.flush()
}
