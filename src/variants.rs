//! Concrete variants conforming to the `Vehicle` contract.

use std::io::{self, Write};

use crate::vehicle::Vehicle;

/// A car. No state beyond type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car;

/// A motorcycle. No state beyond type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motorcycle;

impl Vehicle for Car {
    fn go(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "You drive the car")
    }

    fn stop(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "This car is stopped")
    }
}

impl Vehicle for Motorcycle {
    fn go(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "You drive the motorcycle")
    }

    fn stop(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "This motorcycle is stopped")
    }
}
