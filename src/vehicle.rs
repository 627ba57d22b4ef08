//! The `Vehicle` capability contract.

use std::fmt;
use std::io::{self, Write};

/// The behaviors every conforming type must provide, in contract order.
pub const REQUIRED_BEHAVIORS: [&str; 2] = ["go", "stop"];

/// A capability contract with two required behaviors and no defaults.
///
/// Each behavior emits one fixed, type-specific line to `out`. The driver
/// passes locked stdout; tests pass a `Vec<u8>` to observe the exact
/// bytes. Calls are independent and idempotent.
///
/// The contract itself is never a value; only conforming variants are:
///
/// ```compile_fail
/// use vehicle_dispatch::vehicle::Vehicle;
///
/// let contract = Vehicle; // E0423: expected value, found trait
/// ```
pub trait Vehicle {
    /// Drive off. Emits the variant's drive line.
    fn go(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Come to a halt. Emits the variant's stop line.
    fn stop(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl fmt::Debug for dyn Vehicle + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn Vehicle")
    }
}
