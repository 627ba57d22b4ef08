//! Abstract capability contracts and dynamic dispatch.
//!
//! `Vehicle` is a contract: two required behaviors, `go` and `stop`, with
//! no provided bodies. `Car` and `Motorcycle` are the concrete variants
//! that conform to it, and every call through `&dyn Vehicle` resolves at
//! call time to the implementation of the object's actual type.
//!
//! The contract itself can never be constructed. The compile-time half of
//! that guarantee lives on the trait; the runtime half lives in
//! [`factory`], where building by name or from a partial [`Blueprint`]
//! fails with an [`InstantiationError`].

pub mod error;
pub mod factory;
pub mod variants;
pub mod vehicle;

pub use error::InstantiationError;
pub use factory::{build_named, Blueprint, CustomVehicle, VehicleKind};
pub use variants::{Car, Motorcycle};
pub use vehicle::{Vehicle, REQUIRED_BEHAVIORS};
