//! Construction paths for vehicles.
//!
//! Direct instantiation of the contract is a compile error, so the
//! runtime guard lives here: building by name rejects `"vehicle"`, and a
//! [`Blueprint`] refuses to instantiate until every required behavior has
//! been supplied.

use std::io::{self, Write};
use std::str::FromStr;

use crate::error::InstantiationError;
use crate::variants::{Car, Motorcycle};
use crate::vehicle::Vehicle;

/// The closed set of concrete variants, as a tagged union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Motorcycle,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 2] = [VehicleKind::Car, VehicleKind::Motorcycle];

    /// Build the variant. Infallible: every kind fully conforms.
    pub fn build(self) -> Box<dyn Vehicle> {
        match self {
            VehicleKind::Car => Box::new(Car),
            VehicleKind::Motorcycle => Box::new(Motorcycle),
        }
    }
}

impl FromStr for VehicleKind {
    type Err = InstantiationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleKind::Car),
            "motorcycle" => Ok(VehicleKind::Motorcycle),
            // The contract itself, and anything else that brings no
            // implementation of the behavior set.
            _ => Err(InstantiationError::abstract_contract(name)),
        }
    }
}

/// Build a vehicle by name. `"car"` and `"motorcycle"` (any case)
/// construct the matching variant; `"vehicle"` is the abstract contract
/// and fails with [`InstantiationError`], producing no output.
pub fn build_named(name: &str) -> Result<Box<dyn Vehicle>, InstantiationError> {
    name.parse::<VehicleKind>().map(VehicleKind::build)
}

type Behavior = Box<dyn Fn(&mut dyn Write) -> io::Result<()>>;

/// An in-progress vehicle type: behaviors are supplied one at a time, and
/// [`Blueprint::instantiate`] enforces the full set at construction time,
/// the same check an abstract base class performs when a subtype is first
/// instantiated.
pub struct Blueprint {
    type_name: String,
    go: Option<Behavior>,
    stop: Option<Behavior>,
}

impl Blueprint {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            go: None,
            stop: None,
        }
    }

    pub fn with_go(mut self, behavior: impl Fn(&mut dyn Write) -> io::Result<()> + 'static) -> Self {
        self.go = Some(Box::new(behavior));
        self
    }

    pub fn with_stop(
        mut self,
        behavior: impl Fn(&mut dyn Write) -> io::Result<()> + 'static,
    ) -> Self {
        self.stop = Some(Box::new(behavior));
        self
    }

    /// Construct the vehicle, or fail naming exactly the behaviors still
    /// missing.
    pub fn instantiate(self) -> Result<CustomVehicle, InstantiationError> {
        match (self.go, self.stop) {
            (Some(go), Some(stop)) => Ok(CustomVehicle { go, stop }),
            (go, stop) => {
                let mut missing = Vec::new();
                if go.is_none() {
                    missing.push("go");
                }
                if stop.is_none() {
                    missing.push("stop");
                }
                Err(InstantiationError::new(self.type_name, missing))
            }
        }
    }
}

/// A fully conforming vehicle assembled from a [`Blueprint`]. Dispatches
/// through the contract like any built-in variant.
pub struct CustomVehicle {
    go: Behavior,
    stop: Behavior,
}

impl std::fmt::Debug for CustomVehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomVehicle").finish_non_exhaustive()
    }
}

impl Vehicle for CustomVehicle {
    fn go(&self, out: &mut dyn Write) -> io::Result<()> {
        (self.go)(out)
    }

    fn stop(&self, out: &mut dyn Write) -> io::Result<()> {
        (self.stop)(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of(call: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        call(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_every_kind_builds() {
        for kind in VehicleKind::ALL {
            let vehicle = kind.build();
            let mut buf = Vec::new();
            vehicle.go(&mut buf).unwrap();
            vehicle.stop(&mut buf).unwrap();
            assert!(!buf.is_empty());
        }
    }

    #[test]
    fn test_build_named_concrete_variants() {
        let car = build_named("car").unwrap();
        assert_eq!(line_of(|out| car.go(out)), "You drive the car\n");

        let motorcycle = build_named("Motorcycle").unwrap();
        assert_eq!(
            line_of(|out| motorcycle.go(out)),
            "You drive the motorcycle\n"
        );
    }

    #[test]
    fn test_build_named_rejects_the_contract() {
        let error = build_named("vehicle").unwrap_err();
        assert_eq!(error.type_name(), "vehicle");
        assert_eq!(error.missing(), ["go", "stop"]);
    }

    #[test]
    fn test_build_named_rejects_unknown_names() {
        assert!(build_named("submarine").is_err());
        assert!(build_named("").is_err());
    }

    #[test]
    fn test_blueprint_with_full_behavior_set() {
        let skateboard = Blueprint::new("Skateboard")
            .with_go(|out: &mut dyn Write| writeln!(out, "You push the skateboard"))
            .with_stop(|out: &mut dyn Write| writeln!(out, "This skateboard is stopped"))
            .instantiate()
            .unwrap();

        assert_eq!(
            line_of(|out| skateboard.go(out)),
            "You push the skateboard\n"
        );
        assert_eq!(
            line_of(|out| skateboard.stop(out)),
            "This skateboard is stopped\n"
        );
    }

    #[test]
    fn test_blueprint_missing_stop() {
        let error = Blueprint::new("Skateboard")
            .with_go(|out: &mut dyn Write| writeln!(out, "You push the skateboard"))
            .instantiate()
            .unwrap_err();
        assert_eq!(error.missing(), ["stop"]);
    }

    #[test]
    fn test_blueprint_missing_everything() {
        let error = Blueprint::new("Skateboard").instantiate().unwrap_err();
        assert_eq!(error.missing(), ["go", "stop"]);
        assert_eq!(error.type_name(), "Skateboard");
    }

    #[test]
    fn test_custom_vehicle_dispatches_through_contract() {
        let rocket = Blueprint::new("Rocket")
            .with_go(|out: &mut dyn Write| writeln!(out, "You launch the rocket"))
            .with_stop(|out: &mut dyn Write| writeln!(out, "This rocket is stopped"))
            .instantiate()
            .unwrap();

        let as_vehicle: &dyn Vehicle = &rocket;
        assert_eq!(line_of(|out| as_vehicle.go(out)), "You launch the rocket\n");
    }
}
