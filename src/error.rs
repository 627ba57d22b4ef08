//! The crate's single error kind.

use thiserror::Error;

use crate::vehicle::REQUIRED_BEHAVIORS;

/// Raised when construction is attempted for a type that does not provide
/// the full required behavior set. Fatal for that construction attempt;
/// never caught or retried inside this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot instantiate '{type_name}': required behaviors {missing:?} are not implemented")]
pub struct InstantiationError {
    type_name: String,
    missing: Vec<&'static str>,
}

impl InstantiationError {
    pub fn new(type_name: impl Into<String>, missing: Vec<&'static str>) -> Self {
        Self {
            type_name: type_name.into(),
            missing,
        }
    }

    /// The abstract contract declares every behavior and implements none.
    pub fn abstract_contract(type_name: impl Into<String>) -> Self {
        Self::new(type_name, REQUIRED_BEHAVIORS.to_vec())
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The behaviors the rejected type failed to provide.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }
}
