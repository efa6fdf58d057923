//! Pin value object for email or SMS confirmation codes.
//!
//! Generation lives outside this crate. A generator is any closure producing a
//! string; [`Pin::from_source`] validates what it produces against a
//! [`PinPolicy`].

use std::fmt;

use serde::Serialize;

use keel_types::{Outcome, PinPolicy};

pub const INVALID_PIN: &str = "Invalid value for a pin";

/// A confirmation code such as `ABC-1234` or `52155`.
///
/// Invariant: length in characters fits the [`PinPolicy`] it was created with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Pin(String);

impl Pin {
    pub fn create(value: impl Into<String>, policy: &PinPolicy) -> Outcome<Self> {
        let value = value.into();
        if !Self::is_valid_value(&value, policy) {
            return Outcome::fail(INVALID_PIN.to_owned());
        }
        Outcome::ok(Self(value))
    }

    /// Validate whatever an external generator produces.
    pub fn from_source(source: impl FnOnce() -> String, policy: &PinPolicy) -> Outcome<Self> {
        Self::create(source(), policy)
    }

    #[must_use]
    pub fn is_valid_value(value: &str, policy: &PinPolicy) -> bool {
        policy.allows(value.chars().count())
    }

    /// Whether `pin` matches this pin exactly.
    #[must_use]
    pub fn compare(&self, pin: &str) -> bool {
        self.0 == pin
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Pin {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
