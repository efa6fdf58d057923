//! Programming-contract violations.
//!
//! These signal misuse of the API itself, not invalid domain input. They are
//! never folded into a domain `Fail`: panicking accessors raise them, and the
//! `try_` variants hand them back as a distinct error type.

use std::fmt;

use thiserror::Error;

/// Which side of an [`Outcome`](crate::Outcome) a caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeSide {
    Value,
    Error,
}

impl OutcomeSide {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OutcomeSide::Value => "value",
            OutcomeSide::Error => "error",
        }
    }
}

impl fmt::Display for OutcomeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// Reading the value of a failed outcome, or the error of a successful one.
    #[error("invalid access: outcome holds no {requested}")]
    InvalidAccess { requested: OutcomeSide },
    /// A mutation was routed to a read-only list handle.
    #[error("read-only violation: `{operation}` is not available on a read-only list")]
    ReadOnlyViolation { operation: &'static str },
    /// A tracked field was read back as a different type than it was stored with.
    #[error("field `{field}` does not hold a value of type `{expected}`")]
    FieldTypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    /// Field states were reused after a check without a reset.
    #[error("field states were already checked; reset before starting a new pass")]
    StaleState,
}

impl ContractViolation {
    /// Abort the current operation with this violation.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{self}")
    }
}
