//! Success-or-failure container for fallible domain conversions.
//!
//! An [`Outcome`] holds exactly one of a value or a domain error. It differs
//! from [`Result`] in one respect: reading the wrong side through
//! [`Outcome::value`] or [`Outcome::error`] is a contract violation, raised
//! loudly instead of being returned as another domain error.

use serde::{Deserialize, Serialize};

use crate::{ContractViolation, OutcomeSide};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum Outcome<V, E = String> {
    Ok(V),
    Fail(E),
}

impl<V, E> Outcome<V, E> {
    pub const fn ok(value: V) -> Self {
        Self::Ok(value)
    }

    pub const fn fail(error: E) -> Self {
        Self::Fail(error)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Borrow the success payload.
    ///
    /// Panics with [`ContractViolation::InvalidAccess`] on a failed outcome.
    #[track_caller]
    #[must_use]
    pub fn value(&self) -> &V {
        match self.try_value() {
            Ok(value) => value,
            Err(violation) => violation.raise(),
        }
    }

    /// Borrow the failure payload.
    ///
    /// Panics with [`ContractViolation::InvalidAccess`] on a successful outcome.
    #[track_caller]
    #[must_use]
    pub fn error(&self) -> &E {
        match self.try_error() {
            Ok(error) => error,
            Err(violation) => violation.raise(),
        }
    }

    pub fn try_value(&self) -> Result<&V, ContractViolation> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Fail(_) => Err(ContractViolation::InvalidAccess {
                requested: OutcomeSide::Value,
            }),
        }
    }

    pub fn try_error(&self) -> Result<&E, ContractViolation> {
        match self {
            Self::Fail(error) => Ok(error),
            Self::Ok(_) => Err(ContractViolation::InvalidAccess {
                requested: OutcomeSide::Error,
            }),
        }
    }

    #[track_caller]
    #[must_use]
    pub fn into_value(self) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Fail(_) => ContractViolation::InvalidAccess {
                requested: OutcomeSide::Value,
            }
            .raise(),
        }
    }

    #[track_caller]
    #[must_use]
    pub fn into_error(self) -> E {
        match self {
            Self::Fail(error) => error,
            Self::Ok(_) => ContractViolation::InvalidAccess {
                requested: OutcomeSide::Error,
            }
            .raise(),
        }
    }

    #[must_use]
    pub fn success(self) -> Option<V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    #[must_use]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Fail(error) => Some(error),
            Self::Ok(_) => None,
        }
    }

    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<V, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Fail(error) => Outcome::Fail(f(error)),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(V) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Fail(error) => Err(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Fail(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}
