//! Resolved configuration types shared across crates.
//!
//! These types represent fully-validated settings. Raw TOML structs with
//! `Option` fields stay private in `keel-config`, which resolves them into
//! these types at the parse boundary.
//!
//! Existence of a value is the proof of its validity.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PinPolicyError {
    #[error("pin min_length must be at least 1")]
    ZeroMinimum,
    #[error("pin min_length ({min}) must not exceed max_length ({max})")]
    InvertedBounds { min: usize, max: usize },
}

#[derive(Deserialize)]
struct RawPinPolicy {
    #[serde(default = "default_min_length")]
    min_length: usize,
    #[serde(default = "default_max_length")]
    max_length: usize,
}

const fn default_min_length() -> usize {
    PinPolicy::DEFAULT_MIN_LENGTH
}

const fn default_max_length() -> usize {
    PinPolicy::DEFAULT_MAX_LENGTH
}

/// Accepted pin length range, counted in characters.
///
/// Invariant: `1 <= min_length <= max_length` (enforced via `#[serde(try_from)]`
/// at the deserialization boundary and by [`PinPolicy::new`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPinPolicy")]
pub struct PinPolicy {
    min_length: usize,
    max_length: usize,
}

impl PinPolicy {
    pub const DEFAULT_MIN_LENGTH: usize = 3;
    pub const DEFAULT_MAX_LENGTH: usize = 15;

    pub fn new(min_length: usize, max_length: usize) -> Result<Self, PinPolicyError> {
        if min_length == 0 {
            return Err(PinPolicyError::ZeroMinimum);
        }
        if min_length > max_length {
            return Err(PinPolicyError::InvertedBounds {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Whether a pin of `len` characters fits the policy.
    #[must_use]
    pub const fn allows(&self, len: usize) -> bool {
        len >= self.min_length && len <= self.max_length
    }
}

impl Default for PinPolicy {
    fn default() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }
}

impl TryFrom<RawPinPolicy> for PinPolicy {
    type Error = PinPolicyError;

    fn try_from(raw: RawPinPolicy) -> Result<Self, Self::Error> {
        Self::new(raw.min_length, raw.max_length)
    }
}
