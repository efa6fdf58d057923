//! Per-conversion field state tracking.
//!
//! A mapper records one [`Outcome`] per target field while converting a source
//! representation, then asks the tracker for a single pass/fail verdict.
//!
//! # Invariants
//!
//! - At most one entry per field key. Re-adding a key drops the old entry and
//!   appends the new one, so a corrected field supersedes its stale result and
//!   moves to the end of the insertion order.
//! - A checked tracker accepts no new entries until it is reset. Reuse across
//!   conversion passes without [`FieldStates::reset_state`] is a contract
//!   violation.

use std::any::{Any, type_name};
use std::cell::Cell;
use std::fmt;

use keel_types::{ContractViolation, Outcome};

use crate::aggregate::aggregate;

/// Identifier of a tracked field, usually a fieldless enum over the target's
/// properties.
pub trait FieldKey: Copy + Eq + fmt::Debug {
    fn name(self) -> &'static str;
}

impl FieldKey for &'static str {
    fn name(self) -> &'static str {
        self
    }
}

/// A tracked outcome with its success payload type erased.
pub type FieldOutcome<E = String> = Outcome<Box<dyn Any>, E>;

#[derive(Debug)]
pub struct FieldStates<K, E = String> {
    entries: Vec<(K, FieldOutcome<E>)>,
    checked: Cell<bool>,
}

impl<K, E> Default for FieldStates<K, E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            checked: Cell::new(false),
        }
    }
}

impl<K: FieldKey, E> FieldStates<K, E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `key`, replacing any earlier entry for it.
    ///
    /// Panics with [`ContractViolation::StaleState`] if the tracker was already
    /// checked and not reset since.
    #[track_caller]
    pub fn add_state<V: Any>(&mut self, key: K, outcome: Outcome<V, E>) {
        if self.checked.get() {
            ContractViolation::StaleState.raise();
        }
        if let Some(index) = self.position(key) {
            self.entries.remove(index);
        }
        let erased = outcome.map(|value| Box::new(value) as Box<dyn Any>);
        self.entries.push((key, erased));
    }

    /// Tracked outcomes in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &FieldOutcome<E>> + '_ {
        self.entries.iter().map(|(_, outcome)| outcome)
    }

    #[must_use]
    pub fn state_by_key(&self, key: K) -> Option<&FieldOutcome<E>> {
        self.entries
            .iter()
            .find(|(tracked, _)| *tracked == key)
            .map(|(_, outcome)| outcome)
    }

    /// Tracked keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    #[must_use]
    pub fn contains_key(&self, key: K) -> bool {
        self.position(key).is_some()
    }

    /// Number of distinct tracked fields.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the success payload recorded for `key`.
    ///
    /// Returns `None` when the key is absent or its outcome failed. Panics with
    /// [`ContractViolation::FieldTypeMismatch`] when the payload is not a `V`.
    #[track_caller]
    #[must_use]
    pub fn value_of<V: Any>(&self, key: K) -> Option<&V> {
        match self.state_by_key(key)? {
            Outcome::Ok(value) => match value.downcast_ref::<V>() {
                Some(value) => Some(value),
                None => type_mismatch::<K, V>(key),
            },
            Outcome::Fail(_) => None,
        }
    }

    /// Move the success payload for `key` out of the tracker.
    ///
    /// Used to assemble the target after a passing [`check_state`](Self::check_state).
    /// A failed entry is left in place and yields `None`.
    #[track_caller]
    pub fn take_value<V: Any>(&mut self, key: K) -> Option<V> {
        let index = self.position(key)?;
        match &self.entries[index].1 {
            Outcome::Ok(value) if value.is::<V>() => {}
            Outcome::Ok(_) => type_mismatch::<K, V>(key),
            Outcome::Fail(_) => return None,
        }
        let (_, outcome) = self.entries.remove(index);
        outcome
            .success()
            .and_then(|value| value.downcast::<V>().ok())
            .map(|value| *value)
    }

    /// Every failing field with its error, in insertion order.
    pub fn failures(&self) -> impl Iterator<Item = (K, &E)> + '_ {
        self.entries
            .iter()
            .filter_map(|(key, outcome)| match outcome {
                Outcome::Fail(error) => Some((*key, error)),
                Outcome::Ok(_) => None,
            })
    }

    /// Clear all entries so the tracker can serve a new conversion pass.
    pub fn reset_state(&mut self) {
        tracing::trace!(cleared = self.entries.len(), "resetting field states");
        self.entries.clear();
        self.checked.set(false);
    }

    /// Begin a conversion pass. Same effect as [`reset_state`](Self::reset_state).
    pub fn start_state(&mut self) {
        self.reset_state();
    }

    /// Aggregate the tracked outcomes, first failure wins.
    ///
    /// Marks the tracker as checked.
    pub fn check_state(&self) -> Outcome<(), E>
    where
        E: Clone,
    {
        self.checked.set(true);
        let verdict = aggregate(self.states());
        if verdict.is_failure()
            && let Some((key, _)) = self.failures().next()
        {
            tracing::debug!(
                field = key.name(),
                tracked = self.entries.len(),
                "field state check failed"
            );
        }
        verdict
    }

    fn position(&self, key: K) -> Option<usize> {
        self.entries.iter().position(|(tracked, _)| *tracked == key)
    }
}

#[track_caller]
fn type_mismatch<K: FieldKey, V>(key: K) -> ! {
    ContractViolation::FieldTypeMismatch {
        field: key.name(),
        expected: type_name::<V>(),
    }
    .raise()
}
