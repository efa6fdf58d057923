//! First-failure-wins aggregation over ordered outcomes.
//!
//! Aggregation is a validity gate: it answers pass/fail for a sequence of
//! outcomes and, on failure, surfaces the error of the earliest failing
//! element. It does not assemble success payloads; see [`collect`] for that.

use keel_types::Outcome;

/// Combine borrowed outcomes into one.
///
/// An empty sequence passes. Otherwise the result fails with a clone of the
/// first failing element's error, in iteration order.
pub fn aggregate<'a, V, E>(outcomes: impl IntoIterator<Item = &'a Outcome<V, E>>) -> Outcome<(), E>
where
    V: 'a,
    E: Clone + 'a,
{
    match first_failure(outcomes) {
        Some(error) => Outcome::Fail(error.clone()),
        None => Outcome::Ok(()),
    }
}

/// Like [`aggregate`], but consumes the outcomes so the error is moved out.
///
/// Iteration stops at the first failure.
pub fn aggregate_owned<V, E>(outcomes: impl IntoIterator<Item = Outcome<V, E>>) -> Outcome<(), E> {
    outcomes
        .into_iter()
        .find_map(Outcome::failure)
        .map_or(Outcome::Ok(()), Outcome::Fail)
}

/// Error of the first failing outcome, if any.
#[must_use]
pub fn first_failure<'a, V, E>(outcomes: impl IntoIterator<Item = &'a Outcome<V, E>>) -> Option<&'a E>
where
    V: 'a,
    E: 'a,
{
    outcomes.into_iter().find_map(|outcome| match outcome {
        Outcome::Fail(error) => Some(error),
        Outcome::Ok(_) => None,
    })
}

/// Gather every success value, or the first failure.
pub fn collect<V, E>(outcomes: impl IntoIterator<Item = Outcome<V, E>>) -> Outcome<Vec<V>, E> {
    let outcomes = outcomes.into_iter();
    let mut values = Vec::with_capacity(outcomes.size_hint().0);
    for outcome in outcomes {
        match outcome {
            Outcome::Ok(value) => values.push(value),
            Outcome::Fail(error) => return Outcome::Fail(error),
        }
    }
    Outcome::Ok(values)
}
