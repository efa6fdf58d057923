//! Capability-restricted collection pair.
//!
//! A domain entity owns a [`WriteList`] for a collection attribute and hands
//! out [`ReadList`] views through its public accessors. The read-only view
//! borrows the same backing storage and exposes no mutating operation at all,
//! so callers holding it cannot change the collection:
//!
//! ```compile_fail
//! # use keel_core::{ListPolicy, WriteList};
//! # struct Grades;
//! # impl ListPolicy for Grades {
//! #     type Item = u8;
//! #     fn compare_items(a: &u8, b: &u8) -> bool { a == b }
//! # }
//! let grades = WriteList::<Grades>::from_items([7, 8, 6]);
//! grades.read_only().add(9);
//! ```
//!
//! While a view is alive the owner cannot mutate either, so a view never
//! observes a change mid-read:
//!
//! ```compile_fail
//! # use keel_core::{ListPolicy, WriteList};
//! # struct Grades;
//! # impl ListPolicy for Grades {
//! #     type Item = u8;
//! #     fn compare_items(a: &u8, b: &u8) -> bool { a == b }
//! # }
//! let mut grades = WriteList::<Grades>::from_items([7, 8, 6]);
//! let view = grades.read_only();
//! grades.add(9);
//! assert_eq!(view.len(), 3);
//! ```
//!
//! Code paths that pick a handle at runtime go through [`ListAccess`], which
//! rejects edits on the read-only side with
//! [`ContractViolation::ReadOnlyViolation`].

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use keel_types::ContractViolation;

/// Item type and equality rule of a concrete domain collection.
///
/// `compare_items` is the only notion of sameness used for containment and
/// removal. It need not be full structural equality.
pub trait ListPolicy {
    type Item;

    fn compare_items(a: &Self::Item, b: &Self::Item) -> bool;
}

/// Mutable side of the pair. Owns the backing sequence.
pub struct WriteList<P: ListPolicy> {
    items: Vec<P::Item>,
    _policy: PhantomData<fn() -> P>,
}

impl<P: ListPolicy> WriteList<P> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    pub fn from_items(items: impl IntoIterator<Item = P::Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
            _policy: PhantomData,
        }
    }

    pub fn add(&mut self, item: P::Item) {
        self.items.push(item);
    }

    pub fn add_many(&mut self, items: impl IntoIterator<Item = P::Item>) {
        self.items.extend(items);
    }

    /// Remove the first item matching `item` under [`ListPolicy::compare_items`].
    ///
    /// Later duplicates are left untouched. Returns whether anything was removed.
    pub fn remove(&mut self, item: &P::Item) -> bool {
        match self.position(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove one first match per argument. Returns how many items were removed.
    pub fn remove_many<'i>(&mut self, items: impl IntoIterator<Item = &'i P::Item>) -> usize
    where
        P::Item: 'i,
    {
        items.into_iter().filter(|item| self.remove(item)).count()
    }

    /// Replace the whole sequence, returning the previous items.
    pub fn replace(&mut self, items: impl IntoIterator<Item = P::Item>) -> Vec<P::Item> {
        std::mem::replace(&mut self.items, items.into_iter().collect())
    }

    #[must_use]
    pub fn items(&self) -> &[P::Item] {
        &self.items
    }

    /// Owned copy of the current sequence.
    #[must_use]
    pub fn snapshot(&self) -> Vec<P::Item>
    where
        P::Item: Clone,
    {
        self.items.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P::Item> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn exists(&self, item: &P::Item) -> bool {
        self.position(item).is_some()
    }

    /// Read-only projection over the same backing storage.
    #[must_use]
    pub fn read_only(&self) -> ReadList<'_, P> {
        ReadList {
            items: &self.items,
            _policy: PhantomData,
        }
    }

    fn position(&self, item: &P::Item) -> Option<usize> {
        self.items
            .iter()
            .position(|candidate| P::compare_items(candidate, item))
    }
}

impl<P: ListPolicy> Default for WriteList<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ListPolicy> Clone for WriteList<P>
where
    P::Item: Clone,
{
    fn clone(&self) -> Self {
        Self::from_items(self.items.clone())
    }
}

impl<P: ListPolicy> fmt::Debug for WriteList<P>
where
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WriteList").field(&self.items).finish()
    }
}

impl<P: ListPolicy> From<Vec<P::Item>> for WriteList<P> {
    fn from(items: Vec<P::Item>) -> Self {
        Self::from_items(items)
    }
}

impl<'a, P: ListPolicy> IntoIterator for &'a WriteList<P> {
    type Item = &'a P::Item;
    type IntoIter = std::slice::Iter<'a, P::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: ListPolicy> Serialize for WriteList<P>
where
    P::Item: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, P: ListPolicy> Deserialize<'de> for WriteList<P>
where
    P::Item: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<P::Item>::deserialize(deserializer).map(Self::from_items)
    }
}

/// Read-only side of the pair.
///
/// Borrows the owning [`WriteList`]'s storage. Offers length, containment,
/// iteration and snapshots, and nothing that mutates:
///
/// ```compile_fail
/// # use keel_core::{ListPolicy, WriteList};
/// # struct Grades;
/// # impl ListPolicy for Grades {
/// #     type Item = u8;
/// #     fn compare_items(a: &u8, b: &u8) -> bool { a == b }
/// # }
/// let grades = WriteList::<Grades>::from_items([7, 8, 6]);
/// grades.read_only().remove(&8);
/// ```
///
/// ```compile_fail
/// # use keel_core::{ListPolicy, WriteList};
/// # struct Grades;
/// # impl ListPolicy for Grades {
/// #     type Item = u8;
/// #     fn compare_items(a: &u8, b: &u8) -> bool { a == b }
/// # }
/// let grades = WriteList::<Grades>::from_items([7, 8, 6]);
/// grades.read_only().add_many([1, 2]);
/// ```
///
/// ```compile_fail
/// # use keel_core::{ListPolicy, WriteList};
/// # struct Grades;
/// # impl ListPolicy for Grades {
/// #     type Item = u8;
/// #     fn compare_items(a: &u8, b: &u8) -> bool { a == b }
/// # }
/// let grades = WriteList::<Grades>::from_items([7, 8, 6]);
/// grades.read_only().remove_many(&[7, 8]);
/// ```
///
/// Reading works as expected:
///
/// ```
/// # use keel_core::{ListPolicy, WriteList};
/// # struct Grades;
/// # impl ListPolicy for Grades {
/// #     type Item = u8;
/// #     fn compare_items(a: &u8, b: &u8) -> bool { a == b }
/// # }
/// let grades = WriteList::<Grades>::from_items([7, 8, 6]);
/// let view = grades.read_only();
/// assert_eq!(view.len(), 3);
/// assert!(view.exists(&8));
/// assert!(!view.exists(&9));
/// ```
pub struct ReadList<'a, P: ListPolicy> {
    items: &'a [P::Item],
    _policy: PhantomData<fn() -> P>,
}

impl<'a, P: ListPolicy> ReadList<'a, P> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn exists(&self, item: &P::Item) -> bool {
        self.items
            .iter()
            .any(|candidate| P::compare_items(candidate, item))
    }

    #[must_use]
    pub fn items(&self) -> &'a [P::Item] {
        self.items
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<P::Item>
    where
        P::Item: Clone,
    {
        self.items.to_vec()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, P::Item> {
        self.items.iter()
    }

    #[must_use]
    pub fn compare_items(&self, a: &P::Item, b: &P::Item) -> bool {
        P::compare_items(a, b)
    }
}

impl<P: ListPolicy> Clone for ReadList<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ListPolicy> Copy for ReadList<'_, P> {}

impl<P: ListPolicy> fmt::Debug for ReadList<'_, P>
where
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadList").field(&self.items).finish()
    }
}

impl<'a, P: ListPolicy> IntoIterator for ReadList<'a, P> {
    type Item = &'a P::Item;
    type IntoIter = std::slice::Iter<'a, P::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<P: ListPolicy> Serialize for ReadList<'_, P>
where
    P::Item: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

/// A mutation expressed as data, for handles chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEdit<T> {
    Add(T),
    AddMany(Vec<T>),
    Remove(T),
    RemoveMany(Vec<T>),
    Replace(Vec<T>),
}

impl<T> ListEdit<T> {
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            ListEdit::Add(_) => "add",
            ListEdit::AddMany(_) => "add_many",
            ListEdit::Remove(_) => "remove",
            ListEdit::RemoveMany(_) => "remove_many",
            ListEdit::Replace(_) => "replace",
        }
    }
}

/// Either side of the pair, selected at runtime.
pub enum ListAccess<'a, P: ListPolicy> {
    Write(&'a mut WriteList<P>),
    Read(ReadList<'a, P>),
}

impl<P: ListPolicy> ListAccess<'_, P> {
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        matches!(self, ListAccess::Write(_))
    }

    #[must_use]
    pub fn read_only(&self) -> ReadList<'_, P> {
        match self {
            ListAccess::Write(list) => list.read_only(),
            ListAccess::Read(view) => *view,
        }
    }

    /// Apply `edit` through this handle.
    ///
    /// The read-only side never touches storage and reports
    /// [`ContractViolation::ReadOnlyViolation`].
    pub fn apply(&mut self, edit: ListEdit<P::Item>) -> Result<(), ContractViolation> {
        let list = match self {
            ListAccess::Write(list) => list,
            ListAccess::Read(_) => {
                let operation = edit.operation();
                tracing::warn!(operation, "rejected mutation through read-only list");
                return Err(ContractViolation::ReadOnlyViolation { operation });
            }
        };
        match edit {
            ListEdit::Add(item) => list.add(item),
            ListEdit::AddMany(items) => list.add_many(items),
            ListEdit::Remove(item) => {
                list.remove(&item);
            }
            ListEdit::RemoveMany(items) => {
                list.remove_many(&items);
            }
            ListEdit::Replace(items) => {
                list.replace(items);
            }
        }
        Ok(())
    }
}
