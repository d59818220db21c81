//! Owned, indexable sequence storage.
//!
//! `List<T>` is what the conversion terminals produce and the only form the
//! ordering operators accept: ordering needs index access and multiple
//! passes, which the bare `Sequence` contract does not grant.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::source::{from_iter, IterSource};

/// A materialized sequence: owned, indexable, mutable, ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct List<T>(Vec<T>);

impl<T> List<T> {
    pub fn new() -> Self {
        List(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        List(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Re-enter the operator pipeline with this list as the source.
    pub fn into_seq(self) -> IterSource<std::vec::IntoIter<T>> {
        from_iter(self.0)
    }

    /// Sort in place, ascending by the extracted key, and return the same
    /// container. The sort is stable: elements with equal keys keep their
    /// relative order.
    ///
    /// The caller surrenders exclusive access for the duration of the call;
    /// the returned list is the input list, reordered, not a copy. Ordering
    /// is the only operator family that mutates its input.
    pub fn order_by<K, F>(mut self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.0.sort_by(|a, b| key(a).cmp(&key(b)));
        self
    }

    /// Sort in place, descending by the extracted key, and return the same
    /// container. Stable, like `order_by`.
    pub fn order_by_descending<K, F>(mut self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.0.sort_by(|a, b| key(b).cmp(&key(a)));
        self
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        List(items)
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
