//! Contiguous growable array

use std::slice;

use serde::{Deserialize, Serialize};

use super::{Container, ContainerKind};

/// Thin wrapper over `Vec<T>` exposing the shared container surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    items: Vec<T>,
}

impl<T> Vector<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append at the end
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Ord> Vector<T> {
    /// Sort into ascending order
    pub fn sort(&mut self) {
        self.items.sort_unstable();
    }

    /// Binary search; only meaningful after [`Vector::sort`]
    pub fn contains_sorted(&self, value: &T) -> bool {
        self.items.binary_search(value).is_ok()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Container<T> for Vector<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;

    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        T: 'a;

    fn push(&mut self, value: T) {
        self.items.push(value);
    }

    fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Vector
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
