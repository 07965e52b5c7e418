//! LIFO stack over owned singly-linked nodes

use std::fmt;

use super::forward_list::{self, ForwardList};
use super::{Container, ContainerKind};
use crate::error::{LtError, LtResult};

/// Singly-linked LIFO stack.
///
/// Traversal starts at the top, i.e. at the most recently pushed element.
pub struct LinkedStack<T> {
    nodes: ForwardList<T>,
}

impl<T> LinkedStack<T> {
    pub const fn new() -> Self {
        Self {
            nodes: ForwardList::new(),
        }
    }

    /// Push onto the top
    pub fn push(&mut self, value: T) {
        self.nodes.push_front(value);
    }

    /// Remove the top element.
    ///
    /// Popping an empty stack is a caller error and yields
    /// [`LtError::EmptyContainer`].
    pub fn pop(&mut self) -> LtResult<T> {
        self.nodes.pop_front().ok_or(LtError::EmptyContainer)
    }

    /// Top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.nodes.front()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.nodes.front_mut()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn iter(&self) -> forward_list::Iter<'_, T> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> forward_list::IterMut<'_, T> {
        self.nodes.iter_mut()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<T: Eq> Eq for LinkedStack<T> {}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<T> Container<T> for LinkedStack<T> {
    type Iter<'a>
        = forward_list::Iter<'a, T>
    where
        T: 'a;

    type IterMut<'a>
        = forward_list::IterMut<'a, T>
    where
        T: 'a;

    fn push(&mut self, value: T) {
        LinkedStack::push(self, value);
    }

    fn iter(&self) -> forward_list::Iter<'_, T> {
        self.nodes.iter()
    }

    fn iter_mut(&mut self) -> forward_list::IterMut<'_, T> {
        self.nodes.iter_mut()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Stack
    }
}

/// Owning traversal, pops from the top
pub struct IntoIter<T>(LinkedStack<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> IntoIterator for LinkedStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = forward_list::Iter<'a, T>;

    fn into_iter(self) -> forward_list::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedStack<T> {
    type Item = &'a mut T;
    type IntoIter = forward_list::IterMut<'a, T>;

    fn into_iter(self) -> forward_list::IterMut<'a, T> {
        self.iter_mut()
    }
}
