//! Run-time choice of container family

use std::iter::FusedIterator;
use std::slice;

use super::forward_list;
use super::queue;
use super::{Container, ContainerKind, ForwardList, LinkedQueue, LinkedStack, Vector};

/// One of the four container families, chosen by [`ContainerKind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyContainer<T> {
    Queue(LinkedQueue<T>),
    Stack(LinkedStack<T>),
    ForwardList(ForwardList<T>),
    Vector(Vector<T>),
}

impl<T> AnyContainer<T> {
    /// Empty container of the given family
    pub fn new(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::Queue => Self::Queue(LinkedQueue::new()),
            ContainerKind::Stack => Self::Stack(LinkedStack::new()),
            ContainerKind::ForwardList => Self::ForwardList(ForwardList::new()),
            ContainerKind::Vector => Self::Vector(Vector::new()),
        }
    }
}

impl<T> Default for AnyContainer<T> {
    fn default() -> Self {
        Self::new(ContainerKind::default())
    }
}

impl<T> Container<T> for AnyContainer<T> {
    type Iter<'a>
        = AnyIter<'a, T>
    where
        T: 'a;

    type IterMut<'a>
        = AnyIterMut<'a, T>
    where
        T: 'a;

    fn push(&mut self, value: T) {
        match self {
            Self::Queue(c) => c.push(value),
            Self::Stack(c) => c.push(value),
            Self::ForwardList(c) => c.push_front(value),
            Self::Vector(c) => c.push(value),
        }
    }

    fn iter(&self) -> AnyIter<'_, T> {
        match self {
            Self::Queue(c) => AnyIter::Queue(c.iter()),
            Self::Stack(c) => AnyIter::Linked(c.iter()),
            Self::ForwardList(c) => AnyIter::Linked(c.iter()),
            Self::Vector(c) => AnyIter::Vector(c.iter()),
        }
    }

    fn iter_mut(&mut self) -> AnyIterMut<'_, T> {
        match self {
            Self::Queue(c) => AnyIterMut::Queue(c.iter_mut()),
            Self::Stack(c) => AnyIterMut::Linked(c.iter_mut()),
            Self::ForwardList(c) => AnyIterMut::Linked(c.iter_mut()),
            Self::Vector(c) => AnyIterMut::Vector(c.iter_mut()),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Queue(c) => c.len(),
            Self::Stack(c) => c.len(),
            Self::ForwardList(c) => c.len(),
            Self::Vector(c) => c.len(),
        }
    }

    fn empty_like(&self) -> Self {
        Self::new(self.kind())
    }

    fn kind(&self) -> ContainerKind {
        match self {
            Self::Queue(_) => ContainerKind::Queue,
            Self::Stack(_) => ContainerKind::Stack,
            Self::ForwardList(_) => ContainerKind::ForwardList,
            Self::Vector(_) => ContainerKind::Vector,
        }
    }
}

impl<'a, T> IntoIterator for &'a AnyContainer<T> {
    type Item = &'a T;
    type IntoIter = AnyIter<'a, T>;

    fn into_iter(self) -> AnyIter<'a, T> {
        self.iter()
    }
}

/// Shared traversal over any family
pub enum AnyIter<'a, T> {
    Queue(queue::Iter<'a, T>),
    Linked(forward_list::Iter<'a, T>),
    Vector(slice::Iter<'a, T>),
}

impl<'a, T> Iterator for AnyIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self {
            Self::Queue(it) => it.next(),
            Self::Linked(it) => it.next(),
            Self::Vector(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Queue(it) => it.size_hint(),
            Self::Linked(it) => it.size_hint(),
            Self::Vector(it) => it.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for AnyIter<'_, T> {}
impl<T> FusedIterator for AnyIter<'_, T> {}

/// Mutable traversal over any family
pub enum AnyIterMut<'a, T> {
    Queue(queue::IterMut<'a, T>),
    Linked(forward_list::IterMut<'a, T>),
    Vector(slice::IterMut<'a, T>),
}

impl<'a, T> Iterator for AnyIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        match self {
            Self::Queue(it) => it.next(),
            Self::Linked(it) => it.next(),
            Self::Vector(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Queue(it) => it.size_hint(),
            Self::Linked(it) => it.size_hint(),
            Self::Vector(it) => it.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for AnyIterMut<'_, T> {}
impl<T> FusedIterator for AnyIterMut<'_, T> {}
