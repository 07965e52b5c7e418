//! FIFO queue over owned singly-linked nodes
//!
//! Nodes are heap-allocated and owned by the queue through the `head` chain.
//! `tail` is a non-owning pointer to the last node so `push` stays O(1).
//! Every node is released exactly once, either by `pop` or by `Drop`.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{Container, ContainerKind};

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<NonNull<Node<T>>>;

/// Singly-linked FIFO queue
pub struct LinkedQueue<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedQueue<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Append at the tail
    pub fn push(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { value, next: None })));

        match self.tail {
            // SAFETY: `tail` points at a live node owned by this queue and no
            // other reference to it exists while we hold `&mut self`.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    /// Remove from the head; `None` when the queue is empty
    pub fn pop(&mut self) -> Option<T> {
        let head = self.head?;

        // SAFETY: `head` was produced by `Box::leak` in `push` and is unlinked
        // here before being reboxed, so it is freed exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Element at the head
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the node is owned by `self` and outlives the returned borrow.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Element at the tail
    pub fn back(&self) -> Option<&T> {
        // SAFETY: as in `front`.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drop every node
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: the queue exclusively owns its nodes, exactly like `Box<Node<T>>`.
unsafe impl<T: Send> Send for LinkedQueue<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Container<T> for LinkedQueue<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    type IterMut<'a>
        = IterMut<'a, T>
    where
        T: 'a;

    fn push(&mut self, value: T) {
        LinkedQueue::push(self, value);
    }

    fn iter(&self) -> Iter<'_, T> {
        LinkedQueue::iter(self)
    }

    fn iter_mut(&mut self) -> IterMut<'_, T> {
        LinkedQueue::iter_mut(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn kind(&self) -> ContainerKind {
        ContainerKind::Queue
    }
}

/// Shared traversal from head to tail.
///
/// Two iterators compare equal when they stand on the same node, or are both
/// past the end.
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            // SAFETY: the queue is borrowed for `'a`, so the node is alive and
            // not mutated for the duration of the borrow.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.next == other.next
    }
}

impl<T> Eq for Iter<'_, T> {}

/// Mutable traversal from head to tail
pub struct IterMut<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.next.map(|node| {
            // SAFETY: the queue is mutably borrowed for `'a` and each node is
            // yielded at most once, so the returned references never alias.
            let node = unsafe { &mut *node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning traversal, pops from the head
pub struct IntoIter<T>(LinkedQueue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_fifo() {
        let mut queue = LinkedQueue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.back(), Some(&3));

        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        queue.push(4);
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(4));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
        assert_eq!(queue.back(), None);
    }

    #[test]
    fn test_pop_empty_is_none() {
        let mut queue: LinkedQueue<u8> = LinkedQueue::new();
        assert_eq!(queue.pop(), None);
        // Still usable after a failed pop
        queue.push(9);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn test_iter_is_reiterable() {
        let queue: LinkedQueue<_> = (1..=5).collect();
        let first: Vec<_> = queue.iter().copied().collect();
        let second: Vec<_> = queue.iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(queue.iter().len(), 5);
    }

    #[test]
    fn test_iter_equality() {
        let queue: LinkedQueue<_> = (1..=3).collect();
        let mut a = queue.iter();
        let mut b = queue.iter();
        assert!(a == b);

        a.next();
        assert!(a != b);
        b.next();
        assert!(a == b);

        // Exhausted iterators match the iterator of an empty queue
        while a.next().is_some() {}
        let empty: LinkedQueue<i32> = LinkedQueue::new();
        assert!(a == empty.iter());
        assert_eq!(a.next(), None);
    }

    #[test]
    fn test_iter_mut_writes_through() {
        let mut queue: LinkedQueue<_> = (1..=3).collect();
        for v in &mut queue {
            *v += 10;
        }
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![11, 12, 13]);
    }

    #[test]
    fn test_every_node_dropped_once() {
        struct Probe(Rc<Cell<usize>>);
        impl Drop for Probe {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        {
            let mut queue = LinkedQueue::new();
            for _ in 0..10 {
                queue.push(Probe(Rc::clone(&drops)));
            }
            drop(queue.pop());
            drop(queue.pop());
            assert_eq!(drops.get(), 2);
        }
        assert_eq!(drops.get(), 10);
    }

    #[test]
    fn test_long_chain_drop() {
        let queue: LinkedQueue<u32> = (0..1_000_000).collect();
        assert_eq!(queue.len(), 1_000_000);
        drop(queue);
    }

    #[test]
    fn test_clone_and_eq() {
        let queue: LinkedQueue<_> = vec!['a', 'b'].into_iter().collect();
        let copy = queue.clone();
        assert_eq!(queue, copy);
        assert_eq!(format!("{:?}", copy), "['a', 'b']");
    }
}
