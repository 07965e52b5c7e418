//! Container family
//!
//! Four sequential containers sharing one capability set ([`Container`]):
//!
//! | Family          | Layout                     | `push` inserts at | Traversal order      |
//! |-----------------|----------------------------|-------------------|----------------------|
//! | [`LinkedQueue`] | owned singly-linked nodes  | tail              | insertion order      |
//! | [`LinkedStack`] | owned singly-linked nodes  | top               | reverse of insertion |
//! | [`ForwardList`] | owned singly-linked nodes  | front             | reverse of insertion |
//! | [`Vector`]      | contiguous growable array  | tail              | insertion order      |
//!
//! Generation and selection code is written once against [`Container`].
//! [`AnyContainer`] picks the family at run time from a [`ContainerKind`].

mod any;
mod forward_list;
mod queue;
mod stack;
mod vector;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LtError;

pub use any::{AnyContainer, AnyIter, AnyIterMut};
pub use forward_list::ForwardList;
pub use queue::LinkedQueue;
pub use stack::LinkedStack;
pub use vector::Vector;

/// Iterator types of the individual families
pub mod iter {
    pub use super::forward_list::{
        IntoIter as ForwardListIntoIter, Iter as ForwardListIter, IterMut as ForwardListIterMut,
    };
    pub use super::queue::{IntoIter as QueueIntoIter, Iter as QueueIter, IterMut as QueueIterMut};
    pub use super::stack::IntoIter as StackIntoIter;
}

/// Shared capability set of every container family.
///
/// The selector builds its winners container through [`Container::empty_like`],
/// so the output always belongs to the same family as the input.
pub trait Container<T>: Default {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    type IterMut<'a>: Iterator<Item = &'a mut T>
    where
        Self: 'a,
        T: 'a;

    /// Insert at the family's logical end
    fn push(&mut self, value: T);

    /// Forward traversal in the family's natural order
    fn iter(&self) -> Self::Iter<'_>;

    /// Forward traversal with write access to each element
    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Number of stored elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fresh, empty container of the same family as `self`
    fn empty_like(&self) -> Self {
        Self::default()
    }

    /// Which family this container belongs to
    fn kind(&self) -> ContainerKind;
}

/// Container family selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    Queue,
    Stack,
    ForwardList,
    #[default]
    Vector,
}

impl ContainerKind {
    /// Every family, in menu order
    pub const ALL: [ContainerKind; 4] = [
        ContainerKind::Stack,
        ContainerKind::ForwardList,
        ContainerKind::Queue,
        ContainerKind::Vector,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::Stack => "stack",
            Self::ForwardList => "forward-list",
            Self::Vector => "vector",
        }
    }

    /// Does traversal visit elements in reverse of push order?
    pub fn is_reversed(&self) -> bool {
        matches!(self, Self::Stack | Self::ForwardList)
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContainerKind {
    type Err = LtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "queue" => Ok(Self::Queue),
            "stack" => Ok(Self::Stack),
            "forward-list" | "forward_list" | "list" => Ok(Self::ForwardList),
            "vector" | "vec" => Ok(Self::Vector),
            other => {
                log::debug!("Unknown container kind '{other}', expected one of {:?}", Self::ALL);
                Err(LtError::UnknownContainer(other.to_string()))
            }
        }
    }
}
