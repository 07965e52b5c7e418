//! # lt-core — Tickets and the container family
//!
//! Value types shared by every ticket draw, plus four interchangeable
//! sequential containers behind one capability trait.
//!
//! ## Containers
//!
//! - **LinkedQueue**: FIFO, owned nodes, O(1) tail append
//! - **LinkedStack**: LIFO, owned nodes, fallible `pop`
//! - **ForwardList**: front insertion, owned nodes
//! - **Vector**: contiguous storage, optional sorting
//!
//! ```text
//! Container<T> (push / iter / iter_mut / len / is_empty / empty_like)
//!     │
//!     ├── LinkedQueue<T>
//!     ├── LinkedStack<T>
//!     ├── ForwardList<T>
//!     ├── Vector<T>
//!     └── AnyContainer<T>  ← chosen at run time by ContainerKind
//! ```

pub mod containers;
pub mod error;
pub mod ticket;

pub use containers::{
    AnyContainer, Container, ContainerKind, ForwardList, LinkedQueue, LinkedStack, Vector,
};
pub use error::*;
pub use ticket::Ticket;
