//! Two sequence containers and a sort built on one of them.
//!
//! [`Deque`] is a doubly-linked double-ended queue. Its nodes live in
//! a `Vec` and track their neighbours by index; removed nodes go on a
//! free list that later insertions draw from before the `Vec` grows.
//!
//! [`RandomQueue`] is a resizing array whose removals, samples and
//! iteration order are uniformly random. Its generator is any
//! [`RandomSource`], which every `rand::Rng` already is.
//!
//! [`DequeSort`] keeps a `Deque` sorted using only its two ends and a
//! [`Lifo`] buffer.
//!
//! [`Deque`]: struct.Deque.html
//! [`RandomQueue`]: struct.RandomQueue.html
//! [`RandomSource`]: trait.RandomSource.html
//! [`DequeSort`]: struct.DequeSort.html
//! [`Lifo`]: trait.Lifo.html

mod deque;
mod error;
mod iterators;
mod random;
mod random_queue;
mod slot;
mod sort;

pub use crate::deque::Deque;
pub use crate::error::{Error, Result};
pub use crate::iterators::{Drain, Iter, Shuffled};
pub use crate::random::RandomSource;
pub use crate::random_queue::RandomQueue;
pub use crate::sort::{sort, DequeSort, Lifo};
