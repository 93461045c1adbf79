//! Sorting with nothing but a deque and a stack.
//!
//! The deque is kept in ascending order from front to back. An item
//! smaller than the front goes on the front and one larger than the
//! back goes on the back. Anything else is threaded in by parking the
//! smaller prefix on a stack, pushing the item onto the front, and
//! then unstacking the prefix back on top of it.

use crate::deque::Deque;
use tracing::trace;

/// A last-in-first-out buffer.
pub trait Lifo<T> {
    /// Puts `item` on top.
    fn push(&mut self, item: T);
    /// Takes the top item off, if there is one.
    fn pop(&mut self) -> Option<T>;
    /// The top item, left in place.
    fn peek(&self) -> Option<&T>;
    /// True when nothing is stacked.
    fn is_empty(&self) -> bool;
}

impl<T> Lifo<T> for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn peek(&self) -> Option<&T> {
        self.last()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An incremental sort. Items may be fed one at a time as they are
/// read; the deque is sorted after every insertion.
///
/// # Examples
///
/// ```
/// use random_queues::DequeSort;
///
/// let mut s = DequeSort::new();
/// for w in "d b a c".split_whitespace() {
///     s.insert(w);
/// }
/// assert_eq!(vec!["a", "b", "c", "d"], s.into_sorted_vec());
/// ```
pub struct DequeSort<T, S = Vec<T>> {
    deque: Deque<T>,
    buffer: S,
}

impl<T> DequeSort<T>
where
    T: Ord,
{
    /// A sorter that parks items in a `Vec`.
    pub fn new() -> DequeSort<T> {
        DequeSort::with_buffer(Vec::new())
    }
}

impl<T> Default for DequeSort<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> DequeSort<T, S>
where
    T: Ord,
    S: Lifo<T>,
{
    /// A sorter that parks items in `buffer`, which should be empty.
    pub fn with_buffer(buffer: S) -> DequeSort<T, S> {
        debug_assert!(buffer.is_empty());
        DequeSort {
            deque: Deque::new(),
            buffer,
        }
    }

    /// The number of items inserted so far.
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// True before the first insertion.
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Inserts `item` at its place in the sorted deque.
    pub fn insert(&mut self, item: T) {
        let to_front = match self.deque.peek_front() {
            Ok(first) => item < *first,
            Err(_) => true,
        };
        if to_front {
            self.deque.push_front(item);
            return;
        }

        let to_back = match self.deque.peek_back() {
            Ok(last) => *last < item,
            Err(_) => false,
        };
        if to_back {
            self.deque.push_back(item);
            return;
        }

        // Park everything strictly smaller, then rebuild the front.
        let mut parked = 0usize;
        while self.deque.peek_front().map_or(false, |first| *first < item) {
            match self.deque.pop_front() {
                Ok(first) => self.buffer.push(first),
                Err(_) => break,
            }
            parked += 1;
        }
        self.deque.push_front(item);
        while let Some(first) = self.buffer.pop() {
            self.deque.push_front(first);
        }
        trace!(parked, len = self.deque.len(), "threaded item into deque");
    }

    /// The deque, sorted ascending from front to back.
    pub fn as_deque(&self) -> &Deque<T> {
        &self.deque
    }

    /// Gives up the sorted deque, front first.
    pub fn into_deque(self) -> Deque<T> {
        self.deque
    }

    /// Drains the deque from the front.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.deque.drain().collect()
    }
}

impl<T, S> Extend<T> for DequeSort<T, S>
where
    T: Ord,
    S: Lifo<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.insert(i);
        }
    }
}

/// Sorts `items` ascending through a [`DequeSort`].
///
/// # Examples
///
/// ```
/// use random_queues::sort;
///
/// assert_eq!(vec!["a", "b", "b"], sort(vec!["b", "a", "b"]));
///
/// let nothing: Vec<u8> = sort(Vec::new());
/// assert!(nothing.is_empty());
/// ```
///
/// [`DequeSort`]: struct.DequeSort.html
pub fn sort<T, I>(items: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut s = DequeSort::new();
    s.extend(items);
    s.into_sorted_vec()
}
