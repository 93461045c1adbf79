use crate::deque::Deque;
use crate::error::{Error, Result};
use std::fmt;

/// An iterator over the deque starting from the front. It is
/// constructed from the [`iter`] method on `Deque`.
///
/// The iterator follows the live links of the deque, so the deque
/// cannot be changed while it is held.
///
/// [`iter`]: struct.Deque.html#method.iter
pub struct Iter<'l, T> {
    target: &'l Deque<T>,
    next_index: usize,
}

impl<'l, T> Iter<'l, T> {
    pub(crate) fn new(target: &'l Deque<T>, next_index: usize) -> Self {
        Self { target, next_index }
    }

    /// Like `next`, but running off the end is an
    /// [`Error::EndOfSequence`].
    ///
    /// [`Error::EndOfSequence`]: enum.Error.html#variant.EndOfSequence
    pub fn try_next(&mut self) -> Result<&'l T> {
        self.next().ok_or(Error::EndOfSequence)
    }
}

impl<'l, T> Iterator for Iter<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        let r = self
            .target
            .slots
            .get(self.next_index)
            .and_then(|s| s.get_used())?;
        self.next_index = r.next();
        Some(r.item())
    }
}

/// A draining iterator over the deque starting from the front. It is
/// constructed from the [`drain`] method on `Deque`.
///
/// Items not yet yielded when the iterator is dropped stay in the
/// deque.
///
/// [`drain`]: struct.Deque.html#method.drain
pub struct Drain<'l, T> {
    target: &'l mut Deque<T>,
}

impl<'l, T> Drain<'l, T> {
    pub(crate) fn new(target: &'l mut Deque<T>) -> Self {
        Self { target }
    }
}

impl<'l, T> Iterator for Drain<'l, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.target.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.target.len(), Some(self.target.len()))
    }
}

/// An iterator over a privately held, shuffled copy of a
/// `RandomQueue`'s items. See [`RandomQueue::iter`].
///
/// [`RandomQueue::iter`]: struct.RandomQueue.html#method.iter
pub struct Shuffled<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Shuffled<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }

    /// Like `next`, but running off the end is an
    /// [`Error::EndOfSequence`].
    ///
    /// [`Error::EndOfSequence`]: enum.Error.html#variant.EndOfSequence
    pub fn try_next(&mut self) -> Result<T> {
        self.next().ok_or(Error::EndOfSequence)
    }
}

impl<T> Iterator for Shuffled<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for Shuffled<T> {}

impl<T> fmt::Display for Shuffled<T>
where
    T: fmt::Display,
{
    /// Renders the items not yet yielded, in their shuffled order, as
    /// `[a, b, c]`.
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("[")?;
        for (i, item) in self.items.as_slice().iter().enumerate() {
            if i > 0 {
                fmt.write_str(", ")?;
            }
            write!(fmt, "{}", item)?;
        }
        fmt.write_str("]")
    }
}
