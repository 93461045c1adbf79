use crate::error::{Error, Result};
use crate::iterators::{Drain, Iter};
use crate::slot::Slot;
use std::fmt;
use std::iter::FromIterator;

/// A double-ended queue built from doubly-linked nodes.
///
/// The nodes live in an arena and link to each other by index. A
/// removed node's slot goes onto a free list and is reused by the
/// next insertion before the arena grows.
pub struct Deque<T> {
    // Index of the first slot on the free list. MAX when the free
    // list is empty.
    free_list: usize,
    // The index of the front node. MAX when the deque is empty.
    pub(crate) front: usize,
    // The index of the back node. MAX when the deque is empty.
    pub(crate) back: usize,
    // The number of live nodes.
    len_used: usize,
    // The number of slots currently on the free list.
    len_free: usize,
    pub(crate) slots: Vec<Slot<T>>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Deque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for Deque<T>
where
    T: fmt::Display,
{
    /// Renders the items front to back as `[a, b, c]`.
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                fmt.write_str(", ")?;
            }
            write!(fmt, "{}", item)?;
        }
        fmt.write_str("]")
    }
}

impl<T> Deque<T> {
    /// Creates an empty `Deque`. No allocations are performed until
    /// items are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::Deque;
    ///
    /// let deque: Deque<u32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Deque<T> {
        Deque {
            free_list: usize::MAX,
            front: usize::MAX,
            back: usize::MAX,
            len_used: 0,
            len_free: 0,
            slots: Vec::new(),
        }
    }

    /// Create a new `Deque` whose free list is already `capacity`
    /// slots deep.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::Deque;
    ///
    /// let deque: Deque<u32> = Deque::with_capacity(16);
    /// assert_eq!(16, deque.len_freelist());
    /// ```
    pub fn with_capacity(capacity: usize) -> Deque<T> {
        let mut slots = Vec::with_capacity(capacity);

        let mut next = usize::MAX;
        for i in 0..capacity {
            slots.push(Slot::new_free(next));
            next = i;
        }

        Deque {
            free_list: next,
            front: usize::MAX,
            back: usize::MAX,
            len_used: 0,
            len_free: capacity,
            slots,
        }
    }

    /// The number of items in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_front(1);
    /// d.push_back(2);
    /// assert_eq!(2, d.len());
    ///
    /// d.pop_front().unwrap();
    /// assert_eq!(1, d.len());
    /// ```
    pub fn len(&self) -> usize {
        self.len_used
    }

    /// True when the deque is empty.
    pub fn is_empty(&self) -> bool {
        0 == self.len_used
    }

    /// The number of slots waiting on the free list.
    pub fn len_freelist(&self) -> usize {
        self.len_free
    }

    /// Insert `item` at the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_front(10);
    /// d.push_front(20);
    ///
    /// assert_eq!(Ok(&20), d.peek_front());
    /// assert_eq!(Ok(&10), d.peek_back());
    /// ```
    pub fn push_front(&mut self, item: T) {
        let new_ix = self.allocate(usize::MAX, self.front, item);

        // Point the old front back at the node we just inserted.
        if usize::MAX != self.front {
            if let Some(old) = self.slots[self.front].get_used_mut() {
                debug_assert_eq!(usize::MAX, old.prev());
                old.set_prev(new_ix);
            }
        }
        self.front = new_ix;

        // The first node is both ends.
        if usize::MAX == self.back {
            self.back = new_ix;
        }
    }

    /// Insert `item` at the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(10);
    /// d.push_back(20);
    ///
    /// assert_eq!(Ok(&10), d.peek_front());
    /// assert_eq!(Ok(&20), d.peek_back());
    /// ```
    pub fn push_back(&mut self, item: T) {
        let new_ix = self.allocate(self.back, usize::MAX, item);

        if usize::MAX != self.back {
            if let Some(old) = self.slots[self.back].get_used_mut() {
                debug_assert_eq!(usize::MAX, old.next());
                old.set_next(new_ix);
            }
        }
        self.back = new_ix;

        if usize::MAX == self.front {
            self.front = new_ix;
        }
    }

    /// Like [`push_front`], but for items read from a source that can
    /// yield nothing. `None` is refused with
    /// [`Error::InvalidArgument`] and the deque is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// assert_eq!(Err(Error::InvalidArgument), d.try_push_front(None));
    /// assert_eq!(Ok(()), d.try_push_front(Some('a')));
    /// assert_eq!(1, d.len());
    /// ```
    ///
    /// [`push_front`]: struct.Deque.html#method.push_front
    /// [`Error::InvalidArgument`]: enum.Error.html#variant.InvalidArgument
    pub fn try_push_front(&mut self, item: Option<T>) -> Result<()> {
        let item = item.ok_or(Error::InvalidArgument)?;
        self.push_front(item);
        Ok(())
    }

    /// Like [`push_back`], but refuses `None` with
    /// [`Error::InvalidArgument`].
    ///
    /// [`push_back`]: struct.Deque.html#method.push_back
    /// [`Error::InvalidArgument`]: enum.Error.html#variant.InvalidArgument
    pub fn try_push_back(&mut self, item: Option<T>) -> Result<()> {
        let item = item.ok_or(Error::InvalidArgument)?;
        self.push_back(item);
        Ok(())
    }

    /// The item at the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// assert_eq!(Err(Error::EmptyContainer), d.peek_front());
    ///
    /// d.push_back(10);
    /// assert_eq!(Ok(&10), d.peek_front());
    /// ```
    pub fn peek_front(&self) -> Result<&T> {
        self.item_at(self.front)
    }

    /// The item at the back of the deque.
    pub fn peek_back(&self) -> Result<&T> {
        self.item_at(self.back)
    }

    /// Remove the front of the deque and return it.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// d.push_back(10);
    /// d.push_back(20);
    ///
    /// assert_eq!(Ok(10), d.pop_front());
    /// assert_eq!(Ok(20), d.pop_front());
    /// assert_eq!(Err(Error::EmptyContainer), d.pop_front());
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        if usize::MAX != self.front {
            Ok(self.remove_unchecked(self.front))
        } else {
            Err(Error::EmptyContainer)
        }
    }

    /// Remove the back of the deque and return it.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// d.push_front(10);
    /// d.push_front(20);
    ///
    /// assert_eq!(Ok(10), d.pop_back());
    /// assert_eq!(Ok(20), d.pop_back());
    /// assert_eq!(Err(Error::EmptyContainer), d.pop_back());
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        if usize::MAX != self.back {
            Ok(self.remove_unchecked(self.back))
        } else {
            Err(Error::EmptyContainer)
        }
    }

    /// An iterator over the live nodes from front to back. Every call
    /// starts a fresh walk from the current front.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// d.push_back(3);
    ///
    /// let v: Vec<&u8> = d.iter().collect();
    /// assert_eq!(vec![&1, &2, &3], v);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self, self.front)
    }

    /// A draining iterator that removes items from the front. Drained
    /// slots are moved onto the free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// d.push_back(3);
    ///
    /// let v: Vec<u8> = d.drain().collect();
    /// assert_eq!(vec![1, 2, 3], v);
    /// assert!(d.is_empty());
    /// assert_eq!(3, d.len_freelist());
    /// ```
    pub fn drain(&mut self) -> Drain<T> {
        Drain::new(self)
    }

    fn item_at(&self, ix: usize) -> Result<&T> {
        self.slots
            .get(ix)
            .and_then(|s| s.get_used())
            .map(|u| u.item())
            .ok_or(Error::EmptyContainer)
    }

    fn remove_unchecked(&mut self, ix: usize) -> T {
        let (prev, item, next) = match self.free(ix).into_used() {
            Some(used) => used.take(),
            None => unreachable!("slot {} is linked but free", ix),
        };

        if self.front == ix {
            debug_assert_eq!(usize::MAX, prev);
            self.front = next;
        } else if let Some(p) = self.slots[prev].get_used_mut() {
            p.set_next(next);
        }

        if self.back == ix {
            debug_assert_eq!(usize::MAX, next);
            self.back = prev;
        } else if let Some(n) = self.slots[next].get_used_mut() {
            n.set_prev(prev);
        }

        // Both ends are MAX together or neither is.
        debug_assert_eq!(usize::MAX == self.front, usize::MAX == self.back);
        debug_assert_eq!(self.is_empty(), usize::MAX == self.front);

        item
    }

    fn allocate(&mut self, prev: usize, next: usize, item: T) -> usize {
        self.len_used += 1;

        let s = Slot::new_used(prev, next, item);

        let free_next = self
            .slots
            .get(self.free_list)
            .and_then(|f| f.get_free())
            .map(|f| f.next());

        match free_next {
            Some(next) => {
                let ix = self.free_list;
                self.free_list = next;
                self.slots[ix] = s;
                self.len_free -= 1;
                ix
            }
            None => {
                self.slots.push(s);
                self.slots.len() - 1
            }
        }
    }

    fn free(&mut self, ix: usize) -> Slot<T> {
        debug_assert!(self.slots[ix].get_used().is_some());

        self.len_used -= 1;

        let mut v = Slot::new_free(self.free_list);
        std::mem::swap(&mut v, &mut self.slots[ix]);
        self.free_list = ix;
        self.len_free += 1;
        v
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut d = Self::new();
        d.extend(iter);
        d
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.push_back(i);
        }
    }
}

impl<'l, T> IntoIterator for &'l Deque<T> {
    type Item = &'l T;
    type IntoIter = Iter<'l, T>;

    fn into_iter(self) -> Iter<'l, T> {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn push_peek_works() {
        let mut d = Deque::new();
        d.push_front(10u8);

        assert_eq!(Ok(&10), d.peek_front());
        assert_eq!(Ok(&10), d.peek_back());

        let mut d = Deque::new();
        d.push_back(11u8);

        assert_eq!(Ok(&11), d.peek_front());
        assert_eq!(Ok(&11), d.peek_back());
    }

    #[test]
    fn push_back_keeps_order() {
        let mut d = Deque::new();
        d.push_back(10u8);
        d.push_back(11u8);

        assert_eq!(Ok(&10), d.peek_front());
        assert_eq!(Ok(&11), d.peek_back());
    }

    #[test]
    fn mixed_ends_line_up() {
        let mut d = Deque::new();
        d.push_back(2u8);
        d.push_front(1u8);
        d.push_back(3u8);
        d.push_front(0u8);

        assert_eq!(vec![&0, &1, &2, &3], d.iter().collect::<Vec<&u8>>());
        assert_eq!(Ok(3), d.pop_back());
        assert_eq!(Ok(0), d.pop_front());
        assert_eq!(vec![&1, &2], d.iter().collect::<Vec<&u8>>());
    }

    #[test]
    fn counts_work_as_expected() {
        let mut d = Deque::new();
        d.push_front(10u8);
        d.push_front(11u8);
        assert_eq!(2, d.len());
        assert_eq!(0, d.len_freelist());

        d.pop_back().unwrap();
        assert_eq!(1, d.len());
        assert_eq!(1, d.len_freelist());

        d.pop_back().unwrap();
        assert_eq!(0, d.len());
        assert_eq!(2, d.len_freelist());

        d.push_front(12u8);
        assert_eq!(1, d.len());
        assert_eq!(1, d.len_freelist());

        d.push_front(13u8);
        assert_eq!(2, d.len());
        assert_eq!(0, d.len_freelist());
    }

    #[test]
    fn removing_the_last_node_clears_both_ends() {
        let mut d = Deque::new();
        d.push_back(1u8);
        d.pop_front().unwrap();

        assert_eq!(usize::MAX, d.front);
        assert_eq!(usize::MAX, d.back);

        d.push_front(2u8);
        d.pop_back().unwrap();

        assert_eq!(usize::MAX, d.front);
        assert_eq!(usize::MAX, d.back);
    }

    #[test]
    fn new_ends_have_no_outward_links() {
        let mut d: Deque<u8> = (0..4).collect();
        d.pop_front().unwrap();
        d.pop_back().unwrap();

        let front = d.slots[d.front].get_used().unwrap();
        let back = d.slots[d.back].get_used().unwrap();
        assert_eq!(usize::MAX, front.prev());
        assert_eq!(usize::MAX, back.next());
    }

    #[test]
    fn empty_deque_refuses_peek_and_pop() {
        let mut d: Deque<u8> = Deque::new();
        d.push_front(1);
        d.pop_front().unwrap();

        assert!(d.is_empty());

        assert_eq!(Err(Error::EmptyContainer), d.peek_front());
        assert_eq!(Err(Error::EmptyContainer), d.peek_back());
        assert_eq!(Err(Error::EmptyContainer), d.pop_front());
        assert_eq!(Err(Error::EmptyContainer), d.pop_back());
    }

    #[test]
    fn absent_items_are_refused_without_mutation() {
        let mut d: Deque<u8> = Deque::new();
        d.push_back(1);

        assert_eq!(Err(Error::InvalidArgument), d.try_push_front(None));
        assert_eq!(Err(Error::InvalidArgument), d.try_push_back(None));
        assert_eq!(1, d.len());
        assert_eq!(0, d.len_freelist());

        assert_eq!(Ok(()), d.try_push_back(Some(2)));
        assert_eq!(vec![&1, &2], d.iter().collect::<Vec<&u8>>());
    }

    #[test]
    fn can_be_created_from_iterator() {
        let mut d: Deque<i32> = (0..5).collect();

        for expected in 0..5 {
            assert_eq!(Ok(expected), d.pop_front());
        }
        assert!(d.is_empty());
    }

    #[test]
    fn with_capacity_preallocates_free_list() {
        let mut d = Deque::with_capacity(3);
        assert_eq!(3, d.len_freelist());
        assert_eq!(0, d.len());

        d.push_front(());
        assert_eq!(2, d.len_freelist());
        assert_eq!(1, d.len());

        d.push_front(());
        d.push_front(());
        d.push_front(());

        assert_eq!(0, d.len_freelist());
        assert_eq!(4, d.len());
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut d: Deque<u8> = (0..3).collect();
        d.pop_front().unwrap();
        d.pop_back().unwrap();
        d.push_back(7);
        d.push_front(8);

        assert_eq!(3, d.slots.len());
        assert_eq!(vec![&8, &1, &7], d.iter().collect::<Vec<&u8>>());
    }

    #[test]
    fn debug_string() {
        let d: Deque<u8> = (1..4).collect();

        assert_eq!("[1, 2, 3]", format!("{:?}", d));
    }

    #[test]
    fn display_string() {
        let mut d: Deque<char> = Deque::new();
        assert_eq!("[]", d.to_string());

        d.push_back('b');
        assert_eq!("[b]", d.to_string());

        d.push_front('a');
        d.push_back('c');
        assert_eq!("[a, b, c]", d.to_string());
    }
}
