use crate::error::{Error, Result};
use crate::iterators::Shuffled;
use crate::random::RandomSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::iter::FromIterator;
use tracing::trace;

// The capacity a new queue starts with, and the floor it never shrinks below.
const MIN_CAPACITY: usize = 2;

/// A queue whose removals and samples pick an item uniformly at
/// random.
///
/// Items are kept densely packed in a resizing array. The array
/// doubles when full and halves when only a quarter of it is in use,
/// so `enqueue` and `dequeue` are amortized O(1).
pub struct RandomQueue<T, R = StdRng> {
    // Live items occupy the whole vector; their order carries no meaning.
    items: Vec<T>,
    // The logical capacity of the backing array.
    cap: usize,
    rng: R,
}

impl<T> RandomQueue<T> {
    /// Creates an empty queue drawing from an entropy-seeded `StdRng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::RandomQueue;
    ///
    /// let q: RandomQueue<u32> = RandomQueue::new();
    /// assert!(q.is_empty());
    /// assert_eq!(2, q.capacity());
    /// ```
    pub fn new() -> RandomQueue<T> {
        RandomQueue::with_rng(StdRng::from_entropy())
    }
}

impl<T> Default for RandomQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> RandomQueue<T, R>
where
    R: RandomSource,
{
    /// Creates an empty queue drawing from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use random_queues::RandomQueue;
    ///
    /// let mut q = RandomQueue::with_rng(StdRng::seed_from_u64(42));
    /// q.enqueue("only");
    /// assert_eq!(Ok(&"only"), q.sample());
    /// ```
    pub fn with_rng(rng: R) -> RandomQueue<T, R> {
        RandomQueue {
            items: Vec::with_capacity(MIN_CAPACITY),
            cap: MIN_CAPACITY,
            rng,
        }
    }

    /// The number of items in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of slots in the backing array. Never less than two,
    /// and never more than four times `len()` while the queue holds
    /// anything.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Adds `item` to the queue, doubling the backing array first if
    /// it is full.
    pub fn enqueue(&mut self, item: T) {
        if self.items.len() == self.cap {
            self.resize(2 * self.cap);
        }
        self.items.push(item);
    }

    /// Like [`enqueue`], but refuses `None` with
    /// [`Error::InvalidArgument`] and leaves the queue untouched.
    ///
    /// [`enqueue`]: struct.RandomQueue.html#method.enqueue
    /// [`Error::InvalidArgument`]: enum.Error.html#variant.InvalidArgument
    pub fn try_enqueue(&mut self, item: Option<T>) -> Result<()> {
        let item = item.ok_or(Error::InvalidArgument)?;
        self.enqueue(item);
        Ok(())
    }

    /// A uniformly chosen item, left in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::{Error, RandomQueue};
    ///
    /// let mut q = RandomQueue::new();
    /// assert_eq!(Err(Error::EmptyContainer), q.sample());
    ///
    /// q.enqueue(1);
    /// q.enqueue(2);
    /// let s = *q.sample().unwrap();
    /// assert!(s == 1 || s == 2);
    /// assert_eq!(2, q.len());
    /// ```
    pub fn sample(&mut self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let r = self.rng.uniform(self.items.len());
        Ok(&self.items[r])
    }

    /// Removes and returns a uniformly chosen item. The last item is
    /// moved into the vacated slot, and the backing array is halved
    /// once it is only a quarter full.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::{Error, RandomQueue};
    ///
    /// let mut q = RandomQueue::new();
    /// q.enqueue('a');
    /// q.enqueue('b');
    ///
    /// let mut out = vec![q.dequeue().unwrap(), q.dequeue().unwrap()];
    /// out.sort();
    /// assert_eq!(vec!['a', 'b'], out);
    /// assert_eq!(Err(Error::EmptyContainer), q.dequeue());
    /// ```
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let r = self.rng.uniform(self.items.len());
        let item = self.items.swap_remove(r);

        let len = self.items.len();
        if len > 0 && len == self.cap / 4 {
            self.resize(self.cap / 2);
        }
        Ok(item)
    }

    /// An iterator over a shuffled copy of the current items. The copy
    /// is taken now, so later changes to the queue do not reach it,
    /// and each call shuffles independently.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_queues::RandomQueue;
    ///
    /// let mut q: RandomQueue<u8> = (1..=3).collect();
    /// let mut seen: Vec<u8> = q.iter().collect();
    /// seen.sort();
    /// assert_eq!(vec![1, 2, 3], seen);
    /// ```
    pub fn iter(&mut self) -> Shuffled<T>
    where
        T: Clone,
    {
        let mut snapshot = self.items.clone();
        self.rng.shuffle(&mut snapshot);
        Shuffled::new(snapshot)
    }

    fn resize(&mut self, cap: usize) {
        debug_assert!(cap >= MIN_CAPACITY);
        debug_assert!(cap >= self.items.len());
        trace!(
            from = self.cap,
            to = cap,
            len = self.items.len(),
            "resizing random queue"
        );

        let mut fresh = Vec::with_capacity(cap);
        fresh.extend(self.items.drain(..));
        self.items = fresh;
        self.cap = cap;
    }
}

impl<T, R> fmt::Debug for RandomQueue<T, R>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<T> for RandomQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

impl<T, R> Extend<T> for RandomQueue<T, R>
where
    R: RandomSource,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.enqueue(i);
        }
    }
}

impl<T, R> IntoIterator for RandomQueue<T, R>
where
    R: RandomSource,
{
    type Item = T;
    type IntoIter = Shuffled<T>;

    /// Yields the owned items in a fresh random order.
    fn into_iter(mut self) -> Shuffled<T> {
        self.rng.shuffle(&mut self.items);
        Shuffled::new(self.items)
    }
}
