pub(crate) struct Free {
    // The next free slot.
    next: usize,
}

impl Free {
    pub(crate) fn next(&self) -> usize {
        self.next
    }
}

pub(crate) struct Used<T> {
    // The index of the node nearer the front. MAX at the front.
    prev: usize,
    // The index of the node nearer the back. MAX at the back.
    next: usize,
    item: T,
}

impl<T> Used<T> {
    pub(crate) fn prev(&self) -> usize {
        self.prev
    }

    pub(crate) fn set_prev(&mut self, prev: usize) {
        self.prev = prev;
    }

    pub(crate) fn next(&self) -> usize {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: usize) {
        self.next = next;
    }

    pub(crate) fn item(&self) -> &T {
        &self.item
    }

    /// Consumes the node, dropping both of its links.
    pub(crate) fn take(self) -> (usize, T, usize) {
        let Used { prev, item, next } = self;
        (prev, item, next)
    }
}

/// A cell of the deque's arena. Nodes refer to each other by index
/// so that the back-links never own anything.
pub(crate) enum Slot<T> {
    Free(Free),
    Used(Used<T>),
}

impl<T> Slot<T> {
    pub(crate) fn new_free(next: usize) -> Slot<T> {
        Slot::Free(Free { next })
    }

    pub(crate) fn new_used(prev: usize, next: usize, item: T) -> Slot<T> {
        Slot::Used(Used { prev, next, item })
    }

    pub(crate) fn get_used(&self) -> Option<&Used<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }

    pub(crate) fn get_used_mut(&mut self) -> Option<&mut Used<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }

    pub(crate) fn get_free(&self) -> Option<&Free> {
        if let Slot::Free(free) = self {
            Some(free)
        } else {
            None
        }
    }

    pub(crate) fn into_used(self) -> Option<Used<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }
}
