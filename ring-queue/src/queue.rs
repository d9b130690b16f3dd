//! Resizable ring-buffer FIFO queue.
//!
//! Logical position `i` (0 = head) maps to physical slot
//! `(head + i) % capacity`, so the live range stays contiguous under
//! wraparound and no element ever moves except during a resize.
//!
//! Growth doubles capacity when the buffer is full; a removal that lands
//! utilization exactly at 25% halves it. The shrink trigger is exact
//! equality, not a `<=` threshold: a queue oscillating just above and
//! below the 25% line keeps its capacity.

use std::fmt;
use std::iter;

use thiserror::Error;

/// Smallest capacity the backing buffer ever has. A queue never shrinks
/// below this, no matter how empty it gets.
pub const MIN_CAPACITY: usize = 16;

/// Errors returned on queue misuse. Both are precondition violations by the
/// caller, not transient conditions; retrying without changing the queue
/// reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingQueueError {
    /// `peek`, `pop`, or `remove` was called on an empty queue.
    #[error("operation on empty queue")]
    EmptyQueue,
    /// `get` was called with a position outside `[0, len)`.
    #[error("index {index} out of range for queue of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A FIFO queue over a circular buffer that grows and shrinks with its
/// contents.
///
/// Slots outside the live range hold `None`, so removal drops owned
/// elements immediately instead of keeping them alive until the slot is
/// overwritten by a later push.
pub struct RingQueue<T> {
    /// Backing slots; `buf.len()` is the current capacity.
    buf: Vec<Option<T>>,
    /// Physical index of the oldest live element (only meaningful when
    /// `count > 0`).
    head: usize,
    /// Physical index of the next free slot to write into.
    tail: usize,
    /// Number of live elements.
    count: usize,
}

impl<T> RingQueue<T> {
    /// Create a new empty queue with capacity [`MIN_CAPACITY`].
    pub fn new() -> Self {
        Self {
            buf: iter::repeat_with(|| None).take(MIN_CAPACITY).collect(),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Returns the number of elements currently stored in the queue.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the current physical capacity of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Reallocate the backing buffer to exactly `target` slots and compact
    /// the live elements to the front, oldest first. Handles the case where
    /// the live range wraps past the end of the old buffer.
    fn resize(&mut self, target: usize) {
        debug_assert!(self.count < target, "resize target must exceed count");
        let old_capacity = self.buf.len();
        let mut buf: Vec<Option<T>> = iter::repeat_with(|| None).take(target).collect();
        for (i, slot) in buf.iter_mut().take(self.count).enumerate() {
            *slot = self.buf[(self.head + i) % old_capacity].take();
        }
        self.head = 0;
        self.tail = self.count;
        self.buf = buf;
    }

    /// Append an element at the tail of the queue.
    ///
    /// Grows the buffer to twice its contents first if it is full, so a
    /// full queue never overflows. Amortized O(1); O(n) on a growth step.
    pub fn push(&mut self, elem: T) {
        if self.count == self.buf.len() {
            self.resize(self.count * 2);
        }
        self.buf[self.tail] = Some(elem);
        self.tail = (self.tail + 1) % self.buf.len();
        self.count += 1;
    }

    /// Returns a reference to the element at the head of the queue without
    /// removing it.
    pub fn peek(&self) -> Result<&T, RingQueueError> {
        if self.count == 0 {
            return Err(RingQueueError::EmptyQueue);
        }
        Ok(self.live_slot(self.head))
    }

    /// Returns a reference to the element at logical position `index`,
    /// where position 0 is the head.
    pub fn get(&self, index: usize) -> Result<&T, RingQueueError> {
        if index >= self.count {
            return Err(RingQueueError::IndexOutOfRange {
                index,
                len: self.count,
            });
        }
        Ok(self.live_slot((self.head + index) % self.buf.len()))
    }

    /// Remove and return the element at the head of the queue.
    ///
    /// If the removal lands utilization exactly at 25% and capacity is
    /// above [`MIN_CAPACITY`], the buffer is halved.
    pub fn pop(&mut self) -> Result<T, RingQueueError> {
        if self.count == 0 {
            return Err(RingQueueError::EmptyQueue);
        }
        let elem = match self.buf[self.head].take() {
            Some(elem) => elem,
            None => unreachable!("head slot of a non-empty queue must be live"),
        };
        self.head = (self.head + 1) % self.buf.len();
        self.count -= 1;
        if self.buf.len() > MIN_CAPACITY && self.count * 4 == self.buf.len() {
            self.resize(self.count * 2);
        }
        Ok(elem)
    }

    /// Remove the element at the head of the queue, discarding it. Call
    /// [`peek`](Self::peek) first if the element is wanted, or use
    /// [`pop`](Self::pop).
    pub fn remove(&mut self) -> Result<(), RingQueueError> {
        self.pop().map(|_| ())
    }

    /// Drop all elements and reset the queue to empty. Capacity is left
    /// unchanged; the shrink policy only runs on removal.
    pub fn clear(&mut self) {
        for slot in &mut self.buf {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Returns an iterator over the elements in order, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { queue: self, pos: 0 }
    }

    fn live_slot(&self, physical: usize) -> &T {
        match &self.buf[physical] {
            Some(elem) => elem,
            None => unreachable!("slot inside the live range must hold a value"),
        }
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T> FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Head-to-tail iterator over queue elements.
pub struct Iter<'a, T> {
    queue: &'a RingQueue<T>,
    pos: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.pos >= self.queue.count {
            return None;
        }
        let physical = (self.queue.head + self.pos) % self.queue.buf.len();
        self.pos += 1;
        Some(self.queue.live_slot(physical))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.count - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
