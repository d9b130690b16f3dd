//! A fast, dynamically resizable FIFO queue backed by a circular buffer.
//!
//! [`RingQueue`] supports amortized O(1) push-at-tail, pop-from-head,
//! peek-at-head, and O(1) random positional access without ever shifting
//! elements. Compared to a naively reallocated growable array or a linked
//! list, the ring layout moves data only on capacity changes, and the
//! grow/shrink policy keeps the load factor between 25% and 100%.
//!
//! The queue is deliberately *not* thread-safe: all mutation goes through
//! `&mut self`, and sharing across threads requires caller-supplied
//! synchronization.

mod queue;
mod serde_impls;

pub use queue::{Iter, RingQueue, RingQueueError, MIN_CAPACITY};
