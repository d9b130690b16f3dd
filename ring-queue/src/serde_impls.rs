//! Serde support for [`RingQueue`].
//!
//! The serialized form is the head-to-tail element sequence only. Physical
//! layout (capacity, head position, wrap state) is an implementation detail
//! and never leaks into the encoding; deserialization rebuilds the queue
//! with ordinary pushes, so a restored queue starts compact.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::queue::RingQueue;

impl<T: Serialize> Serialize for RingQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for elem in self {
            seq.serialize_element(elem)?;
        }
        seq.end()
    }
}

struct RingQueueVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for RingQueueVisitor<T> {
    type Value = RingQueue<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of queue elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut queue = RingQueue::new();
        while let Some(elem) = seq.next_element()? {
            queue.push(elem);
        }
        Ok(queue)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RingQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RingQueueVisitor(PhantomData))
    }
}
