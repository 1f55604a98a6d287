//! A min-priority queue built on a binary heap.
//!
//! Payloads of any type are queued under an `i32` priority. The payload with
//! the lowest priority value is always available in O(1) through
//! `PriorityQueue::first`, and `PriorityQueue::remove_first` takes it out in
//! O(log n). The heap lives in a `DynArray`, a growable array addressed by index.

pub mod dyn_array;
pub mod error;
pub mod priority_queue;

#[cfg(test)]
mod testing;

pub use crate::dyn_array::DynArray;
pub use crate::error::Error;
pub use crate::priority_queue::{DrainSorted, Entry, PriorityQueue, INITIAL_CAPACITY};
