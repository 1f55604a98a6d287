use crate::dyn_array::DynArray;
use crate::error::Error;
use core::fmt::{Debug, Formatter};
use core::iter::FromIterator;
use log::{debug, trace};

/// Number of entries the backing array is allocated for by `PriorityQueue::new`.
pub const INITIAL_CAPACITY: usize = 16;

fn left(parent: usize) -> usize { parent * 2 + 1 }
fn right(parent: usize) -> usize { parent * 2 + 2 }
fn parent(child: usize) -> usize { (child - 1) / 2 }

/// One queued item: a payload and the priority it was inserted with.
#[derive(Clone, Debug)]
pub struct Entry<T> {
    priority: i32,
    payload: T,
}

impl<T> Entry<T> {
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }
}

/// A min-priority queue, stored as a binary heap in a `DynArray`.
///
/// The entry with the lowest priority value is always at index 0. For every
/// entry at index `i`, the entries at `2i + 1` and `2i + 2` (if present) have
/// a priority greater than or equal to it.
///
/// The queue never inspects payloads; any `T` works, including borrowed
/// references and ids whose lifetime is managed elsewhere. Equal priorities
/// are allowed, and the order in which equal-priority payloads come out is
/// determined only by the heap layout.
///
/// `first`, `first_priority` and `remove_first` panic on an empty queue. Use
/// `is_empty` first, or the `try_` variants, which return `Error::Empty`.
pub struct PriorityQueue<T> {
    heap: DynArray<Entry<T>>,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: DynArray::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.size()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.size() == 0
    }

    /// Adds `payload` to the queue with the given priority. Lower values come
    /// out first. Any `i32` is allowed, including negative values and values
    /// already present in the queue.
    pub fn insert(&mut self, payload: T, priority: i32) {
        self.heap.append(Entry { priority, payload });
        self.percolate_up(self.heap.size() - 1);
        self.check();
    }

    /// Walks from `index` to the root, swapping each child above its parent
    /// whenever the child has the strictly lower priority.
    fn percolate_up(&mut self, mut index: usize) {
        while index != 0 {
            let parent = parent(index);
            assert_ne!(parent, index);
            let child_priority = self.heap.get(index).priority;
            let parent_priority = self.heap.get(parent).priority;
            if child_priority < parent_priority {
                trace!(
                    "percolate up: [{}] p={} <-> [{}] p={}",
                    index,
                    child_priority,
                    parent,
                    parent_priority
                );
                self.heap.swap(index, parent);
            }
            index = parent;
        }
    }

    /// Moves the entry at `index` toward the leaves until neither child has a
    /// strictly lower priority. When both children have the same priority,
    /// the left child is the one that gets swapped up.
    fn percolate_down(&mut self, mut index: usize) {
        let size = self.heap.size();
        loop {
            let left = left(index);
            let right = right(index);
            let min_child = match (left < size, right < size) {
                (false, false) => break,
                (true, false) => left,
                (false, true) => right,
                (true, true) => {
                    if self.heap.get(right).priority < self.heap.get(left).priority {
                        right
                    } else {
                        left
                    }
                }
            };
            let index_priority = self.heap.get(index).priority;
            let child_priority = self.heap.get(min_child).priority;
            if child_priority >= index_priority {
                break;
            }
            trace!(
                "percolate down: [{}] p={} <-> [{}] p={}",
                index,
                index_priority,
                min_child,
                child_priority
            );
            self.heap.swap(index, min_child);
            index = min_child;
        }
    }

    /// Verifies the heap order. Only does any work in debug builds.
    fn check(&self) {
        if cfg!(debug_assertions) {
            for i in 1..self.heap.size() {
                assert!(
                    self.heap.get(parent(i)).priority <= self.heap.get(i).priority,
                    "heap order violated at index {}",
                    i
                );
            }
        }
    }

    pub fn try_first(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(&self.heap.get(0).payload)
    }

    /// Returns the payload with the lowest priority, without removing it.
    ///
    /// Panics if the queue is empty.
    pub fn first(&self) -> &T {
        match self.try_first() {
            Ok(payload) => payload,
            Err(e) => panic!("first: {}", e),
        }
    }

    pub fn try_first_priority(&self) -> Result<i32, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(self.heap.get(0).priority)
    }

    /// Returns the lowest priority in the queue. Panics if the queue is empty.
    pub fn first_priority(&self) -> i32 {
        match self.try_first_priority() {
            Ok(priority) => priority,
            Err(e) => panic!("first_priority: {}", e),
        }
    }

    fn remove_first_entry(&mut self) -> Option<Entry<T>> {
        // The last entry takes the root's place; the old root is handed back.
        let last = self.heap.remove_last()?;
        if self.heap.is_empty() {
            return Some(last);
        }
        let root = self.heap.set(0, last);
        self.percolate_down(0);
        self.check();
        Some(root)
    }

    pub fn try_remove_first(&mut self) -> Result<T, Error> {
        match self.remove_first_entry() {
            Some(entry) => Ok(entry.payload),
            None => Err(Error::Empty),
        }
    }

    /// Removes the entry with the lowest priority and returns its payload.
    ///
    /// Panics if the queue is empty.
    pub fn remove_first(&mut self) -> T {
        match self.try_remove_first() {
            Ok(payload) => payload,
            Err(e) => panic!("remove_first: {}", e),
        }
    }

    /// Drops every entry. No heap maintenance is needed, since the result is empty.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Tears the queue down by removing entries one at a time until it is
    /// empty, then releases the backing array.
    ///
    /// Payloads are handed back to `T`'s own drop; for handle-like payloads
    /// (references, ids) the underlying objects are untouched.
    pub fn destroy(mut self) {
        let mut released: usize = 0;
        while !self.is_empty() {
            self.remove_first();
            released += 1;
        }
        debug!("priority queue destroyed, released {} entries", released);
    }

    /// Removes entries in ascending priority order, yielding `(priority, payload)`.
    ///
    /// Entries not consumed by the iterator stay in the queue.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { queue: self }
    }

    /// Consumes the queue, returning its payloads in ascending priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        sorted.extend(self.drain_sorted().map(|(_, payload)| payload));
        sorted
    }

    /// Iterates the entries in heap-array order (not sorted).
    pub fn entries(&self) -> core::slice::Iter<'_, Entry<T>> {
        self.heap.iter()
    }
}

pub struct DrainSorted<'a, T> {
    queue: &'a mut PriorityQueue<T>,
}

impl<'a, T> Iterator for DrainSorted<'a, T> {
    type Item = (i32, T);
    fn next(&mut self) -> Option<Self::Item> {
        self.queue
            .remove_first_entry()
            .map(|entry| (entry.priority, entry.payload))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(T, i32)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, i32)>>(&mut self, iter: I) {
        for (payload, priority) in iter {
            self.insert(payload, priority);
        }
    }
}

impl<T> FromIterator<(T, i32)> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, i32)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Debug> Debug for PriorityQueue<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q: ")?;
        for entry in self.heap.iter() {
            write!(fmt, "{}:{:?} ", entry.priority, entry.payload)?;
        }
        Ok(())
    }
}
