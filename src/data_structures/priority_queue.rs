use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// An item paired with its priority. Ordered by priority alone, so items
/// themselves need no ordering and equal priorities tie.
#[derive(Debug)]
struct Prioritized<T, P> {
    priority: P,
    item: T,
}

impl<T, P: Ord> PartialEq for Prioritized<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<T, P: Ord> Eq for Prioritized<T, P> {}

impl<T, P: Ord> PartialOrd for Prioritized<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Prioritized<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// A min-priority queue for shortest path algorithms.
///
/// Items are extracted in ascending priority order: item A comes out before
/// item B iff A's priority is strictly less. The order among equal priorities
/// is unspecified. There is no capacity limit, no duplicate detection and no
/// decrease-key; an item whose priority improves is simply inserted again.
#[derive(Debug)]
pub struct PriorityQueue<T, P>
where
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<Prioritized<T, P>>>,
}

impl<T, P> PriorityQueue<T, P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts an item with the given priority
    pub fn insert(&mut self, item: T, priority: P) {
        self.heap.push(Reverse(Prioritized { priority, item }));
    }

    /// Removes and returns the item with the smallest priority
    pub fn extract_min(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    /// Returns the item with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&T, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.item, entry.priority))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
