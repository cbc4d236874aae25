//! Min-ordered working set used by the priority-driven algorithms.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<P, T> {
    priority: P,
    seq: u64,
    item: T,
}

impl<P: PartialOrd, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: PartialOrd, T> Eq for Entry<P, T> {}

impl<P: PartialOrd, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: PartialOrd, T> Ord for Entry<P, T> {
    // Reversed so that the max-heap pops the smallest priority, then the oldest entry.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue popping the entry with the smallest priority first.
///
/// Entries with equal priority come out in insertion order, which makes every algorithm built
/// on it deterministic. There is no decrease-key: callers push a fresh entry and discard stale
/// ones when they are popped.
pub struct Frontier<P, T> {
    heap: BinaryHeap<Entry<P, T>>,
    next_seq: u64,
}

impl<P: PartialOrd, T> Default for Frontier<P, T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<P: PartialOrd, T> Frontier<P, T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item with the given priority.
    pub fn push(&mut self, priority: P, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { priority, seq, item });
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn pop(&mut self) -> Option<(P, T)> {
        self.heap.pop().map(|entry| (entry.priority, entry.item))
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the frontier holds no entry.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
