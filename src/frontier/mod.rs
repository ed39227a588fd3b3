//! Priority frontier backing the best-first solvers.

use std::collections::BinaryHeap;

use crate::space::Cost;

////////////////////////////////////////////////////////////////////////////////

/// Pool of prioritized items consumed in ascending priority order.
pub trait Frontier<T> {
    /// Creates the frontier holding a single item.
    fn seeded(priority: Cost, item: T) -> Self
    where
        Self: Sized;

    /// Checks the frontier has no items left.
    fn is_empty(&self) -> bool;

    /// Adds the item with the priority.
    /// The same item may be present several times under different priorities.
    fn push(&mut self, priority: Cost, item: T);

    /// Removes and returns an item with the minimal priority.
    fn pop(&mut self) -> Option<(Cost, T)>;
}

////////////////////////////////////////////////////////////////////////////////

struct Entry<T> {
    priority: Cost,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // reversed, so the std max-heap pops the minimal entry
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.priority, other.seq).cmp(&(self.priority, self.seq))
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Binary-heap frontier.
/// Items with equal priority leave in insertion order.
pub struct HeapFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Frontier<T> for HeapFrontier<T> {
    fn seeded(priority: Cost, item: T) -> Self {
        let mut frontier = Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        };
        frontier.push(priority, item);
        frontier
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn push(&mut self, priority: Cost, item: T) {
        self.heap.push(Entry {
            priority,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<(Cost, T)> {
        self.heap.pop().map(|entry| (entry.priority, entry.item))
    }
}

////////////////////////////////////////////////////////////////////////////////
