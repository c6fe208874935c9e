use std::fmt;
use std::sync::{Arc, Mutex};

use crate::core::error::QueueError;
use crate::core::stack::Stack;

/// FIFO queue built from two stacks.
///
/// `incoming` holds newly enqueued items with the newest on top. `outgoing`
/// holds items in dequeue order with the oldest on top. Items only travel
/// from `incoming` to `outgoing`, and only when `outgoing` has run dry, so
/// each item is moved at most once.
#[derive(Clone)]
pub struct TwoStackQueue<T> {
    incoming: Stack<T>,
    outgoing: Stack<T>,
    moves: u64,
}

impl<T> TwoStackQueue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self {
            incoming: Stack::new(),
            outgoing: Stack::new(),
            moves: 0,
        }
    }

    /// Enqueue an item
    pub fn enqueue(&mut self, item: T) {
        let len_before = self.len();
        self.incoming.push(item);
        // --post operation assertion
        assert_eq!(self.len(), len_before + 1, "Queue length should increase by 1");
    }

    /// Borrow the oldest item without removing it
    pub fn peek(&mut self) -> Result<&T, QueueError> {
        self.rebalance();
        self.outgoing.top().ok_or(QueueError::EmptyQueue)
    }

    /// Remove and return the oldest item
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.rebalance();
        let len_before = self.len();
        let item = self.outgoing.pop().ok_or(QueueError::EmptyQueue)?;
        // -- post op assertion: queue size decreases on success
        assert_eq!(self.len(), len_before - 1, "Queue length should decrease by 1");
        Ok(item)
    }

    // Reverse `incoming` onto `outgoing`, but only once `outgoing` is drained.
    // Items already in `outgoing` are in dequeue order and must stay put.
    fn rebalance(&mut self) {
        if !self.outgoing.is_empty() || self.incoming.is_empty() {
            return;
        }

        let count = self.incoming.len();
        while let Some(item) = self.incoming.pop() {
            self.outgoing.push(item);
        }
        self.moves += count as u64;
        log::trace!("rebalanced {count} items into outgoing stack");

        // --- Negative-space assertion: everything moved ---
        debug_assert!(self.incoming.is_empty());
        debug_assert_eq!(self.outgoing.len(), count);
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty() && self.outgoing.is_empty()
    }

    /// Total number of items ever moved from `incoming` to `outgoing`.
    /// Never exceeds the number of enqueues.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Drop every item. The move counter is kept.
    pub fn clear(&mut self) {
        self.incoming.clear();
        self.outgoing.clear();
    }

    /// Items from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.outgoing
            .iter_from_top()
            .chain(self.incoming.iter_from_top().rev())
    }
}

impl<T> Default for TwoStackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for TwoStackQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for TwoStackQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for TwoStackQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Thread-safe wrapper around the queue. Both stacks sit behind one lock.
pub type SafeQueue<T> = Arc<Mutex<TwoStackQueue<T>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_rebalance_twice() {
        let mut queue = TwoStackQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.moves(), 2);

        // `outgoing` is not empty, so a new item stays in `incoming`
        queue.enqueue(3);
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.moves(), 2);
        assert_eq!(queue.incoming.len(), 1);
        assert_eq!(queue.outgoing.len(), 2);
    }

    #[test]
    fn iter_spans_both_stacks() {
        let mut queue: TwoStackQueue<_> = (1..=3).collect();
        queue.dequeue().unwrap();
        queue.extend([4, 5]);
        let items: Vec<_> = queue.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4, 5]);
        assert_eq!(format!("{queue:?}"), "[2, 3, 4, 5]");
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut queue: TwoStackQueue<_> = (0..5).collect();
        queue.peek().unwrap();
        queue.enqueue(9);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
    }
}
