//! FIFO queue simulator.

use std::collections::VecDeque;

use super::EmptyError;

/// A strict first-in-first-out queue: enqueue at the rear, dequeue at the
/// front, nothing else.
#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append to the rear; always succeeds
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove and return the front, or report the empty condition leaving
    /// the queue unchanged
    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        self.items.pop_front().ok_or(EmptyError("queue"))
    }

    /// Look at the front without removing it
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.items.front().ok_or(EmptyError("queue"))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clear to empty
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Snapshot for rendering, front first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
