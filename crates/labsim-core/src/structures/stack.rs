//! LIFO stack simulator.

use super::EmptyError;

/// A strict last-in-first-out stack. No random access: the only ways in
/// and out are the top.
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append to the top; always succeeds
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the top, or report the empty condition leaving
    /// the stack unchanged
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.items.pop().ok_or(EmptyError("stack"))
    }

    /// Look at the top without removing it
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.items.last().ok_or(EmptyError("stack"))
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

    /// Snapshot for rendering, bottom first
    pub fn items(&self) -> &[T] {
        &self.items
    }
}
