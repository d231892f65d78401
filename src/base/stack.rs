// Copyright (c) 2024, Bracket Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Generic stack implementation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Error, Result};

/// A generic last-in-first-out stack implemented using a Vec.
///
/// The top of the stack is the last element of the underlying Vec, so
/// [`iter`](Stack::iter), the serialized form and the [`Display`](fmt::Display)
/// rendering all list items bottom-to-top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a new stack with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes an item onto the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        tracing::trace!(len = self.items.len(), "push");
    }

    /// Pushes multiple items onto the stack. The last item yielded ends up on top.
    pub fn push_many(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
        tracing::trace!(len = self.items.len(), "push_many");
    }

    /// Pops the top item off the stack.
    ///
    /// Returns [`Error::EmptyStack`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        match self.items.pop() {
            Some(item) => {
                tracing::trace!(len = self.items.len(), "pop");
                Ok(item)
            }
            None => {
                tracing::debug!("pop on empty stack");
                Err(Error::EmptyStack)
            }
        }
    }

    /// Returns a reference to the top item on the stack without removing it.
    /// Returns `None` if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a mutable reference to the top item on the stack without removing it.
    /// Returns `None` if the stack is empty.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Returns the number of items in the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears the stack, removing all items.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::trace!("clear");
    }

    /// Returns an iterator over the items from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_many(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.push_many(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders as `Stack([bottom, ..., top])`.
impl<T: fmt::Debug> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack({:?})", self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_operations() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());

        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Some(&3));

        assert_eq!(stack.pop().unwrap(), 3);
        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.pop().unwrap(), 1);
        assert!(matches!(stack.pop(), Err(Error::EmptyStack)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_leaves_stack_empty() {
        let mut stack: Stack<f64> = Stack::new();
        assert!(matches!(stack.pop(), Err(Error::EmptyStack)));
        assert!(matches!(stack.pop(), Err(Error::EmptyStack)));
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut stack = Stack::with_capacity(4);
        assert_eq!(stack.peek(), None);
        stack.push("a");
        stack.push("b");
        for _ in 0..3 {
            assert_eq!(stack.peek(), Some(&"b"));
        }
        assert_eq!(stack.len(), 2);

        if let Some(top) = stack.peek_mut() {
            *top = "c";
        }
        assert_eq!(stack.pop().unwrap(), "c");
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut stack: Stack<i32> = (0..5).collect();
        assert_eq!(stack.len(), 5);
        assert_eq!(stack.peek(), Some(&4));

        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.to_string(), "Stack([])");

        stack.push(7);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_push_many_order() {
        let mut stack = Stack::new();
        stack.push_many(["Hello", "World"]);
        stack.extend(["Python", "Stack"]);

        let drained: Vec<_> = std::iter::from_fn(|| stack.pop().ok()).collect();
        assert_eq!(drained, ["Stack", "Python", "World", "Hello"]);
    }

    #[test]
    fn test_display_is_bottom_to_top() {
        let mut stack = Stack::new();
        assert_eq!(stack.to_string(), "Stack([])");
        for i in 1..=3 {
            stack.push(i * 10);
        }
        assert_eq!(stack.to_string(), "Stack([10, 20, 30])");
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);

        let words: Stack<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(format!("{words}"), r#"Stack(["a", "b"])"#);
    }
}
