//! `Stack<T>`: an array-backed LIFO container with value semantics.
//!
//! The backing vector is private and only ever modified at its tail, so the
//! push/pop discipline cannot be bypassed.

use std::fmt::{self, Display};
use std::iter::FromIterator;
use std::ops::Index;

use itertools::Itertools;

use crate::container::{Container, EquatableContainer};
use crate::error::ContainerError;

// =============================================================================
// Core LIFO API
// =============================================================================

/// Generic last-in-first-out stack.
///
/// `clone()` produces a fully independent stack when `T` has value
/// semantics; wrap elements in [`Shared`](crate::Shared) to share them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the top element; `None` when the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The top element without removing it; `None` when the stack is empty.
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Iterates bottom to top, the order [`Container::at`] indexes in.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the stack, returning its elements bottom to top.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// The last element of the vector becomes the top of the stack.
impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Stack { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Draining iterator that yields elements in pop order (top first).
pub struct IntoIter<T> {
    stack: Stack<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.stack.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Capability Contract conformance
// =============================================================================

impl<T> Container for Stack<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Result<&T, ContainerError> {
        self.items
            .get(index)
            .ok_or(ContainerError::out_of_bounds(index, self.items.len()))
    }
}

impl<T: PartialEq> EquatableContainer for Stack<T> {
    fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }
}

/// Unchecked indexing: panics on a bad index. Use [`Container::at`] for the
/// checked form.
impl<T> Index<usize> for Stack<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.items.get(index) {
            Some(item) => item,
            None => panic!("{}", ContainerError::out_of_bounds(index, self.items.len())),
        }
    }
}

// Renders bottom to top, e.g. `[1, 2, 3]` where 3 is the top.
impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}
