//! `LinkedStack<T>`: the same LIFO contract over singly linked nodes.
//!
//! The head node is the top of the stack, so push and pop are O(1) while
//! indexed access through [`Container::at`] walks the list.

use std::fmt;
use std::iter::FromIterator;

use crate::container::{Container, EquatableContainer};
use crate::error::ContainerError;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

pub struct LinkedStack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        LinkedStack { head: None, len: 0 }
    }

    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    pub fn top(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates top to bottom (pop order), the natural order of the links.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlinks iteratively so long stacks do not recurse through Box drops.
impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = LinkedStack::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        let mut values: Vec<T> = self.iter().cloned().collect();
        values.reverse();
        values.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

// Rendered bottom to top to match `Stack`'s Debug output.
impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<&T> = self.iter().collect();
        f.debug_list().entries(values.iter().rev()).finish()
    }
}

impl<T> Container for LinkedStack<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.len
    }

    fn at(&self, index: usize) -> Result<&T, ContainerError> {
        if index >= self.len {
            return Err(ContainerError::out_of_bounds(index, self.len));
        }
        self.iter()
            .nth(self.len - 1 - index)
            .ok_or(ContainerError::out_of_bounds(index, self.len))
    }
}

impl<T: PartialEq> EquatableContainer for LinkedStack<T> {
    // Single walk; the bottom-most match is the first in insertion order.
    fn index_of(&self, item: &T) -> Option<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, candidate)| *candidate == item)
            .last()
            .map(|(from_top, _)| self.len - 1 - from_top)
    }
}
