//! `Shared<T>`: an explicit reference-semantics element handle.
//!
//! Cloning a `Shared` hands out another handle to the same cell, so a
//! mutation through any handle is visible through all of them. It is built on
//! `Rc<RefCell<T>>` and is therefore neither `Send` nor `Sync`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::duplicate::Duplicate;

pub struct Shared<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Shared {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Runs `f` with a shared borrow of the value.
    ///
    /// # Panics
    /// Panics if the value is currently borrowed mutably through another handle.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.inner.borrow())
    }

    /// Runs `f` with a mutable borrow of the value.
    ///
    /// # Panics
    /// Panics if the value is currently borrowed through another handle.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.inner.borrow_mut())
    }

    /// Replaces the value, returning the previous one.
    pub fn set(&self, value: T) -> T {
        self.inner.replace(value)
    }

    /// Whether both handles point at the same cell.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// Number of live handles to this cell.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<T: Clone> Shared<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared {
            inner: Rc::clone(&self.inner),
        }
    }
}

// Breaks the aliasing: the duplicate lives in a fresh cell.
impl<T: Clone> Duplicate for Shared<T> {
    fn duplicate(&self) -> Self {
        Shared::new(self.get())
    }
}

impl<T: PartialEq> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Shared::ptr_eq(self, other) || *self.inner.borrow() == *other.inner.borrow()
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&self.inner.borrow()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.borrow(), f)
    }
}
