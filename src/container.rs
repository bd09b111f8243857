//! Capability Contract: the minimal shape of an appendable, countable,
//! indexable container.
//!
//! Callers that only need these three operations should bound on
//! [`Container`] rather than naming a concrete type, so any representation
//! (array-backed, linked, a plain `Vec`) can be passed in.

use crate::error::ContainerError;

// =============================================================================
// Contract
// =============================================================================

/// A sequential container parameterised by its element type.
///
/// Every conforming type upholds: after `append`, `count` grows by exactly one
/// and `at(count - 1)` yields the appended item.
pub trait Container {
    /// Element type, fixed by each conforming type.
    type Item;

    fn append(&mut self, item: Self::Item);

    fn count(&self) -> usize;

    /// Returns the element at `index`, counted from the first appended item.
    ///
    /// Fails with [`ContainerError::IndexOutOfBounds`] unless `index < count()`.
    fn at(&self, index: usize) -> Result<&Self::Item, ContainerError>;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// The stricter contract: conforming types promise `Item: PartialEq`.
///
/// Conformance is declared per type and checked where it is declared, so an
/// element type without equality is rejected by the compiler, not at use:
///
/// ```compile_fail
/// use generic_stack::{Container, ContainerError, EquatableContainer};
///
/// struct Opaque;
/// struct Bag(Vec<Opaque>);
///
/// impl Container for Bag {
///     type Item = Opaque;
///     fn append(&mut self, item: Opaque) { self.0.push(item) }
///     fn count(&self) -> usize { self.0.len() }
///     fn at(&self, index: usize) -> Result<&Opaque, ContainerError> {
///         self.0.get(index).ok_or(ContainerError::out_of_bounds(index, self.0.len()))
///     }
/// }
///
/// impl EquatableContainer for Bag {}
/// ```
///
/// ```
/// use generic_stack::{EquatableContainer, Stack};
///
/// let names: Stack<&str> = ["cat", "dog", "llama"].into_iter().collect();
/// assert!(names.contains(&"dog"));
/// assert_eq!(names.index_of(&"llama"), Some(2));
/// ```
pub trait EquatableContainer: Container<Item: PartialEq> {
    fn contains(&self, item: &Self::Item) -> bool {
        self.index_of(item).is_some()
    }

    /// Index of the first element equal to `item`, in insertion order.
    fn index_of(&self, item: &Self::Item) -> Option<usize> {
        (0..self.count()).find(|&index| matches!(self.at(index), Ok(candidate) if candidate == item))
    }
}

// =============================================================================
// Conformance for Vec<T>
// =============================================================================

// Vec's inherent `append(&mut Vec<T>)` shadows the contract method on concrete
// receivers; call it as `Container::append(&mut v, x)` outside generic code.
impl<T> Container for Vec<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Result<&T, ContainerError> {
        self.get(index)
            .ok_or(ContainerError::out_of_bounds(index, self.len()))
    }
}

impl<T: PartialEq> EquatableContainer for Vec<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    // A container that keeps only the running total next to its items, to show
    // that conformance does not depend on any shared base type.
    struct Ledger {
        entries: Vec<i64>,
        total: i64,
    }

    impl Ledger {
        fn new() -> Self {
            Ledger {
                entries: Vec::new(),
                total: 0,
            }
        }
    }

    impl Container for Ledger {
        type Item = i64;

        fn append(&mut self, item: i64) {
            self.total += item;
            self.entries.push(item);
        }

        fn count(&self) -> usize {
            self.entries.len()
        }

        fn at(&self, index: usize) -> Result<&i64, ContainerError> {
            self.entries
                .get(index)
                .ok_or(ContainerError::out_of_bounds(index, self.entries.len()))
        }
    }

    impl EquatableContainer for Ledger {}

    fn append_all<C: Container>(container: &mut C, items: Vec<C::Item>) {
        for item in items {
            container.append(item);
        }
    }

    #[test]
    fn test_append_grows_count_and_sets_last() {
        let mut v: Vec<&str> = Vec::new();
        Container::append(&mut v, "um");
        assert_eq!(v.count(), 1);
        Container::append(&mut v, "dois");
        assert_eq!(v.count(), 2);
        assert_eq!(v.at(v.count() - 1), Ok(&"dois"));
    }

    #[test]
    fn test_at_out_of_bounds_is_reported() {
        let v = vec![10, 20, 30];
        assert_eq!(v.at(2), Ok(&30));
        assert_eq!(
            v.at(3),
            Err(ContainerError::IndexOutOfBounds { index: 3, count: 3 })
        );

        let empty: Vec<u8> = Vec::new();
        assert!(Container::is_empty(&empty));
        assert_eq!(
            empty.at(0),
            Err(ContainerError::IndexOutOfBounds { index: 0, count: 0 })
        );
    }

    #[test]
    fn test_custom_type_conforms() {
        let mut ledger = Ledger::new();
        append_all(&mut ledger, vec![5, -2, 7]);

        assert_eq!(ledger.count(), 3);
        assert_eq!(ledger.total, 10);
        assert_eq!(ledger.at(1), Ok(&-2));
        assert!(ledger.contains(&7));
        assert_eq!(ledger.index_of(&9), None);
    }

    #[test]
    fn test_index_of_returns_first_match() {
        let v = vec!['a', 'b', 'a', 'c'];
        assert_eq!(EquatableContainer::index_of(&v, &'a'), Some(0));
        assert_eq!(EquatableContainer::index_of(&v, &'c'), Some(3));
        assert!(!EquatableContainer::contains(&v, &'z'));
    }
}
