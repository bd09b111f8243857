//! Conditional Capability Extension.
//!
//! Operations attached to the stacks only when their element type satisfies
//! one or more extra capabilities. Availability is decided by trait bounds, so
//! asking for an operation the element type cannot support does not compile:
//!
//! ```compile_fail
//! use generic_stack::{CopyStack, Stack};
//!
//! struct Ticket {
//!     id: u32,
//! }
//!
//! let mut stack = Stack::new();
//! stack.push(Ticket { id: 1 });
//! let _copy = stack.copy_stack(); // Ticket is not Duplicate
//! ```
//!
//! Several capabilities at once work the same way; `f64` is [`Duplicate`] but
//! not `Ord`, so it gets `copy_stack` and not `sorted_copy`:
//!
//! ```compile_fail
//! use generic_stack::Stack;
//!
//! let stack: Stack<f64> = vec![2.0, 1.0].into();
//! let _sorted = stack.sorted_copy();
//! ```
//!
//! ```
//! use generic_stack::{CopyStack, Stack};
//!
//! let stack: Stack<f64> = vec![2.0, 1.0].into();
//! assert_eq!(stack.copy_stack(), stack);
//! ```

use tracing::trace;

use crate::duplicate::Duplicate;
use crate::linked::LinkedStack;
use crate::stack::Stack;

// =============================================================================
// One capability: Duplicate
// =============================================================================

/// Produces a new stack of the same length and order whose elements are each
/// the result of the original element's own [`Duplicate::duplicate`].
pub trait CopyStack: Sized {
    fn copy_stack(&self) -> Self;
}

impl<T: Duplicate> CopyStack for Stack<T> {
    fn copy_stack(&self) -> Self {
        trace!(elements = self.len(), "duplicating stack");
        self.iter().map(Duplicate::duplicate).collect()
    }
}

impl<T: Duplicate> CopyStack for LinkedStack<T> {
    fn copy_stack(&self) -> Self {
        trace!(elements = self.len(), "duplicating linked stack");
        let mut values: Vec<T> = self.iter().map(Duplicate::duplicate).collect();
        values.reverse();
        values.into_iter().collect()
    }
}

// Stacks of duplicable elements are themselves duplicable, so nesting works.
impl<T: Duplicate> Duplicate for Stack<T> {
    fn duplicate(&self) -> Self {
        self.copy_stack()
    }
}

impl<T: Duplicate> Duplicate for LinkedStack<T> {
    fn duplicate(&self) -> Self {
        self.copy_stack()
    }
}

// =============================================================================
// Several capabilities
// =============================================================================

impl<T: Duplicate + Ord> Stack<T> {
    /// Duplicates every element and orders them so the largest is on top.
    pub fn sorted_copy(&self) -> Stack<T> {
        let mut values: Vec<T> = self.iter().map(Duplicate::duplicate).collect();
        values.sort();
        trace!(elements = values.len(), "sorted copy");
        Stack::from(values)
    }
}

impl<T: Duplicate + PartialEq> Stack<T> {
    /// Duplicates the stack keeping only the first occurrence (from the bottom)
    /// of each element, order otherwise preserved.
    pub fn dedup_copy(&self) -> Stack<T> {
        // Compared against the originals: a duplicate need not equal its source.
        let mut seen: Vec<&T> = Vec::with_capacity(self.len());
        let mut kept: Vec<T> = Vec::with_capacity(self.len());
        for item in self.iter() {
            if !seen.contains(&item) {
                seen.push(item);
                kept.push(item.duplicate());
            }
        }
        trace!(before = self.len(), after = kept.len(), "dedup copy");
        Stack::from(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;
    use crate::shared::Shared;
    use proptest::prelude::*;

    // Records how many generations of copies led to this value.
    #[derive(Debug, PartialEq)]
    struct Page {
        title: String,
        generation: u32,
    }

    impl Page {
        fn new(title: &str) -> Self {
            Page {
                title: title.to_string(),
                generation: 0,
            }
        }
    }

    impl Duplicate for Page {
        fn duplicate(&self) -> Self {
            Page {
                title: self.title.clone(),
                generation: self.generation + 1,
            }
        }
    }

    #[test]
    fn test_copy_stack_calls_each_elements_duplicate() {
        let mut stack = Stack::new();
        stack.push(Page::new("intro"));
        stack.push(Page::new("generics"));

        let copy = stack.copy_stack();

        assert_eq!(copy.count(), 2);
        assert_eq!(copy.at(0).map(|p| p.title.as_str()), Ok("intro"));
        assert_eq!(copy.top().map(|p| p.generation), Some(1));
        assert_eq!(stack.top().map(|p| p.generation), Some(0));
    }

    #[test]
    fn test_copy_stack_preserves_lifo_order() {
        let stack: Stack<i32> = vec![1, 2, 3].into();
        let mut copy = stack.copy_stack();

        assert_eq!(copy.pop(), Some(3));
        assert_eq!(copy.pop(), Some(2));
        assert_eq!(copy.pop(), Some(1));
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_copy_stack_of_empty_stack() {
        let stack: Stack<String> = Stack::new();
        assert!(stack.copy_stack().is_empty());
    }

    #[test]
    fn test_clone_shares_handles_but_copy_stack_does_not() {
        let mut stack = Stack::new();
        stack.push(Shared::new(10));
        stack.push(Shared::new(20));

        let cloned = stack.clone();
        let copied = stack.copy_stack();

        if let Some(top) = stack.top() {
            top.set(99);
        }

        assert_eq!(cloned.top().map(Shared::get), Some(99));
        assert_eq!(copied.top().map(Shared::get), Some(20));
    }

    #[test]
    fn test_shared_element_visible_across_stacks() {
        let locker = Shared::new(String::from("laptop"));
        let mut first = Stack::new();
        let mut second = Stack::new();
        first.push(locker.clone());
        second.push(locker.clone());

        if let Some(item) = first.top() {
            item.update(|s| s.push_str(" (borrowed)"));
        }

        assert_eq!(second.top().map(Shared::get), Some("laptop (borrowed)".to_string()));
        assert_eq!(locker.get(), "laptop (borrowed)");
    }

    #[test]
    fn test_linked_copy_stack() {
        let stack: LinkedStack<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let mut copy = stack.copy_stack();
        if let Some(top) = copy.top_mut() {
            top.push('!');
        }

        assert_eq!(stack.top(), Some(&"b".to_string()));
        assert_eq!(copy.pop(), Some("b!".to_string()));
        assert_eq!(copy.pop(), Some("a".to_string()));
    }

    #[test]
    fn test_nested_stacks_duplicate() {
        let inner: Stack<u8> = vec![1, 2].into();
        let outer: Stack<Stack<u8>> = vec![inner].into();

        let mut copy = outer.copy_stack();
        if let Some(top) = copy.top_mut() {
            top.push(3);
        }

        assert_eq!(outer.top().map(Stack::len), Some(2));
        assert_eq!(copy.top().map(Stack::len), Some(3));
    }

    #[test]
    fn test_sorted_copy_puts_largest_on_top() {
        let stack: Stack<i32> = vec![5, 1, 7, 3].into();
        let mut sorted = stack.sorted_copy();

        assert_eq!(sorted.pop(), Some(7));
        assert_eq!(sorted.pop(), Some(5));
        assert_eq!(stack.top(), Some(&3));
    }

    #[test]
    fn test_dedup_copy_keeps_first_occurrence() {
        let stack: Stack<char> = "abacbd".chars().collect();
        let deduped = stack.dedup_copy();

        assert_eq!(deduped.as_slice(), &['a', 'b', 'c', 'd']);
        assert_eq!(stack.len(), 6);
    }

    #[test]
    fn test_dedup_copy_uses_duplicate() {
        let mut stack = Stack::new();
        stack.push(Page::new("x"));
        stack.push(Page::new("x"));

        let deduped = stack.dedup_copy();
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped.top().map(|p| p.generation), Some(1));
    }

    #[test]
    fn test_dedup_copy_keeps_order_when_duplicate_changes_value() {
        let mut stack = Stack::new();
        stack.push(Page::new("a"));
        stack.push(Page::new("b"));
        stack.push(Page::new("a"));
        stack.push(Page::new("b"));
        stack.push(Page::new("c"));

        let deduped = stack.dedup_copy();
        let titles: Vec<&str> = deduped.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        assert!(deduped.iter().all(|p| p.generation == 1));
    }

    proptest! {
        #[test]
        fn test_copy_stack_is_elementwise_equal(values in prop::collection::vec(any::<i64>(), 0..48)) {
            let stack: Stack<i64> = values.clone().into();
            let copy = stack.copy_stack();
            prop_assert_eq!(copy.as_slice(), values.as_slice());
        }
    }
}
