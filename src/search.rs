//! Generic helpers whose type parameters carry capability constraints.

use crate::container::Container;

/// Index of the first element equal to `value`.
pub fn find_index<T: PartialEq>(value: &T, items: &[T]) -> Option<usize> {
    items.iter().position(|item| item == value)
}

/// Largest element; the first of several equal maxima wins. `None` when empty.
pub fn find_max<T: PartialOrd>(items: &[T]) -> Option<&T> {
    let mut iter = items.iter();
    let mut max = iter.next()?;
    for item in iter {
        if item > max {
            max = item;
        }
    }
    Some(max)
}

/// First appended element of any container, whatever its representation.
pub fn first_item<C: Container>(container: &C) -> Option<&C::Item> {
    container.at(0).ok()
}

/// Whether two containers, possibly of different concrete types, hold equal
/// elements in the same positions.
pub fn all_items_match<A, B>(a: &A, b: &B) -> bool
where
    A: Container,
    B: Container<Item = A::Item>,
    A::Item: PartialEq,
{
    if a.count() != b.count() {
        return false;
    }

    (0..a.count()).all(|index| match (a.at(index), b.at(index)) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    })
}
