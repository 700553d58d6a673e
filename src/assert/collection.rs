// Collection and size assertions

use std::cmp::Ordering;

use super::primitive::assert_true;
use crate::outcome::AssertionOutcome;

/// Succeed when both slices hold equal elements in the same order.
///
/// Equality is structural (`PartialEq` on slices), never identity.
pub fn assert_equal<T: PartialEq>(
    collection: &[T],
    expected: &[T],
    message: impl Into<String>,
) -> AssertionOutcome {
    assert_true(collection == expected, message)
}

/// Succeed when `collection` has no elements. `_min_size` is not consulted.
pub fn assert_empty<T>(
    collection: &[T],
    _min_size: i32,
    message: impl Into<String>,
) -> AssertionOutcome {
    assert_true(collection.is_empty(), message)
}

pub fn assert_less_than<T>(
    collection: &[T],
    min_size: i32,
    message: impl Into<String>,
) -> AssertionOutcome {
    assert_true(compare_len(collection.len(), min_size) == Ordering::Less, message)
}

pub fn assert_greater_than<T>(
    collection: &[T],
    min_size: i32,
    message: impl Into<String>,
) -> AssertionOutcome {
    assert_true(
        compare_len(collection.len(), min_size) == Ordering::Greater,
        message,
    )
}

/// Compare a length against a signed bound without truncating either side.
fn compare_len(len: usize, bound: i32) -> Ordering {
    match usize::try_from(bound) {
        Ok(bound) => len.cmp(&bound),
        // negative bound
        Err(_) => Ordering::Greater,
    }
}
