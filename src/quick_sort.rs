//! A quicksort around the leftmost element, using a counting partition.
//!
//! The pivot is always the first element of the range, so already sorted and reverse sorted
//! inputs take quadratic time. Only the shorter side of each partition is sorted recursively and
//! the longer one is handled by the loop, which keeps the stack depth logarithmic even then.

use contracts::*;

/// Sorts `v` in place. The sort is not stable.
///
/// Runs in `O(n log n)` time on average and `O(n^2)` in the worst case. Never allocates.
pub fn quick_sort<T: Ord>(v: &mut [T]) {
    recurse(v, &mut T::lt);
}

/// Sorts the inclusive range `v[start..=end]` with [`quick_sort`].
///
/// A range of at most one element (`start >= end`) is left alone.
///
/// # Panics
///
/// Panics if the range has more than one element and `end` is out of bounds.
#[requires(start >= end || end < v.len(), "range end out of bounds")]
pub fn quick_sort_range<T: Ord>(v: &mut [T], start: usize, end: usize) {
    if start >= end {
        return;
    }

    quick_sort(&mut v[start..=end]);
}

fn recurse<'a, T>(mut v: &'a mut [T], is_less: &mut impl FnMut(&T, &T) -> bool) {
    while v.len() > 1 {
        let mid = partition(v, is_less);

        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            recurse(left, is_less);
            v = right;
        } else {
            recurse(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its first element and returns the element's final index.
///
/// Afterwards, everything before the returned index is less than or equal to the pivot and
/// everything after it is greater.
#[debug_requires(!v.is_empty())]
fn partition<T>(v: &mut [T], is_less: &mut impl FnMut(&T, &T) -> bool) -> usize {
    let (pivot, rest) = v.split_at(1);
    let pivot = &pivot[0];

    // The number of elements not greater than the pivot is exactly where it ends up.
    let mid = rest.iter().filter(|&x| !is_less(pivot, x)).count();
    v.swap(0, mid);

    let (mut l, mut r) = (0, v.len() - 1);

    // INVARIANT: `v[..l]` are not greater than the pivot, `v[r + 1..]` are greater.
    // There are as many misplaced elements before `mid` as after it, so the cursors meet there.
    while l < mid && r > mid {
        while l < mid && !is_less(&v[mid], &v[l]) {
            l += 1;
        }

        while r > mid && is_less(&v[mid], &v[r]) {
            r -= 1;
        }

        if l < mid && r > mid {
            v.swap(l, r);
            l += 1;
            r -= 1;
        }
    }

    mid
}
