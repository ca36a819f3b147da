//! A top-down merge sort.

use crate::merge_buf::merge;
use crate::scratch::{Global, ScratchAlloc};
use crate::{SortError, Split};
use contracts::*;

/// Sorts `v` with a stable, top-down merge sort.
///
/// Each merge copies its two runs into scratch buffers that are dropped before the merge
/// returns, so at most `v.len()` extra elements are alive at any time. Slices shorter than two
/// elements are never copied.
///
/// # Errors
///
/// Returns [`SortError::Alloc`] if a scratch buffer cannot be reserved. `v` is then still a
/// permutation of its input, but it may not be sorted.
pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) -> Result<(), SortError> {
    merge_sort_in(v, &mut Global, &mut T::lt)
}

/// Sorts the inclusive range `v[begin..=end]` with [`merge_sort`].
///
/// An empty range (`begin > end`) is left alone.
///
/// # Panics
///
/// Panics if the range is not empty and `end` is out of bounds.
#[requires(begin > end || end < v.len(), "range end out of bounds")]
pub fn merge_sort_range<T: Ord + Clone>(
    v: &mut [T],
    begin: usize,
    end: usize,
) -> Result<(), SortError> {
    if begin > end {
        return Ok(());
    }

    merge_sort(&mut v[begin..=end])
}

pub(crate) fn merge_sort_in<T: Clone>(
    v: &mut [T],
    alloc: &mut impl ScratchAlloc,
    is_less: &mut impl FnMut(&T, &T) -> bool,
) -> Result<(), SortError> {
    if v.len() < 2 {
        return Ok(());
    }

    // The left run takes the middle element when the length is odd.
    let mid = v.len() - v.len() / 2;

    let (l, r) = v.split_at_mut(mid);
    merge_sort_in(l, alloc, is_less)?;
    merge_sort_in(r, alloc, is_less)?;

    merge(Split::new(v, mid), alloc, is_less)
}
