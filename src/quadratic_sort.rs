//! In-place sorting algorithms that take quadratic time.

use contracts::*;

/// A stable insertion sort.
pub fn insertion_sort<T>(v: &mut [T], is_less: &mut impl FnMut(&T, &T) -> bool) {
    for i in 1..v.len() {
        shift_tail(&mut v[..=i], is_less);
    }
}

/// Shifts the last element to the left past every element strictly greater than it.
#[debug_requires(!v.is_empty())]
fn shift_tail<T>(v: &mut [T], is_less: &mut impl FnMut(&T, &T) -> bool) {
    let mut i = v.len() - 1;
    while i > 0 && is_less(&v[i], &v[i - 1]) {
        v.swap(i, i - 1);
        i -= 1;
    }
}
