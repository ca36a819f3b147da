//! Merge two adjacent sorted runs using scratch copies of both.

use crate::scratch::{ScratchAlloc, ScratchBuf};
use crate::{Either, SortError, Split};
use contracts::*;

/// Merges the runs on either side of `runs.at`, favoring the left run when elements are equal.
///
/// Both runs are copied out before anything is written back, so a failed allocation leaves
/// `runs.seq` untouched.
///
/// ```text
/// |----L----|----R----|  =>  |-------L//R-------|
/// ```
#[debug_requires(runs.at > 0 && runs.at < runs.seq.len(), "both runs must be non-empty")]
#[test_requires(runs.is_each_side_sorted_by(is_less))]
pub fn merge<T: Clone>(
    runs: Split<&mut [T]>,
    alloc: &mut impl ScratchAlloc,
    is_less: &mut impl FnMut(&T, &T) -> bool,
) -> Result<(), SortError> {
    let (l, r) = runs.split::<T>();
    let left = ScratchBuf::copy_of(l, alloc)?;
    let right = ScratchBuf::copy_of(r, alloc)?;

    let out = runs.seq;
    let (mut i, mut j) = (0, 0);

    let unmerged = loop {
        match (left.get(i), right.get(j)) {
            (Some(a), Some(b)) => {
                // Taking from the left on ties is what keeps the sorts stable.
                if is_less(b, a) {
                    out[i + j] = b.clone();
                    j += 1;
                } else {
                    out[i + j] = a.clone();
                    i += 1;
                }
            }
            (Some(_), None) => break Either::Left(&left[i..]),
            (None, _) => break Either::Right(&right[j..]),
        }
    };

    out[i + j..].clone_from_slice(unmerged.into_inner());
    Ok(())
}
