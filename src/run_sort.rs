//! A bottom-up merge sort that starts from insertion-sorted runs.

use crate::merge_buf::merge;
use crate::quadratic_sort;
use crate::scratch::{Global, ScratchAlloc};
use crate::{SortError, Split};
use contracts::*;
use log::trace;
use static_assertions::const_assert;

/// The run length used by [`run_hybrid_sort`] and `RunHybridSort::default()`.
pub const DEFAULT_RUN_LEN: usize = 32;

const_assert!(DEFAULT_RUN_LEN > 0);

/// Sorts `v` with [`RunHybridSort`] and the default run length.
///
/// # Errors
///
/// See [`RunHybridSort::sort`].
pub fn run_hybrid_sort<T: Ord + Clone>(v: &mut [T]) -> Result<(), SortError> {
    RunHybridSort::default().sort(v)
}

/// A stable sort in two phases.
///
/// First, the input is cut into runs of `run_len` elements (the last one may be shorter), and
/// each run is insertion sorted. Then adjacent runs are merged pairwise, doubling the run size on
/// every pass until a single run covers the input.
///
/// The insertion sort phase costs `O(n * run_len)`, so `run_len` should stay small. With a run
/// length of 1 this is a plain bottom-up merge sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunHybridSort {
    run_len: usize,
}

impl Default for RunHybridSort {
    fn default() -> Self {
        RunHybridSort {
            run_len: DEFAULT_RUN_LEN,
        }
    }
}

impl RunHybridSort {
    /// # Panics
    ///
    /// Panics if `run_len` is zero.
    #[requires(run_len > 0, "runs must hold at least one element")]
    pub fn new(run_len: usize) -> Self {
        RunHybridSort { run_len }
    }

    pub fn run_len(&self) -> usize {
        self.run_len
    }

    /// Sorts `v`.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::Alloc`] if a scratch buffer for a merge cannot be reserved. `v` is
    /// then still a permutation of its input, but it may not be sorted.
    pub fn sort<T: Ord + Clone>(&self, v: &mut [T]) -> Result<(), SortError> {
        self.sort_in(v, &mut Global, &mut T::lt)
    }

    pub(crate) fn sort_in<T: Clone>(
        &self,
        v: &mut [T],
        alloc: &mut impl ScratchAlloc,
        is_less: &mut impl FnMut(&T, &T) -> bool,
    ) -> Result<(), SortError> {
        let len = v.len();
        if len < 2 {
            return Ok(());
        }

        trace!("insertion sorting runs of {} over {} elements", self.run_len, len);
        for run in v.chunks_mut(self.run_len) {
            quadratic_sort::insertion_sort(run, is_less);
        }

        let mut run_len = self.run_len;
        while run_len < len {
            trace!("merging runs of {}", run_len);

            let mut pairs = v.chunks_exact_mut(run_len.saturating_mul(2));
            for pair in pairs.by_ref() {
                merge(Split::new(pair, run_len), alloc, is_less)?;
            }

            // A trailing run with no partner is carried into the next pass as is.
            let rem = pairs.into_remainder();
            if rem.len() > run_len {
                merge(Split::new(rem, run_len), alloc, is_less)?;
            }

            run_len = run_len.saturating_mul(2);
        }

        Ok(())
    }
}
