//! Comparison sorts over mutable slices: a top-down merge sort, a run-based hybrid merge sort and
//! a quicksort built on a counting partition.
//!
//! The merge-based sorts are stable and report scratch allocation failure through [`SortError`].
//! The quicksort works in place and never allocates.

#![cfg_attr(not(test), no_std)]

#[cfg(not(test))]
extern crate core as std;

extern crate alloc;


mod error;
mod merge_buf;
mod merge_sort;
mod quadratic_sort;
mod quick_sort;
mod run_sort;
mod scratch;
mod split;

pub use error::SortError;
pub use merge_sort::{merge_sort, merge_sort_range};
pub use quick_sort::{quick_sort, quick_sort_range};
pub use run_sort::{run_hybrid_sort, RunHybridSort, DEFAULT_RUN_LEN};
use split::Split;

type Either<T> = either::Either<T, T>;
