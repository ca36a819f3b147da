use alloc::collections::TryReserveError;

/// The ways a merge-based sort can fail.
///
/// When a sort returns an error, the slice is still a permutation of its input, but it is not
/// guaranteed to be sorted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("failed to reserve a merge buffer for {len} elements")]
    Alloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}
