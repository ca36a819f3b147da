//! Scratch space for merges.
//!
//! Every merge owns its buffers for exactly as long as it runs. They are released when the
//! `ScratchBuf` goes out of scope, which covers early returns on allocation failure as well.

use crate::SortError;
use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use log::debug;
use std::ops::Deref;

/// Hands out scratch buffers.
///
/// The global allocator is the only implementation outside of tests. Tests substitute one that
/// fails on demand.
pub trait ScratchAlloc {
    fn try_reserve<T>(&mut self, buf: &mut Vec<T>, len: usize) -> Result<(), TryReserveError>;
}

/// Allocates from the global allocator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Global;

impl ScratchAlloc for Global {
    fn try_reserve<T>(&mut self, buf: &mut Vec<T>, len: usize) -> Result<(), TryReserveError> {
        buf.try_reserve_exact(len)
    }
}

/// A copy of a run, owned by a single merge step.
#[derive(Debug)]
pub struct ScratchBuf<T>(Vec<T>);

impl<T: Clone> ScratchBuf<T> {
    /// Copies `src` into a freshly reserved buffer.
    pub fn copy_of(src: &[T], alloc: &mut impl ScratchAlloc) -> Result<Self, SortError> {
        let mut buf = Vec::new();
        if let Err(source) = alloc.try_reserve(&mut buf, src.len()) {
            debug!("could not reserve a merge buffer for {} elements: {}", src.len(), source);
            return Err(SortError::Alloc {
                len: src.len(),
                source,
            });
        }

        buf.extend_from_slice(src);
        Ok(ScratchBuf(buf))
    }
}

impl<T> Deref for ScratchBuf<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}
