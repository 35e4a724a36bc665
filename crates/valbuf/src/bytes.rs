//! Byte-granular storage with decoupled size and capacity.
//!
//! [`ByteBuffer`] is the byte-width sibling of
//! [`ValueStack`](crate::ValueStack): one contiguous `u8` allocation
//! whose logical size and allocated capacity move independently.
//! `resize` sets the size (growing geometrically when the buffer is
//! full), `reserve_total` pins the capacity exactly, and
//! `shrink_to_fit` returns spare slots to the allocator.

use crate::error::StorageError;
use crate::growth::grown_capacity;

/// An owned, resizable byte buffer with explicit capacity control.
///
/// Bytes at positions `0..len()` are live; `len()..capacity()` is spare,
/// allocated space. `len() <= capacity()` holds after every operation,
/// and fallible operations leave the buffer untouched on failure.
#[derive(Debug)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Create an empty buffer that holds no storage.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty buffer with at least `requested` bytes allocated.
    pub fn with_capacity(requested: usize) -> Result<Self, StorageError> {
        let mut data = Vec::new();
        data.try_reserve_exact(requested)
            .map_err(|_| StorageError::AllocationFailed { requested })?;
        Ok(Self { data })
    }

    /// Set the logical size to `n` bytes.
    ///
    /// Growing past the current capacity expands the buffer through the
    /// geometric policy (post-success `capacity() >= n`); bytes in the
    /// new region are zero-initialised, the old prefix is preserved.
    /// Shrinking never reallocates and leaves capacity untouched. On
    /// failure neither size nor capacity changes.
    pub fn resize(&mut self, n: usize) -> Result<(), StorageError> {
        if n > self.data.capacity() {
            let target = grown_capacity(self.data.capacity(), n);
            self.data
                .try_reserve_exact(target - self.data.len())
                .map_err(|_| StorageError::AllocationFailed { requested: target })?;
        }
        self.data.resize(n, 0);
        Ok(())
    }

    /// Ensure the total capacity is at least `total` bytes, exact-fit.
    ///
    /// Never shrinks; already-sufficient capacity is a no-op. The size
    /// and contents are untouched, and on failure the capacity is too.
    pub fn reserve_total(&mut self, total: usize) -> Result<(), StorageError> {
        if total <= self.data.capacity() {
            return Ok(());
        }
        self.data
            .try_reserve_exact(total - self.data.len())
            .map_err(|_| StorageError::AllocationFailed { requested: total })?;
        Ok(())
    }

    /// Reduce the capacity to exactly the current size.
    ///
    /// A size-0 buffer releases its storage entirely (`capacity() == 0`).
    /// Infallible: if the allocator refuses, the over-sized buffer stays.
    pub fn shrink_to_fit(&mut self) {
        if self.data.len() == self.data.capacity() {
            return;
        }
        if self.data.is_empty() {
            self.data = Vec::new();
            return;
        }
        let mut fresh: Vec<u8> = Vec::new();
        if fresh.try_reserve_exact(self.data.len()).is_err() {
            return;
        }
        fresh.extend_from_slice(&self.data);
        self.data = fresh;
    }

    /// Logical size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no live bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated capacity in bytes, always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The byte at `index`, or `None` past the live region.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// Write `byte` at `index` within the live region.
    ///
    /// Returns `false` when `index >= len()`; out-of-range writes are
    /// rejected rather than growing the buffer.
    pub fn set(&mut self, index: usize, byte: u8) -> bool {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = byte;
                true
            }
            None => false,
        }
    }

    /// The live bytes as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The live bytes as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}
