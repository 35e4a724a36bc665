//! Growable value stack with explicit capacity control.
//!
//! [`ValueStack`] owns one contiguous `f64` allocation and decouples the
//! number of live elements from the number of allocated slots. Appends
//! grow the buffer geometrically (see [`crate::growth`]); [`reserve`] and
//! [`set_capacity`] give callers exact control when the working size is
//! known in advance.
//!
//! [`reserve`]: ValueStack::reserve
//! [`set_capacity`]: ValueStack::set_capacity

use crate::error::StorageError;
use crate::growth::grown_capacity;
use crate::Value;

/// A growable stack of [`Value`]s with decoupled length and capacity.
///
/// Live elements occupy positions `0..len()`; slots `len()..capacity()`
/// are allocated but hold no data. The invariant `len() <= capacity()`
/// holds after every operation, successful or failed, and `capacity() ==
/// 0` means no storage is held at all (the released state).
///
/// Every fallible operation is atomic: on
/// [`StorageError::AllocationFailed`] the stack is left bit-for-bit as
/// it was. Growth swaps in a fresh allocation only after it has been
/// secured, never discarding the old buffer first.
#[derive(Debug)]
pub struct ValueStack {
    /// Backing storage. `items.len()` is the live element count,
    /// `items.capacity()` the allocated slot count.
    items: Vec<Value>,
}

impl ValueStack {
    /// Create an empty stack that holds no storage.
    ///
    /// `len()` and `capacity()` are both 0. The first append allocates
    /// through the growth policy.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty stack with at least `requested` slots allocated.
    ///
    /// Returns `Err(StorageError::AllocationFailed)` if the storage
    /// cannot be obtained; no instance is constructed in that case.
    pub fn with_capacity(requested: usize) -> Result<Self, StorageError> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(requested)
            .map_err(|_| StorageError::AllocationFailed { requested })?;
        Ok(Self { items })
    }

    /// Append one value, growing the buffer geometrically if it is full.
    ///
    /// On failure the stack is unchanged: no growth, no appended value.
    pub fn push(&mut self, value: Value) -> Result<(), StorageError> {
        if self.items.len() == self.items.capacity() {
            self.grow_for(1)?;
        }
        self.items.push(value);
        Ok(())
    }

    /// Append `n` copies of `value` in one step.
    ///
    /// Equivalent to `n` consecutive `push` calls in final state and
    /// growth behaviour, but atomic: either all `n` copies land and
    /// `len()` rises by exactly `n`, or the stack is unchanged and the
    /// allocation failure is reported. `n = 0` is a no-op success.
    pub fn fill(&mut self, value: Value, n: usize) -> Result<(), StorageError> {
        if n == 0 {
            return Ok(());
        }
        let spare = self.items.capacity() - self.items.len();
        if n > spare {
            self.grow_for(n)?;
        }
        // Capacity is secured above; this resize cannot reallocate.
        self.items.resize(self.items.len() + n, value);
        Ok(())
    }

    /// Ensure `additional` more elements fit without further growth.
    ///
    /// On success `len() + additional <= capacity()`. Already-sufficient
    /// capacity is a no-op; otherwise the buffer grows to an exact fit
    /// (no geometric rounding). `len()` and the live contents never
    /// change, and on failure the capacity does not either.
    pub fn reserve(&mut self, additional: usize) -> Result<(), StorageError> {
        let required = self
            .items
            .len()
            .checked_add(additional)
            .ok_or(StorageError::AllocationFailed {
                requested: usize::MAX,
            })?;
        if required <= self.items.capacity() {
            return Ok(());
        }
        self.items
            .try_reserve_exact(additional)
            .map_err(|_| StorageError::AllocationFailed {
                requested: required,
            })?;
        Ok(())
    }

    /// Force the buffer to exactly `n` slots.
    ///
    /// On success `capacity() >= n` (the allocator may round up, never
    /// down). This is the only operation that can drop data: if `n <
    /// len()`, the first `n` elements survive and `len()` becomes `n`.
    /// `n = 0` releases the storage entirely. On failure both capacity
    /// and length are unchanged; in particular, no truncation happens.
    pub fn set_capacity(&mut self, n: usize) -> Result<(), StorageError> {
        if n == 0 {
            self.release();
            return Ok(());
        }
        if n == self.items.capacity() {
            return Ok(());
        }
        // Secure the new allocation before giving up the old one; the
        // swap is the commit point.
        let mut fresh: Vec<Value> = Vec::new();
        fresh
            .try_reserve_exact(n)
            .map_err(|_| StorageError::AllocationFailed { requested: n })?;
        let keep = self.items.len().min(n);
        fresh.extend_from_slice(&self.items[..keep]);
        self.items = fresh;
        Ok(())
    }

    /// Reduce the capacity to the minimum that holds the current length.
    ///
    /// Never increases capacity and never changes the length or the
    /// contents. Failure is not reported: if the allocator refuses the
    /// smaller buffer, the over-sized one stays. Either way `capacity()
    /// <= old_capacity` and `capacity() >= len()` hold afterwards.
    pub fn shrink_to_fit(&mut self) {
        let _ = self.set_capacity(self.items.len());
    }

    /// Free the storage and reset to the empty, capacity-0 state.
    ///
    /// Idempotent; releasing an already-released stack is a no-op.
    /// Dropping the stack performs the same cleanup implicitly.
    pub fn release(&mut self) {
        self.items = Vec::new();
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of allocated slots, always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The value at `index`, or `None` past the live region.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.items.get(index).copied()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// The live elements as a mutable slice.
    ///
    /// Only positions `0..len()` are reachable; the spare capacity is
    /// not exposed.
    pub fn as_mut_slice(&mut self) -> &mut [Value] {
        &mut self.items
    }

    /// Grow so at least `additional` more elements fit, applying the
    /// geometric policy. Live contents are untouched; on failure the
    /// buffer is exactly as it was.
    fn grow_for(&mut self, additional: usize) -> Result<(), StorageError> {
        let required = self
            .items
            .len()
            .checked_add(additional)
            .ok_or(StorageError::AllocationFailed {
                requested: usize::MAX,
            })?;
        let target = grown_capacity(self.items.capacity(), required);
        // try_reserve_exact keeps the current allocation on failure.
        self.items
            .try_reserve_exact(target - self.items.len())
            .map_err(|_| StorageError::AllocationFailed { requested: target })?;
        Ok(())
    }
}

impl Default for ValueStack {
    fn default() -> Self {
        Self::new()
    }
}
