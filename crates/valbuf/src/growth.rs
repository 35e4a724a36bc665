//! Geometric growth policy for automatic buffer expansion.
//!
//! Plain appends ([`ValueStack::push`](crate::ValueStack::push),
//! [`ValueStack::fill`](crate::ValueStack::fill), and growing
//! [`ByteBuffer::resize`](crate::ByteBuffer::resize)) route through this
//! policy so repeated appends stay amortised O(1). Explicit sizing
//! operations (`reserve`, `set_capacity`) bypass it and request an exact
//! fit instead.

/// Multiplicative factor applied to the current capacity on growth.
pub const GROWTH_FACTOR: usize = 2;

/// Smallest capacity a growth step will produce.
///
/// Guarantees progress when growing from capacity 0 or 1, where the
/// multiplicative factor alone would stall.
pub const MIN_CAPACITY: usize = 4;

/// Capacity a full buffer grows to when it must hold `required` elements.
///
/// The largest of `current * GROWTH_FACTOR`, [`MIN_CAPACITY`], and
/// `required`, saturating at `usize::MAX`. Monotonically non-decreasing
/// in both arguments and always at least `required`.
pub(crate) fn grown_capacity(current: usize, required: usize) -> usize {
    current
        .saturating_mul(GROWTH_FACTOR)
        .max(MIN_CAPACITY)
        .max(required)
}
