//! Capacity-managed value and byte storage.
//!
//! valbuf provides two small owned-storage types for runtimes that need
//! explicit control over allocated capacity, not just logical length:
//!
//! - [`ValueStack`]: a growable stack of [`Value`]s whose capacity can be
//!   pre-reserved, forced to an exact size, or shrunk to fit, with a
//!   geometric growth policy for plain appends.
//! - [`ByteBuffer`]: a byte-granular sibling with decoupled size and
//!   capacity and the same exact-sizing operations.
//!
//! Both types guarantee `len <= capacity` after every operation and are
//! failure-atomic: an operation that cannot obtain storage reports
//! [`StorageError::AllocationFailed`] and leaves the structure exactly as
//! it was, with no partial state observable.
//!
//! # Quick start
//!
//! ```rust
//! use valbuf::ValueStack;
//!
//! let mut stack = ValueStack::with_capacity(2).unwrap();
//! stack.push(1.0).unwrap();
//! stack.push(2.0).unwrap();
//! stack.push(3.0).unwrap(); // grows past the initial capacity
//! assert_eq!(stack.as_slice(), &[1.0, 2.0, 3.0]);
//!
//! stack.set_capacity(2).unwrap(); // exact resize; drops the newest element
//! assert_eq!(stack.as_slice(), &[1.0, 2.0]);
//! assert!(stack.capacity() >= 2);
//!
//! stack.release();
//! assert_eq!(stack.capacity(), 0);
//! ```
//!
//! # Threading
//!
//! Instances are single-owner and carry no internal synchronisation.
//! Every mutating operation takes `&mut self`, so exclusive access is
//! enforced at compile time; sharing one instance across threads requires
//! external mutual exclusion.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bytes;
pub mod error;
pub mod growth;
pub mod stack;

/// Element type stored by [`ValueStack`].
///
/// Runtimes that NaN-box their values store them here as raw `f64`
/// payloads; the stack itself never inspects the bit pattern.
pub type Value = f64;

// Public re-exports for the primary API surface.
pub use bytes::ByteBuffer;
pub use error::StorageError;
pub use stack::ValueStack;
