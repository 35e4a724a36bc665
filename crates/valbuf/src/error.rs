//! Error types for storage operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during storage operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The requested storage could not be allocated.
    ///
    /// Raised when the allocator refuses the request or when the byte
    /// size of the request would overflow the address space. The
    /// structure that reported this is unchanged; no partial state is
    /// ever observable after a failure.
    AllocationFailed {
        /// Number of element slots that could not be obtained.
        requested: usize,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
        }
    }
}

impl Error for StorageError {}
