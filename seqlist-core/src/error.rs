//! Error types for seqlist container operations

use crate::constants::{EXIT_INDEX_OUT_OF_BOUNDS, EXIT_MEMORY_ERROR, EXIT_UNSUPPORTED};
use alloc::string::String;

/// Errors that can occur during container operations
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Index outside the valid position or element range
    #[cfg_attr(feature = "std", error("Index out of range: index {index}, size {len}"))]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The container size at the time of the call.
        len: usize,
    },

    /// Backing storage could not be (re)allocated
    #[cfg_attr(feature = "std", error("Cannot (re)allocate memory for {requested} elements"))]
    Allocation {
        /// The number of element slots that were requested.
        requested: usize,
    },

    /// Operation not offered by this kind of container
    #[cfg_attr(feature = "std", error("Unsupported operation: {0}"))]
    UnsupportedOperation(String),
}

impl ListError {
    /// Process exit status for this error class
    ///
    /// Out-of-range indices and allocation failures keep distinct codes so
    /// a fail-fast caller can still tell them apart.
    pub const fn exit_code(&self) -> i32 {
        match self {
            ListError::IndexOutOfBounds { .. } => EXIT_INDEX_OUT_OF_BOUNDS,
            ListError::Allocation { .. } => EXIT_MEMORY_ERROR,
            ListError::UnsupportedOperation(_) => EXIT_UNSUPPORTED,
        }
    }

    pub(crate) const fn out_of_bounds(index: usize, len: usize) -> Self {
        ListError::IndexOutOfBounds { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let oob = ListError::out_of_bounds(3, 2);
        let mem = ListError::Allocation { requested: 10 };
        assert_eq!(oob.exit_code(), 1);
        assert_eq!(mem.exit_code(), 2);
        assert_ne!(oob.exit_code(), mem.exit_code());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_error_messages() {
        let oob = ListError::out_of_bounds(7, 3);
        assert_eq!(oob.to_string(), "Index out of range: index 7, size 3");

        let unsupported = ListError::UnsupportedOperation("front".into());
        assert_eq!(unsupported.to_string(), "Unsupported operation: front");
    }
}
