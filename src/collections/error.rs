//! Error types for indexed collections.
//!
//! # Error Categories
//!
//! - [`IndexedSetError::IndexOutOfRange`]: insertion past the live region
//! - [`IndexedSetError::NotFound`]: `index_of` on an absent element
//! - [`IndexedSetError::CapacityExhausted`]: no larger prime capacity exists
//! - [`IndexedSetError::DestinationTooSmall`]: `copy_to` target cannot hold the slots
//! - [`IndexedSetError::Disposed`]: the set has already released its storage
//!
//! # Examples
//!
//! ```
//! use primeset::collections::{IndexedSet, IndexedSetError};
//!
//! let set: IndexedSet<i32> = IndexedSet::new();
//! let error = set.index_of(&42).unwrap_err();
//! assert!(error.is_not_found());
//! assert_eq!(error.to_string(), "element not found");
//! ```

use thiserror::Error;

/// Errors reported by [`IndexedSet`](super::IndexedSet) operations.
///
/// Duplicate additions and out-of-range removals are documented no-ops and
/// never produce an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexedSetError {
    /// An insertion index lies beyond the end of the live region.
    #[error("index {index} is out of range for insertion into {count} elements")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of live elements when the call was made.
        count: usize,
    },

    /// No element with a matching identity is stored.
    #[error("element not found")]
    NotFound,

    /// The prime table cannot produce a capacity above the current count.
    #[error("reached maximum capacity at {count} elements")]
    CapacityExhausted {
        /// Number of live elements when growth was attempted.
        count: usize,
    },

    /// The destination slice is shorter than `offset + capacity`.
    #[error("destination holds {available} elements but {required} are required")]
    DestinationTooSmall {
        /// Length the destination needs.
        required: usize,
        /// Length the destination has.
        available: usize,
    },

    /// The set has been disposed.
    #[error("indexed set has been disposed")]
    Disposed,
}

impl IndexedSetError {
    /// Returns `true` if this is an [`IndexOutOfRange`](Self::IndexOutOfRange) error.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` if this is a [`NotFound`](Self::NotFound) error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns `true` if this is a [`CapacityExhausted`](Self::CapacityExhausted) error.
    #[must_use]
    pub const fn is_capacity_exhausted(&self) -> bool {
        matches!(self, Self::CapacityExhausted { .. })
    }

    /// Returns `true` if this is a [`Disposed`](Self::Disposed) error.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        matches!(self, Self::Disposed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_index_out_of_range_display() {
        let error = IndexedSetError::IndexOutOfRange { index: 4, count: 2 };
        assert_eq!(
            error.to_string(),
            "index 4 is out of range for insertion into 2 elements"
        );
        assert!(error.is_out_of_range());
        assert!(!error.is_not_found());
    }

    #[rstest]
    fn test_destination_too_small_display() {
        let error = IndexedSetError::DestinationTooSmall {
            required: 7,
            available: 3,
        };
        assert_eq!(
            error.to_string(),
            "destination holds 3 elements but 7 are required"
        );
    }

    #[rstest]
    #[case(IndexedSetError::NotFound, "element not found")]
    #[case(IndexedSetError::Disposed, "indexed set has been disposed")]
    #[case(
        IndexedSetError::CapacityExhausted { count: 9 },
        "reached maximum capacity at 9 elements"
    )]
    fn test_display(#[case] error: IndexedSetError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_predicates_are_exclusive() {
        let error = IndexedSetError::CapacityExhausted { count: 1 };
        assert!(error.is_capacity_exhausted());
        assert!(!error.is_disposed());
        assert!(IndexedSetError::Disposed.is_disposed());
    }

    #[rstest]
    fn test_error_trait() {
        let error = IndexedSetError::NotFound;
        let _: &dyn std::error::Error = &error;
    }
}
