// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// An error raised while measuring, validating, iterating or copying segment lists.
///
/// All of these are programming or input errors, not transient conditions. Retrying the same
/// operation with the same inputs will fail the same way.
///
/// Use [`kind()`][Error::kind] to branch on the category of the error without matching on
/// the diagnostic fields.
///
/// # Thread safety
///
/// This type is thread-safe.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The sum of the segment lengths does not fit into `usize`.
    #[error("total length of segment list overflows usize")]
    Overflow,

    /// A segment is longer than the configured maximum segment length.
    #[error("segment {index} is {len} bytes long, which exceeds the maximum of {max} bytes")]
    SegmentTooLarge {
        /// Position of the offending segment in its list.
        index: usize,
        /// Length of the offending segment.
        len: usize,
        /// The maximum that was exceeded.
        max: usize,
    },

    /// The destination list cannot hold all the bytes of the source list.
    #[error("destination holds {available} bytes but {required} bytes are required")]
    InsufficientCapacity {
        /// Total length of the source list.
        required: usize,
        /// Total length of the destination list.
        available: usize,
    },

    /// An attempt was made to move past the end of a segment list.
    ///
    /// When surfaced from [`copy()`][crate::copy()] this signals an internal logic error,
    /// since validation is expected to rule it out before any byte moves.
    #[error("requested {requested} bytes but only {available} bytes remain")]
    Overrun {
        /// Number of bytes the caller asked for.
        requested: usize,
        /// Number of bytes that were actually left.
        available: usize,
    },
}

impl Error {
    /// The category of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Overflow => ErrorKind::Overflow,
            Self::SegmentTooLarge { .. } => ErrorKind::SegmentTooLarge,
            Self::InsufficientCapacity { .. } => ErrorKind::InsufficientCapacity,
            Self::Overrun { .. } => ErrorKind::Overrun,
        }
    }
}

/// The category of an [`Error`], without diagnostic detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`Error::Overflow`].
    Overflow,
    /// See [`Error::SegmentTooLarge`].
    SegmentTooLarge,
    /// See [`Error::InsufficientCapacity`].
    InsufficientCapacity,
    /// See [`Error::Overrun`].
    Overrun,
}

/// A specialized `Result` for segment list operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
        static_assertions::assert_impl_all!(ErrorKind: Send, Sync, Copy);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Error::Overflow.kind(), ErrorKind::Overflow);
        assert_eq!(
            Error::SegmentTooLarge { index: 0, len: 2, max: 1 }.kind(),
            ErrorKind::SegmentTooLarge
        );
        assert_eq!(
            Error::InsufficientCapacity { required: 2, available: 1 }.kind(),
            ErrorKind::InsufficientCapacity
        );
        assert_eq!(Error::Overrun { requested: 2, available: 1 }.kind(), ErrorKind::Overrun);
    }

    #[test]
    fn display() {
        assert_eq!(Error::Overflow.to_string(), "total length of segment list overflows usize");
        assert_eq!(
            Error::SegmentTooLarge { index: 3, len: 1_000_001, max: 1_000_000 }.to_string(),
            "segment 3 is 1000001 bytes long, which exceeds the maximum of 1000000 bytes"
        );
        assert_eq!(
            Error::InsufficientCapacity { required: 25, available: 24 }.to_string(),
            "destination holds 24 bytes but 25 bytes are required"
        );
        assert_eq!(
            Error::Overrun { requested: 150, available: 100 }.to_string(),
            "requested 150 bytes but only 100 bytes remain"
        );
    }
}
