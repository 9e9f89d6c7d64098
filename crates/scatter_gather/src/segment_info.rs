// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};

/// Where a segment lives in memory and how long it is.
///
/// Obtained via [`SegmentList::describe()`][crate::SegmentList::describe]. The address is
/// recorded for diagnostics only and cannot be turned back into a reference.
///
/// # Examples
///
/// ```
/// use scatter_gather::SegmentList;
///
/// let segments: [&[u8]; 2] = [b"hello", b""];
///
/// for info in SegmentList::new(&segments).describe() {
///     println!("{info}");
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentInfo {
    index: usize,
    address: usize,
    len: usize,
}

impl SegmentInfo {
    pub(crate) fn new(index: usize, segment: &[u8]) -> Self {
        Self {
            index,
            address: segment.as_ptr().addr(),
            len: segment.len(),
        }
    }

    /// Position of the segment in its list.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Numeric address of the first byte of the segment.
    #[must_use]
    pub const fn address(&self) -> usize {
        self.address
    }

    /// Length of the segment in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the segment has a length of zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Display for SegmentInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Segment {}: base={:#x}, len={}", self.index, self.address, self.len)
    }
}
