// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{Error, Result, SegmentInfo};

/// An immutable view over an ordered list of byte segments, treated as one logical
/// byte sequence.
///
/// The list is borrowed from the caller. Nothing in this crate takes ownership of the
/// segments or mutates the list itself; iteration state lives in a separate
/// [`SegmentIter`][crate::SegmentIter].
///
/// Any segment type that exposes its bytes via [`AsRef<[u8]>`] can be used, for example
/// `&[u8]`, `&mut [u8]` or `Vec<u8>`. Zero-length segments are legal anywhere in the list.
///
/// # Examples
///
/// ```
/// use scatter_gather::SegmentList;
///
/// let segments: [&[u8]; 3] = [b"0123456789", b"", b"ABCDEFGHIJKLMNO"];
/// let list = SegmentList::new(&segments);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.total_len()?, 25);
/// # Ok::<(), scatter_gather::Error>(())
/// ```
#[derive(Debug)]
pub struct SegmentList<'a, T> {
    segments: &'a [T],
}

impl<'a, T> SegmentList<'a, T>
where
    T: AsRef<[u8]>,
{
    /// Creates a view over the provided segments.
    #[must_use]
    pub const fn new(segments: &'a [T]) -> Self {
        Self { segments }
    }

    /// The number of segments in the list, including zero-length ones.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the list has no segments at all.
    ///
    /// A list made up only of zero-length segments is not empty but has a total length of zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The length of the segment at `index`, or `None` if there is no such segment.
    #[must_use]
    pub fn segment_len(&self, index: usize) -> Option<usize> {
        self.segments.get(index).map(|segment| segment.as_ref().len())
    }

    /// The bytes of the segment at `index`, or `None` if there is no such segment.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&'a [u8]> {
        self.segments.get(index).map(AsRef::as_ref)
    }

    /// The sum of all segment lengths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the sum does not fit into `usize`.
    pub fn total_len(&self) -> Result<usize> {
        total_len(self.segments)
    }

    /// Iterates over the bytes of each segment, in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + use<'a, T> {
        self.segments.iter().map(AsRef::as_ref)
    }

    /// Describes the location and length of each segment, in order.
    pub fn describe(&self) -> impl Iterator<Item = SegmentInfo> + use<'a, T> {
        self.iter()
            .enumerate()
            .map(|(index, segment)| SegmentInfo::new(index, segment))
    }

    pub(crate) const fn as_slice(&self) -> &'a [T] {
        self.segments
    }
}

// Manual impls so that the view is copyable regardless of `T`.
impl<T> Clone for SegmentList<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SegmentList<'_, T> {}

impl<'a, T> IntoIterator for SegmentList<'a, T>
where
    T: AsRef<[u8]>,
{
    type Item = &'a [u8];
    type IntoIter = iter::Segments<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        iter::Segments {
            inner: self.segments.iter(),
        }
    }
}

pub(crate) mod iter {
    use std::slice;

    /// Iterates over the bytes of each segment in a [`SegmentList`][super::SegmentList].
    #[derive(Debug)]
    pub struct Segments<'a, T> {
        pub(super) inner: slice::Iter<'a, T>,
    }

    impl<'a, T> Iterator for Segments<'a, T>
    where
        T: AsRef<[u8]>,
    {
        type Item = &'a [u8];

        fn next(&mut self) -> Option<Self::Item> {
            self.inner.next().map(AsRef::as_ref)
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            self.inner.size_hint()
        }
    }

    impl<T> ExactSizeIterator for Segments<'_, T> where T: AsRef<[u8]> {}
}

/// The sum of the lengths of `segments`.
///
/// This is the same as [`SegmentList::total_len()`] but also accepts lists that are currently
/// mutably borrowed, such as a copy destination.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the sum does not fit into `usize`.
pub fn total_len<T>(segments: &[T]) -> Result<usize>
where
    T: AsRef<[u8]>,
{
    checked_sum(segments.iter().map(|segment| segment.as_ref().len()))
}

pub(crate) fn checked_sum(lengths: impl IntoIterator<Item = usize>) -> Result<usize> {
    lengths
        .into_iter()
        .try_fold(0_usize, usize::checked_add)
        .ok_or(Error::Overflow)
}
