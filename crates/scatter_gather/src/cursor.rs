// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::iter::FusedIterator;

use tracing::{Level, event};

use crate::segment::checked_sum;
use crate::{Error, Result, SegmentList, SegmentReader};

/// A position in the logical byte sequence formed by a list of segments.
///
/// A cursor is plain state: it does not borrow the list it points into. Every method takes the
/// list as a parameter, which lets the same cursor type drive both shared (`&[T]`) and exclusive
/// (`&mut [T]`) segment lists. Callers must pass the same, unmodified list on every call for
/// the position to be meaningful. Passing a different list never causes undefined behavior or
/// panics, it merely yields a position that has no relation to the new list.
///
/// A cursor is always kept normalized:
///
/// * While bytes remain, it points into a segment at an offset strictly less than that
///   segment's length. Fully consumed segments and zero-length segments are skipped eagerly.
/// * Once no bytes remain, it is exhausted and its index equals the number of segments.
///
/// Most code will want to use [`SegmentIter`], which pairs a cursor with the list it walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    index: usize,
    offset: usize,
}

impl Cursor {
    /// Creates a cursor positioned at the first byte of `segments`.
    ///
    /// If `segments` holds no bytes (no segments or only zero-length ones), the cursor starts
    /// out exhausted.
    #[must_use]
    pub fn new<T>(segments: &[T]) -> Self
    where
        T: AsRef<[u8]>,
    {
        Self { index: 0, offset: 0 }.normalized(segments)
    }

    /// The index of the segment the cursor points into.
    ///
    /// Equal to the number of segments once the cursor is exhausted.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The offset of the next unconsumed byte within the current segment.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Whether every byte of `segments` has been consumed.
    #[must_use]
    pub fn is_exhausted<T>(&self, segments: &[T]) -> bool {
        self.index >= segments.len()
    }

    /// The number of unconsumed bytes from the cursor to the end of `segments`.
    ///
    /// Saturates at `usize::MAX` if the remaining lengths do not fit into `usize`.
    #[must_use]
    pub fn remaining_bytes<T>(&self, segments: &[T]) -> usize
    where
        T: AsRef<[u8]>,
    {
        let Some((current, rest)) = segments.get(self.index..).and_then(<[T]>::split_first) else {
            return 0;
        };

        let in_current = current.as_ref().len().saturating_sub(self.offset);

        checked_sum(rest.iter().map(|segment| segment.as_ref().len()))
            .ok()
            .and_then(|in_rest| in_rest.checked_add(in_current))
            .unwrap_or(usize::MAX)
    }

    /// Consumes exactly `n` bytes, crossing as many segment boundaries as needed.
    ///
    /// Zero-length segments are skipped without consuming anything. Advancing by zero bytes
    /// always succeeds, even when exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overrun`] if fewer than `n` bytes remain. The cursor is left
    /// unchanged in that case.
    pub fn advance<T>(&mut self, segments: &[T], n: usize) -> Result<()>
    where
        T: AsRef<[u8]>,
    {
        let mut index = self.index;
        let mut offset = self.offset;
        let mut pending = n;

        // Every iteration either consumes bytes or moves to the next segment, so this loop
        // runs at most once per segment plus once per non-empty step.
        while pending > 0 {
            let Some(segment) = segments.get(index) else {
                let available = n - pending;

                event!(Level::TRACE, message = "advance past end of segment list", requested = n, available);

                return Err(Error::Overrun { requested: n, available });
            };

            let len = segment.as_ref().len();
            let step = pending.min(len.saturating_sub(offset));

            pending -= step;
            offset += step;

            if offset >= len {
                index += 1;
                offset = 0;
            }
        }

        *self = Self { index, offset }.normalized(segments);
        Ok(())
    }

    /// The unconsumed bytes of the current segment.
    ///
    /// Empty only when the cursor is exhausted.
    #[must_use]
    pub fn chunk<'s, T>(&self, segments: &'s [T]) -> &'s [u8]
    where
        T: AsRef<[u8]>,
    {
        segments
            .get(self.index)
            .and_then(|segment| segment.as_ref().get(self.offset..))
            .unwrap_or_default()
    }

    /// The unconsumed bytes of the current segment, for writing.
    ///
    /// Empty only when the cursor is exhausted.
    #[must_use]
    pub fn chunk_mut<'s, T>(&self, segments: &'s mut [T]) -> &'s mut [u8]
    where
        T: AsMut<[u8]>,
    {
        segments
            .get_mut(self.index)
            .and_then(|segment| segment.as_mut().get_mut(self.offset..))
            .unwrap_or_default()
    }

    /// Moves to the start of the next non-empty segment, consuming the rest of the current one.
    fn skip_chunk<T>(&mut self, segments: &[T])
    where
        T: AsRef<[u8]>,
    {
        if !self.is_exhausted(segments) {
            *self = Self {
                index: self.index + 1,
                offset: 0,
            }
            .normalized(segments);
        }
    }

    fn normalized<T>(mut self, segments: &[T]) -> Self
    where
        T: AsRef<[u8]>,
    {
        while segments
            .get(self.index)
            .is_some_and(|segment| self.offset >= segment.as_ref().len())
        {
            self.index += 1;
            self.offset = 0;
        }

        self
    }
}

/// Iterates over a [`SegmentList`] as one logical byte sequence, tracking how far it has
/// been consumed.
///
/// The iterator borrows the list for its entire lifetime, so the list cannot change while it is
/// being walked. It is cheap to create and is meant to be created for a single pass and then
/// discarded.
///
/// As an [`Iterator`], it yields the remaining non-empty chunks of the list in order, each chunk
/// being the unconsumed tail of one segment. For byte-oriented consumption, use
/// [`advance()`][Self::advance] and [`chunk()`][Self::chunk] or the [`std::io::Read`] adapter
/// returned by [`reader()`][Self::reader].
///
/// # Examples
///
/// ```
/// use scatter_gather::SegmentIter;
///
/// let segments: [&[u8]; 3] = [b"0123456789", b"", b"ABCDEFGHIJKLMNO"];
/// let mut iter = SegmentIter::new(&segments);
///
/// iter.advance(12)?;
/// assert_eq!(iter.remaining_bytes(), 13);
/// assert_eq!(iter.chunk(), b"CDEFGHIJKLMNO");
///
/// iter.advance(13)?;
/// assert!(iter.is_exhausted());
///
/// // Nothing left, so only a zero-byte advance succeeds.
/// iter.advance(0)?;
/// iter.advance(1).unwrap_err();
/// # Ok::<(), scatter_gather::Error>(())
/// ```
#[derive(Debug)]
pub struct SegmentIter<'a, T> {
    segments: SegmentList<'a, T>,
    cursor: Cursor,
}

impl<'a, T> SegmentIter<'a, T>
where
    T: AsRef<[u8]>,
{
    /// Creates an iterator positioned at the first byte of `segments`.
    ///
    /// If `segments` holds no bytes, the iterator starts out exhausted.
    #[must_use]
    pub fn new(segments: &'a [T]) -> Self {
        Self::from_list(SegmentList::new(segments))
    }

    /// Creates an iterator positioned at the first byte of an existing view.
    #[must_use]
    pub fn from_list(segments: SegmentList<'a, T>) -> Self {
        Self {
            cursor: Cursor::new(segments.as_slice()),
            segments,
        }
    }

    /// The list being iterated over.
    #[must_use]
    pub const fn segments(&self) -> SegmentList<'a, T> {
        self.segments
    }

    /// The current position in the list.
    #[must_use]
    pub const fn position(&self) -> Cursor {
        self.cursor
    }

    /// Whether every byte of the list has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted(self.segments.as_slice())
    }

    /// The number of bytes that have not yet been consumed.
    ///
    /// Saturates at `usize::MAX` if the remaining lengths do not fit into `usize`.
    #[must_use]
    pub fn remaining_bytes(&self) -> usize {
        self.cursor.remaining_bytes(self.segments.as_slice())
    }

    /// Consumes exactly `n` bytes, crossing as many segment boundaries as needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overrun`] if fewer than `n` bytes remain. The iterator is left
    /// unchanged in that case.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        self.cursor.advance(self.segments.as_slice(), n)
    }

    /// The unconsumed bytes of the current segment.
    ///
    /// Empty only when the iterator is exhausted.
    #[must_use]
    pub fn chunk(&self) -> &'a [u8] {
        self.cursor.chunk(self.segments.as_slice())
    }

    /// Returns an adapter that implements [`std::io::Read`] and [`std::io::BufRead`],
    /// consuming bytes from this iterator.
    pub fn reader(&mut self) -> SegmentReader<'_, 'a, T> {
        SegmentReader::new(self)
    }
}

impl<'a, T> From<SegmentList<'a, T>> for SegmentIter<'a, T>
where
    T: AsRef<[u8]>,
{
    fn from(segments: SegmentList<'a, T>) -> Self {
        Self::from_list(segments)
    }
}

impl<'a, T> Iterator for SegmentIter<'a, T>
where
    T: AsRef<[u8]>,
{
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }

        let chunk = self.chunk();
        self.cursor.skip_chunk(self.segments.as_slice());

        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_segments = self.segments.len().saturating_sub(self.cursor.index());

        (usize::from(remaining_segments > 0), Some(remaining_segments))
    }
}

impl<T> FusedIterator for SegmentIter<'_, T> where T: AsRef<[u8]> {}
