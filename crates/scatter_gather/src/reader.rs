// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::{self, BufRead, Read};

use crate::SegmentIter;

/// Adapter that implements [`Read`] and [`BufRead`] for [`SegmentIter`].
///
/// Create an instance via [`SegmentIter::reader()`][1]. Bytes read through the adapter are
/// consumed from the underlying iterator.
///
/// The segments are already in memory, so [`BufRead`] is implemented directly on top of them
/// without an intermediate buffer. Prefer this over wrapping in [`std::io::BufReader`].
///
/// [1]: crate::SegmentIter::reader
#[derive(Debug)]
pub struct SegmentReader<'i, 'a, T> {
    inner: &'i mut SegmentIter<'a, T>,
}

impl<'i, 'a, T> SegmentReader<'i, 'a, T>
where
    T: AsRef<[u8]>,
{
    #[must_use]
    pub(crate) const fn new(inner: &'i mut SegmentIter<'a, T>) -> Self {
        Self { inner }
    }
}

impl<T> Read for SegmentReader<'_, '_, T>
where
    T: AsRef<[u8]>,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;

        while filled < buf.len() && !self.inner.is_exhausted() {
            let chunk = self.inner.chunk();
            let count = chunk.len().min(buf.len() - filled);

            buf[filled..filled + count].copy_from_slice(&chunk[..count]);
            filled += count;

            self.inner.advance(count).map_err(io::Error::other)?;
        }

        Ok(filled)
    }
}

impl<T> BufRead for SegmentReader<'_, '_, T>
where
    T: AsRef<[u8]>,
{
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.inner.chunk())
    }

    fn consume(&mut self, amount: usize) {
        // Consuming more than `fill_buf()` returned is a caller bug. We clamp instead of
        // panicking, matching what the standard library readers do.
        let amount = amount.min(self.inner.remaining_bytes());

        // Cannot fail: the amount was clamped to what remains.
        _ = self.inner.advance(amount);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test() {
        let segments: [&[u8]; 3] = [b"Hello", b"", b", world"];
        let mut iter = SegmentIter::new(&segments);
        let mut reader = iter.reader();

        let mut buffer = [0_u8; 8];

        let bytes_read = reader.read(&mut buffer).unwrap();
        assert_eq!(bytes_read, 8);
        assert_eq!(&buffer, b"Hello, w");

        let bytes_read = reader.read(&mut buffer).unwrap();
        assert_eq!(bytes_read, 4);
        assert_eq!(&buffer[..4], b"orld");

        let bytes_read = reader.read(&mut buffer).unwrap();
        assert_eq!(bytes_read, 0);

        assert!(iter.is_exhausted());
    }

    #[test]
    fn read_to_end() {
        let segments = vec![b"abc".to_vec(), Vec::new(), b"def".to_vec(), Vec::new()];
        let mut iter = SegmentIter::new(&segments);

        let mut output = Vec::new();
        iter.reader().read_to_end(&mut output).unwrap();

        assert_eq!(output, b"abcdef");
    }

    #[test]
    fn buf_read_walks_segments() {
        let segments: [&[u8]; 3] = [b"ab", b"", b"cd"];
        let mut iter = SegmentIter::new(&segments);
        let mut reader = iter.reader();

        assert_eq!(reader.fill_buf().unwrap(), b"ab");
        reader.consume(1);
        assert_eq!(reader.fill_buf().unwrap(), b"b");
        reader.consume(1);
        assert_eq!(reader.fill_buf().unwrap(), b"cd");
        reader.consume(100);
        assert!(reader.fill_buf().unwrap().is_empty());
    }

    #[test]
    fn lines_across_segments() {
        let segments: [&[u8]; 3] = [b"first li", b"ne\nsec", b"ond line\n"];
        let mut iter = SegmentIter::new(&segments);

        let lines: Vec<String> = iter.reader().lines().map(Result::unwrap).collect();

        assert_eq!(lines, ["first line", "second line"]);
    }
}
