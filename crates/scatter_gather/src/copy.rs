// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use tracing::{Level, event};

use crate::{CopyOptions, Cursor, Error, Result, SegmentIter, validate_capacity, validate_lengths};

/// Copies the logical byte sequence of `source` into `destination`, using the default
/// [`CopyOptions`].
///
/// See [`copy_with_options()`] for details.
///
/// # Errors
///
/// See [`copy_with_options()`].
///
/// # Examples
///
/// ```
/// let source: [&[u8]; 3] = [b"0123456789", b"", b"ABCDEFGHIJKLMNO"];
/// let mut destination = vec![vec![0_u8; 10], Vec::new(), vec![0_u8; 15]];
///
/// let copied = scatter_gather::copy(&source, &mut destination)?;
///
/// assert_eq!(copied, 25);
/// assert_eq!(destination[0], b"0123456789");
/// assert_eq!(destination[2], b"ABCDEFGHIJKLMNO");
/// # Ok::<(), scatter_gather::Error>(())
/// ```
pub fn copy<S, D>(source: &[S], destination: &mut [D]) -> Result<usize>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    copy_with_options(source, destination, &CopyOptions::default())
}

/// Copies the logical byte sequence of `source` into `destination`.
///
/// The two lists are treated as concatenations of their segments. Segment boundaries on
/// either side do not need to line up and zero-length segments may appear anywhere. The first
/// `source` total length bytes of `destination` are overwritten; any remaining destination
/// bytes are left as they were. `source` is never modified.
///
/// Both lists are validated before a single byte is written, so a failed call leaves
/// `destination` untouched. Because `destination` is borrowed exclusively, it cannot alias
/// `source`.
///
/// Returns the number of bytes copied, which equals the total length of `source`.
///
/// # Errors
///
/// * [`Error::SegmentTooLarge`] if a segment in either list exceeds
///   [`CopyOptions::max_segment_length()`]. The source is checked first.
/// * [`Error::Overflow`] if either total length does not fit into `usize`.
/// * [`Error::InsufficientCapacity`] if `source` holds more bytes than `destination`.
pub fn copy_with_options<S, D>(source: &[S], destination: &mut [D], options: &CopyOptions) -> Result<usize>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    validate_lengths(source, options.max_segment_length())?;
    validate_lengths(destination, options.max_segment_length())?;
    validate_capacity(source, destination)?;

    let mut reader = SegmentIter::new(source);
    let mut writer = Cursor::new(destination);
    let mut copied = 0_usize;

    while !reader.is_exhausted() {
        let from = reader.chunk();
        let to = writer.chunk_mut(destination);

        let count = from.len().min(to.len());

        if count == 0 {
            // Validation guarantees capacity, so the destination cannot run dry first.
            return Err(Error::Overrun {
                requested: reader.remaining_bytes(),
                available: 0,
            });
        }

        to[..count].copy_from_slice(&from[..count]);

        event!(
            Level::TRACE,
            message = "copied chunk",
            count,
            source_segment = reader.position().index(),
            destination_segment = writer.index()
        );

        reader.advance(count)?;
        writer.advance(destination, count)?;
        copied += count;
    }

    event!(
        Level::DEBUG,
        message = "segment list copy complete",
        copied,
        source_segments = source.len(),
        destination_segments = destination.len()
    );

    Ok(copied)
}
