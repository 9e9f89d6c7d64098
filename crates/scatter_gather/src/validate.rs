// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use tracing::{Level, event};

use crate::{Error, Result, total_len};

/// Checks that no segment in `segments` is longer than `max_segment_length` bytes.
///
/// Zero-length segments always pass.
///
/// # Errors
///
/// Returns [`Error::SegmentTooLarge`] for the first segment that exceeds the limit.
pub fn validate_lengths<T>(segments: &[T], max_segment_length: usize) -> Result<()>
where
    T: AsRef<[u8]>,
{
    let oversized = segments
        .iter()
        .map(|segment| segment.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len > max_segment_length);

    match oversized {
        None => Ok(()),
        Some((index, len)) => {
            event!(Level::DEBUG, message = "segment exceeds maximum length", index, len, max = max_segment_length);

            Err(Error::SegmentTooLarge {
                index,
                len,
                max: max_segment_length,
            })
        }
    }
}

/// Checks that `destination` is large enough to receive every byte of `source`.
///
/// Segment boundaries do not matter, only the total lengths are compared.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if either total does not fit into `usize` and
/// [`Error::InsufficientCapacity`] if the source total exceeds the destination total.
pub fn validate_capacity<S, D>(source: &[S], destination: &[D]) -> Result<()>
where
    S: AsRef<[u8]>,
    D: AsRef<[u8]>,
{
    let required = total_len(source)?;
    let available = total_len(destination)?;

    if required > available {
        event!(Level::DEBUG, message = "destination too small for source", required, available);

        return Err(Error::InsufficientCapacity { required, available });
    }

    Ok(())
}
