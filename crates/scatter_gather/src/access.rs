// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Bounds-checked access to individual bytes by their logical offset.

use crate::{Cursor, Error, Result};

/// Reads the byte at logical `offset` of the sequence formed by `segments`.
///
/// # Errors
///
/// Returns [`Error::Overrun`] if `offset` is not less than the total length of `segments`.
///
/// # Examples
///
/// ```
/// use scatter_gather::get_byte;
///
/// let segments: [&[u8]; 3] = [b"abc", b"", b"def"];
///
/// assert_eq!(get_byte(&segments, 4)?, b'e');
/// get_byte(&segments, 6).unwrap_err();
/// # Ok::<(), scatter_gather::Error>(())
/// ```
pub fn get_byte<T>(segments: &[T], offset: usize) -> Result<u8>
where
    T: AsRef<[u8]>,
{
    let cursor = locate(segments, offset)?;

    cursor
        .chunk(segments)
        .first()
        .copied()
        .ok_or_else(|| past_end(segments, offset))
}

/// Overwrites the byte at logical `offset` of the sequence formed by `segments`.
///
/// Nothing is written if the offset is out of bounds.
///
/// # Errors
///
/// Returns [`Error::Overrun`] if `offset` is not less than the total length of `segments`.
pub fn set_byte<T>(segments: &mut [T], offset: usize, value: u8) -> Result<()>
where
    T: AsRef<[u8]> + AsMut<[u8]>,
{
    let cursor = locate(segments, offset)?;

    match cursor.chunk_mut(segments).first_mut() {
        Some(byte) => {
            *byte = value;
            Ok(())
        }
        None => Err(past_end(segments, offset)),
    }
}

fn locate<T>(segments: &[T], offset: usize) -> Result<Cursor>
where
    T: AsRef<[u8]>,
{
    let mut cursor = Cursor::new(segments);

    cursor
        .advance(segments, offset)
        .map_err(|_overrun| past_end(segments, offset))?;

    Ok(cursor)
}

fn past_end<T>(segments: &[T], offset: usize) -> Error
where
    T: AsRef<[u8]>,
{
    Error::Overrun {
        requested: offset.saturating_add(1),
        available: Cursor::new(segments).remaining_bytes(segments),
    }
}
