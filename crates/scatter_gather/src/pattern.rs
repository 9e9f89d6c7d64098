// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Fills every segment with a repeating `A..=Z` pattern.
///
/// Byte `j` of each segment becomes `b'A' + (j % 26)`. The pattern restarts in each segment, so
/// the result depends on how the sequence is split into segments. Zero-length segments are left
/// alone.
///
/// This is handy for producing recognizable payloads in tests and diagnostics.
///
/// # Examples
///
/// ```
/// let mut segments = vec![vec![0_u8; 3], Vec::new(), vec![0_u8; 28]];
///
/// scatter_gather::fill_pattern(&mut segments);
///
/// assert_eq!(segments[0], b"ABC");
/// assert_eq!(&segments[2][24..], b"YZAB");
/// ```
pub fn fill_pattern<T>(segments: &mut [T])
where
    T: AsMut<[u8]>,
{
    for segment in segments {
        for (byte, letter) in segment.as_mut().iter_mut().zip((b'A'..=b'Z').cycle()) {
            *byte = letter;
        }
    }
}
