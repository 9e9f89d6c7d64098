// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Fixtures for building segment lists in tests.

use fastrand::Rng;

/// Creates one zero-filled segment per entry in `lengths`.
#[must_use]
pub fn zeroed_segments(lengths: &[usize]) -> Vec<Vec<u8>> {
    lengths.iter().map(|&len| vec![0; len]).collect()
}

/// Creates one segment per entry in `parts`, holding the bytes of that string.
#[must_use]
pub fn text_segments(parts: &[&str]) -> Vec<Vec<u8>> {
    parts.iter().map(|part| part.as_bytes().to_vec()).collect()
}

/// Creates segments with the given lengths whose concatenation is a run of distinct-looking
/// bytes: logical byte `i` has the value `i % 251`.
///
/// The prime modulus keeps the sequence from lining up with power-of-two segment lengths, so
/// a byte copied to the wrong place is very likely to be noticed.
#[must_use]
pub fn numbered_segments(lengths: &[usize]) -> Vec<Vec<u8>> {
    let mut next = (0..=250_u8).cycle();

    lengths
        .iter()
        .map(|&len| next.by_ref().take(len).collect())
        .collect()
}

/// Concatenates the segments into a single vector.
#[must_use]
pub fn concat<T>(segments: &[T]) -> Vec<u8>
where
    T: AsRef<[u8]>,
{
    segments.iter().flat_map(|segment| segment.as_ref().iter().copied()).collect()
}

/// Splits `total` bytes into a random list of segment lengths.
///
/// Roughly one segment in four is zero-length, and zero-length segments may appear at the start,
/// in the middle (also consecutively) and at the end. The lengths always add up to `total`.
///
/// Use a seeded [`Rng`] so failures can be reproduced.
#[must_use]
pub fn random_lengths(rng: &mut Rng, total: usize) -> Vec<usize> {
    let mut lengths = Vec::new();
    let mut left = total;

    loop {
        if rng.u8(0..4) == 0 {
            lengths.push(0);
            continue;
        }

        if left == 0 {
            break;
        }

        let len = rng.usize(1..=left);
        lengths.push(len);
        left -= len;
    }

    lengths
}

/// Returns a copy of `lengths` with every zero-length entry removed.
#[must_use]
pub fn without_zeros(lengths: &[usize]) -> Vec<usize> {
    lengths.iter().copied().filter(|&len| len != 0).collect()
}
