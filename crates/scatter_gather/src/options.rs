// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// The maximum segment length accepted by [`CopyOptions::default()`], in bytes.
pub const DEFAULT_MAX_SEGMENT_LENGTH: usize = 1_000_000;

/// Tunes the checks that [`copy_with_options()`][crate::copy_with_options] performs before
/// moving any bytes.
///
/// # Serialization and deserialization
///
/// With the `serde` feature enabled, `CopyOptions` implements the `Serialize` and `Deserialize`
/// traits from the `serde` crate. Fields missing from the input take their default values.
///
/// # Examples
///
/// ```
/// use scatter_gather::{CopyOptions, DEFAULT_MAX_SEGMENT_LENGTH};
///
/// let options = CopyOptions::default();
/// assert_eq!(options.max_segment_length(), DEFAULT_MAX_SEGMENT_LENGTH);
///
/// let options = options.with_max_segment_length(64 * 1024);
/// assert_eq!(options.max_segment_length(), 65_536);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
pub struct CopyOptions {
    max_segment_length: usize,
}

impl CopyOptions {
    /// Sets the largest segment, in bytes, that may appear in either the source or the
    /// destination list.
    #[must_use]
    pub const fn with_max_segment_length(mut self, max_segment_length: usize) -> Self {
        self.max_segment_length = max_segment_length;
        self
    }

    /// The largest segment, in bytes, that may appear in either list.
    #[must_use]
    pub const fn max_segment_length(&self) -> usize {
        self.max_segment_length
    }
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
        }
    }
}
