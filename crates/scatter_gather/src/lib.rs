// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Iterate over and copy between scatter/gather lists of byte segments.
//!
//! A scatter/gather list (an "iovec list" in POSIX terms) is an ordered list of disjoint memory
//! segments that is addressed as one logical, contiguous byte sequence. Vectored I/O APIs
//! consume and produce data in this shape, and the segment boundaries of a producer rarely line
//! up with those of a consumer.
//!
//! This crate provides:
//!
//! * [`SegmentList`], an immutable view over a borrowed list of segments. Any segment type that
//!   implements [`AsRef<[u8]>`] works, e.g. `&[u8]`, `&mut [u8]` or `Vec<u8>`.
//! * [`SegmentIter`], which walks a list as one byte sequence and tracks a [`Cursor`] (segment
//!   index plus offset) as bytes are consumed. It can also be read through [`std::io::Read`]
//!   via [`SegmentIter::reader()`].
//! * [`validate_lengths()`] and [`validate_capacity()`], the checks that guard a copy.
//! * [`copy()`] and [`copy_with_options()`], which move the bytes of one list into another
//!   whose segment boundaries may differ.
//!
//! Zero-length segments are legal anywhere in a list and behave exactly as if they were not
//! there.
//!
//! # Copying between lists
//!
//! ```
//! use scatter_gather::{CopyOptions, copy_with_options};
//!
//! let source: [&[u8]; 3] = [b"0123456789", b"", b"ABCDEFGHIJKLMNO"];
//!
//! // The destination is split differently from the source.
//! let mut destination = vec![vec![0_u8; 4], Vec::new(), vec![0_u8; 21]];
//!
//! let options = CopyOptions::default().with_max_segment_length(64);
//! let copied = copy_with_options(&source, &mut destination, &options)?;
//!
//! assert_eq!(copied, 25);
//! assert_eq!(destination[0], b"0123");
//! assert_eq!(destination[2], b"456789ABCDEFGHIJKLMNO");
//! # Ok::<(), scatter_gather::Error>(())
//! ```
//!
//! Both lists are validated before any byte is written. If validation fails, the destination is
//! left untouched and the specific [`Error`] is returned.
//!
//! # Walking a list
//!
//! ```
//! use scatter_gather::SegmentIter;
//!
//! let segments: [&[u8]; 4] = [b"", b"Hello", b"", b", world"];
//! let mut iter = SegmentIter::new(&segments);
//!
//! iter.advance(7)?;
//! assert_eq!(iter.chunk(), b"world");
//! assert_eq!(iter.remaining_bytes(), 5);
//! # Ok::<(), scatter_gather::Error>(())
//! ```
//!
//! # Memory ownership
//!
//! Nothing in this crate allocates, frees or takes ownership of segment memory. Lists are
//! borrowed for the duration of each call: shared for sources and exclusively for
//! destinations, so a destination can never alias a source.
//!
//! # Logging
//!
//! Validation rejections and completed copies are reported as `tracing` events at `DEBUG`
//! level, individual copy steps at `TRACE` level. The crate never installs a subscriber.

#![doc(
    html_logo_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/scatter_gather/logo.png"
)]
#![doc(
    html_favicon_url = "https://media.githubusercontent.com/media/microsoft/oxidizer/refs/heads/main/crates/scatter_gather/favicon.ico"
)]

mod access;
mod copy;
mod cursor;
mod error;
mod options;
mod pattern;
mod reader;
mod segment;
mod segment_info;
mod validate;

pub use access::{get_byte, set_byte};
pub use copy::{copy, copy_with_options};
pub use cursor::{Cursor, SegmentIter};
pub use error::{Error, ErrorKind, Result};
pub use options::{CopyOptions, DEFAULT_MAX_SEGMENT_LENGTH};
pub use pattern::fill_pattern;
pub use reader::SegmentReader;
pub use segment::iter::Segments;
pub use segment::{SegmentList, total_len};
pub use segment_info::SegmentInfo;
pub use validate::{validate_capacity, validate_lengths};
