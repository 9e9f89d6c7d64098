// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Copies a three-segment list into a destination of the same shape.
//!
//! 1. We allocate source and destination lists of 10, 0 and 15 bytes.
//! 2. We print where each source segment lives.
//! 3. We validate both lists, fill the source with a letter pattern and copy it.
//! 4. We report whether the operation succeeded.

use scatter_gather::{CopyOptions, SegmentList, copy_with_options, fill_pattern, validate_lengths};
use tracing::Level;

const SEGMENT_LENGTHS: [usize; 3] = [10, 0, 15];

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let mut source: Vec<Vec<u8>> = SEGMENT_LENGTHS.iter().map(|&len| vec![0; len]).collect();
    let mut destination: Vec<Vec<u8>> = SEGMENT_LENGTHS.iter().map(|&len| vec![0; len]).collect();

    for info in SegmentList::new(&source).describe() {
        println!("{info}");
    }

    match perform_io_operation(&mut source, &mut destination, &CopyOptions::default()) {
        Ok(copied) => {
            println!("Operation successful ({copied} bytes copied)");

            for segment in &destination {
                println!("  {}", String::from_utf8_lossy(segment));
            }
        }
        Err(error) => println!("Operation failed: {error}"),
    }
}

fn perform_io_operation(
    source: &mut [Vec<u8>],
    destination: &mut [Vec<u8>],
    options: &CopyOptions,
) -> scatter_gather::Result<usize> {
    validate_lengths(source, options.max_segment_length())?;
    validate_lengths(destination, options.max_segment_length())?;

    fill_pattern(source);

    copy_with_options(source, destination, options)
}
