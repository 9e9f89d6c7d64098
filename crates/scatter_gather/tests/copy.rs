// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "This is a test module")]

//! Integration tests for copying between segment lists using only the public API.

use fastrand::Rng;
use rstest::rstest;
use scatter_gather::{CopyOptions, Error, ErrorKind, copy, copy_with_options, fill_pattern, total_len, validate_lengths};
use testing_aids::{
    LogCapture, concat, execute_or_abandon, log_to_stdout, numbered_segments, random_lengths, text_segments, without_zeros,
    zeroed_segments,
};

#[test]
fn reference_scenario() {
    log_to_stdout();

    let source = text_segments(&["0123456789", "", "ABCDEFGHIJKLMNO"]);
    let mut destination = zeroed_segments(&[10, 0, 15]);

    let copied = copy(&source, &mut destination).unwrap();

    assert_eq!(copied, 25);
    assert_eq!(destination[0], b"0123456789");
    assert!(destination[1].is_empty());
    assert_eq!(destination[2], b"ABCDEFGHIJKLMNO");
    assert_eq!(source, text_segments(&["0123456789", "", "ABCDEFGHIJKLMNO"]));
}

#[rstest]
#[case::same_shape(&[4, 4], &[4, 4])]
#[case::one_to_many(&[9], &[2, 3, 4])]
#[case::many_to_one(&[2, 3, 4], &[9])]
#[case::larger_destination(&[5], &[3, 0, 10])]
#[case::zeros_everywhere(&[0, 3, 0, 0, 2, 0], &[0, 0, 1, 4, 0])]
#[case::trailing_zero_source(&[10, 0], &[10])]
#[case::trailing_zero_destination(&[10], &[10, 0])]
#[case::empty_source(&[], &[3])]
#[case::empty_both(&[], &[])]
fn copies_regardless_of_partitioning(#[case] source_lengths: &'static [usize], #[case] destination_lengths: &'static [usize]) {
    log_to_stdout();

    let result = execute_or_abandon(move || {
        let source = numbered_segments(source_lengths);
        let mut destination = zeroed_segments(destination_lengths);

        let copied = copy(&source, &mut destination).unwrap();

        (concat(&source), concat(&destination), copied)
    });

    let (expected, actual, copied) = result.expect("copy did not finish");

    assert_eq!(copied, expected.len());
    assert_eq!(&actual[..copied], &expected[..]);
    assert!(actual[copied..].iter().all(|&byte| byte == 0));
}

#[test]
fn random_partitions_round_trip() {
    log_to_stdout();

    let mut rng = Rng::with_seed(0xC0FFEE);

    for _ in 0..300 {
        let total = rng.usize(0..128);
        let slack = rng.usize(0..8);

        let source_lengths = random_lengths(&mut rng, total);
        let destination_lengths = random_lengths(&mut rng, total + slack);

        let source = numbered_segments(&source_lengths);
        let mut destination = zeroed_segments(&destination_lengths);

        let copied = copy(&source, &mut destination).unwrap();

        let actual = concat(&destination);
        assert_eq!(copied, total);
        assert_eq!(
            &actual[..total],
            &concat(&source)[..],
            "source {source_lengths:?}, destination {destination_lengths:?}"
        );
        assert!(actual[total..].iter().all(|&byte| byte == 0));
    }
}

#[test]
fn zero_length_segments_do_not_change_result() {
    log_to_stdout();

    let mut rng = Rng::with_seed(99);

    for _ in 0..100 {
        let total = rng.usize(0..64);
        let source_lengths = random_lengths(&mut rng, total);
        let destination_lengths = random_lengths(&mut rng, total);

        let mut with_zeros = zeroed_segments(&destination_lengths);
        let mut stripped = zeroed_segments(&without_zeros(&destination_lengths));

        let a = copy(&numbered_segments(&source_lengths), &mut with_zeros).unwrap();
        let b = copy(&numbered_segments(&without_zeros(&source_lengths)), &mut stripped).unwrap();

        assert_eq!(a, b);
        assert_eq!(concat(&with_zeros), concat(&stripped));
    }
}

#[test]
fn insufficient_capacity_performs_no_writes() {
    log_to_stdout();

    let mut rng = Rng::with_seed(5);

    for _ in 0..100 {
        let total = rng.usize(1..64);
        let shortfall = rng.usize(1..=total);

        let source = numbered_segments(&random_lengths(&mut rng, total));
        let mut destination = zeroed_segments(&random_lengths(&mut rng, total - shortfall));
        for segment in &mut destination {
            segment.fill(0xAA);
        }

        let error = copy(&source, &mut destination).unwrap_err();

        assert_eq!(
            error,
            Error::InsufficientCapacity {
                required: total,
                available: total - shortfall,
            }
        );
        assert!(concat(&destination).iter().all(|&byte| byte == 0xAA));
    }
}

#[test]
fn configured_segment_limit_applies_to_both_lists() {
    log_to_stdout();

    let options = CopyOptions::default().with_max_segment_length(8);

    let source = numbered_segments(&[8, 8]);
    let mut destination = zeroed_segments(&[16]);
    let error = copy_with_options(&source, &mut destination, &options).unwrap_err();
    assert_eq!(error, Error::SegmentTooLarge { index: 0, len: 16, max: 8 });

    let mut destination = zeroed_segments(&[8, 0, 8]);
    assert_eq!(copy_with_options(&source, &mut destination, &options).unwrap(), 16);
}

#[test]
fn demo_flow_validates_fills_and_copies() {
    log_to_stdout();

    let mut source = zeroed_segments(&[10, 0, 15]);
    let mut destination = zeroed_segments(&[10, 0, 15]);
    let max = CopyOptions::default().max_segment_length();

    validate_lengths(&source, max).unwrap();
    validate_lengths(&destination, max).unwrap();
    fill_pattern(&mut source);

    let copied = copy(&source, &mut destination).unwrap();

    assert_eq!(copied, total_len(&source).unwrap());
    assert_eq!(destination[0], b"ABCDEFGHIJ");
    assert_eq!(destination[2], b"ABCDEFGHIJKLMNO");
}

#[test]
fn copy_reports_through_tracing() {
    log_to_stdout();

    let capture = LogCapture::new();

    tracing::subscriber::with_default(capture.subscriber(), || {
        let source = text_segments(&["abc", "", "de"]);
        let mut destination = zeroed_segments(&[1, 4]);
        copy(&source, &mut destination).unwrap();

        let mut too_small = zeroed_segments(&[1]);
        assert_eq!(copy(&source, &mut too_small).unwrap_err().kind(), ErrorKind::InsufficientCapacity);
    });

    capture.assert_contains("segment list copy complete");
    capture.assert_contains("copied=5");
    capture.assert_contains("destination too small for source");
}
