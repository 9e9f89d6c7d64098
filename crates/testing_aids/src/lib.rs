// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! An unpublished crate containing testing utilities for use within this repo.

use std::sync::mpsc;
use std::time::Duration;
use std::{env, thread};

mod log;
mod segments;

pub use log::*;
pub use segments::*;

/// If something (whatever) does not happen in a test within this time, the test will fail.
///
/// We are conservative here and allow much time - this is only to break out of infinite loops, not for any
/// situations that are actually expected.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Whether the current process is running under `cargo mutants` (signaled via the
/// `MUTATION_TESTING=1` environment variable).
#[must_use]
pub fn is_mutation_testing() -> bool {
    env::var("MUTATION_TESTING").as_deref() == Ok("1")
}

/// Executes a thread-safe function on a background thread and abandons it if
/// it does not complete before [`TEST_TIMEOUT`].
///
/// Returns `None` if the function timed out or panicked. This turns a hang (e.g. an iteration
/// that never terminates) into an ordinary test failure.
///
/// # Panics
///
/// Panics if the background thread cannot be started.
#[cfg_attr(test, mutants::skip)] // This is test logic - pointless to mutate.
#[must_use]
pub fn execute_or_abandon<F, R>(f: F) -> Option<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    if is_mutation_testing() {
        // Timeouts must surface as real "timeout" mutation results, not as test failures.
        return Some(f());
    }

    let (sender, receiver) = mpsc::channel();

    // If the function hangs or panics, the result is never sent and the channel breaks or
    // times out. Either way we get an error from recv_timeout.
    thread::Builder::new()
        .name("test worker".to_string())
        .spawn(move || {
            let result = f();
            _ = sender.send(result);
        })
        .expect("failed to start test worker thread");

    receiver.recv_timeout(TEST_TIMEOUT).ok()
}
