//! Wall-clock timing for measuring how long a piece of work took.

use core::time::Duration;
use std::time::Instant;

/// Measures wall-clock time since it was started or last reset.
///
/// # Examples
///
/// ```
/// use fastfmt::Stopwatch;
///
/// let mut watch = Stopwatch::new();
/// let report = fastfmt::format!("{} items", 3).unwrap();
/// fastfmt::println_fmt!("{} in {}ms", report, watch.elapsed_millis()).unwrap();
/// watch.reset();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    /// When timing started
    start: Instant,
}

impl Stopwatch {
    /// Starts a new stopwatch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time passed since the stopwatch was started or reset.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time passed since the stopwatch was started or reset, in whole
    /// milliseconds.
    #[must_use]
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed().as_millis()
    }

    /// Restarts timing from now.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
