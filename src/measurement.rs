//! Measurements taken around the statistics computation.
//!
//! A [`Measurement`] is split into `start` and `end` calls: `start` produces an intermediate value
//! (for example the wall-clock time at the start of the window) and `end` turns it into the
//! measured value. [`WallTime`] measures elapsed time and [`AllocatedBytes`] the bytes allocated
//! in between, as counted by [`CountingAllocator`](crate::alloc::CountingAllocator).

use std::time::{Duration, Instant};

use crate::alloc;

/// Something that can be measured over a window of execution
pub trait Measurement {
    /// Produced by `start`, consumed by `end`
    type Intermediate;

    /// The measured value
    type Value;

    /// Opens the measurement window.
    fn start(&self) -> Self::Intermediate;

    /// Closes the window opened by `start` and returns the measured value.
    fn end(&self, i: Self::Intermediate) -> Self::Value;
}

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct WallTime;
impl Measurement for WallTime {
    type Intermediate = Instant;
    type Value = Duration;

    fn start(&self) -> Self::Intermediate {
        Instant::now()
    }
    fn end(&self, i: Self::Intermediate) -> Self::Value {
        i.elapsed()
    }
}

/// Bytes allocated through the counting allocator
#[derive(Debug, Default, Clone, Copy)]
pub struct AllocatedBytes;
impl Measurement for AllocatedBytes {
    type Intermediate = u64;
    type Value = u64;

    fn start(&self) -> Self::Intermediate {
        alloc::allocated()
    }
    fn end(&self, i: Self::Intermediate) -> Self::Value {
        alloc::allocated().saturating_sub(i)
    }
}

/// Runs `f` inside a time window and an allocation window
pub fn measure<T, F>(f: F) -> (T, Duration, u64)
where
    F: FnOnce() -> T,
{
    let memory = AllocatedBytes.start();
    let time = WallTime.start();

    let value = f();

    let elapsed = WallTime.end(time);
    let allocated = AllocatedBytes.end(memory);

    (value, elapsed, allocated)
}

/// Milliseconds, with microsecond resolution
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_micros() as f64 / 1000.0
}
