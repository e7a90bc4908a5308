//! # minibench
//!
//! A small wall-clock micro-benchmark harness: run a callable a fixed number
//! of times, record each invocation's duration, and read off summary
//! statistics (total, average, minimum, maximum) in the time unit of your
//! choice.
//!
//! This is a profiling aid for small, hot functions. It deliberately does
//! *not* warm caches, pin threads, reject outliers, or compute anything
//! fancier than min/max/mean/sum — whatever your machine does during a trial
//! is part of the measurement.
//!
//! ## Quick start
//!
//! ```ignore
//! use minibench::{bench_in, TimeScale};
//!
//! let stats = bench_in(TimeScale::Nano, 1_000_000, || {
//!     std::hint::black_box(1u64) + std::hint::black_box(2u64)
//! });
//!
//! print!("{}", stats.report()?);
//! //     Total: 31521847ns (N = 1000000)
//! //   Average: 31.521847ns
//! //       Min: 20ns
//! //       Max: 1193ns
//! ```
//!
//! ## Configuration
//!
//! [`Bench`] is the configurable entry point. The time scale defaults to
//! milliseconds, timestamps come from the steady clock by default (a
//! calibrated CPU cycle counter is available via [`ClockSource::Cycle`]),
//! and trials run serially unless `parallel(true)` distributes them across
//! rayon workers:
//!
//! ```ignore
//! use minibench::{Bench, ClockSource, TimeScale};
//!
//! let stats = Bench::new()
//!     .scale(TimeScale::Micro)
//!     .clock(ClockSource::Cycle)
//!     .parallel(true)
//!     .run(10_000, || my_hot_function());
//! ```
//!
//! Arguments can be handed to the callable as a fresh clone per trial with
//! [`Bench::run_with`], so no state leaks between trials.
//!
//! ## Zero-trial runs
//!
//! Statistics over an empty sample set are undefined; every accessor returns
//! [`Error::EmptySampleSet`] for a zero-trial run rather than a sentinel.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bench;
mod config;
mod error;
mod scale;
mod stats;

pub mod measurement;
pub mod output;

pub use bench::Bench;
pub use config::Config;
pub use error::Error;
pub use measurement::{black_box, Clock, ClockSource};
pub use output::Report;
pub use scale::TimeScale;
pub use stats::BenchStats;

/// Time `trials` invocations of `f` in the default scale (milliseconds).
///
/// Shorthand for `Bench::new().run(trials, f)`.
pub fn bench<F, T>(trials: usize, f: F) -> BenchStats
where
    F: Fn() -> T + Sync,
{
    Bench::new().run(trials, f)
}

/// Time `trials` invocations of `f`, recording samples in `scale`'s unit.
///
/// Shorthand for `Bench::new().scale(scale).run(trials, f)`.
pub fn bench_in<F, T>(scale: TimeScale, trials: usize, f: F) -> BenchStats
where
    F: Fn() -> T + Sync,
{
    Bench::new().scale(scale).run(trials, f)
}
