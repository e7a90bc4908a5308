//! Configuration for benchmark runs.

use crate::measurement::ClockSource;
use crate::scale::TimeScale;

/// Configuration options for a [`Bench`](crate::Bench) run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Time scale the sample set is recorded in (default: milliseconds).
    pub scale: TimeScale,

    /// Monotonic clock source backing timestamp capture (default: `Steady`).
    pub clock: ClockSource,

    /// Distribute trials across rayon workers and use a parallel reduction
    /// for the total (default: false).
    ///
    /// This is a performance hint, never a correctness requirement: each
    /// trial writes only its own sample slot, so results differ from a
    /// serial run only by floating-point summation order and by whatever
    /// scheduling jitter the workers add to the measured durations.
    pub parallel: bool,
}
