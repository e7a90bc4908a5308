//! The timing loop.
//!
//! [`Bench`] configures and runs a benchmark: `trials` independent
//! invocations of a callable, each timed with a monotonic clock, the elapsed
//! durations converted into the configured [`TimeScale`] and collected into a
//! [`BenchStats`].

use rayon::prelude::*;

use crate::config::Config;
use crate::measurement::{Clock, ClockSource};
use crate::scale::TimeScale;
use crate::stats::BenchStats;

/// Builder and runner for a benchmark.
///
/// # Example
///
/// ```ignore
/// use minibench::{Bench, TimeScale};
///
/// let stats = Bench::new()
///     .scale(TimeScale::Nano)
///     .run(1_000_000, || 1u64 + 2u64);
///
/// print!("{}", stats.report()?);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Bench {
    config: Config,
}

impl Bench {
    /// Create a runner with the default configuration: milliseconds, the
    /// steady clock, serial execution.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a runner from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the time scale samples are recorded in.
    pub fn scale(mut self, scale: TimeScale) -> Self {
        self.config.scale = scale;
        self
    }

    /// Set the monotonic clock source.
    pub fn clock(mut self, clock: ClockSource) -> Self {
        self.config.clock = clock;
        self
    }

    /// Distribute trials across rayon workers and reduce totals in parallel.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.config.parallel = enabled;
        self
    }

    /// The current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Time `trials` invocations of `f`.
    ///
    /// Return values are discarded (through `black_box`, so the work is not
    /// optimized away). A panic in `f` propagates out immediately; no partial
    /// result is produced.
    pub fn run<F, T>(&self, trials: usize, f: F) -> BenchStats
    where
        F: Fn() -> T + Sync,
    {
        self.run_with(trials, (), move |()| f())
    }

    /// Time `trials` invocations of `f`, passing each a fresh clone of `arg`.
    ///
    /// The clone happens outside the timed window, so argument setup does not
    /// pollute the measurement, and no state leaks from one trial into the
    /// next through the argument.
    pub fn run_with<A, F, T>(&self, trials: usize, arg: A, f: F) -> BenchStats
    where
        A: Clone + Sync,
        F: Fn(A) -> T + Sync,
    {
        let clock = Clock::new(self.config.clock);
        let scale = self.config.scale;

        let mut samples = vec![0.0f64; trials];
        // Each trial writes only its own slot, so the parallel path needs no
        // synchronization beyond the disjoint borrows par_iter_mut hands out.
        let trial = |slot: &mut f64| {
            let input = arg.clone();
            *slot = scale.from_secs(clock.time(|| f(input)));
        };

        if self.config.parallel {
            samples.par_iter_mut().for_each(&trial);
        } else {
            samples.iter_mut().for_each(&trial);
        }

        BenchStats::new(samples, scale).with_parallel_reduction(self.config.parallel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::black_box;

    fn spin() -> u64 {
        let mut acc = 0u64;
        for i in 0..500 {
            acc = acc.wrapping_add(black_box(i));
        }
        acc
    }

    #[test]
    fn sample_count_matches_trials() {
        let stats = Bench::new().run(25, spin);
        assert_eq!(stats.trials(), 25);
        assert_eq!(stats.samples().len(), 25);
    }

    #[test]
    fn samples_are_non_negative() {
        let stats = Bench::new().scale(TimeScale::Nano).run(50, spin);
        assert!(stats.samples().iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn zero_trials_yields_empty_sample_set() {
        let stats = Bench::new().run(0, spin);
        assert_eq!(stats.trials(), 0);
        assert!(stats.min().is_err());
    }

    #[test]
    fn parallel_run_fills_every_slot() {
        let stats = Bench::new()
            .parallel(true)
            .scale(TimeScale::Nano)
            .run(200, spin);
        assert_eq!(stats.trials(), 200);
        assert!(stats.samples().iter().all(|&s| s >= 0.0));
        assert!(stats.total().unwrap() >= 0.0);
    }

    #[test]
    fn run_with_clones_argument_per_trial() {
        let stats = Bench::new().run_with(10, vec![1u64, 2, 3], |v| {
            // Consuming the vec per trial is only possible on a fresh clone.
            v.into_iter().sum::<u64>()
        });
        assert_eq!(stats.trials(), 10);
    }

    #[test]
    fn cycle_clock_run() {
        let stats = Bench::new()
            .clock(ClockSource::Cycle)
            .scale(TimeScale::Micro)
            .run(20, spin);
        assert_eq!(stats.trials(), 20);
        assert!(stats.samples().iter().all(|&s| s >= 0.0));
    }

    #[test]
    #[should_panic(expected = "trial failure")]
    fn callable_panic_propagates() {
        let _ = Bench::new().run(5, || panic!("trial failure"));
    }
}
