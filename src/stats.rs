//! Summary statistics over a completed run.
//!
//! [`BenchStats`] owns the sample set produced by the timing loop and
//! derives four statistics from it lazily: minimum and maximum share one
//! linear scan, total and average share another. Each pair is computed on
//! first access and cached, so repeat reads return bit-identical values
//! without touching the sample set again.

use std::sync::OnceLock;

use rayon::prelude::*;

use crate::error::Error;
use crate::scale::TimeScale;

/// The sample set of a benchmark run plus its lazily-computed statistics.
///
/// Sample `i` holds trial `i`'s measured duration, in the unit of the scale
/// the run was configured with. The samples are immutable once the run
/// completes; the only interior mutation is the one-time population of each
/// statistic cache.
///
/// All four accessors report [`Error::EmptySampleSet`] on a zero-trial run
/// instead of returning a sentinel.
#[derive(Debug)]
pub struct BenchStats {
    samples: Vec<f64>,
    scale: TimeScale,
    parallel_reduction: bool,
    /// (min, max), one scan, ties to the leftmost occurrence.
    extrema: OnceLock<(f64, f64)>,
    /// (total, average), one pass.
    sums: OnceLock<(f64, f64)>,
}

impl BenchStats {
    /// Wrap a sample set recorded in `scale`'s unit.
    ///
    /// Public so statistics can be exercised on synthetic sample sets; the
    /// timing loop is the usual producer.
    pub fn new(samples: Vec<f64>, scale: TimeScale) -> Self {
        Self {
            samples,
            scale,
            parallel_reduction: false,
            extrema: OnceLock::new(),
            sums: OnceLock::new(),
        }
    }

    /// Select a rayon parallel reduction for the total.
    ///
    /// Floating-point addition is not associative, so the parallel total (and
    /// hence the average) is only approximately equal to the serial one.
    pub fn with_parallel_reduction(mut self, enabled: bool) -> Self {
        self.parallel_reduction = enabled;
        self
    }

    /// The per-trial durations, in insertion order by trial index.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of trials in the run.
    pub fn trials(&self) -> usize {
        self.samples.len()
    }

    /// The scale the samples were recorded in.
    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    /// The scale's display label (`"m"` for the default milliseconds).
    pub fn unit(&self) -> &'static str {
        self.scale.label()
    }

    /// Smallest measured duration.
    pub fn min(&self) -> Result<f64, Error> {
        Ok(self.extrema()?.0)
    }

    /// Largest measured duration.
    pub fn max(&self) -> Result<f64, Error> {
        Ok(self.extrema()?.1)
    }

    /// Sum of all measured durations.
    pub fn total(&self) -> Result<f64, Error> {
        Ok(self.totals()?.0)
    }

    /// Arithmetic mean of the measured durations.
    pub fn average(&self) -> Result<f64, Error> {
        Ok(self.totals()?.1)
    }

    /// Render the four-line report for this run.
    ///
    /// Convenience delegate to [`crate::output::terminal::render`].
    pub fn report(&self) -> Result<String, Error> {
        crate::output::terminal::render(self)
    }

    fn extrema(&self) -> Result<(f64, f64), Error> {
        if self.samples.is_empty() {
            return Err(Error::EmptySampleSet);
        }
        Ok(*self.extrema.get_or_init(|| {
            let mut lo = self.samples[0];
            let mut hi = self.samples[0];
            for &s in &self.samples[1..] {
                if s < lo {
                    lo = s;
                }
                if s > hi {
                    hi = s;
                }
            }
            (lo, hi)
        }))
    }

    fn totals(&self) -> Result<(f64, f64), Error> {
        if self.samples.is_empty() {
            return Err(Error::EmptySampleSet);
        }
        Ok(*self.sums.get_or_init(|| {
            let total: f64 = if self.parallel_reduction {
                self.samples.par_iter().sum()
            } else {
                self.samples.iter().sum()
            };
            (total, total / self.samples.len() as f64)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(samples: &[f64]) -> BenchStats {
        BenchStats::new(samples.to_vec(), TimeScale::Milli)
    }

    #[test]
    fn mixed_samples() {
        let s = stats(&[1.0, 5.0, 3.0]);
        assert_eq!(s.total().unwrap(), 9.0);
        assert_eq!(s.average().unwrap(), 3.0);
        assert_eq!(s.min().unwrap(), 1.0);
        assert_eq!(s.max().unwrap(), 5.0);
    }

    #[test]
    fn constant_samples() {
        let s = stats(&[10.0; 5]);
        assert_eq!(s.total().unwrap(), 50.0);
        assert_eq!(s.average().unwrap(), 10.0);
        assert_eq!(s.min().unwrap(), 10.0);
        assert_eq!(s.max().unwrap(), 10.0);
    }

    #[test]
    fn repeat_reads_are_bit_identical() {
        let s = stats(&[0.1, 0.2, 0.3]);
        let first = s.min().unwrap();
        let again = s.min().unwrap();
        assert_eq!(first.to_bits(), again.to_bits());

        let t1 = s.total().unwrap();
        let t2 = s.total().unwrap();
        assert_eq!(t1.to_bits(), t2.to_bits());
    }

    #[test]
    fn accessor_order_does_not_matter() {
        let a = stats(&[2.0, 4.0, 6.0]);
        let avg_first = a.average().unwrap();
        let total_after = a.total().unwrap();

        let b = stats(&[2.0, 4.0, 6.0]);
        let total_first = b.total().unwrap();
        let avg_after = b.average().unwrap();

        assert_eq!(avg_first.to_bits(), avg_after.to_bits());
        assert_eq!(total_after.to_bits(), total_first.to_bits());
    }

    #[test]
    fn extrema_are_actual_samples() {
        let samples = [3.5, 0.25, 7.75, 0.25, 7.75];
        let s = stats(&samples);
        assert!(samples.contains(&s.min().unwrap()));
        assert!(samples.contains(&s.max().unwrap()));
    }

    #[test]
    fn empty_sample_set_is_a_checked_error() {
        let s = stats(&[]);
        assert!(matches!(s.min(), Err(Error::EmptySampleSet)));
        assert!(matches!(s.max(), Err(Error::EmptySampleSet)));
        assert!(matches!(s.total(), Err(Error::EmptySampleSet)));
        assert!(matches!(s.average(), Err(Error::EmptySampleSet)));
    }

    #[test]
    fn parallel_reduction_agrees_with_serial() {
        let samples: Vec<f64> = (0..10_000).map(|i| (i % 97) as f64 * 0.013).collect();
        let serial = BenchStats::new(samples.clone(), TimeScale::Micro);
        let parallel =
            BenchStats::new(samples, TimeScale::Micro).with_parallel_reduction(true);

        let a = serial.total().unwrap();
        let b = parallel.total().unwrap();
        assert!(
            (a - b).abs() <= a.abs() * 1e-9,
            "serial {} vs parallel {}",
            a,
            b
        );
    }
}
