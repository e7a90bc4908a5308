//! Human-readable report rendering.

use crate::error::Error;
use crate::stats::BenchStats;

/// Render the four-line summary report for a run.
///
/// The format is fixed:
///
/// ```text
///     Total: <total><label>s (N = <trials>)
///   Average: <average><label>s
///       Min: <min><label>s
///       Max: <max><label>s
/// ```
///
/// Numbers use Rust's default `f64` formatting; `<label>` is the scale's
/// registry label (empty for plain seconds, so the base scale reads `12.5s`).
///
/// # Errors
///
/// Returns [`Error::EmptySampleSet`] for a zero-trial run.
pub fn render(stats: &BenchStats) -> Result<String, Error> {
    let unit = stats.unit();
    let mut out = String::new();

    out.push_str(&format!(
        "    Total: {}{}s (N = {})\n",
        stats.total()?,
        unit,
        stats.trials()
    ));
    out.push_str(&format!("  Average: {}{}s\n", stats.average()?, unit));
    out.push_str(&format!("      Min: {}{}s\n", stats.min()?, unit));
    out.push_str(&format!("      Max: {}{}s\n", stats.max()?, unit));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::TimeScale;

    #[test]
    fn exact_format() {
        let stats = BenchStats::new(vec![1.0, 5.0, 3.0], TimeScale::Milli);
        let report = render(&stats).unwrap();
        assert_eq!(
            report,
            "    Total: 9ms (N = 3)\n  Average: 3ms\n      Min: 1ms\n      Max: 5ms\n"
        );
    }

    #[test]
    fn base_scale_has_no_prefix() {
        let stats = BenchStats::new(vec![2.5], TimeScale::Unit);
        let report = render(&stats).unwrap();
        assert!(report.contains("Total: 2.5s (N = 1)"), "{}", report);
    }

    #[test]
    fn empty_run_errors() {
        let stats = BenchStats::new(Vec::new(), TimeScale::Milli);
        assert!(matches!(render(&stats), Err(Error::EmptySampleSet)));
    }
}
