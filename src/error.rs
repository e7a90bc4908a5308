//! Library error type.

use thiserror::Error;

/// Errors surfaced by the harness.
#[derive(Debug, Error)]
pub enum Error {
    /// A statistic was requested on a run with zero trials.
    ///
    /// Minimum, maximum, total and average are undefined over an empty
    /// sample set; rather than returning a sentinel this is reported as an
    /// explicit error.
    #[error("empty sample set: statistics are undefined for zero trials")]
    EmptySampleSet,

    /// Serializing a report to JSON failed.
    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
