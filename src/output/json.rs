//! JSON serialization of run summaries.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::stats::BenchStats;

/// A serializable summary of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Registry label of the scale the run was recorded in.
    pub unit: String,
    /// Number of trials.
    pub trials: usize,
    /// Sum of all sample durations.
    pub total: f64,
    /// Arithmetic mean of the sample durations.
    pub average: f64,
    /// Smallest sample duration.
    pub min: f64,
    /// Largest sample duration.
    pub max: f64,
}

impl Report {
    /// Build a summary from a run's statistics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySampleSet`] for a zero-trial run.
    pub fn from_stats(stats: &BenchStats) -> Result<Self, Error> {
        Ok(Self {
            unit: stats.unit().to_string(),
            trials: stats.trials(),
            total: stats.total()?,
            average: stats.average()?,
            min: stats.min()?,
            max: stats.max()?,
        })
    }
}

/// Serialize a run summary to a compact JSON string.
pub fn to_json(stats: &BenchStats) -> Result<String, Error> {
    Ok(serde_json::to_string(&Report::from_stats(stats)?)?)
}

/// Serialize a run summary to a pretty-printed JSON string.
pub fn to_json_pretty(stats: &BenchStats) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&Report::from_stats(stats)?)?)
}
