//! Student records and the above-threshold query.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::dataset::StudentSource;
use crate::error::CoreError;

/// A student as stored in the dataset.
///
/// Only `name` and `total` are read; any other fields in the source are
/// ignored. `total` keeps the dataset's numeric representation so an
/// integer total is echoed back as an integer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub total: Number,
}

impl StudentRecord {
    /// Whether this student's total is strictly greater than `threshold`.
    pub fn is_above(&self, threshold: f64) -> bool {
        self.total.as_f64().is_some_and(|total| total > threshold)
    }
}

/// Projection of a [`StudentRecord`] returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub total: Number,
}

impl From<&StudentRecord> for StudentSummary {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            total: record.total.clone(),
        }
    }
}

/// Result of an above-threshold query.
///
/// Construct with [`ThresholdResponse::from_matches`] so `count` always
/// equals `students.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdResponse {
    pub count: usize,
    pub students: Vec<StudentSummary>,
}

impl ThresholdResponse {
    pub fn from_matches(students: Vec<StudentSummary>) -> Self {
        Self {
            count: students.len(),
            students,
        }
    }
}

/// Select every record with `total > threshold`, preserving dataset order.
pub fn filter_above_threshold(records: &[StudentRecord], threshold: f64) -> Vec<StudentSummary> {
    records
        .iter()
        .filter(|record| record.is_above(threshold))
        .map(StudentSummary::from)
        .collect()
}

/// Load the dataset from `source` and answer the query for `threshold`.
///
/// The caller validates `threshold` first; this never touches the source
/// for a request that was already rejected.
pub async fn students_above_threshold(
    source: &dyn StudentSource,
    threshold: f64,
) -> Result<ThresholdResponse, CoreError> {
    let records = source.load().await?;
    let matches = filter_above_threshold(&records, threshold);

    tracing::debug!(
        threshold,
        scanned = records.len(),
        matched = matches.len(),
        "Filtered students above threshold",
    );

    Ok(ThresholdResponse::from_matches(matches))
}
