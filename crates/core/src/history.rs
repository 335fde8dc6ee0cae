//! Persisted progress snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::CategoryId;
use crate::Time;

/// A category's computed progress, captured for one calendar day.
///
/// Snapshots let the history views chart progress over time without
/// recomputing it from raw completions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Category the snapshot belongs to
    pub category_id: CategoryId,

    /// Day the snapshot was taken for
    pub record_date: NaiveDate,

    /// Completion fraction in [0, 1]
    pub progress_value: f64,

    /// Cumulative mode: the current value at snapshot time
    pub cumulative_value: Option<f64>,

    /// Decay score in [0, 1], when decay is enabled
    pub regularity_score: Option<f64>,

    /// When the snapshot was taken
    pub created_at: Time,
}
