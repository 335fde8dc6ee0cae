//! Completion log - toggling daily completions on top of a storage backend.

use chrono::{Duration, NaiveTime};
use tracing::debug;

use stride_core::{CompletionRecord, ObjectiveId, Time};

use super::{CompletionFilter, Result, Storage};

/// Completion toggle service.
///
/// Completing inserts a fresh record; un-completing looks up the most recent
/// record of the current day and then deletes it. Lookup and delete are two
/// separate storage operations, with no transaction around them.
pub struct CompletionLog<S> {
    storage: S,
}

impl<S: Storage> CompletionLog<S> {
    /// Wrap a storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Give the backend back.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Record that `objective_id` was completed at `now`.
    pub async fn complete(
        &mut self,
        objective_id: ObjectiveId,
        value: Option<f64>,
        notes: Option<String>,
        now: Time,
    ) -> Result<CompletionRecord> {
        let mut record = CompletionRecord::new(objective_id, now);
        record.value = value;
        record.notes = notes;

        self.storage.record_completion(&record).await?;
        debug!(objective = %objective_id, completion = %record.id, "recorded completion");
        Ok(record)
    }

    /// Remove the most recent completion of `objective_id` for `now`'s day.
    ///
    /// Returns the deleted record, or `None` when the day has no completion
    /// for that objective.
    pub async fn uncomplete(
        &mut self,
        objective_id: ObjectiveId,
        now: Time,
    ) -> Result<Option<CompletionRecord>> {
        let day_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let filter = CompletionFilter {
            objective_id: Some(objective_id),
            since: Some(day_start),
            until: Some(day_start + Duration::days(1)),
        };

        let today = self.storage.list_completions(&filter).await?;
        let Some(record) = today.into_iter().next() else {
            return Ok(None);
        };

        self.storage.delete_completion(record.id).await?;
        debug!(objective = %objective_id, completion = %record.id, "removed completion");
        Ok(Some(record))
    }
}
