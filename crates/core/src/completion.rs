//! Completion record model - timestamped completion facts.

use serde::{Deserialize, Serialize};

use crate::id::{CompletionId, ObjectiveId};
use crate::Time;

/// A timestamped fact that a micro-objective was performed.
///
/// Records are immutable once created; un-completing a goal for the current
/// day deletes the most recent record rather than editing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Unique identifier
    pub id: CompletionId,

    /// The micro-objective that was completed
    pub objective_id: ObjectiveId,

    /// When the objective was performed
    pub completed_at: Time,

    /// Optional magnitude (e.g. money saved, distance run)
    pub value: Option<f64>,

    /// Optional free-form note
    pub notes: Option<String>,

    /// When the record was created
    pub created_at: Time,
}

impl CompletionRecord {
    /// Record a completion of `objective_id` at `completed_at`.
    pub fn new(objective_id: ObjectiveId, completed_at: Time) -> Self {
        Self {
            id: CompletionId::new(),
            objective_id,
            completed_at,
            value: None,
            notes: None,
            created_at: completed_at,
        }
    }

    /// Attach a magnitude to the completion.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Attach a note to the completion.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
