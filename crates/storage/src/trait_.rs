//! Storage trait abstraction.

use async_trait::async_trait;
use chrono::NaiveDate;
use stride_core::{
    Category, CategoryId, CompletionId, CompletionRecord, DailyNote, MicroObjective, ObjectiveId,
    ProgressRecord, SubCategory, SubCategoryId, Time,
};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Filter for completion queries.
#[derive(Debug, Clone, Default)]
pub struct CompletionFilter {
    /// Restrict to completions of a single objective
    pub objective_id: Option<ObjectiveId>,

    /// Inclusive lower bound on `completed_at`
    pub since: Option<Time>,

    /// Exclusive upper bound on `completed_at`
    pub until: Option<Time>,
}

impl CompletionFilter {
    /// Whether a record passes the filter.
    pub fn matches(&self, record: &CompletionRecord) -> bool {
        if let Some(objective_id) = self.objective_id {
            if record.objective_id != objective_id {
                return false;
            }
        }
        if let Some(since) = self.since {
            if record.completed_at < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if record.completed_at >= until {
                return false;
            }
        }
        true
    }
}

/// Storage abstraction for Stride data.
///
/// This trait allows different storage backends to be plugged in. The
/// engine never touches it; callers fetch state here and pass it in.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Category operations ===

    /// Save a category (create or update).
    async fn save_category(&mut self, category: &Category) -> Result<()>;

    /// Load a category by ID.
    async fn load_category(&self, id: CategoryId) -> Result<Option<Category>>;

    /// List all categories, newest first.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Delete a category together with its sub-categories, objectives and
    /// their completions.
    async fn delete_category(&mut self, id: CategoryId) -> Result<()>;

    // === Sub-category operations ===

    /// Save a sub-category (create or update).
    async fn save_subcategory(&mut self, subcategory: &SubCategory) -> Result<()>;

    /// Load a sub-category by ID.
    async fn load_subcategory(&self, id: SubCategoryId) -> Result<Option<SubCategory>>;

    /// List a category's sub-categories in display order.
    async fn list_subcategories(&self, category_id: CategoryId) -> Result<Vec<SubCategory>>;

    // === Micro-objective operations ===

    /// Save a micro-objective (create or update).
    async fn save_objective(&mut self, objective: &MicroObjective) -> Result<()>;

    /// Load a micro-objective by ID.
    async fn load_objective(&self, id: ObjectiveId) -> Result<Option<MicroObjective>>;

    /// List a sub-category's micro-objectives.
    async fn list_objectives(&self, subcategory_id: SubCategoryId) -> Result<Vec<MicroObjective>>;

    /// List all active micro-objectives across categories.
    async fn list_active_objectives(&self) -> Result<Vec<MicroObjective>>;

    /// Delete a micro-objective.
    async fn delete_objective(&mut self, id: ObjectiveId) -> Result<()>;

    // === Completion operations ===

    /// Record a completion fact.
    async fn record_completion(&mut self, completion: &CompletionRecord) -> Result<()>;

    /// List completions matching the filter, most recent first.
    async fn list_completions(&self, filter: &CompletionFilter) -> Result<Vec<CompletionRecord>>;

    /// Delete a completion record.
    async fn delete_completion(&mut self, id: CompletionId) -> Result<()>;

    // === Daily note operations ===

    /// Save a daily note (create or update).
    async fn save_note(&mut self, note: &DailyNote) -> Result<()>;

    /// List the notes of a calendar day in display order.
    async fn list_notes(&self, date: NaiveDate) -> Result<Vec<DailyNote>>;

    // === Progress history operations ===

    /// Save a progress snapshot; one per category and day, last write wins.
    async fn save_progress_record(&mut self, record: &ProgressRecord) -> Result<()>;

    /// List a category's progress snapshots in date order.
    async fn list_progress_records(&self, category_id: CategoryId) -> Result<Vec<ProgressRecord>>;
}
