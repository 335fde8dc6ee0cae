//! In-memory storage implementation.
//!
//! The injectable stand-in for process-wide mutable state: everything lives
//! in plain maps owned by the container, handed out by value. Used as the
//! default backend in tests and wherever persistence is not needed.

use std::collections::HashMap;

use chrono::NaiveDate;
use stride_core::{
    Category, CategoryId, CompletionId, CompletionRecord, DailyNote, MicroObjective, NoteId,
    ObjectiveId, ProgressRecord, SubCategory, SubCategoryId,
};

use super::{CompletionFilter, Result, Storage};

/// Map-backed storage container.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    categories: HashMap<CategoryId, Category>,
    subcategories: HashMap<SubCategoryId, SubCategory>,
    objectives: HashMap<ObjectiveId, MicroObjective>,
    completions: HashMap<CompletionId, CompletionRecord>,
    notes: HashMap<NoteId, DailyNote>,
    progress_records: HashMap<(CategoryId, NaiveDate), ProgressRecord>,
}

impl MemoryStorage {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn save_category(&mut self, category: &Category) -> Result<()> {
        self.categories.insert(category.id, category.clone());
        Ok(())
    }

    async fn load_category(&self, id: CategoryId) -> Result<Option<Category>> {
        Ok(self.categories.get(&id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<_> = self.categories.values().cloned().collect();
        categories.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(categories)
    }

    async fn delete_category(&mut self, id: CategoryId) -> Result<()> {
        self.categories.remove(&id);

        let subcategory_ids: Vec<_> = self
            .subcategories
            .values()
            .filter(|s| s.category_id == id)
            .map(|s| s.id)
            .collect();
        self.subcategories.retain(|_, s| s.category_id != id);

        let objective_ids: Vec<_> = self
            .objectives
            .values()
            .filter(|o| subcategory_ids.contains(&o.subcategory_id))
            .map(|o| o.id)
            .collect();
        self.objectives
            .retain(|_, o| !subcategory_ids.contains(&o.subcategory_id));

        self.completions
            .retain(|_, c| !objective_ids.contains(&c.objective_id));
        Ok(())
    }

    async fn save_subcategory(&mut self, subcategory: &SubCategory) -> Result<()> {
        self.subcategories
            .insert(subcategory.id, subcategory.clone());
        Ok(())
    }

    async fn load_subcategory(&self, id: SubCategoryId) -> Result<Option<SubCategory>> {
        Ok(self.subcategories.get(&id).cloned())
    }

    async fn list_subcategories(&self, category_id: CategoryId) -> Result<Vec<SubCategory>> {
        let mut subcategories: Vec<_> = self
            .subcategories
            .values()
            .filter(|s| s.category_id == category_id)
            .cloned()
            .collect();
        subcategories.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(subcategories)
    }

    async fn save_objective(&mut self, objective: &MicroObjective) -> Result<()> {
        self.objectives.insert(objective.id, objective.clone());
        Ok(())
    }

    async fn load_objective(&self, id: ObjectiveId) -> Result<Option<MicroObjective>> {
        Ok(self.objectives.get(&id).cloned())
    }

    async fn list_objectives(&self, subcategory_id: SubCategoryId) -> Result<Vec<MicroObjective>> {
        let mut objectives: Vec<_> = self
            .objectives
            .values()
            .filter(|o| o.subcategory_id == subcategory_id)
            .cloned()
            .collect();
        objectives.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(objectives)
    }

    async fn list_active_objectives(&self) -> Result<Vec<MicroObjective>> {
        let mut objectives: Vec<_> = self
            .objectives
            .values()
            .filter(|o| o.is_active)
            .cloned()
            .collect();
        objectives.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(objectives)
    }

    async fn delete_objective(&mut self, id: ObjectiveId) -> Result<()> {
        self.objectives.remove(&id);
        Ok(())
    }

    async fn record_completion(&mut self, completion: &CompletionRecord) -> Result<()> {
        self.completions.insert(completion.id, completion.clone());
        Ok(())
    }

    async fn list_completions(&self, filter: &CompletionFilter) -> Result<Vec<CompletionRecord>> {
        let mut completions: Vec<_> = self
            .completions
            .values()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        completions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(completions)
    }

    async fn delete_completion(&mut self, id: CompletionId) -> Result<()> {
        self.completions.remove(&id);
        Ok(())
    }

    async fn save_note(&mut self, note: &DailyNote) -> Result<()> {
        self.notes.insert(note.id, note.clone());
        Ok(())
    }

    async fn list_notes(&self, date: NaiveDate) -> Result<Vec<DailyNote>> {
        let mut notes: Vec<_> = self
            .notes
            .values()
            .filter(|n| n.note_date == date)
            .cloned()
            .collect();
        notes.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(notes)
    }

    async fn save_progress_record(&mut self, record: &ProgressRecord) -> Result<()> {
        self.progress_records
            .insert((record.category_id, record.record_date), record.clone());
        Ok(())
    }

    async fn list_progress_records(&self, category_id: CategoryId) -> Result<Vec<ProgressRecord>> {
        let mut records: Vec<_> = self
            .progress_records
            .values()
            .filter(|r| r.category_id == category_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.record_date.cmp(&b.record_date));
        Ok(records)
    }
}
