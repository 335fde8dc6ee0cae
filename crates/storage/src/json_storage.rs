//! JSON file storage implementation.
//!
//! Stores each entity as one JSON file under a root directory (typically
//! `.stride/` in the user's home). No locking: the CLI is the only writer
//! and runs one command at a time.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use stride_core::{
    Category, CategoryId, CompletionId, CompletionRecord, DailyNote, MicroObjective, ObjectiveId,
    ProgressRecord, SubCategory, SubCategoryId,
};
use tokio::fs;
use tracing::debug;

use super::{CompletionFilter, Result, Storage};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the entity subdirectories
    /// as needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("categories")).await?;
        fs::create_dir_all(root.join("subcategories")).await?;
        fs::create_dir_all(root.join("objectives")).await?;
        fs::create_dir_all(root.join("completions")).await?;
        fs::create_dir_all(root.join("notes")).await?;
        fs::create_dir_all(root.join("progress")).await?;

        debug!(root = %root.display(), "opened json storage");
        Ok(Self { root })
    }

    fn category_path(&self, id: CategoryId) -> PathBuf {
        self.root.join("categories").join(format!("{}.json", id))
    }
    fn subcategory_path(&self, id: SubCategoryId) -> PathBuf {
        self.root.join("subcategories").join(format!("{}.json", id))
    }
    fn objective_path(&self, id: ObjectiveId) -> PathBuf {
        self.root.join("objectives").join(format!("{}.json", id))
    }
    fn completion_path(&self, id: CompletionId) -> PathBuf {
        self.root.join("completions").join(format!("{}.json", id))
    }
    fn note_path(&self, id: stride_core::NoteId) -> PathBuf {
        self.root.join("notes").join(format!("{}.json", id))
    }
    fn progress_path(&self, category_id: CategoryId, date: NaiveDate) -> PathBuf {
        self.root
            .join("progress")
            .join(format!("{}_{}.json", category_id, date))
    }

    async fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json.as_bytes()).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn save_category(&mut self, category: &Category) -> Result<()> {
        self.write_json(&self.category_path(category.id), category)
            .await
    }

    async fn load_category(&self, id: CategoryId) -> Result<Option<Category>> {
        read_json(&self.category_path(id)).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> = list_dir(&self.root.join("categories")).await?;
        categories.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(categories)
    }

    async fn delete_category(&mut self, id: CategoryId) -> Result<()> {
        let subcategories = self.list_subcategories(id).await?;
        for subcategory in &subcategories {
            for objective in self.list_objectives(subcategory.id).await? {
                let filter = CompletionFilter {
                    objective_id: Some(objective.id),
                    ..Default::default()
                };
                for completion in self.list_completions(&filter).await? {
                    remove_file_if_present(&self.completion_path(completion.id)).await?;
                }
                remove_file_if_present(&self.objective_path(objective.id)).await?;
            }
            remove_file_if_present(&self.subcategory_path(subcategory.id)).await?;
        }
        remove_file_if_present(&self.category_path(id)).await
    }

    async fn save_subcategory(&mut self, subcategory: &SubCategory) -> Result<()> {
        self.write_json(&self.subcategory_path(subcategory.id), subcategory)
            .await
    }

    async fn load_subcategory(&self, id: SubCategoryId) -> Result<Option<SubCategory>> {
        read_json(&self.subcategory_path(id)).await
    }

    async fn list_subcategories(&self, category_id: CategoryId) -> Result<Vec<SubCategory>> {
        let all: Vec<SubCategory> = list_dir(&self.root.join("subcategories")).await?;
        let mut subcategories: Vec<_> = all
            .into_iter()
            .filter(|s| s.category_id == category_id)
            .collect();
        subcategories.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(subcategories)
    }

    async fn save_objective(&mut self, objective: &MicroObjective) -> Result<()> {
        self.write_json(&self.objective_path(objective.id), objective)
            .await
    }

    async fn load_objective(&self, id: ObjectiveId) -> Result<Option<MicroObjective>> {
        read_json(&self.objective_path(id)).await
    }

    async fn list_objectives(&self, subcategory_id: SubCategoryId) -> Result<Vec<MicroObjective>> {
        let all: Vec<MicroObjective> = list_dir(&self.root.join("objectives")).await?;
        let mut objectives: Vec<_> = all
            .into_iter()
            .filter(|o| o.subcategory_id == subcategory_id)
            .collect();
        objectives.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(objectives)
    }

    async fn list_active_objectives(&self) -> Result<Vec<MicroObjective>> {
        let all: Vec<MicroObjective> = list_dir(&self.root.join("objectives")).await?;
        let mut objectives: Vec<_> = all.into_iter().filter(|o| o.is_active).collect();
        objectives.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(objectives)
    }

    async fn delete_objective(&mut self, id: ObjectiveId) -> Result<()> {
        remove_file_if_present(&self.objective_path(id)).await
    }

    async fn record_completion(&mut self, completion: &CompletionRecord) -> Result<()> {
        self.write_json(&self.completion_path(completion.id), completion)
            .await
    }

    async fn list_completions(&self, filter: &CompletionFilter) -> Result<Vec<CompletionRecord>> {
        let all: Vec<CompletionRecord> = list_dir(&self.root.join("completions")).await?;
        let mut completions: Vec<_> = all.into_iter().filter(|c| filter.matches(c)).collect();
        completions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(completions)
    }

    async fn delete_completion(&mut self, id: CompletionId) -> Result<()> {
        remove_file_if_present(&self.completion_path(id)).await
    }

    async fn save_note(&mut self, note: &DailyNote) -> Result<()> {
        self.write_json(&self.note_path(note.id), note).await
    }

    async fn list_notes(&self, date: NaiveDate) -> Result<Vec<DailyNote>> {
        let all: Vec<DailyNote> = list_dir(&self.root.join("notes")).await?;
        let mut notes: Vec<_> = all.into_iter().filter(|n| n.note_date == date).collect();
        notes.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(notes)
    }

    async fn save_progress_record(&mut self, record: &ProgressRecord) -> Result<()> {
        self.write_json(
            &self.progress_path(record.category_id, record.record_date),
            record,
        )
        .await
    }

    async fn list_progress_records(&self, category_id: CategoryId) -> Result<Vec<ProgressRecord>> {
        let all: Vec<ProgressRecord> = list_dir(&self.root.join("progress")).await?;
        let mut records: Vec<_> = all
            .into_iter()
            .filter(|r| r.category_id == category_id)
            .collect();
        records.sort_by(|a, b| a.record_date.cmp(&b.record_date));
        Ok(records)
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn list_dir<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        if let Ok(Some(item)) = read_json(&entry.path()).await {
            items.push(item);
        }
    }
    Ok(items)
}

async fn remove_file_if_present(path: &Path) -> Result<()> {
    fs::remove_file(path).await.or_else(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Ok(())
        } else {
            Err(e)
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stride_core::{Frequency, ProgressionMode};

    #[tokio::test]
    async fn round_trips_entities_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let mut category = Category::new("Finance", ProgressionMode::Cumulative);
        category.target_value = Some(1000.0);
        storage.save_category(&category).await.unwrap();

        let subcategory = SubCategory::new(category.id, "Savings");
        storage.save_subcategory(&subcategory).await.unwrap();

        let objective = MicroObjective::new(subcategory.id, "No takeaway", Frequency::Daily);
        storage.save_objective(&objective).await.unwrap();

        let completion = CompletionRecord::new(objective.id, Utc::now()).with_value(12.5);
        storage.record_completion(&completion).await.unwrap();

        // Fresh handle over the same directory sees everything
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        let loaded = storage.load_category(category.id).await.unwrap().unwrap();
        assert_eq!(loaded.target_value, Some(1000.0));

        assert_eq!(storage.list_subcategories(category.id).await.unwrap().len(), 1);
        assert_eq!(storage.list_objectives(subcategory.id).await.unwrap().len(), 1);

        let completions = storage
            .list_completions(&CompletionFilter::default())
            .await
            .unwrap();
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].value, Some(12.5));
    }

    #[tokio::test]
    async fn missing_entities_load_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();

        assert!(storage
            .load_category(CategoryId::new())
            .await
            .unwrap()
            .is_none());
        assert!(storage
            .list_completions(&CompletionFilter::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn delete_category_removes_tree_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let category = Category::new("Sport", ProgressionMode::Weekly);
        storage.save_category(&category).await.unwrap();
        let subcategory = SubCategory::new(category.id, "Running");
        storage.save_subcategory(&subcategory).await.unwrap();
        let objective = MicroObjective::new(subcategory.id, "5k", Frequency::Weekly);
        storage.save_objective(&objective).await.unwrap();
        storage
            .record_completion(&CompletionRecord::new(objective.id, Utc::now()))
            .await
            .unwrap();

        storage.delete_category(category.id).await.unwrap();

        assert!(storage.load_category(category.id).await.unwrap().is_none());
        assert!(storage
            .load_objective(objective.id)
            .await
            .unwrap()
            .is_none());
        assert!(storage
            .list_completions(&CompletionFilter::default())
            .await
            .unwrap()
            .is_empty());

        // Deleting again is a no-op
        storage.delete_category(category.id).await.unwrap();
    }
}
