//! Daily note model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::{CategoryId, NoteId, SubCategoryId};
use crate::Time;

/// A free-form note attached to a calendar day, optionally scoped to a
/// category or sub-category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyNote {
    /// Unique identifier
    pub id: NoteId,

    /// Optional category scope
    pub category_id: Option<CategoryId>,

    /// Optional sub-category scope
    pub subcategory_id: Option<SubCategoryId>,

    /// Note text
    pub content: String,

    /// Calendar day the note belongs to
    pub note_date: NaiveDate,

    /// Position among the day's notes
    pub sort_order: i32,

    /// When created
    pub created_at: Time,
}

impl DailyNote {
    /// Create a note for the given day.
    pub fn new(content: impl Into<String>, note_date: NaiveDate) -> Self {
        Self {
            id: NoteId::new(),
            category_id: None,
            subcategory_id: None,
            content: content.into(),
            note_date,
            sort_order: 0,
            created_at: chrono::Utc::now(),
        }
    }
}
