//! Sub-category and micro-objective models.

use serde::{Deserialize, Serialize};

use crate::id::{CategoryId, ObjectiveId, SubCategoryId};
use crate::schedule::{Frequency, ScheduleDay};
use crate::Time;

/// A named subdivision of a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategory {
    /// Unique identifier
    pub id: SubCategoryId,

    /// Owning category
    pub category_id: CategoryId,

    /// Display name
    pub name: String,

    /// Display icon name
    pub icon: String,

    /// Optional display color (falls back to the category color)
    pub color: Option<String>,

    /// Position among the category's sub-categories
    pub sort_order: i32,

    /// When created
    pub created_at: Time,
}

impl SubCategory {
    /// Create a sub-category under the given category.
    pub fn new(category_id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id: SubCategoryId::new(),
            category_id,
            name: name.into(),
            icon: "circle".to_string(),
            color: None,
            sort_order: 0,
            created_at: chrono::Utc::now(),
        }
    }
}

/// The smallest trackable unit of a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicroObjective {
    /// Unique identifier
    pub id: ObjectiveId,

    /// Owning sub-category
    pub subcategory_id: SubCategoryId,

    /// Display name
    pub name: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Default magnitude recorded on completion (e.g. money saved, km run)
    pub value: Option<f64>,

    /// Unit of the magnitude
    pub value_unit: Option<String>,

    /// How often the objective recurs
    pub frequency: Frequency,

    /// Days of the week the objective is scheduled on
    pub scheduled_days: Vec<ScheduleDay>,

    /// Optional time of day it is scheduled at
    pub scheduled_time: Option<chrono::NaiveTime>,

    /// Optional location hint
    pub location: Option<String>,

    /// Inactive objectives are kept for history but no longer due
    pub is_active: bool,

    /// When created
    pub created_at: Time,
}

impl MicroObjective {
    /// Create an active objective under the given sub-category.
    pub fn new(
        subcategory_id: SubCategoryId,
        name: impl Into<String>,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: ObjectiveId::new(),
            subcategory_id,
            name: name.into(),
            description: None,
            value: None,
            value_unit: None,
            frequency,
            scheduled_days: Vec::new(),
            scheduled_time: None,
            location: None,
            is_active: true,
            created_at: chrono::Utc::now(),
        }
    }

    /// Whether the objective is due on the given day of week.
    ///
    /// An empty schedule means "any day" for daily and one-shot objectives;
    /// weekly and monthly objectives with no scheduled days are never due.
    pub fn is_scheduled_on(&self, day: ScheduleDay) -> bool {
        if self.scheduled_days.is_empty() {
            matches!(self.frequency, Frequency::Daily | Frequency::Once)
        } else {
            self.scheduled_days.contains(&day)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_schedule_means_every_day_for_daily() {
        let objective = MicroObjective::new(SubCategoryId::new(), "stretch", Frequency::Daily);
        assert!(objective.is_scheduled_on(ScheduleDay::Monday));
        assert!(objective.is_scheduled_on(ScheduleDay::Sunday));
    }

    #[test]
    fn weekly_objective_follows_scheduled_days() {
        let mut objective = MicroObjective::new(SubCategoryId::new(), "run", Frequency::Weekly);
        assert!(!objective.is_scheduled_on(ScheduleDay::Tuesday));

        objective.scheduled_days = vec![ScheduleDay::Tuesday, ScheduleDay::Saturday];
        assert!(objective.is_scheduled_on(ScheduleDay::Tuesday));
        assert!(!objective.is_scheduled_on(ScheduleDay::Wednesday));
    }
}
