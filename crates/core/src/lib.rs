//! Stride core data models.
//!
//! This crate defines the fundamental data structures of the personal
//! goal-tracking system: categories, sub-categories, micro-objectives,
//! completion records and daily notes.

#![warn(missing_docs)]

// Core identities
mod id;

// Scheduling vocabulary
mod schedule;

// Goal hierarchy
mod category;
mod objective;

// Tracked facts
mod completion;
mod note;
mod history;

// Re-exports
pub use id::*;

pub use schedule::{Frequency, ParseEnumError, ScheduleDay};

// Category & objectives
pub use category::{AnimationType, Category, ProgressionMode};
pub use objective::{MicroObjective, SubCategory};

// Completions, notes, history
pub use completion::CompletionRecord;
pub use note::DailyNote;
pub use history::ProgressRecord;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
