//! Category model - top-level goal grouping with a progression mode.

use serde::{Deserialize, Serialize};

use crate::id::CategoryId;
use crate::schedule::ScheduleDay;
use crate::Time;

/// A category is a top-level grouping of goals (finance, sport, health, ...).
///
/// Its progression mode decides which configuration fields are read when
/// computing progress; the others are simply ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Display color (hex)
    pub color: String,

    /// Display icon name
    pub icon: String,

    /// Which indicator animation the category is configured with
    pub animation_type: AnimationType,

    /// How progress is computed for this category
    pub progression_mode: ProgressionMode,

    /// Cumulative mode: the value to reach
    pub target_value: Option<f64>,

    /// Cumulative mode: the value reached so far
    pub current_value: Option<f64>,

    /// Cumulative mode: unit of the target (e.g. EUR, km)
    pub target_unit: Option<String>,

    /// Cumulative mode: optional deadline
    pub target_end_date: Option<Time>,

    /// Weekly mode: target number of sessions per week
    pub weekly_target_sessions: Option<u32>,

    /// Weekly mode: days of the week sessions are scheduled on
    pub scheduled_days: Vec<ScheduleDay>,

    /// Monthly mode: the value to accumulate each month
    pub monthly_target_value: Option<f64>,

    /// Monthly mode: unit of the monthly target
    pub monthly_target_unit: Option<String>,

    /// Whether the recent-activity decay score applies to this category
    pub decay_enabled: bool,

    /// When created
    pub created_at: Time,

    /// Last updated
    pub updated_at: Time,
}

impl Category {
    /// Create a category with the given name and progression mode.
    ///
    /// Mode-specific configuration starts empty; `current_value` starts at 0
    /// so cumulative categories render 0% rather than nothing.
    pub fn new(name: impl Into<String>, progression_mode: ProgressionMode) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: "#4f6df5".to_string(),
            icon: "target".to_string(),
            animation_type: AnimationType::ProgressBar,
            progression_mode,
            target_value: None,
            current_value: Some(0.0),
            target_unit: None,
            target_end_date: None,
            weekly_target_sessions: None,
            scheduled_days: Vec::new(),
            monthly_target_value: None,
            monthly_target_unit: None,
            decay_enabled: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// How a category's completion fraction is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressionMode {
    /// Ratio of current value over target value
    Cumulative,
    /// Adherence to scheduled days over the current week
    Weekly,
    /// Summed completion values against a monthly target
    Monthly,
}

impl std::fmt::Display for ProgressionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Cumulative => "cumulative",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for ProgressionMode {
    type Err = crate::schedule::ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cumulative" => Ok(Self::Cumulative),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(crate::schedule::ParseEnumError::unknown("progression mode", s)),
        }
    }
}

/// Indicator animation a category is configured with.
///
/// Pure configuration data; no rendering is attached to it here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationType {
    ProgressBar,
    ProgressCircle,
    FillContainer,
    Grow,
    Pulse,
}

impl std::str::FromStr for AnimationType {
    type Err = crate::schedule::ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "progress-bar" => Ok(Self::ProgressBar),
            "progress-circle" => Ok(Self::ProgressCircle),
            "fill-container" => Ok(Self::FillContainer),
            "grow" => Ok(Self::Grow),
            "pulse" => Ok(Self::Pulse),
            _ => Err(crate::schedule::ParseEnumError::unknown("animation type", s)),
        }
    }
}
