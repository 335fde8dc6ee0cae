//! Scheduling vocabulary - weekdays and objective frequencies.

use serde::{Deserialize, Serialize};

/// Error returned when parsing a scheduling enum from text fails.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Day of week an objective can be scheduled on.
///
/// Persisted as the lowercase English day name. Parsing is
/// case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl ScheduleDay {
    /// The lowercase English name of the day.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl std::fmt::Display for ScheduleDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ScheduleDay {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(ParseEnumError::unknown("weekday", s)),
        }
    }
}

impl From<chrono::Weekday> for ScheduleDay {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl From<ScheduleDay> for chrono::Weekday {
    fn from(day: ScheduleDay) -> Self {
        match day {
            ScheduleDay::Monday => Self::Mon,
            ScheduleDay::Tuesday => Self::Tue,
            ScheduleDay::Wednesday => Self::Wed,
            ScheduleDay::Thursday => Self::Thu,
            ScheduleDay::Friday => Self::Fri,
            ScheduleDay::Saturday => Self::Sat,
            ScheduleDay::Sunday => Self::Sun,
        }
    }
}

/// How often a micro-objective recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Due every day (or every scheduled day)
    Daily,
    /// Due on scheduled days of the week
    Weekly,
    /// Due within the month
    Monthly,
    /// One-shot objective
    Once,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Once => "once",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Frequency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "once" => Ok(Self::Once),
            _ => Err(ParseEnumError::unknown("frequency", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_names_case_insensitively() {
        assert_eq!("monday".parse::<ScheduleDay>().unwrap(), ScheduleDay::Monday);
        assert_eq!("WEDNESDAY".parse::<ScheduleDay>().unwrap(), ScheduleDay::Wednesday);
        assert_eq!("Sunday".parse::<ScheduleDay>().unwrap(), ScheduleDay::Sunday);
        assert!("someday".parse::<ScheduleDay>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_names() {
        let json = serde_json::to_string(&ScheduleDay::Friday).unwrap();
        assert_eq!(json, "\"friday\"");
        let back: ScheduleDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ScheduleDay::Friday);
    }

    #[test]
    fn weekday_round_trip() {
        for day in [
            ScheduleDay::Monday,
            ScheduleDay::Tuesday,
            ScheduleDay::Wednesday,
            ScheduleDay::Thursday,
            ScheduleDay::Friday,
            ScheduleDay::Saturday,
            ScheduleDay::Sunday,
        ] {
            let weekday: chrono::Weekday = day.into();
            assert_eq!(ScheduleDay::from(weekday), day);
        }
    }
}
