//! Start times and durations offered by the booking form.

use std::fmt::{Display, Formatter};

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

const SLOT_PARSE_FORMAT: &str = "%I:%M %p";
const SLOT_DISPLAY_FORMAT: &str = "%-I:%M %p";

/// A selectable start time, displayed on a 12-hour clock (`"10:00 AM"`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Parses a label such as `9:30 AM` or `09:30 am`.
    pub fn parse(label: &str) -> Result<Self, TypeConstraintError> {
        let trimmed = label.trim();
        NaiveTime::parse_from_str(&trimmed.to_uppercase(), SLOT_PARSE_FORMAT)
            .map(Self)
            .map_err(|_| TypeConstraintError::InvalidTimeSlot(trimmed.to_string()))
    }

    pub const fn from_time(time: NaiveTime) -> Self {
        Self(time)
    }

    pub const fn time(self) -> NaiveTime {
        self.0
    }

    /// Slot label after `duration` has elapsed. Wraps past midnight.
    pub fn end_after(self, duration: DurationMinutes) -> Self {
        Self(self.0 + TimeDelta::minutes(i64::from(duration.get())))
    }

    /// `"10:00 AM - 11:00 AM"` style range for a booking of `duration`.
    pub fn range_label(self, duration: DurationMinutes) -> String {
        format!("{} - {}", self, self.end_after(duration))
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(SLOT_DISPLAY_FORMAT))
    }
}

impl TryFrom<&str> for TimeSlot {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(value: TimeSlot) -> Self {
        value.to_string()
    }
}

/// Length of a booking in whole minutes. Always positive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    pub fn new(minutes: u32) -> Result<Self, TypeConstraintError> {
        if minutes > 0 {
            Ok(Self(minutes))
        } else {
            Err(TypeConstraintError::NonPositiveNumber("duration"))
        }
    }

    /// Parses the numeric minutes used by the duration picker (`"90"`).
    pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        let trimmed = value.trim();
        let minutes = trimmed
            .parse::<u32>()
            .map_err(|_| TypeConstraintError::InvalidValue(format!("duration: {trimmed}")))?;
        Self::new(minutes)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn hours(self) -> f64 {
        f64::from(self.0) / 60.0
    }

    /// Picker label: `30 minutes`, `1 hour`, `1.5 hours`.
    pub fn label(self) -> String {
        if self.0 < 60 {
            return format!("{} minutes", self.0);
        }
        let hours = self.hours();
        if self.0 == 60 {
            "1 hour".to_string()
        } else if self.0 % 60 == 0 {
            format!("{} hours", self.0 / 60)
        } else {
            format!("{hours} hours")
        }
    }
}

impl Display for DurationMinutes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} minutes", self.0)
    }
}

impl TryFrom<u32> for DurationMinutes {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DurationMinutes> for u32 {
    fn from(value: DurationMinutes) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_digit_hours() {
        let slot = TimeSlot::parse("9:30 AM").unwrap();
        assert_eq!(slot.time(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(slot.to_string(), "9:30 AM");
    }

    #[test]
    fn parses_lowercase_meridiem() {
        let slot = TimeSlot::parse(" 01:00 pm ").unwrap();
        assert_eq!(slot.to_string(), "1:00 PM");
    }

    #[test]
    fn rejects_24_hour_labels() {
        assert_eq!(
            TimeSlot::parse("14:00").unwrap_err(),
            TypeConstraintError::InvalidTimeSlot("14:00".to_string())
        );
    }

    #[test]
    fn range_crosses_noon() {
        let slot = TimeSlot::parse("11:30 AM").unwrap();
        let duration = DurationMinutes::new(90).unwrap();
        assert_eq!(slot.range_label(duration), "11:30 AM - 1:00 PM");
    }

    #[test]
    fn duration_labels() {
        let labels: Vec<String> = [30, 60, 90, 120, 240]
            .into_iter()
            .map(|m| DurationMinutes::new(m).unwrap().label())
            .collect();
        assert_eq!(
            labels,
            ["30 minutes", "1 hour", "1.5 hours", "2 hours", "4 hours"]
        );
    }

    #[test]
    fn rejects_zero_and_garbage_durations() {
        assert!(DurationMinutes::new(0).is_err());
        assert!(DurationMinutes::parse("an hour").is_err());
        assert_eq!(DurationMinutes::parse(" 60 ").unwrap().get(), 60);
    }
}
