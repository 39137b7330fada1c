use serde::Serialize;

use crate::services::booking::ReviewSnapshot;

pub const NOT_SELECTED: &str = "Not selected";
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// The four lines of the booking summary card and the review dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummaryDto {
    pub date: String,
    pub category: String,
    pub time: String,
    pub duration: String,
}

impl From<&ReviewSnapshot> for BookingSummaryDto {
    fn from(value: &ReviewSnapshot) -> Self {
        Self {
            date: value.request.date.format("%Y-%m-%d").to_string(),
            category: value.category.name.to_string(),
            time: value.request.start_slot.to_string(),
            duration: value.request.duration.to_string(),
        }
    }
}
