use serde::Serialize;

use crate::domain::booking::Booking;

/// One row of the bookings table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingDto {
    pub id: i32,
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub status: String,
    pub status_label: String,
}

impl From<Booking> for BookingDto {
    fn from(value: Booking) -> Self {
        Self {
            id: value.id.get(),
            category: value.category_name.into_inner(),
            date: value.date.format("%Y-%m-%d").to_string(),
            time: value.time_range,
            location: value.location.into_inner(),
            status: value.status.as_str().to_string(),
            status_label: value.status.label().to_string(),
        }
    }
}
