use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::booking::Booking;

/// Compact upcoming booking shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingBookingDto {
    pub id: i32,
    pub category: String,
    /// `Today`, `Tomorrow` or a short date such as `Dec 16`.
    pub day: String,
    pub time: String,
    pub status: String,
}

impl UpcomingBookingDto {
    pub fn new(booking: Booking, today: NaiveDate) -> Self {
        Self {
            id: booking.id.get(),
            category: booking.category_name.into_inner(),
            day: relative_day(booking.date, today),
            time: booking.time_range,
            status: booking.status.as_str().to_string(),
        }
    }
}

fn relative_day(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%b %-d").to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardDto {
    pub greeting: String,
    pub active_bookings: usize,
    pub hours_this_week: f64,
    pub hours_this_month: f64,
    pub favorite_category: Option<String>,
    /// Share of bookings that were not cancelled, in percent.
    pub success_rate: Option<u8>,
    pub upcoming: Vec<UpcomingBookingDto>,
}
