use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::category::ResourceCategory;
use crate::domain::slot::{DurationMinutes, TimeSlot};
use crate::domain::types::{BookingId, BookingStatus, CategoryKey, CategoryName, LocationName};

/// In-progress selection made on the booking form. Every field stays
/// optional until the user picks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftBooking {
    pub date: Option<NaiveDate>,
    pub category_id: Option<CategoryKey>,
    pub start_slot: Option<TimeSlot>,
    pub duration: Option<DurationMinutes>,
}

impl DraftBooking {
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn set_category(&mut self, category_id: CategoryKey) {
        self.category_id = Some(category_id);
    }

    pub fn set_start_slot(&mut self, slot: TimeSlot) {
        self.start_slot = Some(slot);
    }

    pub fn set_duration(&mut self, duration: DurationMinutes) {
        self.duration = Some(duration);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_complete(&self) -> bool {
        self.date.is_some()
            && self.category_id.is_some()
            && self.start_slot.is_some()
            && self.duration.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Names of the fields that still need a value, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push("date");
        }
        if self.category_id.is_none() {
            missing.push("chair type");
        }
        if self.start_slot.is_none() {
            missing.push("start time");
        }
        if self.duration.is_none() {
            missing.push("duration");
        }
        missing
    }

    /// Snapshot of a complete draft, or the missing field names.
    pub fn to_request(&self) -> Result<BookingRequest, Vec<&'static str>> {
        match (
            self.date,
            self.category_id.clone(),
            self.start_slot,
            self.duration,
        ) {
            (Some(date), Some(category_id), Some(start_slot), Some(duration)) => {
                Ok(BookingRequest {
                    date,
                    category_id,
                    start_slot,
                    duration,
                })
            }
            _ => Err(self.missing_fields()),
        }
    }
}

/// A complete draft frozen for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub category_id: CategoryKey,
    pub start_slot: TimeSlot,
    pub duration: DurationMinutes,
}

impl BookingRequest {
    pub fn time_range(&self) -> String {
        self.start_slot.range_label(self.duration)
    }
}

/// A committed reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub category_id: CategoryKey,
    pub category_name: CategoryName,
    pub date: NaiveDate,
    pub start_slot: TimeSlot,
    pub duration: DurationMinutes,
    pub time_range: String,
    pub status: BookingStatus,
    pub location: LocationName,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Booking`]. The store assigns the id and
/// the initial status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub category_id: CategoryKey,
    pub category_name: CategoryName,
    pub date: NaiveDate,
    pub start_slot: TimeSlot,
    pub duration: DurationMinutes,
    pub location: LocationName,
    pub created_at: NaiveDateTime,
}

impl NewBooking {
    pub fn new(
        request: BookingRequest,
        category: &ResourceCategory,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            category_id: request.category_id,
            category_name: category.name.clone(),
            date: request.date,
            start_slot: request.start_slot,
            duration: request.duration,
            location: category.location.clone(),
            created_at,
        }
    }

    pub fn into_booking(self, id: BookingId, status: BookingStatus) -> Booking {
        Booking {
            id,
            time_range: self.start_slot.range_label(self.duration),
            category_id: self.category_id,
            category_name: self.category_name,
            date: self.date,
            start_slot: self.start_slot,
            duration: self.duration,
            status,
            location: self.location,
            created_at: self.created_at,
        }
    }
}
