use chrono::NaiveDate;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::category::{Catalog, ResourceCategory};
use crate::domain::slot::{DurationMinutes, TimeSlot};
use crate::domain::types::{BookingId, BookingStatus, CategoryKey};

pub mod booking;
pub mod category;
pub mod errors;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// In-memory repository holding the injected catalog and the booking records.
///
/// Bookings keep insertion order; ids start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    catalog: Catalog,
    bookings: Vec<Booking>,
    next_id: i32,
}

impl InMemoryRepository {
    /// Create a repository serving `catalog` with an empty booking store.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            bookings: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of stored bookings, in any status.
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

/// Which side of "today" a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPeriod {
    /// Bookings dated today or later.
    Upcoming(NaiveDate),
    /// Bookings dated strictly before the given day.
    Past(NaiveDate),
}

impl BookingPeriod {
    pub fn contains(self, date: NaiveDate) -> bool {
        match self {
            Self::Upcoming(today) => date >= today,
            Self::Past(today) => date < today,
        }
    }
}

/// Query parameters used when listing bookings.
#[derive(Debug, Clone, Default)]
pub struct BookingListQuery {
    /// Restrict to one side of a reference day.
    pub period: Option<BookingPeriod>,
    /// Restrict to a single status.
    pub status: Option<BookingStatus>,
}

impl BookingListQuery {
    pub fn upcoming(mut self, today: NaiveDate) -> Self {
        self.period = Some(BookingPeriod::Upcoming(today));
        self
    }
    pub fn past(mut self, today: NaiveDate) -> Self {
        self.period = Some(BookingPeriod::Past(today));
        self
    }
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        self.period.is_none_or(|p| p.contains(booking.date))
            && self.status.is_none_or(|s| s == booking.status)
    }
}

/// Read-only access to chair categories.
pub trait CategoryReader {
    /// List all categories in catalog order.
    fn list_categories(&self) -> RepositoryResult<Vec<ResourceCategory>>;
    /// Retrieve a category by its key.
    fn get_category_by_id(&self, id: &CategoryKey) -> RepositoryResult<Option<ResourceCategory>>;
}

/// Read-only access to the start times and durations offered.
pub trait SlotReader {
    fn list_time_slots(&self) -> RepositoryResult<Vec<TimeSlot>>;
    fn list_durations(&self) -> RepositoryResult<Vec<DurationMinutes>>;
}

/// Read-only operations for booking records.
pub trait BookingReader {
    /// List bookings matching the query, in insertion order, with the total.
    fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<(usize, Vec<Booking>)>;
    /// Retrieve a booking by its identifier.
    fn get_booking_by_id(&self, id: BookingId) -> RepositoryResult<Option<Booking>>;
}

/// Write operations for booking records.
pub trait BookingWriter {
    /// Store a new booking with a fresh id and `confirmed` status.
    fn create_booking(&mut self, booking: &NewBooking) -> RepositoryResult<Booking>;
    /// Overwrite a booking's status. Returns the number of affected records.
    fn update_booking_status(
        &mut self,
        id: BookingId,
        status: BookingStatus,
    ) -> RepositoryResult<usize>;
}
