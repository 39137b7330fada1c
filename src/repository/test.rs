use chrono::{DateTime, NaiveDate};

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::category::{Catalog, ResourceCategory};
use crate::domain::slot::{DurationMinutes, TimeSlot};
use crate::domain::types::{
    BookingId, BookingStatus, CategoryDescription, CategoryKey, CategoryName, LocationName,
    SeatCount,
};
use crate::repository::{
    BookingListQuery, BookingReader, BookingWriter, CategoryReader, InMemoryRepository,
    RepositoryError, RepositoryResult, SlotReader,
};

fn category(
    id: &str,
    name: &str,
    description: &str,
    available: i32,
    total: i32,
    location: &str,
) -> ResourceCategory {
    ResourceCategory::new(
        CategoryKey::new(id).unwrap(),
        CategoryName::new(name).unwrap(),
        CategoryDescription::new(description).unwrap(),
        SeatCount::new(available).unwrap(),
        SeatCount::new(total).unwrap(),
        LocationName::new(location).unwrap(),
    )
    .unwrap()
}

/// Three chair types, 9:00 AM - 5:30 PM half-hour slots and the usual
/// duration picker values.
pub fn sample_catalog() -> Catalog {
    let categories = vec![
        category(
            "ergonomic",
            "Ergonomic Chairs",
            "Perfect for long work sessions with lumbar support",
            8,
            12,
            "Floor 2, Zone A",
        ),
        category(
            "bean-bag",
            "Bean Bag Chairs",
            "Comfortable casual seating for creative work",
            3,
            6,
            "Floor 1, Lounge",
        ),
        category(
            "high-stool",
            "High Stools",
            "Standing desk compatible with adjustable height",
            5,
            8,
            "Floor 3, Standing Area",
        ),
    ];
    let time_slots = (0..18)
        .map(|i| {
            let time = chrono::NaiveTime::from_hms_opt(9 + i / 2, (i % 2) * 30, 0).unwrap();
            TimeSlot::from_time(time)
        })
        .collect();
    let durations = [30, 60, 90, 120, 240]
        .into_iter()
        .map(|m| DurationMinutes::new(m).unwrap())
        .collect();
    Catalog::new(categories, time_slots, durations).unwrap()
}

/// A one hour ergonomic chair booking at 10:00 AM on the given day.
pub fn sample_new_booking(year: i32, month: u32, day: u32) -> NewBooking {
    NewBooking {
        category_id: CategoryKey::new("ergonomic").unwrap(),
        category_name: CategoryName::new("Ergonomic Chairs").unwrap(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        start_slot: TimeSlot::parse("10:00 AM").unwrap(),
        duration: DurationMinutes::new(60).unwrap(),
        location: LocationName::new("Floor 2, Zone A").unwrap(),
        created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
    }
}

/// In-memory repository used for unit tests. Wraps [`InMemoryRepository`]
/// and can be told to fail reads or writes.
pub struct TestRepository {
    inner: InMemoryRepository,
    fail_reads: bool,
    fail_writes: bool,
}

impl Default for TestRepository {
    fn default() -> Self {
        Self::new(sample_catalog())
    }
}

impl TestRepository {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: InMemoryRepository::new(catalog),
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Seeds bookings with the given statuses.
    pub fn with_bookings(mut self, bookings: Vec<(NewBooking, BookingStatus)>) -> Self {
        for (booking, status) in bookings {
            let stored = self.inner.create_booking(&booking).unwrap();
            self.inner.update_booking_status(stored.id, status).unwrap();
        }
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    fn check_read(&self) -> RepositoryResult<()> {
        if self.fail_reads {
            Err(RepositoryError::Storage("read failure".to_string()))
        } else {
            Ok(())
        }
    }

    fn check_write(&self) -> RepositoryResult<()> {
        if self.fail_writes {
            Err(RepositoryError::Storage("write failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<ResourceCategory>> {
        self.check_read()?;
        self.inner.list_categories()
    }

    fn get_category_by_id(&self, id: &CategoryKey) -> RepositoryResult<Option<ResourceCategory>> {
        self.check_read()?;
        self.inner.get_category_by_id(id)
    }
}

impl SlotReader for TestRepository {
    fn list_time_slots(&self) -> RepositoryResult<Vec<TimeSlot>> {
        self.check_read()?;
        self.inner.list_time_slots()
    }

    fn list_durations(&self) -> RepositoryResult<Vec<DurationMinutes>> {
        self.check_read()?;
        self.inner.list_durations()
    }
}

impl BookingReader for TestRepository {
    fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<(usize, Vec<Booking>)> {
        self.check_read()?;
        self.inner.list_bookings(query)
    }

    fn get_booking_by_id(&self, id: BookingId) -> RepositoryResult<Option<Booking>> {
        self.check_read()?;
        self.inner.get_booking_by_id(id)
    }
}

impl BookingWriter for TestRepository {
    fn create_booking(&mut self, booking: &NewBooking) -> RepositoryResult<Booking> {
        self.check_write()?;
        self.inner.create_booking(booking)
    }

    fn update_booking_status(
        &mut self,
        id: BookingId,
        status: BookingStatus,
    ) -> RepositoryResult<usize> {
        self.check_write()?;
        self.inner.update_booking_status(id, status)
    }
}
