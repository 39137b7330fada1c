use crate::domain::booking::{Booking, NewBooking};
use crate::domain::types::{BookingId, BookingStatus};
use crate::repository::{
    BookingListQuery, BookingReader, BookingWriter, InMemoryRepository, RepositoryError,
    RepositoryResult,
};

impl BookingReader for InMemoryRepository {
    fn list_bookings(&self, query: BookingListQuery) -> RepositoryResult<(usize, Vec<Booking>)> {
        let items: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| query.matches(b))
            .cloned()
            .collect();
        Ok((items.len(), items))
    }

    fn get_booking_by_id(&self, id: BookingId) -> RepositoryResult<Option<Booking>> {
        Ok(self.bookings.iter().find(|b| b.id == id).cloned())
    }
}

impl BookingWriter for InMemoryRepository {
    fn create_booking(&mut self, booking: &NewBooking) -> RepositoryResult<Booking> {
        let id = BookingId::new(self.next_id)?;
        let next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Storage("booking ids exhausted".to_string()))?;

        let stored = booking.clone().into_booking(id, BookingStatus::Confirmed);
        self.bookings.push(stored.clone());
        self.next_id = next_id;

        log::debug!("Stored booking {id} for {}", stored.category_name);
        Ok(stored)
    }

    fn update_booking_status(
        &mut self,
        id: BookingId,
        status: BookingStatus,
    ) -> RepositoryResult<usize> {
        match self.bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                booking.status = status;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
