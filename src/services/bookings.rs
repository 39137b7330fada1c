use chrono::NaiveDate;

use crate::domain::booking::Booking;
use crate::domain::notification::{Notification, Notifier};
use crate::domain::types::{BookingId, BookingStatus};
use crate::dto::bookings::BookingDto;
use crate::forms::booking::BookingActionFormPayload;
use crate::repository::{BookingListQuery, BookingReader, BookingWriter};

use super::{ServiceError, ServiceResult};

fn list<R>(query: BookingListQuery, repo: &R) -> ServiceResult<Vec<BookingDto>>
where
    R: BookingReader,
{
    match repo.list_bookings(query) {
        Ok((_total, bookings)) => Ok(bookings.into_iter().map(BookingDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list bookings: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Bookings dated today or later, in booking order.
pub fn show_upcoming_bookings<R>(today: NaiveDate, repo: &R) -> ServiceResult<Vec<BookingDto>>
where
    R: BookingReader,
{
    list(BookingListQuery::default().upcoming(today), repo)
}

/// Bookings dated before today, in booking order.
pub fn show_past_bookings<R>(today: NaiveDate, repo: &R) -> ServiceResult<Vec<BookingDto>>
where
    R: BookingReader,
{
    list(BookingListQuery::default().past(today), repo)
}

fn get_booking<R>(id: BookingId, repo: &R) -> ServiceResult<Booking>
where
    R: BookingReader,
{
    match repo.get_booking_by_id(id) {
        Ok(Some(booking)) => Ok(booking),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get booking: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Moves a booking to `target`. Returns `None` when it already had that
/// status.
fn transition<R>(
    id: BookingId,
    target: BookingStatus,
    repo: &mut R,
) -> ServiceResult<Option<Booking>>
where
    R: BookingReader + BookingWriter,
{
    let booking = get_booking(id, &*repo)?;

    if booking.status == target {
        log::info!("Booking {id} is already {target}");
        return Ok(None);
    }
    if !booking.status.can_transition_to(target) {
        return Err(ServiceError::InvalidTransition {
            from: booking.status,
            to: target,
        });
    }

    match repo.update_booking_status(id, target) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(Some(booking)),
        Err(e) => {
            log::error!("Failed to update booking status: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Cancels a pending or confirmed booking.
///
/// Cancelling an already cancelled booking is a no-op returning `false`;
/// completed bookings cannot be cancelled.
pub fn cancel_booking<R, N>(
    payload: BookingActionFormPayload,
    repo: &mut R,
    notifier: &mut N,
) -> ServiceResult<bool>
where
    R: BookingReader + BookingWriter,
    N: Notifier + ?Sized,
{
    match transition(payload.booking_id, BookingStatus::Cancelled, repo)? {
        Some(booking) => {
            log::info!("Cancelled booking {}", booking.id);
            notifier.notify(Notification::booking_cancelled(&booking.category_name));
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Marks a pending or confirmed booking as used.
pub fn complete_booking<R>(payload: BookingActionFormPayload, repo: &mut R) -> ServiceResult<bool>
where
    R: BookingReader + BookingWriter,
{
    Ok(transition(payload.booking_id, BookingStatus::Completed, repo)?.is_some())
}

/// Editing is not offered yet; the request is acknowledged with a
/// notification for bookings that still hold a seat.
pub fn request_booking_edit<R, N>(
    payload: BookingActionFormPayload,
    repo: &R,
    notifier: &mut N,
) -> ServiceResult<()>
where
    R: BookingReader,
    N: Notifier + ?Sized,
{
    let booking = get_booking(payload.booking_id, repo)?;
    if booking.status.is_terminal() {
        return Err(ServiceError::Validation(format!(
            "booking {} is {} and cannot be edited",
            booking.id, booking.status
        )));
    }
    notifier.notify(Notification::edit_requested(&booking.category_name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationKind;
    use crate::repository::test::{TestRepository, sample_new_booking};

    fn action(id: i32) -> BookingActionFormPayload {
        BookingActionFormPayload {
            booking_id: BookingId::new(id).unwrap(),
        }
    }

    fn seeded() -> TestRepository {
        TestRepository::default().with_bookings(vec![
            (sample_new_booking(2024, 12, 10), BookingStatus::Completed),
            (sample_new_booking(2024, 12, 16), BookingStatus::Confirmed),
            (sample_new_booking(2024, 12, 17), BookingStatus::Pending),
            (sample_new_booking(2024, 12, 5), BookingStatus::Cancelled),
        ])
    }

    fn silent() -> Vec<Notification> {
        Vec::new()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
    }

    #[test]
    fn splits_upcoming_and_past() {
        let repo = seeded();

        let upcoming = show_upcoming_bookings(today(), &repo).unwrap();
        let past = show_past_bookings(today(), &repo).unwrap();

        assert_eq!(upcoming.iter().map(|b| b.id).collect::<Vec<_>>(), [2, 3]);
        assert_eq!(past.iter().map(|b| b.id).collect::<Vec<_>>(), [1, 4]);
        assert_eq!(upcoming[1].status_label, "Pending");
    }

    #[test]
    fn cancels_confirmed_booking() {
        let mut repo = seeded();
        let mut notes: Vec<Notification> = Vec::new();

        assert!(cancel_booking(action(2), &mut repo, &mut notes).unwrap());
        assert_eq!(notes[0].kind, NotificationKind::BookingCancelled);
        assert_eq!(
            notes[0].description,
            "Your booking for Ergonomic Chairs has been cancelled"
        );
        let booking = repo.get_booking_by_id(BookingId::new(2).unwrap()).unwrap();
        assert_eq!(booking.unwrap().status, BookingStatus::Cancelled);
    }

    #[test]
    fn cancelling_twice_is_a_no_op() {
        let mut repo = seeded();
        let mut notes: Vec<Notification> = Vec::new();

        assert!(cancel_booking(action(3), &mut repo, &mut notes).unwrap());
        assert!(!cancel_booking(action(3), &mut repo, &mut notes).unwrap());
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn completed_booking_cannot_be_cancelled() {
        let mut repo = seeded();

        let err = cancel_booking(action(1), &mut repo, &mut silent()).unwrap_err();
        assert_eq!(
            err,
            ServiceError::InvalidTransition {
                from: BookingStatus::Completed,
                to: BookingStatus::Cancelled,
            }
        );
    }

    #[test]
    fn cancelling_unknown_booking_is_not_found() {
        let mut repo = seeded();
        let err = cancel_booking(action(99), &mut repo, &mut silent()).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn completes_pending_booking_once() {
        let mut repo = seeded();

        assert!(complete_booking(action(3), &mut repo).unwrap());
        assert!(!complete_booking(action(3), &mut repo).unwrap());
        assert!(matches!(
            complete_booking(action(4), &mut repo),
            Err(ServiceError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn edit_request_notifies_for_active_booking() {
        let repo = seeded();
        let mut notes: Vec<Notification> = Vec::new();

        request_booking_edit(action(2), &repo, &mut notes).unwrap();
        assert_eq!(notes[0].kind, NotificationKind::EditRequested);

        assert!(request_booking_edit(action(4), &repo, &mut notes).is_err());
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn write_failure_is_internal() {
        let mut repo = seeded().failing_writes();
        let err = cancel_booking(action(2), &mut repo, &mut silent()).unwrap_err();
        assert_eq!(err, ServiceError::Internal);
    }
}
