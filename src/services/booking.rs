//! Booking form state and the two-step confirmation flow.
//!
//! The flow is `Idle -> Reviewing -> Idle`. Submitting a complete, valid
//! draft freezes it into a [`ReviewSnapshot`]; confirming writes it to the
//! store and cancelling the review discards it. Either way the draft is
//! cleared afterwards.

use chrono::{NaiveDate, Utc};

use crate::domain::booking::{Booking, BookingRequest, DraftBooking, NewBooking};
use crate::domain::category::ResourceCategory;
use crate::domain::notification::{Notification, Notifier};
use crate::domain::slot::{DurationMinutes, TimeSlot};
use crate::domain::types::CategoryKey;
use crate::forms::booking::BookingFormPayload;
use crate::repository::{BookingWriter, CategoryReader, SlotReader};

use super::{ServiceError, ServiceResult};

/// A complete draft together with the category it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSnapshot {
    pub request: BookingRequest,
    pub category: ResourceCategory,
}

impl ReviewSnapshot {
    pub fn to_new_booking(&self) -> NewBooking {
        NewBooking::new(
            self.request.clone(),
            &self.category,
            Utc::now().naive_utc(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FlowState {
    #[default]
    Idle,
    Reviewing(ReviewSnapshot),
}

/// Owns the draft and the confirmation state for a single user.
#[derive(Debug, Clone, Default)]
pub struct BookingFlow {
    draft: DraftBooking,
    state: FlowState,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DraftBooking {
        &self.draft
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        self.draft.is_complete()
    }

    /// The snapshot under review, if any.
    pub fn review(&self) -> Option<&ReviewSnapshot> {
        match &self.state {
            FlowState::Reviewing(snapshot) => Some(snapshot),
            FlowState::Idle => None,
        }
    }

    fn draft_mut(&mut self) -> ServiceResult<&mut DraftBooking> {
        match self.state {
            FlowState::Idle => Ok(&mut self.draft),
            FlowState::Reviewing(_) => {
                log::error!("Draft changed while a booking is under review");
                Err(ServiceError::InvalidState(
                    "the draft cannot change while a booking is under review",
                ))
            }
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) -> ServiceResult<()> {
        self.draft_mut()?.set_date(date);
        Ok(())
    }

    pub fn set_category(&mut self, category_id: CategoryKey) -> ServiceResult<()> {
        self.draft_mut()?.set_category(category_id);
        Ok(())
    }

    pub fn set_start_slot(&mut self, slot: TimeSlot) -> ServiceResult<()> {
        self.draft_mut()?.set_start_slot(slot);
        Ok(())
    }

    pub fn set_duration(&mut self, duration: DurationMinutes) -> ServiceResult<()> {
        self.draft_mut()?.set_duration(duration);
        Ok(())
    }

    /// Applies every field present in a parsed form.
    pub fn update_draft(&mut self, payload: BookingFormPayload) -> ServiceResult<()> {
        payload.apply_to(self.draft_mut()?);
        Ok(())
    }

    pub fn clear_draft(&mut self) -> ServiceResult<()> {
        self.draft_mut()?.clear();
        Ok(())
    }

    /// Validates the draft and moves the flow into review.
    ///
    /// Never touches the booking store. On failure the draft is left as is
    /// and a notification explains what to fix.
    pub fn submit<R, N>(
        &mut self,
        today: NaiveDate,
        repo: &R,
        notifier: &mut N,
    ) -> ServiceResult<ReviewSnapshot>
    where
        R: CategoryReader + SlotReader,
        N: Notifier + ?Sized,
    {
        if let FlowState::Reviewing(_) = self.state {
            log::error!("Submit called while a booking is already under review");
            return Err(ServiceError::InvalidState(
                "a booking is already under review",
            ));
        }

        let request = match self.draft.to_request() {
            Ok(request) => request,
            Err(missing) => {
                log::info!("Booking submitted with missing fields: {missing:?}");
                notifier.notify(Notification::missing_information());
                return Err(ServiceError::MissingInformation(missing));
            }
        };

        if request.date < today {
            notifier.notify(Notification::invalid_selection(
                "Please pick today or a later date",
            ));
            return Err(ServiceError::Validation(format!(
                "{} is in the past",
                request.date
            )));
        }

        let category = match repo.get_category_by_id(&request.category_id) {
            Ok(Some(category)) => category,
            Ok(None) => {
                log::warn!("Unknown chair category: {}", request.category_id);
                notifier.notify(Notification::unknown_category(&request.category_id));
                return Err(ServiceError::NotFound);
            }
            Err(e) => {
                log::error!("Failed to get category: {e}");
                return Err(ServiceError::Internal);
            }
        };

        if category.available() == 0 {
            notifier.notify(Notification::invalid_selection(format!(
                "No {} are available",
                category.name
            )));
            return Err(ServiceError::Validation(format!(
                "{} has no available seats",
                category.id
            )));
        }

        let (slots, durations) = match (repo.list_time_slots(), repo.list_durations()) {
            (Ok(slots), Ok(durations)) => (slots, durations),
            (Err(e), _) | (_, Err(e)) => {
                log::error!("Failed to list booking options: {e}");
                return Err(ServiceError::Internal);
            }
        };

        if !slots.contains(&request.start_slot) {
            notifier.notify(Notification::invalid_selection(format!(
                "{} is not an available start time",
                request.start_slot
            )));
            return Err(ServiceError::Validation(format!(
                "start time {} is not offered",
                request.start_slot
            )));
        }

        if !durations.contains(&request.duration) {
            notifier.notify(Notification::invalid_selection(format!(
                "{} is not an available duration",
                request.duration.label()
            )));
            return Err(ServiceError::Validation(format!(
                "duration {} is not offered",
                request.duration
            )));
        }

        let snapshot = ReviewSnapshot { request, category };
        self.state = FlowState::Reviewing(snapshot.clone());
        Ok(snapshot)
    }

    /// Commits the booking under review and resets the form.
    ///
    /// If the store rejects the write the flow stays in review so the user
    /// can retry.
    pub fn confirm<R, N>(&mut self, repo: &mut R, notifier: &mut N) -> ServiceResult<Booking>
    where
        R: BookingWriter,
        N: Notifier + ?Sized,
    {
        let FlowState::Reviewing(snapshot) = &self.state else {
            log::error!("Confirm called with no booking under review");
            return Err(ServiceError::InvalidState(
                "confirm requires a booking under review",
            ));
        };

        let new_booking = snapshot.to_new_booking();
        match repo.create_booking(&new_booking) {
            Ok(booking) => {
                log::info!(
                    "Confirmed booking {} for {} on {}",
                    booking.id,
                    booking.category_name,
                    booking.date
                );
                notifier.notify(Notification::booking_confirmed());
                self.reset();
                Ok(booking)
            }
            Err(e) => {
                log::error!("Failed to create booking: {e}");
                Err(ServiceError::Internal)
            }
        }
    }

    /// Discards the booking under review without touching the store.
    pub fn cancel_review(&mut self) -> ServiceResult<()> {
        if let FlowState::Idle = self.state {
            log::error!("Cancel review called with no booking under review");
            return Err(ServiceError::InvalidState(
                "cancel requires a booking under review",
            ));
        }
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.state = FlowState::Idle;
        self.draft.clear();
    }
}
