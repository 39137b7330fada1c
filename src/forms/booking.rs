use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::booking::DraftBooking;
use crate::domain::slot::{DurationMinutes, TimeSlot};
use crate::domain::types::{BookingId, CategoryKey, TypeConstraintError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns `None` for absent or blank input; the form treats both as
/// "not selected".
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_date(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| TypeConstraintError::InvalidDate(value.to_string()))
}

/// Raw booking selection as typed by the user. Any subset of fields may be
/// present; present fields overwrite the draft.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct BookingForm {
    #[validate(length(max = 10))]
    pub date: Option<String>,
    #[validate(length(max = 64))]
    pub category_id: Option<String>,
    #[validate(length(max = 8))]
    pub start_slot: Option<String>,
    #[validate(length(max = 4))]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFormPayload {
    pub date: Option<NaiveDate>,
    pub category_id: Option<CategoryKey>,
    pub start_slot: Option<TimeSlot>,
    pub duration: Option<DurationMinutes>,
}

impl BookingFormPayload {
    /// Copies every present field onto `draft`, leaving the rest untouched.
    pub fn apply_to(self, draft: &mut DraftBooking) {
        if let Some(date) = self.date {
            draft.set_date(date);
        }
        if let Some(category_id) = self.category_id {
            draft.set_category(category_id);
        }
        if let Some(slot) = self.start_slot {
            draft.set_start_slot(slot);
        }
        if let Some(duration) = self.duration {
            draft.set_duration(duration);
        }
    }
}

#[derive(Debug, Error)]
pub enum BookingFormError {
    #[error("Booking form validation failed: {0}")]
    Validation(String),
    #[error("Booking form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for BookingFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for BookingFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<BookingForm> for BookingFormPayload {
    type Error = BookingFormError;

    fn try_from(value: BookingForm) -> Result<Self, Self::Error> {
        let value = BookingForm {
            date: non_blank(value.date),
            category_id: non_blank(value.category_id),
            start_slot: non_blank(value.start_slot),
            duration: non_blank(value.duration),
        };
        value.validate()?;

        Ok(Self {
            date: value.date.as_deref().map(parse_date).transpose()?,
            category_id: value.category_id.map(CategoryKey::new).transpose()?,
            start_slot: value.start_slot.as_deref().map(TimeSlot::parse).transpose()?,
            duration: value
                .duration
                .as_deref()
                .map(DurationMinutes::parse)
                .transpose()?,
        })
    }
}

/// Selects an existing booking to cancel, complete or edit.
#[derive(Debug, Deserialize, Validate)]
pub struct BookingActionForm {
    #[validate(range(min = 1))]
    pub booking_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingActionFormPayload {
    pub booking_id: BookingId,
}

#[derive(Debug, Error)]
pub enum BookingActionFormError {
    #[error("Booking action form validation failed: {0}")]
    Validation(String),
    #[error("Booking action form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for BookingActionFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for BookingActionFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<BookingActionForm> for BookingActionFormPayload {
    type Error = BookingActionFormError;

    fn try_from(value: BookingActionForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            booking_id: BookingId::new(value.booking_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_not_selected() {
        let form = BookingForm {
            date: Some("  ".to_string()),
            category_id: Some(String::new()),
            start_slot: None,
            duration: Some("60".to_string()),
        };

        let payload: BookingFormPayload = form.try_into().unwrap();
        assert_eq!(payload.date, None);
        assert_eq!(payload.category_id, None);
        assert_eq!(payload.start_slot, None);
        assert_eq!(payload.duration.map(DurationMinutes::get), Some(60));
    }

    #[test]
    fn parses_full_selection() {
        let form = BookingForm {
            date: Some("2024-12-20".to_string()),
            category_id: Some(" ergonomic ".to_string()),
            start_slot: Some("10:00 AM".to_string()),
            duration: Some("60".to_string()),
        };

        let payload: BookingFormPayload = form.try_into().unwrap();
        let mut draft = DraftBooking::default();
        payload.apply_to(&mut draft);

        assert!(draft.is_complete());
        assert_eq!(draft.category_id.unwrap().as_str(), "ergonomic");
        assert_eq!(draft.start_slot.unwrap().to_string(), "10:00 AM");
    }

    #[test]
    fn rejects_malformed_date() {
        let form = BookingForm {
            date: Some("20/12/2024".to_string()),
            ..Default::default()
        };

        let payload: Result<BookingFormPayload, _> = form.try_into();
        assert!(matches!(payload, Err(BookingFormError::TypeConstraint(_))));
    }

    #[test]
    fn rejects_overlong_category_key() {
        let form = BookingForm {
            category_id: Some("x".repeat(65)),
            ..Default::default()
        };

        let payload: Result<BookingFormPayload, _> = form.try_into();
        assert!(matches!(payload, Err(BookingFormError::Validation(_))));
    }

    #[test]
    fn apply_keeps_unspecified_fields() {
        let mut draft = DraftBooking::default();
        draft.set_duration(DurationMinutes::new(30).unwrap());

        let payload = BookingFormPayload {
            start_slot: Some(TimeSlot::parse("9:00 AM").unwrap()),
            ..Default::default()
        };
        payload.apply_to(&mut draft);

        assert_eq!(draft.duration.map(DurationMinutes::get), Some(30));
        assert!(draft.start_slot.is_some());
    }

    #[test]
    fn action_form_validates_ids() {
        let payload: BookingActionFormPayload =
            BookingActionForm { booking_id: 3 }.try_into().unwrap();
        assert_eq!(payload.booking_id.get(), 3);

        let payload: Result<BookingActionFormPayload, _> =
            BookingActionForm { booking_id: 0 }.try_into();
        assert!(matches!(payload, Err(BookingActionFormError::Validation(_))));
    }
}
