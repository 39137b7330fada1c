//! User-facing messages emitted by the booking workflow.
//!
//! The core only produces `(title, description, severity)` triples; how they
//! are shown is up to the front end.

use serde::Serialize;

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Destructive,
}

/// What happened, for callers that react to notifications programmatically.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    MissingInformation,
    InvalidSelection,
    UnknownCategory,
    BookingConfirmed,
    BookingCancelled,
    EditRequested,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn missing_information() -> Self {
        Self::new(
            NotificationKind::MissingInformation,
            "Missing Information",
            "Please fill in all booking details",
            Severity::Destructive,
        )
    }

    pub fn invalid_selection(description: impl Into<String>) -> Self {
        Self::new(
            NotificationKind::InvalidSelection,
            "Invalid Selection",
            description,
            Severity::Destructive,
        )
    }

    pub fn unknown_category(category_id: &str) -> Self {
        Self::new(
            NotificationKind::UnknownCategory,
            "Unknown Chair Type",
            format!("Chair type \"{category_id}\" is not available"),
            Severity::Destructive,
        )
    }

    pub fn booking_confirmed() -> Self {
        Self::new(
            NotificationKind::BookingConfirmed,
            "Booking Confirmed!",
            "Your chair has been successfully reserved",
            Severity::Success,
        )
    }

    pub fn booking_cancelled(chair: &str) -> Self {
        Self::new(
            NotificationKind::BookingCancelled,
            "Booking Cancelled",
            format!("Your booking for {chair} has been cancelled"),
            Severity::Info,
        )
    }

    pub fn edit_requested(chair: &str) -> Self {
        Self::new(
            NotificationKind::EditRequested,
            "Edit Booking",
            format!("Editing functionality for {chair} will be available soon"),
            Severity::Info,
        )
    }
}

/// Receiver of workflow notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
