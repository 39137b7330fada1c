use thiserror::Error;

use crate::domain::types::BookingStatus;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The draft was submitted with unset fields.
    #[error("missing information: {}", .0.join(", "))]
    MissingInformation(Vec<&'static str>),
    /// A selection is well-formed but not acceptable.
    #[error("validation failed: {0}")]
    Validation(String),
    /// Raw form input could not be parsed.
    #[error("invalid form: {0}")]
    Form(String),
    /// A domain value violated its constraints.
    #[error("type constraint violated: {0}")]
    TypeConstraint(String),
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The booking flow is not in a state that allows the operation.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    /// A booking cannot move between the given statuses.
    #[error("cannot change booking from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
