//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service or repository error types, so
//! the `From` impls live here instead of next to each error.

use crate::commands::CommandError;
use crate::domain::types::TypeConstraintError;
use crate::forms::booking::{BookingActionFormError, BookingFormError};
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<BookingFormError> for ServiceError {
    fn from(val: BookingFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<BookingActionFormError> for ServiceError {
    fn from(val: BookingActionFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<CommandError> for ServiceError {
    fn from(val: CommandError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
