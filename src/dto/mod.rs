//! Flat, display-ready views of domain data for the front end.

pub mod bookings;
pub mod categories;
pub mod dashboard;
pub mod summary;
