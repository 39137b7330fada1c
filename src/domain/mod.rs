//! Persistence-agnostic domain entities and value objects.

pub mod booking;
pub mod category;
pub mod notification;
pub mod slot;
pub mod types;
