//! Core library exports for the chair booking service.
//!
//! This crate exposes the domain model, forms, repositories, services and the
//! command session used by the `pushkind-chairs` front end.

#[cfg(feature = "data")]
pub mod commands;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "cli")]
pub mod settings;
