//! Helpers for integration tests.
#![allow(dead_code)]

use std::io::Write;

use chrono::NaiveDate;
use pushkind_chairs::commands::Session;
use pushkind_chairs::repository::InMemoryRepository;
use pushkind_chairs::settings::Settings;
use tempfile::NamedTempFile;

/// The day every integration test treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 15).expect("valid date")
}

/// Session over the built-in catalog with an empty booking store.
pub fn session() -> Session {
    let settings = Settings::load(None).expect("Failed to load default settings");
    let catalog = settings.catalog().expect("Default catalog is invalid");
    Session::new(
        InMemoryRepository::new(catalog),
        settings.app.user_name,
        settings.app.upcoming_preview,
    )
    .with_today(today())
}

/// Writes `contents` to a temporary YAML file that lives as long as the handle.
pub fn yaml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write settings");
    file
}

/// Fills every form field by running commands.
pub fn fill(session: &mut Session, date: &str, chair: &str, time: &str, minutes: u32) {
    for line in [
        format!("date {date}"),
        format!("chair {chair}"),
        format!("time {time}"),
        format!("duration {minutes}"),
    ] {
        session.execute(&line).expect("Form update failed");
    }
}
