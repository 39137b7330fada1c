//! Layered application settings.
//!
//! Sources, lowest priority first: the embedded `config/default.yaml`, an
//! optional YAML file, then `CHAIRS_*` environment variables with `__`
//! between nested keys (`CHAIRS_APP__USER_NAME=Ada`).

use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::category::{Catalog, ResourceCategory};
use crate::domain::slot::{DurationMinutes, TimeSlot};
use crate::domain::types::{
    CategoryDescription, CategoryKey, CategoryName, LocationName, SeatCount, TypeConstraintError,
};

const DEFAULT_SETTINGS: &str = include_str!("../config/default.yaml");
const ENV_PREFIX: &str = "CHAIRS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid catalog: {0}")]
    Catalog(#[from] TypeConstraintError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Name used in the dashboard greeting.
    pub user_name: String,
    /// How many upcoming bookings the dashboard lists.
    pub upcoming_preview: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategorySettings {
    pub id: String,
    pub name: String,
    pub description: String,
    pub available: i32,
    pub total: i32,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    pub categories: Vec<CategorySettings>,
    pub time_slots: Vec<String>,
    pub durations: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub catalog: CatalogSettings,
}

impl Settings {
    /// Loads defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, environment: Environment) -> Result<Self, SettingsError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Yaml));
        }
        let settings = builder
            .add_source(environment.prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Validates the configured reference data into a [`Catalog`].
    pub fn catalog(&self) -> Result<Catalog, SettingsError> {
        let categories = self
            .catalog
            .categories
            .iter()
            .map(|c| {
                ResourceCategory::new(
                    CategoryKey::new(c.id.as_str())?,
                    CategoryName::new(c.name.as_str())?,
                    CategoryDescription::new(c.description.as_str())?,
                    SeatCount::new(c.available)?,
                    SeatCount::new(c.total)?,
                    LocationName::new(c.location.as_str())?,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let time_slots = self
            .catalog
            .time_slots
            .iter()
            .map(|s| TimeSlot::parse(s))
            .collect::<Result<Vec<_>, _>>()?;
        let durations = self
            .catalog
            .durations
            .iter()
            .map(|d| DurationMinutes::new(*d))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog::new(categories, time_slots, durations)?)
    }
}
