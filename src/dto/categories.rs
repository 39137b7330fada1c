use serde::Serialize;

use crate::domain::category::ResourceCategory;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub available: i32,
    pub total: i32,
    pub location: String,
}

impl CategoryDto {
    /// Fully booked categories are shown with a warning badge.
    pub fn is_fully_booked(&self) -> bool {
        self.available == 0
    }
}

impl From<ResourceCategory> for CategoryDto {
    fn from(value: ResourceCategory) -> Self {
        Self {
            available: value.available().get(),
            total: value.total().get(),
            id: value.id.into_inner(),
            name: value.name.into_inner(),
            description: value.description.into_inner(),
            location: value.location.into_inner(),
        }
    }
}
