use crate::domain::category::ResourceCategory;
use crate::domain::slot::{DurationMinutes, TimeSlot};
use crate::domain::types::CategoryKey;
use crate::repository::{CategoryReader, InMemoryRepository, RepositoryResult, SlotReader};

impl CategoryReader for InMemoryRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<ResourceCategory>> {
        Ok(self.catalog.categories.clone())
    }

    fn get_category_by_id(&self, id: &CategoryKey) -> RepositoryResult<Option<ResourceCategory>> {
        Ok(self
            .catalog
            .categories
            .iter()
            .find(|c| &c.id == id)
            .cloned())
    }
}

impl SlotReader for InMemoryRepository {
    fn list_time_slots(&self) -> RepositoryResult<Vec<TimeSlot>> {
        Ok(self.catalog.time_slots.clone())
    }

    fn list_durations(&self) -> RepositoryResult<Vec<DurationMinutes>> {
        Ok(self.catalog.durations.clone())
    }
}
