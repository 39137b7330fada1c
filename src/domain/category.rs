use serde::Serialize;

use crate::domain::slot::{DurationMinutes, TimeSlot};
use crate::domain::types::{
    CategoryDescription, CategoryKey, CategoryName, LocationName, SeatCount, TypeConstraintError,
};

/// Bookable chair category with capacity counters.
///
/// `available` never exceeds `total`; the constructor is the only way to
/// build one.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResourceCategory {
    pub id: CategoryKey,
    pub name: CategoryName,
    pub description: CategoryDescription,
    available: SeatCount,
    total: SeatCount,
    pub location: LocationName,
}

impl ResourceCategory {
    pub fn new(
        id: CategoryKey,
        name: CategoryName,
        description: CategoryDescription,
        available: SeatCount,
        total: SeatCount,
        location: LocationName,
    ) -> Result<Self, TypeConstraintError> {
        if available > total {
            return Err(TypeConstraintError::CapacityExceeded {
                available: available.get(),
                total: total.get(),
            });
        }
        Ok(Self {
            id,
            name,
            description,
            available,
            total,
            location,
        })
    }

    pub fn available(&self) -> SeatCount {
        self.available
    }

    pub fn total(&self) -> SeatCount {
        self.total
    }
}

/// Reference data handed to the repository at construction time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub categories: Vec<ResourceCategory>,
    pub time_slots: Vec<TimeSlot>,
    pub durations: Vec<DurationMinutes>,
}

impl Catalog {
    pub fn new(
        categories: Vec<ResourceCategory>,
        time_slots: Vec<TimeSlot>,
        durations: Vec<DurationMinutes>,
    ) -> Result<Self, TypeConstraintError> {
        for (index, category) in categories.iter().enumerate() {
            if categories[..index].iter().any(|c| c.id == category.id) {
                return Err(TypeConstraintError::InvalidValue(format!(
                    "duplicate category id: {}",
                    category.id
                )));
            }
        }
        Ok(Self {
            categories,
            time_slots,
            durations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, available: i32, total: i32) -> Result<ResourceCategory, TypeConstraintError> {
        ResourceCategory::new(
            CategoryKey::new(id)?,
            CategoryName::new("Ergonomic Chairs")?,
            CategoryDescription::new("Lumbar support")?,
            SeatCount::new(available)?,
            SeatCount::new(total)?,
            LocationName::new("Floor 2, Zone A")?,
        )
    }

    #[test]
    fn rejects_more_available_than_total() {
        let err = category("ergonomic", 13, 12).unwrap_err();
        assert_eq!(
            err,
            TypeConstraintError::CapacityExceeded {
                available: 13,
                total: 12
            }
        );
    }

    #[test]
    fn accepts_fully_booked_category() {
        let category = category("bean-bag", 0, 6).unwrap();
        assert_eq!(category.available(), 0);
        assert_eq!(category.total(), 6);
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let a = category("ergonomic", 1, 2).unwrap();
        let b = category("ergonomic", 1, 2).unwrap();
        assert!(Catalog::new(vec![a, b], vec![], vec![]).is_err());
    }
}
