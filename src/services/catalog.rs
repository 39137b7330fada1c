use crate::domain::booking::DraftBooking;
use crate::dto::categories::CategoryDto;
use crate::dto::summary::{BookingSummaryDto, NOT_SELECTED, UNKNOWN_CATEGORY};
use crate::repository::{CategoryReader, SlotReader};

use super::{ServiceError, ServiceResult};

pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Start time labels and duration picker entries as `(minutes, label)`.
pub fn show_slot_options<R>(repo: &R) -> ServiceResult<(Vec<String>, Vec<(u32, String)>)>
where
    R: SlotReader,
{
    let slots = repo.list_time_slots().map_err(|e| {
        log::error!("Failed to list time slots: {e}");
        ServiceError::Internal
    })?;
    let durations = repo.list_durations().map_err(|e| {
        log::error!("Failed to list durations: {e}");
        ServiceError::Internal
    })?;

    Ok((
        slots.into_iter().map(|s| s.to_string()).collect(),
        durations.into_iter().map(|d| (d.get(), d.label())).collect(),
    ))
}

/// Renders the in-progress draft. Lookup problems degrade to placeholders
/// instead of failing.
pub fn show_booking_summary<R>(draft: &DraftBooking, repo: &R) -> BookingSummaryDto
where
    R: CategoryReader,
{
    let category = match &draft.category_id {
        None => NOT_SELECTED.to_string(),
        Some(id) => match repo.get_category_by_id(id) {
            Ok(Some(category)) => category.name.into_inner(),
            Ok(None) => {
                log::warn!("Summary references unknown category: {id}");
                UNKNOWN_CATEGORY.to_string()
            }
            Err(e) => {
                log::error!("Failed to get category for summary: {e}");
                UNKNOWN_CATEGORY.to_string()
            }
        },
    };

    BookingSummaryDto {
        date: draft
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| NOT_SELECTED.to_string()),
        category,
        time: draft
            .start_slot
            .map(|s| s.to_string())
            .unwrap_or_else(|| NOT_SELECTED.to_string()),
        duration: draft
            .duration
            .map(|d| d.to_string())
            .unwrap_or_else(|| NOT_SELECTED.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slot::TimeSlot;
    use crate::domain::types::CategoryKey;
    use crate::repository::test::TestRepository;

    #[test]
    fn lists_catalog_categories() {
        let repo = TestRepository::default();

        let categories = show_categories(&repo).unwrap();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].id, "ergonomic");
        assert_eq!(categories[0].available, 8);
        assert_eq!(categories[0].total, 12);
    }

    #[test]
    fn catalog_read_failure_is_internal() {
        let repo = TestRepository::default().failing_reads();
        assert_eq!(show_categories(&repo).unwrap_err(), ServiceError::Internal);
    }

    #[test]
    fn slot_options_carry_labels() {
        let repo = TestRepository::default();

        let (slots, durations) = show_slot_options(&repo).unwrap();
        assert_eq!(slots.len(), 18);
        assert_eq!(slots.last().map(String::as_str), Some("5:30 PM"));
        assert_eq!(durations[2], (90, "1.5 hours".to_string()));
    }

    #[test]
    fn empty_draft_summary_uses_placeholders() {
        let repo = TestRepository::default();

        let summary = show_booking_summary(&DraftBooking::default(), &repo);
        assert_eq!(summary.date, NOT_SELECTED);
        assert_eq!(summary.category, NOT_SELECTED);
        assert_eq!(summary.time, NOT_SELECTED);
        assert_eq!(summary.duration, NOT_SELECTED);
    }

    #[test]
    fn unknown_category_summary_degrades() {
        let repo = TestRepository::default();
        let mut draft = DraftBooking::default();
        draft.set_category(CategoryKey::new("throne").unwrap());
        draft.set_start_slot(TimeSlot::parse("2:00 PM").unwrap());

        let summary = show_booking_summary(&draft, &repo);
        assert_eq!(summary.category, UNKNOWN_CATEGORY);
        assert_eq!(summary.time, "2:00 PM");
    }
}
