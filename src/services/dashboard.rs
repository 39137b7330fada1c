use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::booking::Booking;
use crate::domain::types::BookingStatus;
use crate::dto::dashboard::{DashboardDto, UpcomingBookingDto};
use crate::repository::{BookingListQuery, BookingReader};

use super::{ServiceError, ServiceResult};

fn total_hours<'a>(bookings: impl Iterator<Item = &'a Booking>) -> f64 {
    bookings.map(|b| b.duration.hours()).sum()
}

/// Most frequently booked category; ties go to the one booked first.
fn favorite_category(bookings: &[&Booking]) -> Option<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, booking) in bookings.iter().enumerate() {
        counts
            .entry(booking.category_name.as_str())
            .or_insert((0, position))
            .0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (a_count, a_pos)), (_, (b_count, b_pos))| {
            a_count.cmp(b_count).then(b_pos.cmp(a_pos))
        })
        .map(|(name, _)| name.to_string())
}

/// Figures for the dashboard cards plus a short list of what is coming up.
pub fn show_dashboard<R>(
    today: NaiveDate,
    greeting_name: &str,
    upcoming_limit: usize,
    repo: &R,
) -> ServiceResult<DashboardDto>
where
    R: BookingReader,
{
    let bookings = match repo.list_bookings(BookingListQuery::default()) {
        Ok((_total, bookings)) => bookings,
        Err(e) => {
            log::error!("Failed to list bookings for dashboard: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let kept: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .collect();

    let week = today.iso_week();
    let hours_this_week =
        total_hours(kept.iter().copied().filter(|b| b.date.iso_week() == week));
    let hours_this_month = total_hours(
        kept.iter()
            .copied()
            .filter(|b| b.date.year() == today.year() && b.date.month() == today.month()),
    );

    let success_rate = if bookings.is_empty() {
        None
    } else {
        let percent = kept.len() * 100 / bookings.len();
        u8::try_from(percent).ok()
    };

    let mut upcoming: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.date >= today && b.status.is_active())
        .collect();
    let active_bookings = upcoming.len();
    upcoming.sort_by_key(|b| (b.date, b.start_slot));

    Ok(DashboardDto {
        greeting: format!("Welcome back, {greeting_name}!"),
        active_bookings,
        hours_this_week,
        hours_this_month,
        favorite_category: favorite_category(&kept),
        success_rate,
        upcoming: upcoming
            .into_iter()
            .take(upcoming_limit)
            .map(|b| UpcomingBookingDto::new(b.clone(), today))
            .collect(),
    })
}
