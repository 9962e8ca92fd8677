//! Day-schedule projection.

use chrono::NaiveDate;

use crate::db::repository::{BookingRepository, FullRepository, RepositoryResult};
use crate::models::booking::Booking;
use crate::models::schedule::DaySchedule;
use crate::scheduler::compose_schedule;

/// Compose the schedule for `date` from the store's current collection.
pub async fn day_view(
    repo: &dyn FullRepository,
    date: NaiveDate,
) -> RepositoryResult<DaySchedule> {
    let bookings = repo.list_bookings().await?;
    Ok(compose_schedule(date, &bookings))
}

/// Compose the schedule for `date` from a snapshot already in hand.
///
/// Change-feed consumers re-project on every delivered snapshot instead of
/// fetching again.
pub fn day_view_from_snapshot(date: NaiveDate, bookings: &[Booking]) -> DaySchedule {
    compose_schedule(date, bookings)
}
