//! High-level store operations.
//!
//! Free functions over any [`FullRepository`] implementation. Handlers and
//! workflows call these rather than the trait directly, so logging and
//! boundary validation live in one place.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::api::{BookingId, ClientId};
use crate::db::repository::{
    BookingFeed, BookingRepository, ErrorContext, FullRepository, RepositoryError,
    RepositoryResult,
};
use crate::models::booking::Booking;

/// Whether the store is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// All bookings, in arrival order.
pub async fn list_bookings(repo: &dyn FullRepository) -> RepositoryResult<Vec<Booking>> {
    repo.list_bookings().await
}

/// One booking by identity; `NotFound` if it does not exist.
pub async fn get_booking(repo: &dyn FullRepository, id: &BookingId) -> RepositoryResult<Booking> {
    repo.get_booking(id).await?.ok_or_else(|| {
        RepositoryError::not_found_with_context(
            format!("Booking {} not found", id),
            ErrorContext::new("get_booking")
                .with_entity("booking")
                .with_entity_id(id),
        )
    })
}

/// Persist a new booking and return the stored value with its identity set.
pub async fn store_booking(
    repo: &dyn FullRepository,
    booking: Booking,
) -> RepositoryResult<Booking> {
    let mut stored = booking;
    let id = repo.add_booking(stored.clone()).await?;
    info!(booking_id = %id, client_id = %stored.client_id, "booking created");
    stored.id = Some(id);
    Ok(stored)
}

/// Delete a booking by identity.
pub async fn remove_booking(repo: &dyn FullRepository, id: &BookingId) -> RepositoryResult<()> {
    repo.delete_booking(id).await?;
    info!(booking_id = %id, "booking deleted");
    Ok(())
}

/// Bookings stored on `date`, ordered by time of day.
pub async fn bookings_on_date(
    repo: &dyn FullRepository,
    date: NaiveDate,
) -> RepositoryResult<Vec<Booking>> {
    repo.bookings_on_date(date).await
}

/// Bookings stored in `[start, end]`, ordered by date.
pub async fn bookings_in_range(
    repo: &dyn FullRepository,
    start: NaiveDate,
    end: NaiveDate,
) -> RepositoryResult<Vec<Booking>> {
    if start > end {
        return Err(RepositoryError::validation_with_context(
            format!("Invalid date range: {} > {}", start, end),
            ErrorContext::new("bookings_in_range"),
        ));
    }
    repo.bookings_in_range(start, end).await
}

/// All bookings for one client.
pub async fn bookings_for_client(
    repo: &dyn FullRepository,
    client_id: &ClientId,
) -> RepositoryResult<Vec<Booking>> {
    repo.bookings_for_client(client_id).await
}

/// Subscribe to the store's booking change feed.
pub fn subscribe_bookings(repo: &dyn FullRepository) -> BookingFeed {
    repo.subscribe_bookings()
}

/// Scheduled bookings on or after `today`, date-then-time order.
pub async fn upcoming_bookings(
    repo: &dyn FullRepository,
    today: NaiveDate,
    limit: Option<usize>,
) -> RepositoryResult<Vec<Booking>> {
    let upcoming = repo.upcoming_bookings(today, limit).await?;
    debug!(count = upcoming.len(), "upcoming bookings fetched");
    Ok(upcoming)
}
