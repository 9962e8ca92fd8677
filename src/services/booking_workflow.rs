//! Booking creation and cancellation.
//!
//! Creation is conflict-gated: the workflow fetches the current booking
//! collection, runs the conflict queries over it, and refuses the write with
//! a descriptive error when any query matches. The check-then-write sequence
//! is not atomic across callers; serializing concurrent writers is the
//! store's responsibility, not this workflow's.

use chrono::{Datelike, NaiveDate, Utc};
use tracing::{info, warn};

use crate::api::ClientId;
use crate::clients::ClientDirectory;
use crate::db::repository::{FullRepository, RepositoryError};
use crate::db::services as db_services;
use crate::models::booking::{
    Booking, BookingStatus, CallType, Occurrence, DEFAULT_DURATION_MINUTES,
};
use crate::models::time::SlotTime;
use crate::scheduler::{
    find_recurring_conflicts, find_same_client_same_slot, slots, CONFLICT_HORIZON_DAYS,
};

/// A request to create a booking, as the booking form submits it.
///
/// The client is referenced by identity; the workflow resolves the
/// denormalized name/phone/coach fields from the directory.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub client_id: ClientId,
    pub date: NaiveDate,
    pub time: SlotTime,
    pub call_type: CallType,
    /// Weekly series on the weekday of `date`, anchored there.
    pub recurring: bool,
    pub notes: Option<String>,
}

impl BookingRequest {
    /// A one-off request with the conventional recurrence rule applied:
    /// follow-up calls repeat weekly, everything else is a single session.
    pub fn with_default_recurrence(
        client_id: ClientId,
        date: NaiveDate,
        time: SlotTime,
        call_type: CallType,
    ) -> Self {
        Self {
            client_id,
            date,
            time,
            call_type,
            recurring: call_type == CallType::FollowUp,
            notes: None,
        }
    }
}

fn conflict_dates(existing: &[Booking]) -> String {
    existing
        .iter()
        .map(|b| b.anchor_date().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why a booking request was refused.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The request itself is malformed; nothing was checked against the store.
    #[error("invalid booking request: {0}")]
    Validation(String),

    /// The client already holds this exact date/time slot.
    #[error("client already has a booking at this time; choose a different time or client")]
    DuplicateSlot { existing: Vec<Booking> },

    /// An existing weekly series for this client collides within the scan
    /// horizon.
    #[error("recurring booking conflicts detected on: {}; choose a different time", conflict_dates(.existing))]
    RecurringConflict { existing: Vec<Booking> },

    /// The store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Create a booking, refusing it when a conflict query matches.
pub async fn create_booking(
    repo: &dyn FullRepository,
    directory: &ClientDirectory,
    request: BookingRequest,
) -> Result<Booking, BookingError> {
    if !slots::is_grid_slot(request.time) {
        return Err(BookingError::Validation(format!(
            "{} is not a bookable slot",
            request.time
        )));
    }

    let client = directory.get(&request.client_id).ok_or_else(|| {
        BookingError::Validation(format!("unknown client {}", request.client_id))
    })?;

    let bookings = db_services::list_bookings(repo).await?;

    let existing =
        find_same_client_same_slot(&request.client_id, request.date, request.time, &bookings);
    if !existing.is_empty() {
        warn!(
            client_id = %request.client_id,
            date = %request.date,
            time = %request.time,
            "booking refused: slot already held by this client"
        );
        return Err(BookingError::DuplicateSlot { existing });
    }

    let occurrence = if request.recurring {
        let weekday = request.date.weekday();
        let collisions = find_recurring_conflicts(
            &request.client_id,
            weekday,
            request.time,
            request.date,
            &bookings,
            CONFLICT_HORIZON_DAYS,
        );
        if !collisions.is_empty() {
            warn!(
                client_id = %request.client_id,
                time = %request.time,
                collisions = collisions.len(),
                "booking refused: recurring series collision"
            );
            return Err(BookingError::RecurringConflict {
                existing: collisions,
            });
        }

        Occurrence::Weekly {
            weekday,
            anchor: request.date,
        }
    } else {
        Occurrence::Single { date: request.date }
    };

    let booking = Booking {
        id: None,
        coach_id: client.coach_id.clone(),
        client_id: client.id.clone(),
        client_name: client.name.clone(),
        client_phone: client.phone.clone(),
        time: request.time,
        call_type: request.call_type,
        occurrence,
        status: BookingStatus::Scheduled,
        duration_minutes: DEFAULT_DURATION_MINUTES,
        notes: request.notes,
        created_at: Utc::now(),
    };

    let stored = db_services::store_booking(repo, booking).await?;
    info!(
        booking_id = %stored.id.as_ref().map(|id| id.value()).unwrap_or("?"),
        client = %stored.client_name,
        recurring = stored.is_recurring(),
        "booking accepted"
    );
    Ok(stored)
}

/// Cancel (delete) a booking by identity.
///
/// A failed deletion leaves the collection unchanged.
pub async fn cancel_booking(
    repo: &dyn FullRepository,
    id: &crate::api::BookingId,
) -> Result<(), BookingError> {
    db_services::remove_booking(repo, id).await?;
    Ok(())
}
