//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic. Date path segments are validated here, at the
//! boundary, so the engine below only ever sees well-formed dates.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use chrono::{NaiveDate, Utc};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;

use super::dto::{
    BookingListResponse, BookingRangeQuery, ClientListResponse, ClientsQuery,
    CreateBookingRequest, DayScheduleResponse, HealthResponse, IntegrityReportResponse,
    UpcomingQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{Booking, BookingId};
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    raw.parse().map_err(|_| {
        AppError::BadRequest(format!("invalid date {:?}, expected YYYY-MM-DD", raw))
    })
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Day schedule
// =============================================================================

/// GET /v1/schedule/{date}
///
/// Composed schedule for one day: the full slot grid with bookings attached.
pub async fn get_day_schedule(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> HandlerResult<DayScheduleResponse> {
    let date = parse_date(&date)?;
    let schedule = services::day_view(state.repository.as_ref(), date).await?;
    Ok(Json(schedule.into()))
}

// =============================================================================
// Bookings
// =============================================================================

/// GET /v1/bookings
///
/// All bookings, optionally restricted to a stored-date range.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingRangeQuery>,
) -> HandlerResult<BookingListResponse> {
    let bookings = match (query.from, query.to) {
        (None, None) => db_services::list_bookings(state.repository.as_ref()).await?,
        (Some(from), Some(to)) => {
            db_services::bookings_in_range(state.repository.as_ref(), from, to).await?
        }
        _ => {
            return Err(AppError::BadRequest(
                "range filtering requires both from and to".to_string(),
            ))
        }
    };

    Ok(Json(bookings.into()))
}

/// GET /v1/bookings/upcoming
///
/// Scheduled bookings from today (or `from`) onward, date-then-time order.
pub async fn upcoming_bookings(
    State(state): State<AppState>,
    Query(query): Query<UpcomingQuery>,
) -> HandlerResult<BookingListResponse> {
    let from = query.from.unwrap_or_else(|| Utc::now().date_naive());
    let bookings =
        db_services::upcoming_bookings(state.repository.as_ref(), from, query.limit).await?;
    Ok(Json(bookings.into()))
}

/// POST /v1/bookings
///
/// Create a booking through the conflict-gated workflow. Refused requests
/// come back as 409 (conflict) or 400 (validation) with a descriptive reason.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = services::create_booking(
        state.repository.as_ref(),
        state.directory.as_ref(),
        request.into(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /v1/bookings/{id}
///
/// One booking by identity.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Booking> {
    let booking =
        db_services::get_booking(state.repository.as_ref(), &BookingId::new(id)).await?;
    Ok(Json(booking))
}

/// DELETE /v1/bookings/{id}
///
/// Cancel a booking. 404 if the identity is unknown; the collection is left
/// unchanged on failure.
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    services::cancel_booking(state.repository.as_ref(), &BookingId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/bookings/events
///
/// Stream the booking collection via Server-Sent Events (SSE). The current
/// collection is delivered immediately, then again in full after every
/// change; consumers re-project their views from each snapshot.
pub async fn stream_booking_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut feed = db_services::subscribe_bookings(state.repository.as_ref());

    let stream = async_stream::stream! {
        let initial = BookingListResponse::from(feed.current());
        yield Ok(Event::default()
            .data(serde_json::to_string(&initial).unwrap_or_default()));

        while let Some(snapshot) = feed.changed().await {
            let update = BookingListResponse::from(snapshot);
            yield Ok(Event::default()
                .data(serde_json::to_string(&update).unwrap_or_default()));
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

// =============================================================================
// Clients
// =============================================================================

/// GET /v1/clients
///
/// The client roster, filtered by the `q` substring when given.
pub async fn search_clients(
    State(state): State<AppState>,
    Query(query): Query<ClientsQuery>,
) -> HandlerResult<ClientListResponse> {
    let matches = match query.q.as_deref() {
        Some(q) => state.directory.search(q),
        None => state.directory.all().iter().collect(),
    };

    let clients: Vec<_> = matches.into_iter().cloned().collect();
    let total = clients.len();
    Ok(Json(ClientListResponse { clients, total }))
}

// =============================================================================
// Reports
// =============================================================================

/// GET /v1/reports/integrity
///
/// Post-hoc integrity report: duplicate bookings plus aggregate statistics.
pub async fn get_integrity_report(
    State(state): State<AppState>,
) -> HandlerResult<IntegrityReportResponse> {
    let report = services::integrity_report(state.repository.as_ref()).await?;
    let client_stats = services::client_stats(state.directory.as_ref());

    Ok(Json(IntegrityReportResponse {
        stats: report.stats,
        client_stats,
        duplicate_count: report.duplicates.len(),
        duplicates: report.duplicates,
    }))
}
