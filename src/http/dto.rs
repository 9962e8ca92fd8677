//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Domain types that already derive Serialize/Deserialize (bookings, slots,
//! schedules, clients) are carried as-is; this module adds the request
//! envelopes and the response wrappers around them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export domain types that appear directly in API payloads
pub use crate::api::{Booking, Client, DaySchedule, TimeSlot};
pub use crate::services::{BookingStats, ClientStats};

use crate::api::ClientId;
use crate::models::booking::CallType;
use crate::models::time::{day_name, format_long_date, SlotTime};
use crate::services::BookingRequest;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub database: String,
}

/// Composed day schedule plus the display strings the calendar header shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayScheduleResponse {
    pub date: NaiveDate,
    /// e.g. "Wednesday"
    pub day_name: String,
    /// e.g. "March 6, 2024"
    pub formatted_date: String,
    pub booked: usize,
    pub time_slots: Vec<TimeSlot>,
}

impl From<DaySchedule> for DayScheduleResponse {
    fn from(schedule: DaySchedule) -> Self {
        Self {
            date: schedule.date,
            day_name: day_name(schedule.date).to_string(),
            formatted_date: format_long_date(schedule.date),
            booked: schedule.booked_count(),
            time_slots: schedule.time_slots,
        }
    }
}

/// Booking list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
    pub total: usize,
}

impl From<Vec<Booking>> for BookingListResponse {
    fn from(bookings: Vec<Booking>) -> Self {
        let total = bookings.len();
        Self { bookings, total }
    }
}

/// Query parameters for the booking list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BookingRangeQuery {
    /// Inclusive lower bound on the stored date (optional)
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the stored date (optional)
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

/// Query parameters for the upcoming-bookings endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpcomingQuery {
    /// First date considered upcoming (default: today)
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Maximum number of bookings returned
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request body for creating a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub client_id: ClientId,
    pub date: NaiveDate,
    pub time: SlotTime,
    pub call_type: CallType,
    /// Weekly series on the weekday of `date`. When omitted, follow-up calls
    /// recur and everything else is a one-off.
    #[serde(default)]
    pub is_recurring: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CreateBookingRequest> for BookingRequest {
    fn from(request: CreateBookingRequest) -> Self {
        let recurring = request
            .is_recurring
            .unwrap_or(request.call_type == CallType::FollowUp);
        BookingRequest {
            client_id: request.client_id,
            date: request.date,
            time: request.time,
            call_type: request.call_type,
            recurring,
            notes: request.notes,
        }
    }
}

/// Query parameters for the client directory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientsQuery {
    /// Case-insensitive substring over name, phone, and email
    #[serde(default)]
    pub q: Option<String>,
}

/// Client list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientListResponse {
    pub clients: Vec<Client>,
    pub total: usize,
}

/// Integrity report response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReportResponse {
    pub stats: BookingStats,
    pub client_stats: ClientStats,
    pub duplicate_count: usize,
    pub duplicates: Vec<Booking>,
}
