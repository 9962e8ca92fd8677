// ============================================================================
// Booking and client domain types
// ============================================================================
//
// The store keeps bookings as flat documents (`date` / `isRecurring` /
// `recurringDay` fields). Internally a booking carries a tagged `Occurrence`
// instead, so the state "recurring without a day" cannot be represented.
// Conversion happens at the serde boundary via the flat `BookingWire` shape.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::api::{BookingId, ClientId, CoachId};
use crate::models::time::{weekday_from_index, weekday_index, SlotTime};

/// Session length in minutes. Every slot in the grid hosts one session.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Category of a coaching call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallType {
    Onboarding,
    FollowUp,
    Consultation,
    Assessment,
}

impl CallType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallType::Onboarding => "onboarding",
            CallType::FollowUp => "follow-up",
            CallType::Consultation => "consultation",
            CallType::Assessment => "assessment",
        }
    }
}

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

/// When a booking occupies the calendar.
///
/// A booking is either a one-off on a single calendar date, or a weekly
/// series on a fixed day of the week. The `anchor` of a weekly series is the
/// date of its first occurrence and is consulted only by the conflict-horizon
/// scan, never by day matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    Single { date: NaiveDate },
    Weekly { weekday: Weekday, anchor: NaiveDate },
}

impl Occurrence {
    /// Weekly series starting at `anchor`, recurring on the anchor's weekday.
    pub fn weekly_from_anchor(anchor: NaiveDate) -> Self {
        Occurrence::Weekly {
            weekday: anchor.weekday(),
            anchor,
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self, Occurrence::Weekly { .. })
    }

    /// The stored calendar date: the date itself for a one-off, the series
    /// anchor for a weekly booking.
    pub fn anchor_date(&self) -> NaiveDate {
        match *self {
            Occurrence::Single { date } => date,
            Occurrence::Weekly { anchor, .. } => anchor,
        }
    }
}

/// One coaching appointment.
///
/// Treated as an immutable value during reconciliation: the store creates and
/// deletes bookings, the engine only reads snapshots. The `id` is absent
/// until the store has assigned one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BookingWire", into = "BookingWire")]
pub struct Booking {
    pub id: Option<BookingId>,
    pub coach_id: CoachId,
    pub client_id: ClientId,
    pub client_name: String,
    pub client_phone: String,
    pub time: SlotTime,
    pub call_type: CallType,
    pub occurrence: Occurrence,
    pub status: BookingStatus,
    pub duration_minutes: u32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_recurring(&self) -> bool {
        self.occurrence.is_recurring()
    }

    /// The stored calendar date (series anchor for weekly bookings).
    pub fn anchor_date(&self) -> NaiveDate {
        self.occurrence.anchor_date()
    }
}

/// Error for booking documents whose flat shape violates the
/// single-date/weekly invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingShapeError {
    #[error("recurring booking is missing recurringDay")]
    MissingRecurringDay,
    #[error("recurringDay {0} is out of range (expected 0-6, Sunday-first)")]
    RecurringDayOutOfRange(u8),
    #[error("single-date booking carries recurringDay {0}")]
    UnexpectedRecurringDay(u8),
}

/// Flat document shape of a booking, as the store and the wire carry it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookingId>,
    pub coach_id: CoachId,
    pub client_id: ClientId,
    pub client_name: String,
    pub client_phone: String,
    pub date: NaiveDate,
    pub time: SlotTime,
    pub call_type: CallType,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_day: Option<u8>,
    pub status: BookingStatus,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

impl TryFrom<BookingWire> for Booking {
    type Error = BookingShapeError;

    fn try_from(wire: BookingWire) -> Result<Self, Self::Error> {
        let occurrence = match (wire.is_recurring, wire.recurring_day) {
            (true, Some(index)) => Occurrence::Weekly {
                weekday: weekday_from_index(index)
                    .ok_or(BookingShapeError::RecurringDayOutOfRange(index))?,
                anchor: wire.date,
            },
            (true, None) => return Err(BookingShapeError::MissingRecurringDay),
            (false, Some(index)) => {
                return Err(BookingShapeError::UnexpectedRecurringDay(index))
            }
            (false, None) => Occurrence::Single { date: wire.date },
        };

        Ok(Booking {
            id: wire.id,
            coach_id: wire.coach_id,
            client_id: wire.client_id,
            client_name: wire.client_name,
            client_phone: wire.client_phone,
            time: wire.time,
            call_type: wire.call_type,
            occurrence,
            status: wire.status,
            duration_minutes: wire.duration,
            notes: wire.notes,
            created_at: wire.created_at,
        })
    }
}

impl From<Booking> for BookingWire {
    fn from(booking: Booking) -> Self {
        let (date, is_recurring, recurring_day) = match booking.occurrence {
            Occurrence::Single { date } => (date, false, None),
            Occurrence::Weekly { weekday, anchor } => {
                (anchor, true, Some(weekday_index(weekday)))
            }
        };

        BookingWire {
            id: booking.id,
            coach_id: booking.coach_id,
            client_id: booking.client_id,
            client_name: booking.client_name,
            client_phone: booking.client_phone,
            date,
            time: booking.time,
            call_type: booking.call_type,
            is_recurring,
            recurring_day,
            status: booking.status,
            duration: booking.duration_minutes,
            notes: booking.notes,
            created_at: booking.created_at,
        }
    }
}

/// Lifecycle status of a client in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Inactive,
    Prospect,
}

/// A bookable client from the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub coach_id: CoachId,
    pub status: ClientStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
