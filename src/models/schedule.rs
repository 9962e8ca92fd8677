use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::booking::Booking;
use crate::models::time::SlotTime;

/// One bookable position in the daily grid.
///
/// Ephemeral: recomputed on every reconciliation, never persisted. A booked
/// slot carries a by-value copy of the owning booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub time: SlotTime,
    pub is_booked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
}

impl TimeSlot {
    /// An unbooked slot at `time`.
    pub fn open(time: SlotTime) -> Self {
        Self {
            time,
            is_booked: false,
            booking: None,
        }
    }

    /// A slot occupied by `booking`.
    pub fn occupied(time: SlotTime, booking: Booking) -> Self {
        Self {
            time,
            is_booked: true,
            booking: Some(booking),
        }
    }
}

/// A full day's view of the slot grid.
///
/// Slots are in insertion order, which is chronological order of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub time_slots: Vec<TimeSlot>,
}

impl DaySchedule {
    /// Count of occupied slots.
    pub fn booked_count(&self) -> usize {
        self.time_slots.iter().filter(|s| s.is_booked).count()
    }

    /// The slot at `time`, if it exists in the grid.
    pub fn slot_at(&self, time: SlotTime) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|s| s.time == time)
    }
}
