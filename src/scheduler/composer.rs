//! Day-schedule composition and conflict queries.
//!
//! All functions here are pure read-time computations over a caller-supplied
//! booking collection. They report matches and never reject input; turning a
//! non-empty match set into a refused write is the booking workflow's job.

use std::collections::HashMap;

use chrono::{Days, NaiveDate, Weekday};

use crate::api::ClientId;
use crate::models::booking::{Booking, Occurrence};
use crate::models::schedule::{DaySchedule, TimeSlot};
use crate::models::time::SlotTime;
use crate::scheduler::matcher::occupies_date;
use crate::scheduler::slots::generate_slots;

/// Forward window, in days, scanned for recurring-series collisions.
pub const CONFLICT_HORIZON_DAYS: u64 = 84;

/// Merge the slot grid with `bookings` into the day's schedule.
///
/// For each slot, the first booking in caller-supplied order that occupies
/// `date` at the slot's time wins; later claimants of the same slot are
/// ignored. Two bookings claiming one slot is an upstream data-integrity
/// violation, so first-match is a defined tie-break rather than an error.
pub fn compose_schedule(date: NaiveDate, bookings: &[Booking]) -> DaySchedule {
    let time_slots = generate_slots()
        .into_iter()
        .map(|time| {
            match bookings
                .iter()
                .find(|b| occupies_date(b, date) && b.time == time)
            {
                Some(booking) => TimeSlot::occupied(time, booking.clone()),
                None => TimeSlot::open(time),
            }
        })
        .collect();

    DaySchedule { date, time_slots }
}

/// Every booking with exactly this client, stored date, and time.
///
/// The comparison is against the stored date field (the series anchor for
/// weekly bookings), mirroring how the store indexes the triple. A non-empty
/// result blocks creation of a new booking with the same triple.
pub fn find_same_client_same_slot(
    client_id: &ClientId,
    date: NaiveDate,
    time: SlotTime,
    bookings: &[Booking],
) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.client_id == *client_id && b.anchor_date() == date && b.time == time)
        .cloned()
        .collect()
}

/// Every existing weekly booking for `client_id` on `weekday` at `time`
/// whose anchor falls within `[anchor, anchor + horizon_days]`.
///
/// A non-empty result blocks creation of the new weekly booking.
pub fn find_recurring_conflicts(
    client_id: &ClientId,
    weekday: Weekday,
    time: SlotTime,
    anchor: NaiveDate,
    bookings: &[Booking],
    horizon_days: u64,
) -> Vec<Booking> {
    let Some(horizon_end) = anchor.checked_add_days(Days::new(horizon_days)) else {
        return Vec::new();
    };

    bookings
        .iter()
        .filter(|b| {
            matches!(b.occurrence, Occurrence::Weekly { weekday: day, .. } if day == weekday)
                && b.client_id == *client_id
                && b.time == time
                && b.anchor_date() >= anchor
                && b.anchor_date() <= horizon_end
        })
        .cloned()
        .collect()
}

/// Every booking that shares `(client, date, time)` with at least one other
/// booking in the collection, in input order.
///
/// All members of a duplicate group are reported. Used for the post-hoc
/// integrity report, not for blocking writes.
pub fn find_duplicates(bookings: &[Booking]) -> Vec<Booking> {
    let mut occurrences: HashMap<(&ClientId, NaiveDate, SlotTime), usize> = HashMap::new();
    for booking in bookings {
        *occurrences
            .entry((&booking.client_id, booking.anchor_date(), booking.time))
            .or_insert(0) += 1;
    }

    bookings
        .iter()
        .filter(|b| occurrences[&(&b.client_id, b.anchor_date(), b.time)] > 1)
        .cloned()
        .collect()
}
