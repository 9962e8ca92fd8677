//! Booking-to-date matching.

use chrono::{Datelike, NaiveDate};

use crate::models::booking::{Booking, Occurrence};

/// Does `booking` occupy `target_date`?
///
/// A weekly booking matches on day-of-week alone: the series anchor is not
/// consulted, so a weekly booking also occupies matching weekdays that
/// precede its anchor. A one-off matches only its own calendar date.
pub fn occupies_date(booking: &Booking, target_date: NaiveDate) -> bool {
    match booking.occurrence {
        Occurrence::Weekly { weekday, .. } => target_date.weekday() == weekday,
        Occurrence::Single { date } => date == target_date,
    }
}
