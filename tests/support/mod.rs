#![allow(dead_code)]

use chrono::{NaiveDate, Utc};

use coachcal::api::{BookingId, ClientId, CoachId};
use coachcal::db::repositories::LocalRepository;
use coachcal::models::booking::{
    Booking, BookingStatus, CallType, Occurrence, DEFAULT_DURATION_MINUTES,
};
use coachcal::models::time::SlotTime;

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

pub fn time(s: &str) -> SlotTime {
    s.parse().expect("valid test time")
}

/// A one-off booking for `client` with plausible denormalized fields.
pub fn single_booking(client: &str, date_str: &str, time_str: &str) -> Booking {
    Booking {
        id: None,
        coach_id: CoachId::new("coach1"),
        client_id: ClientId::new(client),
        client_name: format!("Client {}", client),
        client_phone: "+1-555-0100".to_string(),
        time: time(time_str),
        call_type: CallType::Onboarding,
        occurrence: Occurrence::Single {
            date: date(date_str),
        },
        status: BookingStatus::Scheduled,
        duration_minutes: DEFAULT_DURATION_MINUTES,
        notes: None,
        created_at: Utc::now(),
    }
}

/// A weekly booking anchored at `anchor_str`, recurring on the anchor's
/// weekday.
pub fn weekly_booking(client: &str, anchor_str: &str, time_str: &str) -> Booking {
    let mut booking = single_booking(client, anchor_str, time_str);
    booking.call_type = CallType::FollowUp;
    booking.occurrence = Occurrence::weekly_from_anchor(date(anchor_str));
    booking
}

pub fn with_id(mut booking: Booking, id: &str) -> Booking {
    booking.id = Some(BookingId::new(id));
    booking
}

pub fn with_status(mut booking: Booking, status: BookingStatus) -> Booking {
    booking.status = status;
    booking
}

/// Repository seeded with `bookings` (identities assigned by the store).
pub fn seeded_repo(bookings: Vec<Booking>) -> LocalRepository {
    LocalRepository::with_bookings(bookings)
}
