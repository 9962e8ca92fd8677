use chrono::{NaiveDate, Utc, Weekday};

use crate::api::{BookingId, ClientId, CoachId};
use crate::models::booking::{
    Booking, BookingStatus, CallType, Occurrence, DEFAULT_DURATION_MINUTES,
};
use crate::models::time::SlotTime;
use crate::scheduler::*;

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

fn time(s: &str) -> SlotTime {
    s.parse().expect("valid test time")
}

fn booking(client: &str, occurrence: Occurrence, time_str: &str) -> Booking {
    Booking {
        id: Some(BookingId::new(format!("bk-{}-{}", client, time_str))),
        coach_id: CoachId::new("coach1"),
        client_id: ClientId::new(client),
        client_name: format!("Client {}", client),
        client_phone: "+1-555-0100".to_string(),
        time: time(time_str),
        call_type: CallType::FollowUp,
        occurrence,
        status: BookingStatus::Scheduled,
        duration_minutes: DEFAULT_DURATION_MINUTES,
        notes: None,
        created_at: Utc::now(),
    }
}

fn single(client: &str, date_str: &str, time_str: &str) -> Booking {
    booking(
        client,
        Occurrence::Single {
            date: date(date_str),
        },
        time_str,
    )
}

fn weekly(client: &str, weekday: Weekday, anchor: &str, time_str: &str) -> Booking {
    booking(
        client,
        Occurrence::Weekly {
            weekday,
            anchor: date(anchor),
        },
        time_str,
    )
}

// ==================== Slot grid ====================

#[test]
fn test_grid_has_fixed_count() {
    assert_eq!(generate_slots().len(), SLOT_COUNT);
}

#[test]
fn test_grid_bounds_and_step() {
    let slots = generate_slots();
    assert_eq!(slots.first().copied(), Some(SLOT_GRID_START));
    assert_eq!(slots.last().copied(), Some(SLOT_GRID_END));

    for pair in slots.windows(2) {
        assert_eq!(
            pair[1].minutes_from_midnight() - pair[0].minutes_from_midnight(),
            SLOT_STEP_MINUTES
        );
    }
}

#[test]
fn test_grid_formats_zero_padded() {
    let rendered: Vec<String> = generate_slots().iter().map(|t| t.to_string()).collect();
    assert_eq!(rendered[0], "10:30");
    assert_eq!(rendered[1], "10:50");
    assert_eq!(rendered[2], "11:10");
    assert_eq!(rendered[rendered.len() - 1], "19:30");
    for s in &rendered {
        assert_eq!(s.len(), 5);
    }
}

#[test]
fn test_grid_is_deterministic() {
    assert_eq!(generate_slots(), generate_slots());
}

#[test]
fn test_is_grid_slot() {
    assert!(slots::is_grid_slot(time("10:30")));
    assert!(slots::is_grid_slot(time("14:10")));
    assert!(slots::is_grid_slot(time("19:30")));
    assert!(!slots::is_grid_slot(time("10:00")));
    assert!(!slots::is_grid_slot(time("10:40")));
    assert!(!slots::is_grid_slot(time("19:50")));
}

// ==================== Matcher ====================

#[test]
fn test_single_matches_only_its_date() {
    let b = single("1", "2024-03-04", "10:30");
    assert!(occupies_date(&b, date("2024-03-04")));
    assert!(!occupies_date(&b, date("2024-03-05")));
}

#[test]
fn test_weekly_matches_weekday() {
    let b = weekly("1", Weekday::Wed, "2024-03-06", "14:10");
    assert!(occupies_date(&b, date("2024-03-06")));
    assert!(occupies_date(&b, date("2024-03-13")));
    assert!(!occupies_date(&b, date("2024-03-07")));
}

#[test]
fn test_weekly_matches_before_anchor() {
    // Day-of-week matching is unbounded: a Wednesday before the series
    // anchor still matches.
    let b = weekly("1", Weekday::Wed, "2024-03-06", "14:10");
    assert!(occupies_date(&b, date("2024-02-28")));
}

// ==================== Composer ====================

#[test]
fn test_compose_empty_collection() {
    let schedule = compose_schedule(date("2024-03-04"), &[]);
    assert_eq!(schedule.time_slots.len(), SLOT_COUNT);
    assert!(schedule.time_slots.iter().all(|s| !s.is_booked));
    assert!(schedule.time_slots.iter().all(|s| s.booking.is_none()));
}

#[test]
fn test_compose_marks_exactly_one_slot() {
    let b = single("1", "2024-03-04", "11:10");
    let schedule = compose_schedule(date("2024-03-04"), &[b.clone()]);

    assert_eq!(schedule.booked_count(), 1);
    let slot = schedule.slot_at(time("11:10")).unwrap();
    assert!(slot.is_booked);
    assert_eq!(slot.booking.as_ref(), Some(&b));
}

#[test]
fn test_compose_other_date_marks_nothing() {
    let b = single("1", "2024-03-04", "11:10");
    let schedule = compose_schedule(date("2024-03-05"), &[b]);
    assert_eq!(schedule.booked_count(), 0);
}

#[test]
fn test_compose_weekly_on_matching_weekday() {
    let b = weekly("1", Weekday::Wed, "2024-03-06", "14:10");

    // Any Wednesday gets the 14:10 slot marked.
    for d in ["2024-03-06", "2024-03-13", "2024-04-03"] {
        let schedule = compose_schedule(date(d), &[b.clone()]);
        assert_eq!(schedule.booked_count(), 1, "expected a booking on {}", d);
        assert!(schedule.slot_at(time("14:10")).unwrap().is_booked);
    }

    // A Thursday does not.
    let schedule = compose_schedule(date("2024-03-07"), &[b]);
    assert_eq!(schedule.booked_count(), 0);
}

#[test]
fn test_compose_first_match_wins() {
    let first = single("1", "2024-03-04", "11:10");
    let second = single("2", "2024-03-04", "11:10");
    let schedule = compose_schedule(date("2024-03-04"), &[first.clone(), second]);

    let slot = schedule.slot_at(time("11:10")).unwrap();
    assert_eq!(slot.booking.as_ref(), Some(&first));
}

#[test]
fn test_compose_is_idempotent_and_does_not_mutate() {
    let bookings = vec![
        single("1", "2024-03-04", "10:30"),
        weekly("2", Weekday::Mon, "2024-03-04", "11:10"),
    ];
    let snapshot = bookings.clone();

    let a = compose_schedule(date("2024-03-04"), &bookings);
    let b = compose_schedule(date("2024-03-04"), &bookings);

    assert_eq!(a, b);
    assert_eq!(bookings, snapshot);
}

// ==================== Conflict queries ====================

#[test]
fn test_same_client_same_slot_exact_triple() {
    let a = single("1", "2024-03-01", "11:10");
    let b = single("1", "2024-03-01", "11:30");
    let c = single("2", "2024-03-01", "11:10");
    let bookings = vec![a.clone(), b, c];

    let matches =
        find_same_client_same_slot(&ClientId::new("1"), date("2024-03-01"), time("11:10"), &bookings);
    assert_eq!(matches, vec![a]);
}

#[test]
fn test_same_client_same_slot_no_match() {
    let bookings = vec![single("1", "2024-03-01", "11:10")];
    let matches =
        find_same_client_same_slot(&ClientId::new("1"), date("2024-03-02"), time("11:10"), &bookings);
    assert!(matches.is_empty());
}

#[test]
fn test_recurring_conflicts_within_horizon() {
    let anchor = date("2024-03-04"); // a Monday
    let inside = weekly("1", Weekday::Mon, "2024-04-01", "10:30"); // 28 days out
    let boundary = weekly("1", Weekday::Mon, "2024-05-27", "10:30"); // exactly 84 days out
    let outside = weekly("1", Weekday::Mon, "2024-06-10", "10:30"); // 98 days out
    let bookings = vec![inside.clone(), boundary.clone(), outside];

    let matches = find_recurring_conflicts(
        &ClientId::new("1"),
        Weekday::Mon,
        time("10:30"),
        anchor,
        &bookings,
        CONFLICT_HORIZON_DAYS,
    );
    assert_eq!(matches, vec![inside, boundary]);
}

#[test]
fn test_recurring_conflicts_ignore_non_matching() {
    let anchor = date("2024-03-04");
    let bookings = vec![
        weekly("1", Weekday::Tue, "2024-03-05", "10:30"), // different weekday
        weekly("1", Weekday::Mon, "2024-03-11", "10:50"), // different time
        weekly("2", Weekday::Mon, "2024-03-11", "10:30"), // different client
        single("1", "2024-03-11", "10:30"),               // not a series
        weekly("1", Weekday::Mon, "2024-02-26", "10:30"), // anchored before the window
    ];

    let matches = find_recurring_conflicts(
        &ClientId::new("1"),
        Weekday::Mon,
        time("10:30"),
        anchor,
        &bookings,
        CONFLICT_HORIZON_DAYS,
    );
    assert!(matches.is_empty());
}

#[test]
fn test_find_duplicates_reports_both_members() {
    let a = single("1", "2024-03-01", "11:10");
    let mut b = single("1", "2024-03-01", "11:10");
    b.id = Some(BookingId::new("bk-other"));
    let unrelated = single("2", "2024-03-01", "11:10");
    let bookings = vec![a.clone(), unrelated, b.clone()];

    let duplicates = find_duplicates(&bookings);
    assert_eq!(duplicates, vec![a, b]);
}

#[test]
fn test_find_duplicates_empty_when_no_repeats() {
    let bookings = vec![
        single("1", "2024-03-01", "11:10"),
        single("1", "2024-03-01", "11:30"),
        single("2", "2024-03-01", "11:10"),
    ];
    assert!(find_duplicates(&bookings).is_empty());
}
