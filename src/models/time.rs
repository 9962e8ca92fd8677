use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Error returned when a time-of-day string is not a valid `HH:MM` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day: {input:?} (expected zero-padded 24-hour HH:MM)")]
pub struct InvalidSlotTime {
    pub input: String,
}

/// Time-of-day of a bookable slot.
///
/// Formats as a zero-padded 24-hour `HH:MM` string, which is also the wire
/// and store representation. Ordering is chronological within a day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime {
    pub hour: u8,
    pub minute: u8,
}

impl SlotTime {
    /// Create a new slot time. Returns `None` outside the 24-hour clock.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// 12-hour display form, e.g. `"7:30 PM"`.
    pub fn display_12h(&self) -> String {
        let meridiem = if self.hour >= 12 { "PM" } else { "AM" };
        let display_hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", display_hour, self.minute, meridiem)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for SlotTime {
    type Err = InvalidSlotTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidSlotTime {
            input: s.to_string(),
        };

        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = hh.parse().map_err(|_| invalid())?;
        let minute: u8 = mm.parse().map_err(|_| invalid())?;
        SlotTime::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for SlotTime {
    type Error = InvalidSlotTime;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SlotTime> for String {
    fn from(t: SlotTime) -> String {
        t.to_string()
    }
}

// ============================================================================
// Weekday and date helpers
// ============================================================================
//
// All calendar arithmetic is local-calendar-day arithmetic on `NaiveDate`;
// no timezone is modeled. The weekday convention at the wire boundary is
// Sunday-first (Sunday=0 ... Saturday=6).

/// Sunday-first index of a weekday (Sunday=0 ... Saturday=6).
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

/// Weekday for a Sunday-first index. Returns `None` outside `0..=6`.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Full English weekday name for a date, e.g. `"Wednesday"`.
pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Long display form of a date, e.g. `"March 4, 2024"`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_time_display_zero_padded() {
        let t = SlotTime::new(9, 5).unwrap();
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn test_slot_time_parse_roundtrip() {
        let t: SlotTime = "19:30".parse().unwrap();
        assert_eq!(t, SlotTime::new(19, 30).unwrap());
        assert_eq!(t.to_string(), "19:30");
    }

    #[test]
    fn test_slot_time_rejects_unpadded() {
        assert!("9:30".parse::<SlotTime>().is_err());
    }

    #[test]
    fn test_slot_time_rejects_out_of_range() {
        assert!("24:00".parse::<SlotTime>().is_err());
        assert!("12:60".parse::<SlotTime>().is_err());
        assert!(SlotTime::new(24, 0).is_none());
    }

    #[test]
    fn test_slot_time_ordering() {
        let a: SlotTime = "10:30".parse().unwrap();
        let b: SlotTime = "10:50".parse().unwrap();
        assert!(a < b);
        assert_eq!(a.minutes_from_midnight(), 630);
    }

    #[test]
    fn test_display_12h() {
        assert_eq!(SlotTime::new(10, 30).unwrap().display_12h(), "10:30 AM");
        assert_eq!(SlotTime::new(12, 10).unwrap().display_12h(), "12:10 PM");
        assert_eq!(SlotTime::new(19, 30).unwrap().display_12h(), "7:30 PM");
        assert_eq!(SlotTime::new(0, 10).unwrap().display_12h(), "12:10 AM");
    }

    #[test]
    fn test_weekday_index_sunday_first() {
        assert_eq!(weekday_index(Weekday::Sun), 0);
        assert_eq!(weekday_index(Weekday::Wed), 3);
        assert_eq!(weekday_index(Weekday::Sat), 6);
    }

    #[test]
    fn test_weekday_from_index_roundtrip() {
        for i in 0..7u8 {
            let day = weekday_from_index(i).unwrap();
            assert_eq!(weekday_index(day), i);
        }
        assert!(weekday_from_index(7).is_none());
    }

    #[test]
    fn test_day_name_and_long_date() {
        // 2024-03-06 was a Wednesday
        let date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert_eq!(day_name(date), "Wednesday");
        assert_eq!(format_long_date(date), "March 6, 2024");
    }
}
