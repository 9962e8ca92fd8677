//! Integrity report and statistics.
//!
//! The duplicate scan is diagnostic only: the workflow's conflict gate should
//! prevent duplicates from being written, so anything this report finds
//! slipped past it upstream (or predates the gate) and needs manual cleanup.

use serde::{Deserialize, Serialize};

use crate::clients::ClientDirectory;
use crate::db::repository::{BookingRepository, FullRepository, RepositoryResult};
use crate::models::booking::{Booking, BookingStatus, CallType, ClientStatus};
use crate::scheduler::find_duplicates;

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as u32
    }
}

/// Aggregate booking counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total: usize,
    pub completed: usize,
    pub upcoming: usize,
    pub cancelled: usize,
    pub no_show: usize,
    pub recurring: usize,
    pub onboarding_calls: usize,
    pub follow_up_calls: usize,
    /// Completed share of all bookings, rounded percent.
    pub completion_rate: u32,
}

/// Compute booking counters over a snapshot.
pub fn booking_stats(bookings: &[Booking]) -> BookingStats {
    let total = bookings.len();
    let by_status = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();
    let by_call_type =
        |call_type: CallType| bookings.iter().filter(|b| b.call_type == call_type).count();

    let completed = by_status(BookingStatus::Completed);

    BookingStats {
        total,
        completed,
        upcoming: by_status(BookingStatus::Scheduled),
        cancelled: by_status(BookingStatus::Cancelled),
        no_show: by_status(BookingStatus::NoShow),
        recurring: bookings.iter().filter(|b| b.is_recurring()).count(),
        onboarding_calls: by_call_type(CallType::Onboarding),
        follow_up_calls: by_call_type(CallType::FollowUp),
        completion_rate: percentage(completed, total),
    }
}

/// The post-hoc data-integrity report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub stats: BookingStats,
    /// Every member of every duplicate `(client, date, time)` group.
    pub duplicates: Vec<Booking>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Build the integrity report from the store's current collection.
pub async fn integrity_report(repo: &dyn FullRepository) -> RepositoryResult<IntegrityReport> {
    let bookings = repo.list_bookings().await?;
    Ok(IntegrityReport {
        stats: booking_stats(&bookings),
        duplicates: find_duplicates(&bookings),
    })
}

/// Aggregate roster counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub prospects: usize,
    pub active_percentage: u32,
    /// Active share of active + prospective clients, rounded percent.
    pub conversion_rate: u32,
}

/// Compute roster counters over a directory.
pub fn client_stats(directory: &ClientDirectory) -> ClientStats {
    let total = directory.len();
    let active = directory.by_status(ClientStatus::Active).len();
    let inactive = directory.by_status(ClientStatus::Inactive).len();
    let prospects = directory.by_status(ClientStatus::Prospect).len();

    ClientStats {
        total,
        active,
        inactive,
        prospects,
        active_percentage: percentage(active, total),
        conversion_rate: percentage(active, active + prospects),
    }
}
