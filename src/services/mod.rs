//! Service layer for business logic and orchestration.
//!
//! This module sits between the store and the outer surfaces. Services fetch
//! booking snapshots, run the pure reconciliation engine over them, and turn
//! conflict-query results into accepted or refused writes.

pub mod booking_workflow;

pub mod day_view;

pub mod integrity;

pub use booking_workflow::{cancel_booking, create_booking, BookingError, BookingRequest};
pub use day_view::{day_view, day_view_from_snapshot};
pub use integrity::{
    booking_stats, client_stats, integrity_report, BookingStats, ClientStats, IntegrityReport,
};
