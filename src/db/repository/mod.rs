//! Repository trait: the abstract interface to the booking store.
//!
//! The external store owns the booking collection; this trait is the narrow
//! surface the rest of the crate consumes. Reads return by-value snapshots in
//! arrival order, writes are single-entity create/delete, and
//! [`BookingRepository::subscribe_bookings`] delivers the full current
//! collection on every change so views can be recomputed from scratch rather
//! than patched incrementally.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::watch;

use crate::api::{BookingId, ClientId};
use crate::models::booking::Booking;

/// A live handle on the booking change feed.
///
/// Holds the latest full collection snapshot. Dropping the handle cancels the
/// subscription; nothing else is required of the caller.
#[derive(Debug)]
pub struct BookingFeed {
    rx: watch::Receiver<Vec<Booking>>,
}

impl BookingFeed {
    pub fn new(rx: watch::Receiver<Vec<Booking>>) -> Self {
        Self { rx }
    }

    /// The latest snapshot, available immediately after subscribing.
    pub fn current(&self) -> Vec<Booking> {
        self.rx.borrow().clone()
    }

    /// Wait for the next change and return the new snapshot.
    ///
    /// Returns `None` once the store has gone away and no further snapshots
    /// will be delivered.
    pub async fn changed(&mut self) -> Option<Vec<Booking>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

/// Repository trait for booking storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All bookings, in arrival order.
    async fn list_bookings(&self) -> RepositoryResult<Vec<Booking>>;

    /// One booking by identity, or `None` if it does not exist.
    async fn get_booking(&self, id: &BookingId) -> RepositoryResult<Option<Booking>>;

    /// Persist a new booking and return its store-assigned identity.
    ///
    /// Any identity already present on the value is ignored; the store always
    /// mints a fresh one, the way a document store's insert does.
    async fn add_booking(&self, booking: Booking) -> RepositoryResult<BookingId>;

    /// Delete a booking by identity.
    ///
    /// A missing identity is a `NotFound` error and leaves state unchanged;
    /// deletion is a single-entity operation, so no partial state exists.
    async fn delete_booking(&self, id: &BookingId) -> RepositoryResult<()>;

    /// Bookings whose stored date equals `date`, ordered by time of day.
    async fn bookings_on_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Booking>>;

    /// Bookings whose stored date falls in `[start, end]`, ordered by date.
    async fn bookings_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<Booking>>;

    /// All bookings for one client, in arrival order.
    async fn bookings_for_client(&self, client_id: &ClientId) -> RepositoryResult<Vec<Booking>>;

    /// Scheduled bookings with stored date on or after `today`, ordered by
    /// date then time, truncated to `limit` when given.
    async fn upcoming_bookings(
        &self,
        today: NaiveDate,
        limit: Option<usize>,
    ) -> RepositoryResult<Vec<Booking>>;

    /// Subscribe to the booking change feed.
    fn subscribe_bookings(&self) -> BookingFeed;
}

/// Full repository surface: booking storage plus liveness.
#[async_trait]
pub trait FullRepository: BookingRepository {
    /// Whether the store is reachable and serving.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
