//! In-memory repository implementation.
//!
//! Backs development and tests. The booking collection lives in a `Vec`
//! guarded by a `parking_lot` lock (arrival order preserved), identities are
//! UUID v4 strings, and every mutation publishes a full snapshot on a
//! `tokio::sync::watch` channel to drive the change feed.

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

use crate::api::{BookingId, ClientId};
use crate::db::repository::{
    BookingFeed, BookingRepository, ErrorContext, FullRepository, RepositoryError,
    RepositoryResult,
};
use crate::models::booking::{Booking, BookingStatus};

/// In-memory booking store.
pub struct LocalRepository {
    bookings: RwLock<Vec<Booking>>,
    feed: watch::Sender<Vec<Booking>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        let (feed, _) = watch::channel(Vec::new());
        Self {
            bookings: RwLock::new(Vec::new()),
            feed,
        }
    }

    /// Create a repository pre-seeded with `bookings`.
    ///
    /// Entries without an identity get one assigned, so seeded fixtures
    /// behave like persisted data.
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        let seeded: Vec<Booking> = bookings
            .into_iter()
            .map(|mut b| {
                if b.id.is_none() {
                    b.id = Some(Self::mint_id());
                }
                b
            })
            .collect();

        let (feed, _) = watch::channel(seeded.clone());
        Self {
            bookings: RwLock::new(seeded),
            feed,
        }
    }

    fn mint_id() -> BookingId {
        BookingId::new(Uuid::new_v4().to_string())
    }

    /// Publish the current collection to subscribers.
    fn publish(&self) {
        let snapshot = self.bookings.read().clone();
        // send_replace never fails; a channel with no receivers just holds
        // the latest value for the next subscriber.
        self.feed.send_replace(snapshot);
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for LocalRepository {
    async fn list_bookings(&self) -> RepositoryResult<Vec<Booking>> {
        Ok(self.bookings.read().clone())
    }

    async fn get_booking(&self, id: &BookingId) -> RepositoryResult<Option<Booking>> {
        Ok(self
            .bookings
            .read()
            .iter()
            .find(|b| b.id.as_ref() == Some(id))
            .cloned())
    }

    async fn add_booking(&self, booking: Booking) -> RepositoryResult<BookingId> {
        let id = Self::mint_id();
        {
            let mut bookings = self.bookings.write();
            let mut stored = booking;
            stored.id = Some(id.clone());
            bookings.push(stored);
        }
        debug!(booking_id = %id, "booking stored");
        self.publish();
        Ok(id)
    }

    async fn delete_booking(&self, id: &BookingId) -> RepositoryResult<()> {
        let removed = {
            let mut bookings = self.bookings.write();
            let before = bookings.len();
            bookings.retain(|b| b.id.as_ref() != Some(id));
            before != bookings.len()
        };

        if !removed {
            return Err(RepositoryError::not_found_with_context(
                format!("Booking {} not found", id),
                ErrorContext::new("delete_booking")
                    .with_entity("booking")
                    .with_entity_id(id),
            ));
        }

        debug!(booking_id = %id, "booking deleted");
        self.publish();
        Ok(())
    }

    async fn bookings_on_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Booking>> {
        let mut matches: Vec<Booking> = self
            .bookings
            .read()
            .iter()
            .filter(|b| b.anchor_date() == date)
            .cloned()
            .collect();
        matches.sort_by_key(|b| b.time);
        Ok(matches)
    }

    async fn bookings_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<Booking>> {
        let mut matches: Vec<Booking> = self
            .bookings
            .read()
            .iter()
            .filter(|b| b.anchor_date() >= start && b.anchor_date() <= end)
            .cloned()
            .collect();
        matches.sort_by_key(|b| b.anchor_date());
        Ok(matches)
    }

    async fn bookings_for_client(&self, client_id: &ClientId) -> RepositoryResult<Vec<Booking>> {
        Ok(self
            .bookings
            .read()
            .iter()
            .filter(|b| b.client_id == *client_id)
            .cloned()
            .collect())
    }

    async fn upcoming_bookings(
        &self,
        today: NaiveDate,
        limit: Option<usize>,
    ) -> RepositoryResult<Vec<Booking>> {
        let mut matches: Vec<Booking> = self
            .bookings
            .read()
            .iter()
            .filter(|b| b.status == BookingStatus::Scheduled && b.anchor_date() >= today)
            .cloned()
            .collect();
        matches.sort_by_key(|b| (b.anchor_date(), b.time));
        if let Some(limit) = limit {
            matches.truncate(limit);
        }
        Ok(matches)
    }

    fn subscribe_bookings(&self) -> BookingFeed {
        BookingFeed::new(self.feed.subscribe())
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
