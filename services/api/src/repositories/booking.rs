//! Booking repository

use auth::{Identity, Role};
use chrono::Utc;
use common::{JsonStore, LatencyConfig, Operation};
use tracing::{debug, info};

use super::{HotelRepository, new_record_id};
use crate::error::{ApiError, ApiResult};
use crate::models::{Booking, BookingStatus, NewBooking, StatusUpdate};
use crate::seed::seed_bookings;

/// Store key of the bookings collection
pub const BOOKINGS_KEY: &str = "hotelquick_bookings";

/// Booking repository
///
/// Holds a [`HotelRepository`] to resolve which hotels a provider owns.
#[derive(Clone)]
pub struct BookingRepository {
    store: JsonStore,
    latency: LatencyConfig,
    hotels: HotelRepository,
}

impl BookingRepository {
    /// Create a new booking repository
    pub fn new(store: JsonStore, latency: LatencyConfig, hotels: HotelRepository) -> Self {
        Self {
            store,
            latency,
            hotels,
        }
    }

    async fn load(&self) -> ApiResult<Vec<Booking>> {
        Ok(self
            .store
            .read_collection_or_seed(BOOKINGS_KEY, seed_bookings)
            .await?)
    }

    async fn save(&self, bookings: &[Booking]) -> ApiResult<()> {
        Ok(self.store.write_collection(BOOKINGS_KEY, bookings).await?)
    }

    /// Get the bookings made by a consumer
    pub async fn list_for_consumer(&self, consumer_id: &str) -> ApiResult<Vec<Booking>> {
        self.latency.simulate(Operation::List).await;
        debug!("Listing bookings for consumer: {}", consumer_id);

        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|b| b.consumer_id == consumer_id)
            .collect())
    }

    /// Get the bookings made against any hotel the provider owns
    pub async fn list_for_provider(&self, provider_id: &str) -> ApiResult<Vec<Booking>> {
        self.latency.simulate(Operation::List).await;
        debug!("Listing bookings for provider: {}", provider_id);

        let hotel_ids = self.hotels.owned_hotel_ids(provider_id).await?;
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|b| hotel_ids.contains(&b.hotel_id))
            .collect())
    }

    /// Get the bookings visible to an identity, according to its role
    pub async fn list_for(&self, identity: &Identity) -> ApiResult<Vec<Booking>> {
        match identity.role {
            Role::Consumer => self.list_for_consumer(&identity.id).await,
            Role::Provider => self.list_for_provider(&identity.id).await,
        }
    }

    /// Create a new pending booking
    ///
    /// `total_price` is stored as given.
    pub async fn create(&self, new_booking: NewBooking) -> ApiResult<Booking> {
        self.latency.simulate(Operation::Mutate).await;
        info!(
            "Creating booking of hotel {} for {}",
            new_booking.hotel_id, new_booking.consumer_id
        );

        let mut bookings = self.load().await?;
        let booking = Booking::from_new(new_record_id(), new_booking, Utc::now());
        bookings.push(booking.clone());
        self.save(&bookings).await?;

        Ok(booking)
    }

    /// Set the status of a booking
    ///
    /// Any status can be set from any other, including out of `confirmed` or
    /// `rejected`.
    pub async fn set_status(&self, id: &str, status: BookingStatus) -> ApiResult<Booking> {
        self.latency.simulate(Operation::StatusChange).await;
        info!("Setting booking {} to {}", id, status);

        let mut bookings = self.load().await?;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| ApiError::booking_not_found(id))?;
        booking.status = status;
        let updated = booking.clone();

        self.save(&bookings).await?;
        Ok(updated)
    }

    /// Apply a provider's review decision
    pub async fn review(&self, update: &StatusUpdate) -> ApiResult<Booking> {
        self.set_status(&update.id, update.status.into()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReviewDecision;
    use chrono::NaiveDate;
    use common::MemoryStore;
    use std::sync::Arc;

    fn repository() -> BookingRepository {
        let store = JsonStore::new(Arc::new(MemoryStore::new()));
        let hotels = HotelRepository::new(store.clone(), LatencyConfig::none());
        BookingRepository::new(store, LatencyConfig::none(), hotels)
    }

    fn new_booking(hotel_id: &str, consumer_id: &str) -> NewBooking {
        NewBooking {
            hotel_id: hotel_id.to_string(),
            consumer_id: consumer_id.to_string(),
            check_in: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
            guests: 2,
            total_price: 200.0,
        }
    }

    #[tokio::test]
    async fn test_create_forces_pending() -> ApiResult<()> {
        let repo = repository();
        let before = Utc::now();
        let booking = repo.create(new_booking("1", "consumer-1")).await?;

        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.created_at >= before);
        assert_eq!(booking.total_price, 200.0);

        let mine = repo.list_for_consumer("consumer-1").await?;
        assert_eq!(mine.len(), 4);
        assert!(mine.contains(&booking));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_for_consumer_filters_by_consumer() -> ApiResult<()> {
        let repo = repository();
        repo.create(new_booking("1", "consumer-2")).await?;

        assert_eq!(repo.list_for_consumer("consumer-1").await?.len(), 3);
        assert_eq!(repo.list_for_consumer("consumer-2").await?.len(), 1);
        assert!(repo.list_for_consumer("nobody").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_review_decision() -> ApiResult<()> {
        let repo = repository();
        let booking = repo
            .review(&StatusUpdate {
                id: "1".to_string(),
                status: ReviewDecision::Rejected,
            })
            .await?;
        assert_eq!(booking.status, BookingStatus::Rejected);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_status_on_unknown_booking() {
        let repo = repository();
        let result = repo.set_status("missing", BookingStatus::Confirmed).await;
        assert!(matches!(
            result,
            Err(ApiError::NotFound {
                entity: "Booking",
                ..
            })
        ));
    }
}
