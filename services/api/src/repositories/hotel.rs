//! Hotel repository

use common::{JsonStore, LatencyConfig, Operation};
use std::collections::HashSet;
use tracing::{debug, info};

use super::new_record_id;
use crate::error::{ApiError, ApiResult};
use crate::models::{Hotel, HotelFilter, NewHotel, UpdateHotel};
use crate::seed::seed_hotels;
use crate::validation::ValidationErrors;

/// Store key of the hotels collection
pub const HOTELS_KEY: &str = "hotelquick_hotels";

/// Hotel repository
#[derive(Clone)]
pub struct HotelRepository {
    store: JsonStore,
    latency: LatencyConfig,
}

impl HotelRepository {
    /// Create a new hotel repository
    pub fn new(store: JsonStore, latency: LatencyConfig) -> Self {
        Self { store, latency }
    }

    async fn load(&self) -> ApiResult<Vec<Hotel>> {
        Ok(self
            .store
            .read_collection_or_seed(HOTELS_KEY, seed_hotels)
            .await?)
    }

    async fn save(&self, hotels: &[Hotel]) -> ApiResult<()> {
        Ok(self.store.write_collection(HOTELS_KEY, hotels).await?)
    }

    /// Get all hotels
    pub async fn list(&self) -> ApiResult<Vec<Hotel>> {
        self.latency.simulate(Operation::List).await;
        self.load().await
    }

    /// Find a hotel by ID
    pub async fn get_by_id(&self, id: &str) -> ApiResult<Hotel> {
        self.latency.simulate(Operation::Fetch).await;
        debug!("Finding hotel by ID: {}", id);

        self.load()
            .await?
            .into_iter()
            .find(|h| h.id == id)
            .ok_or_else(|| ApiError::hotel_not_found(id))
    }

    /// Get the hotels owned by a provider
    pub async fn list_for_provider(&self, provider_id: &str) -> ApiResult<Vec<Hotel>> {
        self.latency.simulate(Operation::List).await;

        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|h| h.provider_id == provider_id)
            .collect())
    }

    /// Get the hotels matching a search and price-range filter
    pub async fn search(&self, filter: &HotelFilter) -> ApiResult<Vec<Hotel>> {
        filter.validate().map_err(|message| {
            let mut errors = ValidationErrors::default();
            errors.add("maxPrice", message);
            errors
        })?;

        let hotels = self.list().await?;
        Ok(filter.apply(hotels))
    }

    /// Create a new hotel
    pub async fn create(&self, new_hotel: NewHotel) -> ApiResult<Hotel> {
        self.latency.simulate(Operation::Mutate).await;
        info!("Creating new hotel: {}", new_hotel.name);

        let mut hotels = self.load().await?;
        let hotel = Hotel::from_new(new_record_id(), new_hotel);
        hotels.push(hotel.clone());
        self.save(&hotels).await?;

        Ok(hotel)
    }

    /// Merge `update` over an existing hotel
    pub async fn update(&self, id: &str, update: UpdateHotel) -> ApiResult<Hotel> {
        self.latency.simulate(Operation::Mutate).await;
        info!("Updating hotel: {}", id);

        let mut hotels = self.load().await?;
        let hotel = hotels
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| ApiError::hotel_not_found(id))?;
        hotel.apply(update);
        let updated = hotel.clone();

        self.save(&hotels).await?;
        Ok(updated)
    }

    /// Delete a hotel. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.latency.simulate(Operation::Mutate).await;

        let mut hotels = self.load().await?;
        let before = hotels.len();
        hotels.retain(|h| h.id != id);
        self.save(&hotels).await?;

        if hotels.len() < before {
            info!("Deleted hotel: {}", id);
        } else {
            debug!("Delete of unknown hotel {} ignored", id);
        }
        Ok(())
    }

    /// Ids of the hotels owned by a provider, without simulated latency
    pub(crate) async fn owned_hotel_ids(&self, provider_id: &str) -> ApiResult<HashSet<String>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|h| h.provider_id == provider_id)
            .map(|h| h.id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::MemoryStore;
    use std::sync::Arc;

    fn repository() -> HotelRepository {
        HotelRepository::new(
            JsonStore::new(Arc::new(MemoryStore::new())),
            LatencyConfig::none(),
        )
    }

    fn new_hotel(name: &str, provider_id: &str) -> NewHotel {
        NewHotel {
            name: name.to_string(),
            description: "A comfortable place to stay near the beach.".to_string(),
            address: "Beach Road 1".to_string(),
            price: 100.0,
            image: "https://example.com/hotel.jpg".to_string(),
            rooms: 10,
            amenities: vec!["Pool".to_string()],
            provider_id: provider_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_by_id() -> ApiResult<()> {
        let repo = repository();
        let hotel = repo.get_by_id("2").await?;
        assert_eq!(hotel.name, "Ayana Resort Bali");

        let missing = repo.get_by_id("missing").await;
        assert!(matches!(missing, Err(ApiError::NotFound { entity: "Hotel", .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_before_list_keeps_seed() -> ApiResult<()> {
        let repo = repository();
        let created = repo.create(new_hotel("Fresh", "provider-1")).await?;

        let hotels = repo.list().await?;
        assert_eq!(hotels.len(), 7);
        assert_eq!(hotels.last(), Some(&created));
        assert_eq!(created.rating, 0.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_hotel() {
        let repo = repository();
        let result = repo.update("missing", UpdateHotel::default()).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_does_not_change_id() -> ApiResult<()> {
        let repo = repository();
        let updated = repo
            .update("1", UpdateHotel::from(new_hotel("Renamed", "provider-1")))
            .await?;

        assert_eq!(updated.id, "1");
        assert_eq!(updated.name, "Renamed");
        // Rating is not part of the edit form
        assert_eq!(updated.rating, 4.8);
        assert_eq!(repo.get_by_id("1").await?, updated);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_for_provider() -> ApiResult<()> {
        let repo = repository();
        repo.create(new_hotel("Elsewhere", "provider-2")).await?;

        assert_eq!(repo.list_for_provider("provider-1").await?.len(), 6);
        let others = repo.list_for_provider("provider-2").await?;
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].name, "Elsewhere");
        assert!(repo.list_for_provider("nobody").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_search() -> ApiResult<()> {
        let repo = repository();

        let bali = repo
            .search(&HotelFilter {
                search: "Bali".to_string(),
                ..Default::default()
            })
            .await?;
        let ids: Vec<&str> = bali.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "6"]);

        let affordable = repo
            .search(&HotelFilter {
                search: String::new(),
                min_price: 0.0,
                max_price: 3_000_000.0,
            })
            .await?;
        let ids: Vec<&str> = affordable.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "5"]);

        let inverted = repo
            .search(&HotelFilter {
                search: String::new(),
                min_price: 10.0,
                max_price: 1.0,
            })
            .await;
        assert!(matches!(inverted, Err(ApiError::Validation(_))));
        Ok(())
    }
}
