//! Application state shared by the presentation layer

use auth::Session;
use common::{JsonStore, KeyValueStore, LatencyConfig};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::{Booking, Hotel};
use crate::repositories::{BookingRepository, HotelRepository};

/// Repositories and the session, wired to one store
pub struct AppState {
    pub hotel_repository: HotelRepository,
    pub booking_repository: BookingRepository,
    pub session: Session,
}

impl AppState {
    /// Wire the repositories to `store` and restore the persisted session
    pub async fn init(store: Arc<dyn KeyValueStore>, latency: LatencyConfig) -> ApiResult<Self> {
        let store = JsonStore::new(store);

        let hotel_repository = HotelRepository::new(store.clone(), latency.clone());
        let booking_repository =
            BookingRepository::new(store.clone(), latency.clone(), hotel_repository.clone());
        let session = Session::restore(store, latency).await?;

        Ok(Self {
            hotel_repository,
            booking_repository,
            session,
        })
    }

    /// Open the configured store, check it and initialize the state
    pub async fn from_config(config: &AppConfig) -> ApiResult<Self> {
        let store = config.build_store()?;

        if store.health_check().await? {
            info!("Store health check successful");
        } else {
            warn!("Store health check failed");
        }

        Self::init(store, config.latency.clone()).await
    }

    /// Bookings visible to the signed-in user; empty when signed out
    pub async fn my_bookings(&self) -> ApiResult<Vec<Booking>> {
        match self.session.current_identity() {
            Some(identity) => self.booking_repository.list_for(identity).await,
            None => Ok(Vec::new()),
        }
    }

    /// Hotels managed by the signed-in provider; empty for anyone else
    pub async fn my_hotels(&self) -> ApiResult<Vec<Hotel>> {
        match self.session.current_identity() {
            Some(identity) if self.session.is_provider() => {
                self.hotel_repository.list_for_provider(&identity.id).await
            }
            _ => Ok(Vec::new()),
        }
    }
}
