use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::{AppState, config::AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting HotelQuick");

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config).await?;

    let hotels = state.hotel_repository.list().await?;
    info!("{} hotels listed", hotels.len());

    match state.session.current_identity() {
        Some(identity) => {
            let bookings = state.my_bookings().await?;
            info!(
                "Signed in as {} ({}), {} bookings visible",
                identity.name,
                identity.role,
                bookings.len()
            );
        }
        None => info!("No one is signed in"),
    }

    info!("HotelQuick initialized successfully");
    Ok(())
}
