//! Hotel and booking core of the HotelQuick application
//!
//! Repositories for hotels and bookings over a key-value store, the seed
//! data they start from, form validation and the [`AppState`] that wires
//! them to a [`auth::Session`].

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod state;
pub mod validation;

pub use error::{ApiError, ApiResult};
pub use state::AppState;
