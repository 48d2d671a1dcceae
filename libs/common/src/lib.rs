//! Common library for the HotelQuick application
//!
//! This crate provides the persistence layer shared by the services: the
//! key-value store abstraction and its backends, the JSON collection adapter
//! built on it, simulated backend latency and the store error type.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use common::{JsonStore, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = JsonStore::new(Arc::new(MemoryStore::new()));
//!     let names: Vec<String> = store
//!         .read_collection_or_seed("names", || vec!["first".to_string()])
//!         .await?;
//!     println!("Stored names: {:?}", names);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod collection;
pub mod error;
pub mod latency;
pub mod store;

pub use collection::JsonStore;
pub use error::{StoreError, StoreResult};
pub use latency::{LatencyConfig, Operation};
pub use store::{FileStore, KeyValueStore, MemoryStore};
