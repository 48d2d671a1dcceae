//! Repositories over the store-backed collections
//!
//! Each repository call waits out its simulated latency, reads the whole
//! collection, transforms it in memory and, for mutations, writes the whole
//! collection back.

use uuid::Uuid;

pub mod booking;
pub mod hotel;

pub use booking::{BOOKINGS_KEY, BookingRepository};
pub use hotel::{HOTELS_KEY, HotelRepository};

/// Fresh opaque id for a new record
fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
