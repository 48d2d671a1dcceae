//! Hotel and booking models

pub mod booking;
pub mod hotel;

pub use booking::{Booking, BookingStatus, NewBooking, ReviewDecision, StatusUpdate, StayQuote};
pub use hotel::{Hotel, HotelFilter, NewHotel, UpdateHotel};
