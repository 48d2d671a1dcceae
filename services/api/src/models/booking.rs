//! Booking models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Booking status
///
/// Bookings start `Pending`; a provider moves them to `Confirmed` or
/// `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Rejected => "rejected",
        }
    }

    /// Whether a provider has already decided on the booking
    ///
    /// Informational only: the repository still lets the status be set again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "rejected" => Ok(BookingStatus::Rejected),
            other => Err(format!("Unknown booking status: {}", other)),
        }
    }
}

/// A provider's decision on a pending booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Confirmed,
    Rejected,
}

impl From<ReviewDecision> for BookingStatus {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Confirmed => BookingStatus::Confirmed,
            ReviewDecision::Rejected => BookingStatus::Rejected,
        }
    }
}

/// Booking of a hotel stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub hotel_id: String,
    pub consumer_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub status: BookingStatus,
    /// Computed by the booking form at creation time, never recomputed
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub hotel_id: String,
    pub consumer_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: f64,
}

/// Payload for a provider's status change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: String,
    pub status: ReviewDecision,
}

impl Booking {
    /// Build a pending booking from a create payload
    pub fn from_new(id: String, new_booking: NewBooking, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            hotel_id: new_booking.hotel_id,
            consumer_id: new_booking.consumer_id,
            check_in: new_booking.check_in,
            check_out: new_booking.check_out,
            guests: new_booking.guests,
            status: BookingStatus::Pending,
            total_price: new_booking.total_price,
            created_at,
        }
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Keep the bookings with the given status; `None` keeps all of them
pub fn with_status(bookings: Vec<Booking>, status: Option<BookingStatus>) -> Vec<Booking> {
    match status {
        Some(status) => bookings.into_iter().filter(|b| b.status == status).collect(),
        None => bookings,
    }
}

/// Price of a stay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StayQuote {
    pub nights: i64,
    pub total_price: f64,
}

impl StayQuote {
    /// Quote a stay, or `None` if check-out is not after check-in
    pub fn for_stay(check_in: NaiveDate, check_out: NaiveDate, price_per_night: f64) -> Option<Self> {
        let nights = (check_out - check_in).num_days();
        if nights <= 0 {
            return None;
        }
        Some(Self {
            nights,
            total_price: nights as f64 * price_per_night,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_four_night_quote() {
        let quote = StayQuote::for_stay(date("2025-05-01"), date("2025-05-05"), 100.0).unwrap();
        assert_eq!(quote.nights, 4);
        assert_eq!(quote.total_price, 400.0);
    }

    #[test]
    fn test_quote_requires_checkout_after_checkin() {
        assert_eq!(StayQuote::for_stay(date("2025-05-05"), date("2025-05-05"), 100.0), None);
        assert_eq!(StayQuote::for_stay(date("2025-05-05"), date("2025-05-01"), 100.0), None);
    }

    #[test]
    fn test_booking_wire_format() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "1",
            "hotelId": "1",
            "consumerId": "consumer-1",
            "checkIn": "2025-05-01",
            "checkOut": "2025-05-05",
            "guests": 2,
            "status": "pending",
            "totalPrice": 1000,
            "createdAt": "2025-04-01T12:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(booking.nights(), 4);
        assert_eq!(booking.status, BookingStatus::Pending);

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["checkIn"], "2025-05-01");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["createdAt"], "2025-04-01T12:00:00Z");
    }

    #[test]
    fn test_status_update_only_accepts_decisions() {
        let update: StatusUpdate =
            serde_json::from_value(json!({"id": "b1", "status": "confirmed"})).unwrap();
        assert_eq!(BookingStatus::from(update.status), BookingStatus::Confirmed);

        let pending = serde_json::from_value::<StatusUpdate>(json!({"id": "b1", "status": "pending"}));
        assert!(pending.is_err());
    }

    #[test]
    fn test_status_helpers() {
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(BookingStatus::Confirmed.is_terminal());
        assert_eq!("rejected".parse::<BookingStatus>(), Ok(BookingStatus::Rejected));
        assert_eq!(BookingStatus::Confirmed.to_string(), "confirmed");
    }
}
