//! Form validation for hotels, bookings and login
//!
//! These are the checks the forms run before calling a repository. The
//! repositories themselves accept whatever they are given.

use auth::LoginCredentials;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::models::{Hotel, NewBooking, NewHotel, StayQuote, hotel::parse_amenities};

/// Guests allowed on a single booking
pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 10;

/// A single failed form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every failed field of a form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether `field` failed
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Hotel form as filled in by a provider
#[derive(Debug, Clone, PartialEq)]
pub struct HotelForm {
    pub name: String,
    pub description: String,
    pub address: String,
    pub price: f64,
    pub image: String,
    pub rooms: u32,
    /// Comma-joined amenity labels
    pub amenities: String,
}

impl HotelForm {
    /// Prefill the edit form from an existing hotel
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            description: hotel.description.clone(),
            address: hotel.address.clone(),
            price: hotel.price,
            image: hotel.image.clone(),
            rooms: hotel.rooms,
            amenities: hotel.amenities.join(", "),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.check("name", min_length(&self.name, 3, "Hotel name"));
        errors.check(
            "description",
            min_length(&self.description, 20, "Description"),
        );
        errors.check("address", min_length(&self.address, 5, "Address"));
        if !(self.price >= 1.0) {
            errors.add("price", "Price must be at least 1");
        }
        errors.check("image", validate_image_url(&self.image));
        if self.rooms < 1 {
            errors.add("rooms", "Hotel must have at least 1 room");
        }
        errors.into_result()
    }

    /// Validate and build the create payload for `provider_id`
    pub fn into_new_hotel(self, provider_id: &str) -> Result<NewHotel, ValidationErrors> {
        self.validate()?;
        Ok(NewHotel {
            amenities: parse_amenities(&self.amenities),
            name: self.name,
            description: self.description,
            address: self.address,
            price: self.price,
            image: self.image,
            rooms: self.rooms,
            provider_id: provider_id.to_string(),
        })
    }
}

/// Booking form as filled in by a consumer
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl BookingForm {
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.check_in < today {
            errors.add("checkIn", "Check-in date cannot be in the past");
        }
        if self.check_out <= self.check_in {
            errors.add("checkOut", "Check-out must be after check-in");
        }
        if !(MIN_GUESTS..=MAX_GUESTS).contains(&self.guests) {
            errors.add(
                "guests",
                format!("Guests must be between {} and {}", MIN_GUESTS, MAX_GUESTS),
            );
        }
        errors.into_result()
    }

    /// Validate, price the stay at the hotel's nightly rate and build the
    /// create payload
    pub fn into_new_booking(
        self,
        hotel: &Hotel,
        consumer_id: &str,
        today: NaiveDate,
    ) -> Result<NewBooking, ValidationErrors> {
        self.validate(today)?;

        let mut errors = ValidationErrors::default();
        let Some(quote) = StayQuote::for_stay(self.check_in, self.check_out, hotel.price) else {
            errors.add("checkOut", "Check-out must be after check-in");
            return Err(errors);
        };

        Ok(NewBooking {
            hotel_id: hotel.id.clone(),
            consumer_id: consumer_id.to_string(),
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            total_price: quote.total_price,
        })
    }
}

/// Validate the login form
pub fn validate_login(credentials: &LoginCredentials) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.check("email", auth::validation::validate_email(&credentials.email));
    errors.check(
        "password",
        auth::validation::validate_password(&credentials.password),
    );
    errors.into_result()
}

fn min_length(value: &str, min: usize, label: &str) -> Result<(), String> {
    if value.trim().chars().count() < min {
        return Err(format!("{} must be at least {} characters", label, min));
    }
    Ok(())
}

/// Validate an image URL
pub fn validate_image_url(url: &str) -> Result<(), String> {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = URL_REGEX.get_or_init(|| {
        Regex::new(r"^https?://[^\s/?#]+\.[^\s/?#]+(?:[/?#]\S*)?$")
            .expect("Failed to compile URL regex")
    });

    if !regex.is_match(url) {
        return Err("Please enter a valid URL".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::Role;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn valid_hotel_form() -> HotelForm {
        HotelForm {
            name: "Seaside Inn".to_string(),
            description: "A quiet inn by the sea with wide views.".to_string(),
            address: "Beach Road 1, Bali".to_string(),
            price: 850_000.0,
            image: "https://images.example.com/seaside.jpg".to_string(),
            rooms: 12,
            amenities: "Pool, Spa,  Free WiFi".to_string(),
        }
    }

    fn hotel(price: f64) -> Hotel {
        Hotel {
            id: "h1".to_string(),
            name: "Seaside Inn".to_string(),
            description: String::new(),
            address: String::new(),
            price,
            rating: 0.0,
            image: String::new(),
            rooms: 1,
            amenities: vec![],
            provider_id: "provider-1".to_string(),
        }
    }

    #[test]
    fn test_hotel_form_builds_payload() {
        let new_hotel = valid_hotel_form().into_new_hotel("provider-1").unwrap();
        assert_eq!(new_hotel.amenities, vec!["Pool", "Spa", "Free WiFi"]);
        assert_eq!(new_hotel.provider_id, "provider-1");
        assert_eq!(new_hotel.rooms, 12);
    }

    #[test]
    fn test_hotel_form_collects_every_failure() {
        let form = HotelForm {
            name: "A".to_string(),
            description: "too short".to_string(),
            address: "x".to_string(),
            price: 0.0,
            image: "not a url".to_string(),
            rooms: 0,
            amenities: String::new(),
        };

        let errors = form.validate().unwrap_err();
        for field in ["name", "description", "address", "price", "image", "rooms"] {
            assert!(errors.has(field), "expected {} to fail", field);
        }
        assert_eq!(errors.errors.len(), 6);
    }

    #[test]
    fn test_hotel_form_round_trips_existing_hotel() {
        let mut existing = hotel(100.0);
        existing.amenities = vec!["Pool".to_string(), "Spa".to_string()];
        let form = HotelForm::from_hotel(&existing);
        assert_eq!(form.amenities, "Pool, Spa");
    }

    #[test]
    fn test_image_url_shapes() {
        assert!(validate_image_url("https://images.unsplash.com/photo-1?w=800").is_ok());
        assert!(validate_image_url("http://example.com").is_ok());
        assert!(validate_image_url("ftp://example.com/a.jpg").is_err());
        assert!(validate_image_url("https://").is_err());
        assert!(validate_image_url("").is_err());
    }

    #[test]
    fn test_booking_form_prices_the_stay() {
        let form = BookingForm {
            check_in: date("2025-05-01"),
            check_out: date("2025-05-05"),
            guests: 2,
        };

        let new_booking = form
            .into_new_booking(&hotel(100.0), "consumer-1", date("2025-04-20"))
            .unwrap();
        assert_eq!(new_booking.total_price, 400.0);
        assert_eq!(new_booking.hotel_id, "h1");
        assert_eq!(new_booking.consumer_id, "consumer-1");
    }

    #[test]
    fn test_booking_form_rules() {
        let today = date("2025-05-01");
        let form = BookingForm {
            check_in: date("2025-04-30"),
            check_out: date("2025-04-30"),
            guests: 11,
        };

        let errors = form.validate(today).unwrap_err();
        assert!(errors.has("checkIn"));
        assert!(errors.has("checkOut"));
        assert!(errors.has("guests"));

        let zero_guests = BookingForm {
            check_in: today,
            check_out: date("2025-05-02"),
            guests: 0,
        };
        assert!(zero_guests.validate(today).unwrap_err().has("guests"));

        let ten_guests = BookingForm {
            guests: 10,
            ..zero_guests
        };
        assert!(ten_guests.validate(today).is_ok());
    }

    #[test]
    fn test_login_form() {
        let mut credentials = LoginCredentials {
            email: "consumer@example.com".to_string(),
            password: "password123".to_string(),
            role: Role::Consumer,
        };
        assert!(validate_login(&credentials).is_ok());

        credentials.email = "consumer".to_string();
        credentials.password = "123".to_string();
        let errors = validate_login(&credentials).unwrap_err();
        assert!(errors.has("email"));
        assert!(errors.has("password"));
        assert_eq!(errors.to_string(), "Please enter a valid email address; Password must be at least 6 characters");
    }
}
