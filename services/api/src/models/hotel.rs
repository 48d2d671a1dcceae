//! Hotel models

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Hotel listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    /// Price per night
    pub price: f64,
    /// Between 0 and 5, 0 for hotels nobody has rated yet
    pub rating: f64,
    pub image: String,
    pub rooms: u32,
    pub amenities: Vec<String>,
    pub provider_id: String,
}

/// Payload for creating a hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    pub name: String,
    pub description: String,
    pub address: String,
    pub price: f64,
    pub image: String,
    #[serde(deserialize_with = "deserialize_room_count")]
    pub rooms: u32,
    pub amenities: Vec<String>,
    pub provider_id: String,
}

/// Partial update of a hotel; absent fields keep their current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotel {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_room_count")]
    pub rooms: Option<u32>,
    pub amenities: Option<Vec<String>>,
    pub provider_id: Option<String>,
}

impl Hotel {
    /// Build a hotel from a create payload; new hotels start unrated
    pub fn from_new(id: String, new_hotel: NewHotel) -> Self {
        Self {
            id,
            name: new_hotel.name,
            description: new_hotel.description,
            address: new_hotel.address,
            price: new_hotel.price,
            rating: 0.0,
            image: new_hotel.image,
            rooms: new_hotel.rooms,
            amenities: new_hotel.amenities,
            provider_id: new_hotel.provider_id,
        }
    }

    /// Merge the fields present in `update` over this hotel
    pub fn apply(&mut self, update: UpdateHotel) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(rooms) = update.rooms {
            self.rooms = rooms;
        }
        if let Some(amenities) = update.amenities {
            self.amenities = amenities;
        }
        if let Some(provider_id) = update.provider_id {
            self.provider_id = provider_id;
        }
    }
}

impl From<NewHotel> for UpdateHotel {
    /// Full replacement of the editable fields, as sent by the edit form
    fn from(new_hotel: NewHotel) -> Self {
        Self {
            name: Some(new_hotel.name),
            description: Some(new_hotel.description),
            address: Some(new_hotel.address),
            price: Some(new_hotel.price),
            rating: None,
            image: Some(new_hotel.image),
            rooms: Some(new_hotel.rooms),
            amenities: Some(new_hotel.amenities),
            provider_id: Some(new_hotel.provider_id),
        }
    }
}

/// Search and price-range filter for the hotel listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelFilter {
    /// Matched case-insensitively against name and address; empty matches all
    pub search: String,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for HotelFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            min_price: 0.0,
            max_price: f64::MAX,
        }
    }
}

impl HotelFilter {
    /// Reject a range whose maximum is below its minimum
    pub fn validate(&self) -> Result<(), String> {
        if self.max_price < self.min_price {
            return Err("Max price must be greater than min price".to_string());
        }
        Ok(())
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        // The term is matched as typed, surrounding whitespace included
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty()
            || hotel.name.to_lowercase().contains(&search)
            || hotel.address.to_lowercase().contains(&search);

        matches_search && hotel.price >= self.min_price && hotel.price <= self.max_price
    }

    /// Keep the matching hotels, preserving order
    pub fn apply(&self, hotels: Vec<Hotel>) -> Vec<Hotel> {
        hotels.into_iter().filter(|h| self.matches(h)).collect()
    }
}

/// Split a comma-joined amenities field into trimmed, non-empty labels
pub fn parse_amenities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Coerce a room count the way a lenient form field would
///
/// Numbers are truncated, strings are read up to their first non-digit, and
/// anything negative or unreadable becomes 0.
pub fn coerce_room_count(value: &Value) -> u32 {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(count) => u32::try_from(count).unwrap_or(u32::MAX),
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && *f > 0.0)
                .map(|f| f.trunc().min(u32::MAX as f64) as u32)
                .unwrap_or(0),
        },
        Value::String(s) => {
            let trimmed = s.trim_start();
            let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
            let end = digits
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(digits.len());
            digits[..end].parse::<u32>().unwrap_or(0)
        }
        _ => 0,
    }
}

fn deserialize_room_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_room_count(&value))
}

fn deserialize_optional_room_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_room_count))
}
