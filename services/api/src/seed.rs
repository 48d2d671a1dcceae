//! Seed data written on first access to an absent collection

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::{Booking, BookingStatus, Hotel};

struct SeedHotel {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    address: &'static str,
    price: f64,
    rating: f64,
    image: &'static str,
    rooms: u32,
    amenities: &'static [&'static str],
}

const SEED_PROVIDER: &str = "provider-1";

const SEED_HOTELS: [SeedHotel; 6] = [
    SeedHotel {
        id: "1",
        name: "The Ritz-Carlton Jakarta",
        description: "Experience luxury at its finest in the heart of Jakarta with world-class amenities and impeccable service.",
        address: "Jl. DR IDE Anak Agung Gde Agung Kav.E.1.1 No.1, Mega Kuningan, Jakarta",
        price: 3_500_000.0,
        rating: 4.8,
        image: "https://images.unsplash.com/photo-1566073771259-6a8506099945?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        rooms: 120,
        amenities: &["Pool", "Spa", "Gym", "Restaurant", "Bar", "Room service", "Free WiFi"],
    },
    SeedHotel {
        id: "2",
        name: "Ayana Resort Bali",
        description: "A stunning clifftop retreat overlooking the Indian Ocean, offering ultimate luxury and Balinese hospitality.",
        address: "Jl. Karang Mas Sejahtera, Jimbaran, Bali",
        price: 2_800_000.0,
        rating: 4.9,
        image: "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        rooms: 75,
        amenities: &["Private Beach", "Infinity Pool", "Spa", "Multiple Restaurants", "Bar", "Rock Bar"],
    },
    SeedHotel {
        id: "3",
        name: "Mandarin Oriental Jakarta",
        description: "Contemporary luxury hotel in the heart of Jakarta's financial and diplomatic district.",
        address: "Jl. M.H. Thamrin, Jakarta Pusat",
        price: 4_200_000.0,
        rating: 4.7,
        image: "https://images.unsplash.com/photo-1618773928121-c32242e63f44d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        rooms: 50,
        amenities: &["Pool", "Spa", "Gym", "Restaurant", "Bar", "Room service", "Free WiFi", "Business center"],
    },
    SeedHotel {
        id: "4",
        name: "Four Seasons Resort Jimbaran",
        description: "Luxurious beachfront villas with traditional Balinese architecture and modern amenities.",
        address: "Jimbaran Bay, Bali",
        price: 5_500_000.0,
        rating: 4.9,
        image: "https://images.unsplash.com/photo-1571896349842-33c89424de2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        rooms: 200,
        amenities: &["Private beach", "Pool", "Spa", "Gym", "Multiple restaurants", "Water sports"],
    },
    SeedHotel {
        id: "5",
        name: "Hotel Indonesia Kempinski Jakarta",
        description: "Historic luxury hotel with modern amenities in the heart of Jakarta.",
        address: "Jl. M.H. Thamrin No.1, Jakarta Pusat",
        price: 2_900_000.0,
        rating: 4.6,
        image: "https://images.unsplash.com/photo-1519449556851-5720b33024e7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        rooms: 150,
        amenities: &["Restaurant", "Bar", "Spa", "Free WiFi", "Room service", "Concierge"],
    },
    SeedHotel {
        id: "6",
        name: "Mulia Resort Nusa Dua",
        description: "Luxurious beachfront resort with world-class facilities and impeccable service.",
        address: "Jl. Raya Nusa Dua Selatan, Kawasan Sawangan, Nusa Dua, Bali",
        price: 3_800_000.0,
        rating: 4.8,
        image: "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        rooms: 100,
        amenities: &["Private Beach", "Multiple Pools", "Spa", "Restaurants", "Beach Club", "Fitness Center"],
    },
];

/// The six demo hotels, all owned by the seeded provider
pub fn seed_hotels() -> Vec<Hotel> {
    SEED_HOTELS
        .iter()
        .map(|seed| Hotel {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            address: seed.address.to_string(),
            price: seed.price,
            rating: seed.rating,
            image: seed.image.to_string(),
            rooms: seed.rooms,
            amenities: seed.amenities.iter().map(|a| a.to_string()).collect(),
            provider_id: SEED_PROVIDER.to_string(),
        })
        .collect()
}

/// The three demo bookings of the seeded consumer, one per status
pub fn seed_bookings() -> Vec<Booking> {
    vec![
        seed_booking(
            "1",
            "1",
            ((2025, 5, 1), (2025, 5, 5)),
            2,
            BookingStatus::Pending,
            1000.0,
            (2025, 4, 1, 12, 0),
        ),
        seed_booking(
            "2",
            "3",
            ((2025, 6, 10), (2025, 6, 15)),
            1,
            BookingStatus::Confirmed,
            1750.0,
            (2025, 4, 5, 9, 30),
        ),
        seed_booking(
            "3",
            "2",
            ((2025, 7, 20), (2025, 7, 25)),
            3,
            BookingStatus::Rejected,
            750.0,
            (2025, 4, 10, 15, 45),
        ),
    ]
}

type Ymd = (i32, u32, u32);

fn seed_booking(
    id: &str,
    hotel_id: &str,
    (check_in, check_out): (Ymd, Ymd),
    guests: u32,
    status: BookingStatus,
    total_price: f64,
    (y, mo, d, h, mi): (i32, u32, u32, u32, u32),
) -> Booking {
    Booking {
        id: id.to_string(),
        hotel_id: hotel_id.to_string(),
        consumer_id: "consumer-1".to_string(),
        check_in: ymd(check_in),
        check_out: ymd(check_out),
        guests,
        status,
        total_price,
        created_at: utc(y, mo, d, h, mi),
    }
}

fn ymd((y, m, d): Ymd) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}
