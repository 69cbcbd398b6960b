pub mod helpers;
pub mod tables;

use log::debug;
use thiserror::Error;

use crate::models::property::{Property, PropertyType};
use helpers::{display_location, hash_address};
use tables::{
    find_city, title_for, AMENITY_SETS, DEFAULT_AVG_PRICE, DEFAULT_SCHOOL_RATING,
    DEFAULT_SQFT_RANGE, IMAGES,
};

#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    #[error("Address cannot be empty")]
    EmptyAddress,
}

/// Builds a plausible property for `address`.
///
/// Every feature is drawn from the address hash, so the same address always
/// produces the same property. A recognised city in the address picks the
/// price level, school rating, property type and size range.
pub fn generate(address: &str) -> Result<Property, GeneratorError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(GeneratorError::EmptyAddress);
    }

    let hash = hash_address(address);
    let address_lower = address.to_lowercase();

    let (avg_price, base_school, property_type, (sqft_min, sqft_max)) =
        match find_city(&address_lower) {
            Some(city) => (
                city.avg_price,
                city.school_rating,
                city.property_type,
                city.sqft_range,
            ),
            None => {
                let property_type = if hash % 2 == 0 {
                    PropertyType::Sfh
                } else {
                    PropertyType::Condo
                };
                (
                    DEFAULT_AVG_PRICE,
                    DEFAULT_SCHOOL_RATING,
                    property_type,
                    DEFAULT_SQFT_RANGE,
                )
            }
        };

    let size_sqft = sqft_min + (hash % u64::from(sqft_max - sqft_min)) as u32;
    let bedrooms = 1 + (hash % 5) as u32;
    let bathrooms = 1 + (hash % 4) as u32;
    let year_built = (1960 + (hash % 60) as i32).min(2024);

    let multiplier = 0.8 + (hash % 40) as f64 / 100.0;
    let listed_price = (avg_price as f64 * multiplier * (size_sqft as f64 / 1500.0)) as u64;

    let amenities = pick_amenities(hash);
    let has_pool = amenities.iter().any(|a| a.to_lowercase().contains("pool"));
    let has_garage = amenities.iter().any(|a| {
        let a = a.to_lowercase();
        a.contains("garage") || a.contains("parking")
    });

    let school_rating = (i32::from(base_school) + (hash % 3) as i32 - 1).clamp(1, 10) as u8;
    let image_url = IMAGES[(hash % IMAGES.len() as u64) as usize].to_string();
    let title = title_for(property_type, bedrooms, (hash % 4) as usize);
    let (lot_area, building_area) = Property::areas(property_type, size_sqft);

    debug!("Generated {} for '{}' (hash {})", property_type, address, hash);

    Ok(Property {
        id: (hash % 100_000) as u32,
        address: Some(address.to_string()),
        title,
        listed_price,
        location: display_location(address),
        size_sqft,
        amenities,
        image_url,
        property_type,
        lot_area,
        building_area,
        bedrooms,
        bathrooms,
        year_built,
        has_pool,
        has_garage,
        school_rating,
    })
}

// First two amenities of two sets, de-duplicated in order.
fn pick_amenities(hash: u64) -> Vec<String> {
    let sets = AMENITY_SETS.len() as u64;
    let first = AMENITY_SETS[(hash % sets) as usize];
    let second = AMENITY_SETS[((hash + 3) % sets) as usize];

    let mut amenities: Vec<String> = Vec::with_capacity(4);
    for amenity in first.iter().take(2).chain(second.iter().take(2)) {
        if !amenities.iter().any(|a| a == amenity) {
            amenities.push(amenity.to_string());
        }
    }
    amenities
}
