use crate::models::property::PropertyType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityProfile {
    pub name: &'static str,
    pub avg_price: u64,
    pub school_rating: u8,
    pub property_type: PropertyType,
    pub sqft_range: (u32, u32),
}

const fn city(
    name: &'static str,
    avg_price: u64,
    school_rating: u8,
    property_type: PropertyType,
    sqft_range: (u32, u32),
) -> CityProfile {
    CityProfile {
        name,
        avg_price,
        school_rating,
        property_type,
        sqft_range,
    }
}

// Matched in order, first substring hit wins.
pub const CITIES: &[CityProfile] = &[
    city("new york", 850000, 8, PropertyType::Condo, (800, 2000)),
    city("manhattan", 1200000, 9, PropertyType::Condo, (600, 1800)),
    city("brooklyn", 750000, 7, PropertyType::Condo, (900, 2200)),
    city("los angeles", 950000, 7, PropertyType::Sfh, (1500, 3500)),
    city("san francisco", 1400000, 9, PropertyType::Condo, (800, 2000)),
    city("miami", 550000, 6, PropertyType::Condo, (1000, 2500)),
    city("chicago", 450000, 7, PropertyType::Condo, (1000, 2200)),
    city("boston", 750000, 9, PropertyType::Condo, (800, 1800)),
    city("seattle", 800000, 8, PropertyType::Sfh, (1200, 2800)),
    city("austin", 550000, 8, PropertyType::Sfh, (1500, 3000)),
    city("dallas", 450000, 7, PropertyType::Sfh, (1800, 3500)),
    city("denver", 600000, 8, PropertyType::Sfh, (1400, 2800)),
    city("phoenix", 450000, 6, PropertyType::Sfh, (1600, 3200)),
    city("atlanta", 400000, 7, PropertyType::Sfh, (1500, 3000)),
];

pub const DEFAULT_AVG_PRICE: u64 = 500000;
pub const DEFAULT_SCHOOL_RATING: u8 = 7;
pub const DEFAULT_SQFT_RANGE: (u32, u32) = (1000, 2500);

pub const AMENITY_SETS: &[&[&str]] = &[
    &["Gym", "Swimming Pool", "Parking", "Doorman"],
    &["Garden", "Garage", "Central AC", "Fireplace"],
    &["Rooftop Terrace", "Smart Home", "Security System"],
    &["Beach Access", "Balcony", "In-Unit Laundry"],
    &["Private Dock", "BBQ Area", "Pet Friendly"],
    &["Home Office", "Solar Panels", "EV Charging"],
    &["Community Pool", "Tennis Court", "Clubhouse"],
    &["Park View", "Concierge", "Fitness Center"],
];

pub const IMAGES: &[&str] = &[
    "https://images.pexels.com/photos/106399/pexels-photo-106399.jpeg",
    "https://images.pexels.com/photos/259588/pexels-photo-259588.jpeg",
    "https://images.pexels.com/photos/323780/pexels-photo-323780.jpeg",
    "https://images.pexels.com/photos/271624/pexels-photo-271624.jpeg",
    "https://images.pexels.com/photos/534151/pexels-photo-534151.jpeg",
    "https://images.pexels.com/photos/1396122/pexels-photo-1396122.jpeg",
    "https://images.pexels.com/photos/1029599/pexels-photo-1029599.jpeg",
    "https://images.pexels.com/photos/2102587/pexels-photo-2102587.jpeg",
];

pub fn find_city(address_lower: &str) -> Option<&'static CityProfile> {
    CITIES.iter().find(|city| address_lower.contains(city.name))
}

pub fn title_for(property_type: PropertyType, bedrooms: u32, variant: usize) -> String {
    match (property_type, variant % 4) {
        (PropertyType::Condo, 0) => format!("{} BR Condo", bedrooms),
        (PropertyType::Condo, 1) => format!("Modern {} Bedroom Apartment", bedrooms),
        (PropertyType::Condo, 2) => format!("Luxury {}BR Unit", bedrooms),
        (PropertyType::Condo, _) => format!("Stylish {} Bed Condo", bedrooms),
        (PropertyType::Sfh, 0) => format!("{} BR Single Family Home", bedrooms),
        (PropertyType::Sfh, 1) => format!("Beautiful {} Bedroom House", bedrooms),
        (PropertyType::Sfh, 2) => format!("Spacious {}BR Home", bedrooms),
        (PropertyType::Sfh, _) => format!("Charming {} Bed House", bedrooms),
    }
}
