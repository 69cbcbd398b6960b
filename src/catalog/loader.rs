use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_this_or_that::as_u64;

use crate::models::property::{Property, PropertyType};

pub const BASIC_FILE: &str = "properties_basic.json";
pub const FEATURES_FILE: &str = "properties_features.json";
pub const IMAGES_FILE: &str = "properties_images.json";

lazy_static! {
    static ref CONDO_TITLE: Regex =
        Regex::new(r"(?i)apartment|condo|studio|penthouse|flat|unit").unwrap();
    static ref HOUSE_TITLE: Regex =
        Regex::new(r"(?i)villa|house|townhouse|duplex|home|cottage|bungalow").unwrap();
    static ref POOL_AMENITY: Regex = Regex::new(r"(?i)pool|swimming").unwrap();
    static ref GARAGE_AMENITY: Regex = Regex::new(r"(?i)garage|parking|carport").unwrap();
}

const CITY_SCHOOL_RATINGS: &[(&str, i32)] = &[
    ("new york", 8),
    ("san francisco", 9),
    ("boston", 9),
    ("seattle", 8),
    ("los angeles", 7),
    ("chicago", 7),
    ("miami", 6),
    ("dallas", 7),
    ("austin", 8),
];

#[derive(Debug, Deserialize)]
pub struct BasicRecord {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "as_u64")]
    pub price: u64,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct FeatureRecord {
    pub id: u32,
    pub size_sqft: Option<u32>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImageRecord {
    pub id: u32,
    #[serde(default)]
    pub image_url: String,
}

fn read_json<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);
    let reader = File::open(&path)
        .map(BufReader::new)
        .with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::from_reader(reader).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn load_dir(dir: &Path) -> Result<Vec<Property>> {
    let basic: Vec<BasicRecord> = read_json(dir, BASIC_FILE)?;
    let features: Vec<FeatureRecord> = read_json(dir, FEATURES_FILE)?;
    let images: Vec<ImageRecord> = read_json(dir, IMAGES_FILE)?;
    Ok(merge(basic, features, images))
}

/// Joins the three record sets by id. Basic records decide which listings
/// exist; missing features or images fall back to defaults.
pub fn merge(
    basic: Vec<BasicRecord>,
    features: Vec<FeatureRecord>,
    images: Vec<ImageRecord>,
) -> Vec<Property> {
    let mut features: HashMap<u32, FeatureRecord> =
        features.into_iter().map(|f| (f.id, f)).collect();
    let mut images: HashMap<u32, ImageRecord> = images.into_iter().map(|i| (i.id, i)).collect();

    basic
        .into_iter()
        .map(|record| {
            let feature = features.remove(&record.id);
            let image_url = images
                .remove(&record.id)
                .map(|i| i.image_url)
                .unwrap_or_default();

            let size_sqft = feature.as_ref().and_then(|f| f.size_sqft).unwrap_or(1000);
            let bedrooms = feature.as_ref().and_then(|f| f.bedrooms).unwrap_or(2);
            let bathrooms = feature.as_ref().and_then(|f| f.bathrooms).unwrap_or(1);
            let amenities = feature.map(|f| f.amenities).unwrap_or_default();

            let property_type = infer_property_type(&record.title);
            let (lot_area, building_area) = Property::areas(property_type, size_sqft);

            Property {
                id: record.id,
                address: None,
                listed_price: record.price,
                year_built: estimate_year_built(record.id, size_sqft, record.price),
                school_rating: estimate_school_rating(&record.location, record.id),
                has_pool: amenities.iter().any(|a| POOL_AMENITY.is_match(a)),
                has_garage: amenities.iter().any(|a| GARAGE_AMENITY.is_match(a)),
                title: record.title,
                location: record.location,
                size_sqft,
                amenities,
                image_url,
                property_type,
                lot_area,
                building_area,
                bedrooms,
                bathrooms,
            }
        })
        .collect()
}

pub fn infer_property_type(title: &str) -> PropertyType {
    if CONDO_TITLE.is_match(title) {
        PropertyType::Condo
    } else if HOUSE_TITLE.is_match(title) {
        PropertyType::Sfh
    } else {
        PropertyType::Condo
    }
}

/// Pricier and larger listings skew newer.
pub fn estimate_year_built(id: u32, size_sqft: u32, price: u64) -> i32 {
    let price_bonus = match price {
        p if p > 1_000_000 => 35,
        p if p > 700_000 => 25,
        p if p > 400_000 => 15,
        _ => 0,
    };
    let size_bonus = match size_sqft {
        s if s > 2500 => 10,
        s if s > 1500 => 5,
        _ => 0,
    };
    let variance = ((u64::from(id) * 3) % 15) as i32;

    (1970 + price_bonus + size_bonus + variance).clamp(1950, 2024)
}

pub fn estimate_school_rating(location: &str, id: u32) -> u8 {
    let location = location.to_lowercase();
    let base = CITY_SCHOOL_RATINGS
        .iter()
        .find(|(city, _)| location.contains(city))
        .map(|(_, rating)| *rating)
        .unwrap_or(6);
    let variance = (id % 3) as i32 - 1;

    (base + variance).clamp(1, 10) as u8
}
