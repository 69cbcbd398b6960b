use std::fmt;

use serde::{Deserialize, Serialize};

use super::model_input::ModelInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "SFH")]
    Sfh,
    Condo,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Sfh => write!(f, "SFH"),
            PropertyType::Condo => write!(f, "Condo"),
        }
    }
}

/// A single property, either generated from an address or read from the
/// bundled catalog. `lot_area` and `building_area` only feed the price model
/// and are left out of API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub id: u32,
    pub address: Option<String>,
    pub title: String,
    pub listed_price: u64,
    pub location: String,
    pub size_sqft: u32,
    pub amenities: Vec<String>,
    pub image_url: String,
    pub property_type: PropertyType,
    #[serde(skip_serializing)]
    pub lot_area: u32,
    #[serde(skip_serializing)]
    pub building_area: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub year_built: i32,
    pub has_pool: bool,
    pub has_garage: bool,
    pub school_rating: u8,
}

impl Property {
    /// Splits `size_sqft` into lot or building area depending on the type.
    pub fn areas(property_type: PropertyType, size_sqft: u32) -> (u32, u32) {
        match property_type {
            PropertyType::Sfh => (size_sqft, 0),
            PropertyType::Condo => (0, size_sqft),
        }
    }

    pub fn model_input(&self) -> ModelInput {
        ModelInput {
            property_type: self.property_type,
            lot_area: self.lot_area,
            building_area: self.building_area,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            year_built: self.year_built,
            has_pool: self.has_pool,
            has_garage: self.has_garage,
            school_rating: self.school_rating,
        }
    }

    pub fn priced(self, predicted_price: f64) -> PricedProperty {
        PricedProperty {
            property: self,
            predicted_price: Some(predicted_price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedProperty {
    #[serde(flatten)]
    pub property: Property,
    pub predicted_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub property_1: PricedProperty,
    pub property_2: PricedProperty,
}
