use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::property::PropertyType;

pub const MIN_YEAR_BUILT: i32 = 1600;
pub const MAX_YEAR_BUILT: i32 = 2100;

/// The feature set the price model understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInput {
    pub property_type: PropertyType,
    #[serde(default)]
    pub lot_area: u32,
    #[serde(default)]
    pub building_area: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub year_built: i32,
    pub has_pool: bool,
    pub has_garage: bool,
    pub school_rating: u8,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("year_built must be between 1600 and 2100 (got {0})")]
    YearBuilt(i32),
    #[error("school_rating must be between 1 and 10 (got {0})")]
    SchoolRating(u8),
}

impl ModelInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_YEAR_BUILT..=MAX_YEAR_BUILT).contains(&self.year_built) {
            return Err(ValidationError::YearBuilt(self.year_built));
        }
        if !(1..=10).contains(&self.school_rating) {
            return Err(ValidationError::SchoolRating(self.school_rating));
        }
        Ok(())
    }
}
