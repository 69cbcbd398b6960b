use async_trait::async_trait;

use super::{ModelError, PriceModel};
use crate::models::{model_input::ModelInput, property::PropertyType};

pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;
const FLOOR_PRICE: f64 = 25_000.0;

/// Hand-written pricing formula standing in for a trained model.
#[derive(Debug, Clone)]
pub struct FormulaModel {
    reference_year: i32,
}

impl Default for FormulaModel {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_YEAR)
    }
}

impl FormulaModel {
    pub fn new(reference_year: i32) -> Self {
        FormulaModel { reference_year }
    }

    pub fn price(&self, input: &ModelInput) -> f64 {
        let (area_component, type_bias) = match input.property_type {
            PropertyType::Sfh => (input.lot_area as f64 * 12.0, 65_000.0),
            PropertyType::Condo => (input.building_area as f64 * 220.0, 35_000.0),
        };

        let base = 75_000.0;
        let bedrooms = input.bedrooms as f64 * 32_500.0;
        let bathrooms = input.bathrooms as f64 * 27_500.0;
        let school = input.school_rating.clamp(1, 10) as f64 * 11_500.0;

        let age = (self.reference_year - input.year_built).max(0);
        let age_penalty = age as f64 * 900.0;

        let pool = if input.has_pool { 18_000.0 } else { 0.0 };
        let garage = if input.has_garage { 12_500.0 } else { 0.0 };

        let price = base + type_bias + area_component + bedrooms + bathrooms + school + pool
            + garage
            - age_penalty;

        round_cents(price).max(FLOOR_PRICE)
    }
}

#[async_trait]
impl PriceModel for FormulaModel {
    async fn predict(&self, input: &ModelInput) -> Result<f64, ModelError> {
        Ok(self.price(input))
    }

    fn name(&self) -> &'static str {
        "formula"
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
