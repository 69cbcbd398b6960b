use futures::try_join;
use log::info;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    generator::{self, GeneratorError},
    models::{
        model_input::{ModelInput, ValidationError},
        property::{Comparison, PricedProperty, Property},
    },
    pricing::{ModelError, PriceModel},
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Address(#[from] GeneratorError),
    #[error("Property {0} not found")]
    NotFound(u32),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("item {index}: {source}")]
    InvalidItem {
        index: usize,
        source: ValidationError,
    },
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

pub async fn price(model: &dyn PriceModel, property: Property) -> Result<PricedProperty> {
    let predicted = model.predict(&property.model_input()).await?;
    Ok(property.priced(predicted))
}

pub async fn list_properties(
    catalog: &Catalog,
    model: &dyn PriceModel,
    query: &str,
) -> Result<Vec<PricedProperty>> {
    let properties: Vec<Property> = catalog.search(query).into_iter().cloned().collect();
    let inputs: Vec<ModelInput> = properties.iter().map(Property::model_input).collect();
    let prices = model.predict_batch(&inputs).await?;

    Ok(properties
        .into_iter()
        .zip(prices)
        .map(|(property, predicted)| property.priced(predicted))
        .collect())
}

pub async fn get_property(
    catalog: &Catalog,
    model: &dyn PriceModel,
    id: u32,
) -> Result<PricedProperty> {
    let property = catalog.get(id).cloned().ok_or(ServiceError::NotFound(id))?;
    price(model, property).await
}

pub async fn compare_properties(
    catalog: &Catalog,
    model: &dyn PriceModel,
    first_id: u32,
    second_id: u32,
) -> Result<Comparison> {
    let first = catalog
        .get(first_id)
        .cloned()
        .ok_or(ServiceError::NotFound(first_id))?;
    let second = catalog
        .get(second_id)
        .cloned()
        .ok_or(ServiceError::NotFound(second_id))?;

    let (property_1, property_2) = try_join!(price(model, first), price(model, second))?;
    Ok(Comparison {
        property_1,
        property_2,
    })
}

/// Generates a property for each address and prices both.
pub async fn compare_addresses(
    model: &dyn PriceModel,
    first_address: &str,
    second_address: &str,
) -> Result<Comparison> {
    let first = generator::generate(first_address)?;
    let second = generator::generate(second_address)?;

    let (property_1, property_2) = try_join!(price(model, first), price(model, second))?;
    info!(
        "Compared '{}' ({:.0}) with '{}' ({:.0})",
        first_address.trim(),
        property_1.predicted_price.unwrap_or_default(),
        second_address.trim(),
        property_2.predicted_price.unwrap_or_default()
    );

    Ok(Comparison {
        property_1,
        property_2,
    })
}

pub async fn lookup_address(model: &dyn PriceModel, address: &str) -> Result<PricedProperty> {
    let property = generator::generate(address)?;
    price(model, property).await
}

pub async fn predict(model: &dyn PriceModel, input: &ModelInput) -> Result<f64> {
    input.validate()?;
    Ok(model.predict(input).await?)
}

pub async fn predict_batch(model: &dyn PriceModel, inputs: &[ModelInput]) -> Result<Vec<f64>> {
    for (index, input) in inputs.iter().enumerate() {
        input
            .validate()
            .map_err(|source| ServiceError::InvalidItem { index, source })?;
    }
    Ok(model.predict_batch(inputs).await?)
}
