pub mod formula;
pub mod ml_client;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use thiserror::Error;

use crate::{config::Config, models::model_input::ModelInput};
use formula::FormulaModel;
use ml_client::RemotePriceModel;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("price prediction failed: {0:#}")]
    Remote(#[from] anyhow::Error),
}

#[async_trait]
pub trait PriceModel: Send + Sync {
    async fn predict(&self, input: &ModelInput) -> Result<f64, ModelError>;

    async fn predict_batch(&self, inputs: &[ModelInput]) -> Result<Vec<f64>, ModelError> {
        let mut prices = Vec::with_capacity(inputs.len());
        for input in inputs {
            prices.push(self.predict(input).await?);
        }
        Ok(prices)
    }

    fn name(&self) -> &'static str;
}

/// Uses the remote prediction service when one is configured, the local
/// formula otherwise.
pub fn from_config(config: &Config) -> Result<Arc<dyn PriceModel>> {
    match &config.ml_service_url {
        Some(url) => {
            info!("Using remote price model at {}", url);
            Ok(Arc::new(RemotePriceModel::new(
                url,
                config.ml_request_timeout()?,
            )?))
        }
        None => {
            info!(
                "Using formula price model (reference year {})",
                config.reference_year()
            );
            Ok(Arc::new(FormulaModel::new(config.reference_year())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::create_test_config;

    #[test]
    fn defaults_to_formula() {
        let model = from_config(&create_test_config()).unwrap();
        assert_eq!(model.name(), "formula");
    }

    #[test]
    fn picks_remote_when_url_is_set() {
        let mut config = create_test_config();
        config.ml_service_url = Some("http://localhost:9000".to_string());
        let model = from_config(&config).unwrap();
        assert_eq!(model.name(), "remote");
    }
}
