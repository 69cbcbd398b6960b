use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_this_or_that::as_f64;

use super::{ModelError, PriceModel};
use crate::models::model_input::ModelInput;

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    #[serde(deserialize_with = "as_f64")]
    predicted_price: f64,
}

/// Price model served over HTTP by an external prediction service.
#[derive(Debug, Clone)]
pub struct RemotePriceModel {
    client: reqwest::Client,
    url: String,
}

impl RemotePriceModel {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .context("Failed to build prediction service client")?;

        Ok(RemotePriceModel {
            client,
            url: format!("{}/predict", base_url.trim_end_matches('/')),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self, input: &ModelInput) -> Result<f64> {
        let response = self
            .client
            .post(&self.url)
            .json(input)
            .send()
            .await
            .context("Failed to reach price prediction service")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(anyhow!("Price prediction endpoint not found (404)"));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Price prediction service responded with error {}: {}",
                status,
                body
            ));
        }

        let parsed: PredictionResponse = response
            .json()
            .await
            .context("Failed to deserialize price prediction response")?;

        Ok(parsed.predicted_price)
    }
}

#[async_trait]
impl PriceModel for RemotePriceModel {
    async fn predict(&self, input: &ModelInput) -> Result<f64, ModelError> {
        Ok(self.request(input).await?)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode as HttpStatus, routing::post, Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use super::*;
    use crate::models::property::PropertyType;

    fn condo(building_area: u32) -> ModelInput {
        ModelInput {
            property_type: PropertyType::Condo,
            lot_area: 0,
            building_area,
            bedrooms: 1,
            bathrooms: 1,
            year_built: 2000,
            has_pool: false,
            has_garage: false,
            school_rating: 5,
        }
    }

    // Serves `/ok/predict` (echoes the building area as a string price) and
    // `/broken/predict` (always 500); everything else is a 404.
    async fn spawn_prediction_service() -> String {
        let app = Router::new()
            .route(
                "/ok/predict",
                post(|Json(input): Json<ModelInput>| async move {
                    Json(json!({ "predicted_price": format!("{}.5", input.building_area) }))
                }),
            )
            .route(
                "/broken/predict",
                post(|Json(_): Json<Value>| async { (HttpStatus::INTERNAL_SERVER_ERROR, "boom") }),
            );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn reads_price_from_service() {
        let base = spawn_prediction_service().await;
        let model = RemotePriceModel::new(&format!("{base}/ok"), None).unwrap();
        assert_eq!(model.predict(&condo(123)).await.unwrap(), 123.5);
    }

    #[tokio::test]
    async fn server_error_is_reported_with_status() {
        let base = spawn_prediction_service().await;
        let model = RemotePriceModel::new(&format!("{base}/broken"), None).unwrap();
        let err = model.predict(&condo(800)).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("500"), "{message}");
        assert!(message.contains("boom"), "{message}");
    }

    #[tokio::test]
    async fn missing_endpoint_is_reported_as_404() {
        let base = spawn_prediction_service().await;
        let model = RemotePriceModel::new(&format!("{base}/elsewhere"), None).unwrap();
        let err = model.predict(&condo(800)).await.unwrap_err();
        assert!(matches!(err, ModelError::Remote(_)));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn predict_path_is_appended_once() {
        let model = RemotePriceModel::new("http://prices.local/", None).unwrap();
        assert_eq!(model.url(), "http://prices.local/predict");
    }

    #[test]
    fn accepts_numeric_strings() {
        let parsed: PredictionResponse =
            serde_json::from_str(r#"{"predicted_price": "412000.5"}"#).unwrap();
        assert_eq!(parsed.predicted_price, 412000.5);
        let parsed: PredictionResponse =
            serde_json::from_str(r#"{"predicted_price": 99000}"#).unwrap();
        assert_eq!(parsed.predicted_price, 99000.0);
    }

    #[tokio::test]
    async fn unreachable_service_is_a_model_error() {
        let model =
            RemotePriceModel::new("http://127.0.0.1:9", Some(Duration::from_millis(500))).unwrap();
        let err = model.predict(&condo(800)).await.unwrap_err();
        assert!(err.to_string().contains("Failed to reach"));
    }
}
