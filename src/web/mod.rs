use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

mod extract;

pub use extract::{ApiJson, ApiPath, ApiQuery, ApiRejection};

use crate::{
    catalog::Catalog,
    config::Config,
    models::{
        model_input::ModelInput,
        property::{Comparison, PricedProperty},
    },
    pricing::PriceModel,
    services::comparisons::{self, ServiceError},
};

const COMPARISON_PAGE: &str = include_str!("../../static/index.html");

const ENDPOINTS: &[&str] = &[
    "GET / - Health check",
    "GET /properties - List sample properties (?q= to search)",
    "GET /properties/{id} - Sample property by id",
    "POST /compare - Compare two sample properties by id",
    "POST /compare-addresses - Compare two properties by address",
    "GET /lookup-address - Look up a single property by address",
    "POST /predict - Predict a price for custom features",
    "POST /predict/batch - Predict prices for a list of feature sets",
    "GET /ui - Comparison page",
];

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub model: Arc<dyn PriceModel>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub model: &'static str,
    pub endpoints: &'static [&'static str],
    pub timestamp: String,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct LookupQuery {
    pub address: String,
}

#[derive(Deserialize)]
pub struct CompareRequest {
    pub property_id_1: u32,
    pub property_id_2: u32,
}

#[derive(Deserialize)]
pub struct CompareAddressesRequest {
    #[serde(default)]
    pub address_1: String,
    #[serde(default)]
    pub address_2: String,
}

#[derive(Serialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
}

#[derive(Serialize)]
pub struct BatchPredictionResponse {
    pub predicted_prices: Vec<f64>,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::Address(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Invalid(_) | ServiceError::InvalidItem { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServiceError::Model(_) => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Rejected request: {}", self);
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/properties", get(list_properties))
        .route("/properties/:id", get(get_property))
        .route("/compare", post(compare_properties))
        .route("/compare-addresses", post(compare_addresses))
        .route("/lookup-address", get(lookup_address))
        .route("/predict", post(predict))
        .route("/predict/batch", post(predict_batch))
        .route("/ui", get(comparison_page))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .layer(middleware::from_fn(cors_layer))
        .with_state(state)
}

pub async fn start_http_server(
    state: AppState,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
) -> Result<()> {
    let bind_addr = state.config.http_bind_address();

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind http listener on {}", bind_addr))?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutting down HTTP server");
        })
        .await
        .context("HTTP server crashed")
}

/// Answers pre-flights directly and adds the CORS headers to every response.
async fn cors_layer(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(axum::body::Body::empty());
        apply_cors_headers(response.headers_mut());
        *response.status_mut() = StatusCode::NO_CONTENT;
        response
    } else {
        let mut response = next.run(req).await;
        apply_cors_headers(response.headers_mut());
        response
    }
}

fn apply_cors_headers(headers: &mut axum::http::HeaderMap) {
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Property Comparison API is running",
        model: state.model.name(),
        endpoints: ENDPOINTS,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn list_properties(
    State(state): State<AppState>,
    ApiQuery(SearchQuery { q }): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<PricedProperty>>, ServiceError> {
    let properties =
        comparisons::list_properties(&state.catalog, state.model.as_ref(), &q).await?;
    info!("Listed {} properties for query '{}'", properties.len(), q);
    Ok(Json(properties))
}

async fn get_property(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u32>,
) -> Result<Json<PricedProperty>, ServiceError> {
    let property = comparisons::get_property(&state.catalog, state.model.as_ref(), id).await?;
    info!("Priced property {}", id);
    Ok(Json(property))
}

async fn compare_properties(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CompareRequest>,
) -> Result<Json<Comparison>, ServiceError> {
    let comparison = comparisons::compare_properties(
        &state.catalog,
        state.model.as_ref(),
        body.property_id_1,
        body.property_id_2,
    )
    .await?;
    info!(
        "Compared properties {} and {}",
        body.property_id_1, body.property_id_2
    );
    Ok(Json(comparison))
}

async fn compare_addresses(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CompareAddressesRequest>,
) -> Result<Json<Comparison>, ServiceError> {
    comparisons::compare_addresses(state.model.as_ref(), &body.address_1, &body.address_2)
        .await
        .map(Json)
}

async fn lookup_address(
    State(state): State<AppState>,
    ApiQuery(LookupQuery { address }): ApiQuery<LookupQuery>,
) -> Result<Json<PricedProperty>, ServiceError> {
    let property = comparisons::lookup_address(state.model.as_ref(), &address).await?;
    info!("Looked up '{}' as property {}", address.trim(), property.property.id);
    Ok(Json(property))
}

async fn predict(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ModelInput>,
) -> Result<Json<PredictionResponse>, ServiceError> {
    let predicted_price = comparisons::predict(state.model.as_ref(), &input).await?;
    info!("Predicted {:.2} for a {} input", predicted_price, input.property_type);
    Ok(Json(PredictionResponse { predicted_price }))
}

async fn predict_batch(
    State(state): State<AppState>,
    ApiJson(inputs): ApiJson<Vec<ModelInput>>,
) -> Result<Json<BatchPredictionResponse>, ServiceError> {
    let predicted_prices = comparisons::predict_batch(state.model.as_ref(), &inputs).await?;
    info!("Predicted {} prices", predicted_prices.len());
    Ok(Json(BatchPredictionResponse { predicted_prices }))
}

async fn comparison_page() -> Html<&'static str> {
    Html(COMPARISON_PAGE)
}
