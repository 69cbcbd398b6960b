use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::warn;
use serde_json::json;

/// An extractor failure, answered with the same `{"detail"}` body as
/// service errors.
#[derive(Debug)]
pub struct ApiRejection {
    pub status: StatusCode,
    pub detail: String,
}

impl From<JsonRejection> for ApiRejection {
    fn from(rejection: JsonRejection) -> Self {
        // Unparseable and ill-typed bodies are both validation failures.
        let status = match &rejection {
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => rejection.status(),
        };
        ApiRejection {
            status,
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiRejection {
    fn from(rejection: QueryRejection) -> Self {
        ApiRejection {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiRejection {
    fn from(rejection: PathRejection) -> Self {
        ApiRejection {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        warn!("Rejected request: {} {}", self.status, self.detail);
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiRejection))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiRejection))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiRejection))]
pub struct ApiPath<T>(pub T);
