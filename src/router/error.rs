//! HTTP mapping for [`ShopError`]

use crate::error::ShopError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

impl ShopError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShopError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
            ShopError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            ShopError::DuplicateProduct(_) | ShopError::OutOfStock(_) => StatusCode::CONFLICT,
            ShopError::CatalogUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ShopError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
