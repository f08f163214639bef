use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid cookie header: {0}")]
    InvalidCookie(String),
}

impl From<axum::http::header::InvalidHeaderValue> for ServerError {
    fn from(err: axum::http::header::InvalidHeaderValue) -> Self {
        ServerError::InvalidCookie(err.to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("❌ [SERVER] {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
