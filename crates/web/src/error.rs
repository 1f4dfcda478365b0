use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::DuplicateKey(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::NoChanges) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::Storage(StorageError::Database(e)) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": e.to_string()
                })
            }
            Self::Storage(e) => {
                json!({
                    "error": e.to_string()
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}
