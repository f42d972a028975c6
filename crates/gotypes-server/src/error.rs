//! Error handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Server error type.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be acquired.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an IO error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The catalog could not be encoded.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ServerError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ServerError::Bind { .. } => "BIND_ERROR",
            ServerError::Serve(_) => "SERVER_ERROR",
            ServerError::Serialize(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false.
    pub success: bool,
    /// Error detail.
    pub error: ErrorDetail,
}

/// Error code and message.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        let body = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: self.code(),
                message: self.to_string(),
            },
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
